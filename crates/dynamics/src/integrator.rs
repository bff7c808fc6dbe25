//! # State Integration
//!
//! Semi-implicit Euler phases for the six-component state: velocities are
//! updated from forces and gravity first, then positions and orientation
//! are advanced from the already-updated velocities.

use crate::types::{State, Vec2};

/// Softening constant on force-driven linear velocity updates. Gravity and
/// angular updates integrate unscaled; changing this changes the dynamics.
pub const FORCE_VELOCITY_DAMPING: f32 = 0.01;

/// Fold motor force and torque into the velocity components.
pub fn apply_forces(
    state: &mut State,
    net_force: Vec2,
    net_torque: f32,
    mass: f32,
    inertia: f32,
    dt: f32,
) {
    state.vx += net_force.x / mass * dt * FORCE_VELOCITY_DAMPING;
    state.vy += net_force.y / mass * dt * FORCE_VELOCITY_DAMPING;
    state.omega += net_torque / inertia * dt;
}

/// Fold gravity into the vertical velocity. No damping scale here.
pub fn apply_gravity(state: &mut State, gravity: f32, dt: f32) {
    state.vy += gravity * dt;
}

/// Advance position and orientation from the current velocities, then wrap
/// the orientation back into `(-PI, PI]`.
pub fn integrate_timestep(state: &mut State, dt: f32) {
    state.x += state.vx * dt;
    state.y += state.vy * dt;
    state.theta += state.omega * dt;
    state.theta = state.theta.sin().atan2(state.theta.cos());
}
