//! # Flight Dynamics Engine
//!
//! The per-instance simulation core: owns one mutable state vector and a
//! seeded random generator, and composes the per-tick phases into `step`.

use std::sync::Arc;

use crate::config::DroneConfig;
use crate::error::DynamicsError;
use crate::types::{State, StateBounds};
use crate::{action, boundary, forces, integrator, reward};

/// Result of one simulated tick.
#[derive(Copy, Clone, Debug)]
pub struct StepOutcome {
    /// Snapshot of the state after boundary enforcement
    pub state: State,
    /// Scalar reward for this transition
    pub reward: f32,
    /// True when a boundary clamp fired; the caller is responsible for
    /// resetting, stepping continues to work either way
    pub done: bool,
}

/// Planar flight dynamics engine for a single drone.
///
/// Instances are fully independent: the configuration is shared read-only
/// through an [`Arc`], the state and the random generator are owned, so
/// parallel rollouts need no coordination. Every call is synchronous and
/// `O(motor count)`.
pub struct FlightEngine {
    config: Arc<DroneConfig>,
    bounds: StateBounds,
    state: State,
    dt: f32,
    rng: fastrand::Rng,
}

impl FlightEngine {
    /// Create an engine with a validated configuration, an update frequency
    /// in Hz (`dt = 1 / update_frequency`), and a seed for this instance's
    /// generator. The state starts from a seeded [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Fails fast with a [`DynamicsError`] for an invalid configuration or
    /// a non-positive update frequency; no partial engine is produced.
    pub fn new(
        config: Arc<DroneConfig>,
        update_frequency: f32,
        seed: u64,
    ) -> Result<Self, DynamicsError> {
        config.validate()?;
        if !update_frequency.is_finite() || update_frequency <= 0.0 {
            return Err(DynamicsError::InvalidScalar {
                name: "update frequency",
                value: update_frequency,
            });
        }

        let mut engine = Self {
            config,
            bounds: StateBounds::default(),
            state: State::default(),
            dt: 1.0 / update_frequency,
            rng: fastrand::Rng::with_seed(seed),
        };
        engine.reset();
        Ok(engine)
    }

    /// Reinitialize the state with independent uniform perturbations around
    /// zero: positions and velocities in `[-0.1, 0.1]`, orientation and
    /// angular velocity in `[-0.5, 0.5]`. Returns the new state.
    pub fn reset(&mut self) -> State {
        const POSITION_RANGE: f32 = 0.1;
        const VELOCITY_RANGE: f32 = 0.1;
        const ROTATION_RANGE: f32 = 0.5;
        const ANGULAR_VELOCITY_RANGE: f32 = 0.5;

        self.state = State {
            x: self.uniform(POSITION_RANGE),
            vx: self.uniform(VELOCITY_RANGE),
            y: self.uniform(POSITION_RANGE),
            vy: self.uniform(VELOCITY_RANGE),
            theta: self.uniform(ROTATION_RANGE),
            omega: self.uniform(ANGULAR_VELOCITY_RANGE),
        };
        self.state
    }

    /// Reseed this instance's generator, then reset. No process-wide random
    /// state exists, so parallel engines never interfere.
    pub fn reset_seeded(&mut self, seed: u64) -> State {
        self.rng.seed(seed);
        self.reset()
    }

    /// Advance the simulation by one tick under the given discrete action.
    ///
    /// Phases, in order: decode the action, accumulate motor force/torque,
    /// fold forces then gravity into the velocities, integrate positions
    /// and orientation (wrapping `theta`), clamp into the envelope, and
    /// compute the reward from the clamp outcome. Termination does not
    /// reset the state.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::InvalidAction`] when `action` does not fit
    /// in the motor-count bits. The state is untouched in that case.
    pub fn step(&mut self, action: u32) -> Result<StepOutcome, DynamicsError> {
        let flags = action::decode(action, self.config.motors.len())?;

        let (net_force, net_torque) = forces::accumulate(&self.config, self.state.theta, &flags);
        integrator::apply_forces(
            &mut self.state,
            net_force,
            net_torque,
            self.config.mass,
            self.config.inertia,
            self.dt,
        );
        integrator::apply_gravity(&mut self.state, self.config.gravity, self.dt);
        integrator::integrate_timestep(&mut self.state, self.dt);

        let done = boundary::enforce(&mut self.state, &self.bounds);
        if done {
            tracing::debug!(x = self.state.x, y = self.state.y, "state clamped; episode done");
        }
        let reward = reward::compute(&self.state, done, self.config.target_distance);

        Ok(StepOutcome { state: self.state, reward, done })
    }

    /// Read-only snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Overwrite the state vector. Intended for scripted scenarios and
    /// tests; the next `step` re-applies boundary enforcement as usual.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Shared configuration this engine runs under.
    #[must_use]
    pub fn config(&self) -> &DroneConfig {
        &self.config
    }

    /// Timestep in seconds derived from the update frequency.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Size of the discrete action space, `2^motor count`.
    #[must_use]
    pub fn action_count(&self) -> u32 {
        1 << self.config.motors.len()
    }

    fn uniform(&mut self, range: f32) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * range
    }
}
