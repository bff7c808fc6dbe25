#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Rotor2D Flight Dynamics
//!
//! Planar flight dynamics for a multi-motor drone under discrete on/off
//! motor commands, with a distance-based reward signal for reinforcement
//! learning agents.
//!
//! The engine advances a six-component kinematic state
//! `[x, vx, y, vy, theta, omega]` once per tick: the discrete action is
//! decoded into per-motor flags, active motors contribute force and torque,
//! velocities and positions are advanced with semi-implicit Euler
//! integration, the orientation is wrapped into `(-PI, PI]`, the state is
//! clamped into its legal envelope, and a scalar reward is computed.
//!
//! ## Key Components
//!
//! -   **Configuration:** [`DroneConfig`] describes the motor layout, mass,
//!     inertia, thrust magnitude, gravity, and the reward normalizer. It is
//!     read-only after construction and can be shared across engines.
//! -   **Engine:** [`FlightEngine`] owns one mutable state vector and a
//!     seeded random generator, and exposes `reset`, `step`, and a
//!     snapshot accessor.
//! -   **Phases:** the per-tick phases live in the [`action`], [`forces`],
//!     [`integrator`], [`boundary`], and [`reward`] modules as pure
//!     functions, so each can be exercised in isolation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dynamics::{DroneConfig, FlightEngine};
//! use std::sync::Arc;
//!
//! let config = Arc::new(DroneConfig::twin_motor());
//! let mut engine = FlightEngine::new(config, 60.0, 42)?;
//! let outcome = engine.step(0b10)?;
//! ```

pub mod action;
pub mod boundary;
pub mod config;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod reward;
pub mod types;

pub use config::{DroneConfig, Motor, MAX_MOTORS};
pub use engine::{FlightEngine, StepOutcome};
pub use error::DynamicsError;
pub use types::{State, StateBounds, Vec2};
