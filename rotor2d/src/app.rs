//! # Runner Application Logic
//!
//! Drives the headless episode loop: builds the twin-motor configuration,
//! steps the engine under the selected policy, logs progress every few
//! steps, and resets on termination. Resetting is the caller's job by
//! design; the engine only reports `done`.

use anyhow::Result;
use dynamics::{DroneConfig, FlightEngine};
use std::sync::Arc;

use crate::{Policy, RunArgs};

/// Run the episode loop described by `args`.
///
/// # Errors
///
/// Returns any configuration error from the engine; in-range policy
/// actions never fail to decode.
pub fn run(args: &RunArgs) -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Arc::new(DroneConfig::twin_motor());
    let mut engine = FlightEngine::new(Arc::clone(&config), args.hz, args.seed)?;
    let mut policy_rng = fastrand::Rng::with_seed(args.seed);
    let action_count = engine.action_count();

    tracing::info!(
        motors = config.motors.len(),
        hz = args.hz,
        "starting episode loop for {} steps",
        args.steps
    );

    let mut episodes = 0u32;
    let mut episode_return = 0.0f32;

    for i in 0..args.steps {
        let action = match args.policy {
            Policy::Random => policy_rng.u32(0..action_count),
            Policy::AllOn => action_count - 1,
            Policy::AllOff => 0,
        };

        let outcome = engine.step(action)?;
        episode_return += outcome.reward;

        if outcome.done {
            episodes += 1;
            tracing::info!(
                episode = episodes,
                step = i + 1,
                ret = episode_return,
                "episode terminated; resetting"
            );
            episode_return = 0.0;
            engine.reset();
        }

        if (i + 1) % 50 == 0 {
            let s = engine.state();
            tracing::info!(
                "step {} complete. x: {:.3}, y: {:.3}, theta: {:.3}",
                i + 1,
                s.x,
                s.y,
                s.theta
            );
        }
    }

    tracing::info!(episodes, "run finished. final state: {:?}", engine.state());
    Ok(())
}
