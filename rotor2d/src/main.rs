//! # Rotor2D Runner
//!
//! Entry point for the headless episode runner.
//!
//! This executable wires the flight dynamics core to logging and a small
//! CLI. It steps a twin-motor drone under a chosen action policy, logs
//! progress periodically, and resets the engine whenever an episode
//! terminates.

mod app;

use anyhow::Result;
use clap::Parser;

/// Action policy driving the simulated drone.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Policy {
    /// Uniformly random discrete actions
    Random,
    /// All motors on every step
    AllOn,
    /// All motors off every step
    AllOff,
}

/// Command-line settings for the episode runner.
#[derive(Parser, Debug)]
#[command(name = "rotor2d", about = "Planar drone dynamics episode runner")]
struct RunArgs {
    /// Number of simulation steps to run
    #[arg(long, default_value_t = 1000)]
    steps: u32,

    /// Seed for the engine and the action policy
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// State update frequency in Hz (dt = 1 / hz)
    #[arg(long, default_value_t = 60.0)]
    hz: f32,

    /// Action policy
    #[arg(long, value_enum, default_value = "random")]
    policy: Policy,
}

fn main() -> Result<()> {
    let args = RunArgs::parse();
    app::run(&args)
}
