// Reachable-state invariants: orientation stays wrapped and every component
// stays inside its envelope after every step.

use dynamics::{DroneConfig, FlightEngine, StateBounds};
use std::f32::consts::PI;
use std::sync::Arc;

#[test]
fn all_components_stay_in_the_envelope_under_random_actions() {
    let config = Arc::new(DroneConfig::twin_motor());
    let mut engine = FlightEngine::new(Arc::clone(&config), 60.0, 9).unwrap();
    let mut actions = fastrand::Rng::with_seed(77);
    let bounds = StateBounds::default();

    for _ in 0..2000 {
        let action = actions.u32(0..engine.action_count());
        let outcome = engine.step(action).unwrap();

        let s = outcome.state.to_array();
        for i in 0..6 {
            assert!(
                s[i] >= bounds.low[i] && s[i] <= bounds.high[i],
                "component {i} out of bounds: {}",
                s[i]
            );
        }
        assert!(outcome.state.theta.abs() <= PI);

        if outcome.done {
            engine.reset();
        }
    }
}

#[test]
fn orientation_wraps_under_sustained_spin() {
    // One motor on keeps a constant torque going; theta must never leave
    // the wrapped range even after many revolutions.
    let config = Arc::new(DroneConfig { gravity: 0.0, ..DroneConfig::twin_motor() });
    let mut engine = FlightEngine::new(config, 60.0, 3).unwrap();

    for _ in 0..3000 {
        let outcome = engine.step(0b10).unwrap();
        assert!(outcome.state.theta.abs() <= PI);
        if outcome.done {
            engine.reset();
        }
    }
}
