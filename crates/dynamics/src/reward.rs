//! Scalar reward for the decision-making agent.

use crate::types::State;

/// Fixed penalty returned whenever the step terminated the episode.
pub const TERMINATION_PENALTY: f32 = -10.0;

/// Reward for the current state.
///
/// Terminal steps earn [`TERMINATION_PENALTY`] regardless of position.
/// Otherwise the reward is `1 - distance / target_distance` with the
/// Euclidean distance of `(x, y)` from the origin: maximal at the origin,
/// falling off linearly, and unclamped below.
#[must_use]
pub fn compute(state: &State, done: bool, target_distance: f32) -> f32 {
    if done {
        return TERMINATION_PENALTY;
    }
    let distance = state.position().length();
    1.0 - distance / target_distance
}
