//! State envelope enforcement and episode termination.

use crate::types::{State, StateBounds};

/// Clamp every state component into its `[low, high]` envelope.
///
/// When a position-like component (even index) clamps on either bound, the
/// rate component that follows it is zeroed, modeling an inelastic wall hit
/// that kills momentum. The even/odd pairing runs uniformly over all six
/// components, including the orientation/angular-velocity pair.
///
/// Returns `true` iff any component was clamped; the caller decides whether
/// that ends the episode. No reset happens here.
pub fn enforce(state: &mut State, bounds: &StateBounds) -> bool {
    let mut s = state.to_array();
    let mut done = false;

    for i in 0..State::DIM {
        if s[i] < bounds.low[i] {
            s[i] = bounds.low[i];
            if i % 2 == 0 {
                s[i + 1] = 0.0;
            }
            done = true;
        } else if s[i] > bounds.high[i] {
            s[i] = bounds.high[i];
            if i % 2 == 0 {
                s[i + 1] = 0.0;
            }
            done = true;
        }
    }

    *state = State::from_array(s);
    done
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_envelope_state_is_untouched() {
        let mut state = State::new(0.5, 2.0, -0.5, -2.0, 1.0, 3.0);
        let before = state;
        assert!(!enforce(&mut state, &StateBounds::default()));
        assert_eq!(state, before);
    }

    #[test]
    fn position_clamp_zeroes_following_velocity() {
        let mut state = State { x: 1.4, vx: 3.0, ..State::default() };
        assert!(enforce(&mut state, &StateBounds::default()));
        assert_eq!(state.x, 1.0);
        assert_eq!(state.vx, 0.0);
    }

    #[test]
    fn lower_bound_clamps_too() {
        let mut state = State { y: -2.0, vy: -4.0, ..State::default() };
        assert!(enforce(&mut state, &StateBounds::default()));
        assert_eq!(state.y, -1.0);
        assert_eq!(state.vy, 0.0);
    }

    #[test]
    fn velocity_clamp_alone_flags_done_without_zeroing() {
        let mut state = State { vx: 7.0, ..State::default() };
        assert!(enforce(&mut state, &StateBounds::default()));
        assert_eq!(state.vx, 5.0);
    }

    #[test]
    fn angular_velocity_clamps_at_its_own_bound() {
        let mut state = State { omega: 12.0, ..State::default() };
        assert!(enforce(&mut state, &StateBounds::default()));
        assert_eq!(state.omega, 10.0);
    }
}
