//! Discrete action decoding.
//!
//! An action is an integer in `[0, 2^N)` for `N` motors. Bit positions map
//! to motors most-significant-bit first, so with two motors action `2`
//! (`0b10`) switches motor 0 on and motor 1 off.

use crate::config::MAX_MOTORS;
use crate::error::DynamicsError;

/// Decode a discrete action into per-motor on/off flags.
///
/// The returned flags are in motor order, zero-padded: the flag for motor
/// index 0 is taken from the most significant of the `motor_count` bits.
///
/// # Errors
///
/// Returns [`DynamicsError::TooManyMotors`] when `motor_count` exceeds
/// [`MAX_MOTORS`], and [`DynamicsError::InvalidAction`] when
/// `action >= 2^motor_count`. Out-of-range actions are never bit-truncated.
pub fn decode(action: u32, motor_count: usize) -> Result<Vec<bool>, DynamicsError> {
    if motor_count > MAX_MOTORS {
        return Err(DynamicsError::TooManyMotors(motor_count));
    }
    let limit = 1u64 << motor_count;
    if u64::from(action) >= limit {
        return Err(DynamicsError::InvalidAction { action, motors: motor_count });
    }
    Ok((0..motor_count)
        .map(|i| (action >> (motor_count - 1 - i)) & 1 == 1)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_motor_actions_decode_msb_first() {
        assert_eq!(decode(2, 2).unwrap(), vec![true, false]);
        assert_eq!(decode(1, 2).unwrap(), vec![false, true]);
        assert_eq!(decode(3, 2).unwrap(), vec![true, true]);
        assert_eq!(decode(0, 2).unwrap(), vec![false, false]);
    }

    #[test]
    fn flags_are_zero_padded() {
        assert_eq!(decode(1, 4).unwrap(), vec![false, false, false, true]);
    }

    #[test]
    fn out_of_range_action_is_rejected() {
        let err = decode(4, 2).unwrap_err();
        assert!(matches!(
            err,
            DynamicsError::InvalidAction { action: 4, motors: 2 }
        ));
    }

    #[test]
    fn oversized_motor_count_is_rejected_not_shifted() {
        assert!(matches!(
            decode(0, MAX_MOTORS + 1),
            Err(DynamicsError::TooManyMotors(n)) if n == MAX_MOTORS + 1
        ));
        // Shift widths past the accumulator type must error, never panic.
        assert!(decode(0, 64).is_err());
        assert!(decode(0, MAX_MOTORS).is_ok());
    }

    #[test]
    fn single_motor_range() {
        assert_eq!(decode(1, 1).unwrap(), vec![true]);
        assert!(decode(2, 1).is_err());
    }
}
