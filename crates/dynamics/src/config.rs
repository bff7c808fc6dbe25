//! # Drone Configuration
//!
//! Static description of the simulated drone: motor layout, mass, inertia,
//! thrust magnitude, gravity, and the reward normalizer. A configuration is
//! read-only after construction and may be shared across engine instances.

use crate::error::DynamicsError;

/// Largest motor count the discrete action encoding supports.
pub const MAX_MOTORS: usize = 16;

/// A point-thrust motor rigidly mounted on the drone body.
///
/// Motor order matters: motor index 0 maps to the most significant bit of
/// the discrete action encoding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Motor {
    /// Signed distance from the center of mass along the body's
    /// longitudinal axis
    pub lever_arm: f32,
    /// Reserved slot kept from the configuration shape; unused by the
    /// dynamics
    pub reserved: f32,
    /// Mount angle in degrees, measured in the body frame
    pub mount_angle_deg: f32,
}

impl Motor {
    #[must_use]
    pub const fn new(lever_arm: f32, mount_angle_deg: f32) -> Self {
        Self { lever_arm, reserved: 0.0, mount_angle_deg }
    }
}

/// Configuration for a planar multi-motor drone.
#[derive(Clone, Debug)]
pub struct DroneConfig {
    /// Motors in action-bit order
    pub motors: Vec<Motor>,
    /// Body mass in kg
    pub mass: f32,
    /// Moment of inertia about the out-of-plane axis
    pub inertia: f32,
    /// Per-motor force magnitude when active
    pub thrust: f32,
    /// Gravity acceleration, sign included (negative pulls down)
    pub gravity: f32,
    /// Normalizer for the distance-shaping reward
    pub target_distance: f32,
}

impl DroneConfig {
    /// The canonical twin-motor hover layout: two upward-thrusting motors
    /// at opposite ends of the body axis.
    #[must_use]
    pub fn twin_motor() -> Self {
        Self {
            motors: vec![Motor::new(-0.3, 90.0), Motor::new(0.3, 90.0)],
            mass: 1.0,
            inertia: 0.2,
            thrust: 15.0,
            gravity: -0.1,
            target_distance: 1.0,
        }
    }

    /// Check every invariant the dynamics relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`DynamicsError`] for an empty or oversized motor list,
    /// non-positive mass, inertia, or target distance, negative thrust, or
    /// any non-finite scalar.
    pub fn validate(&self) -> Result<(), DynamicsError> {
        if self.motors.is_empty() {
            return Err(DynamicsError::NoMotors);
        }
        if self.motors.len() > MAX_MOTORS {
            return Err(DynamicsError::TooManyMotors(self.motors.len()));
        }
        for motor in &self.motors {
            if !motor.lever_arm.is_finite() {
                return Err(invalid("motor lever arm", motor.lever_arm));
            }
            if !motor.mount_angle_deg.is_finite() {
                return Err(invalid("motor mount angle", motor.mount_angle_deg));
            }
        }
        require_positive("mass", self.mass)?;
        require_positive("inertia", self.inertia)?;
        require_positive("target distance", self.target_distance)?;
        if !self.thrust.is_finite() || self.thrust < 0.0 {
            return Err(invalid("thrust", self.thrust));
        }
        if !self.gravity.is_finite() {
            return Err(invalid("gravity", self.gravity));
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f32) -> Result<(), DynamicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

fn invalid(name: &'static str, value: f32) -> DynamicsError {
    DynamicsError::InvalidScalar { name, value }
}
