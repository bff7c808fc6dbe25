//! Net force and torque accumulation over the active motors.

use crate::config::DroneConfig;
use crate::types::Vec2;

/// Accumulate the net world-frame force and the net torque produced by the
/// motors flagged on in `flags`.
///
/// Each active motor pushes with the configured thrust along its mount
/// angle in the body frame. The translational component is rotated into the
/// world frame by the current orientation `theta`. The torque contribution
/// is `lever_arm * fy` with the *unrotated* body-frame lateral component:
/// spin is a body-frame phenomenon, so the world rotation must not feed
/// into it.
#[must_use]
pub fn accumulate(config: &DroneConfig, theta: f32, flags: &[bool]) -> (Vec2, f32) {
    let mut net_force = Vec2::ZERO;
    let mut net_torque = 0.0;
    let (sin_t, cos_t) = theta.sin_cos();

    for (motor, &on) in config.motors.iter().zip(flags) {
        if !on {
            continue;
        }
        let mount = motor.mount_angle_deg.to_radians();
        let fx = config.thrust * mount.cos();
        let fy = config.thrust * mount.sin();

        net_force += Vec2::new(fx * cos_t - fy * sin_t, fx * sin_t + fy * cos_t);
        net_torque += motor.lever_arm * fy;
    }

    (net_force, net_torque)
}
