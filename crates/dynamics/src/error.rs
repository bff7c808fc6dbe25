use crate::config::MAX_MOTORS;

/// Errors produced by configuration validation and action decoding.
#[derive(Debug, thiserror::Error)]
pub enum DynamicsError {
    /// The motor list was empty.
    #[error("drone configuration needs at least one motor")]
    NoMotors,
    /// More motors than the discrete action encoding can address.
    #[error("motor count {0} exceeds the supported maximum of {}", MAX_MOTORS)]
    TooManyMotors(usize),
    /// A physical scalar was non-finite or outside its legal range.
    #[error("invalid {name}: {value}")]
    InvalidScalar { name: &'static str, value: f32 },
    /// The discrete action does not fit in the motor-count bits.
    #[error("action {action} out of range for {motors} motors")]
    InvalidAction { action: u32, motors: usize },
}
