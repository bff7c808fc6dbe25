use std::f32::consts::PI;
use std::ops::{Add, AddAssign, Mul};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Six-component kinematic state of the drone.
///
/// Components are ordered `[x, vx, y, vy, theta, omega]`: each position-like
/// component is immediately followed by its rate. Boundary enforcement relies
/// on that pairing.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct State {
    /// Horizontal position
    pub x: f32,
    /// Horizontal velocity
    pub vx: f32,
    /// Vertical position
    pub y: f32,
    /// Vertical velocity
    pub vy: f32,
    /// Orientation in radians, kept in `(-PI, PI]` after every step
    pub theta: f32,
    /// Angular velocity in radians per second
    pub omega: f32,
}

impl State {
    /// Number of state components.
    pub const DIM: usize = 6;

    #[must_use]
    pub const fn new(x: f32, vx: f32, y: f32, vy: f32, theta: f32, omega: f32) -> Self {
        Self { x, vx, y, vy, theta, omega }
    }

    /// Flat component view in state order.
    #[must_use]
    pub fn to_array(self) -> [f32; Self::DIM] {
        [self.x, self.vx, self.y, self.vy, self.theta, self.omega]
    }

    #[must_use]
    pub fn from_array(a: [f32; Self::DIM]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Planar position `(x, y)`.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Per-component legal envelope of the state vector.
#[derive(Copy, Clone, Debug)]
pub struct StateBounds {
    pub low: [f32; State::DIM],
    pub high: [f32; State::DIM],
}

impl Default for StateBounds {
    fn default() -> Self {
        Self {
            low: [-1.0, -5.0, -1.0, -5.0, -PI, -10.0],
            high: [1.0, 5.0, 1.0, 5.0, PI, 10.0],
        }
    }
}
