use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Point or vector in the swimming plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
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

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
    #[must_use]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Per-dimension box bounds of the actuator commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionBounds {
    pub low: Vec<f32>,
    pub high: Vec<f32>,
}

impl ActionBounds {
    /// Same `[low, high]` range on every one of `dims` actuators.
    #[must_use]
    pub fn uniform(dims: usize, low: f32, high: f32) -> Self {
        Self {
            low: vec![low; dims],
            high: vec![high; dims],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// Half of the bound range per dimension, `(high - low) / 2`.
    pub fn half_range(&self) -> impl Iterator<Item = f32> + '_ {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(lo, hi)| (hi - lo) * 0.5)
    }

    /// Clip `action` into the box, component-wise.
    #[must_use]
    pub fn clip(&self, action: &[f32]) -> Vec<f32> {
        action
            .iter()
            .zip(self.low.iter().zip(&self.high))
            .map(|(a, (lo, hi))| a.clamp(*lo, *hi))
            .collect()
    }
}

/// Generalized coordinates and velocities of the swimmer.
///
/// `position` and `velocity` refer to the center of the head segment,
/// `heading` is the absolute angle of the head segment and the joint angles
/// are relative to the preceding segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwimmerState {
    pub position: Vec2,
    pub heading: f32,
    pub joint_angles: Vec<f32>,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub joint_velocities: Vec<f32>,
}

impl SwimmerState {
    /// Resting, straight swimmer at the origin.
    #[must_use]
    pub fn at_rest(joints: usize) -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            joint_angles: vec![0.0; joints],
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            joint_velocities: vec![0.0; joints],
        }
    }

    /// `[x, y, heading, joint angles...]`
    #[must_use]
    pub fn qpos(&self) -> Vec<f32> {
        let mut q = Vec::with_capacity(3 + self.joint_angles.len());
        q.extend([self.position.x, self.position.y, self.heading]);
        q.extend_from_slice(&self.joint_angles);
        q
    }

    /// `[vx, vy, angular velocity, joint velocities...]`
    #[must_use]
    pub fn qvel(&self) -> Vec<f32> {
        let mut v = Vec::with_capacity(3 + self.joint_velocities.len());
        v.extend([self.velocity.x, self.velocity.y, self.angular_velocity]);
        v.extend_from_slice(&self.joint_velocities);
        v
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.heading.is_finite()
            && self.angular_velocity.is_finite()
            && self.joint_angles.iter().all(|q| q.is_finite())
            && self.joint_velocities.iter().all(|q| q.is_finite())
    }
}

/// World-frame pose and velocity of a single segment's center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub center: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
}
