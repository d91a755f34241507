//! Swimmer body description
//!
//! Configuration and forward kinematics of a planar chain of rigid segments
//! connected by motorised hinge joints.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::types::{Segment, Vec2};

/// Physical and numerical parameters of the swimmer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimmerConfig {
    /// Number of rigid segments (joints = segments - 1)
    pub segments: usize,
    /// Length of every segment in meters
    pub segment_length: f32,
    /// Mass of every segment in kg
    pub segment_mass: f32,
    /// Viscous drag coefficient along a segment
    pub tangential_drag: f32,
    /// Viscous drag coefficient across a segment
    pub normal_drag: f32,
    /// Damping of the joint hinges
    pub joint_damping: f32,
    /// Torque produced per unit of motor command
    pub gear: f32,
    /// Symmetric joint angle limit (radians)
    pub joint_limit: f32,
    /// `[low, high]` range of every motor command
    pub ctrl_range: [f32; 2],
    /// Integration time step in seconds
    pub time_step: f32,
    /// Integration substeps per control step
    pub frame_skip: usize,
    /// Half-width of the uniform noise added to positions on reset
    pub reset_noise_scale: f32,
    /// Half-width of the uniform noise added to velocities on reset
    pub reset_velocity_noise_scale: f32,
}

impl Default for SwimmerConfig {
    fn default() -> Self {
        Self {
            segments: 3,
            segment_length: 1.0,
            segment_mass: 1.0,
            tangential_drag: 0.5,
            normal_drag: 5.0,
            joint_damping: 25.0,
            gear: 1.0,
            joint_limit: 100f32.to_radians(),
            ctrl_range: [-50.0, 50.0],
            time_step: 0.01,
            frame_skip: 4,
            reset_noise_scale: 0.01,
            reset_velocity_noise_scale: 0.1,
        }
    }
}

impl SwimmerConfig {
    #[must_use]
    pub fn joints(&self) -> usize {
        self.segments.saturating_sub(1)
    }

    /// Simulated seconds covered by one control step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn control_dt(&self) -> f32 {
        self.time_step * self.frame_skip as f32
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first unusable
    /// parameter.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.segments < 2 {
            return Err(PhysicsError::InvalidConfig("swimmer needs at least two segments"));
        }
        if !(self.segment_length > 0.0 && self.segment_length.is_finite()) {
            return Err(PhysicsError::InvalidConfig("segment_length must be positive"));
        }
        if !(self.segment_mass > 0.0 && self.segment_mass.is_finite()) {
            return Err(PhysicsError::InvalidConfig("segment_mass must be positive"));
        }
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;
        if ![self.tangential_drag, self.normal_drag, self.joint_damping]
            .into_iter()
            .all(non_negative)
        {
            return Err(PhysicsError::InvalidConfig("drag and damping must be non-negative"));
        }
        if !self.gear.is_finite() {
            return Err(PhysicsError::InvalidConfig("gear must be finite"));
        }
        if !(non_negative(self.reset_noise_scale) && non_negative(self.reset_velocity_noise_scale)) {
            return Err(PhysicsError::InvalidConfig("reset noise scales must be non-negative"));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) || self.frame_skip == 0 {
            return Err(PhysicsError::InvalidConfig("time_step and frame_skip must be positive"));
        }
        let [low, high] = self.ctrl_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(PhysicsError::InvalidConfig("ctrl_range must satisfy low < high"));
        }
        if !(self.joint_limit.is_finite() && self.joint_limit > 0.0) {
            return Err(PhysicsError::InvalidConfig("joint_limit must be positive"));
        }
        Ok(())
    }
}

/// Segments of the chain relative to the head segment.
///
/// `center` and `velocity` are offsets from the head center and head
/// velocity; angles and angular velocities are absolute.
pub(crate) fn relative_chain(
    config: &SwimmerConfig,
    heading: f32,
    angular_velocity: f32,
    joint_angles: &[f32],
    joint_velocities: &[f32],
) -> Vec<Segment> {
    let half = config.segment_length * 0.5;
    let mut chain = Vec::with_capacity(config.segments);
    let mut seg = Segment {
        center: Vec2::ZERO,
        velocity: Vec2::ZERO,
        angle: heading,
        angular_velocity,
    };
    chain.push(seg);

    for (q, dq) in joint_angles.iter().zip(joint_velocities) {
        let prev_dir = Vec2::from_angle(seg.angle);
        let prev_w = seg.angular_velocity;
        let angle = seg.angle + q;
        let w = prev_w + dq;
        let dir = Vec2::from_angle(angle);
        seg = Segment {
            center: seg.center + prev_dir * half + dir * half,
            velocity: seg.velocity + prev_dir.perp() * (half * prev_w) + dir.perp() * (half * w),
            angle,
            angular_velocity: w,
        };
        chain.push(seg);
    }
    chain
}

/// Mass-weighted mean of the relative centers and velocities.
///
/// All segments share one mass, so this is the plain mean.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_offset(chain: &[Segment]) -> (Vec2, Vec2) {
    let n = chain.len() as f32;
    let (center, velocity) = chain
        .iter()
        .fold((Vec2::ZERO, Vec2::ZERO), |(c, v), s| (c + s.center, v + s.velocity));
    (center / n, velocity / n)
}
