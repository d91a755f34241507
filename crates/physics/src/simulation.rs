//! # Swimmer Simulation Core
//!
//! Owns the swimmer state and exposes the control-step level API used by the
//! environments: reset, step, action bounds and center of mass.

use crate::error::PhysicsError;
use crate::integrator::integrate_swimmer;
use crate::swimmer::{mean_offset, relative_chain, SwimmerConfig};
use crate::types::{ActionBounds, Segment, SwimmerState, Vec2};

/// Planar swimmer simulation
pub struct SwimmerSim {
    config: SwimmerConfig,
    state: SwimmerState,
    rng: fastrand::Rng,
    substeps: u64,
}

impl SwimmerSim {
    /// Create a straight swimmer at rest at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: SwimmerConfig) -> Result<Self, PhysicsError> {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Same as [`SwimmerSim::new`] with a deterministic reset noise source.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` does not validate.
    pub fn with_seed(config: SwimmerConfig, seed: u64) -> Result<Self, PhysicsError> {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: SwimmerConfig, rng: fastrand::Rng) -> Result<Self, PhysicsError> {
        config.validate()?;
        let state = SwimmerState::at_rest(config.joints());
        Ok(Self { config, state, rng, substeps: 0 })
    }

    #[must_use]
    pub fn config(&self) -> &SwimmerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SwimmerState {
        &self.state
    }

    /// Overwrite the full state.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::StateShape`] if the joint count differs from
    /// the configured one.
    pub fn set_state(&mut self, state: SwimmerState) -> Result<(), PhysicsError> {
        let expected = self.config.joints();
        for actual in [state.joint_angles.len(), state.joint_velocities.len()] {
            if actual != expected {
                return Err(PhysicsError::StateShape { expected, actual });
            }
        }
        self.state = state;
        Ok(())
    }

    /// Return to the rest pose plus uniform noise on positions and velocities.
    pub fn reset(&mut self) -> &SwimmerState {
        let pos_noise = self.config.reset_noise_scale;
        let vel_noise = self.config.reset_velocity_noise_scale;
        let rng = &mut self.rng;
        let mut noise = |scale: f32| (rng.f32() * 2.0 - 1.0) * scale;

        let joints = self.config.joints();
        self.state = SwimmerState {
            position: Vec2::new(noise(pos_noise), noise(pos_noise)),
            heading: noise(pos_noise),
            joint_angles: (0..joints).map(|_| noise(pos_noise)).collect(),
            velocity: Vec2::new(noise(vel_noise), noise(vel_noise)),
            angular_velocity: noise(vel_noise),
            joint_velocities: (0..joints).map(|_| noise(vel_noise)).collect(),
        };
        &self.state
    }

    /// Advance one control step (`frame_skip` integration substeps).
    ///
    /// The action is clipped to [`SwimmerSim::action_bounds`] first.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::ActionShape`] for a wrong action length,
    /// [`PhysicsError::Diverged`] if the state stops being finite.
    pub fn step(&mut self, action: &[f32]) -> Result<(), PhysicsError> {
        let expected = self.action_size();
        if action.len() != expected {
            return Err(PhysicsError::ActionShape { expected, actual: action.len() });
        }
        let torques = self.action_bounds().clip(action);
        for _ in 0..self.config.frame_skip {
            integrate_swimmer(&self.config, &mut self.state, &torques);
            self.substeps += 1;
            if !self.state.is_finite() {
                tracing::warn!(substep = self.substeps, "swimmer state became non-finite");
                return Err(PhysicsError::Diverged { step: self.substeps });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn action_size(&self) -> usize {
        self.config.joints()
    }

    #[must_use]
    pub fn action_bounds(&self) -> ActionBounds {
        let [low, high] = self.config.ctrl_range;
        ActionBounds::uniform(self.action_size(), low, high)
    }

    #[must_use]
    pub fn control_dt(&self) -> f32 {
        self.config.control_dt()
    }

    /// Integration substeps taken since construction.
    #[must_use]
    pub fn substeps(&self) -> u64 {
        self.substeps
    }

    /// World-frame pose and velocity of every segment, head first.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let s = &self.state;
        relative_chain(&self.config, s.heading, s.angular_velocity, &s.joint_angles, &s.joint_velocities)
            .into_iter()
            .map(|seg| Segment {
                center: s.position + seg.center,
                velocity: s.velocity + seg.velocity,
                ..seg
            })
            .collect()
    }

    #[must_use]
    pub fn center_of_mass(&self) -> Vec2 {
        self.com_and_velocity().0
    }

    #[must_use]
    pub fn center_of_mass_velocity(&self) -> Vec2 {
        self.com_and_velocity().1
    }

    fn com_and_velocity(&self) -> (Vec2, Vec2) {
        let s = &self.state;
        let chain = relative_chain(
            &self.config,
            s.heading,
            s.angular_velocity,
            &s.joint_angles,
            &s.joint_velocities,
        );
        let (offset, offset_vel) = mean_offset(&chain);
        (s.position + offset, s.velocity + offset_vel)
    }
}
