//! # Random Goal Swimmer
//!
//! Goal-reaching task on top of a locomotion body: every episode draws a goal
//! point in the plane, the observation is extended with the goal coordinates,
//! and the reward is the (dense or sparse) goal reward minus an optional
//! control penalty. The episode ends once the body's center of mass is
//! strictly inside the goal radius.

use physics::Vec2;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, Path};
use crate::env::{Env, LocomotionEnv, Step};
use crate::error::{ConfigError, EnvError};
use crate::goal::GoalSampler;
use crate::reward::{control_cost, RewardMode};
use crate::swimmer::SwimmerEnv;

/// Construction-time parameters of the goal task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    pub reward_type: RewardMode,
    /// Sparse bonus for being inside the goal radius
    pub goal_reward: f32,
    /// Scale of the dense distance penalty
    pub goal_reward_weight: f32,
    pub goal_radius: f32,
    pub ctrl_cost_coeff: f32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            reward_type: RewardMode::Dense,
            goal_reward: 10.0,
            goal_reward_weight: 1e-3,
            goal_radius: 0.25,
            ctrl_cost_coeff: 0.0,
        }
    }
}

impl GoalConfig {
    /// Parse `reward_type` and validate the numeric parameters.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRewardMode`] unless `reward_type` is `"dense"`
    /// or `"sparse"`, [`ConfigError::InvalidParameter`] for unusable numbers.
    pub fn new(
        reward_type: &str,
        goal_reward: f32,
        goal_reward_weight: f32,
        goal_radius: f32,
        ctrl_cost_coeff: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            reward_type: reward_type.parse()?,
            goal_reward,
            goal_reward_weight,
            goal_radius,
            ctrl_cost_coeff,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.goal_reward.is_finite() {
            return Err(ConfigError::InvalidParameter("goal_reward must be finite"));
        }
        if !(self.goal_reward_weight.is_finite() && self.goal_reward_weight >= 0.0) {
            return Err(ConfigError::InvalidParameter("goal_reward_weight must be non-negative"));
        }
        if !(self.goal_radius.is_finite() && self.goal_radius >= 0.0) {
            return Err(ConfigError::InvalidParameter("goal_radius must be non-negative"));
        }
        if !(self.ctrl_cost_coeff.is_finite() && self.ctrl_cost_coeff >= 0.0) {
            return Err(ConfigError::InvalidParameter("ctrl_cost_coeff must be non-negative"));
        }
        Ok(())
    }
}

/// Swimmer (or any other [`LocomotionEnv`]) that must reach a random goal.
pub struct RandomGoalSwimmerEnv<E: LocomotionEnv = SwimmerEnv> {
    base: E,
    config: GoalConfig,
    sampler: GoalSampler,
    goal: Vec2,
    goal_distance: Option<f32>,
}

impl<E: LocomotionEnv> RandomGoalSwimmerEnv<E> {
    /// Wrap `base`. The goal stays at the origin until the first reset.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config`.
    pub fn new(config: GoalConfig, base: E) -> Result<Self, ConfigError> {
        Self::with_sampler(config, base, GoalSampler::new())
    }

    /// Same as [`RandomGoalSwimmerEnv::new`] with reproducible goals.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config`.
    pub fn with_seed(config: GoalConfig, base: E, seed: u64) -> Result<Self, ConfigError> {
        Self::with_sampler(config, base, GoalSampler::with_seed(seed))
    }

    fn with_sampler(config: GoalConfig, base: E, sampler: GoalSampler) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            base,
            config,
            sampler,
            goal: Vec2::ZERO,
            goal_distance: None,
        })
    }

    /// Start an episode towards `goal`, or towards a freshly sampled one.
    pub fn reset_with_goal(&mut self, goal: Option<Vec2>) -> Vec<f32> {
        self.goal = goal.unwrap_or_else(|| self.sampler.sample());
        tracing::debug!(x = self.goal.x, y = self.goal.y, "new goal");
        self.base.reset_model();
        self.observe()
    }

    /// Proprioceptive observation followed by the goal coordinates.
    #[must_use]
    pub fn observe(&self) -> Vec<f32> {
        let mut obs = self.base.observe();
        obs.extend(self.goal.to_array());
        obs
    }

    /// Record the base diagnostics plus the goal distances of the latest
    /// episode.
    pub fn log_diagnostics(&self, paths: &[Path], diagnostics: &mut Diagnostics) {
        self.base.log_diagnostics(paths, diagnostics);

        match self.goal_distance {
            Some(distance) => diagnostics.record("FinalDistanceFromGoal", f64::from(distance)),
            None => tracing::warn!("no step taken yet, skipping FinalDistanceFromGoal"),
        }
        diagnostics.record("OriginDistanceFromGoal", f64::from(self.goal.length()));
    }

    /// [`RandomGoalSwimmerEnv::log_diagnostics`] into a fresh record.
    #[must_use]
    pub fn diagnostics(&self, paths: &[Path]) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.log_diagnostics(paths, &mut diagnostics);
        diagnostics
    }

    #[must_use]
    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    /// Distance to the goal after the most recent step.
    #[must_use]
    pub fn goal_distance(&self) -> Option<f32> {
        self.goal_distance
    }

    #[must_use]
    pub fn config(&self) -> &GoalConfig {
        &self.config
    }

    #[must_use]
    pub fn base(&self) -> &E {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut E {
        &mut self.base
    }
}

impl<E: LocomotionEnv> Env for RandomGoalSwimmerEnv<E> {
    fn step(&mut self, action: &[f32]) -> Result<Step, EnvError> {
        self.base.advance_physics(action)?;
        let observation = self.observe();

        let distance = self.base.center_of_mass().distance(self.goal);
        self.goal_distance = Some(distance);
        let done = distance < self.config.goal_radius;
        if done {
            tracing::debug!(distance, "goal reached");
        }

        let goal_reward = self.config.reward_type.goal_reward(
            distance,
            done,
            self.config.goal_reward,
            self.config.goal_reward_weight,
        );
        let reward = if self.config.ctrl_cost_coeff > 0.0 {
            goal_reward - control_cost(action, &self.base.action_bounds(), self.config.ctrl_cost_coeff)
        } else {
            goal_reward
        };

        Ok(Step { observation, reward, done })
    }

    fn reset(&mut self) -> Vec<f32> {
        self.reset_with_goal(None)
    }

    fn obs_size(&self) -> usize {
        self.base.proprioceptive_size() + 2
    }

    fn action_size(&self) -> usize {
        self.base.action_bounds().len()
    }
}
