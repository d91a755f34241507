//! JSON configuration of a complete goal swimmer environment.
//!
//! ```json
//! {
//!   "goal": { "reward_type": "sparse", "goal_radius": 0.5 },
//!   "swimmer": { "frame_skip": 8 },
//!   "seed": 7
//! }
//! ```
//!
//! Every field is optional and falls back to its default.

use physics::SwimmerConfig;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ConfigError;
use crate::goal_swimmer::{GoalConfig, RandomGoalSwimmerEnv};
use crate::swimmer::SwimmerEnv;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub goal: GoalConfig,
    pub swimmer: SwimmerConfig,
    /// Seeds both goal sampling and reset noise when set
    pub seed: Option<u64>,
}

impl EnvConfig {
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or an unknown reward type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`EnvConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the swimmer and wrap it in the goal task.
    ///
    /// # Errors
    ///
    /// Any goal or swimmer validation error.
    pub fn build(&self) -> Result<RandomGoalSwimmerEnv<SwimmerEnv>, ConfigError> {
        match self.seed {
            Some(seed) => {
                let base = SwimmerEnv::with_seed(self.swimmer.clone(), seed)?;
                // decorrelate goal draws from reset noise
                RandomGoalSwimmerEnv::with_seed(self.goal.clone(), base, seed.wrapping_add(1))
            }
            None => {
                let base = SwimmerEnv::new(self.swimmer.clone())?;
                RandomGoalSwimmerEnv::new(self.goal.clone(), base)
            }
        }
    }
}
