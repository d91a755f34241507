//! Goal reward shaping and control-effort penalty.

use physics::ActionBounds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardMode {
    /// `-distance * weight` on every step
    #[default]
    Dense,
    /// Fixed bonus on the steps spent inside the goal radius, zero elsewhere
    Sparse,
}

impl RewardMode {
    /// Goal component of the reward at `distance` from the goal.
    ///
    /// `weight` only scales the dense reward; the sparse bonus is
    /// `goal_reward` as is.
    #[must_use]
    pub fn goal_reward(self, distance: f32, reached: bool, goal_reward: f32, weight: f32) -> f32 {
        match self {
            RewardMode::Dense => -distance * weight,
            RewardMode::Sparse => {
                if reached {
                    goal_reward
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for RewardMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" => Ok(RewardMode::Dense),
            "sparse" => Ok(RewardMode::Sparse),
            other => Err(ConfigError::InvalidRewardMode(other.to_owned())),
        }
    }
}

impl fmt::Display for RewardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RewardMode::Dense => "dense",
            RewardMode::Sparse => "sparse",
        })
    }
}

/// Quadratic control penalty `0.5 * coeff * sum((a / scale)^2)` with
/// `scale = (high - low) / 2` per dimension. Zero when `coeff <= 0`.
#[must_use]
pub fn control_cost(action: &[f32], bounds: &ActionBounds, coeff: f32) -> f32 {
    if coeff <= 0.0 {
        return 0.0;
    }
    let effort: f32 = action
        .iter()
        .zip(bounds.half_range())
        .map(|(a, scale)| (a / scale).powi(2))
        .sum();
    0.5 * coeff * effort
}
