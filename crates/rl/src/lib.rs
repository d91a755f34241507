#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Goal-conditioned swimmer environments
//!
//! [`SwimmerEnv`] exposes the `physics` swimmer as a locomotion environment.
//! [`RandomGoalSwimmerEnv`] layers a goal-reaching task on top of any
//! [`LocomotionEnv`]: it samples a goal per episode, appends it to the
//! observation and computes a dense or sparse goal reward with an optional
//! control penalty.
//!
//! ```rust
//! use rl::{Env, EnvConfig};
//!
//! let mut env = EnvConfig { seed: Some(1), ..Default::default() }.build()?;
//! let obs = env.reset();
//! assert_eq!(obs.len(), env.obs_size());
//! let step = env.step(&[0.0, 0.0])?;
//! assert!(step.reward <= 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod goal;
pub mod goal_swimmer;
pub mod reward;
pub mod swimmer;

pub use config::EnvConfig;
pub use diagnostics::{Diagnostics, Path};
pub use env::{Env, LocomotionEnv, Step};
pub use error::{ConfigError, EnvError};
pub use goal::{GoalSampler, GOAL_EXTENT};
pub use goal_swimmer::{GoalConfig, RandomGoalSwimmerEnv};
pub use reward::{control_cost, RewardMode};
pub use swimmer::SwimmerEnv;
