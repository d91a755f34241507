//! Command-line arguments.

use anyhow::{Context, Result};
use clap::Parser;
use physics::Vec2;
use rl::{EnvConfig, RewardMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goalswim", version, about = "Roll out a random policy in the goal swimmer environment")]
pub struct Args {
    /// JSON environment configuration; command-line values override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Goal reward shaping: dense or sparse
    #[arg(long)]
    pub reward_type: Option<RewardMode>,

    #[arg(long)]
    pub goal_radius: Option<f32>,

    #[arg(long)]
    pub ctrl_cost_coeff: Option<f32>,

    /// Number of episodes to roll out
    #[arg(long, default_value_t = 5)]
    pub episodes: usize,

    /// Episode length limit
    #[arg(long, default_value_t = 200)]
    pub max_steps: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed goal as `x,y` instead of sampling one per episode
    #[arg(long, value_parser = parse_goal, allow_hyphen_values = true)]
    pub goal: Option<Vec2>,

    /// Print the diagnostics record as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Environment configuration from `--config` with the command-line
    /// overrides applied.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file cannot be read or parsed, or if the
    /// resulting goal parameters are invalid.
    pub fn env_config(&self) -> Result<EnvConfig> {
        let mut config = match &self.config {
            Some(path) => EnvConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EnvConfig::default(),
        };
        if let Some(reward_type) = self.reward_type {
            config.goal.reward_type = reward_type;
        }
        if let Some(radius) = self.goal_radius {
            config.goal.goal_radius = radius;
        }
        if let Some(coeff) = self.ctrl_cost_coeff {
            config.goal.ctrl_cost_coeff = coeff;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.goal.validate()?;
        Ok(config)
    }
}

fn parse_goal(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok(Vec2::new(parse(x)?, parse(y)?))
}
