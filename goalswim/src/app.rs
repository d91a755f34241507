//! # Rollout Loop
//!
//! Drives a [`rl::RandomGoalSwimmerEnv`] with a uniform-random policy for a fixed
//! number of episodes, records every transition into a [`Path`] and collects
//! the environment's diagnostics for the batch.

use anyhow::{Context, Result};
use physics::{ActionBounds, Vec2};
use rl::{Diagnostics, Env, EnvConfig, LocomotionEnv, Path};

/// How many episodes to run and how long each may last.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub episodes: usize,
    pub max_steps: usize,
    /// Use this goal for every episode instead of sampling one
    pub goal: Option<Vec2>,
    /// Seed of the random policy
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            episodes: 5,
            max_steps: 200,
            goal: None,
            seed: None,
        }
    }
}

/// Uniform-random actions inside the actuator box.
struct RandomPolicy {
    rng: fastrand::Rng,
    bounds: ActionBounds,
}

impl RandomPolicy {
    fn act(&self) -> Vec<f32> {
        self.bounds
            .low
            .iter()
            .zip(&self.bounds.high)
            .map(|(lo, hi)| lo + (hi - lo) * self.rng.f32())
            .collect()
    }
}

/// Run the rollouts and return the diagnostics of the batch.
///
/// Besides the environment's own entries the record holds `NumEpisodes`,
/// `AverageReturn`, `AverageEpisodeLength` and `GoalsReached`.
///
/// # Errors
///
/// Fails if the environment cannot be built from `config` or if a step
/// reports a physics error.
pub fn run(config: &EnvConfig, options: &RunOptions) -> Result<Diagnostics> {
    let mut env = config.build().context("building environment")?;
    let policy = RandomPolicy {
        rng: options.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed),
        bounds: env.base().action_bounds(),
    };

    tracing::info!(
        episodes = options.episodes,
        max_steps = options.max_steps,
        reward_type = %config.goal.reward_type,
        obs_size = env.obs_size(),
        action_size = env.action_size(),
        "starting rollouts"
    );

    let mut paths = Vec::with_capacity(options.episodes);
    let mut reached = 0_usize;
    for episode in 0..options.episodes {
        let mut path = Path::new(env.reset_with_goal(options.goal));
        let mut done = false;
        while !done && path.len() < options.max_steps {
            let action = policy.act();
            let step = env
                .step(&action)
                .with_context(|| format!("episode {episode}, step {}", path.len()))?;
            done = step.done;
            path.push(action, step.observation, step.reward);
        }
        if done {
            reached += 1;
        }

        let goal = env.goal();
        tracing::info!(
            episode,
            steps = path.len(),
            total_reward = path.total_reward(),
            goal_x = goal.x,
            goal_y = goal.y,
            distance = ?env.goal_distance(),
            reached = done,
            "episode finished"
        );
        paths.push(path);
    }

    let mut diagnostics = env.diagnostics(&paths);
    record_returns(&paths, reached, &mut diagnostics);
    diagnostics.log();
    Ok(diagnostics)
}

#[allow(clippy::cast_precision_loss)]
fn record_returns(paths: &[Path], reached: usize, diagnostics: &mut Diagnostics) {
    diagnostics.record("NumEpisodes", paths.len() as f64);
    diagnostics.record("GoalsReached", reached as f64);
    if paths.is_empty() {
        return;
    }
    let n = paths.len() as f64;
    let total: f64 = paths.iter().map(|p| f64::from(p.total_reward())).sum();
    let steps: usize = paths.iter().map(Path::len).sum();
    diagnostics.record("AverageReturn", total / n);
    diagnostics.record("AverageEpisodeLength", steps as f64 / n);
}
