use physics::{ActionBounds, PhysicsError, SwimmerConfig, SwimmerSim, Vec2};

use crate::diagnostics::{summary, Diagnostics, Path};
use crate::env::{Env, LocomotionEnv, Step};
use crate::error::EnvError;
use crate::reward::control_cost;

/// Default control cost of the plain forward-swimming task.
pub const DEFAULT_CTRL_COST_COEFF: f32 = 1e-2;

/// Swimmer locomotion environment.
///
/// Observation layout: `qpos` (x, y, heading, joint angles), `qvel`, then
/// the planar center of mass. On its own the task rewards forward velocity
/// of the center of mass along x and never terminates.
pub struct SwimmerEnv {
    sim: SwimmerSim,
    ctrl_cost_coeff: f32,
}

impl SwimmerEnv {
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] for an unusable `config`.
    pub fn new(config: SwimmerConfig) -> Result<Self, PhysicsError> {
        Ok(Self::from_sim(SwimmerSim::new(config)?))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] for an unusable `config`.
    pub fn with_seed(config: SwimmerConfig, seed: u64) -> Result<Self, PhysicsError> {
        Ok(Self::from_sim(SwimmerSim::with_seed(config, seed)?))
    }

    #[must_use]
    pub fn from_sim(sim: SwimmerSim) -> Self {
        Self { sim, ctrl_cost_coeff: DEFAULT_CTRL_COST_COEFF }
    }

    #[must_use]
    pub fn with_ctrl_cost_coeff(mut self, coeff: f32) -> Self {
        self.ctrl_cost_coeff = coeff;
        self
    }

    #[must_use]
    pub fn sim(&self) -> &SwimmerSim {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut SwimmerSim {
        &mut self.sim
    }

    /// Index of the center of mass x coordinate in the observation.
    #[must_use]
    pub fn com_x_index(&self) -> usize {
        2 * (3 + self.sim.config().joints())
    }
}

impl LocomotionEnv for SwimmerEnv {
    fn reset_model(&mut self) -> Vec<f32> {
        self.sim.reset();
        self.observe()
    }

    fn observe(&self) -> Vec<f32> {
        let state = self.sim.state();
        let mut obs = state.qpos();
        obs.extend(state.qvel());
        obs.extend(self.sim.center_of_mass().to_array());
        obs
    }

    fn proprioceptive_size(&self) -> usize {
        self.com_x_index() + 2
    }

    fn advance_physics(&mut self, action: &[f32]) -> Result<(), EnvError> {
        self.sim.step(action)?;
        Ok(())
    }

    fn center_of_mass(&self) -> Vec2 {
        self.sim.center_of_mass()
    }

    fn action_bounds(&self) -> ActionBounds {
        self.sim.action_bounds()
    }

    /// Forward progress of the center of mass along x, per path.
    fn log_diagnostics(&self, paths: &[Path], diagnostics: &mut Diagnostics) {
        let idx = self.com_x_index();
        let progress: Vec<f64> = paths
            .iter()
            .filter_map(|path| {
                let first = path.observations.first()?.get(idx)?;
                let last = path.observations.last()?.get(idx)?;
                Some(f64::from(last - first))
            })
            .collect();

        let Some((mean, max, min, std)) = summary(&progress) else {
            tracing::warn!("no paths with observations to report forward progress on");
            return;
        };
        diagnostics.record("AverageForwardProgress", mean);
        diagnostics.record("MaxForwardProgress", max);
        diagnostics.record("MinForwardProgress", min);
        diagnostics.record("StdForwardProgress", std);
    }
}

impl Env for SwimmerEnv {
    fn step(&mut self, action: &[f32]) -> Result<Step, EnvError> {
        self.advance_physics(action)?;
        let forward_reward = self.sim.center_of_mass_velocity().x;
        let ctrl_cost = control_cost(action, &self.sim.action_bounds(), self.ctrl_cost_coeff);
        Ok(Step {
            observation: self.observe(),
            reward: forward_reward - ctrl_cost,
            done: false,
        })
    }

    fn reset(&mut self) -> Vec<f32> {
        self.reset_model()
    }

    fn obs_size(&self) -> usize {
        self.proprioceptive_size()
    }

    fn action_size(&self) -> usize {
        self.sim.action_size()
    }
}
