use physics::{ActionBounds, Vec2};

use crate::diagnostics::{Diagnostics, Path};
use crate::error::EnvError;

/// Result of advancing an environment by one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub done: bool,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying simulation, such as a wrongly
    /// sized action or a diverged state.
    fn step(&mut self, action: &[f32]) -> Result<Step, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}

/// A physics-backed locomotion body that task environments build on.
///
/// Implementors own the simulation; task layers such as
/// [`RandomGoalSwimmerEnv`](crate::RandomGoalSwimmerEnv) only read the body
/// state and decide rewards and termination.
pub trait LocomotionEnv {
    /// Reset the simulation and return the proprioceptive observation.
    fn reset_model(&mut self) -> Vec<f32>;

    /// Proprioceptive observation of the current state.
    fn observe(&self) -> Vec<f32>;

    /// Length of [`LocomotionEnv::observe`].
    fn proprioceptive_size(&self) -> usize;

    /// Advance the physics by one control step.
    ///
    /// # Errors
    ///
    /// Whatever the simulation reports; callers pass it through unchanged.
    fn advance_physics(&mut self, action: &[f32]) -> Result<(), EnvError>;

    /// Planar center of mass of the body.
    fn center_of_mass(&self) -> Vec2;

    fn action_bounds(&self) -> ActionBounds;

    /// Record body-level statistics over finished `paths`.
    fn log_diagnostics(&self, _paths: &[Path], _diagnostics: &mut Diagnostics) {}
}
