use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("action has {actual} components, expected {expected}")]
    ActionShape { expected: usize, actual: usize },
    #[error("state has {actual} joints, expected {expected}")]
    StateShape { expected: usize, actual: usize },
    #[error("simulation diverged at substep {step}")]
    Diverged { step: u64 },
    #[error("invalid swimmer configuration: {0}")]
    InvalidConfig(&'static str),
}
