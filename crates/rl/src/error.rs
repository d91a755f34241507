use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid reward type {0:?}, expected \"dense\" or \"sparse\"")]
    InvalidRewardMode(String),
    #[error("invalid goal parameter: {0}")]
    InvalidParameter(&'static str),
    #[error(transparent)]
    Swimmer(#[from] PhysicsError),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
