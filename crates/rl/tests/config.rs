use rl::{ConfigError, Env, EnvConfig, RewardMode};
use std::fs;

#[test]
fn empty_object_gives_defaults() {
    let config = EnvConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EnvConfig::default());
    assert_eq!(config.goal.reward_type, RewardMode::Dense);
    assert_eq!(config.goal.goal_reward, 10.0);
    assert_eq!(config.goal.goal_reward_weight, 1e-3);
    assert_eq!(config.goal.goal_radius, 0.25);
    assert_eq!(config.goal.ctrl_cost_coeff, 0.0);
}

#[test]
fn parse_example_file() {
    let json = fs::read_to_string("tests/data/sparse.json").unwrap();
    let config = EnvConfig::from_json_str(&json).unwrap();
    assert_eq!(config.goal.reward_type, RewardMode::Sparse);
    assert_eq!(config.goal.goal_radius, 0.5);
    assert_eq!(config.goal.ctrl_cost_coeff, 0.01);
    assert_eq!(config.swimmer.frame_skip, 8);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn unknown_reward_type_fails_to_parse() {
    let err = EnvConfig::from_json_str(r#"{"goal": {"reward_type": "shaped"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = EnvConfig::from_path("tests/data/does_not_exist.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn bad_swimmer_is_rejected_on_build() {
    let config = EnvConfig::from_json_str(r#"{"swimmer": {"segments": 1}}"#).unwrap();
    assert!(matches!(config.build(), Err(ConfigError::Swimmer(_))));
}

#[test]
fn seeded_build_is_reproducible() {
    let config = EnvConfig::from_path("tests/data/sparse.json").unwrap();
    let mut a = config.build().unwrap();
    let mut b = config.build().unwrap();
    assert_eq!(a.reset(), b.reset());
    assert_eq!(a.goal(), b.goal());
    assert_eq!(a.step(&[10.0, -10.0]).unwrap(), b.step(&[10.0, -10.0]).unwrap());
}
