use physics::{SwimmerConfig, Vec2};
use rl::{Env, GoalConfig, LocomotionEnv, Path, RandomGoalSwimmerEnv, RewardMode, SwimmerEnv};

fn quiet() -> SwimmerConfig {
    SwimmerConfig {
        reset_noise_scale: 0.0,
        reset_velocity_noise_scale: 0.0,
        ..Default::default()
    }
}

/// Travelling wave along the two joints.
fn gait(t: usize) -> Vec<f32> {
    #[allow(clippy::cast_precision_loss)]
    let phase = t as f32 * 0.25;
    vec![50.0 * phase.sin(), 50.0 * (phase - 1.5).sin()]
}

#[test]
fn observation_layout() {
    let mut env = SwimmerEnv::with_seed(SwimmerConfig::default(), 1).unwrap();
    let obs = env.reset();
    assert_eq!(obs.len(), 12);
    assert_eq!(env.obs_size(), 12);
    assert_eq!(env.action_size(), 2);

    let com = env.center_of_mass();
    let idx = env.com_x_index();
    assert_eq!(idx, 10);
    assert_eq!(obs[idx], com.x);
    assert_eq!(obs[idx + 1], com.y);
}

#[test]
fn resting_swimmer_earns_nothing() {
    let mut env = SwimmerEnv::new(quiet()).unwrap();
    env.reset();
    let step = env.step(&[0.0, 0.0]).unwrap();
    assert!(step.reward.abs() < 1e-6);
    assert!(!step.done);
}

#[test]
fn control_cost_lowers_reward() {
    let mut cheap = SwimmerEnv::new(quiet()).unwrap().with_ctrl_cost_coeff(0.0);
    let mut costly = SwimmerEnv::new(quiet()).unwrap().with_ctrl_cost_coeff(1.0);
    let a = cheap.step(&[50.0, 50.0]).unwrap();
    let b = costly.step(&[50.0, 50.0]).unwrap();
    // 0.5 * 1.0 * (1 + 1)
    assert!((a.reward - b.reward - 1.0).abs() < 1e-5);
}

#[test]
fn forward_progress_diagnostics() {
    let mut env = SwimmerEnv::new(quiet()).unwrap();
    let mut paths = Vec::new();
    for _ in 0..2 {
        let mut path = Path::new(env.reset());
        for t in 0..50 {
            let action = gait(t);
            let step = env.step(&action).unwrap();
            path.push(action, step.observation, step.reward);
        }
        paths.push(path);
    }

    let mut diagnostics = rl::Diagnostics::new();
    env.log_diagnostics(&paths, &mut diagnostics);
    for key in [
        "AverageForwardProgress",
        "MaxForwardProgress",
        "MinForwardProgress",
        "StdForwardProgress",
    ] {
        assert!(diagnostics.get(key).is_some_and(f64::is_finite), "missing {key}");
    }
    // identical noiseless episodes
    assert!(diagnostics.get("StdForwardProgress").unwrap() < 1e-6);
}

#[test]
fn no_paths_no_progress_entries() {
    let env = SwimmerEnv::new(quiet()).unwrap();
    let mut diagnostics = rl::Diagnostics::new();
    env.log_diagnostics(&[], &mut diagnostics);
    assert!(diagnostics.is_empty());
}

#[test]
fn goal_swimmer_over_real_body() {
    let config = GoalConfig { reward_type: RewardMode::Sparse, ..Default::default() };
    let base = SwimmerEnv::new(quiet()).unwrap();
    let mut env = RandomGoalSwimmerEnv::new(config, base).unwrap();

    let obs = env.reset_with_goal(Some(Vec2::new(4.0, -4.0)));
    assert_eq!(obs.len(), 14);
    assert_eq!(&obs[12..], &[4.0, -4.0]);

    let mut path = Path::new(obs);
    for t in 0..20 {
        let action = gait(t);
        let step = env.step(&action).unwrap();
        assert_eq!(step.reward, 0.0);
        assert!(!step.done);
        path.push(action, step.observation, step.reward);
    }

    let diagnostics = env.diagnostics(&[path]);
    assert!(diagnostics.get("AverageForwardProgress").is_some());
    let distance = diagnostics.get("FinalDistanceFromGoal").unwrap();
    let com = env.base().center_of_mass();
    assert!((distance - f64::from(com.distance(Vec2::new(4.0, -4.0)))).abs() < 1e-6);
    assert!((diagnostics.get("OriginDistanceFromGoal").unwrap() - 32f64.sqrt()).abs() < 1e-5);
}

#[test]
fn starting_on_the_goal_ends_the_episode() {
    let config = GoalConfig { reward_type: RewardMode::Sparse, ..Default::default() };
    let base = SwimmerEnv::new(quiet()).unwrap();
    let mut env = RandomGoalSwimmerEnv::new(config, base).unwrap();
    env.reset_with_goal(None);
    // the resting swimmer's center of mass is at (1, 0)
    env.reset_with_goal(Some(Vec2::new(1.0, 0.0)));
    let step = env.step(&[0.0, 0.0]).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, 10.0);
}
