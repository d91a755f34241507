use physics::{PhysicsError, SwimmerConfig, SwimmerSim, SwimmerState, Vec2};

fn quiet_config() -> SwimmerConfig {
    SwimmerConfig {
        reset_noise_scale: 0.0,
        reset_velocity_noise_scale: 0.0,
        ..Default::default()
    }
}

#[test]
fn rest_pose_center_of_mass() {
    let sim = SwimmerSim::new(SwimmerConfig::default()).unwrap();
    // three unit segments laid out along +x from the head center
    let com = sim.center_of_mass();
    assert!((com.x - 1.0).abs() < 1e-6);
    assert!(com.y.abs() < 1e-6);
}

#[test]
fn zero_action_at_rest_stays_put() {
    let mut sim = SwimmerSim::new(quiet_config()).unwrap();
    sim.reset();
    let before = sim.center_of_mass();
    for _ in 0..20 {
        sim.step(&[0.0, 0.0]).unwrap();
    }
    assert!(before.distance(sim.center_of_mass()) < 1e-6);
}

#[test]
fn reset_noise_is_bounded() {
    let config = SwimmerConfig::default();
    let mut sim = SwimmerSim::with_seed(config.clone(), 3).unwrap();
    for _ in 0..20 {
        let state = sim.reset().clone();
        for q in state.qpos() {
            assert!(q.abs() <= config.reset_noise_scale);
        }
        for v in state.qvel() {
            assert!(v.abs() <= config.reset_velocity_noise_scale);
        }
    }
}

#[test]
fn seeded_resets_are_reproducible() {
    let mut a = SwimmerSim::with_seed(SwimmerConfig::default(), 11).unwrap();
    let mut b = SwimmerSim::with_seed(SwimmerConfig::default(), 11).unwrap();
    assert_eq!(a.reset(), b.reset());
}

#[test]
fn wrong_action_length_is_rejected() {
    let mut sim = SwimmerSim::new(SwimmerConfig::default()).unwrap();
    let err = sim.step(&[1.0]).unwrap_err();
    assert_eq!(err, PhysicsError::ActionShape { expected: 2, actual: 1 });
}

#[test]
fn actions_are_clipped_to_bounds() {
    let mut clipped = SwimmerSim::new(quiet_config()).unwrap();
    let mut saturated = SwimmerSim::new(quiet_config()).unwrap();
    for _ in 0..10 {
        clipped.step(&[50.0, -50.0]).unwrap();
        saturated.step(&[500.0, -500.0]).unwrap();
    }
    assert_eq!(clipped.state(), saturated.state());
}

#[test]
fn joints_respect_limit() {
    let config = quiet_config();
    let limit = config.joint_limit;
    let mut sim = SwimmerSim::new(config).unwrap();
    for _ in 0..500 {
        sim.step(&[50.0, 50.0]).unwrap();
    }
    for q in &sim.state().joint_angles {
        assert!(q.abs() <= limit + 1e-6, "joint angle {q} exceeds {limit}");
    }
}

#[test]
fn undulation_moves_center_of_mass() {
    let mut sim = SwimmerSim::new(quiet_config()).unwrap();
    let start = sim.center_of_mass();
    let dt = sim.control_dt();
    for i in 0..200_u16 {
        let t = f32::from(i) * dt;
        let phase = 2.0 * std::f32::consts::PI * t;
        sim.step(&[50.0 * phase.sin(), 50.0 * (phase - 1.5).sin()]).unwrap();
    }
    let moved = start.distance(sim.center_of_mass());
    assert!(moved > 1e-3, "center of mass moved only {moved}");
    assert!(sim.state().is_finite());
}

#[test]
fn non_finite_state_reports_divergence() {
    let mut sim = SwimmerSim::new(SwimmerConfig::default()).unwrap();
    let mut state = SwimmerState::at_rest(2);
    state.velocity = Vec2::new(f32::NAN, 0.0);
    sim.set_state(state).unwrap();
    assert!(matches!(sim.step(&[0.0, 0.0]), Err(PhysicsError::Diverged { .. })));
}

#[test]
fn state_with_wrong_joint_count_is_rejected() {
    let mut sim = SwimmerSim::new(SwimmerConfig::default()).unwrap();
    let err = sim.set_state(SwimmerState::at_rest(4)).unwrap_err();
    assert_eq!(err, PhysicsError::StateShape { expected: 2, actual: 4 });
}

#[test]
fn action_bounds_follow_config() {
    let sim = SwimmerSim::new(SwimmerConfig::default()).unwrap();
    let bounds = sim.action_bounds();
    assert_eq!(bounds.low, vec![-50.0, -50.0]);
    assert_eq!(bounds.high, vec![50.0, 50.0]);
    assert_eq!(bounds.half_range().collect::<Vec<_>>(), vec![50.0, 50.0]);
}

#[test]
fn segments_average_to_center_of_mass() {
    let mut sim = SwimmerSim::with_seed(SwimmerConfig::default(), 5).unwrap();
    sim.reset();
    for _ in 0..10 {
        sim.step(&[30.0, -20.0]).unwrap();
    }
    let segments = sim.segments();
    assert_eq!(segments.len(), 3);
    let mean = segments.iter().fold(Vec2::ZERO, |acc, s| acc + s.center) / 3.0;
    assert!(mean.distance(sim.center_of_mass()) < 1e-5);
    // head segment sits at the state position
    assert_eq!(segments[0].center, sim.state().position);
}
