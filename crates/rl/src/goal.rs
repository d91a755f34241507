use physics::Vec2;

/// Half-width of the square goals are drawn from.
pub const GOAL_EXTENT: f32 = 5.0;

/// Uniform sampler over `[-extent, extent]²`.
pub struct GoalSampler {
    rng: fastrand::Rng,
    extent: f32,
}

impl GoalSampler {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new(), extent: GOAL_EXTENT }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed), extent: GOAL_EXTENT }
    }

    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn sample(&mut self) -> Vec2 {
        let x = self.coordinate();
        let y = self.coordinate();
        Vec2::new(x, y)
    }

    fn coordinate(&mut self) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * self.extent
    }
}

impl Default for GoalSampler {
    fn default() -> Self {
        Self::new()
    }
}
