#![allow(dead_code)]

use physics::{ActionBounds, PhysicsError, Vec2};
use rl::{EnvError, LocomotionEnv};

/// Locomotion body whose center of mass is placed by the test.
///
/// Every `advance_physics` call moves the center of mass to the next
/// scripted position, or leaves it where it is once the script runs out.
pub struct ScriptedBody {
    pub com: Vec2,
    pub script: Vec<Vec2>,
    pub resets: usize,
    pub steps: usize,
}

impl ScriptedBody {
    pub const OBS_SIZE: usize = 4;

    pub fn at(com: Vec2) -> Self {
        Self { com, script: Vec::new(), resets: 0, steps: 0 }
    }

    pub fn scripted(script: Vec<Vec2>) -> Self {
        let mut body = Self::at(Vec2::ZERO);
        body.script = script.into_iter().rev().collect();
        body
    }
}

impl LocomotionEnv for ScriptedBody {
    fn reset_model(&mut self) -> Vec<f32> {
        self.resets += 1;
        self.observe()
    }

    fn observe(&self) -> Vec<f32> {
        vec![self.com.x, self.com.y, 0.5, -0.5]
    }

    fn proprioceptive_size(&self) -> usize {
        Self::OBS_SIZE
    }

    fn advance_physics(&mut self, action: &[f32]) -> Result<(), EnvError> {
        if action.len() != 2 {
            return Err(PhysicsError::ActionShape { expected: 2, actual: action.len() }.into());
        }
        self.steps += 1;
        if let Some(next) = self.script.pop() {
            self.com = next;
        }
        Ok(())
    }

    fn center_of_mass(&self) -> Vec2 {
        self.com
    }

    fn action_bounds(&self) -> ActionBounds {
        ActionBounds::uniform(2, -1.0, 1.0)
    }
}
