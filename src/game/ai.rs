use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::physics::{BodyHandle, PhysicsWorld};

/// Computer-paddle difficulty. Menu selection 1/2/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Per-frame decision function for the computer paddle.
///
/// Carries its own RNG, seeded once at construction, so draws stay
/// independent across frames.
#[derive(Debug)]
pub struct AiController {
    rng: SmallRng,
    frame: u64,
}

impl AiController {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            frame: 0,
        }
    }

    /// Deterministic controller for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Run one frame of the selected behavior. Medium and Hard are
    /// placeholders: the dispatch must route correctly, the bodies stay
    /// untouched.
    pub fn update(&mut self, difficulty: Difficulty, world: &mut PhysicsWorld, paddle: BodyHandle) {
        self.frame = self.frame.wrapping_add(1);
        match difficulty {
            Difficulty::Easy => self.easy(world, paddle),
            Difficulty::Medium => {}
            Difficulty::Hard => {}
        }
    }

    /// Random shove every third frame.
    fn easy(&mut self, world: &mut PhysicsWorld, paddle: BodyHandle) {
        if self.frame % 3 != 0 {
            return;
        }
        let x = self.rng.random_range(-2.0..2.0);
        let z = self.rng.random_range(-2.0..2.0);
        trace!(x, z, "easy AI impulse");
        world.apply_impulse(paddle, Vec3::new(x, 0.0, z));
    }
}

impl Default for AiController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BodyShape;

    fn paddle_world() -> (PhysicsWorld, BodyHandle) {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let paddle = world.add_dynamic_body(
            BodyShape::Cylinder {
                half_height: 0.1,
                radius: 0.2,
            },
            2.0,
            Vec3::ZERO,
            0.5,
            0.0,
        );
        (world, paddle)
    }

    #[test]
    fn level_mapping() {
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
    }

    #[test]
    fn easy_shoves_within_the_first_three_frames() {
        let (mut world, paddle) = paddle_world();
        let mut ai = AiController::with_seed(7);

        for _ in 0..3 {
            ai.update(Difficulty::Easy, &mut world, paddle);
        }
        assert_ne!(world.linear_velocity(paddle).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn stub_difficulties_leave_the_body_alone() {
        let (mut world, paddle) = paddle_world();
        let mut ai = AiController::with_seed(7);

        for _ in 0..10 {
            ai.update(Difficulty::Medium, &mut world, paddle);
            ai.update(Difficulty::Hard, &mut world, paddle);
        }
        assert_eq!(world.linear_velocity(paddle).unwrap(), Vec3::ZERO);
        assert_eq!(world.user_force(paddle).unwrap(), Vec3::ZERO);
    }
}
