//! Blink: teleport construct form
//!
//! The teleport ability marks the frames a traversal is in flight through
//! `set_teleporting`. While the flag is up the player is not spatially present
//! for collisions.

use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity};
use super::strategy::{PhysicsStrategy, debug_check_dt};
use crate::tuning::BlinkTuning;

#[derive(Debug, Clone)]
pub struct BlinkPhysics {
    teleporting: bool,
    tuning: BlinkTuning,
}

impl Default for BlinkPhysics {
    fn default() -> Self {
        Self::new(&BlinkTuning::default())
    }
}

impl BlinkPhysics {
    pub fn new(tuning: &BlinkTuning) -> Self {
        Self {
            teleporting: false,
            tuning: tuning.clone(),
        }
    }

    /// Driven by the teleport collaborator before collision checks
    pub fn set_teleporting(&mut self, teleporting: bool) {
        if self.teleporting != teleporting {
            log::trace!("Blink teleporting: {}", teleporting);
        }
        self.teleporting = teleporting;
    }

    pub fn is_teleporting(&self) -> bool {
        self.teleporting
    }
}

impl PhysicsStrategy for BlinkPhysics {
    fn construct_type(&self) -> ConstructType {
        ConstructType::Blink
    }

    fn update(&mut self, _player: &mut PlayerEntity, dt: f32, _input: &InputState) {
        // Traversal itself is owned by the teleport ability
        debug_check_dt(dt);
    }

    fn resolve_collision(&self, _is_from_above: bool) -> CollisionResult {
        if self.teleporting {
            CollisionResult::Ignore
        } else {
            CollisionResult::Damage
        }
    }

    fn hitbox_scale(&self) -> f32 {
        self.tuning.hitbox_scale
    }

    fn speed_multiplier(&self) -> f32 {
        self.tuning.speed_multiplier
    }

    fn gravity_multiplier(&self) -> f32 {
        self.tuning.gravity_multiplier
    }

    fn reset(&mut self) {
        self.teleporting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_blink_defaults() {
        let blink = BlinkPhysics::default();
        assert_eq!(blink.construct_type(), ConstructType::Blink);
        assert!(!blink.is_teleporting());
        assert_eq!(blink.speed_multiplier(), BLINK_SPEED_MULTIPLIER);
        assert_eq!(blink.gravity_multiplier(), BLINK_GRAVITY_MULTIPLIER);
        assert_eq!(blink.hitbox_scale(), BLINK_HITBOX_SCALE);
    }

    #[test]
    fn test_blink_flag_lifecycle() {
        let mut blink = BlinkPhysics::default();
        assert_eq!(blink.resolve_collision(false), CollisionResult::Damage);

        blink.set_teleporting(true);
        assert_eq!(blink.resolve_collision(false), CollisionResult::Ignore);

        blink.set_teleporting(false);
        assert_eq!(blink.resolve_collision(true), CollisionResult::Damage);

        blink.set_teleporting(true);
        blink.reset();
        assert!(!blink.is_teleporting());
    }

    #[test]
    fn test_blink_update_keeps_flag() {
        let mut blink = BlinkPhysics::default();
        let mut player = PlayerEntity::new(Vec2::new(0.0, 0.0), 32.0, 48.0);
        blink.set_teleporting(true);
        blink.update(&mut player, SIM_DT, &InputState::tap(0.0));
        assert!(blink.is_teleporting());
        assert_eq!(player.velocity, 0.0);
    }

    proptest! {
        #[test]
        fn blink_ignores_only_while_teleporting(teleporting in any::<bool>(), from_above in any::<bool>()) {
            let mut blink = BlinkPhysics::default();
            blink.set_teleporting(teleporting);
            let expected = if teleporting { CollisionResult::Ignore } else { CollisionResult::Damage };
            prop_assert_eq!(blink.resolve_collision(from_above), expected);
        }
    }
}
