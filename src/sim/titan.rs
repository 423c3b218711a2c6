//! Titan: heavy construct form
//!
//! Gravity is amplified (the host applies `gravity_multiplier` when it
//! integrates). A tap snaps velocity straight to the stomp constant, and any
//! contact from above destroys the obstacle. Side hits still hurt.

use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity};
use super::strategy::{PhysicsStrategy, debug_check_dt};
use crate::tuning::TitanTuning;

#[derive(Debug, Clone)]
pub struct TitanPhysics {
    tuning: TitanTuning,
}

impl Default for TitanPhysics {
    fn default() -> Self {
        Self::new(&TitanTuning::default())
    }
}

impl TitanPhysics {
    pub fn new(tuning: &TitanTuning) -> Self {
        Self {
            tuning: tuning.clone(),
        }
    }

    /// Velocity applied on a stomp
    pub fn stomp_velocity(&self) -> f32 {
        self.tuning.stomp_velocity
    }
}

impl PhysicsStrategy for TitanPhysics {
    fn construct_type(&self) -> ConstructType {
        ConstructType::Titan
    }

    fn update(&mut self, player: &mut PlayerEntity, dt: f32, input: &InputState) {
        debug_check_dt(dt);
        if input.is_tap_frame {
            // Instant snap, not an acceleration
            player.velocity = self.tuning.stomp_velocity;
            log::trace!("Titan stomp: velocity -> {}", player.velocity);
        }
    }

    fn resolve_collision(&self, is_from_above: bool) -> CollisionResult {
        if is_from_above {
            CollisionResult::Destroy
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_with_velocity(y: f32, velocity: f32) -> PlayerEntity {
        let mut player = PlayerEntity::new(Vec2::new(50.0, y), 32.0, 48.0);
        player.velocity = velocity;
        player
    }

    #[test]
    fn test_titan_defaults() {
        let titan = TitanPhysics::default();
        assert_eq!(titan.construct_type(), ConstructType::Titan);
        assert_eq!(titan.gravity_multiplier(), TITAN_GRAVITY_MULTIPLIER);
        assert_eq!(titan.speed_multiplier(), 1.0);
        assert!(titan.hitbox_scale() > 1.0);
        assert!(titan.stomp_velocity() > 0.0, "stomp must point down");
    }

    #[test]
    fn test_titan_hitbox_is_larger() {
        let titan = TitanPhysics::default();
        let player = player_with_velocity(100.0, 0.0);
        let hitbox = titan.hitbox(&player);
        assert!(hitbox.width > player.width);
        assert!(hitbox.height > player.height);
        assert!((hitbox.center() - player.bounds().center()).length() < 0.001);
    }

    #[test]
    fn test_titan_custom_stomp() {
        let tuning = TitanTuning {
            stomp_velocity: 900.0,
            ..Default::default()
        };
        let mut titan = TitanPhysics::new(&tuning);
        let mut player = player_with_velocity(0.0, -50.0);
        titan.update(&mut player, SIM_DT, &InputState::tap(0.0));
        assert_eq!(player.velocity, 900.0);
    }

    proptest! {
        #[test]
        fn titan_destroys_only_from_above(from_above in any::<bool>()) {
            let expected = if from_above { CollisionResult::Destroy } else { CollisionResult::Damage };
            prop_assert_eq!(TitanPhysics::default().resolve_collision(from_above), expected);
        }

        #[test]
        fn titan_tap_snaps_to_stomp(
            y in -1000.0f32..1000.0,
            vel in -5000.0f32..5000.0,
            dt in 0.0f32..0.1,
        ) {
            let mut titan = TitanPhysics::default();
            let mut player = player_with_velocity(y, vel);
            titan.update(&mut player, dt, &InputState::tap(y));
            prop_assert_eq!(player.velocity, TITAN_STOMP_VELOCITY);
            prop_assert_eq!(player.pos.y, y);
        }

        #[test]
        fn titan_non_tap_leaves_velocity(
            vel in -5000.0f32..5000.0,
            was_pressed in any::<bool>(),
            is_pressed in any::<bool>(),
        ) {
            prop_assume!(!(is_pressed && !was_pressed));
            let mut titan = TitanPhysics::default();
            let mut player = player_with_velocity(200.0, vel);
            let input = InputState::from_edges(was_pressed, is_pressed, 200.0);
            titan.update(&mut player, SIM_DT, &input);
            prop_assert_eq!(player.velocity, vel);
        }
    }
}
