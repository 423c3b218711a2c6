//! Base form (no construct)
//!
//! Movement in the base form belongs to the host loop's dual-control swap, so
//! this strategy leaves the player untouched.

use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity};
use super::strategy::{PhysicsStrategy, debug_check_dt};

#[derive(Debug, Clone, Default)]
pub struct StandardPhysics;

impl StandardPhysics {
    pub fn new() -> Self {
        Self
    }
}

impl PhysicsStrategy for StandardPhysics {
    fn construct_type(&self) -> ConstructType {
        ConstructType::None
    }

    fn update(&mut self, _player: &mut PlayerEntity, dt: f32, _input: &InputState) {
        debug_check_dt(dt);
    }

    fn resolve_collision(&self, _is_from_above: bool) -> CollisionResult {
        CollisionResult::Damage
    }

    fn speed_multiplier(&self) -> f32 {
        1.0
    }

    fn gravity_multiplier(&self) -> f32 {
        1.0
    }
}
