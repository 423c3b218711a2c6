//! Physics strategy contract shared by every construct form

use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity, Rect};

/// Per-form movement, collision and hitbox rules
///
/// Implementations must be deterministic: `update` depends only on its
/// arguments and the strategy's own sub-state, and `resolve_collision` only on
/// `is_from_above` and the strategy's current flags.
pub trait PhysicsStrategy {
    /// The construct this strategy implements
    fn construct_type(&self) -> ConstructType;

    /// Advance one tick, mutating the player in place
    fn update(&mut self, player: &mut PlayerEntity, dt: f32, input: &InputState);

    /// Decide what a contact does to the player
    fn resolve_collision(&self, is_from_above: bool) -> CollisionResult;

    /// Collision bounds for the player in this form
    fn hitbox(&self, player: &PlayerEntity) -> Rect {
        player.bounds().scaled_about_center(self.hitbox_scale())
    }

    /// Hitbox size relative to the player's bounds
    fn hitbox_scale(&self) -> f32 {
        1.0
    }

    fn speed_multiplier(&self) -> f32;

    /// Applied by the host when it integrates gravity
    fn gravity_multiplier(&self) -> f32;

    /// Clear per-life sub-state
    fn reset(&mut self) {}
}

/// Shared precondition for `update` implementations
#[inline]
pub(crate) fn debug_check_dt(dt: f32) {
    debug_assert!(
        dt.is_finite() && dt >= 0.0,
        "update called with invalid dt: {dt}"
    );
}
