//! Construct orchestrator
//!
//! Holds the active construct, owns the invulnerability window and dispatches
//! updates and collisions to the active strategy. Strategy instances live in
//! a `StrategyArena` owned by the orchestrator, so their sub-state (Phase's
//! rail, Blink's teleport flag) survives transformations until an explicit
//! reset.

use serde::{Deserialize, Serialize};

use super::blink::BlinkPhysics;
use super::phase::{PhaseBounds, PhasePhysics};
use super::standard::StandardPhysics;
use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity, Rect};
use super::strategy::PhysicsStrategy;
use super::titan::TitanPhysics;
use crate::consts::*;
use crate::tuning::ConstructTuning;

/// One long-lived instance per construct form
#[derive(Debug, Clone, Default)]
pub struct StrategyArena {
    standard: StandardPhysics,
    titan: TitanPhysics,
    phase: PhasePhysics,
    blink: BlinkPhysics,
}

impl StrategyArena {
    /// Default tuning with the level's phase rails
    pub fn new(bounds: PhaseBounds) -> Self {
        Self::with_tuning(bounds, &ConstructTuning::default())
    }

    pub fn with_tuning(bounds: PhaseBounds, tuning: &ConstructTuning) -> Self {
        Self {
            standard: StandardPhysics::new(),
            titan: TitanPhysics::new(&tuning.titan),
            phase: PhasePhysics::new(bounds, &tuning.phase),
            blink: BlinkPhysics::new(&tuning.blink),
        }
    }

    /// Strategy bound to `construct`
    pub fn get(&self, construct: ConstructType) -> &dyn PhysicsStrategy {
        match construct {
            ConstructType::None => &self.standard,
            ConstructType::Titan => &self.titan,
            ConstructType::Phase => &self.phase,
            ConstructType::Blink => &self.blink,
        }
    }

    pub fn get_mut(&mut self, construct: ConstructType) -> &mut dyn PhysicsStrategy {
        match construct {
            ConstructType::None => &mut self.standard,
            ConstructType::Titan => &mut self.titan,
            ConstructType::Phase => &mut self.phase,
            ConstructType::Blink => &mut self.blink,
        }
    }

    pub fn titan(&self) -> &TitanPhysics {
        &self.titan
    }

    pub fn phase(&self) -> &PhasePhysics {
        &self.phase
    }

    pub fn phase_mut(&mut self) -> &mut PhasePhysics {
        &mut self.phase
    }

    pub fn blink(&self) -> &BlinkPhysics {
        &self.blink
    }

    pub fn blink_mut(&mut self) -> &mut BlinkPhysics {
        &mut self.blink
    }

    /// Clear every strategy's per-life sub-state
    pub fn reset(&mut self) {
        for construct in ConstructType::ALL {
            self.get_mut(construct).reset();
        }
        log::debug!("Strategy arena reset");
    }
}

/// Look up the strategy for a construct (total over `ConstructType`)
pub fn get_strategy_for_type(
    arena: &StrategyArena,
    construct: ConstructType,
) -> &dyn PhysicsStrategy {
    arena.get(construct)
}

/// Orchestrator state, replaced wholesale on every transformation
///
/// Fields are read through accessors so collaborators can't mistake the
/// armed flag for the timed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructSystemState {
    active_construct: ConstructType,
    window_armed: bool,
    invulnerability_end_time: Millis,
}

impl Default for ConstructSystemState {
    fn default() -> Self {
        create_construct_system_state()
    }
}

impl ConstructSystemState {
    pub fn active_construct(&self) -> ConstructType {
        self.active_construct
    }

    /// Armed by a transform. Stays set after the window lapses; use
    /// `is_invulnerable` for the timed answer.
    pub fn window_armed(&self) -> bool {
        self.window_armed
    }

    /// Tick-clock time at which invulnerability lapses
    pub fn invulnerability_end_time(&self) -> Millis {
        self.invulnerability_end_time
    }

    pub fn is_invulnerable(&self, now: Millis) -> bool {
        is_invulnerable(self, now)
    }

    /// The live strategy for `active_construct`
    pub fn current_strategy<'a>(&self, arena: &'a StrategyArena) -> &'a dyn PhysicsStrategy {
        arena.get(self.active_construct)
    }
}

/// Baseline state for a new player life
pub fn create_construct_system_state() -> ConstructSystemState {
    ConstructSystemState {
        active_construct: ConstructType::None,
        window_armed: false,
        invulnerability_end_time: 0,
    }
}

/// New state for a transformation at `now`. Strategy sub-state is untouched.
pub fn transform_to(
    state: &ConstructSystemState,
    construct: ConstructType,
    now: Millis,
) -> ConstructSystemState {
    let next = ConstructSystemState {
        active_construct: construct,
        window_armed: true,
        invulnerability_end_time: now.saturating_add(INVULNERABILITY_MS),
    };
    log::debug!(
        "Transform {} -> {} at {}ms (invulnerable until {}ms)",
        state.active_construct.as_str(),
        construct.as_str(),
        now,
        next.invulnerability_end_time
    );
    next
}

/// Window check; the end time itself is not invulnerable
pub fn is_invulnerable(state: &ConstructSystemState, now: Millis) -> bool {
    now < state.invulnerability_end_time
}

/// Host-facing construct system: arena plus current state
#[derive(Debug, Clone, Default)]
pub struct ConstructSystem {
    strategies: StrategyArena,
    state: ConstructSystemState,
}

impl ConstructSystem {
    pub fn new(bounds: PhaseBounds) -> Self {
        Self::with_tuning(bounds, &ConstructTuning::default())
    }

    pub fn with_tuning(bounds: PhaseBounds, tuning: &ConstructTuning) -> Self {
        Self {
            strategies: StrategyArena::with_tuning(bounds, tuning),
            state: create_construct_system_state(),
        }
    }

    pub fn state(&self) -> &ConstructSystemState {
        &self.state
    }

    pub fn active_construct(&self) -> ConstructType {
        self.state.active_construct
    }

    pub fn current_strategy(&self) -> &dyn PhysicsStrategy {
        self.state.current_strategy(&self.strategies)
    }

    pub fn strategies(&self) -> &StrategyArena {
        &self.strategies
    }

    pub fn strategies_mut(&mut self) -> &mut StrategyArena {
        &mut self.strategies
    }

    /// Advance the active strategy by one tick
    pub fn update(&mut self, player: &mut PlayerEntity, dt: f32, input: &InputState) {
        self.strategies
            .get_mut(self.state.active_construct)
            .update(player, dt, input);
    }

    /// Switch forms and re-arm invulnerability (also for same-form repeats)
    pub fn transform_to(&mut self, construct: ConstructType, now: Millis) {
        self.state = transform_to(&self.state, construct, now);
    }

    pub fn is_invulnerable(&self, now: Millis) -> bool {
        is_invulnerable(&self.state, now)
    }

    pub fn invulnerability_end_time(&self) -> Millis {
        self.state.invulnerability_end_time
    }

    /// Milliseconds left in the window (0 once lapsed)
    pub fn invulnerability_remaining(&self, now: Millis) -> Millis {
        if self.is_invulnerable(now) {
            self.state.invulnerability_end_time - now
        } else {
            0
        }
    }

    /// Raw strategy decision, ignoring the invulnerability window
    pub fn resolve_collision(&self, is_from_above: bool) -> CollisionResult {
        self.current_strategy().resolve_collision(is_from_above)
    }

    /// Strategy decision with the invulnerability window applied.
    /// Damage is suppressed inside the window; destruction still happens.
    pub fn resolve_hit(&self, is_from_above: bool, now: Millis) -> CollisionResult {
        match self.resolve_collision(is_from_above) {
            CollisionResult::Damage if self.is_invulnerable(now) => CollisionResult::Ignore,
            result => result,
        }
    }

    /// Overlap test against the active hitbox, then `resolve_hit`.
    /// Returns `None` when the obstacle doesn't touch the player.
    pub fn resolve_contact(
        &self,
        player: &PlayerEntity,
        obstacle: &Rect,
        is_from_above: bool,
        now: Millis,
    ) -> Option<CollisionResult> {
        if self.hitbox(player).intersects(obstacle) {
            Some(self.resolve_hit(is_from_above, now))
        } else {
            None
        }
    }

    /// Combined immunity check shared with the dash ability
    pub fn is_hittable(&self, now: Millis, dash_immune: bool) -> bool {
        !dash_immune && !self.is_invulnerable(now)
    }

    /// Forwarded to Blink; only consulted while Blink is active
    pub fn set_teleporting(&mut self, teleporting: bool) {
        self.strategies.blink_mut().set_teleporting(teleporting);
    }

    pub fn hitbox(&self, player: &PlayerEntity) -> Rect {
        self.current_strategy().hitbox(player)
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.current_strategy().speed_multiplier()
    }

    pub fn gravity_multiplier(&self) -> f32 {
        self.current_strategy().gravity_multiplier()
    }

    /// Back to the base form with every strategy cleared
    pub fn reset_for_new_life(&mut self) {
        self.strategies.reset();
        self.state = create_construct_system_state();
    }
}
