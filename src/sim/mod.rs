//! Deterministic construct simulation
//!
//! Everything here must stay pure and replayable:
//! - `dt` and `now` are always passed in, never sampled
//! - Strategy sub-state lives in an explicitly owned arena
//! - No rendering or platform dependencies

pub mod blink;
pub mod construct;
pub mod phase;
pub mod standard;
pub mod state;
pub mod strategy;
pub mod titan;

pub use blink::BlinkPhysics;
pub use construct::{
    ConstructSystem, ConstructSystemState, StrategyArena, create_construct_system_state,
    get_strategy_for_type, is_invulnerable, transform_to,
};
pub use phase::{GravityDirection, PhaseBounds, PhasePhysics};
pub use standard::StandardPhysics;
pub use state::{CollisionResult, ConstructType, InputState, PlayerEntity, Rect};
pub use strategy::PhysicsStrategy;
pub use titan::TitanPhysics;
