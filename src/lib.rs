//! Construct Physics - form-switching physics core for a 2D runner
//!
//! Core modules:
//! - `sim`: Deterministic construct strategies and the orchestrator
//! - `tuning`: Data-driven construct balance

pub mod sim;
pub mod tuning;

pub use sim::{
    CollisionResult, ConstructSystem, ConstructSystemState, ConstructType, InputState,
    PhysicsStrategy, PlayerEntity, Rect,
};
pub use tuning::{ConstructTuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Timestamps are milliseconds on the host's monotonic tick clock
    pub type Millis = u64;

    /// Invulnerability granted by every transformation
    pub const INVULNERABILITY_MS: Millis = 2000;

    /// Titan gravity amplification
    pub const TITAN_GRAVITY_MULTIPLIER: f32 = 2.5;
    pub const TITAN_SPEED_MULTIPLIER: f32 = 1.0;
    /// Titan is physically larger than the base form
    pub const TITAN_HITBOX_SCALE: f32 = 1.4;
    /// Stomp velocity (pixels/s, positive y is down)
    pub const TITAN_STOMP_VELOCITY: f32 = 1500.0;

    /// Phase is rail-locked, gravity never integrates
    pub const PHASE_GRAVITY_MULTIPLIER: f32 = 0.0;
    pub const PHASE_SPEED_MULTIPLIER: f32 = 1.2;
    pub const PHASE_HITBOX_SCALE: f32 = 1.0;

    pub const BLINK_SPEED_MULTIPLIER: f32 = 1.0;
    pub const BLINK_GRAVITY_MULTIPLIER: f32 = 1.0;
    pub const BLINK_HITBOX_SCALE: f32 = 0.85;

    /// Default rails (canvas space: floor has the larger y)
    pub const DEFAULT_FLOOR_Y: f32 = 520.0;
    pub const DEFAULT_CEILING_Y: f32 = 80.0;

    /// Fixed simulation timestep used by the demo host (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}
