//! Phase: floor/ceiling rail construct
//!
//! The player is locked to one of two rails. A tap flips which rail gravity
//! points at, and the player settles onto it within the same update, so `y`
//! is always exactly `floor_y` or `ceiling_y` outside an update call.

use serde::{Deserialize, Serialize};

use super::state::{CollisionResult, ConstructType, InputState, PlayerEntity};
use super::strategy::{PhysicsStrategy, debug_check_dt};
use crate::consts::*;
use crate::tuning::PhaseTuning;

/// Rail positions supplied by level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseBounds {
    pub floor_y: f32,
    pub ceiling_y: f32,
}

impl Default for PhaseBounds {
    fn default() -> Self {
        Self {
            floor_y: DEFAULT_FLOOR_Y,
            ceiling_y: DEFAULT_CEILING_Y,
        }
    }
}

/// Which rail the player rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDirection {
    /// +1, resting on the floor
    #[default]
    Floor,
    /// -1, resting on the ceiling
    Ceiling,
}

impl GravityDirection {
    pub fn flipped(self) -> Self {
        match self {
            GravityDirection::Floor => GravityDirection::Ceiling,
            GravityDirection::Ceiling => GravityDirection::Floor,
        }
    }
}

/// Internal rail state
#[derive(Debug, Clone, Default)]
struct PhaseRailState {
    gravity_direction: GravityDirection,
    bounds: PhaseBounds,
    /// Rail flipped on the most recent update
    transitioning: bool,
}

#[derive(Debug, Clone)]
pub struct PhasePhysics {
    rail: PhaseRailState,
    tuning: PhaseTuning,
}

impl Default for PhasePhysics {
    fn default() -> Self {
        Self::new(PhaseBounds::default(), &PhaseTuning::default())
    }
}

impl PhasePhysics {
    pub fn new(bounds: PhaseBounds, tuning: &PhaseTuning) -> Self {
        Self {
            rail: PhaseRailState {
                bounds,
                ..Default::default()
            },
            tuning: tuning.clone(),
        }
    }

    pub fn gravity_direction(&self) -> GravityDirection {
        self.rail.gravity_direction
    }

    pub fn bounds(&self) -> PhaseBounds {
        self.rail.bounds
    }

    /// Retarget rails for new level geometry (takes effect on next update)
    pub fn set_bounds(&mut self, bounds: PhaseBounds) {
        self.rail.bounds = bounds;
    }

    /// True if the rail flipped on the last update
    pub fn is_transitioning(&self) -> bool {
        self.rail.transitioning
    }

    /// Rail the player is currently pulled toward
    pub fn target_y(&self) -> f32 {
        match self.rail.gravity_direction {
            GravityDirection::Floor => self.rail.bounds.floor_y,
            GravityDirection::Ceiling => self.rail.bounds.ceiling_y,
        }
    }
}

impl PhysicsStrategy for PhasePhysics {
    fn construct_type(&self) -> ConstructType {
        ConstructType::Phase
    }

    fn update(&mut self, player: &mut PlayerEntity, dt: f32, input: &InputState) {
        debug_check_dt(dt);

        self.rail.transitioning = input.is_tap_frame;
        if input.is_tap_frame {
            self.rail.gravity_direction = self.rail.gravity_direction.flipped();
            log::trace!("Phase rail flip -> {:?}", self.rail.gravity_direction);
        }

        // Settling completes within the tick: snap exactly onto the rail
        player.pos.y = self.target_y();
        player.velocity = 0.0;
    }

    fn resolve_collision(&self, _is_from_above: bool) -> CollisionResult {
        CollisionResult::Damage
    }

    fn hitbox_scale(&self) -> f32 {
        self.tuning.hitbox_scale
    }

    fn speed_multiplier(&self) -> f32 {
        self.tuning.speed_multiplier
    }

    fn gravity_multiplier(&self) -> f32 {
        PHASE_GRAVITY_MULTIPLIER
    }

    fn reset(&mut self) {
        self.rail.gravity_direction = GravityDirection::Floor;
        self.rail.transitioning = false;
    }
}
