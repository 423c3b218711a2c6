//! Data-driven construct balance
//!
//! Tuning is loaded from JSON. Every field falls back to the constants in
//! `crate::consts`, so a file only needs the values it overrides. The 2000ms
//! invulnerability window is intentionally not tunable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Titan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitanTuning {
    pub gravity_multiplier: f32,
    pub speed_multiplier: f32,
    /// Must stay above 1.0
    pub hitbox_scale: f32,
    /// Pixels/s, positive is down
    pub stomp_velocity: f32,
}

impl Default for TitanTuning {
    fn default() -> Self {
        Self {
            gravity_multiplier: TITAN_GRAVITY_MULTIPLIER,
            speed_multiplier: TITAN_SPEED_MULTIPLIER,
            hitbox_scale: TITAN_HITBOX_SCALE,
            stomp_velocity: TITAN_STOMP_VELOCITY,
        }
    }
}

/// Phase parameters (gravity is always zero on rails)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTuning {
    pub speed_multiplier: f32,
    pub hitbox_scale: f32,
}

impl Default for PhaseTuning {
    fn default() -> Self {
        Self {
            speed_multiplier: PHASE_SPEED_MULTIPLIER,
            hitbox_scale: PHASE_HITBOX_SCALE,
        }
    }
}

/// Blink parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkTuning {
    pub speed_multiplier: f32,
    pub gravity_multiplier: f32,
    pub hitbox_scale: f32,
}

impl Default for BlinkTuning {
    fn default() -> Self {
        Self {
            speed_multiplier: BLINK_SPEED_MULTIPLIER,
            gravity_multiplier: BLINK_GRAVITY_MULTIPLIER,
            hitbox_scale: BLINK_HITBOX_SCALE,
        }
    }
}

/// All construct tuning
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructTuning {
    pub titan: TitanTuning,
    pub phase: PhaseTuning,
    pub blink: BlinkTuning,
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("expected a positive finite number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("expected a non-negative finite number, got {value}"),
        })
    }
}

impl ConstructTuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded construct tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_path(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let titan = &self.titan;
        non_negative("titan.gravity_multiplier", titan.gravity_multiplier)?;
        positive("titan.speed_multiplier", titan.speed_multiplier)?;
        positive("titan.stomp_velocity", titan.stomp_velocity)?;
        if !(titan.hitbox_scale.is_finite() && titan.hitbox_scale > 1.0) {
            return Err(TuningError::Invalid {
                field: "titan.hitbox_scale",
                reason: format!(
                    "titan must be larger than the base form, got {}",
                    titan.hitbox_scale
                ),
            });
        }

        positive("phase.speed_multiplier", self.phase.speed_multiplier)?;
        positive("phase.hitbox_scale", self.phase.hitbox_scale)?;

        positive("blink.speed_multiplier", self.blink.speed_multiplier)?;
        non_negative("blink.gravity_multiplier", self.blink.gravity_multiplier)?;
        positive("blink.hitbox_scale", self.blink.hitbox_scale)?;
        Ok(())
    }
}
