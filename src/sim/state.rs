//! Shared simulation types for the construct core
//!
//! The host game loop owns every value here; strategies only borrow them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Construct forms the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConstructType {
    /// Base form, no construct
    #[default]
    None,
    Titan,
    Phase,
    Blink,
}

impl ConstructType {
    /// Every variant, in arena order
    pub const ALL: [ConstructType; 4] = [
        ConstructType::None,
        ConstructType::Titan,
        ConstructType::Phase,
        ConstructType::Blink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructType::None => "None",
            ConstructType::Titan => "Titan",
            ConstructType::Phase => "Phase",
            ConstructType::Blink => "Blink",
        }
    }
}

/// Outcome of a player/obstacle contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionResult {
    /// Player takes a hit
    Damage,
    /// Obstacle is destroyed, player unharmed
    Destroy,
    /// Contact has no effect
    Ignore,
}

/// Axis-aligned rectangle (top-left origin, canvas space)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grow or shrink around the center. A scale of 1.0 returns `self` exactly.
    pub fn scaled_about_center(&self, scale: f32) -> Self {
        if scale == 1.0 {
            return *self;
        }
        let width = self.width * scale;
        let height = self.height * scale;
        Self {
            x: self.x - (width - self.width) / 2.0,
            y: self.y - (height - self.height) / 2.0,
            width,
            height,
        }
    }

    /// Strict overlap test (touching edges do not intersect)
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// The player body driven by the host loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl PlayerEntity {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            velocity: 0.0,
            width,
            height,
        }
    }

    /// Unscaled bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Normalized input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Pointer/touch held
    pub is_pressed: bool,
    /// Pointer/touch y position
    pub y: f32,
    /// Set only on the not-pressed -> pressed tick
    pub is_tap_frame: bool,
    /// Set only on the pressed -> not-pressed tick
    pub is_release_frame: bool,
}

impl InputState {
    /// No input this tick
    pub fn idle() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw held state, deriving the edge flags
    pub fn from_edges(was_pressed: bool, is_pressed: bool, y: f32) -> Self {
        Self {
            is_pressed,
            y,
            is_tap_frame: is_pressed && !was_pressed,
            is_release_frame: was_pressed && !is_pressed,
        }
    }

    /// A tap on this tick (press edge)
    pub fn tap(y: f32) -> Self {
        Self::from_edges(false, true, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_edges() {
        let tap = InputState::from_edges(false, true, 10.0);
        assert!(tap.is_tap_frame);
        assert!(!tap.is_release_frame);

        let hold = InputState::from_edges(true, true, 10.0);
        assert!(hold.is_pressed);
        assert!(!hold.is_tap_frame);
        assert!(!hold.is_release_frame);

        let release = InputState::from_edges(true, false, 10.0);
        assert!(release.is_release_frame);
        assert!(!release.is_tap_frame);

        assert_eq!(InputState::from_edges(false, false, 0.0), InputState::idle());
    }

    #[test]
    fn test_rect_scale_identity() {
        let rect = Rect::new(12.5, 40.25, 30.0, 50.0);
        assert_eq!(rect.scaled_about_center(1.0), rect);
    }

    #[test]
    fn test_rect_scale_keeps_center() {
        let rect = Rect::new(100.0, 200.0, 40.0, 60.0);
        let grown = rect.scaled_about_center(1.5);
        assert!((grown.width - 60.0).abs() < 0.001);
        assert!((grown.height - 90.0).abs() < 0.001);
        assert!((grown.center() - rect.center()).length() < 0.001);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges don't count
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_player_bounds() {
        let player = PlayerEntity::new(Vec2::new(3.0, 4.0), 20.0, 30.0);
        assert_eq!(player.bounds(), Rect::new(3.0, 4.0, 20.0, 30.0));
        assert_eq!(player.velocity, 0.0);
    }
}
