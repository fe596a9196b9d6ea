//! Brickfall - A ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level/life state machine)
//! - `config`: Tunable game parameters
//! - `platform`: Device input adapter
//! - `autopilot`: Attract-mode controller
//! - `audio`: Event to sound cue mapping

pub mod audio;
pub mod autopilot;
pub mod config;
pub mod platform;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameEvent, GamePhase, Session, TickInput, tick};

use glam::Vec2;

/// Default tuning values. Every one of these is overridable through `GameConfig`.
///
/// Distances are in field pixels, speeds in pixels per tick.
pub mod consts {
    /// Nominal tick rate the speeds were tuned for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 110.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from the floor to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 9.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 6.0;
    /// Launch angle range, degrees from horizontal
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 30.0;
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 90.0;
    /// Per-level speed multiplier step: `1 + (level - 1) * step`
    pub const LEVEL_SPEED_STEP: f32 = 0.12;
    /// Bounce angle from vertical when the ball hits the paddle's very edge
    pub const PADDLE_MAX_BOUNCE_DEG: f32 = 70.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 22.0;
    pub const BRICK_GAP: f32 = 6.0;
    pub const BRICK_TOP_OFFSET: f32 = 70.0;
    pub const BRICK_SIDE_PADDING: f32 = 30.0;

    /// Scoring, indexed by row (top row first)
    pub const ROW_POINTS: [u32; 6] = [60, 50, 40, 30, 20, 10];
    pub const BONUS_POINTS: u32 = 50;
    pub const BONUS_PROBABILITY: f64 = 0.15;

    /// Two-hit bricks fill the top rows from this level onward
    pub const ARMORED_ROWS: usize = 2;
    pub const ARMORED_FROM_LEVEL: u32 = 3;

    /// Run structure
    pub const STARTING_LIVES: u32 = 3;
    pub const MAX_LEVEL: u32 = 5;
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics; a degenerate range collapses to `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Closest point on an axis-aligned rectangle to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    Vec2::new(
        clamp(point.x, rect_min.x, rect_min.x + rect_size.x),
        clamp(point.y, rect_min.y, rect_min.y + rect_size.y),
    )
}

/// Squared distance between two points
#[inline]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    distance_sq(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Degenerate range never panics
        assert_eq!(clamp(3.0, 4.0, 2.0), 4.0);
    }

    #[test]
    fn test_closest_point_on_rect() {
        let min = Vec2::new(10.0, 10.0);
        let size = Vec2::new(20.0, 10.0);

        // Inside: the point itself
        let p = Vec2::new(15.0, 12.0);
        assert_eq!(closest_point_on_rect(p, min, size), p);

        // Below the bottom edge
        let p = Vec2::new(15.0, 40.0);
        assert_eq!(closest_point_on_rect(p, min, size), Vec2::new(15.0, 20.0));

        // Beyond a corner
        let p = Vec2::new(0.0, 0.0);
        assert_eq!(closest_point_on_rect(p, min, size), min);
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(distance_sq(a, b), 25.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
    }
}
