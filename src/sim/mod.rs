//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod factory;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{
    BrickContact, ball_below_floor, ball_brick_collision, ball_paddle_collision,
    ball_wall_collisions,
};
pub use factory::{assign_bonuses, brick_hp, brick_layout, create_ball, create_brick_grid, create_paddle};
pub use session::{Session, Snapshot};
pub use state::{Ball, BonusMarker, Brick, BrickGrid, BrickHit, GameEvent, GamePhase, Paddle, Wall};
pub use tick::{TickInput, tick};
