//! Simulation entity types
//!
//! Plain data records. Construction with randomness lives in `factory`,
//! ownership and mutation rules live in `session`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// Top-level phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first game, or a prepared level waiting for the continue trigger
    Idle,
    /// Simulation advancing
    Playing,
    /// Simulation frozen mid-level
    Paused,
    /// All bricks of the current level destroyed
    Win,
    /// Lives exhausted
    GameOver,
}

impl GamePhase {
    /// Whether `tick` advances the simulation in this phase
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// The player's paddle. `pos` is the top-left corner; `pos.y` never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Shift horizontally, staying inside `[0, field_width - width]`
    pub fn move_by(&mut self, dx: f32, field_width: f32) {
        self.pos.x = clamp(self.pos.x + dx, 0.0, field_width - self.width);
    }
}

/// The ball. Velocity is in pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Resting on the paddle, waiting for launch
    pub stuck: bool,
}

impl Ball {
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Sit centred on top of the paddle (only while stuck)
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        if self.stuck {
            self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
        }
    }

    /// Release from the paddle. Returns false if already in flight.
    pub fn launch(&mut self) -> bool {
        if !self.stuck {
            return false;
        }
        self.stuck = false;
        true
    }
}

/// Marker shown on bonus bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusMarker {
    Star,
    Gem,
    Clover,
    Fire,
}

impl BonusMarker {
    pub const ALL: [BonusMarker; 4] = [
        BonusMarker::Star,
        BonusMarker::Gem,
        BonusMarker::Clover,
        BonusMarker::Fire,
    ];

    /// Glyph drawn over the brick
    pub fn glyph(&self) -> &'static str {
        match self {
            BonusMarker::Star => "⭐",
            BonusMarker::Gem => "💎",
            BonusMarker::Clover => "🍀",
            BonusMarker::Fire => "🔥",
        }
    }
}

/// Result of a ball striking a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    Damaged { hp_left: u8 },
    Destroyed,
}

/// A brick. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub hp: u8,
    pub max_hp: u8,
    pub row: usize,
    pub col: usize,
    pub alive: bool,
    pub bonus: Option<BonusMarker>,
}

impl Brick {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size() / 2.0
    }

    pub fn is_bonus(&self) -> bool {
        self.bonus.is_some()
    }

    /// Take one point of damage. Dead bricks stay dead.
    pub fn hit(&mut self) -> BrickHit {
        debug_assert!(self.alive && self.hp > 0, "hit on a dead brick");
        self.hp = self.hp.saturating_sub(1);
        if self.hp == 0 {
            self.alive = false;
            BrickHit::Destroyed
        } else {
            BrickHit::Damaged { hp_left: self.hp }
        }
    }
}

/// Fixed-shape grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        debug_assert!(row < self.rows && col < self.cols, "brick ({row}, {col}) out of range");
        self.bricks.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        debug_assert!(row < self.rows && col < self.cols, "brick ({row}, {col}) out of range");
        self.bricks.get_mut(row * self.cols + col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Discrete simulation events, consumed by rendering/audio/overlay layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GameEvent {
    WallBounce {
        wall: Wall,
    },
    PaddleHit {
        /// Normalized hit offset in [-1, 1]
        rel: f32,
    },
    BrickDamaged {
        row: usize,
        col: usize,
        hp_left: u8,
    },
    BrickDestroyed {
        row: usize,
        col: usize,
        points: u32,
        bonus: bool,
    },
    LifeLost {
        lives_left: u32,
    },
    LevelCleared {
        level: u32,
        /// Cleared the last level of the run
        final_level: bool,
    },
    GameOver {
        score: u64,
    },
}
