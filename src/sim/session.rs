//! Game session and level/life state machine
//!
//! A `Session` owns everything a run needs: config, seeded RNG, paddle, ball,
//! brick grid and the score/lives/level counters. Only the transition methods
//! here and the tick function mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::BrickContact;
use super::factory::{create_ball, create_brick_grid, create_paddle};
use super::state::{Ball, BrickGrid, BrickHit, GameEvent, GamePhase, Paddle};
use crate::config::{ConfigError, GameConfig};

/// Read-only view of a session, handed to renderers every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub max_level: u32,
    pub field_width: f32,
    pub field_height: f32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
}

/// A single game run
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: GameConfig,
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) score: u64,
    pub(crate) lives: u32,
    pub(crate) level: u32,
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    pub(crate) bricks: BrickGrid,
    /// Ticks advanced while playing
    pub(crate) ticks: u64,
    /// A run is in progress (false before the first start and after game over)
    run_active: bool,
}

impl Session {
    /// Create an idle session after validating `config`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Idle session with the default config
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = create_paddle(&config);
        let mut ball = create_ball(Vec2::ZERO, 1, &config, &mut rng);
        ball.follow_paddle(&paddle);
        let bricks = create_brick_grid(&config, 1, &mut rng);

        Self {
            lives: config.starting_lives,
            config,
            seed,
            rng,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            paddle,
            ball,
            bricks,
            ticks: 0,
            run_active: false,
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            max_level: self.config.max_level,
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            paddle: self.paddle.clone(),
            ball: self.ball.clone(),
            bricks: self.bricks.clone(),
        }
    }

    // === Entry points for the menu/overlay layer ===

    /// Start a fresh run: score 0, full lives, level 1, new board
    pub fn start_game(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.ticks = 0;
        self.load_level();
        self.run_active = true;
        self.phase = GamePhase::Playing;
        log::info!("Game started (seed {})", self.seed);
    }

    /// Same as `start_game`; offered from the game-over and final-win screens
    pub fn restart(&mut self) {
        self.start_game();
    }

    /// Leave the `Win` phase.
    ///
    /// Below the max level this prepares the next level and waits in `Idle`
    /// for `resume`; after the final level it restarts the run. Returns false
    /// (and does nothing) outside the `Win` phase.
    pub fn advance_level(&mut self) -> bool {
        if self.phase != GamePhase::Win {
            log::warn!("advance_level ignored in {:?}", self.phase);
            return false;
        }

        if self.level >= self.config.max_level {
            log::info!("Final level cleared with {} points, restarting", self.score);
            self.restart();
            return true;
        }

        self.level += 1;
        self.load_level();
        self.phase = GamePhase::Idle;
        log::info!("Advanced to level {}", self.level);
        true
    }

    /// Continue trigger: `Idle` (prepared level) or `Paused` back to `Playing`
    pub fn resume(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle if self.run_active => {
                self.phase = GamePhase::Playing;
                log::info!("Level {} begins", self.level);
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                true
            }
            _ => false,
        }
    }

    /// Toggle `Playing` <-> `Paused`. Returns false in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                log::info!("Paused");
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                log::info!("Resumed");
                true
            }
            _ => false,
        }
    }

    // === Transitions driven by the tick ===

    /// Fresh paddle, level-scaled ball and new board for the current level
    fn load_level(&mut self) {
        self.paddle = create_paddle(&self.config);
        self.ball = create_ball(Vec2::ZERO, self.level, &self.config, &mut self.rng);
        self.ball.follow_paddle(&self.paddle);
        self.bricks = create_brick_grid(&self.config, self.level, &mut self.rng);
    }

    /// Score a brick contact and report it
    pub(crate) fn apply_brick_contact(&mut self, contact: BrickContact, events: &mut Vec<GameEvent>) {
        match contact.hit {
            BrickHit::Destroyed => {
                let mut points = self.config.points_for_row(contact.row);
                if contact.bonus {
                    points += self.config.bonus_points;
                }
                self.score += u64::from(points);
                log::debug!(
                    "Brick ({}, {}) destroyed for {} points",
                    contact.row,
                    contact.col,
                    points
                );
                events.push(GameEvent::BrickDestroyed {
                    row: contact.row,
                    col: contact.col,
                    points,
                    bonus: contact.bonus,
                });
            }
            BrickHit::Damaged { hp_left } => {
                events.push(GameEvent::BrickDamaged {
                    row: contact.row,
                    col: contact.col,
                    hp_left,
                });
            }
        }
    }

    /// Ball passed the floor
    pub(crate) fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        debug_assert!(self.lives > 0, "lost a life with none left");
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: self.lives,
        });
        log::debug!("Life lost, {} remaining", self.lives);

        if self.lives > 0 {
            // Respawn at base speed; level scaling only applies at level start
            self.paddle = create_paddle(&self.config);
            self.ball = create_ball(Vec2::ZERO, 1, &self.config, &mut self.rng);
            self.ball.follow_paddle(&self.paddle);
        } else {
            self.phase = GamePhase::GameOver;
            self.run_active = false;
            events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over at level {} with {} points", self.level, self.score);
        }
    }

    /// Every brick is gone
    pub(crate) fn clear_level(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = GamePhase::Win;
        let final_level = self.level >= self.config.max_level;
        events.push(GameEvent::LevelCleared {
            level: self.level,
            final_level,
        });
        log::info!("Level {} cleared, score {}", self.level, self.score);
    }

    /// Fail fast on states no transition should produce
    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(
            self.paddle.pos.x >= 0.0
                && self.paddle.pos.x <= self.config.field_width - self.paddle.width + 1e-3,
            "paddle out of bounds at x={}",
            self.paddle.pos.x
        );
        debug_assert!(
            self.lives <= self.config.starting_lives,
            "lives {} above starting count",
            self.lives
        );
        debug_assert!(
            self.level >= 1 && self.level <= self.config.max_level,
            "level {} out of range",
            self.level
        );
        debug_assert!(
            self.bricks
                .iter()
                .all(|b| b.hp <= b.max_hp && (b.alive == (b.hp > 0))),
            "brick hit points inconsistent"
        );
    }
}
