//! Device input adapter
//!
//! Holds the last-known key state plus a one-shot launch pulse. Device events
//! arrive at any rate; the simulation reads them once per tick through
//! [`InputAdapter::poll`].

use crate::consts::PADDLE_SPEED;
use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Launch,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Enter" | "ArrowUp" => Some(Key::Launch),
            _ => None,
        }
    }
}

/// Accumulates device events between ticks
#[derive(Debug, Clone)]
pub struct InputAdapter {
    left_held: bool,
    right_held: bool,
    launch_held: bool,
    /// Set on a launch press, cleared when a tick consumes it
    launch_pending: bool,
    /// Mouse/touch x the paddle should chase
    pointer_x: Option<f32>,
    /// Pointer offsets smaller than this leave the paddle still
    dead_zone: f32,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::with_dead_zone(PADDLE_SPEED)
    }

    /// Use the paddle's per-tick speed as the dead zone to avoid jitter
    pub fn with_dead_zone(dead_zone: f32) -> Self {
        Self {
            left_held: false,
            right_held: false,
            launch_held: false,
            launch_pending: false,
            pointer_x: None,
            dead_zone,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Launch => {
                // Key repeat must not re-fire
                if !self.launch_held {
                    self.launch_pending = true;
                }
                self.launch_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Launch => self.launch_held = false,
        }
    }

    /// Mouse move or touch drag, in field coordinates
    pub fn pointer_move(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Touch ended or pointer left the field
    pub fn pointer_release(&mut self) {
        self.pointer_x = None;
    }

    /// Mouse click or touch start
    pub fn tap(&mut self) {
        self.launch_pending = true;
    }

    /// Build this tick's input. The launch pulse is returned at most once.
    pub fn poll(&mut self, paddle_center_x: f32) -> TickInput {
        let mut left = self.left_held;
        let mut right = self.right_held;

        if let Some(target) = self.pointer_x {
            let offset = target - paddle_center_x;
            if offset < -self.dead_zone {
                left = true;
            } else if offset > self.dead_zone {
                right = true;
            }
        }

        TickInput {
            left,
            right,
            launch: std::mem::take(&mut self.launch_pending),
        }
    }
}
