//! Fixed-rate simulation tick
//!
//! Single per-tick entry point. Applies input, advances the ball, resolves
//! contacts in a fixed order and drives the level/life transitions.

use serde::{Deserialize, Serialize};

use super::collision::{
    ball_below_floor, ball_brick_collision, ball_paddle_collision, ball_wall_collisions,
};
use super::session::Session;
use super::state::GameEvent;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Release a stuck ball (one-shot, already edge-triggered by the caller)
    pub launch: bool,
}

/// Advance the session by one tick and return the events it produced.
///
/// Does nothing outside the `Playing` phase.
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.phase.is_running() {
        return events;
    }
    session.ticks += 1;

    // Paddle intent: opposite directions cancel
    let mut dx = 0.0;
    if input.left {
        dx -= session.config.paddle_speed;
    }
    if input.right {
        dx += session.config.paddle_speed;
    }
    session.paddle.move_by(dx, session.config.field_width);
    session.ball.follow_paddle(&session.paddle);

    if input.launch && session.ball.launch() {
        log::trace!("Ball launched at {:?}", session.ball.vel);
    }

    if session.ball.stuck {
        session.debug_check_invariants();
        return events;
    }

    let vel = session.ball.vel;
    session.ball.pos += vel;

    for wall in ball_wall_collisions(&mut session.ball, session.config.field_width) {
        events.push(GameEvent::WallBounce { wall });
    }

    if ball_below_floor(&session.ball, session.config.field_height) {
        session.lose_life(&mut events);
        session.debug_check_invariants();
        return events;
    }

    if let Some(rel) = ball_paddle_collision(
        &mut session.ball,
        &session.paddle,
        session.config.paddle_max_bounce_deg,
    ) {
        events.push(GameEvent::PaddleHit { rel });
    }

    if let Some(contact) = ball_brick_collision(&mut session.ball, &mut session.bricks) {
        session.apply_brick_contact(contact, &mut events);
    }

    if session.bricks.is_cleared() {
        session.clear_level(&mut events);
    }

    session.debug_check_invariants();
    for event in &events {
        log::trace!("tick {}: {:?}", session.ticks, event);
    }
    events
}

impl Session {
    /// Advance one tick; see [`tick`]
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(self, input)
    }
}
