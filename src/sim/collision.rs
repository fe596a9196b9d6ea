//! Collision detection and response
//!
//! Axis-separated reflection against walls, paddle and bricks. Every response
//! changes only the direction of the ball's velocity, never its magnitude.

use glam::Vec2;

use super::state::{Ball, BrickGrid, BrickHit, Paddle, Wall};
use crate::{clamp, closest_point_on_rect};

/// A resolved ball-vs-brick contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickContact {
    pub row: usize,
    pub col: usize,
    pub hit: BrickHit,
    pub bonus: bool,
}

/// Bounce off the left, right and top walls.
///
/// Returns the walls touched this tick; the horizontal and vertical axes are
/// checked independently so a corner produces two bounces.
pub fn ball_wall_collisions(ball: &mut Ball, field_width: f32) -> Vec<Wall> {
    let mut walls = Vec::new();
    let r = ball.radius;

    if ball.pos.x - r < 0.0 {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs();
        walls.push(Wall::Left);
    } else if ball.pos.x + r > field_width {
        ball.pos.x = field_width - r;
        ball.vel.x = -ball.vel.x.abs();
        walls.push(Wall::Right);
    }

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        walls.push(Wall::Top);
    }

    walls
}

/// Check if the ball's leading edge is past the floor
pub fn ball_below_floor(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y + ball.radius > field_height
}

/// Bounce off the paddle, steering by where the ball landed.
///
/// Only a descending ball whose bottom edge lies within the paddle's vertical
/// band (and whose centre lies within one radius of the paddle's ends) is
/// deflected. The outgoing angle from vertical is `rel * max_bounce_deg`,
/// always upward, at the incoming speed. Returns `rel` on contact.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, max_bounce_deg: f32) -> Option<f32> {
    if ball.vel.y <= 0.0 {
        return None;
    }

    let bottom = ball.pos.y + ball.radius;
    if bottom < paddle.pos.y || bottom > paddle.pos.y + paddle.height {
        return None;
    }

    if ball.pos.x < paddle.pos.x - ball.radius || ball.pos.x > paddle.right() + ball.radius {
        return None;
    }

    let half_width = paddle.width / 2.0;
    let rel = clamp((ball.pos.x - paddle.center_x()) / half_width, -1.0, 1.0);
    let angle = (rel * max_bounce_deg).to_radians();
    let speed = ball.speed();

    ball.vel = Vec2::new(speed * angle.sin(), -speed * angle.cos());
    // Sit on the surface so the next tick can't re-trigger
    ball.pos.y = paddle.pos.y - ball.radius;

    Some(rel)
}

/// Reflect one velocity component away from the contact side
#[inline]
fn away_from(component: f32, offset: f32) -> f32 {
    if offset > 0.0 {
        component.abs()
    } else if offset < 0.0 {
        -component.abs()
    } else {
        -component
    }
}

/// Resolve at most one ball-vs-brick contact.
///
/// Bricks are tested in row-major order and the first overlap wins. The hit
/// brick takes one point of damage; the ball reflects on the axis of
/// shallower penetration.
pub fn ball_brick_collision(ball: &mut Ball, grid: &mut BrickGrid) -> Option<BrickContact> {
    let r = ball.radius;

    for brick in grid.bricks.iter_mut().filter(|b| b.alive) {
        let closest = closest_point_on_rect(ball.pos, brick.pos, brick.size());
        let offset = ball.pos - closest;
        if offset.length_squared() >= r * r {
            continue;
        }

        let hit = brick.hit();

        let penetration_x = r - offset.x.abs();
        let penetration_y = r - offset.y.abs();
        if penetration_x < penetration_y {
            ball.vel.x = away_from(ball.vel.x, offset.x);
        } else {
            ball.vel.y = away_from(ball.vel.y, offset.y);
        }

        return Some(BrickContact {
            row: brick.row,
            col: brick.col,
            hit,
            bonus: brick.is_bonus(),
        });
    }

    None
}
