//! Attract-mode controller
//!
//! Plays the game by producing the same `TickInput` a player would. Used by
//! the headless runner and for idle/demo screens.

use crate::sim::{Session, TickInput};

/// Where a descending ball will cross `target_y`, folding wall bounces back
/// into the field.
pub fn predict_landing_x(
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    target_y: f32,
    radius: f32,
    field_width: f32,
) -> f32 {
    if vy <= 0.0 {
        return x;
    }
    let t = (target_y - y).max(0.0) / vy;
    let raw = x + vx * t;

    let span = field_width - 2.0 * radius;
    if span <= 0.0 {
        return field_width / 2.0;
    }
    let mut u = (raw - radius).rem_euclid(2.0 * span);
    if u > span {
        u = 2.0 * span - u;
    }
    radius + u
}

/// Next input for the demo player
pub fn autopilot_input(session: &Session) -> TickInput {
    let ball = session.ball();
    let paddle = session.paddle();
    let config = session.config();

    if ball.stuck {
        return TickInput {
            launch: true,
            ..Default::default()
        };
    }

    let target = if ball.vel.y > 0.0 {
        let landing = predict_landing_x(
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y,
            paddle.pos.y - ball.radius,
            ball.radius,
            config.field_width,
        );
        // Vary the contact point so the ball doesn't settle into a vertical loop
        let time_factor = session.ticks() as f32 * 0.013;
        let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) * paddle.width;
        landing + offset
    } else {
        // Drift back under the ball while it climbs
        ball.pos.x
    };

    let diff = target - paddle.center_x();
    let dead_zone = config.paddle_speed / 2.0;
    TickInput {
        left: diff < -dead_zone,
        right: diff > dead_zone,
        launch: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_straight_drop() {
        let x = predict_landing_x(200.0, 100.0, 0.0, 5.0, 500.0, 8.0, 800.0);
        assert!((x - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_predict_folds_off_walls() {
        // Would reach x = 900 with no walls; right wall at 792 folds it to 684
        let x = predict_landing_x(500.0, 100.0, 16.0, 4.0, 200.0, 8.0, 800.0);
        assert!((x - 684.0).abs() < 1e-3);

        // Left wall: raw x = -100 folds to 116
        let x = predict_landing_x(100.0, 100.0, -16.0, 4.0, 150.0, 8.0, 800.0);
        assert!((x - 116.0).abs() < 1e-3);
    }

    #[test]
    fn test_launches_stuck_ball() {
        let mut session = Session::with_seed(1);
        session.start_game();
        assert!(autopilot_input(&session).launch);
    }

    #[test]
    fn test_keeps_ball_alive_for_a_while() {
        let mut session = Session::with_seed(77);
        session.start_game();
        for _ in 0..600 {
            let input = autopilot_input(&session);
            session.tick(&input);
        }
        assert!(session.score() > 0);
    }
}
