//! Entity construction
//!
//! Grid shape is fully determined by the config; only bonus placement draws
//! from the injected RNG, so a seeded `Pcg32` reproduces a board exactly.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, BonusMarker, Brick, BrickGrid, Paddle};
use crate::config::GameConfig;

/// Paddle centred horizontally on the paddle row
pub fn create_paddle(config: &GameConfig) -> Paddle {
    Paddle {
        pos: Vec2::new(
            (config.field_width - config.paddle_width) / 2.0,
            config.paddle_y(),
        ),
        width: config.paddle_width,
        height: config.paddle_height,
    }
}

/// New stuck ball at `origin` with a random upward launch vector.
///
/// Angle is uniform in the configured range from horizontal, direction is a
/// coin flip, and speed is the base speed scaled for `level`.
pub fn create_ball(origin: Vec2, level: u32, config: &GameConfig, rng: &mut impl Rng) -> Ball {
    let angle = rng
        .random_range(config.launch_angle_min_deg..=config.launch_angle_max_deg)
        .to_radians();
    let speed = config.speed_for_level(level);
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

    Ball {
        pos: origin,
        vel: Vec2::new(direction * angle.cos() * speed, -angle.sin() * speed),
        radius: config.ball_radius,
        stuck: true,
    }
}

/// Hit points for a brick in `row` on `level`
pub fn brick_hp(row: usize, level: u32, config: &GameConfig) -> u8 {
    if level >= config.armored_from_level && row < config.armored_rows {
        2
    } else {
        1
    }
}

/// Deterministic part of the grid: positions, sizes and hit points, no bonuses
pub fn brick_layout(config: &GameConfig, level: u32) -> BrickGrid {
    let width = config.brick_width();
    let height = config.brick_height;
    let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);

    for row in 0..config.brick_rows {
        let hp = brick_hp(row, level, config);
        for col in 0..config.brick_cols {
            let x = config.brick_side_padding + col as f32 * (width + config.brick_gap);
            let y = config.brick_top_offset + row as f32 * (height + config.brick_gap);
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                width,
                height,
                hp,
                max_hp: hp,
                row,
                col,
                alive: true,
                bonus: None,
            });
        }
    }

    BrickGrid {
        rows: config.brick_rows,
        cols: config.brick_cols,
        bricks,
    }
}

/// Independently mark each brick as bonus with the configured probability
pub fn assign_bonuses(grid: &mut BrickGrid, probability: f64, rng: &mut impl Rng) {
    for brick in &mut grid.bricks {
        brick.bonus = if rng.random_bool(probability) {
            let idx = rng.random_range(0..BonusMarker::ALL.len());
            Some(BonusMarker::ALL[idx])
        } else {
            None
        };
    }
}

/// Full brick grid for `level`
pub fn create_brick_grid(config: &GameConfig, level: u32, rng: &mut impl Rng) -> BrickGrid {
    let mut grid = brick_layout(config, level);
    assign_bonuses(&mut grid, config.bonus_probability, rng);

    let bonus_count = grid.iter().filter(|b| b.is_bonus()).count();
    log::info!(
        "Level {}: {}x{} bricks, {} bonus",
        level,
        grid.rows,
        grid.cols,
        bonus_count
    );

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_paddle_centred() {
        let config = GameConfig::default();
        let paddle = create_paddle(&config);
        assert!((paddle.center_x() - config.field_width / 2.0).abs() < 1e-4);
        assert_eq!(paddle.pos.y, config.paddle_y());
    }

    #[test]
    fn test_ball_launch_vector() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for level in 1..=5 {
            for _ in 0..50 {
                let ball = create_ball(Vec2::new(400.0, 500.0), level, &config, &mut rng);
                assert!(ball.stuck);
                assert!(ball.vel.y < 0.0, "ball must launch upward");
                assert!((ball.speed() - config.speed_for_level(level)).abs() < 1e-4);

                // Angle from horizontal stays inside [30, 90] degrees
                let angle = (-ball.vel.y).atan2(ball.vel.x.abs()).to_degrees();
                assert!((29.99..=90.01).contains(&angle), "angle {angle}");
            }
        }
    }

    #[test]
    fn test_layout_shape() {
        let config = GameConfig::default();
        let grid = brick_layout(&config, 1);
        assert_eq!(grid.bricks.len(), config.brick_rows * config.brick_cols);

        // Row-major order with consistent spacing
        for (i, brick) in grid.iter().enumerate() {
            assert_eq!(brick.row, i / config.brick_cols);
            assert_eq!(brick.col, i % config.brick_cols);
            assert!(brick.alive);
            assert!(brick.pos.x >= config.brick_side_padding - 1e-3);
            assert!(brick.pos.x + brick.width <= config.field_width - config.brick_side_padding + 1e-3);
        }
        let a = grid.get(0, 0).unwrap();
        let b = grid.get(0, 1).unwrap();
        let c = grid.get(1, 0).unwrap();
        assert!((b.pos.x - a.pos.x - (a.width + config.brick_gap)).abs() < 1e-4);
        assert!((c.pos.y - a.pos.y - (a.height + config.brick_gap)).abs() < 1e-4);
    }

    #[test]
    fn test_armored_rows_from_level_three() {
        let config = GameConfig::default();

        let early = brick_layout(&config, 2);
        assert!(early.iter().all(|b| b.hp == 1));

        let late = brick_layout(&config, 3);
        for brick in late.iter() {
            let expected = if brick.row < 2 { 2 } else { 1 };
            assert_eq!(brick.hp, expected);
            assert_eq!(brick.max_hp, expected);
        }
    }

    #[test]
    fn test_bonus_probability_extremes() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);

        let mut grid = brick_layout(&config, 1);
        assign_bonuses(&mut grid, 0.0, &mut rng);
        assert!(grid.iter().all(|b| !b.is_bonus()));

        assign_bonuses(&mut grid, 1.0, &mut rng);
        assert!(grid.iter().all(|b| b.is_bonus()));
    }

    #[test]
    fn test_seeded_grid_reproducible() {
        let config = GameConfig::default();
        let a = create_brick_grid(&config, 1, &mut Pcg32::seed_from_u64(42));
        let b = create_brick_grid(&config, 1, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
