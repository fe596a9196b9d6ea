//! Game configuration
//!
//! Every gameplay constant is a tunable field here so the simulation can be
//! exercised at different scales. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors. Only raised at load/validation time; the simulation
/// itself never fails.
#[derive(Debug)]
pub enum ConfigError {
    /// A length or speed that must be strictly positive was not
    NonPositive { name: &'static str, value: f32 },
    PaddleTooWide { paddle: f32, field: f32 },
    EmptyGrid,
    /// Bricks plus gaps and padding exceed the field width
    BricksDoNotFit { required: f32, field: f32 },
    /// The lowest brick row reaches the paddle
    GridOverlapsPaddle { grid_bottom: f32, paddle_y: f32 },
    MissingRowPoints { rows: usize, provided: usize },
    InvalidProbability(f64),
    InvalidAngleRange { min: f32, max: f32 },
    /// Paddle deflection must stay strictly between 0 and 90 degrees
    InvalidBounceAngle(f32),
    ZeroLives,
    ZeroMaxLevel,
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            ConfigError::PaddleTooWide { paddle, field } => {
                write!(f, "paddle width {paddle} exceeds field width {field}")
            }
            ConfigError::EmptyGrid => write!(f, "brick grid needs at least one row and column"),
            ConfigError::BricksDoNotFit { required, field } => {
                write!(f, "brick row needs {required}px but field is {field}px wide")
            }
            ConfigError::GridOverlapsPaddle {
                grid_bottom,
                paddle_y,
            } => write!(
                f,
                "brick grid bottom {grid_bottom} reaches paddle row {paddle_y}"
            ),
            ConfigError::MissingRowPoints { rows, provided } => {
                write!(f, "{rows} brick rows but only {provided} row point values")
            }
            ConfigError::InvalidProbability(p) => {
                write!(f, "bonus probability {p} is outside [0, 1]")
            }
            ConfigError::InvalidAngleRange { min, max } => {
                write!(f, "launch angle range {min}..{max} is invalid")
            }
            ConfigError::InvalidBounceAngle(deg) => {
                write!(f, "paddle bounce angle {deg} is outside (0, 90) degrees")
            }
            ConfigError::ZeroLives => write!(f, "starting lives must be at least 1"),
            ConfigError::ZeroMaxLevel => write!(f, "max level must be at least 1"),
            ConfigError::Json(e) => write!(f, "config JSON error: {e}"),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the floor up to the paddle's top edge
    pub paddle_bottom_offset: f32,
    /// Horizontal movement per tick while a direction is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Level 1 speed, pixels per tick
    pub ball_base_speed: f32,
    pub launch_angle_min_deg: f32,
    pub launch_angle_max_deg: f32,
    pub level_speed_step: f32,
    pub paddle_max_bounce_deg: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_offset: f32,
    pub brick_side_padding: f32,

    // === Scoring ===
    /// Points per destroyed brick, by row (top row first)
    pub row_points: Vec<u32>,
    pub bonus_points: u32,
    pub bonus_probability: f64,

    // === Progression ===
    pub armored_rows: usize,
    pub armored_from_level: u32,
    pub starting_lives: u32,
    pub max_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            launch_angle_min_deg: LAUNCH_ANGLE_MIN_DEG,
            launch_angle_max_deg: LAUNCH_ANGLE_MAX_DEG,
            level_speed_step: LEVEL_SPEED_STEP,
            paddle_max_bounce_deg: PADDLE_MAX_BOUNCE_DEG,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_side_padding: BRICK_SIDE_PADDING,

            row_points: ROW_POINTS.to_vec(),
            bonus_points: BONUS_POINTS,
            bonus_probability: BONUS_PROBABILITY,

            armored_rows: ARMORED_ROWS,
            armored_from_level: ARMORED_FROM_LEVEL,
            starting_lives: STARTING_LIVES,
            max_level: MAX_LEVEL,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_offset
    }

    /// Width of one brick, derived from the field width, padding and gaps
    pub fn brick_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        let usable = self.field_width - 2.0 * self.brick_side_padding;
        (usable - (cols - 1.0) * self.brick_gap) / cols
    }

    /// Ball speed at the start of `level` (1-based)
    pub fn speed_for_level(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        self.ball_base_speed * (1.0 + steps * self.level_speed_step)
    }

    /// Points for destroying a brick in `row`
    pub fn points_for_row(&self, row: usize) -> u32 {
        debug_assert!(row < self.row_points.len(), "row {row} has no point value");
        self.row_points.get(row).copied().unwrap_or(0)
    }

    /// Check that the parameters describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        if self.brick_width() <= 0.0 {
            let required = 2.0 * self.brick_side_padding
                + (self.brick_cols as f32 - 1.0) * self.brick_gap;
            return Err(ConfigError::BricksDoNotFit {
                required,
                field: self.field_width,
            });
        }

        let grid_bottom = self.brick_top_offset
            + self.brick_rows as f32 * (self.brick_height + self.brick_gap);
        if grid_bottom >= self.paddle_y() {
            return Err(ConfigError::GridOverlapsPaddle {
                grid_bottom,
                paddle_y: self.paddle_y(),
            });
        }

        if self.row_points.len() < self.brick_rows {
            return Err(ConfigError::MissingRowPoints {
                rows: self.brick_rows,
                provided: self.row_points.len(),
            });
        }

        if !(0.0..=1.0).contains(&self.bonus_probability) {
            return Err(ConfigError::InvalidProbability(self.bonus_probability));
        }

        if self.launch_angle_min_deg.is_nan()
            || self.launch_angle_max_deg.is_nan()
            || self.launch_angle_min_deg > self.launch_angle_max_deg
            || self.launch_angle_min_deg < 0.0
            || self.launch_angle_max_deg > 90.0
        {
            return Err(ConfigError::InvalidAngleRange {
                min: self.launch_angle_min_deg,
                max: self.launch_angle_max_deg,
            });
        }

        let bounce = self.paddle_max_bounce_deg;
        if bounce.is_nan() || bounce <= 0.0 || bounce >= 90.0 {
            return Err(ConfigError::InvalidBounceAngle(bounce));
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_speed_for_level() {
        let config = GameConfig::default();
        assert_eq!(config.speed_for_level(1), config.ball_base_speed);
        let expected = config.ball_base_speed * 1.24;
        assert!((config.speed_for_level(3) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_brick_width_fills_row() {
        let config = GameConfig::default();
        let cols = config.brick_cols as f32;
        let total = config.brick_width() * cols
            + config.brick_gap * (cols - 1.0)
            + 2.0 * config.brick_side_padding;
        assert!((total - config.field_width).abs() < 1e-3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "brick_rows": 1, "brick_cols": 1 }"#).unwrap();
        assert_eq!(config.brick_rows, 1);
        assert_eq!(config.brick_cols, 1);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.row_points, ROW_POINTS.to_vec());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            max_level: 9,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_configs() {
        let too_wide = GameConfig {
            paddle_width: 2000.0,
            ..Default::default()
        };
        assert!(matches!(
            too_wide.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));

        let missing_points = GameConfig {
            brick_rows: 8,
            ..Default::default()
        };
        assert!(matches!(
            missing_points.validate(),
            Err(ConfigError::MissingRowPoints { rows: 8, provided: 6 })
        ));

        let bad_probability = GameConfig {
            bonus_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            bad_probability.validate(),
            Err(ConfigError::InvalidProbability(_))
        ));

        let no_lives = GameConfig {
            starting_lives: 0,
            ..Default::default()
        };
        assert!(matches!(no_lives.validate(), Err(ConfigError::ZeroLives)));

        let crowded = GameConfig {
            brick_cols: 200,
            ..Default::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(ConfigError::BricksDoNotFit { .. })
        ));

        for deg in [0.0, 90.0, 120.0, f32::NAN] {
            let bounce = GameConfig {
                paddle_max_bounce_deg: deg,
                ..Default::default()
            };
            assert!(matches!(
                bounce.validate(),
                Err(ConfigError::InvalidBounceAngle(_))
            ));
        }

        let nan_min = GameConfig {
            launch_angle_min_deg: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_min.validate(),
            Err(ConfigError::InvalidAngleRange { .. })
        ));
        let nan_max = GameConfig {
            launch_angle_max_deg: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_max.validate(),
            Err(ConfigError::InvalidAngleRange { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("config JSON error"));
    }
}
