//! Configuration error type.

use std::fmt;

/// A rejected [`crate::config::SimConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Playfield width or height is zero, negative or not finite.
    InvalidPlayfield { width: f64, height: f64 },
    /// The enemy ceiling must allow at least one enemy.
    ZeroEnemyCeiling,
    /// A spawn interval of zero ticks.
    ZeroSpawnInterval { field: &'static str },
    /// Item interval range with `min > max` or a zero bound.
    InvalidItemInterval { min: u32, max: u32 },
    /// Item lifetime of zero ticks.
    ZeroItemLifetime,
    /// Phase thresholds must be strictly ascending.
    ThresholdsNotAscending { elite: u64, boss: u64 },
    /// Starting hp must be positive and no larger than the cap.
    InvalidPlayerHp { hp: i32, max_hp: i32 },
    /// A numeric tuning value outside its allowed range.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The JSON document could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPlayfield { width, height } => {
                write!(f, "playfield must have positive size, got {width}x{height}")
            }
            ConfigError::ZeroEnemyCeiling => write!(f, "enemy ceiling must be at least 1"),
            ConfigError::ZeroSpawnInterval { field } => {
                write!(f, "spawn interval `{field}` must be at least 1 tick")
            }
            ConfigError::InvalidItemInterval { min, max } => {
                write!(f, "item interval range [{min}, {max}] is invalid")
            }
            ConfigError::ZeroItemLifetime => write!(f, "item lifetime must be at least 1 tick"),
            ConfigError::ThresholdsNotAscending { elite, boss } => write!(
                f,
                "phase thresholds must ascend: elite {elite} must be below boss {boss}"
            ),
            ConfigError::InvalidPlayerHp { hp, max_hp } => {
                write!(f, "player hp {hp} must be positive and at most the cap {max_hp}")
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "`{field}` = {value} is outside [{min}, {max}]"),
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
