//! Simulation configuration.
//!
//! Every section falls back to its defaults when omitted from JSON, so a
//! config file only needs the values it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Playfield;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub playfield: Playfield,
    pub spawn: SpawnConfig,
    pub items: ItemConfig,
    pub player: PlayerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
            spawn: SpawnConfig::default(),
            items: ItemConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

/// Enemy spawner tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub normal_interval_ticks: u32,
    pub elite_interval_ticks: u32,
    /// Score at which the spawner enters the Elite phase.
    pub elite_score_threshold: u64,
    /// Score at which the spawner enters the Boss phase.
    pub boss_score_threshold: u64,
    /// Maximum concurrently alive enemies.
    pub enemy_ceiling: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            normal_interval_ticks: DEFAULT_NORMAL_SPAWN_INTERVAL,
            elite_interval_ticks: DEFAULT_ELITE_SPAWN_INTERVAL,
            elite_score_threshold: DEFAULT_ELITE_SCORE_THRESHOLD,
            boss_score_threshold: DEFAULT_BOSS_SCORE_THRESHOLD,
            enemy_ceiling: DEFAULT_ENEMY_CEILING,
        }
    }
}

/// Pickup spawner and effect tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub min_interval_ticks: u32,
    pub max_interval_ticks: u32,
    pub lifetime_ticks: u32,
    pub heal_amount: i32,
    pub shield_ticks: u32,
    pub power_ticks: u32,
    pub power_bonus_damage: i32,
    pub clear_window_ticks: u32,
    /// Delay before the first item of a run.
    pub first_spawn_delay_ticks: u32,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            min_interval_ticks: DEFAULT_ITEM_MIN_INTERVAL,
            max_interval_ticks: DEFAULT_ITEM_MAX_INTERVAL,
            lifetime_ticks: DEFAULT_ITEM_LIFETIME,
            heal_amount: DEFAULT_HEAL_AMOUNT,
            shield_ticks: DEFAULT_SHIELD_TICKS,
            power_ticks: DEFAULT_POWER_TICKS,
            power_bonus_damage: DEFAULT_POWER_BONUS,
            clear_window_ticks: DEFAULT_CLEAR_WINDOW,
            first_spawn_delay_ticks: 0,
        }
    }
}

/// Player craft tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub hp: i32,
    pub max_hp: i32,
    pub speed: f64,
    pub fire_interval_ticks: u32,
    pub damage_cooldown_ticks: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hp: DEFAULT_PLAYER_HP,
            max_hp: DEFAULT_PLAYER_MAX_HP,
            speed: DEFAULT_PLAYER_SPEED,
            fire_interval_ticks: DEFAULT_PLAYER_FIRE_INTERVAL,
            damage_cooldown_ticks: DEFAULT_PLAYER_DAMAGE_COOLDOWN,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_playfield(&self.playfield)?;

        let spawn = &self.spawn;
        if spawn.enemy_ceiling == 0 {
            return Err(ConfigError::ZeroEnemyCeiling);
        }
        if spawn.normal_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval {
                field: "normal_interval_ticks",
            });
        }
        if spawn.elite_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval {
                field: "elite_interval_ticks",
            });
        }
        if spawn.elite_score_threshold >= spawn.boss_score_threshold {
            return Err(ConfigError::ThresholdsNotAscending {
                elite: spawn.elite_score_threshold,
                boss: spawn.boss_score_threshold,
            });
        }

        let items = &self.items;
        if items.min_interval_ticks == 0 || items.min_interval_ticks > items.max_interval_ticks {
            return Err(ConfigError::InvalidItemInterval {
                min: items.min_interval_ticks,
                max: items.max_interval_ticks,
            });
        }
        if items.lifetime_ticks == 0 {
            return Err(ConfigError::ZeroItemLifetime);
        }
        // Healing past the cap is never visible, so the cap bounds the amount.
        if !(0..=self.player.max_hp).contains(&items.heal_amount) {
            return Err(out_of_range(
                "heal_amount",
                f64::from(items.heal_amount),
                0.0,
                f64::from(self.player.max_hp.max(0)),
            ));
        }
        if !(0..=MAX_POWER_BONUS).contains(&items.power_bonus_damage) {
            return Err(out_of_range(
                "power_bonus_damage",
                f64::from(items.power_bonus_damage),
                0.0,
                f64::from(MAX_POWER_BONUS),
            ));
        }

        let player = &self.player;
        if player.hp <= 0 || player.max_hp < player.hp {
            return Err(ConfigError::InvalidPlayerHp {
                hp: player.hp,
                max_hp: player.max_hp,
            });
        }
        if !player.speed.is_finite() || player.speed <= 0.0 {
            return Err(out_of_range("player.speed", player.speed, f64::MIN_POSITIVE, f64::MAX));
        }
        if player.fire_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval {
                field: "fire_interval_ticks",
            });
        }

        Ok(())
    }
}

/// Check a playfield size, used both for config and for resize commands.
pub fn validate_playfield(field: &Playfield) -> Result<(), ConfigError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(field.width) && ok(field.height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPlayfield {
            width: field.width,
            height: field.height,
        })
    }
}

fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value,
        min,
        max,
    }
}
