//! Simulation constants and tuning parameters.
//!
//! Distances are playfield pixels, speeds are pixels per tick and durations
//! are whole ticks. Values marked as defaults can be overridden through
//! [`crate::config::SimConfig`].

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 120;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Default playfield width.
pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;

/// Default playfield height.
pub const DEFAULT_FIELD_HEIGHT: f64 = 900.0;

/// Lifetime sentinel for bullets that live until they leave the field.
pub const UNBOUNDED_LIFE: i32 = -1;

// --- Player ---

pub const PLAYER_WIDTH: f64 = 60.0;
pub const PLAYER_HEIGHT: f64 = 80.0;

/// Gap between the player's starting position and the bottom edge.
pub const PLAYER_BOTTOM_MARGIN: f64 = 10.0;

pub const DEFAULT_PLAYER_HP: i32 = 3;
pub const DEFAULT_PLAYER_MAX_HP: i32 = 5;
pub const DEFAULT_PLAYER_SPEED: f64 = 10.0;
pub const DEFAULT_PLAYER_FIRE_INTERVAL: u32 = 20;

/// Invulnerability after taking a hit (one second).
pub const DEFAULT_PLAYER_DAMAGE_COOLDOWN: u32 = TICK_RATE;

pub const PLAYER_SHOT_WIDTH: f64 = 6.0;
pub const PLAYER_SHOT_HEIGHT: f64 = 12.0;
pub const PLAYER_SHOT_SPEED: f64 = 12.0;
pub const PLAYER_SHOT_DAMAGE: i32 = 1;

// --- Enemies ---

pub const NORMAL_WIDTH: f64 = 50.0;
pub const NORMAL_HEIGHT: f64 = 60.0;
pub const NORMAL_HP: i32 = 1;
pub const NORMAL_SPEED: f64 = 2.0;
pub const NORMAL_SCORE: u32 = 10;

pub const ELITE_WIDTH: f64 = 60.0;
pub const ELITE_HEIGHT: f64 = 80.0;
pub const ELITE_HP: i32 = 3;
pub const ELITE_SPEED: f64 = 2.0;
pub const ELITE_SCORE: u32 = 50;
pub const ELITE_FIRE_INTERVAL: u32 = 120;
pub const ELITE_SHOT_SPEED: f64 = 4.0;

pub const BOSS_WIDTH: f64 = 200.0;
pub const BOSS_HEIGHT: f64 = 150.0;
pub const BOSS_HP: i32 = 30;
pub const BOSS_SCORE: u32 = 3000;

/// Boss patrol band as fractions of the field width.
pub const BOSS_PATROL_LEFT: f64 = 0.25;
pub const BOSS_PATROL_RIGHT: f64 = 0.75;

// --- Boss stages ---

/// Minimum hp for the High stage.
pub const BOSS_HIGH_STAGE_HP: i32 = 20;
/// Minimum hp for the Mid stage. Anything lower (but alive) is Low.
pub const BOSS_MID_STAGE_HP: i32 = 10;

pub const BOSS_HIGH_FIRE_INTERVAL: u32 = 90;
pub const BOSS_MID_FIRE_INTERVAL: u32 = 150;
pub const BOSS_LOW_FIRE_INTERVAL: u32 = 120;

pub const BOSS_HIGH_SPEED: f64 = 1.0;
pub const BOSS_MID_SPEED: f64 = 1.2;
pub const BOSS_LOW_SPEED: f64 = 1.8;

// --- Enemy bullets ---

pub const ENEMY_SHOT_SMALL: f64 = 16.0;
pub const ENEMY_SHOT_LARGE: f64 = 28.0;
pub const ENEMY_SHOT_DAMAGE: i32 = 1;

pub const CURVED_SHOT_WIDTH: f64 = 6.0;
pub const CURVED_SHOT_HEIGHT: f64 = 12.0;

pub const HOMING_SHOT_WIDTH: f64 = 12.0;
pub const HOMING_SHOT_HEIGHT: f64 = 24.0;

/// Fraction of the way the heading turns toward the target each tick.
pub const HOMING_TURN_STRENGTH: f64 = 0.12;

/// Curved shot defaults.
pub const CURVE_GRAVITY: f64 = 0.65;
pub const CURVE_MIN_DOWN_VY: f64 = 4.0;
pub const CURVE_MAX_SPEED: f64 = 18.0;

/// Laser beams kill whatever they touch.
pub const LASER_DAMAGE: i32 = i32::MAX;
pub const LASER_THICKNESS: f64 = 20.0;
pub const LASER_DURATION: i32 = 60;

// --- Spawning ---

pub const DEFAULT_NORMAL_SPAWN_INTERVAL: u32 = TICK_RATE;
pub const DEFAULT_ELITE_SPAWN_INTERVAL: u32 = 3 * TICK_RATE;
pub const DEFAULT_ELITE_SCORE_THRESHOLD: u64 = 100;
pub const DEFAULT_BOSS_SCORE_THRESHOLD: u64 = 500;
pub const DEFAULT_ENEMY_CEILING: usize = 16;

// --- Items ---

pub const ITEM_SIZE: f64 = 44.0;
pub const ITEM_SPEED: f64 = 3.0;

/// Placement candidates tried before falling back to a corner.
pub const ITEM_PLACEMENT_ATTEMPTS: usize = 80;

/// Inset used for the fallback corner placement.
pub const ITEM_CORNER_INSET: f64 = 80.0;

pub const DEFAULT_ITEM_MIN_INTERVAL: u32 = 5 * TICK_RATE;
pub const DEFAULT_ITEM_MAX_INTERVAL: u32 = 10 * TICK_RATE;
pub const DEFAULT_ITEM_LIFETIME: u32 = 3 * TICK_RATE;
pub const DEFAULT_HEAL_AMOUNT: i32 = 1;
pub const DEFAULT_SHIELD_TICKS: u32 = 5 * TICK_RATE;
pub const DEFAULT_POWER_TICKS: u32 = 10 * TICK_RATE;
pub const DEFAULT_POWER_BONUS: i32 = 1;
/// Upper bound accepted for the power bonus.
pub const MAX_POWER_BONUS: i32 = 100;
pub const DEFAULT_CLEAR_WINDOW: u32 = TICK_RATE;

/// Base item weights (Heal, Shield, Power, Clear).
pub const ITEM_WEIGHT_HEAL: u32 = 3;
pub const ITEM_WEIGHT_SHIELD: u32 = 2;
pub const ITEM_WEIGHT_POWER: u32 = 3;
pub const ITEM_WEIGHT_CLEAR: u32 = 1;

/// Heal weight multiplier when the player is down to its last hit point.
pub const ITEM_LOW_HP_HEAL_FACTOR: u32 = 3;
