//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy craft class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Rank-and-file: flies straight down, never fires.
    Normal,
    /// Tougher straight-down flyer that fires single shots.
    Elite,
    /// Multi-stage boss that patrols the top of the field.
    Boss,
}

/// Boss stage, ordered from healthiest to most damaged.
///
/// The derived `Ord` follows declaration order, so a later stage compares greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BossStage {
    #[default]
    High,
    Mid,
    Low,
}

/// Spawner-wide difficulty phase, advanced by cumulative score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpawnPhase {
    /// Normal enemies only.
    #[default]
    Normal,
    /// Elite and normal enemies concurrently.
    Elite,
    /// A single boss; rank-and-file spawning suppressed.
    Boss,
}

/// Pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restore hit points up to the cap.
    Heal,
    /// Invulnerability window.
    Shield,
    /// Bonus damage window.
    Power,
    /// Wipe enemy bullets and rank-and-file enemies.
    Clear,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Heal,
        ItemKind::Shield,
        ItemKind::Power,
        ItemKind::Clear,
    ];
}

/// Bullet kind, used for rendering and pattern bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    PlayerShot,
    EnemyShot,
    CurvedShot,
    HomingShot,
    Laser,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Running,
    Paused,
    /// Boss defeated.
    Success,
    /// Player defeated.
    Fail,
}

/// Per-tick outcome signalled to the enclosing application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSignal {
    #[default]
    Continue,
    PlayerDefeated,
    BossDefeated,
}

/// What a renderer needs to know to pick a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "kind")]
pub enum RenderKind {
    Player,
    Enemy(EnemyClass),
    Bullet(BulletKind),
    Item(ItemKind),
}
