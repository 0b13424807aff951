//! Class-specific enemy profiles.
//!
//! Consolidates per-class parameters for spawning and the per-tick update.

use glam::DVec2;

use thunder_core::enums::{BossStage, EnemyClass};

/// Static parameters for an enemy class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub size: DVec2,
    pub hp: i32,
    /// Movement speed (pixels per tick).
    pub speed: f64,
    /// Points awarded on destruction.
    pub score: u32,
    pub can_shoot: bool,
    /// Ticks between shots. Zero for classes that never fire.
    pub fire_interval: u32,
}

/// Get the profile for a given enemy class. The boss values are its High stage.
pub fn get_profile(class: EnemyClass) -> EnemyProfile {
    use thunder_core::constants::*;

    match class {
        EnemyClass::Normal => EnemyProfile {
            size: DVec2::new(NORMAL_WIDTH, NORMAL_HEIGHT),
            hp: NORMAL_HP,
            speed: NORMAL_SPEED,
            score: NORMAL_SCORE,
            can_shoot: false,
            fire_interval: 0,
        },
        EnemyClass::Elite => EnemyProfile {
            size: DVec2::new(ELITE_WIDTH, ELITE_HEIGHT),
            hp: ELITE_HP,
            speed: ELITE_SPEED,
            score: ELITE_SCORE,
            can_shoot: true,
            fire_interval: ELITE_FIRE_INTERVAL,
        },
        EnemyClass::Boss => {
            let stage = stage_profile(BossStage::High);
            EnemyProfile {
                size: DVec2::new(BOSS_WIDTH, BOSS_HEIGHT),
                hp: BOSS_HP,
                speed: stage.speed,
                score: BOSS_SCORE,
                can_shoot: true,
                fire_interval: stage.fire_interval,
            }
        }
    }
}

/// Fire rate and speed the boss adopts on entering a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossStageProfile {
    pub fire_interval: u32,
    pub speed: f64,
}

pub fn stage_profile(stage: BossStage) -> BossStageProfile {
    use thunder_core::constants::*;

    match stage {
        BossStage::High => BossStageProfile {
            fire_interval: BOSS_HIGH_FIRE_INTERVAL,
            speed: BOSS_HIGH_SPEED,
        },
        BossStage::Mid => BossStageProfile {
            fire_interval: BOSS_MID_FIRE_INTERVAL,
            speed: BOSS_MID_SPEED,
        },
        BossStage::Low => BossStageProfile {
            fire_interval: BOSS_LOW_FIRE_INTERVAL,
            speed: BOSS_LOW_SPEED,
        },
    }
}
