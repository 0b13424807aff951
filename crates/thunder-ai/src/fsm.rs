//! Boss stage finite state machine.
//!
//! Pure functions that compute stage transitions from the boss's current hit
//! points. Stages only ever move toward `Low`; a transition reconfigures fire
//! interval and speed and restarts the fire cooldown.

use thunder_core::constants::{BOSS_HIGH_STAGE_HP, BOSS_MID_STAGE_HP};
use thunder_core::enums::BossStage;

use crate::profiles::stage_profile;

/// Health band for a hit point value. `None` once the boss is defeated.
pub fn stage_for_hp(hp: i32) -> Option<BossStage> {
    if hp >= BOSS_HIGH_STAGE_HP {
        Some(BossStage::High)
    } else if hp >= BOSS_MID_STAGE_HP {
        Some(BossStage::Mid)
    } else if hp > 0 {
        Some(BossStage::Low)
    } else {
        None
    }
}

/// Input to the stage FSM.
pub struct BossContext {
    pub stage: BossStage,
    pub hp: i32,
    pub fire_interval: u32,
    pub fire_cooldown: u32,
    pub speed: f64,
}

/// Output from the stage FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageUpdate {
    pub new_stage: BossStage,
    pub fire_interval: u32,
    pub fire_cooldown: u32,
    pub speed: f64,
    pub stage_changed: bool,
}

/// Evaluate the FSM for one boss.
pub fn evaluate(ctx: &BossContext) -> StageUpdate {
    let no_change = StageUpdate {
        new_stage: ctx.stage,
        fire_interval: ctx.fire_interval,
        fire_cooldown: ctx.fire_cooldown,
        speed: ctx.speed,
        stage_changed: false,
    };

    // Defeated bosses keep their last stage; the death hook takes over.
    let Some(band) = stage_for_hp(ctx.hp) else {
        return no_change;
    };
    if band <= ctx.stage {
        return no_change;
    }

    let profile = stage_profile(band);
    StageUpdate {
        new_stage: band,
        fire_interval: profile.fire_interval,
        fire_cooldown: profile.fire_interval,
        speed: profile.speed,
        stage_changed: true,
    }
}
