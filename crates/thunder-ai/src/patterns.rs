//! Shoot patterns.
//!
//! Pure functions of the shooter's body (and, for the boss, its stage). Bullet
//! origins are measured from the horizontal centre `cx` and bottom edge `by`
//! of the shooter.

use glam::DVec2;

use thunder_core::components::{Body, Spawn};
use thunder_core::constants::*;
use thunder_core::enums::BossStage;
use thunder_core::trajectory::TargetProvider;
use thunder_core::types::Playfield;

use crate::factory;

const HOMING_LAUNCH_SPEED: f64 = 2.5;
const MID_HOMING_TICKS: i32 = 150;
const LOW_HOMING_TICKS: i32 = 120;

fn muzzle(body: &Body) -> (f64, f64) {
    (body.pos.x + body.size.x / 2.0, body.pos.y + body.size.y)
}

/// Launch velocity for a homing shot: toward the target when one exists,
/// straight down otherwise.
fn homing_launch(from: DVec2, target: &dyn TargetProvider) -> DVec2 {
    let down = DVec2::new(0.0, HOMING_LAUNCH_SPEED);
    match target.target_position() {
        Some(t) => {
            let dir = (t - from).normalize_or_zero();
            if dir == DVec2::ZERO {
                down
            } else {
                dir * HOMING_LAUNCH_SPEED
            }
        }
        None => down,
    }
}

/// One upward shot from the player's nose.
pub fn player_volley(body: &Body, damage: i32) -> Vec<Spawn> {
    let pos = DVec2::new(body.pos.x + body.size.x / 2.0 - 4.0, body.pos.y - 10.0);
    vec![factory::player_shot(pos, damage)]
}

/// A single straight shot downward.
pub fn elite_volley(body: &Body) -> Vec<Spawn> {
    let (cx, by) = muzzle(body);
    vec![factory::enemy_shot(
        DVec2::new(cx - 4.0, by + 4.0),
        DVec2::new(0.0, ELITE_SHOT_SPEED),
        false,
    )]
}

/// The volley for the boss's current stage.
pub fn boss_volley(
    stage: BossStage,
    body: &Body,
    field: &Playfield,
    target: &dyn TargetProvider,
) -> Vec<Spawn> {
    match stage {
        BossStage::High => boss_high(body),
        BossStage::Mid => boss_mid(body, target),
        BossStage::Low => boss_low(body, field, target),
    }
}

/// Three-shot spread plus a pair of curved shots bending opposite ways.
fn boss_high(body: &Body) -> Vec<Spawn> {
    let (cx, by) = muzzle(body);
    let mut out = Vec::with_capacity(5);
    for i in -1..=1 {
        let i = f64::from(i);
        out.push(factory::enemy_shot(
            DVec2::new(cx + i * 20.0, by + 4.0),
            DVec2::new(i * 0.6, 3.5),
            false,
        ));
    }
    for factor in [0.05, -0.05] {
        out.push(factory::curved_shot(
            DVec2::new(cx - 40.0, by),
            DVec2::new(-1.2, 3.0),
            factor,
        ));
    }
    out
}

/// One homing shot plus a seven-shot fan with a large centre round.
fn boss_mid(body: &Body, target: &dyn TargetProvider) -> Vec<Spawn> {
    let (cx, by) = muzzle(body);
    let origin = DVec2::new(cx, by);
    let mut out = Vec::with_capacity(8);
    out.push(factory::homing_shot(
        origin,
        homing_launch(origin, target),
        MID_HOMING_TICKS,
    ));
    for i in -3..=3 {
        out.push(factory::enemy_shot(
            DVec2::new(cx, by + 4.0),
            DVec2::new(f64::from(i) * 0.8, 3.8),
            i == 0,
        ));
    }
    out
}

/// Lethal beam, a homing shot and one fast large round.
fn boss_low(body: &Body, field: &Playfield, target: &dyn TargetProvider) -> Vec<Spawn> {
    let (cx, by) = muzzle(body);
    let homing_origin = DVec2::new(cx + 40.0, by + 4.0);
    vec![
        factory::laser_beam(DVec2::new(cx, by + 4.0), field, LASER_DURATION),
        factory::homing_shot(
            homing_origin,
            homing_launch(homing_origin, target),
            LOW_HOMING_TICKS,
        ),
        factory::enemy_shot(DVec2::new(cx, by + 4.0), DVec2::new(0.0, 4.5), true),
    ]
}
