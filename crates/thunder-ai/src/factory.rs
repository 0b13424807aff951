//! Constructors for every spawnable entity.
//!
//! Each function returns an id-less [`Spawn`]; the world assigns ids when the
//! spawn is merged into the active set.

use glam::DVec2;

use thunder_core::components::*;
use thunder_core::constants::*;
use thunder_core::enums::*;
use thunder_core::trajectory::Trajectory;
use thunder_core::types::Playfield;

use crate::profiles::get_profile;

fn spawn_bullet(pos: DVec2, size: DVec2, bullet: Bullet) -> Spawn {
    Spawn::new(Body::new(pos, size), EntityKind::Bullet(bullet))
}

/// Straight upward player shot.
pub fn player_shot(pos: DVec2, damage: i32) -> Spawn {
    let vel = DVec2::new(0.0, -PLAYER_SHOT_SPEED);
    let size = DVec2::new(PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT);
    let motion = Motion::new(pos, vel, Trajectory::Straight);
    spawn_bullet(
        pos,
        size,
        Bullet::new(BulletKind::PlayerShot, true, motion, damage),
    )
}

/// Straight enemy shot, small or large round.
pub fn enemy_shot(pos: DVec2, vel: DVec2, large: bool) -> Spawn {
    let side = if large { ENEMY_SHOT_LARGE } else { ENEMY_SHOT_SMALL };
    let size = DVec2::splat(side);
    let motion = Motion::new(pos, vel, Trajectory::Straight);
    spawn_bullet(
        pos,
        size,
        Bullet::new(BulletKind::EnemyShot, false, motion, ENEMY_SHOT_DAMAGE),
    )
}

/// Enemy shot on a curved path.
pub fn curved_shot(pos: DVec2, vel: DVec2, curve_factor: f64) -> Spawn {
    let size = DVec2::new(CURVED_SHOT_WIDTH, CURVED_SHOT_HEIGHT);
    let motion = Motion::new(pos, vel, Trajectory::curved(curve_factor));
    spawn_bullet(
        pos,
        size,
        Bullet::new(BulletKind::CurvedShot, false, motion, ENEMY_SHOT_DAMAGE),
    )
}

/// Homing enemy shot that expires after `tracking_ticks` (at least one).
pub fn homing_shot(pos: DVec2, vel: DVec2, tracking_ticks: i32) -> Spawn {
    let size = DVec2::new(HOMING_SHOT_WIDTH, HOMING_SHOT_HEIGHT);
    let motion = Motion::new(pos, vel, Trajectory::homing(HOMING_TURN_STRENGTH))
        .with_life(tracking_ticks.max(1));
    spawn_bullet(
        pos,
        size,
        Bullet::new(BulletKind::HomingShot, false, motion, ENEMY_SHOT_DAMAGE),
    )
}

/// Stationary lethal beam from `top_center` down to the bottom of the field.
/// Piercing; has no trajectory and expires after `duration_ticks`.
pub fn laser_beam(top_center: DVec2, field: &Playfield, duration_ticks: i32) -> Spawn {
    let pos = DVec2::new(top_center.x - LASER_THICKNESS / 2.0, top_center.y);
    let length = (field.height - pos.y).max(LASER_THICKNESS);
    let size = DVec2::new(LASER_THICKNESS, length);
    let motion = Motion {
        velocity: DVec2::ZERO,
        origin: pos,
        trajectory: None,
        life_ticks: duration_ticks.max(1),
    };
    spawn_bullet(
        pos,
        size,
        Bullet::new(BulletKind::Laser, false, motion, LASER_DAMAGE).piercing(),
    )
}

/// Bouncing pickup heading off at `angle` radians.
pub fn item(kind: ItemKind, pos: DVec2, angle: f64, lifetime_ticks: u32) -> Spawn {
    let vel = DVec2::from_angle(angle) * ITEM_SPEED;
    let life = i32::try_from(lifetime_ticks.max(1)).unwrap_or(i32::MAX);
    let motion = Motion::new(pos, vel, Trajectory::Bounce).with_life(life);
    Spawn::new(
        Body::new(pos, DVec2::splat(ITEM_SIZE)),
        EntityKind::Item(Item { kind, motion }),
    )
}

/// Rank-and-file or elite enemy entering from above the field at `x`.
pub fn enemy(class: EnemyClass, x: f64) -> Spawn {
    let profile = get_profile(class);
    let role = match class {
        EnemyClass::Elite => CraftRole::Elite,
        _ => CraftRole::Normal,
    };
    let craft = Craft::new(profile.hp, role, profile.fire_interval, profile.speed)
        .with_score(profile.score)
        .shooting(profile.can_shoot);
    Spawn::new(
        Body::new(DVec2::new(x, -profile.size.y), profile.size),
        EntityKind::Craft(craft),
    )
}

/// The boss at top-centre, already configured for its first stage.
pub fn boss(field: &Playfield) -> Spawn {
    let profile = get_profile(EnemyClass::Boss);
    let state = BossState {
        stage: BossStage::High,
        moving_right: true,
    };
    let craft = Craft::new(profile.hp, CraftRole::Boss(state), profile.fire_interval, profile.speed)
        .with_score(profile.score)
        .shooting(true)
        .with_cooldown(profile.fire_interval);
    let pos = DVec2::new(field.width / 2.0 - profile.size.x / 2.0, 0.0);
    Spawn::new(Body::new(pos, profile.size), EntityKind::Craft(craft))
}
