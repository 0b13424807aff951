//! Scripted input source for headless runs.
//!
//! Reads nothing but the render snapshot, like a human player would.

use thunder_core::commands::InputState;
use thunder_core::enums::{BulletKind, EnemyClass, RenderKind};
use thunder_core::state::{EntityView, GameStateSnapshot};

/// How far above the player an incoming enemy shot counts as a threat.
const DODGE_HORIZON: f64 = 220.0;

/// Horizontal slack before the autopilot bothers to line up a target.
const AIM_DEAD_ZONE: f64 = 8.0;

/// Keeps firing, dodges shots about to land, otherwise lines up under the
/// most pressing enemy.
#[derive(Debug, Clone, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, snapshot: &GameStateSnapshot) -> InputState {
        let mut input = InputState {
            firing: true,
            ..Default::default()
        };
        let Some(player) = snapshot
            .entities
            .iter()
            .find(|e| e.kind == RenderKind::Player)
        else {
            return input;
        };
        let player_cx = center_x(player);

        if let Some(threat) = incoming_threat(snapshot, player) {
            if center_x(threat) >= player_cx {
                input.left = true;
            } else {
                input.right = true;
            }
            return input;
        }

        if let Some(target) = pick_target(snapshot) {
            let dx = center_x(target) - player_cx;
            input.left = dx < -AIM_DEAD_ZONE;
            input.right = dx > AIM_DEAD_ZONE;
        }
        input
    }
}

fn center_x(view: &EntityView) -> f64 {
    view.x + view.width / 2.0
}

fn is_enemy_shot(kind: RenderKind) -> bool {
    matches!(kind, RenderKind::Bullet(k) if k != BulletKind::PlayerShot)
}

/// Nearest enemy shot that overlaps the player's column and is about to arrive.
fn incoming_threat<'a>(snapshot: &'a GameStateSnapshot, player: &EntityView) -> Option<&'a EntityView> {
    snapshot
        .entities
        .iter()
        .filter(|e| is_enemy_shot(e.kind))
        .filter(|e| e.x < player.x + player.width && player.x < e.x + e.width)
        .filter(|e| {
            let gap = player.y - (e.y + e.height);
            gap <= DODGE_HORIZON && e.y < player.y + player.height
        })
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

/// The boss when present, else the lowest enemy on screen.
fn pick_target(snapshot: &GameStateSnapshot) -> Option<&EntityView> {
    let enemies = || {
        snapshot
            .entities
            .iter()
            .filter(|e| matches!(e.kind, RenderKind::Enemy(_)))
    };
    enemies()
        .find(|e| e.kind == RenderKind::Enemy(EnemyClass::Boss))
        .or_else(|| enemies().max_by(|a, b| a.y.total_cmp(&b.y)))
}
