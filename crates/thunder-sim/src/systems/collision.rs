//! Collision system: all-pairs scan over the active set.
//!
//! Pairs are visited in i<j order. Entities are only flagged and damaged,
//! never removed, so a craft can take several hits in one tick. Dead
//! entities are skipped.

use thunder_ai::behavior::{on_death, DeathReport};
use thunder_core::components::{Entity, EntityKind};
use thunder_core::config::ItemConfig;
use thunder_core::enums::ItemKind;
use thunder_core::events::GameEvent;

use crate::systems::effects::{self, ScreenClearer};
use crate::world::World;

/// Resolve every contact in the world. Returns the death reports of crafts
/// destroyed this pass.
pub fn run(
    world: &mut World,
    items: &ItemConfig,
    clear_window: &mut u32,
    events: &mut Vec<GameEvent>,
) -> Vec<DeathReport> {
    let entities = world.as_mut_slice();
    let mut deaths = Vec::new();

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let (head, tail) = entities.split_at_mut(j);
            let a = &mut head[i];
            if !a.is_alive() {
                break;
            }
            let b = &mut tail[0];
            if !b.is_alive() {
                continue;
            }

            let picked = resolve_pair(a, b, items, events, &mut deaths);
            if picked == Some(ItemKind::Clear) {
                let mut clearer = ScreenClearer::new(entities, clear_window);
                effects::clear_screen(&mut clearer, items);
                tracing::debug!(
                    bullets = clearer.bullets_removed,
                    enemies = clearer.enemies_removed,
                    "screen cleared"
                );
                events.push(GameEvent::ScreenCleared {
                    bullets_removed: clearer.bullets_removed,
                    enemies_removed: clearer.enemies_removed,
                });
            }
        }
    }

    deaths
}

/// True when the pair is excluded before any bounds test.
pub fn never_interact(a: &Entity, b: &Entity) -> bool {
    (a.is_projectile() && b.is_projectile()) || (a.is_enemy_craft() && b.is_enemy_craft())
}

/// Apply the interaction rule for one pair. Returns the kind of any item the
/// player picked up.
pub fn resolve_pair(
    a: &mut Entity,
    b: &mut Entity,
    items: &ItemConfig,
    events: &mut Vec<GameEvent>,
    deaths: &mut Vec<DeathReport>,
) -> Option<ItemKind> {
    if never_interact(a, b) {
        return None;
    }
    if !a.collision_bounds().intersects(&b.collision_bounds()) {
        return None;
    }

    match (&a.kind, &b.kind) {
        (EntityKind::Craft(_), EntityKind::Craft(_)) => {
            craft_vs_craft(a, b, events, deaths);
            None
        }
        (EntityKind::Craft(_), EntityKind::Bullet(_)) => {
            craft_vs_bullet(a, b, events, deaths);
            None
        }
        (EntityKind::Bullet(_), EntityKind::Craft(_)) => {
            craft_vs_bullet(b, a, events, deaths);
            None
        }
        (EntityKind::Craft(_), EntityKind::Item(_)) => craft_vs_item(a, b, items, events),
        (EntityKind::Item(_), EntityKind::Craft(_)) => craft_vs_item(b, a, items, events),
        _ => None,
    }
}

fn craft_vs_craft(
    a: &mut Entity,
    b: &mut Entity,
    events: &mut Vec<GameEvent>,
    deaths: &mut Vec<DeathReport>,
) {
    let (a_boss, b_boss) = (a.is_boss(), b.is_boss());
    if a_boss || b_boss {
        // Touching the boss body is lethal; the boss itself is unaffected.
        let victim = if a_boss { b } else { a };
        if let Some(craft) = victim.craft_mut() {
            let lost = craft.hp;
            craft.force_defeat();
            if craft.is_player() && lost > 0 {
                events.push(GameEvent::PlayerHit { damage: lost, hp: 0 });
            }
        }
        settle_death(victim, deaths);
        return;
    }

    damage_craft(a, 1, events);
    damage_craft(b, 1, events);
    settle_death(a, deaths);
    settle_death(b, deaths);
}

fn craft_vs_bullet(
    target: &mut Entity,
    shot: &mut Entity,
    events: &mut Vec<GameEvent>,
    deaths: &mut Vec<DeathReport>,
) {
    let (Some(craft), Some(bullet)) = (target.craft(), shot.bullet()) else {
        return;
    };
    if bullet.from_player() == craft.is_player() {
        return;
    }
    let (damage, piercing) = (bullet.damage, bullet.piercing);

    damage_craft(target, damage, events);
    if !piercing {
        shot.body.kill();
    }
    settle_death(target, deaths);
}

fn craft_vs_item(
    target: &mut Entity,
    pickup: &mut Entity,
    items: &ItemConfig,
    events: &mut Vec<GameEvent>,
) -> Option<ItemKind> {
    let kind = pickup.item()?.kind;
    let receiver = target.craft_mut()?.item_receiver();
    let mut receiver = receiver?;

    effects::apply_item(kind, &mut receiver, items);
    pickup.body.kill();
    tracing::debug!(?kind, "item picked up");
    events.push(GameEvent::ItemPickedUp { kind });
    Some(kind)
}

fn damage_craft(entity: &mut Entity, amount: i32, events: &mut Vec<GameEvent>) {
    let Some(craft) = entity.craft_mut() else {
        return;
    };
    let dealt = craft.take_damage(amount);
    if craft.is_player() && dealt > 0 {
        events.push(GameEvent::PlayerHit {
            damage: dealt,
            hp: craft.hp,
        });
    }
}

/// Fire the death hook once for a craft that has run out of hit points.
fn settle_death(entity: &mut Entity, deaths: &mut Vec<DeathReport>) {
    let EntityKind::Craft(craft) = &mut entity.kind else {
        return;
    };
    if !craft.claim_death() {
        return;
    }
    entity.body.kill();
    deaths.push(on_death(craft));
}
