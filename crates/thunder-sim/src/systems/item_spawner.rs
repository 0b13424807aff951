//! Pickup spawning system.
//!
//! At most one item is active at a time. When it disappears (picked up,
//! expired) a new random countdown starts; the next item spawns when it
//! runs out.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use thunder_ai::factory;
use thunder_core::components::{Body, EntityId};
use thunder_core::config::ItemConfig;
use thunder_core::constants::*;
use thunder_core::enums::ItemKind;
use thunder_core::events::GameEvent;
use thunder_core::types::Playfield;

use crate::world::World;

#[derive(Debug, Clone)]
pub struct ItemSpawner {
    config: ItemConfig,
    active: Option<EntityId>,
    countdown: u32,
}

impl ItemSpawner {
    pub fn new(config: ItemConfig) -> Self {
        let countdown = config.first_spawn_delay_ticks;
        Self {
            config,
            active: None,
            countdown,
        }
    }

    pub fn active(&self) -> Option<EntityId> {
        self.active
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Advance the spawner by one tick, spawning an item when due.
    pub fn run(
        &mut self,
        world: &mut World,
        field: &Playfield,
        boss_fight: bool,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> Option<EntityId> {
        if let Some(id) = self.active {
            if world.is_alive(id) {
                return None;
            }
            self.active = None;
            self.countdown =
                rng.gen_range(self.config.min_interval_ticks..=self.config.max_interval_ticks);
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            return None;
        }

        let player = world.player()?;
        let craft = player.craft()?;
        let max_hp = craft.player_state()?.max_hp;
        let hp = craft.hp;
        let player_body = player.body;

        let kind = choose_kind(rng, hp, max_hp, boss_fight);
        let pos = choose_position(rng, field, &player_body);
        let angle = rng.gen_range(0.0..TAU);

        let id = world.spawn(factory::item(kind, pos, angle, self.config.lifetime_ticks));
        self.active = Some(id);
        tracing::debug!(?kind, x = pos.x, y = pos.y, "item spawned");
        events.push(GameEvent::ItemSpawned { id, kind });
        Some(id)
    }
}

/// Weights in [`ItemKind::ALL`] order.
pub fn item_weights(hp: i32, max_hp: i32, boss_fight: bool) -> [u32; 4] {
    let mut heal = ITEM_WEIGHT_HEAL;
    if hp <= 1 {
        heal *= ITEM_LOW_HP_HEAL_FACTOR;
    }
    if hp >= max_hp {
        heal = 0;
    }
    let (shield, clear) = if boss_fight {
        (0, 0)
    } else {
        (ITEM_WEIGHT_SHIELD, ITEM_WEIGHT_CLEAR)
    };
    [heal, shield, ITEM_WEIGHT_POWER, clear]
}

/// Weighted pick. Power always carries weight, so the table is never empty.
pub fn choose_kind(rng: &mut ChaCha8Rng, hp: i32, max_hp: i32, boss_fight: bool) -> ItemKind {
    match WeightedIndex::new(item_weights(hp, max_hp, boss_fight)) {
        Ok(dist) => ItemKind::ALL[dist.sample(rng)],
        Err(_) => ItemKind::Power,
    }
}

/// Pick a spot in the vertical half opposite the player, with the item centre
/// at least a third of the diagonal from the player centre. Falls back to the
/// farthest corner of that half.
pub fn choose_position(rng: &mut ChaCha8Rng, field: &Playfield, player: &Body) -> DVec2 {
    let player_center = player.center();
    let half = field.height / 2.0;
    let player_low = player_center.y >= half;
    let (y_min, y_max) = if player_low {
        (0.0, half - ITEM_SIZE)
    } else {
        (half, field.height - ITEM_SIZE)
    };
    let x_max = field.width - ITEM_SIZE;
    let min_dist = field.diagonal() / 3.0;

    for _ in 0..ITEM_PLACEMENT_ATTEMPTS {
        let candidate = DVec2::new(uniform(rng, 0.0, x_max), uniform(rng, y_min, y_max));
        let candidate_center = candidate + DVec2::splat(ITEM_SIZE / 2.0);
        if candidate_center.distance(player_center) >= min_dist {
            return candidate;
        }
    }

    let left = ITEM_CORNER_INSET.min(x_max.max(0.0));
    let right = (field.width - ITEM_CORNER_INSET - ITEM_SIZE).max(left);
    let x = if player_center.x < field.width / 2.0 {
        right
    } else {
        left
    };
    let y = if player_low {
        ITEM_CORNER_INSET.min(y_max.max(0.0))
    } else {
        (field.height - ITEM_CORNER_INSET - ITEM_SIZE).max(half)
    };
    DVec2::new(x, y)
}

fn uniform(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
