//! Pickup effects and the clear-screen handler.

use thunder_core::components::{ClearScreen, CraftRole, Entity, ItemEffects};
use thunder_core::config::ItemConfig;
use thunder_core::enums::ItemKind;

/// Apply an item's player-side effect. Clear has none; the world handles it.
pub fn apply_item(kind: ItemKind, receiver: &mut dyn ItemEffects, config: &ItemConfig) {
    match kind {
        ItemKind::Heal => receiver.heal(config.heal_amount),
        ItemKind::Shield => receiver.grant_shield(config.shield_ticks),
        ItemKind::Power => receiver.grant_power(config.power_ticks, config.power_bonus_damage),
        ItemKind::Clear => {}
    }
}

/// Clear-screen handler over the active entity set for the current tick.
pub struct ScreenClearer<'a> {
    entities: &'a mut [Entity],
    window: &'a mut u32,
    pub bullets_removed: usize,
    pub enemies_removed: usize,
}

impl<'a> ScreenClearer<'a> {
    pub fn new(entities: &'a mut [Entity], window: &'a mut u32) -> Self {
        Self {
            entities,
            window,
            bullets_removed: 0,
            enemies_removed: 0,
        }
    }
}

impl ClearScreen for ScreenClearer<'_> {
    fn clear_enemy_bullets_now(&mut self) {
        for entity in self.entities.iter_mut() {
            if entity.is_alive() && entity.is_enemy_bullet() {
                entity.body.kill();
                self.bullets_removed += 1;
            }
        }
    }

    fn clear_normal_enemies(&mut self) {
        for entity in self.entities.iter_mut() {
            let normal = entity
                .craft()
                .is_some_and(|c| matches!(c.role, CraftRole::Normal));
            if entity.is_alive() && normal {
                // Removed without a kill, so no score.
                entity.body.kill();
                self.enemies_removed += 1;
            }
        }
    }

    fn start_clear_window(&mut self, ticks: u32) {
        *self.window = (*self.window).max(ticks);
    }
}

/// Run the full Clear pickup against a clear-screen handler.
pub fn clear_screen(handler: &mut dyn ClearScreen, config: &ItemConfig) {
    handler.clear_enemy_bullets_now();
    handler.clear_normal_enemies();
    handler.start_clear_window(config.clear_window_ticks);
}
