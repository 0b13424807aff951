#[cfg(test)]
mod tests {
    use glam::DVec2;

    use thunder_core::components::*;
    use thunder_core::constants::*;
    use thunder_core::enums::*;
    use thunder_core::trajectory::NoTarget;
    use thunder_core::types::Playfield;

    use crate::behavior::{on_death, update_enemy, EnemyTickContext};
    use crate::factory;
    use crate::fsm::{evaluate, stage_for_hp, BossContext};
    use crate::patterns;
    use crate::profiles::{get_profile, stage_profile};

    fn craft_of(spawn: Spawn) -> (Body, Craft) {
        match spawn.kind {
            EntityKind::Craft(c) => (spawn.body, c),
            other => panic!("expected craft, got {other:?}"),
        }
    }

    fn bullets(spawns: &[Spawn]) -> Vec<(Body, Bullet)> {
        spawns
            .iter()
            .filter_map(|s| match s.kind {
                EntityKind::Bullet(b) => Some((s.body, b)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_stage_bands() {
        assert_eq!(stage_for_hp(30), Some(BossStage::High));
        assert_eq!(stage_for_hp(20), Some(BossStage::High));
        assert_eq!(stage_for_hp(19), Some(BossStage::Mid));
        assert_eq!(stage_for_hp(10), Some(BossStage::Mid));
        assert_eq!(stage_for_hp(9), Some(BossStage::Low));
        assert_eq!(stage_for_hp(1), Some(BossStage::Low));
        assert_eq!(stage_for_hp(0), None);
    }

    #[test]
    fn test_stage_is_pure_function_of_hp() {
        let ctx = || BossContext {
            stage: BossStage::High,
            hp: 12,
            fire_interval: BOSS_HIGH_FIRE_INTERVAL,
            fire_cooldown: 5,
            speed: BOSS_HIGH_SPEED,
        };
        let a = evaluate(&ctx());
        let b = evaluate(&ctx());
        assert_eq!(a, b);
        assert!(a.stage_changed);
        assert_eq!(a.new_stage, BossStage::Mid);
        assert_eq!(a.fire_interval, BOSS_MID_FIRE_INTERVAL);
        assert_eq!(a.fire_cooldown, BOSS_MID_FIRE_INTERVAL);
        assert_eq!(a.speed, BOSS_MID_SPEED);
    }

    #[test]
    fn test_stage_never_regresses() {
        let update = evaluate(&BossContext {
            stage: BossStage::Low,
            hp: 25,
            fire_interval: BOSS_LOW_FIRE_INTERVAL,
            fire_cooldown: 3,
            speed: BOSS_LOW_SPEED,
        });
        assert!(!update.stage_changed);
        assert_eq!(update.new_stage, BossStage::Low);
        assert_eq!(update.fire_cooldown, 3);
    }

    #[test]
    fn test_boss_skips_to_low_in_one_update() {
        let field = Playfield::default();
        let (mut body, mut craft) = craft_of(factory::boss(&field));
        craft.hp = 25;
        craft.take_damage(16);
        assert_eq!(craft.hp, 9);

        let ctx = EnemyTickContext {
            field: &field,
            target: &NoTarget,
        };
        let update = update_enemy(&mut body, &mut craft, &ctx);

        assert_eq!(update.stage_changed, Some(BossStage::Low));
        assert_eq!(craft.boss_state().unwrap().stage, BossStage::Low);
        assert_eq!(craft.fire_interval, BOSS_LOW_FIRE_INTERVAL);
        assert_eq!(craft.speed, BOSS_LOW_SPEED);
        assert_eq!(craft.fire_cooldown, BOSS_LOW_FIRE_INTERVAL);
        assert!(update.spawned.is_empty());
    }

    #[test]
    fn test_boss_fires_one_full_interval_after_stage_change() {
        let field = Playfield::default();
        let (mut body, mut craft) = craft_of(factory::boss(&field));
        craft.fire_cooldown = 1;
        craft.hp = 9;
        let ctx = EnemyTickContext {
            field: &field,
            target: &NoTarget,
        };

        // The cooldown would have expired this tick; the stage change resets it.
        let update = update_enemy(&mut body, &mut craft, &ctx);
        assert_eq!(update.stage_changed, Some(BossStage::Low));
        assert_eq!(craft.fire_cooldown, BOSS_LOW_FIRE_INTERVAL);
        assert!(update.spawned.is_empty());

        for _ in 1..BOSS_LOW_FIRE_INTERVAL {
            let update = update_enemy(&mut body, &mut craft, &ctx);
            assert!(update.stage_changed.is_none());
            assert!(update.spawned.is_empty());
        }
        let update = update_enemy(&mut body, &mut craft, &ctx);
        assert!(!update.spawned.is_empty());
        assert_eq!(craft.fire_cooldown, BOSS_LOW_FIRE_INTERVAL);
    }

    #[test]
    fn test_boss_spawns_top_center_in_high_stage() {
        let field = Playfield::default();
        let (body, craft) = craft_of(factory::boss(&field));
        assert_eq!(body.pos, DVec2::new(300.0, 0.0));
        assert_eq!(craft.hp, BOSS_HP);
        assert_eq!(craft.fire_interval, BOSS_HIGH_FIRE_INTERVAL);
        assert_eq!(craft.fire_cooldown, BOSS_HIGH_FIRE_INTERVAL);
        assert_eq!(craft.score_value, BOSS_SCORE);
    }

    #[test]
    fn test_boss_patrol_turns_at_band_edge() {
        let field = Playfield::default();
        let (mut body, mut craft) = craft_of(factory::boss(&field));
        let ctx = EnemyTickContext {
            field: &field,
            target: &NoTarget,
        };
        for _ in 0..100 {
            update_enemy(&mut body, &mut craft, &ctx);
        }
        assert_eq!(body.pos.x, 400.0);
        assert!(!craft.boss_state().unwrap().moving_right);

        update_enemy(&mut body, &mut craft, &ctx);
        assert_eq!(body.pos.x, 399.0);
    }

    #[test]
    fn test_normal_enemy_leaves_field_silently() {
        let field = Playfield::new(800.0, 100.0);
        let (mut body, mut craft) = craft_of(factory::enemy(EnemyClass::Normal, 10.0));
        assert_eq!(body.pos.y, -NORMAL_HEIGHT);
        let ctx = EnemyTickContext {
            field: &field,
            target: &NoTarget,
        };

        let mut ticks = 0;
        loop {
            ticks += 1;
            let update = update_enemy(&mut body, &mut craft, &ctx);
            assert!(update.spawned.is_empty());
            if update.left_field {
                break;
            }
        }
        assert!(!body.is_alive());
        assert_eq!(ticks, 80);
        assert!(craft.hp > 0);
    }

    #[test]
    fn test_elite_fires_on_interval() {
        let field = Playfield::default();
        let (mut body, mut craft) = craft_of(factory::enemy(EnemyClass::Elite, 100.0));
        let ctx = EnemyTickContext {
            field: &field,
            target: &NoTarget,
        };

        let mut shots = 0;
        for _ in 0..=ELITE_FIRE_INTERVAL {
            shots += update_enemy(&mut body, &mut craft, &ctx).spawned.len();
        }
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_elite_shot_goes_straight_down() {
        let body = Body::new(DVec2::new(100.0, 50.0), DVec2::new(ELITE_WIDTH, ELITE_HEIGHT));
        let shots = bullets(&patterns::elite_volley(&body));
        assert_eq!(shots.len(), 1);
        let (shot_body, shot) = shots[0];
        assert_eq!(shot_body.pos, DVec2::new(126.0, 134.0));
        assert_eq!(shot.motion.velocity, DVec2::new(0.0, ELITE_SHOT_SPEED));
        assert!(!shot.from_player());
    }

    #[test]
    fn test_boss_volleys_per_stage() {
        let field = Playfield::default();
        let body = Body::new(DVec2::new(300.0, 0.0), DVec2::new(BOSS_WIDTH, BOSS_HEIGHT));

        let high = bullets(&patterns::boss_volley(BossStage::High, &body, &field, &NoTarget));
        assert_eq!(high.len(), 5);
        assert_eq!(
            high.iter().filter(|(_, b)| b.kind == BulletKind::CurvedShot).count(),
            2
        );

        let mid = bullets(&patterns::boss_volley(BossStage::Mid, &body, &field, &NoTarget));
        assert_eq!(mid.len(), 8);
        let homing: Vec<_> = mid.iter().filter(|(_, b)| b.kind == BulletKind::HomingShot).collect();
        assert_eq!(homing.len(), 1);
        assert_eq!(homing[0].1.motion.life_ticks, 150);
        let large = mid
            .iter()
            .filter(|(body, _)| body.size.x == ENEMY_SHOT_LARGE)
            .count();
        assert_eq!(large, 1);

        let low = bullets(&patterns::boss_volley(BossStage::Low, &body, &field, &NoTarget));
        assert_eq!(low.len(), 3);
        assert!(low.iter().all(|(_, b)| !b.from_player()));
    }

    #[test]
    fn test_laser_is_piercing_lethal_beam_to_bottom() {
        let field = Playfield::default();
        let body = Body::new(DVec2::new(300.0, 0.0), DVec2::new(BOSS_WIDTH, BOSS_HEIGHT));
        let low = bullets(&patterns::boss_volley(BossStage::Low, &body, &field, &NoTarget));
        let (beam_body, beam) = low
            .iter()
            .find(|(_, b)| b.kind == BulletKind::Laser)
            .copied()
            .unwrap();
        assert!(beam.piercing);
        assert_eq!(beam.damage, LASER_DAMAGE);
        assert_eq!(beam.motion.life_ticks, LASER_DURATION);
        assert!(beam.motion.trajectory.is_none());
        assert_eq!(beam_body.size.x, LASER_THICKNESS);
        assert_eq!(beam_body.pos.y + beam_body.size.y, field.height);
    }

    #[test]
    fn test_homing_launch_aims_at_target() {
        let field = Playfield::default();
        let body = Body::new(DVec2::new(300.0, 0.0), DVec2::new(BOSS_WIDTH, BOSS_HEIGHT));
        // Directly below the muzzle.
        let target = Some(DVec2::new(400.0, 800.0));
        let mid = bullets(&patterns::boss_volley(BossStage::Mid, &body, &field, &target));
        let (_, homing) = mid
            .iter()
            .find(|(_, b)| b.kind == BulletKind::HomingShot)
            .copied()
            .unwrap();
        assert!((homing.motion.velocity - DVec2::new(0.0, 2.5)).length() < 1e-9);
    }

    #[test]
    fn test_player_volley_uses_damage() {
        let body = Body::new(DVec2::new(370.0, 810.0), DVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        let shots = bullets(&patterns::player_volley(&body, 2));
        assert_eq!(shots.len(), 1);
        let (shot_body, shot) = shots[0];
        assert_eq!(shot_body.pos, DVec2::new(396.0, 800.0));
        assert_eq!(shot.damage, 2);
        assert!(shot.from_player());
        assert_eq!(shot.motion.velocity.y, -PLAYER_SHOT_SPEED);
    }

    #[test]
    fn test_item_moves_at_item_speed() {
        let spawn = factory::item(ItemKind::Heal, DVec2::new(10.0, 10.0), 1.0, 360);
        let EntityKind::Item(item) = spawn.kind else {
            panic!("expected item");
        };
        assert!((item.motion.velocity.length() - ITEM_SPEED).abs() < 1e-9);
        assert_eq!(item.motion.life_ticks, 360);
        assert_eq!(spawn.body.size, DVec2::splat(ITEM_SIZE));
    }

    #[test]
    fn test_death_reports() {
        let (_, boss) = craft_of(factory::boss(&Playfield::default()));
        let report = on_death(&boss);
        assert_eq!(report.signal, GameSignal::BossDefeated);
        assert_eq!(report.score, BOSS_SCORE);

        let (_, normal) = craft_of(factory::enemy(EnemyClass::Normal, 0.0));
        let report = on_death(&normal);
        assert_eq!(report.signal, GameSignal::Continue);
        assert_eq!(report.class, Some(EnemyClass::Normal));
        assert_eq!(report.score, NORMAL_SCORE);

        let player = Craft::new(0, CraftRole::Player(PlayerState::new(5, 0)), 20, 10.0);
        let report = on_death(&player);
        assert_eq!(report.signal, GameSignal::PlayerDefeated);
        assert_eq!(report.class, None);
    }

    #[test]
    fn test_profiles() {
        let normal = get_profile(EnemyClass::Normal);
        assert!(!normal.can_shoot);
        assert_eq!(normal.size, DVec2::new(NORMAL_WIDTH, NORMAL_HEIGHT));
        let elite = get_profile(EnemyClass::Elite);
        assert_eq!(elite.fire_interval, ELITE_FIRE_INTERVAL);
        assert_eq!(get_profile(EnemyClass::Boss).fire_interval, stage_profile(BossStage::High).fire_interval);
    }
}
