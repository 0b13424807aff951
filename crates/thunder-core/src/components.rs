//! Entity data: the closed set of simulated object variants.
//!
//! Every simulated object is an [`Entity`]: an id, a [`Body`] (position, size,
//! alive flag) and an [`EntityKind`] carrying the variant's own fields.
//! Behavior lives in the AI and sim crates; the helpers here only keep each
//! variant's invariants (hp floor, one-shot death, immutable ownership).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::UNBOUNDED_LIFE;
use crate::enums::*;
use crate::trajectory::Trajectory;
use crate::types::Rect;

/// Stable identifier assigned by the world on spawn. Ids grow monotonically,
/// so ordering by id is spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Spatial state shared by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner.
    pub pos: DVec2,
    pub size: DVec2,
    alive: bool,
}

impl Body {
    pub fn new(pos: DVec2, size: DVec2) -> Self {
        Self {
            pos,
            size,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flag for removal at end-of-tick cleanup. Never revived.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Collision rectangle. Dead bodies report a zero-size rectangle at their
    /// last position, which never intersects anything.
    pub fn collision_bounds(&self) -> Rect {
        if self.alive {
            Rect::from_corner(self.pos, self.size)
        } else {
            Rect::empty_at(self.pos)
        }
    }

    pub fn center(&self) -> DVec2 {
        self.pos + self.size / 2.0
    }
}

/// Player-only state: damage throttling and pickup windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub max_hp: i32,
    /// Ticks left during which incremental damage is ignored after a hit.
    pub hit_cooldown: u32,
    /// Length of the post-hit window.
    pub hit_cooldown_ticks: u32,
    /// Shield (invulnerability) ticks remaining.
    pub shield_ticks: u32,
    /// Power window ticks remaining.
    pub power_ticks: u32,
    /// Extra shot damage while the power window is open.
    pub bonus_damage: i32,
}

impl PlayerState {
    pub fn new(max_hp: i32, hit_cooldown_ticks: u32) -> Self {
        Self {
            max_hp,
            hit_cooldown: 0,
            hit_cooldown_ticks,
            shield_ticks: 0,
            power_ticks: 0,
            bonus_damage: 0,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.shield_ticks > 0 || self.hit_cooldown > 0
    }

    /// Damage carried by a shot fired right now.
    pub fn shot_damage(&self, base: i32) -> i32 {
        if self.power_ticks > 0 {
            base.saturating_add(self.bonus_damage)
        } else {
            base
        }
    }

    /// Count down every timed window by one tick.
    pub fn tick_windows(&mut self) {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);
        self.shield_ticks = self.shield_ticks.saturating_sub(1);
        if self.power_ticks > 0 {
            self.power_ticks -= 1;
            if self.power_ticks == 0 {
                self.bonus_damage = 0;
            }
        }
    }
}

/// Boss-only state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BossState {
    pub stage: BossStage,
    /// Patrol direction.
    pub moving_right: bool,
}

/// What kind of craft this is, with any role-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CraftRole {
    Player(PlayerState),
    Normal,
    Elite,
    Boss(BossState),
}

/// A craft: the player or an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub hp: i32,
    pub role: CraftRole,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
    pub fire_interval: u32,
    /// Movement speed (pixels per tick).
    pub speed: f64,
    pub can_shoot: bool,
    /// Points awarded when this craft is destroyed.
    pub score_value: u32,
    death_fired: bool,
}

impl Craft {
    pub fn new(hp: i32, role: CraftRole, fire_interval: u32, speed: f64) -> Self {
        Self {
            hp,
            role,
            fire_cooldown: 0,
            fire_interval,
            speed,
            can_shoot: false,
            score_value: 0,
            death_fired: false,
        }
    }

    pub fn with_score(mut self, score_value: u32) -> Self {
        self.score_value = score_value;
        self
    }

    pub fn shooting(mut self, can_shoot: bool) -> Self {
        self.can_shoot = can_shoot;
        self
    }

    pub fn with_cooldown(mut self, fire_cooldown: u32) -> Self {
        self.fire_cooldown = fire_cooldown;
        self
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, CraftRole::Player(_))
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.role, CraftRole::Boss(_))
    }

    /// Enemy class, or `None` for the player.
    pub fn enemy_class(&self) -> Option<EnemyClass> {
        match self.role {
            CraftRole::Player(_) => None,
            CraftRole::Normal => Some(EnemyClass::Normal),
            CraftRole::Elite => Some(EnemyClass::Elite),
            CraftRole::Boss(_) => Some(EnemyClass::Boss),
        }
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.role {
            CraftRole::Player(state) => Some(state),
            _ => None,
        }
    }

    pub fn boss_state(&self) -> Option<&BossState> {
        match &self.role {
            CraftRole::Boss(state) => Some(state),
            _ => None,
        }
    }

    /// Apply incremental damage. The player ignores it while shielded or inside
    /// its post-hit window, and opens that window when a hit lands.
    /// Returns the hit points actually removed.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        if amount <= 0 || self.hp <= 0 {
            return 0;
        }
        if let CraftRole::Player(state) = &mut self.role {
            if state.is_protected() {
                return 0;
            }
            state.hit_cooldown = state.hit_cooldown_ticks;
        }
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount).max(0);
        before - self.hp
    }

    /// Drop straight to zero hit points, bypassing every protection.
    pub fn force_defeat(&mut self) {
        self.hp = 0;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Latch the death hook. Returns `true` exactly once, the first time it is
    /// called on a defeated craft.
    pub fn claim_death(&mut self) -> bool {
        if self.hp <= 0 && !self.death_fired {
            self.death_fired = true;
            true
        } else {
            false
        }
    }

    /// Pickup capability. Only the player exposes one.
    pub fn item_receiver(&mut self) -> Option<PlayerHandle<'_>> {
        match &mut self.role {
            CraftRole::Player(state) => Some(PlayerHandle {
                hp: &mut self.hp,
                state,
            }),
            _ => None,
        }
    }
}

/// Per-tick motion state shared by bullets and items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub velocity: DVec2,
    /// Where the projectile was emitted.
    pub origin: DVec2,
    /// `None` moves straight.
    pub trajectory: Option<Trajectory>,
    /// Remaining lifetime in ticks; [`UNBOUNDED_LIFE`] lives until off-screen.
    pub life_ticks: i32,
}

impl Motion {
    pub fn new(origin: DVec2, velocity: DVec2, trajectory: Trajectory) -> Self {
        Self {
            velocity,
            origin,
            trajectory: Some(trajectory),
            life_ticks: UNBOUNDED_LIFE,
        }
    }

    pub fn with_life(mut self, ticks: i32) -> Self {
        self.life_ticks = ticks;
        self
    }

    /// Count down the lifetime. Returns `true` on the tick it runs out.
    pub fn tick_life(&mut self) -> bool {
        if self.life_ticks > 0 {
            self.life_ticks -= 1;
            return self.life_ticks <= 0;
        }
        false
    }
}

/// A projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub kind: BulletKind,
    pub motion: Motion,
    pub damage: i32,
    /// Piercing bullets survive their hits.
    pub piercing: bool,
    from_player: bool,
}

impl Bullet {
    pub fn new(kind: BulletKind, from_player: bool, motion: Motion, damage: i32) -> Self {
        Self {
            kind,
            motion,
            damage,
            piercing: false,
            from_player,
        }
    }

    pub fn piercing(mut self) -> Self {
        self.piercing = true;
        self
    }

    /// Owning side; fixed at construction.
    pub fn from_player(&self) -> bool {
        self.from_player
    }
}

/// A pickup. Moves like a bullet but only ever touches the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub motion: Motion,
}

/// The closed set of entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityKind {
    Craft(Craft),
    Bullet(Bullet),
    Item(Item),
}

/// Components for an entity that has not been given an id yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub body: Body,
    pub kind: EntityKind,
}

impl Spawn {
    pub fn new(body: Body, kind: EntityKind) -> Self {
        Self { body, kind }
    }

    pub fn is_enemy_bullet(&self) -> bool {
        matches!(&self.kind, EntityKind::Bullet(b) if !b.from_player())
    }
}

/// A simulated object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn collision_bounds(&self) -> Rect {
        self.body.collision_bounds()
    }

    pub fn craft(&self) -> Option<&Craft> {
        match &self.kind {
            EntityKind::Craft(c) => Some(c),
            _ => None,
        }
    }

    pub fn craft_mut(&mut self) -> Option<&mut Craft> {
        match &mut self.kind {
            EntityKind::Craft(c) => Some(c),
            _ => None,
        }
    }

    pub fn bullet(&self) -> Option<&Bullet> {
        match &self.kind {
            EntityKind::Bullet(b) => Some(b),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.kind {
            EntityKind::Item(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.craft().is_some_and(Craft::is_player)
    }

    pub fn is_boss(&self) -> bool {
        self.craft().is_some_and(Craft::is_boss)
    }

    pub fn enemy_class(&self) -> Option<EnemyClass> {
        self.craft().and_then(Craft::enemy_class)
    }

    pub fn is_enemy_craft(&self) -> bool {
        self.enemy_class().is_some()
    }

    /// Bullets and items: both are projectile-like and never touch each other.
    pub fn is_projectile(&self) -> bool {
        matches!(self.kind, EntityKind::Bullet(_) | EntityKind::Item(_))
    }

    pub fn is_enemy_bullet(&self) -> bool {
        self.bullet().is_some_and(|b| !b.from_player())
    }

    pub fn render_kind(&self) -> RenderKind {
        match &self.kind {
            EntityKind::Craft(c) => match c.enemy_class() {
                Some(class) => RenderKind::Enemy(class),
                None => RenderKind::Player,
            },
            EntityKind::Bullet(b) => RenderKind::Bullet(b.kind),
            EntityKind::Item(i) => RenderKind::Item(i.kind),
        }
    }
}

/// Receives pickup effects.
pub trait ItemEffects {
    /// Restore up to `amount` hit points without exceeding the cap.
    fn heal(&mut self, amount: i32);
    /// Open an invulnerability window of `ticks`.
    fn grant_shield(&mut self, ticks: u32);
    /// Open a bonus-damage window.
    fn grant_power(&mut self, ticks: u32, bonus_damage: i32);
}

/// Mutable view over the player's hp and pickup windows.
pub struct PlayerHandle<'a> {
    hp: &'a mut i32,
    state: &'a mut PlayerState,
}

impl ItemEffects for PlayerHandle<'_> {
    fn heal(&mut self, amount: i32) {
        if *self.hp <= 0 {
            return;
        }
        *self.hp = self.hp.saturating_add(amount.max(0)).min(self.state.max_hp);
    }

    fn grant_shield(&mut self, ticks: u32) {
        self.state.shield_ticks = self.state.shield_ticks.max(ticks);
    }

    fn grant_power(&mut self, ticks: u32, bonus_damage: i32) {
        self.state.power_ticks = self.state.power_ticks.max(ticks);
        self.state.bonus_damage = self.state.bonus_damage.max(bonus_damage);
    }
}

/// World-level reactions to the Clear pickup.
pub trait ClearScreen {
    /// Kill every live enemy bullet, piercing ones included.
    fn clear_enemy_bullets_now(&mut self);
    /// Kill every live rank-and-file enemy; elites and the boss stay.
    fn clear_normal_enemies(&mut self);
    /// Discard newly spawned enemy bullets for the next `ticks` ticks.
    fn start_clear_window(&mut self, ticks: u32);
}
