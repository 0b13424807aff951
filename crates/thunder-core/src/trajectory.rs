//! Pluggable bullet motion rules.
//!
//! A trajectory is chosen when a bullet is built and applied once per tick.
//! Every variant is a pure step function from one kinematic state to the next;
//! the only outside input is an optional target position for homing shots.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CURVE_GRAVITY, CURVE_MAX_SPEED, CURVE_MIN_DOWN_VY};
use crate::types::Playfield;

/// Below this magnitude a vector is treated as zero.
const EPSILON: f64 = 1e-6;

/// Supplies the live position a homing shot steers toward.
pub trait TargetProvider {
    /// Current target position, or `None` when there is nothing to chase.
    fn target_position(&self) -> Option<DVec2>;
}

impl TargetProvider for Option<DVec2> {
    fn target_position(&self) -> Option<DVec2> {
        *self
    }
}

/// A provider that never reports a target.
pub struct NoTarget;

impl TargetProvider for NoTarget {
    fn target_position(&self) -> Option<DVec2> {
        None
    }
}

/// Position and per-tick velocity of a moving body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Kinematics {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }
}

/// Everything a trajectory may read besides the bullet's own kinematics.
pub struct StepContext<'a> {
    /// Size of the moving body (bounce reflects on its far edges).
    pub size: DVec2,
    pub field: &'a Playfield,
    pub target: &'a dyn TargetProvider,
}

/// Parameters of the curved trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Curvature strength: perpendicular acceleration per unit velocity.
    pub factor: f64,
    /// Constant downward bias added every tick.
    pub gravity: f64,
    /// Renormalise speed after rotating.
    pub keep_speed: bool,
    /// Minimum downward velocity component.
    pub min_down_vy: f64,
    /// Speed clamp; zero disables.
    pub max_speed: f64,
}

impl CurveParams {
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            gravity: CURVE_GRAVITY,
            keep_speed: true,
            min_down_vy: CURVE_MIN_DOWN_VY,
            max_speed: CURVE_MAX_SPEED,
        }
    }
}

/// The motion rule assigned to a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Trajectory {
    /// Constant velocity.
    Straight,
    /// Velocity rotated a little every tick with an optional downward pull.
    Curved(CurveParams),
    /// Heading lerps toward the target by `turn_strength` each tick.
    Homing { turn_strength: f64 },
    /// Reflects off the playfield edges.
    Bounce,
}

impl Trajectory {
    pub fn curved(factor: f64) -> Self {
        Trajectory::Curved(CurveParams::new(factor))
    }

    /// Homing with the turn strength clamped into `[0, 1]`.
    pub fn homing(turn_strength: f64) -> Self {
        Trajectory::Homing {
            turn_strength: turn_strength.clamp(0.0, 1.0),
        }
    }

    /// Compute one motion step.
    pub fn apply(&self, state: Kinematics, ctx: &StepContext<'_>) -> Kinematics {
        match *self {
            Trajectory::Straight => straight(state),
            Trajectory::Curved(params) => curved(state, &params),
            Trajectory::Homing { turn_strength } => {
                homing(state, turn_strength, ctx.target.target_position())
            }
            Trajectory::Bounce => bounce(state, ctx.size, ctx.field),
        }
    }
}

/// Step with an optional trajectory; a bullet without one moves straight.
pub fn step(trajectory: Option<&Trajectory>, state: Kinematics, ctx: &StepContext<'_>) -> Kinematics {
    match trajectory {
        Some(t) => t.apply(state, ctx),
        None => straight(state),
    }
}

fn straight(state: Kinematics) -> Kinematics {
    Kinematics::new(state.pos + state.vel, state.vel)
}

fn curved(state: Kinematics, p: &CurveParams) -> Kinematics {
    let v = state.vel;
    // Perpendicular acceleration rotates the heading.
    let curve = DVec2::new(-v.y * p.factor, v.x * p.factor);
    let mut next = v + curve + DVec2::new(0.0, p.gravity);

    if p.keep_speed {
        let old_speed = v.length();
        let new_speed = next.length();
        if old_speed > EPSILON && new_speed > EPSILON {
            next *= old_speed / new_speed;
        }
    }

    let min_down = p.min_down_vy.max(0.0);
    if min_down > 0.0 && next.y < min_down {
        next.y = min_down;
    }

    if p.max_speed > 0.0 {
        let s = next.length();
        if s > p.max_speed && s > EPSILON {
            next *= p.max_speed / s;
        }
    }

    Kinematics::new(state.pos + next, next)
}

fn homing(state: Kinematics, turn_strength: f64, target: Option<DVec2>) -> Kinematics {
    let Some(target) = target else {
        return straight(state);
    };

    let to_target = target - state.pos;
    let dist = to_target.length();
    if dist < EPSILON {
        return straight(state);
    }
    let desired = to_target / dist;

    let mut speed = state.vel.length();
    if speed < EPSILON {
        speed = 1.0;
    }
    let heading = state.vel / speed;

    let blended = heading + (desired - heading) * turn_strength;
    let len = blended.length();
    let dir = if len < EPSILON { heading } else { blended / len };

    let vel = dir * speed;
    Kinematics::new(state.pos + vel, vel)
}

fn bounce(state: Kinematics, size: DVec2, field: &Playfield) -> Kinematics {
    let mut next = state.pos + state.vel;
    let mut vel = state.vel;

    // Each axis is handled independently so corners reflect both components.
    if next.x <= 0.0 {
        next.x = 0.0;
        vel.x = -vel.x;
    } else if next.x + size.x >= field.width {
        next.x = field.width - size.x;
        vel.x = -vel.x;
    }

    if next.y <= 0.0 {
        next.y = 0.0;
        vel.y = -vel.y;
    } else if next.y + size.y >= field.height {
        next.y = field.height - size.y;
        vel.y = -vel.y;
    }

    Kinematics::new(next, vel)
}
