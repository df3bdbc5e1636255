//! Movement domain: per-axis skin-width sweep that clamps a displacement
//! against the level.
//!
//! Each axis casts a fan of parallel rays from the leading edge of the inset
//! box. Every hit narrows both the displacement and the query length of the
//! rays that follow, so the nearest obstruction always wins. Horizontal is
//! swept before vertical, and both sweeps start from the pre-move corners.

use bevy::prelude::*;

use crate::movement::raycast::{RayCaster, RayFan, RaycastOrigins};

/// Contacts found by a single move. Built fresh every tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CollisionState {
    pub grounded: bool,
    pub ceiling: bool,
    pub horizontal: Option<Entity>,
    pub vertical: Option<Entity>,
}

impl CollisionState {
    pub fn pushing(&self) -> bool {
        self.horizontal.is_some()
    }
}

/// Displacement after clamping, with the contacts that clamped it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub displacement: Vec2,
    pub collision: CollisionState,
}

pub fn resolve<C: RayCaster>(
    caster: &mut C,
    origins: &RaycastOrigins,
    fan: &RayFan,
    skin_width: f32,
    displacement: Vec2,
) -> Resolution {
    let mut resolved = displacement;
    let mut collision = CollisionState::default();

    if displacement.x != 0.0 {
        let (start, direction) = if displacement.x < 0.0 {
            (origins.bottom_left, Dir2::NEG_X)
        } else {
            (origins.bottom_right, Dir2::X)
        };
        let sweep = Sweep {
            start,
            step: Vec2::Y * fan.horizontal_spacing,
            count: fan.horizontal_count,
            direction,
            skin_width,
        };
        let (amount, hit) = sweep.run(caster, displacement.x);
        resolved.x = amount;
        collision.horizontal = hit;
    }

    if displacement.y != 0.0 {
        let downward = displacement.y < 0.0;
        let (start, direction) = if downward {
            (origins.bottom_left, Dir2::NEG_Y)
        } else {
            (origins.top_left, Dir2::Y)
        };
        let sweep = Sweep {
            start,
            step: Vec2::X * fan.vertical_spacing,
            count: fan.vertical_count,
            direction,
            skin_width,
        };
        let (amount, hit) = sweep.run(caster, displacement.y);
        resolved.y = amount;
        collision.vertical = hit;
        if hit.is_some() {
            collision.grounded = downward;
            collision.ceiling = !downward;
        }
    }

    Resolution {
        displacement: resolved,
        collision,
    }
}

/// One axis worth of parallel rays.
struct Sweep {
    start: Vec2,
    step: Vec2,
    count: usize,
    direction: Dir2,
    skin_width: f32,
}

impl Sweep {
    /// Clamp the signed `amount` along this sweep's axis.
    fn run<C: RayCaster>(&self, caster: &mut C, amount: f32) -> (f32, Option<Entity>) {
        let sign = amount.signum();
        let mut resolved = amount;
        let mut reach = amount.abs() + self.skin_width;
        let mut obstruction = None;

        for i in 0..self.count {
            let origin = self.start + self.step * i as f32;
            if let Some(hit) = caster.cast_ray(origin, self.direction, reach) {
                resolved = (hit.distance - self.skin_width).max(0.0) * sign;
                reach = hit.distance;
                obstruction = Some(hit.obstruction);
            }
        }

        (resolved, obstruction)
    }
}
