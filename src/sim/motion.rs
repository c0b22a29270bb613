//! Per-tick motion integration
//!
//! Three policies cover all five variants: constant-velocity scroll for
//! spawned entities, gravity-plus-impulse for the flier and runner player,
//! and discrete grid steps for the snake. Each entity is moved exactly once
//! per tick by the session pipeline; nothing here touches any state beyond
//! the entity's own fields.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::Jitter;

use super::entity::{Direction, Entity};

/// Constant-velocity scroll: `pos += vel * speed`.
///
/// `vel` is a unit direction; `speed` already includes any difficulty bonus.
#[inline]
pub fn scroll(e: &mut Entity, speed: f32) {
    e.pos += e.vel * speed;
}

/// Random lateral sidestep for shooter enemies.
pub fn jitter(e: &mut Entity, rule: &Jitter, rng: &mut Pcg32) {
    if rng.random_range(0..100) < rule.percent {
        let step = if rng.random::<bool>() { rule.step } else { -rule.step };
        e.pos.x += step;
    }
}

/// Gravity integration for the controlled entity.
///
/// Order matters and is the same for every variant: position moves by the
/// current velocity, then gravity is added to the velocity for next tick.
/// The position is clamped to `[0, floor]`; outward velocity is zeroed on
/// clamp only where the variant asks for it (no preset does).
pub fn fall(
    player: &mut Entity,
    gravity: f32,
    floor: f32,
    zero_vel_on_floor: bool,
    zero_vel_on_ceiling: bool,
) {
    player.pos.y += player.vel.y;
    player.vel.y += gravity;

    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        if zero_vel_on_ceiling && player.vel.y < 0.0 {
            player.vel.y = 0.0;
        }
    } else if player.pos.y > floor {
        player.pos.y = floor;
        if zero_vel_on_floor && player.vel.y > 0.0 {
            player.vel.y = 0.0;
        }
    }
}

/// One-cell grid displacement along the current heading.
#[inline]
pub fn grid_step(cell: IVec2, heading: Direction) -> IVec2 {
    cell + heading.delta()
}
