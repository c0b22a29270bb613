//! Axis-aligned collision detection and per-tick resolution
//!
//! All five variants share one intersection predicate. Resolution is split
//! into a lethal pass (player vs hazards) and a scoring pass (friendly shots
//! vs obstacles); the session runs the lethal pass first so a simultaneous
//! kill-and-death can never award points after the run has ended.

use super::entity::{Entity, EntityKind, Rect};

/// Open-interval AABB intersection: boxes that merely touch do not collide.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// True if the player overlaps anything lethal.
///
/// Hostile projectiles always kill. Obstacles kill only when
/// `obstacles_lethal` is set; the shooter's enemy ships pass through the
/// player and only their shots count.
pub fn player_hit(player: &Rect, entities: &[Entity], obstacles_lethal: bool) -> bool {
    entities.iter().any(|e| {
        let lethal = match e.kind {
            EntityKind::Obstacle => obstacles_lethal,
            EntityKind::Projectile { hostile } => hostile,
            _ => false,
        };
        lethal && intersects(player, &e.bounds())
    })
}

/// Pair friendly projectiles with obstacles and remove both.
///
/// Each projectile claims at most the first intersecting obstacle in
/// iteration order; no multi-kill per shot. Removals are marked during
/// iteration and applied afterwards. Returns the score gained.
pub fn resolve_shots(entities: &mut Vec<Entity>, kill_reward: u32) -> u32 {
    let mut dead = vec![false; entities.len()];
    let mut gained = 0;

    for i in 0..entities.len() {
        if entities[i].kind != (EntityKind::Projectile { hostile: false }) {
            continue;
        }
        let shot = entities[i].bounds();
        for j in 0..entities.len() {
            if dead[j] || entities[j].kind != EntityKind::Obstacle {
                continue;
            }
            if intersects(&shot, &entities[j].bounds()) {
                dead[i] = true;
                dead[j] = true;
                gained += kill_reward;
                break;
            }
        }
    }

    let mut keep = dead.iter().map(|d| !d);
    entities.retain(|_| keep.next().unwrap_or(true));
    gained
}
