//! Spawn planning
//!
//! Decides whether and where a new hazard enters the arena each tick. Three
//! shapes: a probabilistic per-tick roll with a population cap and optional
//! non-overlap clearance (dodger, runner, shooter), a fixed-interval matched
//! gate pair (flier), and uniform relocation of the single grid pickup.
//!
//! Placement under a clearance rule resamples rejected positions, but only
//! up to `SPAWN_RETRY_LIMIT` times; a degenerate configuration (clearance
//! wider than the arena) skips the tick instead of hanging.

use glam::{IVec2, Vec2};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::{EnemyFire, GameConfig, Placement, SpawnRule};

use super::entity::{Entity, EntityKind};

/// Placement attempts per tick before giving up.
pub const SPAWN_RETRY_LIMIT: u32 = 32;

/// Run the spawn rule for this tick. Returns zero, one, or (for the gate
/// rule) a matched pair of entities.
pub fn plan(config: &GameConfig, ticks: u64, entities: &[Entity], rng: &mut Pcg32) -> Vec<Entity> {
    match config.spawn {
        SpawnRule::None => Vec::new(),
        SpawnRule::Chance {
            percent,
            max_active,
            placement,
            clearance,
        } => {
            let active = entities
                .iter()
                .filter(|e| e.kind == EntityKind::Obstacle)
                .count();
            if active >= max_active {
                return Vec::new();
            }
            if rng.random_range(0..100) >= percent {
                return Vec::new();
            }
            let sprite = rng.random_range(0..config.sprite_count.max(1));
            match place(config, placement, clearance, entities, rng) {
                Some(pos) => vec![Entity::obstacle(
                    pos,
                    config.obstacle_size,
                    config.obstacle_dir,
                    sprite,
                )],
                None => {
                    log::debug!(
                        "no clear spawn position after {SPAWN_RETRY_LIMIT} tries, skipping tick"
                    );
                    Vec::new()
                }
            }
        }
        SpawnRule::Interval { every_ticks, gap } => {
            if ticks == 0 || !ticks.is_multiple_of(every_ticks) {
                return Vec::new();
            }
            Vec::from(gate_pair(config, gap, rng))
        }
    }
}

/// Pick an entry position, resampling while it violates the clearance rule.
fn place(
    config: &GameConfig,
    placement: Placement,
    clearance: Option<Vec2>,
    entities: &[Entity],
    rng: &mut Pcg32,
) -> Option<Vec2> {
    for _ in 0..SPAWN_RETRY_LIMIT {
        let pos = match placement {
            Placement::Top { y } => Vec2::new(
                rng.random_range(0.0..config.arena.x - config.obstacle_size.x),
                y,
            ),
            Placement::Right => Vec2::new(
                config.arena.x,
                rng.random_range(0.0..config.arena.y - config.obstacle_size.y),
            ),
        };
        let Some(c) = clearance else {
            return Some(pos);
        };
        let clear = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Obstacle)
            .all(|e| (e.pos.x - pos.x).abs() >= c.x || (e.pos.y - pos.y).abs() >= c.y);
        if clear {
            return Some(pos);
        }
    }
    None
}

/// Matched top+bottom gate pair entering at the right edge.
///
/// The bottom gate is pre-marked `passed` so the pair awards exactly one
/// point when the player clears it.
fn gate_pair(config: &GameConfig, gap: f32, rng: &mut Pcg32) -> [Entity; 2] {
    let span = config.obstacle_size.y;
    let top_y = -span / 4.0 - rng.random::<f32>() * (span / 2.0);

    let top = Entity::obstacle(
        Vec2::new(config.arena.x, top_y),
        config.obstacle_size,
        config.obstacle_dir,
        0,
    );
    let mut bottom = Entity::obstacle(
        Vec2::new(config.arena.x, top_y + span + gap),
        config.obstacle_size,
        config.obstacle_dir,
        1,
    );
    bottom.passed = true;
    [top, bottom]
}

/// Roll each obstacle's chance to fire a hostile shot from its bottom
/// center.
pub fn enemy_fire(rule: &EnemyFire, entities: &[Entity], rng: &mut Pcg32) -> Vec<Entity> {
    let mut shots = Vec::new();
    for e in entities.iter().filter(|e| e.kind == EntityKind::Obstacle) {
        if rng.random_range(0..100) < rule.percent {
            let pos = Vec2::new(
                e.pos.x + e.size.x / 2.0 - rule.size.x / 2.0,
                e.pos.y + e.size.y,
            );
            shots.push(Entity::projectile(pos, rule.size, rule.dir, true));
        }
    }
    shots
}

/// Relocate the grid pickup to a uniformly random cell not covered by the
/// body. Falls back to an exhaustive scan on a dense board; `None` when no
/// free cell remains.
pub fn relocate_food(cols: i32, rows: i32, body: &[IVec2], rng: &mut Pcg32) -> Option<IVec2> {
    for _ in 0..SPAWN_RETRY_LIMIT {
        let cell = IVec2::new(rng.random_range(0..cols), rng.random_range(0..rows));
        if !body.contains(&cell) {
            return Some(cell);
        }
    }
    let free: Vec<IVec2> = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| IVec2::new(x, y)))
        .filter(|c| !body.contains(c))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::motion;
    use rand::SeedableRng;

    #[test]
    fn test_cap_refuses_spawn() {
        let config = GameConfig::lane_dodge();
        let mut rng = Pcg32::seed_from_u64(1);
        let full: Vec<Entity> = (0..4)
            .map(|i| {
                Entity::obstacle(
                    Vec2::new(i as f32 * 90.0, 300.0),
                    config.obstacle_size,
                    config.obstacle_dir,
                    0,
                )
            })
            .collect();
        for t in 0..1000 {
            assert!(plan(&config, t, &full, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_clearance_holds_at_spawn_time() {
        let config = GameConfig::lane_dodge();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut entities: Vec<Entity> = Vec::new();
        for t in 0..20_000 {
            for e in &mut entities {
                motion::scroll(e, config.obstacle_speed);
            }
            entities.retain(|e| e.pos.y <= config.arena.y);
            let spawned = plan(&config, t, &entities, &mut rng);
            for s in &spawned {
                for e in &entities {
                    let clear = (e.pos.x - s.pos.x).abs() >= 60.0 || (e.pos.y - s.pos.y).abs() >= 210.0;
                    assert!(clear, "spawn at {:?} too close to {:?}", s.pos, e.pos);
                }
            }
            entities.extend(spawned);
        }
    }

    #[test]
    fn test_degenerate_clearance_skips_tick() {
        let mut config = GameConfig::lane_dodge();
        config.spawn = SpawnRule::Chance {
            percent: 100,
            max_active: 4,
            placement: Placement::Top { y: 0.0 },
            // Wider than the arena: every position is rejected.
            clearance: Some(Vec2::new(1000.0, 1000.0)),
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let existing = vec![Entity::obstacle(
            Vec2::new(100.0, 0.0),
            config.obstacle_size,
            config.obstacle_dir,
            0,
        )];
        for t in 0..200 {
            assert!(plan(&config, t, &existing, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_gate_pair_geometry() {
        let config = GameConfig::gated_flier();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let pair = gate_pair(&config, 160.0, &mut rng);
            let [top, bottom] = pair;
            assert_eq!(top.pos.x, config.arena.x);
            assert_eq!(bottom.pos.x, config.arena.x);
            // Opening between the two gates is the configured gap, modulo
            // f32 rounding of the sampled offset.
            let opening = bottom.pos.y - (top.pos.y + top.size.y);
            assert!((opening - 160.0).abs() <= 1e-3, "opening {opening}");
            // Top gate hangs partly off-screen.
            assert!(top.pos.y <= -128.0 && top.pos.y >= -384.0);
            assert!(!top.passed);
            assert!(bottom.passed);
        }
    }

    #[test]
    fn test_interval_rule_fires_on_schedule() {
        let config = GameConfig::gated_flier();
        let mut rng = Pcg32::seed_from_u64(9);
        assert!(plan(&config, 0, &[], &mut rng).is_empty());
        assert!(plan(&config, 89, &[], &mut rng).is_empty());
        assert_eq!(plan(&config, 90, &[], &mut rng).len(), 2);
        assert_eq!(plan(&config, 180, &[], &mut rng).len(), 2);
    }

    #[test]
    fn test_food_never_lands_on_body() {
        let mut rng = Pcg32::seed_from_u64(11);
        let body: Vec<IVec2> = (0..15).map(|x| IVec2::new(x, 5)).collect();
        for _ in 0..500 {
            let food = relocate_food(30, 20, &body, &mut rng).unwrap();
            assert!(!body.contains(&food));
            assert!(food.x >= 0 && food.x < 30 && food.y >= 0 && food.y < 20);
        }
    }

    #[test]
    fn test_food_on_dense_board_uses_remaining_cell() {
        let mut rng = Pcg32::seed_from_u64(13);
        // 2x2 board with one free cell.
        let body = vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(0, 1)];
        for _ in 0..50 {
            assert_eq!(relocate_food(2, 2, &body, &mut rng), Some(IVec2::new(1, 1)));
        }
    }

    #[test]
    fn test_food_on_full_board_is_none() {
        let mut rng = Pcg32::seed_from_u64(17);
        let body = vec![
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(0, 1),
            IVec2::new(1, 1),
        ];
        assert_eq!(relocate_food(2, 2, &body, &mut rng), None);
    }

    #[test]
    fn test_enemy_fire_spawns_from_bottom_center() {
        let rule = EnemyFire {
            percent: 100,
            size: Vec2::new(5.0, 20.0),
            speed: 5.0,
            dir: Vec2::new(0.0, 1.0),
        };
        let mut rng = Pcg32::seed_from_u64(19);
        let enemies = vec![Entity::obstacle(
            Vec2::new(100.0, 50.0),
            Vec2::new(40.0, 90.0),
            Vec2::new(0.0, 1.0),
            0,
        )];
        let shots = enemy_fire(&rule, &enemies, &mut rng);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].pos, Vec2::new(117.5, 140.0));
        assert_eq!(shots[0].kind, EntityKind::Projectile { hostile: true });
    }
}
