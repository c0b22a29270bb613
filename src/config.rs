//! Variant configuration
//!
//! One immutable `GameConfig` per variant expresses the whole kernel:
//! arena, tick rate, motion policy, spawn rule, rewards, and difficulty.
//! Configs are plain serde data so balance tweaks can be loaded from JSON
//! instead of recompiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::difficulty::DifficultyRule;
use crate::sim::entity::Direction;

/// The five shipped game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    LaneDodge,
    GatedFlier,
    SideRunner,
    GridSnake,
    Shooter,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::LaneDodge => "lane-dodge",
            Variant::GatedFlier => "gated-flier",
            Variant::SideRunner => "side-runner",
            Variant::GridSnake => "grid-snake",
            Variant::Shooter => "shooter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lane-dodge" | "car" => Some(Variant::LaneDodge),
            "gated-flier" | "flier" => Some(Variant::GatedFlier),
            "side-runner" | "runner" => Some(Variant::SideRunner),
            "grid-snake" | "snake" => Some(Variant::GridSnake),
            "shooter" => Some(Variant::Shooter),
            _ => None,
        }
    }

    /// High-score record slug, one file per variant.
    pub fn slug(&self) -> &'static str {
        match self {
            Variant::LaneDodge => "lane_dodge",
            Variant::GatedFlier => "gated_flier",
            Variant::SideRunner => "side_runner",
            Variant::GridSnake => "grid_snake",
            Variant::Shooter => "shooter",
        }
    }

    pub fn config(&self) -> GameConfig {
        match self {
            Variant::LaneDodge => GameConfig::lane_dodge(),
            Variant::GatedFlier => GameConfig::gated_flier(),
            Variant::SideRunner => GameConfig::side_runner(),
            Variant::GridSnake => GameConfig::grid_snake(),
            Variant::Shooter => GameConfig::shooter(),
        }
    }
}

/// How the controlled entity moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerMotion {
    /// Discrete step per movement intent, clamped to `[min, max]`.
    Step { step: f32, min: Vec2, max: Vec2 },
    /// Constant downward gravity with an instantaneous upward impulse on
    /// `Jump`. Velocity zeroing on clamp is per-variant; no preset uses it.
    Gravity {
        gravity: f32,
        impulse: f32,
        floor_lethal: bool,
        zero_vel_on_floor: bool,
        zero_vel_on_ceiling: bool,
    },
    /// One grid cell per tick along the accepted heading.
    Grid {
        cols: i32,
        rows: i32,
        cell: f32,
        start: Direction,
    },
}

/// Where a probabilistic spawn enters the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Uniform x along the top edge, entering at `y`.
    Top { y: f32 },
    /// Right edge, uniform y.
    Right,
}

/// When and where new hazards appear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnRule {
    None,
    /// Uniform roll in [0,100) against `percent` each tick, refused at
    /// `max_active`. `clearance` is the minimum |dx|/|dy| to every existing
    /// obstacle; violating positions are resampled (bounded).
    Chance {
        percent: u32,
        max_active: usize,
        placement: Placement,
        clearance: Option<Vec2>,
    },
    /// A matched top+bottom gate pair every `every_ticks` ticks with a
    /// vertical opening of `gap`.
    Interval { every_ticks: u64, gap: f32 },
}

/// Random lateral sidestep applied to obstacles (shooter enemies).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    pub percent: u32,
    pub step: f32,
}

/// Player-fired projectile parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotConfig {
    pub size: Vec2,
    pub speed: f32,
    pub dir: Vec2,
}

/// Per-obstacle chance to fire a hostile projectile each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyFire {
    pub percent: u32,
    pub size: Vec2,
    pub speed: f32,
    pub dir: Vec2,
}

/// Score awards. Unused entries stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rewards {
    /// Per tick survived (runner).
    pub survival: u32,
    /// Per obstacle scrolled off-screen (dodger).
    pub cull: u32,
    /// Per gate pair cleared (flier).
    pub pass: u32,
    /// Per obstacle destroyed by a friendly shot (shooter).
    pub kill: u32,
    /// Per grid pickup eaten (snake).
    pub pickup: u32,
}

/// Immutable per-variant configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub variant: Variant,
    /// Arena size in pixels (grid variant: cols*cell x rows*cell).
    pub arena: Vec2,
    /// Base tick interval in milliseconds.
    pub tick_ms: u64,
    pub player_size: Vec2,
    pub player_start: Vec2,
    pub player_motion: PlayerMotion,
    pub obstacle_size: Vec2,
    /// Base scroll speed in pixels per tick.
    pub obstacle_speed: f32,
    /// Unit scroll direction for spawned obstacles.
    pub obstacle_dir: Vec2,
    /// Whether touching an obstacle kills the player. The shooter's enemy
    /// ships are pass-through; only their shots kill.
    pub obstacles_lethal: bool,
    /// Number of cosmetic sprite sub-kinds to pick from.
    pub sprite_count: u8,
    pub spawn: SpawnRule,
    pub jitter: Option<Jitter>,
    pub player_shot: Option<ShotConfig>,
    pub enemy_fire: Option<EnemyFire>,
    pub rewards: Rewards,
    pub difficulty: DifficultyRule,
}

impl GameConfig {
    /// Top-down lane dodger: 400x800 road, fixed-speed oncoming cars.
    pub fn lane_dodge() -> Self {
        Self {
            variant: Variant::LaneDodge,
            arena: Vec2::new(400.0, 800.0),
            tick_ms: 20,
            player_size: Vec2::new(40.0, 90.0),
            player_start: Vec2::new(200.0, 700.0),
            player_motion: PlayerMotion::Step {
                step: 20.0,
                // Forward travel capped at the upper third of the road.
                min: Vec2::new(0.0, 200.0),
                max: Vec2::new(360.0, 710.0),
            },
            obstacle_size: Vec2::new(40.0, 90.0),
            obstacle_speed: 5.0,
            obstacle_dir: Vec2::new(0.0, 1.0),
            obstacles_lethal: true,
            sprite_count: 5,
            spawn: SpawnRule::Chance {
                percent: 4,
                max_active: 4,
                placement: Placement::Top { y: 0.0 },
                clearance: Some(Vec2::new(60.0, 210.0)),
            },
            jitter: None,
            player_shot: None,
            enemy_fire: None,
            rewards: Rewards {
                cull: 10,
                ..Rewards::default()
            },
            difficulty: DifficultyRule::None,
        }
    }

    /// Vertical flier through gated pipe pairs.
    pub fn gated_flier() -> Self {
        Self {
            variant: Variant::GatedFlier,
            arena: Vec2::new(360.0, 640.0),
            tick_ms: 16,
            player_size: Vec2::new(34.0, 24.0),
            player_start: Vec2::new(45.0, 320.0),
            player_motion: PlayerMotion::Gravity {
                gravity: 1.0,
                impulse: 10.0,
                floor_lethal: true,
                zero_vel_on_floor: false,
                zero_vel_on_ceiling: false,
            },
            obstacle_size: Vec2::new(64.0, 512.0),
            obstacle_speed: 4.0,
            obstacle_dir: Vec2::new(-1.0, 0.0),
            obstacles_lethal: true,
            sprite_count: 2,
            spawn: SpawnRule::Interval {
                every_ticks: 90,
                gap: 160.0,
            },
            jitter: None,
            player_shot: None,
            enemy_fire: None,
            rewards: Rewards {
                pass: 1,
                ..Rewards::default()
            },
            difficulty: DifficultyRule::None,
        }
    }

    /// Side-scrolling runner dodging lasers; scoring is survival time.
    pub fn side_runner() -> Self {
        Self {
            variant: Variant::SideRunner,
            arena: Vec2::new(800.0, 500.0),
            tick_ms: 30,
            player_size: Vec2::new(80.0, 60.0),
            player_start: Vec2::new(100.0, 250.0),
            player_motion: PlayerMotion::Gravity {
                gravity: 1.0,
                impulse: 10.0,
                floor_lethal: false,
                zero_vel_on_floor: false,
                zero_vel_on_ceiling: false,
            },
            obstacle_size: Vec2::new(80.0, 60.0),
            obstacle_speed: 5.0,
            obstacle_dir: Vec2::new(-1.0, 0.0),
            obstacles_lethal: true,
            sprite_count: 3,
            spawn: SpawnRule::Chance {
                percent: 3,
                max_active: 4,
                placement: Placement::Right,
                clearance: None,
            },
            jitter: None,
            player_shot: None,
            enemy_fire: None,
            rewards: Rewards {
                survival: 1,
                ..Rewards::default()
            },
            // One speed step roughly every ten seconds at 30 ms ticks.
            difficulty: DifficultyRule::ThresholdStep {
                every_ticks: 333,
                step: 1.0,
            },
        }
    }

    /// Grid snake on a 30x20 board; the tick interval itself shortens as
    /// the score grows.
    pub fn grid_snake() -> Self {
        Self {
            variant: Variant::GridSnake,
            arena: Vec2::new(1200.0, 800.0),
            tick_ms: 200,
            player_size: Vec2::new(40.0, 40.0),
            player_start: Vec2::new(200.0, 200.0),
            player_motion: PlayerMotion::Grid {
                cols: 30,
                rows: 20,
                cell: 40.0,
                start: Direction::Right,
            },
            obstacle_size: Vec2::ZERO,
            obstacle_speed: 0.0,
            obstacle_dir: Vec2::ZERO,
            obstacles_lethal: false,
            sprite_count: 1,
            spawn: SpawnRule::None,
            jitter: None,
            player_shot: None,
            enemy_fire: None,
            rewards: Rewards {
                pickup: 1,
                ..Rewards::default()
            },
            difficulty: DifficultyRule::IntervalStep {
                decrement_ms: 5,
                floor_ms: 50,
            },
        }
    }

    /// Vertical shooter: descending enemies that jitter sideways and fire
    /// back. Enemy contact is harmless; only their shots kill.
    pub fn shooter() -> Self {
        Self {
            variant: Variant::Shooter,
            arena: Vec2::new(400.0, 800.0),
            tick_ms: 20,
            player_size: Vec2::new(40.0, 90.0),
            player_start: Vec2::new(200.0, 700.0),
            // The rocket slides on a horizontal rail; no vertical travel.
            player_motion: PlayerMotion::Step {
                step: 10.0,
                min: Vec2::new(0.0, 700.0),
                max: Vec2::new(360.0, 700.0),
            },
            obstacle_size: Vec2::new(40.0, 90.0),
            obstacle_speed: 5.0,
            obstacle_dir: Vec2::new(0.0, 1.0),
            obstacles_lethal: false,
            sprite_count: 3,
            spawn: SpawnRule::Chance {
                percent: 5,
                max_active: 4,
                // Enemies enter fully off-screen above the arena.
                placement: Placement::Top { y: -90.0 },
                clearance: None,
            },
            jitter: Some(Jitter {
                percent: 10,
                step: 10.0,
            }),
            player_shot: Some(ShotConfig {
                size: Vec2::new(5.0, 20.0),
                speed: 10.0,
                dir: Vec2::new(0.0, -1.0),
            }),
            enemy_fire: Some(EnemyFire {
                percent: 2,
                size: Vec2::new(5.0, 20.0),
                speed: 5.0,
                dir: Vec2::new(0.0, 1.0),
            }),
            rewards: Rewards {
                kill: 10,
                ..Rewards::default()
            },
            difficulty: DifficultyRule::ThresholdStep {
                every_ticks: 300,
                step: 1.0,
            },
        }
    }

    /// Parse a tuning file produced by `to_json`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
