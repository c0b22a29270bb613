//! Core entity types shared by all game variants
//!
//! Every moving thing in every variant is the same tagged record: an
//! axis-aligned box with a velocity and a kind. Variant behavior dispatches
//! on the kind rather than through parallel per-variant types.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// What an entity is, gameplay-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The controlled entity.
    Player,
    /// Spawned hazard: opposing car, gate pipe, laser, enemy ship.
    Obstacle,
    /// In-flight shot. Hostile shots kill the player; friendly ones kill
    /// obstacles.
    Projectile { hostile: bool },
    /// Collectible (grid food).
    Pickup,
}

/// Grid heading for the snake variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell displacement for this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// True if `other` is the exact opposite heading.
    pub fn is_reverse(self, other: Direction) -> bool {
        self.delta() + other.delta() == IVec2::ZERO
    }
}

/// A simulated entity.
///
/// For spawned entities `vel` holds a unit scroll direction; the motion
/// system scales it by the per-kind speed each tick. For a gravity-driven
/// player it holds the real velocity in pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub kind: EntityKind,
    /// Cosmetic sub-kind (which of N sprites). No gameplay weight.
    #[serde(default)]
    pub sprite: u8,
    /// Already credited for scrolling past the player (gate scoring).
    #[serde(default)]
    pub passed: bool,
}

impl Entity {
    pub fn player(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            kind: EntityKind::Player,
            sprite: 0,
            passed: false,
        }
    }

    pub fn obstacle(pos: Vec2, size: Vec2, dir: Vec2, sprite: u8) -> Self {
        Self {
            pos,
            size,
            vel: dir,
            kind: EntityKind::Obstacle,
            sprite,
            passed: false,
        }
    }

    pub fn projectile(pos: Vec2, size: Vec2, dir: Vec2, hostile: bool) -> Self {
        Self {
            pos,
            size,
            vel: dir,
            kind: EntityKind::Projectile { hostile },
            sprite: 0,
            passed: false,
        }
    }

    pub fn pickup(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            kind: EntityKind::Pickup,
            sprite: 0,
            passed: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
