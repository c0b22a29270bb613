//! Difficulty escalation
//!
//! Two documented rules: a threshold step that raises hazard speed every N
//! ticks, and an interval step that shortens the tick interval on each grid
//! pickup. Both are monotone and reset only on restart.

use serde::{Deserialize, Serialize};

/// How a variant escalates over a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DifficultyRule {
    /// No escalation.
    None,
    /// Every `every_ticks` ticks, add `step` to obstacle and hostile
    /// projectile speed.
    ThresholdStep { every_ticks: u64, step: f32 },
    /// Each pickup shortens the tick interval by `decrement_ms`, floored at
    /// `floor_ms`.
    IntervalStep { decrement_ms: u64, floor_ms: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyController {
    rule: DifficultyRule,
    pickups: u32,
}

impl DifficultyController {
    pub fn new(rule: DifficultyRule) -> Self {
        Self { rule, pickups: 0 }
    }

    /// Additive speed bonus for hazards. Pure function of elapsed ticks.
    pub fn speed_bonus(&self, ticks: u64) -> f32 {
        match self.rule {
            DifficultyRule::ThresholdStep { every_ticks, step } => {
                (ticks / every_ticks) as f32 * step
            }
            _ => 0.0,
        }
    }

    /// Current tick interval in milliseconds, given the configured base.
    pub fn interval_ms(&self, base_ms: u64) -> u64 {
        match self.rule {
            DifficultyRule::IntervalStep {
                decrement_ms,
                floor_ms,
            } => base_ms
                .saturating_sub(decrement_ms * self.pickups as u64)
                .max(floor_ms),
            _ => base_ms,
        }
    }

    /// Record a grid pickup (speeds the session up under `IntervalStep`).
    pub fn note_pickup(&mut self) {
        self.pickups += 1;
    }

    pub fn reset(&mut self) {
        self.pickups = 0;
    }
}
