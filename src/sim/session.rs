//! Game session state machine
//!
//! Owns every live entity and drives the per-tick pipeline: input intents →
//! motion (with off-screen culling) → spawning → collisions → score and
//! best-score bookkeeping. The lethal collision pass runs before any scoring
//! pass, so dying and killing on the same tick never awards points.
//!
//! The session is single-threaded and never blocks; the host drives `tick`
//! from its own timer at `tick_interval()` and draws from `snapshot()`
//! between ticks.

use std::time::Duration;

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, PlayerMotion};
use crate::highscores::HighScoreStore;

use super::collision;
use super::difficulty::DifficultyController;
use super::entity::{Direction, Entity, EntityKind};
use super::motion;
use super::spawn;

/// Discrete, edge-triggered input events from the (external) input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
    Fire,
    Restart,
}

/// Input edges collected for a single tick. Each intent has at most its
/// documented effect once per tick; intents with no meaning for the current
/// variant or phase are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub fire: bool,
    pub restart: bool,
}

impl TickInput {
    pub fn press(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => self.left = true,
            Intent::MoveRight => self.right = true,
            Intent::MoveUp => self.up = true,
            Intent::MoveDown => self.down = true,
            Intent::Jump => self.jump = true,
            Intent::Fire => self.fire = true,
            Intent::Restart => self.restart = true,
        }
    }

    /// Clear one-shot edges after a tick has consumed them.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything that changes over a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub best_score: u32,
    pub running: bool,
    pub ticks: u64,
    pub player: Entity,
    pub entities: Vec<Entity>,
    /// Grid variant body cells, head first. Empty elsewhere.
    #[serde(default)]
    pub body: Vec<IVec2>,
    /// Grid variant heading.
    pub heading: Direction,
    /// Grid variant pickup cell. `None` when the board is full (or the
    /// variant has no pickup).
    #[serde(default)]
    pub food: Option<IVec2>,
}

/// Read-only view handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub score: u32,
    pub best_score: u32,
    pub running: bool,
    pub ticks: u64,
    pub player: &'a Entity,
    pub entities: &'a [Entity],
    pub body: &'a [IVec2],
    pub food: Option<IVec2>,
}

/// One run of one variant: `Playing` until a lethal collision, then frozen
/// until a restart intent.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: Pcg32,
    difficulty: DifficultyController,
    store: Option<HighScoreStore>,
    state: SessionState,
}

impl GameSession {
    /// Create a session in the `Playing` state. The best score is read from
    /// the store once, here; a missing or unreadable record means 0.
    pub fn new(config: GameConfig, seed: u64, store: Option<HighScoreStore>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let best = store
            .as_ref()
            .map(|s| s.load(config.variant))
            .unwrap_or(0);
        let difficulty = DifficultyController::new(config.difficulty);
        let state = Self::initial_state(&config, best, &mut rng);
        Self {
            config,
            rng,
            difficulty,
            store,
            state,
        }
    }

    fn initial_state(config: &GameConfig, best: u32, rng: &mut Pcg32) -> SessionState {
        let mut player = Entity::player(config.player_start, config.player_size);
        let (body, heading, food, entities) = match config.player_motion {
            PlayerMotion::Grid {
                cols,
                rows,
                cell,
                start,
            } => {
                let head = IVec2::new(
                    (config.player_start.x / cell) as i32,
                    (config.player_start.y / cell) as i32,
                );
                player.pos = head.as_vec2() * cell;
                let body = vec![head];
                let food = spawn::relocate_food(cols, rows, &body, rng);
                let entities = Self::food_entity(cell, food);
                (body, start, food, entities)
            }
            _ => (Vec::new(), Direction::Right, None, Vec::new()),
        };
        SessionState {
            score: 0,
            best_score: best,
            running: true,
            ticks: 0,
            player,
            entities,
            body,
            heading,
            food,
        }
    }

    /// The grid pickup mirrored into the entity list for the renderer.
    fn food_entity(cell: f32, food: Option<IVec2>) -> Vec<Entity> {
        match food {
            Some(c) => vec![Entity::pickup(c.as_vec2() * cell, Vec2::splat(cell))],
            None => Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            score: self.state.score,
            best_score: self.state.best_score,
            running: self.state.running,
            ticks: self.state.ticks,
            player: &self.state.player,
            entities: &self.state.entities,
            body: &self.state.body,
            food: self.state.food,
        }
    }

    /// Current interval for the external tick timer. Shrinks over a grid
    /// session as pickups accumulate; constant elsewhere.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.difficulty.interval_ms(self.config.tick_ms))
    }

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self, input: &TickInput) {
        if !self.state.running {
            // Frozen for the renderer; only a restart intent means anything.
            if input.restart {
                self.restart();
            }
            return;
        }
        self.state.ticks += 1;
        if matches!(self.config.player_motion, PlayerMotion::Grid { .. }) {
            self.grid_tick(input);
        } else {
            self.continuous_tick(input);
        }
    }

    /// Reset to the initial state, retaining the best score.
    fn restart(&mut self) {
        log::info!(
            "{}: restart (best {})",
            self.config.variant.as_str(),
            self.state.best_score
        );
        self.difficulty.reset();
        self.state = Self::initial_state(&self.config, self.state.best_score, &mut self.rng);
    }

    fn continuous_tick(&mut self, input: &TickInput) {
        self.apply_input(input);
        self.motion_phase();
        self.spawn_phase();
        self.collision_phase();
        if self.state.running && self.config.rewards.survival > 0 {
            self.record_score(self.config.rewards.survival);
        }
    }

    fn apply_input(&mut self, input: &TickInput) {
        match self.config.player_motion {
            PlayerMotion::Step { step, min, max } => {
                let p = &mut self.state.player;
                if input.left {
                    p.pos.x -= step;
                }
                if input.right {
                    p.pos.x += step;
                }
                if input.up {
                    p.pos.y -= step;
                }
                if input.down {
                    p.pos.y += step;
                }
                p.pos = p.pos.clamp(min, max);
            }
            PlayerMotion::Gravity { impulse, .. } => {
                if input.jump {
                    self.state.player.vel.y = -impulse;
                }
            }
            PlayerMotion::Grid { .. } => {}
        }
        if input.fire {
            if let Some(shot) = self.config.player_shot {
                let p = &self.state.player;
                let pos = Vec2::new(p.pos.x + p.size.x / 2.0 - shot.size.x / 2.0, p.pos.y);
                self.state
                    .entities
                    .push(Entity::projectile(pos, shot.size, shot.dir, false));
            }
        }
    }

    fn motion_phase(&mut self) {
        if let PlayerMotion::Gravity {
            gravity,
            zero_vel_on_floor,
            zero_vel_on_ceiling,
            ..
        } = self.config.player_motion
        {
            let floor = self.config.arena.y - self.state.player.size.y;
            motion::fall(
                &mut self.state.player,
                gravity,
                floor,
                zero_vel_on_floor,
                zero_vel_on_ceiling,
            );
        }

        let bonus = self.difficulty.speed_bonus(self.state.ticks);
        for e in &mut self.state.entities {
            let speed = match e.kind {
                EntityKind::Obstacle => self.config.obstacle_speed + bonus,
                EntityKind::Projectile { hostile: true } => {
                    self.config.enemy_fire.map(|f| f.speed).unwrap_or(0.0) + bonus
                }
                EntityKind::Projectile { hostile: false } => {
                    self.config.player_shot.map(|s| s.speed).unwrap_or(0.0)
                }
                _ => 0.0,
            };
            motion::scroll(e, speed);
        }
        if let Some(rule) = self.config.jitter {
            for e in &mut self.state.entities {
                if e.kind == EntityKind::Obstacle {
                    motion::jitter(e, &rule, &mut self.rng);
                }
            }
        }

        // Gate pass credit: awarded once per obstacle, when it scrolls
        // behind the player.
        let pass = self.config.rewards.pass;
        if pass > 0 {
            let px = self.state.player.pos.x;
            let mut gained = 0;
            for e in &mut self.state.entities {
                if e.kind == EntityKind::Obstacle && !e.passed && px > e.pos.x + e.size.x {
                    e.passed = true;
                    gained += pass;
                }
            }
            if gained > 0 {
                self.record_score(gained);
            }
        }

        self.cull_phase();
    }

    /// Remove entities that scrolled past the far edge of their travel
    /// direction; culled obstacles may award score (dodger).
    fn cull_phase(&mut self) {
        let arena = self.config.arena;
        let mut culled = 0u32;
        self.state.entities.retain(|e| {
            let gone = (e.vel.y > 0.0 && e.pos.y > arena.y)
                || (e.vel.y < 0.0 && e.pos.y + e.size.y < 0.0)
                || (e.vel.x < 0.0 && e.pos.x + e.size.x < 0.0)
                || (e.vel.x > 0.0 && e.pos.x > arena.x);
            if gone && e.kind == EntityKind::Obstacle {
                culled += 1;
            }
            !gone
        });
        if self.config.rewards.cull > 0 && culled > 0 {
            self.record_score(self.config.rewards.cull * culled);
        }
    }

    fn spawn_phase(&mut self) {
        let spawned = spawn::plan(
            &self.config,
            self.state.ticks,
            &self.state.entities,
            &mut self.rng,
        );
        self.state.entities.extend(spawned);
        if let Some(rule) = self.config.enemy_fire {
            let shots = spawn::enemy_fire(&rule, &self.state.entities, &mut self.rng);
            self.state.entities.extend(shots);
        }
    }

    fn collision_phase(&mut self) {
        let player = self.state.player.bounds();

        // Lethal pass first.
        let mut dead =
            collision::player_hit(&player, &self.state.entities, self.config.obstacles_lethal);
        if let PlayerMotion::Gravity {
            floor_lethal: true, ..
        } = self.config.player_motion
        {
            if self.state.player.pos.y + self.state.player.size.y >= self.config.arena.y {
                dead = true;
            }
        }
        if dead {
            self.game_over();
            return;
        }

        if self.config.rewards.kill > 0 {
            let gained =
                collision::resolve_shots(&mut self.state.entities, self.config.rewards.kill);
            if gained > 0 {
                self.record_score(gained);
            }
        }
    }

    fn grid_tick(&mut self, input: &TickInput) {
        let PlayerMotion::Grid {
            cols, rows, cell, ..
        } = self.config.player_motion
        else {
            return;
        };

        // At most one heading change per tick; reversals are rejected so the
        // head can never fold straight back onto its neck.
        let wanted = if input.up {
            Some(Direction::Up)
        } else if input.down {
            Some(Direction::Down)
        } else if input.left {
            Some(Direction::Left)
        } else if input.right {
            Some(Direction::Right)
        } else {
            None
        };
        if let Some(dir) = wanted {
            if !dir.is_reverse(self.state.heading) {
                self.state.heading = dir;
            }
        }

        let head = self.state.body[0];
        let next = motion::grid_step(head, self.state.heading);
        let eating = self.state.food == Some(next);

        self.state.body.insert(0, next);
        if eating {
            self.difficulty.note_pickup();
            let reward = self.config.rewards.pickup;
            self.record_score(reward);
            self.state.food = spawn::relocate_food(cols, rows, &self.state.body, &mut self.rng);
            self.state.entities = Self::food_entity(cell, self.state.food);
        } else {
            self.state.body.pop();
        }

        // Walls and self-collision. The tail is popped before the check, so
        // chasing into the cell it just vacated is safe.
        let out = next.x < 0 || next.x >= cols || next.y < 0 || next.y >= rows;
        if out || self.state.body[1..].contains(&next) {
            self.game_over();
        }

        // Mirror the head into the player entity for the render snapshot.
        self.state.player.pos = next.as_vec2() * cell;
    }

    fn game_over(&mut self) {
        self.state.running = false;
        log::info!(
            "{}: game over at score {} (best {})",
            self.config.variant.as_str(),
            self.state.score,
            self.state.best_score
        );
    }

    /// Add points and persist the best score the moment it is beaten. A
    /// write failure costs only the record, never the session.
    fn record_score(&mut self, points: u32) {
        self.state.score += points;
        if self.state.score > self.state.best_score {
            self.state.best_score = self.state.score;
            if let Some(store) = &self.store {
                if let Err(err) = store.save(self.config.variant, self.state.best_score) {
                    log::warn!(
                        "failed to persist best score for {}: {err}",
                        self.config.variant.as_str()
                    );
                }
            }
        }
    }
}
