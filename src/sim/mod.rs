//! Deterministic simulation
//!
//! All gameplay lives here, and all of it must stay pure and deterministic:
//! - Fixed timestep only; no wall-clock reads
//! - Seeded RNG only (`Pcg32`)
//! - Stable entity iteration order (insertion order)
//! - No rendering or platform dependencies
//!
//! Same config, same seed, same inputs: same run.

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod motion;
pub mod session;
pub mod spawn;

pub use collision::intersects;
pub use difficulty::{DifficultyController, DifficultyRule};
pub use entity::{Direction, Entity, EntityKind, Rect};
pub use session::{GameSession, Intent, SessionState, Snapshot, TickInput};
pub use spawn::SPAWN_RETRY_LIMIT;
