//! Cabinet - a fixed-tick arcade simulation kernel
//!
//! One deterministic engine behind five small arcade games: a lane dodger,
//! a gated flier, a side-scrolling runner, a grid snake, and a vertical
//! shooter. Each variant is a `GameConfig` preset; everything that differs
//! between the games is data, everything they share is code.
//!
//! - `sim`: the simulation proper (entities, motion, spawning, collisions,
//!   difficulty, the per-tick session pipeline)
//! - `config`: per-variant tuning, serde-backed
//! - `highscores`: one persisted best score per variant
//!
//! Rendering, windowing, and input decoding are the host's problem: it maps
//! raw input to `Intent`s, drives `GameSession::tick` from its own timer,
//! and draws whatever `snapshot()` reports.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{GameConfig, Variant};
pub use highscores::HighScoreStore;
pub use sim::{GameSession, Intent, SessionState, Snapshot, TickInput};
