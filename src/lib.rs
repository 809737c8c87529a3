//! # Connect Four Engine
//!
//! The decision engine for a two-player, gravity-based connection game on a
//! 6×7 grid. Chooses a column for an automated player across three
//! difficulty tiers and doubles as a move advisor for human players:
//! heuristic position evaluation, threat enumeration, and a depth-bounded
//! minimax search with alpha-beta pruning fanned out across one worker
//! thread per candidate column.
//!
//! ## Modules
//!
//! - [`game`] — Board representation: grid, fill counts, move simulation,
//!   win detection
//! - [`ai`] — Threat analysis, heuristic evaluator, move scorer, search
//!   engine, difficulty strategies, `decide`/`hint` entry points
//! - [`analysis`] — Post-game replay analysis (missed wins, final evaluation)
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod game;
