//! Core Connect Four board logic: grid representation with per-column fill
//! counts, non-mutating move simulation, and win/fill detection.

mod board;
mod player;

pub use board::{Board, Cell, MoveError, COLS, DIRECTIONS, ROWS};
pub use player::Player;
