//! Difficulty tiers and the dispatch from a requested tier to a concrete
//! column choice. Easy is block-then-center preference, medium is driven by
//! the move scorer, hard fans out the alpha-beta search per column.

use crate::game::{Board, Player, COLS};

use super::parallel::{choose_hard, choose_hard_at_depth, SEARCH_DEPTH};
use super::scorer::score_move;
use super::threat::{immediate_win_columns, self_win_in_one, would_win};

/// Bot difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a tier name leniently; anything unrecognized falls back to the
    /// easy strategy.
    pub fn from_name(name: &str) -> Difficulty {
        match name.to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "easy" => Difficulty::Easy,
            _ => Difficulty::Easy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Center-first column preference for the easy tier.
const PREFERRED_COLUMNS: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Easy tier: block any opponent immediate win, otherwise take the first
/// open column from the center-first preference list.
pub fn choose_easy(board: &Board, bot: Player) -> Option<usize> {
    let danger = immediate_win_columns(board, bot.other());
    if let Some(&col) = danger.first() {
        return Some(col);
    }

    PREFERRED_COLUMNS
        .iter()
        .copied()
        .find(|&col| !board.is_column_full(col))
}

/// True when dropping in `col` leaves the opponent without a win-in-one.
fn move_is_safe(board: &Board, col: usize, bot: Player) -> bool {
    match board.with_drop(col, bot.to_cell()) {
        Ok((after, _)) => self_win_in_one(&after, bot.other()).is_none(),
        Err(_) => false,
    }
}

/// Medium tier, in falling priority:
/// - win if possible
/// - best-scoring blocking move
/// - best-scoring safe move
/// - otherwise best overall (even if risky)
pub fn choose_medium(board: &Board, bot: Player) -> Option<usize> {
    let opp = bot.other();
    let opp_threats_before = immediate_win_columns(board, opp).len();

    if let Some(col) = self_win_in_one(board, bot) {
        return Some(col);
    }

    // Columns where the opponent would win: score our blocking drop there.
    let mut best_block: Option<(usize, i32)> = None;
    for col in 0..COLS {
        if board.is_column_full(col) || !would_win(board, col, opp) {
            continue;
        }
        let Ok((after, row)) = board.with_drop(col, bot.to_cell()) else {
            continue;
        };
        let score = score_move(&after, row, col, bot, opp, opp_threats_before);
        match best_block {
            Some((_, best)) if score <= best => {}
            _ => best_block = Some((col, score)),
        }
    }
    if let Some((col, _)) = best_block {
        return Some(col);
    }

    // Best move that does not hand the opponent a win-in-one.
    let mut best_safe: Option<(usize, i32)> = None;
    for col in 0..COLS {
        if board.is_column_full(col) || !move_is_safe(board, col, bot) {
            continue;
        }
        let Ok((after, row)) = board.with_drop(col, bot.to_cell()) else {
            continue;
        };
        let score = score_move(&after, row, col, bot, opp, opp_threats_before);
        match best_safe {
            Some((_, best)) if score <= best => {}
            _ => best_safe = Some((col, score)),
        }
    }
    if let Some((col, _)) = best_safe {
        return Some(col);
    }

    // Every move is risky; pick the best of them anyway.
    let mut best: Option<(usize, i32)> = None;
    for col in 0..COLS {
        let Ok((after, row)) = board.with_drop(col, bot.to_cell()) else {
            continue;
        };
        let score = score_move(&after, row, col, bot, opp, opp_threats_before);
        match best {
            Some((_, b)) if score <= b => {}
            _ => best = Some((col, score)),
        }
    }
    best.map(|(col, _)| col)
}

/// Choose a column for `bot` at the given tier. `None` only when no legal
/// column exists.
pub fn decide(board: &Board, difficulty: Difficulty, bot: Player) -> Option<usize> {
    decide_at_depth(board, difficulty, bot, SEARCH_DEPTH)
}

/// Same as [`decide`], with an explicit hard-tier search depth.
pub fn decide_at_depth(
    board: &Board,
    difficulty: Difficulty,
    bot: Player,
    depth: usize,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => choose_easy(board, bot),
        Difficulty::Medium => choose_medium(board, bot),
        Difficulty::Hard => choose_hard_at_depth(board, bot, depth),
    }
}

/// Suggest a move for `player`, always through the hard-tier strategy
/// regardless of the configured game difficulty. Advice only; the board is
/// untouched.
pub fn hint(board: &Board, player: Player) -> Option<usize> {
    choose_hard(board, player)
}
