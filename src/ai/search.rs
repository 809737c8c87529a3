//! Depth-bounded minimax with alpha-beta pruning. The search is a pure
//! function of its arguments; any number of concurrent invocations on
//! independent board copies are safe.

use crate::game::{Board, Player, COLS};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Base magnitude for certain win/loss scores. Offset by the remaining depth
/// so faster wins and slower losses rank higher among equally-certain
/// outcomes. Must stay far outside the heuristic's attainable range; a test
/// below pins that margin.
pub const WIN_SCORE: i32 = 1_000_000;

/// Column ordering: center-first for better alpha-beta pruning.
pub const MOVE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Minimax over board copies. `bot` is the side being optimized for,
/// `current` the side to move, `last_move` the landing cell of the previous
/// ply (if any) so the previous mover's win is detected before anything
/// else. Maximizes on `bot`'s turns, minimizes on the opponent's, pruning
/// once `beta <= alpha`.
pub fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    bot: Player,
    current: Player,
    last_move: Option<(usize, usize)>,
) -> i32 {
    if let Some((row, col)) = last_move {
        let mover = current.other();
        if board.is_winning(row, col, mover.to_cell()) {
            return if mover == bot {
                WIN_SCORE + depth as i32
            } else {
                -(WIN_SCORE + depth as i32)
            };
        }
    }

    if depth == 0 || board.is_full() {
        return WindowHeuristic.evaluate(board, bot);
    }

    if current == bot {
        let mut best = i32::MIN;

        for &col in &MOVE_ORDER {
            let Ok((next, row)) = board.with_drop(col, current.to_cell()) else {
                continue;
            };

            let val = minimax(&next, depth - 1, alpha, beta, bot, current.other(), Some((row, col)));

            if val > best {
                best = val;
            }
            if val > alpha {
                alpha = val;
            }
            if beta <= alpha {
                break;
            }
        }

        best
    } else {
        let mut best = i32::MAX;

        for &col in &MOVE_ORDER {
            let Ok((next, row)) = board.with_drop(col, current.to_cell()) else {
                continue;
            };

            let val = minimax(&next, depth - 1, alpha, beta, bot, current.other(), Some((row, col)));

            if val < best {
                best = val;
            }
            if val < beta {
                beta = val;
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}
