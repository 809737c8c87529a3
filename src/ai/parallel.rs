//! Hard-tier move selection: fan the root column choice out to one search
//! task per legal column, each on its own board snapshot, then join and
//! reduce to the best-scoring column. Fork-join only; tasks never share
//! mutable state and always run to completion.

use std::thread;

use crate::game::{Board, Player};

use super::search::{minimax, MOVE_ORDER};
use super::threat::{immediate_win_columns, self_win_in_one};

/// Reference search depth for the hard tier, in plies.
pub const SEARCH_DEPTH: usize = 7;

/// Sentinel for a task whose simulated move was rejected; such tasks are
/// excluded from winner selection.
const IMPOSSIBLE: i32 = i32::MIN;

/// One unit of root-level search work: a snapshot, the two roles, a
/// candidate column, and the remaining depth. `run` is a pure function of
/// these fields, so the result is identical whether it executes on its own
/// thread or inline.
struct SearchTask {
    board: Board,
    bot: Player,
    col: usize,
    depth: usize,
}

impl SearchTask {
    fn run(&self) -> i32 {
        let Ok((next, row)) = self.board.with_drop(self.col, self.bot.to_cell()) else {
            return IMPOSSIBLE;
        };

        minimax(
            &next,
            self.depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            self.bot,
            self.bot.other(),
            Some((row, self.col)),
        )
    }
}

fn build_tasks(board: &Board, bot: Player, depth: usize) -> Vec<SearchTask> {
    MOVE_ORDER
        .iter()
        .filter(|&&col| !board.is_column_full(col))
        .map(|&col| SearchTask {
            board: *board,
            bot,
            col,
            depth,
        })
        .collect()
}

/// Run every task, one thread per task where the platform allows it. A task
/// whose thread cannot be spawned runs synchronously through the same
/// `run()` path, so the scores do not depend on where execution happened.
fn run_tasks(tasks: &[SearchTask]) -> Vec<i32> {
    thread::scope(|scope| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|task| match thread::Builder::new().spawn_scoped(scope, || task.run()) {
                Ok(handle) => Ok(handle),
                Err(_) => Err(task.run()),
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle {
                Ok(handle) => handle.join().unwrap_or(IMPOSSIBLE),
                Err(score) => score,
            })
            .collect()
    })
}

/// Pick the column with the strictly highest score; ties go to the first
/// task in enumeration order. Excluded tasks never win.
fn best_column(tasks: &[SearchTask], scores: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (task, &score) in tasks.iter().zip(scores) {
        if score == IMPOSSIBLE {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((task.col, score)),
        }
    }

    best.map(|(col, _)| col)
}

/// Hard-tier choice at an explicit depth bound.
pub fn choose_hard_at_depth(board: &Board, bot: Player, depth: usize) -> Option<usize> {
    // Forced moves need no search at all.
    if let Some(col) = self_win_in_one(board, bot) {
        return Some(col);
    }
    let danger = immediate_win_columns(board, bot.other());
    if let Some(&col) = danger.first() {
        return Some(col);
    }

    let tasks = build_tasks(board, bot, depth);
    let scores = run_tasks(&tasks);
    best_column(&tasks, &scores)
}

/// Hard-tier choice at the reference depth.
pub fn choose_hard(board: &Board, bot: Player) -> Option<usize> {
    choose_hard_at_depth(board, bot, SEARCH_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn takes_win_in_one() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(2, Cell::Red).unwrap();
        }
        assert_eq!(choose_hard(&board, Player::Red), Some(2));
    }

    #[test]
    fn blocks_forced_loss() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        // Red has no win of its own, so the only sane move is the block.
        assert_eq!(choose_hard(&board, Player::Red), Some(5));
    }

    #[test]
    fn own_win_beats_blocking() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(1, Cell::Red).unwrap();
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        // Both sides threaten; taking the win comes first.
        assert_eq!(choose_hard(&board, Player::Red), Some(1));
    }

    #[test]
    fn full_board_has_no_move() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert_eq!(choose_hard(&board, Player::Yellow), None);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();

        let depth = 4;
        let tasks = build_tasks(&board, Player::Red, depth);
        let sequential: Vec<i32> = tasks.iter().map(SearchTask::run).collect();
        let sequential_pick = best_column(&tasks, &sequential);

        assert_eq!(choose_hard_at_depth(&board, Player::Red, depth), sequential_pick);
    }

    #[test]
    fn task_on_full_column_is_excluded() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
            board.drop_piece(1, Cell::Yellow).unwrap();
        }
        let task = SearchTask {
            board,
            bot: Player::Red,
            col: 0,
            depth: 3,
        };
        assert_eq!(task.run(), IMPOSSIBLE);
        assert_eq!(best_column(&[task], &[IMPOSSIBLE]), None);
    }

    #[test]
    fn ties_resolve_to_enumeration_order() {
        let board = Board::new();
        let tasks = build_tasks(&board, Player::Red, 2);
        let scores = vec![10; tasks.len()];
        // All equal: the first task in center-first order wins.
        assert_eq!(best_column(&tasks, &scores), Some(3));
    }
}
