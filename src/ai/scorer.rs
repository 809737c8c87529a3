//! Move scoring for the medium tier: line extension, open threes, immediate
//! wins created, opponent threats removed, placement height, plus a small
//! random jitter to break ties between otherwise-equal moves.

use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Player, DIRECTIONS, ROWS};

use super::threat::{immediate_win_columns, line_extension, open_three_count};

/// Process-wide jitter source, OS-seeded exactly once regardless of which
/// thread asks first.
static JITTER_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn jitter() -> i32 {
    let rng = JITTER_RNG.get_or_init(|| Mutex::new(StdRng::from_os_rng()));
    let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    rng.random_range(-3..=3)
}

/// Deterministic part of the move score: everything except the jitter.
pub fn base_score(
    after: &Board,
    placed_row: usize,
    placed_col: usize,
    me: Player,
    opp: Player,
    opp_threats_before: usize,
) -> i32 {
    let best_line = DIRECTIONS
        .iter()
        .map(|&dir| line_extension(after, placed_row, placed_col, me, dir))
        .max()
        .unwrap_or(1) as i32;

    let mut score = 0;
    score += 100 * best_line;
    score += 60 * open_three_count(after, placed_row, placed_col, me) as i32;
    score += 40 * immediate_win_columns(after, me).len() as i32;

    let opp_threats_after = immediate_win_columns(after, opp).len();
    score += 25 * opp_threats_before.saturating_sub(opp_threats_after) as i32;

    // Placement height bonus, straight from the landing row.
    score += 5 * (ROWS - placed_row) as i32;

    score
}

/// Score a hypothetical move after it has been played, using the
/// process-wide jitter source.
pub fn score_move(
    after: &Board,
    placed_row: usize,
    placed_col: usize,
    me: Player,
    opp: Player,
    opp_threats_before: usize,
) -> i32 {
    base_score(after, placed_row, placed_col, me, opp, opp_threats_before) + jitter()
}

/// Same as [`score_move`] but with an injected random source, so callers
/// that need reproducible scores can seed it.
pub fn score_move_with<R: Rng>(
    after: &Board,
    placed_row: usize,
    placed_col: usize,
    me: Player,
    opp: Player,
    opp_threats_before: usize,
    rng: &mut R,
) -> i32 {
    base_score(after, placed_row, placed_col, me, opp, opp_threats_before)
        + rng.random_range(-3..=3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn lone_bottom_drop_scores_line_and_height() {
        let board = Board::new();
        let (after, row) = board.with_drop(0, Cell::Red).unwrap();
        // Line of 1, no threes, no wins, nothing removed; bottom row gets
        // the smallest height bonus.
        assert_eq!(
            base_score(&after, row, 0, Player::Red, Player::Yellow, 0),
            100 + 5
        );
    }

    #[test]
    fn extending_a_line_scores_higher() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        let (extend, row_e) = board.with_drop(4, Cell::Red).unwrap();
        let (lone, row_l) = board.with_drop(6, Cell::Red).unwrap();

        let extend_score = base_score(&extend, row_e, 4, Player::Red, Player::Yellow, 0);
        let lone_score = base_score(&lone, row_l, 6, Player::Red, Player::Yellow, 0);
        assert!(extend_score > lone_score);
    }

    #[test]
    fn removing_opponent_threat_is_rewarded() {
        let mut board = Board::new();
        // Yellow threatens to win at column 0.
        for col in 1..4 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        let threats_before = immediate_win_columns(&board, Player::Yellow).len();
        assert_eq!(threats_before, 2);

        // Blocking at column 0 removes one of the two threats.
        let (after, row) = board.with_drop(0, Cell::Red).unwrap();
        let threats_after = immediate_win_columns(&after, Player::Yellow).len();
        assert_eq!(threats_after, 1);

        let score = base_score(&after, row, 0, Player::Red, Player::Yellow, threats_before);
        // 100 (line of 1) + 25 (one threat removed) + 5 (bottom-row bonus).
        assert_eq!(score, 100 + 25 + 5);
    }

    #[test]
    fn creating_immediate_wins_is_rewarded() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        let (after, row) = board.with_drop(4, Cell::Red).unwrap();
        let score = base_score(&after, row, 4, Player::Red, Player::Yellow, 0);
        // Line of 3, open threes per clean window, two immediate winning
        // columns (1 and 5), bottom-row bonus.
        assert_eq!(immediate_win_columns(&after, Player::Red), vec![1, 5]);
        assert!(score >= 300 + 60 + 80 + 5);
    }

    #[test]
    fn jitter_stays_within_band() {
        let board = Board::new();
        let (after, row) = board.with_drop(3, Cell::Red).unwrap();
        let base = base_score(&after, row, 3, Player::Red, Player::Yellow, 0);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let scored =
                score_move_with(&after, row, 3, Player::Red, Player::Yellow, 0, &mut rng);
            assert!((scored - base).abs() <= 3);
        }
    }

    #[test]
    fn seeded_scores_are_reproducible() {
        let board = Board::new();
        let (after, row) = board.with_drop(3, Cell::Red).unwrap();

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(
                score_move_with(&after, row, 3, Player::Red, Player::Yellow, 0, &mut a),
                score_move_with(&after, row, 3, Player::Red, Player::Yellow, 0, &mut b)
            );
        }
    }

    #[test]
    fn global_jitter_score_stays_near_base() {
        let board = Board::new();
        let (after, row) = board.with_drop(3, Cell::Red).unwrap();
        let base = base_score(&after, row, 3, Player::Red, Player::Yellow, 0);
        for _ in 0..50 {
            let scored = score_move(&after, row, 3, Player::Red, Player::Yellow, 0);
            assert!((scored - base).abs() <= 3);
        }
    }
}
