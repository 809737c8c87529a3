//! Post-game analysis: replay a finished game's move history and report
//! every immediate win a player left on the table, plus a final heuristic
//! evaluation of the end position.

use crate::ai::{self_win_in_one, Heuristic, WindowHeuristic};
use crate::game::{Board, Player};

/// One move of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RecordedMove {
    pub player: Player,
    pub column: usize,
}

/// A move where the mover had a win-in-one available but played elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MissedWin {
    /// 1-based move number within the game.
    pub move_number: usize,
    pub player: Player,
    pub played: usize,
    pub winning: usize,
}

/// Final heuristic evaluation from one side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FinalEvaluation {
    pub player: Player,
    pub score: i32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PostGameReport {
    pub total_moves: usize,
    pub missed_wins: Vec<MissedWin>,
    /// Winner's perspective when there is a winner, both perspectives on a
    /// draw.
    pub evaluations: Vec<FinalEvaluation>,
}

/// Replay `history` from an empty board and collect missed immediate wins
/// and the final evaluation. Moves that do not replay cleanly are skipped.
pub fn analyze(history: &[RecordedMove], winner: Option<Player>) -> PostGameReport {
    let mut board = Board::new();
    let mut missed_wins = Vec::new();

    for (i, mv) in history.iter().enumerate() {
        if let Some(winning) = self_win_in_one(&board, mv.player) {
            if winning != mv.column {
                missed_wins.push(MissedWin {
                    move_number: i + 1,
                    player: mv.player,
                    played: mv.column,
                    winning,
                });
            }
        }

        // Entries that do not fit the board cannot advance the replay.
        let _ = board.drop_piece(mv.column, mv.player.to_cell());
    }

    let evaluations = match winner {
        Some(player) => vec![FinalEvaluation {
            player,
            score: WindowHeuristic.evaluate(&board, player),
        }],
        None => [Player::Red, Player::Yellow]
            .into_iter()
            .map(|player| FinalEvaluation {
                player,
                score: WindowHeuristic.evaluate(&board, player),
            })
            .collect(),
    };

    PostGameReport {
        total_moves: history.len(),
        missed_wins,
        evaluations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(player: Player, column: usize) -> RecordedMove {
        RecordedMove { player, column }
    }

    #[test]
    fn clean_game_reports_no_missed_wins() {
        let history = [
            mv(Player::Red, 3),
            mv(Player::Yellow, 2),
            mv(Player::Red, 3),
            mv(Player::Yellow, 2),
        ];
        let report = analyze(&history, None);
        assert_eq!(report.total_moves, 4);
        assert!(report.missed_wins.is_empty());
        assert_eq!(report.evaluations.len(), 2);
    }

    #[test]
    fn missed_vertical_win_is_flagged() {
        // Red stacks three in column 0, then plays column 6 instead of
        // completing the four.
        let history = [
            mv(Player::Red, 0),
            mv(Player::Yellow, 2),
            mv(Player::Red, 0),
            mv(Player::Yellow, 2),
            mv(Player::Red, 0),
            mv(Player::Yellow, 3),
            mv(Player::Red, 6),
        ];
        let report = analyze(&history, None);
        assert_eq!(report.missed_wins.len(), 1);
        let missed = report.missed_wins[0];
        assert_eq!(missed.move_number, 7);
        assert_eq!(missed.player, Player::Red);
        assert_eq!(missed.played, 6);
        assert_eq!(missed.winning, 0);
    }

    #[test]
    fn winner_gets_single_evaluation() {
        let history = [
            mv(Player::Red, 0),
            mv(Player::Red, 1),
            mv(Player::Red, 2),
            mv(Player::Red, 3),
        ];
        let report = analyze(&history, Some(Player::Red));
        assert_eq!(report.evaluations.len(), 1);
        assert_eq!(report.evaluations[0].player, Player::Red);
        assert!(report.evaluations[0].score > 0);
    }

    #[test]
    fn taking_the_win_is_not_a_miss() {
        let history = [
            mv(Player::Red, 0),
            mv(Player::Yellow, 6),
            mv(Player::Red, 0),
            mv(Player::Yellow, 6),
            mv(Player::Red, 0),
            mv(Player::Yellow, 5),
            mv(Player::Red, 0),
        ];
        let report = analyze(&history, Some(Player::Red));
        assert!(report.missed_wins.is_empty());
    }
}
