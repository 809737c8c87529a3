use crate::game::{Board, Cell, Player, COLS, ROWS};

/// The single center column, worth a positional bonus per piece.
pub const CENTER_COLUMN: usize = COLS / 2;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: scans all 4-cell windows and scores threats, plus a
/// center-column bias. Opponent threats are weighted slightly heavier than
/// own threats of the same length, so the evaluation leans defensive.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        // Windows containing both colors can never complete; worth nothing.
        if own > 0 && opp > 0 {
            return 0;
        }

        let mut score = 0;

        if own == 3 && empty == 1 {
            score += 100;
        } else if own == 2 && empty == 2 {
            score += 10;
        } else if own == 1 && empty == 3 {
            score += 1;
        }

        if opp == 3 && empty == 1 {
            score -= 120;
        } else if opp == 2 && empty == 2 {
            score -= 8;
        } else if opp == 1 && empty == 3 {
            score -= 1;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        for row in 0..ROWS {
            let cell = board.get(row, CENTER_COLUMN);
            if cell == own_cell {
                score += 6;
            } else if cell == opp_cell {
                score -= 6;
            }
        }

        let count_window = |cells: [Cell; 4]| {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in cells {
                if cell == own_cell {
                    own += 1;
                } else if cell == opp_cell {
                    opp += 1;
                } else {
                    empty += 1;
                }
            }
            Self::score_window(own, opp, empty)
        };

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += count_window([
                    board.get(row, col),
                    board.get(row, col + 1),
                    board.get(row, col + 2),
                    board.get(row, col + 3),
                ]);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += count_window([
                    board.get(row, col),
                    board.get(row + 1, col),
                    board.get(row + 2, col),
                    board.get(row + 3, col),
                ]);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += count_window([
                    board.get(row, col),
                    board.get(row + 1, col + 1),
                    board.get(row + 2, col + 2),
                    board.get(row + 3, col + 3),
                ]);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                score += count_window([
                    board.get(row, col),
                    board.get(row - 1, col + 1),
                    board.get(row - 2, col + 2),
                    board.get(row - 3, col + 3),
                ]);
            }
        }

        score
    }
}
