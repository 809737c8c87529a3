//! Threat analysis: immediate-win enumeration, line extensions through a
//! cell, and open three-in-a-row detection. Everything here works on value
//! copies of the board; nothing mutates the caller's position.

use crate::game::{Board, Cell, Player, COLS, DIRECTIONS};

/// Simulate dropping `player`'s piece in `col` and test whether that move
/// wins immediately. A rejected drop (full or invalid column) is not a win.
pub fn would_win(board: &Board, col: usize, player: Player) -> bool {
    match board.with_drop(col, player.to_cell()) {
        Ok((after, row)) => after.is_winning(row, col, player.to_cell()),
        Err(_) => false,
    }
}

/// All currently playable columns where `player` wins immediately, in
/// ascending column order.
pub fn immediate_win_columns(board: &Board, player: Player) -> Vec<usize> {
    (0..COLS)
        .filter(|&col| !board.is_column_full(col) && would_win(board, col, player))
        .collect()
}

/// First column where `player` wins immediately, if any.
pub fn self_win_in_one(board: &Board, player: Player) -> Option<usize> {
    (0..COLS).find(|&col| !board.is_column_full(col) && would_win(board, col, player))
}

/// Length of the contiguous run of `player`'s pieces through (row, col)
/// along `(dr, dc)` and its opposite, counting the cell itself.
pub fn line_extension(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    (dr, dc): (i32, i32),
) -> usize {
    let piece = player.to_cell();
    let mut count = 1;

    for i in 1..4 {
        match board.get_checked(row as i32 + dr * i, col as i32 + dc * i) {
            Some(cell) if cell == piece => count += 1,
            _ => break,
        }
    }
    for i in 1..4 {
        match board.get_checked(row as i32 - dr * i, col as i32 - dc * i) {
            Some(cell) if cell == piece => count += 1,
            _ => break,
        }
    }

    count
}

/// Count length-3 runs of `player`'s pieces through (row, col) that sit in a
/// window otherwise empty and have at least one open extension cell beyond
/// the run. Checked over the four principal directions.
pub fn open_three_count(board: &Board, row: usize, col: usize, player: Player) -> usize {
    let piece = player.to_cell();
    let mut total = 0;

    for &(dr, dc) in &DIRECTIONS {
        // Slide a 4-cell window so that (row, col) takes every offset in it.
        for start in -3..=0i32 {
            let mut count = 0;
            let mut usable = true;

            for i in 0..4 {
                let r = row as i32 + (start + i) * dr;
                let c = col as i32 + (start + i) * dc;
                match board.get_checked(r, c) {
                    Some(cell) if cell == piece => count += 1,
                    Some(Cell::Empty) => {}
                    _ => {
                        usable = false;
                        break;
                    }
                }
            }

            if !usable || count != 3 {
                continue;
            }

            let before = board.get_checked(
                row as i32 + (start - 1) * dr,
                col as i32 + (start - 1) * dc,
            );
            let after = board.get_checked(
                row as i32 + (start + 4) * dr,
                col as i32 + (start + 4) * dc,
            );

            if before == Some(Cell::Empty) || after == Some(Cell::Empty) {
                total += 1;
            }
        }
    }

    total
}
