//! Win and draw detection.

use crate::core::board::Board;
use crate::core::common::Mark;
use crate::core::game::GameStatus;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line (in [`LINES`] order) holding three identical marks, with that mark.
pub fn winning_line(board: &Board) -> Option<([usize; 3], Mark)> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(m) if cells[b] == Some(m) && cells[c] == Some(m) => Some(([a, b, c], m)),
        _ => None,
    })
}

/// Winning mark on `board`, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, m)| m)
}

/// No winner and no empty cell left.
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}

pub fn evaluate(board: &Board) -> GameStatus {
    match winner(board) {
        Some(m) => GameStatus::Won(m),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
