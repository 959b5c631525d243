//! Move history: every board snapshot from the opening position onward.

use alloc::vec;
use alloc::vec::Vec;

use crate::core::board::Board;

/// Ordered board snapshots. Index 0 is always the empty board, and the board
/// at index `i` carries exactly `i` marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    pub fn latest(&self) -> &Board {
        // never empty
        &self.boards[self.boards.len() - 1]
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.boards.len()
    }

    /// Drop every snapshot after `index`, then append `board`.
    /// Returns the index of the appended snapshot.
    pub fn record(&mut self, index: usize, board: Board) -> usize {
        self.boards.truncate(index + 1);
        self.boards.push(board);
        self.boards.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn as_slice(&self) -> &[Board] {
        &self.boards
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
