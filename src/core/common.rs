//! Common types for tic-tac-toe: marks and board errors.

use core::fmt;

/// A player's mark. X always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves at the given history index.
    pub fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index outside 0..9.
    InvalidIndex(usize),
    /// Target cell already carries a mark.
    CellOccupied(usize),
    /// Board text did not describe exactly nine cells.
    InvalidLength(usize),
    /// Board text contained a character that is not a mark or an empty cell.
    InvalidChar(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex(i) => write!(f, "Cell index {} is out of range", i),
            BoardError::CellOccupied(i) => write!(f, "Cell {} is already marked", i),
            BoardError::InvalidLength(n) => write!(f, "Expected 9 cells, found {}", n),
            BoardError::InvalidChar(c) => write!(f, "Unexpected board character {:?}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
