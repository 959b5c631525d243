//! Immutable 3×3 board snapshots.

use core::fmt;
use core::str::FromStr;

use crate::core::common::{BoardError, Mark};
use crate::core::config::{BOARD_SIDE, NUM_CELLS};

/// Nine cells in row-major order. Placing a mark yields a new board, so
/// snapshots stored in the history are never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    pub fn from_cells(cells: [Option<Mark>; NUM_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; NUM_CELLS] {
        &self.cells
    }

    /// Contents of the cell at `index`.
    pub fn get(&self, index: usize) -> Result<Option<Mark>, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex(index))
    }

    /// Contents of the cell at (`row`, `col`).
    pub fn at(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(BoardError::InvalidIndex(row * BOARD_SIDE + col));
        }
        self.get(row * BOARD_SIDE + col)
    }

    /// Copy of this board with `mark` written at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, BoardError> {
        if self.get(index)?.is_some() {
            return Err(BoardError::CellOccupied(index));
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// Indices of unmarked cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Number of marked cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl fmt::Display for Board {
    /// Three rows such as `X|.|O`, separated by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.map_or('.', Mark::to_char))?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse nine cells of `X`, `O` and `.`/`-`/`_`. Whitespace, `|` and `/`
    /// act as separators and are skipped, so the `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; NUM_CELLS];
        let mut n = 0;
        for ch in s.chars() {
            let cell = match ch {
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                other => return Err(BoardError::InvalidChar(other)),
            };
            if n < NUM_CELLS {
                cells[n] = cell;
            }
            n += 1;
        }
        if n != NUM_CELLS {
            return Err(BoardError::InvalidLength(n));
        }
        Ok(Self { cells })
    }
}
