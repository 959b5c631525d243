//! Player commands and their text syntax.
//!
//! Cells are typed either as `1`..`9` (row-major, 1-based) or as a column
//! letter plus row number (`a1` is the top-left cell, `c3` the bottom-right).
//! History jumps are `jump N`, `j N` or `start`; `quit`, `q` or `exit` end
//! the session.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::core::config::{BOARD_SIDE, NUM_CELLS};

/// A request dispatched to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Mark the cell at this 0-based index.
    Play(usize),
    /// Move to this history index.
    Jump(usize),
    Quit,
}

/// Errors returned when parsing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCell(String),
    MissingIndex,
    BadIndex(String),
    Unrecognized(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::UnknownCell(s) => write!(f, "No such cell: {}", s),
            CommandError::MissingIndex => write!(f, "Jump needs a move number"),
            CommandError::BadIndex(s) => write!(f, "Not a move number: {}", s),
            CommandError::Unrecognized(s) => write!(f, "Unrecognized command: {}", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

/// Parse a cell name (`5`, `b2`, `B2`) into a 0-based index.
pub fn parse_cell(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let first = chars.next()?;
    if let Some(n) = first.to_digit(10) {
        if chars.next().is_some() || n == 0 {
            return None;
        }
        let n = n as usize;
        return (n <= NUM_CELLS).then(|| n - 1);
    }
    let col = (first.to_ascii_lowercase() as u32).checked_sub('a' as u32)? as usize;
    let row = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || col >= BOARD_SIDE || row == 0 || row > BOARD_SIDE {
        return None;
    }
    Some((row - 1) * BOARD_SIDE + col)
}

/// Column letter plus row number for a 0-based cell index, e.g. `b2` for 4.
pub fn cell_name(index: usize) -> String {
    let col = (b'a' + (index % BOARD_SIDE) as u8) as char;
    let mut name = String::new();
    name.push(col);
    name.push_str(&(index / BOARD_SIDE + 1).to_string());
    name
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;
        let lower = head.to_ascii_lowercase();
        match lower.as_str() {
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "start" => Ok(Command::Jump(0)),
            "jump" | "j" | "goto" => {
                let arg = words.next().ok_or(CommandError::MissingIndex)?;
                let arg = arg.trim_start_matches('#');
                arg.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::BadIndex(arg.to_string()))
            }
            "play" | "p" => {
                let arg = words.next().ok_or(CommandError::Empty)?;
                parse_cell(arg)
                    .map(Command::Play)
                    .ok_or_else(|| CommandError::UnknownCell(arg.to_string()))
            }
            _ => match parse_cell(head) {
                Some(cell) => Ok(Command::Play(cell)),
                None if head.chars().all(|c| c.is_ascii_digit()) => {
                    Err(CommandError::UnknownCell(head.to_string()))
                }
                None => Err(CommandError::Unrecognized(head.to_string())),
            },
        }
    }
}
