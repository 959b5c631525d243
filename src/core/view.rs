//! Render payload handed to presentation layers.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::core::board::Board;
use crate::core::command::Command;
use crate::core::common::Mark;
use crate::core::game::GameStatus;

/// One board cell as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub index: usize,
    pub mark: Option<Mark>,
    /// Command a click on this cell dispatches; `None` when the engine would
    /// ignore it (occupied cell or finished game).
    pub on_select: Option<Command>,
}

/// One selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub index: usize,
    pub label: String,
    pub current: bool,
    pub on_select: Command,
}

impl HistoryEntry {
    pub fn new(index: usize, current: bool) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            String::from("Go to game start")
        };
        Self {
            index,
            label,
            current,
            on_select: Command::Jump(index),
        }
    }
}

/// Immutable snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    pub board: Board,
    pub cells: Vec<CellView>,
    pub status: GameStatus,
    pub status_text: String,
    pub active_player: Mark,
    pub remaining_seconds: u32,
    pub winning_line: Option<[usize; 3]>,
    pub history: Vec<HistoryEntry>,
    pub current_index: usize,
}

impl GameView {
    /// Whether the countdown should be displayed.
    pub fn shows_timer(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Status line: `Winner: X`, `Draw!` or `Next player: O`.
pub fn status_text(status: GameStatus, active: Mark) -> String {
    match status {
        GameStatus::Won(m) => format!("Winner: {}", m),
        GameStatus::Draw => String::from("Draw!"),
        GameStatus::InProgress => format!("Next player: {}", active),
    }
}
