//! Core tic-tac-toe engine (no_std compatible)
//!
//! This module contains the pure game logic: boards, the rule evaluator, the
//! move history and the turn/timer state machine. It only needs `alloc` for
//! the history and view types, and logs through the `log` facade.

pub mod board;
pub mod command;
pub mod common;
pub mod config;
pub mod countdown;
pub mod game;
pub mod history;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use board::Board;
pub use command::{cell_name, parse_cell, Command, CommandError};
pub use common::{BoardError, Mark};
pub use config::*;
pub use countdown::{Countdown, CountdownTick};
pub use game::{GameEngine, GameStatus, Rejection, TickOutcome, Transition};
pub use history::History;
pub use rules::{evaluate, is_draw, winner, winning_line, LINES};
pub use view::{CellView, GameView, HistoryEntry};
