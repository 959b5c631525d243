//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Command, GameConfig, GameEngine, GameStatus, Mark, TimeoutPolicy};

#[cfg(feature = "std")]
pub use crate::{InputSource, Renderer, ScriptedInput, Session, StdinInput, TerminalRenderer};
