//! Presentation layer.
//!
//! Both renderers implement [`crate::session::Renderer`] and draw nothing but
//! what the [`crate::GameView`] carries:
//! - `TerminalRenderer`: board grid, status line, countdown and move list
//! - `JsonRenderer`: one JSON object per view, for driving other front ends

pub mod json;
pub mod terminal;

pub use json::JsonRenderer;
pub use terminal::{format_view, TerminalRenderer};
