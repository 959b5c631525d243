use std::fmt::Write as _;
use std::io::{self, Write};

use crate::core::config::BOARD_SIDE;
use crate::core::{GameView, Mark};
use crate::session::Renderer;

/// Plain-text renderer writing to stdout or any other writer.
pub struct TerminalRenderer<W: Write + Send = io::Stdout> {
    out: W,
}

impl TerminalRenderer {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn cell_char(view: &GameView, index: usize) -> char {
    let on_line = view
        .winning_line
        .is_some_and(|line| line.contains(&index));
    match view.board.cells()[index] {
        Some(Mark::X) if on_line => '#',
        Some(Mark::O) if on_line => '@',
        Some(m) => m.to_char(),
        None => '.',
    }
}

/// Render a view as text: board with column letters and row numbers, status
/// line (plus countdown while the game is running) and the move list.
pub fn format_view(view: &GameView) -> String {
    let mut s = String::new();
    s.push_str("   ");
    for c in 0..BOARD_SIDE {
        let ch = (b'a' + c as u8) as char;
        let _ = write!(s, " {}", ch);
    }
    s.push('\n');
    for r in 0..BOARD_SIDE {
        let _ = write!(s, "{:2} ", r + 1);
        for c in 0..BOARD_SIDE {
            let _ = write!(s, " {}", cell_char(view, r * BOARD_SIDE + c));
        }
        s.push('\n');
    }
    s.push_str(&view.status_text);
    if view.shows_timer() {
        let _ = write!(s, "   Time left: {}s", view.remaining_seconds);
    }
    s.push('\n');
    for entry in &view.history {
        let marker = if entry.current { '>' } else { ' ' };
        let _ = writeln!(s, "{} {:>2}. {}", marker, entry.index, entry.label);
    }
    s
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &GameView) -> anyhow::Result<()> {
        writeln!(self.out, "\n{}", format_view(view))?;
        self.out.flush()?;
        Ok(())
    }
}
