use std::io::{self, Write};

use crate::core::GameView;
use crate::session::Renderer;

/// Writes every view as a single line of JSON.
pub struct JsonRenderer<W: Write + Send = io::Stdout> {
    out: W,
}

impl JsonRenderer {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &GameView) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, view)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
