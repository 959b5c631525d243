use std::io::Write;
use std::sync::{Arc, Mutex};

use tictactoe::{format_view, GameEngine, JsonRenderer, Renderer, TerminalRenderer};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn test_terminal_layout_in_progress() {
    let mut engine = GameEngine::new();
    engine.play(0);
    engine.play(4);
    let text = format_view(&engine.view());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "    a b c");
    assert_eq!(lines[1], " 1  X . .");
    assert_eq!(lines[2], " 2  . O .");
    assert_eq!(lines[3], " 3  . . .");
    assert_eq!(lines[4], "Next player: X   Time left: 30s");
    assert_eq!(lines[5], "   0. Go to game start");
    assert_eq!(lines[7], ">  2. Go to move #2");
}

#[test]
fn test_terminal_hides_timer_and_marks_line_when_won() {
    let mut engine = GameEngine::new();
    for c in [0, 3, 1, 4, 2] {
        engine.play(c);
    }
    let text = format_view(&engine.view());
    assert!(text.contains(" 1  # # #"));
    assert!(text.contains("Winner: X\n"));
    assert!(!text.contains("Time left"));
}

#[test]
fn test_terminal_renderer_writes_view() -> anyhow::Result<()> {
    let engine = GameEngine::new();
    let mut renderer = TerminalRenderer::new(Vec::new());
    renderer.render(&engine.view())?;
    let out = String::from_utf8(renderer.into_inner())?;
    assert!(out.contains("Next player: X"));
    Ok(())
}

#[test]
fn test_json_renderer_emits_one_line_per_view() -> anyhow::Result<()> {
    let buf = SharedBuf::default();
    let mut renderer = JsonRenderer::new(buf.clone());
    let mut engine = GameEngine::new();
    renderer.render(&engine.view())?;
    engine.play(4);
    renderer.render(&engine.view())?;

    let text = buf.text();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["status_text"], "Next player: X");
    assert_eq!(lines[1]["status_text"], "Next player: O");
    assert_eq!(lines[1]["remaining_seconds"], 30);
    assert_eq!(lines[1]["history"].as_array().unwrap().len(), 2);
    assert_eq!(lines[1]["cells"][4]["mark"], "X");
    assert!(lines[1]["cells"][4]["on_select"].is_null());
    Ok(())
}
