use std::collections::VecDeque;

use log::warn;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{Duration, Instant};

use crate::core::Command;

/// Source of player commands.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next command, or `None` once input is exhausted.
    ///
    /// Must be cancel safe: the session races it against timer ticks and
    /// drops the future when a tick wins.
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>>;
}

pub const HELP: &str = "\
Commands:
  1..9 or a1..c3   mark a cell (1 = top-left, 9 = bottom-right)
  jump N, j N      go to move #N (0 = game start)
  start            go to game start
  help             show this help
  quit             leave the game";

/// Line-based commands from standard input.
///
/// `help` and unparsable lines are answered on stderr and reading continues.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        while let Some(line) = self.lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("help") || line == "?" {
                eprintln!("{}", HELP);
                continue;
            }
            match line.parse::<Command>() {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(e) => {
                    warn!("rejected input {:?}: {}", line, e);
                    eprintln!("{} (type 'help' for commands)", e);
                }
            }
        }
        Ok(None)
    }
}

/// In-memory command script. Each command is delivered after its delay,
/// measured from the moment the previous one was delivered.
pub struct ScriptedInput {
    queue: VecDeque<(Duration, Command)>,
    pending: Option<Instant>,
}

impl ScriptedInput {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = (Duration, Command)>,
    {
        Self {
            queue: script.into_iter().collect(),
            pending: None,
        }
    }

    /// Commands delivered back to back with no delay.
    pub fn immediate<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self::new(commands.into_iter().map(|c| (Duration::ZERO, c)))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        let Some(&(delay, _)) = self.queue.front() else {
            return Ok(None);
        };
        // Remember the deadline so a cancelled call resumes the same wait.
        let deadline = *self
            .pending
            .get_or_insert_with(|| Instant::now() + delay);
        tokio::time::sleep_until(deadline).await;
        self.pending = None;
        Ok(self.queue.pop_front().map(|(_, cmd)| cmd))
    }
}

