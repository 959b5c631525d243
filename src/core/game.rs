use core::fmt;

use log::debug;
use rand::Rng;

use crate::core::{
    board::Board,
    common::{BoardError, Mark},
    config::{GameConfig, TimeoutPolicy},
    countdown::{Countdown, CountdownTick},
    history::History,
    rules,
    view::{status_text, CellView, GameView, HistoryEntry},
    Command,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a transition left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The position is already won or drawn.
    GameOver,
    CellOccupied(usize),
    CellOutOfRange(usize),
    UnknownHistoryIndex(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::GameOver => write!(f, "game is over"),
            Rejection::CellOccupied(i) => write!(f, "cell {} is occupied", i),
            Rejection::CellOutOfRange(i) => write!(f, "cell {} does not exist", i),
            Rejection::UnknownHistoryIndex(i) => write!(f, "no move #{} in history", i),
        }
    }
}

/// Outcome of a move or a history jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Outcome of a one-second timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game over, stale epoch, or countdown already resting at zero.
    Ignored,
    /// Countdown decremented; carries the seconds left.
    Counting(u32),
    /// Countdown hit zero. Carries the cell the timeout policy filled, if any.
    Expired { forced: Option<usize> },
}

/// Game state machine: history, current position and turn countdown.
///
/// Every transition that is not allowed is a no-op reported as
/// [`Transition::Ignored`]. Each applied move or jump bumps the epoch so that
/// timer ticks scheduled against an earlier position can be told apart.
#[derive(Debug, Clone)]
pub struct GameEngine {
    history: History,
    current: usize,
    countdown: Countdown,
    policy: TimeoutPolicy,
    epoch: u64,
}

impl GameEngine {
    /// Create an engine with the default 30-second turns and random timeout placement.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            history: History::new(),
            current: 0,
            countdown: Countdown::new(config.turn_seconds()),
            policy: config.timeout_policy(),
            epoch: 0,
        }
    }

    pub fn board(&self) -> &Board {
        self.history
            .get(self.current)
            .unwrap_or_else(|| self.history.latest())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Mark to move: X on even indices, O on odd ones.
    pub fn active_player(&self) -> Mark {
        Mark::for_move(self.current)
    }

    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.board())
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn turn_seconds(&self) -> u32 {
        self.countdown.limit()
    }

    pub fn timeout_policy(&self) -> TimeoutPolicy {
        self.policy
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Mark `cell` for the active player.
    pub fn play(&mut self, cell: usize) -> Transition {
        if self.status().is_terminal() {
            return self.reject(Rejection::GameOver);
        }
        let next = match self.board().with_mark(cell, self.active_player()) {
            Ok(board) => board,
            Err(BoardError::CellOccupied(_)) => return self.reject(Rejection::CellOccupied(cell)),
            Err(_) => return self.reject(Rejection::CellOutOfRange(cell)),
        };
        let mark = self.active_player();
        self.current = self.history.record(self.current, next);
        self.advance_epoch();
        debug!(
            "{} marked cell {} (move #{}), status {:?}",
            mark,
            cell,
            self.current,
            self.status()
        );
        Transition::Applied
    }

    /// Move to history snapshot `index` without touching the history itself.
    pub fn jump_to(&mut self, index: usize) -> Transition {
        if !self.history.contains_index(index) {
            return self.reject(Rejection::UnknownHistoryIndex(index));
        }
        self.current = index;
        self.advance_epoch();
        debug!("jumped to move #{}, status {:?}", index, self.status());
        Transition::Applied
    }

    /// Advance the countdown by one second. When it reaches zero the timeout
    /// policy picks a cell for the active player; the forced move resets the
    /// countdown like any other move.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.status().is_terminal() {
            return TickOutcome::Ignored;
        }
        match self.countdown.tick() {
            CountdownTick::Running(left) => TickOutcome::Counting(left),
            CountdownTick::Exhausted => TickOutcome::Ignored,
            CountdownTick::Expired => {
                let forced = self.policy.forced_cell(self.board(), rng);
                debug!(
                    "{} ran out of time, timeout policy {:?} chose {:?}",
                    self.active_player(),
                    self.policy,
                    forced
                );
                let forced = forced.filter(|&cell| self.play(cell).is_applied());
                TickOutcome::Expired { forced }
            }
        }
    }

    /// Tick only if `epoch` still names the current position.
    pub fn tick_for<R: Rng>(&mut self, epoch: u64, rng: &mut R) -> TickOutcome {
        if epoch != self.epoch {
            debug!("dropping stale tick for epoch {} (now {})", epoch, self.epoch);
            return TickOutcome::Ignored;
        }
        self.tick(rng)
    }

    /// Snapshot for renderers.
    pub fn view(&self) -> GameView {
        let board = *self.board();
        let status = self.status();
        let active = self.active_player();
        let cells = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &mark)| CellView {
                index,
                mark,
                on_select: (mark.is_none() && !status.is_terminal())
                    .then_some(Command::Play(index)),
            })
            .collect();
        let history = (0..self.history.len())
            .map(|i| HistoryEntry::new(i, i == self.current))
            .collect();
        GameView {
            board,
            cells,
            status,
            status_text: status_text(status, active),
            active_player: active,
            remaining_seconds: self.countdown.remaining(),
            winning_line: rules::winning_line(&board).map(|(line, _)| line),
            history,
            current_index: self.current,
        }
    }

    fn advance_epoch(&mut self) {
        self.countdown.reset();
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn reject(&self, why: Rejection) -> Transition {
        debug!("ignored transition: {}", why);
        Transition::Ignored(why)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
