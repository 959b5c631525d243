use core::fmt;

use rand::Rng;

use super::board::Board;

pub const BOARD_SIDE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Seconds each player gets per turn unless configured otherwise.
pub const TURN_SECONDS: u32 = 30;

/// What happens when the active player's countdown runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum TimeoutPolicy {
    /// Place the active mark on a uniformly random empty cell.
    #[default]
    Random,
    /// Place the active mark on the lowest-index empty cell.
    FirstEmpty,
    /// Leave the position alone; the countdown rests at zero.
    Idle,
}

impl TimeoutPolicy {
    /// Cell the policy would fill on `board`, or `None` when it makes no move
    /// (idle policy, or no empty cell left).
    pub fn forced_cell<R: Rng>(self, board: &Board, rng: &mut R) -> Option<usize> {
        match self {
            TimeoutPolicy::Random => {
                let open = board.empty_cells().count();
                if open == 0 {
                    return None;
                }
                board.empty_cells().nth(rng.random_range(0..open))
            }
            TimeoutPolicy::FirstEmpty => board.empty_cells().next(),
            TimeoutPolicy::Idle => None,
        }
    }
}

/// Per-game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    turn_seconds: u32,
    timeout_policy: TimeoutPolicy,
}

impl GameConfig {
    /// Build a validated configuration. A turn must last at least one second.
    pub fn new(turn_seconds: u32, timeout_policy: TimeoutPolicy) -> Result<Self, ConfigError> {
        if turn_seconds == 0 {
            return Err(ConfigError::ZeroTurnSeconds);
        }
        Ok(Self {
            turn_seconds,
            timeout_policy,
        })
    }

    pub fn turn_seconds(&self) -> u32 {
        self.turn_seconds
    }

    pub fn timeout_policy(&self) -> TimeoutPolicy {
        self.timeout_policy
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: TURN_SECONDS,
            timeout_policy: TimeoutPolicy::default(),
        }
    }
}

/// Errors returned when building a [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroTurnSeconds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTurnSeconds => write!(f, "Turn length must be at least one second"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
