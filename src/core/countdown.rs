/// Result of advancing a [`Countdown`] by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Time remains; carries the seconds left.
    Running(u32),
    /// This tick took the countdown from one to zero.
    Expired,
    /// The countdown was already at zero and stays there.
    Exhausted,
}

/// Per-turn countdown, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Restart from the full limit.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }

    pub fn tick(&mut self) -> CountdownTick {
        match self.remaining {
            0 => CountdownTick::Exhausted,
            1 => {
                self.remaining = 0;
                CountdownTick::Expired
            }
            n => {
                self.remaining = n - 1;
                CountdownTick::Running(self.remaining)
            }
        }
    }
}
