use log::trace;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// One timer pulse, tagged with the engine epoch it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub epoch: u64,
}

/// Cancellable per-turn timer.
///
/// Runs a spawned task that sends a [`Tick`] every `period` until it is
/// cancelled, dropped, or the receiving side goes away. The first pulse fires
/// one full period after [`TurnTimer::start`].
pub struct TurnTimer {
    epoch: u64,
    handle: JoinHandle<()>,
}

impl TurnTimer {
    pub fn start(epoch: u64, period: Duration, ticks: UnboundedSender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut pulse = interval(period);
            pulse.set_missed_tick_behavior(MissedTickBehavior::Delay);
            pulse.tick().await; // First tick completes immediately, skip it
            loop {
                pulse.tick().await;
                trace!("timer pulse for epoch {}", epoch);
                if ticks.send(Tick { epoch }).is_err() {
                    break;
                }
            }
        });
        Self { epoch, handle }
    }

    /// Epoch this timer reports ticks for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
