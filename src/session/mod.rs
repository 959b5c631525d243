//! Event loop driving a [`GameEngine`] from player input and a turn timer.
//!
//! The session owns the only game state. It races the input source against
//! the tick channel, applies whatever arrives first, and notifies every
//! registered [`Renderer`] after each change. The turn timer is restarted
//! whenever the engine epoch moves, and stopped while the game is over, so a
//! tick scheduled for one position never lands on another.

pub mod input;
pub mod timer;

use log::{debug, info};
use rand::rngs::SmallRng;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::Duration;

use crate::core::{Command, GameEngine, GameView, TickOutcome};
use input::InputSource;
use timer::{Tick, TurnTimer};

/// Observer notified with a fresh [`GameView`] whenever the game changes.
pub trait Renderer: Send {
    fn render(&mut self, view: &GameView) -> anyhow::Result<()>;
}

pub struct Session<I: InputSource> {
    engine: GameEngine,
    input: I,
    renderers: Vec<Box<dyn Renderer>>,
    rng: SmallRng,
    tick_period: Duration,
    timer: Option<TurnTimer>,
    tick_tx: UnboundedSender<Tick>,
    tick_rx: UnboundedReceiver<Tick>,
}

impl<I: InputSource> Session<I> {
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

    pub fn new(engine: GameEngine, input: I, rng: SmallRng) -> Self {
        let (tick_tx, tick_rx) = unbounded_channel();
        Self {
            engine,
            input,
            renderers: Vec::new(),
            rng,
            tick_period: Self::DEFAULT_TICK_PERIOD,
            timer: None,
            tick_tx,
            tick_rx,
        }
    }

    /// Length of one countdown second. Shorter periods speed up demos and tests.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn with_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run until the player quits or input ends. Returns the final engine.
    pub async fn run(mut self) -> anyhow::Result<GameEngine> {
        info!(
            "session started: {}s turns, timeout policy {:?}",
            self.engine.turn_seconds(),
            self.engine.timeout_policy()
        );
        self.sync_timer();
        self.publish()?;

        loop {
            let changed = tokio::select! {
                cmd = self.input.next_command() => match cmd? {
                    None => {
                        info!("input closed, ending session");
                        break;
                    }
                    Some(Command::Quit) => {
                        info!("player quit");
                        break;
                    }
                    Some(Command::Play(cell)) => self.engine.play(cell).is_applied(),
                    Some(Command::Jump(index)) => self.engine.jump_to(index).is_applied(),
                },
                Some(tick) = self.tick_rx.recv() => {
                    match self.engine.tick_for(tick.epoch, &mut self.rng) {
                        TickOutcome::Ignored => false,
                        TickOutcome::Counting(_) => true,
                        TickOutcome::Expired { forced } => {
                            info!("turn timed out, forced move {:?}", forced);
                            true
                        }
                    }
                }
            };
            self.sync_timer();
            if changed {
                self.publish()?;
            }
        }

        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        info!(
            "session ended at move #{} with status {:?}",
            self.engine.current_index(),
            self.engine.status()
        );
        Ok(self.engine)
    }

    /// Make the running timer match the engine: one timer for the current
    /// epoch while the game is in progress, none once it is over.
    fn sync_timer(&mut self) {
        let wanted = (!self.engine.status().is_terminal()).then(|| self.engine.epoch());
        let running = self.timer.as_ref().map(TurnTimer::epoch);
        if wanted == running {
            return;
        }
        if let Some(old) = self.timer.take() {
            old.cancel();
        }
        if let Some(epoch) = wanted {
            debug!("starting turn timer for epoch {}", epoch);
            self.timer = Some(TurnTimer::start(
                epoch,
                self.tick_period,
                self.tick_tx.clone(),
            ));
        }
    }

    fn publish(&mut self) -> anyhow::Result<()> {
        let view = self.engine.view();
        for renderer in self.renderers.iter_mut() {
            renderer.render(&view)?;
        }
        Ok(())
    }
}
