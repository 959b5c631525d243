#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::prelude::*;
#[cfg(feature = "std")]
use tictactoe::{init_logging, JsonRenderer, TURN_SECONDS};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal. Type `help` once it starts.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible timeouts (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = TURN_SECONDS, value_parser = clap::value_parser!(u32).range(1..))]
        turn_seconds: u32,
        #[arg(long, value_enum, default_value_t = TimeoutPolicy::Random)]
        on_timeout: TimeoutPolicy,
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,
        #[arg(long, help = "Emit each view as a JSON line instead of drawing the board")]
        json: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            turn_seconds,
            on_timeout,
            tick_ms,
            json,
        } => {
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (timeouts will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig::new(turn_seconds, on_timeout)?;
            let engine = GameEngine::with_config(config);

            let session = Session::new(engine, StdinInput::new(), rng)
                .with_tick_period(Duration::from_millis(tick_ms));
            let session = if json {
                session.with_renderer(JsonRenderer::stdout())
            } else {
                println!("Tic-tac-toe: type a cell (1-9 or a1-c3), `jump N`, `help` or `quit`.");
                session.with_renderer(TerminalRenderer::stdout())
            };

            let engine = session.run().await?;
            if !json {
                match engine.status() {
                    GameStatus::Won(mark) => println!("{} wins after {} moves.", mark, engine.current_index()),
                    GameStatus::Draw => println!("It's a draw."),
                    GameStatus::InProgress => println!("Game left unfinished at move #{}.", engine.current_index()),
                }
            }
        }
    }
    Ok(())
}
