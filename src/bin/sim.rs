//! Plays one game where every move is forced by the turn timer running out.
//!
//! Usage: `sim <seed>`. Prints a single JSON object with the outcome.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;
    use tictactoe::{GameConfig, GameEngine, GameStatus, TickOutcome, TimeoutPolicy};

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::new(1, TimeoutPolicy::Random)?;
    let mut engine = GameEngine::with_config(config);
    let mut forced = Vec::new();
    while !engine.status().is_terminal() {
        match engine.tick(&mut rng) {
            TickOutcome::Expired { forced: Some(cell) } => forced.push(cell),
            TickOutcome::Expired { forced: None } | TickOutcome::Ignored => {
                anyhow::bail!("timeout at move #{} made no move", engine.current_index())
            }
            TickOutcome::Counting(_) => {}
        }
    }

    let winner = match engine.status() {
        GameStatus::Won(mark) => Some(mark.to_string()),
        _ => None,
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "draw": engine.status() == GameStatus::Draw,
        "moves": forced,
        "board": engine.board().to_string(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
