#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging_with, Coord, GameEngine, GameStatus, Winner};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use serde_json::json;

/// Play one scripted game: random deployment, then row-major fire.
#[cfg(feature = "std")]
fn run_game(seed: u64) -> anyhow::Result<(Option<Winner>, serde_json::Value)> {
    let mut engine = GameEngine::seeded(seed);
    engine.deploy_random().map_err(|e| anyhow::anyhow!(e))?;
    let mut rounds = 0usize;
    for at in Coord::all() {
        if matches!(engine.state().status(), GameStatus::Finished(_)) {
            break;
        }
        if engine.fire(at).accepted() {
            rounds += 1;
        }
    }
    let snapshot = engine.snapshot();
    let winner = match snapshot.status {
        GameStatus::Finished(winner) => Some(winner),
        _ => None,
    };
    let result = json!({
        "seed": seed,
        "rounds": rounds,
        "status": snapshot.status,
        "player_score": snapshot.player_score,
        "ai_score": snapshot.ai_score,
    });
    Ok((winner, result))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut results = Vec::new();
    let mut player_wins = 0usize;
    let mut ai_wins = 0usize;
    for i in 0..games {
        let (winner, result) = run_game(seed.wrapping_add(i))?;
        match winner {
            Some(Winner::Player) => player_wins += 1,
            Some(Winner::Ai) => ai_wins += 1,
            None => {}
        }
        results.push(result);
    }

    let summary = json!({
        "games": games,
        "ai_wins": ai_wins,
        "player_wins": player_wins,
        "results": results,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
