#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use broadside::{
    cli::{parse_coord, parse_placement, render_heat_map, render_snapshot},
    init_logging, search_weights, Coord, FireOutcome, GameEngine, GameStatus, Orientation,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;

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
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's search weights for your board each turn")]
        heat_map: bool,
    },
    /// Deploy a random fleet and fire at every enemy cell in order.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn engine_for(seed: Option<u64>) -> GameEngine<SmallRng> {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            GameEngine::seeded(s)
        }
        None => GameEngine::from_entropy(),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, heat_map } => play(engine_for(seed), heat_map),
        Commands::Auto { seed } => {
            let mut engine = engine_for(seed);
            engine.deploy_random().map_err(|e| anyhow::anyhow!(e))?;
            for at in Coord::all() {
                if matches!(engine.snapshot().status, GameStatus::Finished(_)) {
                    break;
                }
                engine.fire(at);
            }
            print!("{}", render_snapshot(&engine.snapshot()));
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn play(mut engine: GameEngine<SmallRng>, heat_map: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut orientation = Orientation::Horizontal;

    loop {
        let snapshot = engine.snapshot();
        println!();
        print!("{}", render_snapshot(&snapshot));
        match snapshot.status {
            GameStatus::Setup => {
                println!("    ORIENTATION: {:?}", orientation);
                print!("Cell [h|v], 'r' to rotate, 'auto' to deploy randomly, 'quit': ");
            }
            GameStatus::Playing => {
                if heat_map {
                    let state = engine.state();
                    let targeting = state.targeting();
                    let weights = search_weights(&state.player().shots, targeting.is_hunting());
                    print!("{}", render_heat_map(&weights));
                    if let Some(last) = targeting.last_hit() {
                        match targeting.direction() {
                            Some(dir) => println!("Enemy is working {:?} from {}", dir, last),
                            None => println!("Enemy is probing around {}", last),
                        }
                    }
                }
                print!("Target cell (e.g. A5), 'reset' or 'quit': ");
            }
            GameStatus::Finished(_) => print!("'reset' for a new game or 'quit': "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?.trim().to_ascii_lowercase();
        match input.as_str() {
            "quit" | "q" => return Ok(()),
            "reset" => {
                engine.reset();
                continue;
            }
            _ => {}
        }

        match snapshot.status {
            GameStatus::Setup => match input.as_str() {
                "r" => orientation = orientation.toggled(),
                "auto" => engine.deploy_random().map_err(|e| anyhow::anyhow!(e))?,
                _ => match parse_placement(&input, orientation) {
                    Ok((at, o)) => {
                        orientation = o;
                        engine.place_ship(at, o);
                    }
                    Err(e) => println!("{}", e),
                },
            },
            GameStatus::Playing => match parse_coord(&input) {
                Ok(at) => {
                    if let FireOutcome::Fired(round) = engine.fire(at) {
                        if let Some((ai_at, _)) = round.ai {
                            println!("Enemy fired at {}", ai_at);
                        }
                    } else {
                        println!("{} was already targeted", at);
                    }
                }
                Err(e) => println!("{}", e),
            },
            GameStatus::Finished(_) => {}
        }
    }
}
