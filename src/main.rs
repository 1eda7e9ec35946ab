use std::io;

use clap::Parser;
use seabattle::{
    init_logging, run_console, AiPlayer, CliPlayer, Game, GameConfig, DEFAULT_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    /// Side length of both grids.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig::new(cli.size)?.with_seed(cli.seed);
    if let Some(s) = config.seed() {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut game = Game::new(
        &config,
        Box::new(CliPlayer::stdio()),
        Box::new(AiPlayer::new()),
        config.rng(),
    )?;
    let mut out = io::stdout();
    if let Err(e) = run_console(&mut game, &mut out) {
        eprintln!("Game ended with an error: {}", e);
    }
    Ok(())
}
