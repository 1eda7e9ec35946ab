use clap::Parser;
use seabattle::{init_logging, AiPlayer, Game, GameConfig, Side, DEFAULT_BOARD_SIZE};
use serde_json::json;

/// Play one automated-vs-automated game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = GameConfig::new(args.size)?.with_seed(Some(args.seed));

    let mut game = Game::new(
        &config,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        config.rng(),
    )?;
    let winner = game.run()?;

    let result = json!({
        "seed": args.seed,
        "size": config.board_size(),
        "winner": winner,
        "turns": game.turns(),
        "user": {"ships_sunk": game.board(Side::User).sunk_count()},
        "computer": {"ships_sunk": game.board(Side::Computer).sunk_count()},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
