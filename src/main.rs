#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use hidden_fleet::{
    init_logging, run_session, write_board_dump, GameConfig, StandardBoard, StandardGame,
    DEFAULT_DUMP_PATH, DEFAULT_FLEET, MAX_PLACEMENT_ATTEMPTS, QUIT_TOKEN,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

/// Find the hidden fleet on a 10x10 board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_FLEET,
        help = "Ship lengths to place, in order (e.g., --fleet 4,3,3,2)"
    )]
    fleet: Vec<usize>,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS, help = "Random draws allowed per ship")]
    max_attempts: usize,
    #[arg(long, default_value = DEFAULT_DUMP_PATH, help = "File the hidden board is written to")]
    dump: PathBuf,
    #[arg(long, help = "Do not write the board dump file")]
    no_dump: bool,
}

#[cfg(feature = "std")]
impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            seed: cli.seed,
            fleet: cli.fleet,
            max_attempts: cli.max_attempts,
            dump_path: if cli.no_dump { None } else { Some(cli.dump) },
            quit_token: QUIT_TOKEN.into(),
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let config = GameConfig::from(Cli::parse());

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("board seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let board = StandardBoard::generate(&config.fleet, &mut rng, config.max_attempts)
        .map_err(|e| anyhow::anyhow!("could not generate board (seed {}): {}", seed, e))?;

    if let Some(path) = &config.dump_path {
        if let Err(e) = write_board_dump(path, &board) {
            log::warn!("could not write board dump to {}: {}", path.display(), e);
        }
    }

    let mut engine = StandardGame::new(board);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut engine, &config.quit_token, stdin.lock(), stdout.lock())?;
    Ok(())
}
