use std::path::PathBuf;

use clap::Parser;
use gomoku_console::{play_game, FirstMark, GameConfig, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows and columns of the board, overrides the config file
    #[arg(short, long)]
    size: Option<usize>,

    /// How many marks in a row win the game, overrides the config file
    #[arg(short, long)]
    win_length: Option<usize>,

    /// Which player moves first, overrides the config file
    #[arg(short, long, value_enum)]
    first: Option<FirstMark>,

    /// RNG seed for picking the first player randomly
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(win_length) = args.win_length {
        config.win_length = win_length;
    }
    if let Some(first) = args.first {
        config.first = first;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let first = config.first.resolve(&mut rng);
    info!(
        size = config.size,
        win_length = config.win_length,
        %first,
        seed,
        "Starting game"
    );

    let mut session = Session::new(&config, first)?;
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let result = play_game(&mut session, stdin, &mut stdout)?;
    debug!(?result, "Game finished");

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
