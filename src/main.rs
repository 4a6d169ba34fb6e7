use clap::Parser;
use guessing_game::{
    init_logging, make_rng, parse_range, run_session, ConsoleError, GameConfig, Range,
    StdinSource, StdoutSink, DEFAULT_RANGE,
};

#[derive(Parser)]
#[command(author, version, about = "Guess the secret number", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_parser = parse_default_range, help = "Default interval offered each round (e.g., --range 1-100)")]
    range: Option<Range>,
}

fn parse_default_range(raw: &str) -> Result<Range, String> {
    match parse_range(raw) {
        Ok(Some(range)) => Ok(range),
        Ok(None) => Err("interval must not be empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig {
        default_range: cli.range.unwrap_or(DEFAULT_RANGE),
        seed: cli.seed,
    };
    if let Some(s) = config.seed {
        log::info!("using fixed seed {}", s);
    }

    let mut rng = make_rng(config.seed);
    let mut input = StdinSource::stdin();
    let mut output = StdoutSink::stdout();

    match run_session(&config, &mut rng, &mut input, &mut output) {
        Ok(outcomes) => {
            log::debug!("played {} round(s)", outcomes.len());
            Ok(())
        }
        Err(ConsoleError::Closed) => {
            log::warn!("input closed before the round finished");
            eprintln!("\nInput closed. Goodbye!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
