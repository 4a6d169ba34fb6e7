use guessing_game::{make_rng, parse_range, Feedback, Range, Round, DEFAULT_RANGE};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    range: Range,
    rounds: usize,
    attempts: Vec<u32>,
    max_attempts: u32,
    mean_attempts: f64,
}

/// Bisect towards the secret, the way a careful player would.
fn play_bisecting(round: &mut Round) -> u32 {
    let (mut lo, mut hi) = (round.range().min(), round.range().max());
    loop {
        // i128 keeps the midpoint exact across the whole i64 domain
        let guess = ((i128::from(lo) + i128::from(hi)) / 2) as i64;
        match round.submit(guess) {
            Feedback::TooLow => lo = guess + 1,
            Feedback::TooHigh => hi = guess - 1,
            Feedback::Correct { attempts, .. } => return attempts,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!(
            "Usage: {} <seed> <rounds> [MIN-MAX]",
            args.first().map_or("sim", String::as_str)
        );
        std::process::exit(2);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: usize = args[2].parse()?;
    let range = match args.get(3) {
        Some(raw) => parse_range(raw)?.unwrap_or(DEFAULT_RANGE),
        None => DEFAULT_RANGE,
    };

    let mut rng = make_rng(Some(seed));
    let attempts: Vec<u32> = (0..rounds)
        .map(|_| play_bisecting(&mut Round::new(range, &mut rng)))
        .collect();

    let max_attempts = attempts.iter().copied().max().unwrap_or(0);
    let mean_attempts = if attempts.is_empty() {
        0.0
    } else {
        attempts.iter().map(|&a| f64::from(a)).sum::<f64>() / attempts.len() as f64
    };

    let summary = Summary {
        seed,
        range,
        rounds,
        attempts,
        max_attempts,
        mean_attempts,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
