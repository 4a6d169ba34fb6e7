use guessing_game::{
    draw_secret, make_rng, parse_guess, play_round, CapturedOutput, ConsoleError, Feedback,
    GuessError, Range, Round, ScriptedInput, ScriptedSecrets, DEFAULT_RANGE,
};
use proptest::prelude::*;

#[test]
fn scenario_fixed_secret_three_guesses() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 42);
    let mut input = ScriptedInput::new(["50", "10", "42"]);
    let mut output = CapturedOutput::new();

    let outcome = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap();

    assert_eq!(outcome.secret, 42);
    assert_eq!(outcome.attempts, 3);
    assert_eq!(input.remaining(), 0);
    assert!(output.contains("Too high! Try a number between 1 and 100."));
    assert!(output.contains("Too low! Try a number between 1 and 100."));
    assert!(output.contains("Correct! You guessed the number 42 in 3 attempts!"));
}

#[test]
fn invalid_guesses_do_not_count() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 7);
    let mut input = ScriptedInput::new(["abc", "", "6", "7.0", " 7 "]);
    let mut output = CapturedOutput::new();

    let outcome = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap();

    assert_eq!(outcome.attempts, 2);
    assert_eq!(output.matching("Invalid input").count(), 3);
}

#[test]
fn first_guess_success_is_singular() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 1);
    let mut input = ScriptedInput::new(["1"]);
    let mut output = CapturedOutput::new();

    let outcome = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap();
    assert_eq!(outcome.attempts, 1);
    assert!(output.contains("in 1 attempt!"));
}

#[test]
fn feedback_names_custom_bounds() {
    let range = Range::new(1, 50).unwrap();
    let mut secrets = ScriptedSecrets::fixed_secret(range, 20);
    let mut input = ScriptedInput::new(["99", "20"]);
    let mut output = CapturedOutput::new();

    play_round(range, &mut secrets, &mut input, &mut output).unwrap();
    assert!(output.contains("between 1 and 50"));
    assert!(output.contains("Too high! Try a number between 1 and 50."));
}

#[test]
fn closed_input_ends_round_with_error() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 42);
    let mut input = ScriptedInput::new(["1", "2"]);
    let mut output = CapturedOutput::new();

    let err = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap_err();
    assert!(matches!(err, ConsoleError::Closed));
}

#[test]
fn finished_round_stops_counting() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 10);
    let mut round = Round::new(DEFAULT_RANGE, &mut secrets);
    assert_eq!(round.submit(9), Feedback::TooLow);
    assert_eq!(round.submit(10), Feedback::Correct { secret: 10, attempts: 2 });
    assert!(round.is_finished());
    assert_eq!(round.submit(3), Feedback::Correct { secret: 10, attempts: 2 });
    assert_eq!(round.attempts(), 2);
}

#[test]
fn out_of_range_guess_still_counts() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 50);
    let mut round = Round::new(DEFAULT_RANGE, &mut secrets);
    assert!(!round.contains(-5));
    assert!(!round.contains(1000));
    assert!(round.contains(1) && round.contains(100));
    assert_eq!(round.submit(-5), Feedback::TooLow);
    assert_eq!(round.submit(1000), Feedback::TooHigh);
    assert_eq!(round.attempts(), 2);
    assert!(round.outcome().is_none());
}

#[test]
fn debug_output_hides_secret() {
    let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 73);
    let round = Round::new(DEFAULT_RANGE, &mut secrets);
    let dbg = format!("{:?}", round);
    assert!(dbg.contains("<hidden>"));
    assert!(!dbg.contains("73"));
}

#[test]
fn guess_parsing_trims_and_rejects_garbage() {
    assert_eq!(parse_guess(" -12 "), Ok(-12));
    assert_eq!(parse_guess("+8"), Ok(8));
    assert_eq!(parse_guess("ten"), Err(GuessError::NotAnInteger("ten".to_string())));
    assert!(parse_guess("99999999999999999999").is_err());
}

#[test]
fn secret_distribution_is_uniform() {
    let range = Range::new(1, 10).unwrap();
    let mut rng = make_rng(Some(2024));
    let mut counts = [0u32; 10];
    let trials = 20_000;
    for _ in 0..trials {
        let secret = draw_secret(&mut rng, range);
        counts[(secret - 1) as usize] += 1;
    }
    let expected = trials / 10;
    for (i, &c) in counts.iter().enumerate() {
        let diff = (c as i64 - expected as i64).abs();
        assert!(diff < expected as i64 / 10, "bucket {} drew {} times", i + 1, c);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn secret_always_within_range(seed in any::<u64>(), min in -1_000_000i64..1_000_000, gap in 1..1_000_000i64) {
        let range = Range::new(min, min + gap).unwrap();
        let mut rng = make_rng(Some(seed));
        for _ in 0..16 {
            prop_assert!(range.contains(draw_secret(&mut rng, range)));
        }
    }

    #[test]
    fn one_below_then_secret_takes_two(offset in 1..99u64) {
        let secret = 1 + offset as i64;
        let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, secret);
        let mut input = ScriptedInput::new([(secret - 1).to_string(), secret.to_string()]);
        let mut output = CapturedOutput::new();
        let outcome = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap();
        prop_assert_eq!(outcome.attempts, 2);
    }

    #[test]
    fn attempts_count_only_valid_guesses(
        wrong in prop::collection::vec(prop_oneof![Just(None), (1..=100i64).prop_map(Some)], 0..20),
    ) {
        // 0 is outside the default range, so it can never be the secret
        let mut secrets = ScriptedSecrets::fixed_secret(DEFAULT_RANGE, 100);
        let mut lines: Vec<String> = wrong
            .iter()
            .map(|g| match g {
                Some(n) if *n != 100 => n.to_string(),
                Some(_) => "0".to_string(),
                None => "x".to_string(),
            })
            .collect();
        let valid = wrong.iter().filter(|g| g.is_some()).count() as u32;
        lines.push("100".to_string());
        let mut input = ScriptedInput::new(lines);
        let mut output = CapturedOutput::new();
        let outcome = play_round(DEFAULT_RANGE, &mut secrets, &mut input, &mut output).unwrap();
        prop_assert_eq!(outcome.attempts, valid + 1);
        prop_assert_eq!(input.remaining(), 0);
    }
}
