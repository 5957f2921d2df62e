//! End-to-end round scenarios through the public API

use personadle::core::{LetterStatus, Persona, evaluate_guess, evaluate_letter};
use personadle::game::{GameStatus, MAX_ATTEMPTS, Round, SHORT_NAME_THRESHOLD};
use personadle::roster::Roster;
use personadle::solver::{ConsistentStrategy, Solver};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn round_for(name: &str) -> Round {
    Round::new(Persona {
        name: name.to_string(),
        ..Persona::fallback()
    })
}

fn revealed_count(round: &Round) -> usize {
    round.revealed_positions().len()
}

#[test]
fn near_miss_feedback() {
    use LetterStatus::{Absent, Correct};
    assert_eq!(
        evaluate_guess("Arsine", "Arsene"),
        vec![Correct, Correct, Correct, Absent, Correct, Correct]
    );
}

#[test]
fn evaluate_letter_is_pure() {
    for _ in 0..3 {
        assert_eq!(evaluate_letter('s', 2, "Arsene"), LetterStatus::Correct);
        assert_eq!(evaluate_letter('e', 0, "Arsene"), LetterStatus::Present);
        assert_eq!(evaluate_letter('x', 0, "Arsene"), LetterStatus::Absent);
    }
}

#[test]
fn six_misses_lose() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut round = round_for("Arsene");
    for _ in 0..MAX_ATTEMPTS {
        round = round.submit_guess("Arsine", &mut rng);
    }
    assert_eq!(round.status(), GameStatus::Lost);
    assert_eq!(round.attempts(), 6);
}

#[test]
fn uppercase_guess_wins() {
    let round = round_for("Arsene").submit_guess("ARSENE", &mut StdRng::seed_from_u64(1));
    assert_eq!(round.status(), GameStatus::Won);
    assert_eq!(round.attempts(), 1);
}

#[test]
fn spaced_name_wins_in_any_case() {
    let mut rng = StdRng::seed_from_u64(1);
    for guess in ["Jack Frost", "jack frost", "JACK FROST"] {
        let round = round_for("Jack Frost").submit_guess(guess, &mut rng);
        assert_eq!(round.status(), GameStatus::Won, "{guess}");
    }
}

#[test]
fn wrong_length_never_changes_state() {
    let mut rng = StdRng::seed_from_u64(1);
    let round = round_for("Arsene").submit_guess("Arsine", &mut rng);

    for bad in ["", "Ars", "Arsenes", "Arsene Lupin"] {
        let next = round.submit_guess(bad, &mut rng);
        assert_eq!(next.attempts(), round.attempts());
        assert_eq!(next.guesses(), round.guesses());
        assert_eq!(next.status(), round.status());
        assert_eq!(next.hint(), round.hint());
    }
}

#[test]
fn long_names_reveal_one_position_per_guess() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut round = round_for("Kurama Tengu");
        let mut guesses = 0;

        while !round.is_finished() {
            let before = revealed_count(&round);
            round = round.submit_guess("zzzzzzzzzzzz", &mut rng);
            guesses += 1;
            assert_eq!(revealed_count(&round), before + 1, "seed {seed}");
            assert_eq!(round.guesses().len(), round.attempts());
        }
        assert_eq!(guesses, MAX_ATTEMPTS);
    }
}

#[test]
fn short_names_reveal_on_even_attempts_only() {
    assert!("Jack".len() < SHORT_NAME_THRESHOLD);
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut round = round_for("Jack");

        for attempt in 1..=MAX_ATTEMPTS {
            let before = revealed_count(&round);
            round = round.submit_guess("zzzz", &mut rng);
            let expected = if attempt % 2 == 0 { before + 1 } else { before };
            assert_eq!(revealed_count(&round), expected.min(4), "seed {seed} attempt {attempt}");
        }
    }
}

#[test]
fn revealed_hint_letters_match_target() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut round = round_for("Arsene");
    for _ in 0..5 {
        round = round.submit_guess("zzzzzz", &mut rng);
    }

    let target: Vec<char> = "Arsene".chars().collect();
    for (i, c) in round.hint().chars().enumerate() {
        if round.revealed_positions().contains(&i) {
            assert_eq!(c, target[i]);
        } else {
            assert_eq!(c, '_');
        }
    }
    assert_eq!(revealed_count(&round), 5);
}

#[test]
fn terminal_status_is_absorbing() {
    let mut rng = StdRng::seed_from_u64(3);
    let won = round_for("Pixie").submit_guess("pixie", &mut rng);
    let after = won.submit_guess("Pixel", &mut rng).type_char('a');
    assert_eq!(after.status(), GameStatus::Won);
    assert_eq!(after.attempts(), 1);
    assert_eq!(after.current_guess(), "");
}

#[test]
fn lost_status_is_absorbing() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut lost = round_for("Pixie");
    for _ in 0..MAX_ATTEMPTS {
        lost = lost.submit_guess("Pixel", &mut rng);
    }
    assert_eq!(lost.status(), GameStatus::Lost);

    for guess in ["pixie", "Pixel", "Angel"] {
        let after = lost.submit_guess(guess, &mut rng);
        assert_eq!(after.attempts(), MAX_ATTEMPTS);
        assert_eq!(after.guesses(), lost.guesses());
        assert_eq!(after.status(), GameStatus::Lost);
        assert_eq!(after.hint(), lost.hint());
    }
}

#[test]
fn same_seed_same_round() {
    let roster = Roster::embedded().unwrap();
    let a = Round::random(&roster, &mut StdRng::seed_from_u64(11));
    let b = Round::random(&roster, &mut StdRng::seed_from_u64(11));
    assert_eq!(a.target(), b.target());
}

#[test]
fn solver_plays_embedded_roster_to_completion() {
    let roster = Roster::embedded().unwrap();
    let solver = Solver::new(ConsistentStrategy, &roster);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = Round::random(&roster, &mut rng);
        let round = solver.play_out(round, &mut rng);
        assert!(round.attempts() <= MAX_ATTEMPTS);
        assert_eq!(round.guesses().len(), round.attempts());
        if round.status() == GameStatus::Won {
            let last = round.guesses().last().unwrap();
            assert!(last.eq_ignore_ascii_case(&round.target().name));
        }
    }
}
