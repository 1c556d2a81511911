use std::thread;

use showdown_engine::cards::{Card, parse_cards};
use showdown_engine::deck::{Dealer, Deck};
use showdown_engine::errors::EvalError;
use showdown_engine::evaluator::{evaluate, evaluate_many, showdown};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn hole(s: &str) -> [Card; 2] {
    let v = cards(s);
    [v[0], v[1]]
}

#[test]
fn best_seat_wins() {
    let board = cards("2c 7d 9h Js Kd");
    let winners = showdown(&board, &[hole("Kh Qc"), hole("Ah As"), hole("3s 4s")]).unwrap();
    assert_eq!(winners, vec![1]);
}

#[test]
fn equal_hands_split() {
    let board = cards("Ts Js Qs Ks As");
    let winners = showdown(&board, &[hole("2c 3d"), hole("4h 5c")]).unwrap();
    assert_eq!(winners, vec![0, 1]);
}

#[test]
fn shared_cards_across_seats_are_rejected() {
    let board = cards("2c 7d 9h Js Kd");
    let err = showdown(&board, &[hole("Ah As"), hole("Ah Qd")]).unwrap_err();
    assert_eq!(err, EvalError::DuplicateCard(cards("Ah")[0]));
}

#[test]
fn no_seats_means_no_winners() {
    let board = cards("2c 7d 9h Js Kd");
    assert_eq!(showdown(&board, &[]).unwrap(), Vec::<usize>::new());
}

fn dealt_sets(seed: u64, players: usize) -> Vec<Vec<Card>> {
    let deck = Deck::new_with_seed(seed).deal();
    let board = &deck[players * 2..players * 2 + 5];
    (0..players)
        .map(|p| {
            let mut source = deck[p * 2..p * 2 + 2].to_vec();
            source.extend_from_slice(board);
            source
        })
        .collect()
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let sets = dealt_sets(2024, 8);
    let sequential = evaluate_many(&sets).unwrap();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = sets
            .iter()
            .map(|set| scope.spawn(move || evaluate(set)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("evaluation thread panicked"))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn evaluate_many_reports_the_first_bad_set() {
    let sets = vec![cards("Ah Kh"), cards("Qd")];
    assert_eq!(
        evaluate_many(&sets),
        Err(EvalError::NotEnoughCards {
            actual: 1,
            minimum: 2
        })
    );
}
