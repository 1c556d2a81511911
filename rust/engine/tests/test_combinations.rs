use std::collections::HashSet;

use showdown_engine::cards::{Card, full_deck};
use showdown_engine::combinations::{combinations, for_each_combination};
use showdown_engine::errors::EvalError;

fn four_cards() -> Vec<Card> {
    full_deck().into_iter().take(4).collect()
}

fn collect(items: &[Card], k: usize) -> HashSet<Vec<Card>> {
    let mut seen = HashSet::new();
    let stopped = for_each_combination(items, k, |combo| {
        assert!(seen.insert(combo.to_vec()), "combination visited twice");
        false
    })
    .expect("valid size");
    assert!(!stopped);
    seen
}

fn expected(items: &[Card], picks: &[&[usize]]) -> HashSet<Vec<Card>> {
    picks
        .iter()
        .map(|p| p.iter().map(|&i| items[i]).collect())
        .collect()
}

#[test]
fn four_items_taken_one_at_a_time() {
    let c = four_cards();
    assert_eq!(collect(&c, 1), expected(&c, &[&[0], &[1], &[2], &[3]]));
}

#[test]
fn four_items_taken_two_at_a_time() {
    let c = four_cards();
    assert_eq!(
        collect(&c, 2),
        expected(
            &c,
            &[&[0, 1], &[0, 2], &[0, 3], &[1, 2], &[1, 3], &[2, 3]]
        )
    );
}

#[test]
fn four_items_taken_three_at_a_time() {
    let c = four_cards();
    assert_eq!(
        collect(&c, 3),
        expected(&c, &[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]])
    );
}

#[test]
fn four_items_taken_four_at_a_time() {
    let c = four_cards();
    assert_eq!(collect(&c, 4), expected(&c, &[&[0, 1, 2, 3]]));
}

#[test]
fn visitor_stop_unwinds_immediately() {
    let c = four_cards();
    for limit in [2usize, 3] {
        let mut seen = Vec::new();
        let stopped = for_each_combination(&c, 1, |combo| {
            seen.push(combo[0]);
            seen.len() >= limit
        })
        .unwrap();
        assert!(stopped);
        assert_eq!(seen, c[..limit].to_vec());
    }
}

#[test]
fn stop_from_a_deep_step_also_unwinds() {
    let items: Vec<u32> = (0..7).collect();
    let mut visits = 0;
    let stopped = for_each_combination(&items, 5, |combo| {
        visits += 1;
        combo == [0, 1, 2, 4, 6]
    })
    .unwrap();
    assert!(stopped);
    // [0,1,2,3,4] [0,1,2,3,5] [0,1,2,3,6] [0,1,2,4,5] [0,1,2,4,6]
    assert_eq!(visits, 5);
}

#[test]
fn selections_preserve_source_order() {
    let items = ['e', 'a', 'd', 'b'];
    let all: Vec<Vec<char>> = combinations(&items, 2).unwrap().collect();
    assert_eq!(all[0], vec!['e', 'a']);
    assert_eq!(all[5], vec!['d', 'b']);
}

#[test]
fn iterator_counts_match_binomials() {
    let deck = full_deck();
    for (n, k, count) in [(7, 2, 21), (7, 3, 35), (7, 4, 35), (7, 5, 21), (5, 5, 1)] {
        assert_eq!(combinations(&deck[..n], k).unwrap().count(), count);
    }
}

#[test]
fn more_slots_than_items_is_rejected() {
    let c = four_cards();
    assert_eq!(
        combinations(&c, 5).unwrap_err(),
        EvalError::CombinationSizeTooLarge { k: 5, n: 4 }
    );
    assert_eq!(
        for_each_combination(&c, 0, |_| false).unwrap_err(),
        EvalError::CombinationSizeZero
    );
}
