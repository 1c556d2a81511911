use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cards::Card;
use crate::combinations::{combinations, for_each_combination};
use crate::errors::EvalError;
use crate::hand::{compare_hands, high_card, predicate_for, Category, Hand};

/// Minimum number of source cards: the two hole cards.
pub const MIN_SOURCE_CARDS: usize = 2;

fn check_source(source: &[Card]) -> Result<(), EvalError> {
    if source.len() < MIN_SOURCE_CARDS {
        return Err(EvalError::NotEnoughCards {
            actual: source.len(),
            minimum: MIN_SOURCE_CARDS,
        });
    }
    let mut seen = HashSet::with_capacity(source.len());
    for &c in source {
        if !seen.insert(c) {
            return Err(EvalError::DuplicateCard(c));
        }
    }
    Ok(())
}

/// Searches `source` for the best-rated combination of one category.
///
/// Returns `Ok(None)` if no combination qualifies. Four of a kind stops at the
/// first match since seven cards can hold only one. Among equally rated
/// matches the first one in enumeration order is kept.
pub fn best_match(source: &[Card], category: Category) -> Result<Option<Hand>, EvalError> {
    check_source(source)?;
    let (Some(k), Some(predicate)) = (category.combination_size(), predicate_for(category)) else {
        return Ok(Some(high_card(source)));
    };

    if category == Category::FourOfAKind {
        let mut found = None;
        for_each_combination(source, k, |combo| {
            found = predicate(combo);
            found.is_some()
        })?;
        return Ok(found);
    }

    let best = combinations(source, k)?
        .filter_map(|combo| predicate(&combo))
        .fold(None, |best: Option<Hand>, h| match best {
            Some(b) if b.rating >= h.rating => Some(b),
            _ => Some(h),
        });
    Ok(best)
}

/// Finds the strongest hand obtainable from `source`.
///
/// The first two cards are the hole cards; any further cards are the board.
/// Categories are tried strongest first and the first one with a match wins.
/// Categories needing more cards than supplied are skipped.
///
/// ```rust
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::evaluator::evaluate;
/// use showdown_engine::hand::Category;
///
/// let source = parse_cards("Qd 9h Qs Ac Qc Tc Qh").unwrap();
/// let hand = evaluate(&source).unwrap();
/// assert_eq!(hand.category, Category::FourOfAKind);
/// ```
pub fn evaluate(source: &[Card]) -> Result<Hand, EvalError> {
    check_source(source)?;

    for category in Category::DESCENDING {
        let Some(k) = category.combination_size() else {
            break;
        };
        if k > source.len() {
            trace!(%category, n = source.len(), "category skipped, not enough cards");
            continue;
        }
        if let Some(hand) = best_match(source, category)? {
            debug!(category = %hand.category, rating = hand.rating, n = source.len(), "hand evaluated");
            return Ok(hand);
        }
        trace!(%category, "no match");
    }

    let hand = high_card(source);
    debug!(category = %hand.category, rating = hand.rating, n = source.len(), "hand evaluated");
    Ok(hand)
}

/// Evaluates independent card sets, failing on the first invalid one.
pub fn evaluate_many(sets: &[Vec<Card>]) -> Result<Vec<Hand>, EvalError> {
    sets.iter().map(|s| evaluate(s)).collect()
}

/// Determines the winning seats for a shared board.
///
/// Each seat's source cards are its hole cards followed by the board. Returns
/// the indices of every seat holding a hand equal to the best one.
pub fn showdown(board: &[Card], holes: &[[Card; 2]]) -> Result<Vec<usize>, EvalError> {
    let all: Vec<Card> = holes.iter().flatten().chain(board).copied().collect();
    check_source(&all)?;

    let mut hands = Vec::with_capacity(holes.len());
    for hole in holes {
        let mut source = hole.to_vec();
        source.extend_from_slice(board);
        hands.push(evaluate(&source)?);
    }

    let Some(best) = hands.iter().max_by(|a, b| compare_hands(a, b)) else {
        return Ok(Vec::new());
    };
    Ok(hands
        .iter()
        .enumerate()
        .filter(|(_, h)| compare_hands(h, best) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn five_card_categories_are_skipped_for_short_sources() {
        let hand = evaluate(&parse_cards("Kh Kd 4s").unwrap()).unwrap();
        assert_eq!(hand.category, Category::Pair);
        let hand = evaluate(&parse_cards("7h 2d").unwrap()).unwrap();
        assert_eq!(hand.category, Category::HighCard);
    }

    #[test]
    fn high_card_search_returns_hole_cards() {
        let source = parse_cards("3h 5d 6s 8d Tc").unwrap();
        let hand = best_match(&source, Category::HighCard).unwrap().unwrap();
        assert_eq!(hand.cards, source[..2].to_vec());
    }

    #[test]
    fn rejects_invalid_sources() {
        assert_eq!(
            evaluate(&parse_cards("Ah").unwrap()),
            Err(EvalError::NotEnoughCards {
                actual: 1,
                minimum: 2
            })
        );
        let dup = parse_cards("Ah Kd Ah").unwrap();
        assert_eq!(evaluate(&dup), Err(EvalError::DuplicateCard(dup[0])));
    }
}
