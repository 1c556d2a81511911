use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::rating::{full_house_rating, rank_bit, rank_mask, ACE_BIT};

/// Poker hand categories, weakest first, so the derived ordering matches strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Categories in the order the evaluator tries them, strongest first.
    pub const DESCENDING: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// Number of cards a qualifying combination holds. `None` for high card,
    /// which is not searched for.
    pub fn combination_size(self) -> Option<usize> {
        match self {
            Category::StraightFlush
            | Category::FullHouse
            | Category::Flush
            | Category::Straight => Some(5),
            Category::FourOfAKind | Category::TwoPair => Some(4),
            Category::ThreeOfAKind => Some(3),
            Category::Pair => Some(2),
            Category::HighCard => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        };
        f.write_str(name)
    }
}

/// The best combination found in a set of source cards.
///
/// `rating` only orders hands of the same category; use [`compare_hands`]
/// to order arbitrary hands.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    /// Cards forming the combination (or the hole cards for a high card hand)
    pub cards: Vec<Card>,
    pub rating: u32,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] rating={}",
            self.category,
            crate::cards::format_cards(&self.cards),
            self.rating
        )
    }
}

/// Orders hands by category, then by rating within the category.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.rating.cmp(&b.rating),
        ord => ord,
    }
}

/// A category test over a single combination of the category's size.
pub type Predicate = fn(&[Card]) -> Option<Hand>;

fn hand(category: Category, cards: Vec<Card>, rating: u32) -> Option<Hand> {
    Some(Hand {
        category,
        cards,
        rating,
    })
}

fn expect_len(combo: &[Card], category: Category) {
    assert_eq!(
        Some(combo.len()),
        category.combination_size(),
        "{category} predicate called with {} cards",
        combo.len()
    );
}

fn same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank == w[1].rank)
}

fn same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

// Expects cards sorted ascending by rank. The wheel arrives as 2-3-4-5-A, so
// the Ace is already last; its bit is dropped so the wheel rates lowest.
fn straight_rating(sorted: &[Card]) -> Option<u32> {
    let consecutive = sorted
        .windows(2)
        .all(|w| w[1].rank.index() == w[0].rank.index() + 1);
    if consecutive {
        return Some(rank_mask(sorted));
    }
    let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank).collect();
    if ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
        return Some(rank_mask(sorted) & !ACE_BIT);
    }
    None
}

pub fn straight_flush(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::StraightFlush);
    let mut cards = combo.to_vec();
    cards.sort();
    if !same_suit(&cards) {
        return None;
    }
    let rating = straight_rating(&cards)?;
    hand(Category::StraightFlush, cards, rating)
}

pub fn four_of_a_kind(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::FourOfAKind);
    if !same_rank(combo) {
        return None;
    }
    hand(Category::FourOfAKind, combo.to_vec(), rank_bit(combo[0].rank))
}

pub fn full_house(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::FullHouse);
    let mut cards = combo.to_vec();
    cards.sort_by_key(|c| c.rank);
    let first = cards[0].rank;
    let last = cards[4].rank;
    if cards[1].rank != first || cards[3].rank != last {
        return None;
    }
    let mid = cards[2].rank;
    let rating = if mid == first && first != last {
        full_house_rating(first, last)
    } else if mid == last && first != last {
        full_house_rating(last, first)
    } else {
        return None;
    };
    hand(Category::FullHouse, cards, rating)
}

pub fn flush(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::Flush);
    if !same_suit(combo) {
        return None;
    }
    hand(Category::Flush, combo.to_vec(), rank_mask(combo))
}

pub fn straight(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::Straight);
    let mut cards = combo.to_vec();
    cards.sort_by_key(|c| c.rank);
    let rating = straight_rating(&cards)?;
    hand(Category::Straight, cards, rating)
}

pub fn three_of_a_kind(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::ThreeOfAKind);
    if !same_rank(combo) {
        return None;
    }
    hand(Category::ThreeOfAKind, combo.to_vec(), rank_bit(combo[0].rank))
}

pub fn two_pair(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::TwoPair);
    let mut cards = combo.to_vec();
    cards.sort_by_key(|c| c.rank);
    let low = cards[0].rank;
    let high = cards[2].rank;
    if cards[1].rank != low || cards[3].rank != high || low == high {
        return None;
    }
    hand(Category::TwoPair, cards, rank_bit(low) | rank_bit(high))
}

pub fn pair(combo: &[Card]) -> Option<Hand> {
    expect_len(combo, Category::Pair);
    if combo[0].rank != combo[1].rank {
        return None;
    }
    hand(Category::Pair, combo.to_vec(), rank_bit(combo[0].rank))
}

/// Fallback hand built from the two hole cards (the first two source cards).
///
/// Only those two ranks take part in the rating; the board kickers are not
/// considered.
pub fn high_card(source: &[Card]) -> Hand {
    assert!(source.len() >= 2, "high card needs the two hole cards");
    let cards = source[..2].to_vec();
    let rating = rank_mask(&cards);
    Hand {
        category: Category::HighCard,
        cards,
        rating,
    }
}

/// Returns the predicate for a searched category, `None` for high card.
pub fn predicate_for(category: Category) -> Option<Predicate> {
    let p: Predicate = match category {
        Category::StraightFlush => straight_flush,
        Category::FourOfAKind => four_of_a_kind,
        Category::FullHouse => full_house,
        Category::Flush => flush,
        Category::Straight => straight,
        Category::ThreeOfAKind => three_of_a_kind,
        Category::TwoPair => two_pair,
        Category::Pair => pair,
        Category::HighCard => return None,
    };
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn straight_flush_rejects_mixed_suits() {
        assert!(straight_flush(&cards("9h Th Jh Qh Ks")).is_none());
        assert!(straight_flush(&cards("9h Th Jh Qh Kh")).is_some());
    }

    #[test]
    fn broadway_keeps_the_ace_bit_and_wheel_drops_it() {
        let broadway = straight(&cards("Ah Ks Qd Jc Th")).unwrap();
        assert_eq!(broadway.cards, cards("Th Jc Qd Ks Ah"));
        assert_eq!(broadway.rating & ACE_BIT, ACE_BIT);

        let wheel = straight(&cards("Ah 2s 3d 4c 5h")).unwrap();
        assert_eq!(wheel.cards, cards("2s 3d 4c 5h Ah"));
        assert_eq!(wheel.rating, 0b1111);
    }

    #[test]
    fn straight_rejects_wraparound_and_duplicates() {
        assert!(straight(&cards("Qh Ks Ad 2c 3h")).is_none());
        assert!(straight(&cards("5h 6s 7d 7c 8h")).is_none());
    }

    #[test]
    fn full_house_accepts_both_placements_of_the_trips() {
        let leading = full_house(&cards("4h 4s 4d 9c 9h")).unwrap();
        let trailing = full_house(&cards("9c 9h 4h 4s 4d")).unwrap();
        assert_eq!(leading.rating, trailing.rating);
        assert_eq!(leading.rating, full_house_rating(Rank::Four, Rank::Nine));
        assert!(full_house(&cards("4h 4s 7d 9c 9h")).is_none());
    }

    #[test]
    fn two_pair_needs_two_distinct_ranks() {
        assert!(two_pair(&cards("5h 5c 5d 5s")).is_none());
        assert!(two_pair(&cards("5h Qc 5d 9s")).is_none());
        let h = two_pair(&cards("Qd 5h Qc 5c")).unwrap();
        assert_eq!(h.cards, cards("5h 5c Qd Qc"));
    }

    #[test]
    #[should_panic(expected = "predicate called with 4 cards")]
    fn wrong_combination_length_fails_fast() {
        let _ = flush(&cards("2h 3h 4h 5h"));
    }

    #[test]
    fn category_order_matches_strength() {
        let mut ascending = Category::DESCENDING;
        ascending.reverse();
        assert!(ascending.windows(2).all(|w| w[0] < w[1]));
    }
}
