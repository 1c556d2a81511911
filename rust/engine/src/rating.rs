//! Rank significance values used to rate hands inside a category.
//!
//! Each rank maps to its own power-of-two bit, Two = bit 0 through Ace = bit 12,
//! so OR-ing the bits of a set of distinct ranks yields a number whose order
//! follows the highest differing rank.

use crate::cards::{Card, Rank};

/// Bit of the highest rank; cleared when the Ace plays low in a wheel.
pub const ACE_BIT: u32 = 1 << 12;

/// Trips weight for full houses. Exceeds every single rank bit, so the
/// three-card rank always dominates the pair rank.
pub const FULL_HOUSE_TRIPS_WEIGHT: u32 = 1 << 13;

pub fn rank_bit(rank: Rank) -> u32 {
    1 << rank.index()
}

/// OR of the rank bits of every card.
pub fn rank_mask(cards: &[Card]) -> u32 {
    cards.iter().fold(0, |acc, c| acc | rank_bit(c.rank))
}

pub fn full_house_rating(trips: Rank, pair: Rank) -> u32 {
    rank_bit(trips) * FULL_HOUSE_TRIPS_WEIGHT + rank_bit(pair)
}
