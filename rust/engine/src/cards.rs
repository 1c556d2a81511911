use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EvalError;

/// Number of distinct cards (and card codes) in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no strength; the declaration order only fixes the card code layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Position of the suit in the card code layout (0..4).
    pub fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub fn latin1_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn unicode_char(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn from_latin1_char(ch: char) -> Option<Suit> {
        all_suits().into_iter().find(|s| s.latin1_char() == ch)
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Ace compares highest; the low-ace role in the wheel straight is handled by
/// the hand predicates, not by this ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Zero-based position, Two = 0 through Ace = 12.
    pub fn index(self) -> usize {
        self as usize - 2
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        all_ranks().get(index).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(ch: char) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.as_char() == ch)
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; two cards are equal iff suit and rank are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Stable integer code in `[0, 52)`: `suit_index * 13 + rank_index`.
    pub fn code(self) -> u8 {
        (self.suit.index() * 13 + self.rank.index()) as u8
    }

    pub fn from_code(code: u8) -> Result<Card, EvalError> {
        let code_usize = code as usize;
        if code_usize >= DECK_SIZE {
            return Err(EvalError::InvalidCardCode(code));
        }
        let suit = all_suits()[code_usize / 13];
        let rank = all_ranks()[code_usize % 13];
        Ok(Card { suit, rank })
    }

    /// Renders the card with a suit symbol, e.g. `Q♦`.
    pub fn to_unicode(self) -> String {
        format!("{}{}", self.rank.as_char(), self.suit.unicode_char())
    }
}

impl fmt::Display for Card {
    /// Two-character form such as `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.latin1_char())
    }
}

impl FromStr for Card {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(EvalError::ParseCard(s.to_string()));
        };
        let rank = Rank::from_char(r.to_ascii_uppercase())
            .ok_or_else(|| EvalError::ParseCard(s.to_string()))?;
        let suit = Suit::from_latin1_char(su.to_ascii_lowercase())
            .ok_or_else(|| EvalError::ParseCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// Parses a whitespace separated list such as `"Qd 9h Qs Ac"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EvalError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats cards in their two-character form joined by single spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in code order (grouped by suit, ranks ascending).
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
