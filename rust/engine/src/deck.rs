use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::config::DealerConfig;

pub const DEFAULT_SHUFFLE_PASSES: u32 = 5;

/// Source of freshly shuffled 52-card sequences.
pub trait Dealer {
    /// Returns all 52 cards, each exactly once, in shuffled order.
    fn deal(&mut self) -> Vec<Card>;
}

/// Seeded deck; the same seed and pass count always give the same order.
///
/// ```rust
/// use showdown_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.deal_card(), b.deal_card());
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    passes: u32,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed), DEFAULT_SHUFFLE_PASSES)
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha20Rng::from_os_rng(), DEFAULT_SHUFFLE_PASSES)
    }

    pub fn from_config(config: &DealerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self::with_rng(rng, config.shuffle_passes)
    }

    fn with_rng(rng: ChaCha20Rng, passes: u32) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            passes: passes.max(1),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        for _ in 0..self.passes {
            self.cards.shuffle(&mut self.rng);
        }
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Shuffles and returns the integer codes of the whole deck.
    pub fn deal_codes(&mut self) -> Vec<u8> {
        self.deal().into_iter().map(Card::code).collect()
    }
}

impl Dealer for Deck {
    fn deal(&mut self) -> Vec<Card> {
        self.shuffle();
        let cards = self.cards.clone();
        self.position = self.cards.len();
        cards
    }
}
