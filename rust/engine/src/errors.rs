use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Combination size must be at least 1")]
    CombinationSizeZero,
    #[error("Combination size {k} exceeds the {n} available items")]
    CombinationSizeTooLarge { k: usize, n: usize },
    #[error("Not enough cards: {actual}, minimum: {minimum}")]
    NotEnoughCards { actual: usize, minimum: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Illegal card code: {0}, expected to be between 0 inclusive and 52 exclusive")]
    InvalidCardCode(u8),
    #[error("Cannot parse card: {0:?}")]
    ParseCard(String),
}
