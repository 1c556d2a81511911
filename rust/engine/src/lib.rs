//! # showdown-engine: Texas Hold'em Hand Evaluation
//!
//! Finds the best poker hand obtainable from a player's hole cards plus the
//! shared board, and produces a value that totally orders hands for showdown
//! comparison: category first, then an integer rating within the category.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), integer codes, text form
//! - [`combinations`] - k-of-n subset enumeration with early stop
//! - [`rating`] - Rank significance bits used for intra-category ratings
//! - [`hand`] - Hand categories, per-category predicates and hand comparison
//! - [`evaluator`] - Category-priority evaluation and showdown helpers
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`config`] - Dealer configuration from TOML and environment
//! - [`logger`] - JSONL evaluation records
//! - [`errors`] - Error types for evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::evaluator::evaluate;
//! use showdown_engine::hand::{compare_hands, Category};
//!
//! // Hole cards first, then the board
//! let a = evaluate(&parse_cards("Kh Jd Kc Kd 5h 8s 9s").unwrap()).unwrap();
//! let b = evaluate(&parse_cards("Qc Ad Qd Ks Qh Tc 2s").unwrap()).unwrap();
//!
//! assert_eq!(a.category, Category::ThreeOfAKind);
//! assert!(compare_hands(&a, &b).is_gt());
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use showdown_engine::deck::{Dealer, Deck};
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42).deal();
//! let deck2 = Deck::new_with_seed(42).deal();
//! assert_eq!(deck1, deck2);
//! ```

pub mod cards;
pub mod combinations;
pub mod config;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod hand;
pub mod logger;
pub mod rating;
