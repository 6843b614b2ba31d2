// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker hand classifier and tiebreaker.
//!
//! Classifies five cards Poker hands into one of nine categories and breaks
//! ties between hands of the same category. Aces are always high, there is no
//! ace-low straight.
//!
//! To classify a hand create a [Hand], hands of the same category can then be
//! compared with [compare] and [reduce]:
//!
//! ```
//! # use fivedraw_eval::*;
//! let h1 = Hand::new(&parse_cards("KS KC 3H 5D 6C").unwrap()).unwrap();
//! let h2 = Hand::new(&parse_cards("KD KH 3C 5H 7C").unwrap()).unwrap();
//! assert_eq!(h1.category(), Category::Pair);
//! assert_eq!(compare(Category::Pair, &h1, &h2), Ok(ShowdownResult::Lower));
//! assert_eq!(reduce(&[&h1, &h2]).unwrap(), vec![&&h2]);
//! ```
//!
//! The [dealer] deals hands from a deck and finds the showdown winners across
//! categories:
//!
//! ```
//! # use fivedraw_eval::{Deck, dealer::Dealer};
//! let dealer = Dealer::new(Deck::default());
//! let players = dealer.deal(3).unwrap();
//! let winners = dealer.showdown(&players).unwrap();
//! assert_eq!(winners[0].name(), "Player 1");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod dealer;
pub mod eval;
pub use eval::{Category, Hand, Ranking, ShowdownResult, compare, reduce};

mod error;
pub use error::Error;

// Reexport cards types.
pub use fivedraw_cards::{Card, Deck, DeckError, ParseCardError, Rank, Suit, parse_cards};
