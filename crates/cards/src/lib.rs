// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivedraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type with a fixed order of 52 cards that can be shuffled,
//! read by index, and iterated.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivedraw_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to create a deck shuffled with a seeded generator:
//!
//! ```
//! # use fivedraw_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
//! let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
//! assert_eq!(d1.card(0), d2.card(0));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};
