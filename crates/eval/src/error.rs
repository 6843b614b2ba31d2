// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use fivedraw_cards::{Card, DeckError};

use crate::eval::Category;

/// Errors returned by the hand evaluator and the dealer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A hand doesn't have five cards.
    #[error("a hand must have exactly 5 cards, got {0}")]
    CardCount(usize),
    /// A hand has the same card twice.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// A tiebreak was invoked for a hand of another category.
    #[error("expected a {expected} hand, got a {found} hand")]
    CategoryMismatch {
        /// The category the tiebreak was invoked for.
        expected: Category,
        /// The hand category.
        found: Category,
    },
    /// A tiebreak was invoked for hands of different categories.
    #[error("only hands of a single category can be tiebroken")]
    MixedCategories,
    /// The number of players is not 2 <= n <= 7.
    #[error("five card draw is played by 2 to 7 players, got {0}")]
    PlayerCount(usize),
    /// A stacked deck player doesn't have five cards.
    #[error("player {player} must be dealt 5 cards, got {cards}")]
    StackedHand {
        /// The player number starting from 1.
        player: usize,
        /// The number of cards given.
        cards: usize,
    },
    /// An invalid deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
