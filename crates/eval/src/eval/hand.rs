// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A classified five cards hand.
use log::trace;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

use fivedraw_cards::{Card, Rank};

use super::{Category, Ranking, category, matchers};
use crate::Error;

/// A five cards Poker hand.
///
/// A hand is classified once when it is created and never changes. The cards
/// keep the order they were given but two hands with the same cards are equal
/// irrespective of the order.
///
/// ```
/// # use fivedraw_eval::{Category, Hand, parse_cards};
/// let hand = Hand::new(&parse_cards("KS KC 3H 5D 6C").unwrap()).unwrap();
/// assert_eq!(hand.category(), Category::Pair);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", try_from = "Vec<Card>")]
pub struct Hand {
    cards: [Card; 5],
    ranking: Ranking,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, Error> {
        let cards = *matchers::five_distinct(cards)?;
        let ranking = category::rank_cards(&cards);

        let hand = Self { cards, ranking };
        trace!("Hand {hand} is a {}", hand.category());
        Ok(hand)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.ranking.category()
    }

    /// The hand ranking.
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// The highest rank in this hand.
    pub fn highest_rank(&self) -> Rank {
        self.cards
            .iter()
            .map(|c| c.rank())
            .max()
            .unwrap_or(Rank::Deuce)
    }

    /// The hand cards with suit symbols, i.e. `K♠ K♣ 3♥ 5♦ 6♣`.
    pub fn symbols(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The cards ids in a fixed order.
    fn sorted_ids(&self) -> [u32; 5] {
        let mut ids = self.cards.map(|c| c.id());
        ids.sort_unstable();
        ids
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_ids() == other.sorted_ids()
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_ids().hash(state);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl AsRef<Hand> for Hand {
    fn as_ref(&self) -> &Hand {
        self
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}
