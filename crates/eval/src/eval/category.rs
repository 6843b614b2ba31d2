// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use fivedraw_cards::Card;

use super::{Ranking, matchers};
use crate::Error;

/// The category of a five cards hand, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
}

impl Category {
    /// Returns all categories from weakest to strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Checks if hands of this category also satisfy the `other` category rule.
    ///
    /// Every category is a subtype of itself, a straight flush is also a subtype
    /// of straight and flush.
    pub fn is_subtype_of(&self, other: Category) -> bool {
        match (self, other) {
            (Category::StraightFlush, Category::Straight | Category::Flush) => true,
            _ => *self == other,
        }
    }

    /// Runs this category rule on the cards and returns the hand ranking if it
    /// matches.
    ///
    /// Rules are independent of each other, more than one can match the same
    /// cards, and nothing matches unless there are five distinct cards.
    pub fn ranking(&self, cards: &[Card]) -> Option<Ranking> {
        match self {
            Category::HighCard => matchers::high_card(cards),
            Category::Pair => matchers::pair(cards),
            Category::TwoPair => matchers::two_pair(cards),
            Category::ThreeOfAKind => matchers::three_of_a_kind(cards),
            Category::Straight => matchers::straight(cards),
            Category::Flush => matchers::flush(cards),
            Category::FullHouse => matchers::full_house(cards),
            Category::FourOfAKind => matchers::four_of_a_kind(cards),
            Category::StraightFlush => matchers::straight_flush(cards),
        }
    }

    /// Checks if the cards satisfy this category rule.
    pub fn matches(&self, cards: &[Card]) -> bool {
        self.ranking(cards).is_some()
    }

    /// Returns the strongest category the cards match.
    pub fn classify(cards: &[Card]) -> Result<Category, Error> {
        let cards = matchers::five_distinct(cards)?;
        Ok(rank_cards(cards).category())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranks five distinct cards with the strongest matching category.
///
/// Categories are tried from strongest to weakest as a straight flush also
/// matches the straight and flush rules.
pub(crate) fn rank_cards(cards: &[Card; 5]) -> Ranking {
    Category::categories()
        .rev()
        .find_map(|category| category.ranking(cards))
        .unwrap_or_else(|| unreachable!("No category matches cards {cards:?}"))
}
