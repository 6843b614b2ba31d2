// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rankings.
use serde::{Deserialize, Serialize};

use fivedraw_cards::Rank;

use super::Category;

/// A hand category with the ranks used to break ties.
///
/// Multiple ranks are sorted from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ranking {
    /// The five ranks.
    HighCard([Rank; 5]),
    /// The pair rank and the kickers.
    Pair {
        /// The pair rank.
        pair: Rank,
        /// The other three ranks.
        kickers: [Rank; 3],
    },
    /// The pairs ranks and the kicker.
    TwoPair {
        /// The higher pair rank.
        high: Rank,
        /// The lower pair rank.
        low: Rank,
        /// The single card rank.
        kicker: Rank,
    },
    /// The triple rank and the kickers.
    ThreeOfAKind {
        /// The triple rank.
        triple: Rank,
        /// The other two ranks.
        kickers: [Rank; 2],
    },
    /// The straight top rank.
    Straight {
        /// The highest rank.
        high: Rank,
    },
    /// The five ranks.
    Flush([Rank; 5]),
    /// The triple and pair ranks.
    FullHouse {
        /// The triple rank.
        triple: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// The quad rank and the kicker.
    FourOfAKind {
        /// The quad rank.
        quad: Rank,
        /// The single card rank.
        kicker: Rank,
    },
    /// The straight top rank.
    StraightFlush {
        /// The highest rank.
        high: Rank,
    },
}

impl Ranking {
    /// The category for this ranking.
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::Pair { .. } => Category::Pair,
            Ranking::TwoPair { .. } => Category::TwoPair,
            Ranking::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            Ranking::Straight { .. } => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse { .. } => Category::FullHouse,
            Ranking::FourOfAKind { .. } => Category::FourOfAKind,
            Ranking::StraightFlush { .. } => Category::StraightFlush,
        }
    }
}
