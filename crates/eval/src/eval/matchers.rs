// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category rules.
//!
//! Each rule checks a single category without assuming that a stronger or a
//! weaker category was ruled out, for example a straight flush matches the
//! [straight] and [flush] rules too. On a match a rule returns the hand
//! [Ranking] with the ranks needed for tiebreaking.
//!
//! All rules return `None` when the cards are not five distinct cards.
use fivedraw_cards::{Card, Rank};

use super::Ranking;
use crate::Error;

/// Checks that there are exactly five distinct cards.
pub(crate) fn five_distinct(cards: &[Card]) -> Result<&[Card; 5], Error> {
    let cards: &[Card; 5] = cards
        .try_into()
        .map_err(|_| Error::CardCount(cards.len()))?;

    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(Error::DuplicateCard(*card));
        }
    }

    Ok(cards)
}

/// The hand ranks grouped by number of cards, sorted by count and by rank
/// from highest to lowest.
///
/// A full house 8H 8C AS AD 8D groups as `[(3, Eight), (2, Ace)]`.
#[derive(Debug)]
struct RankGroups {
    groups: [(u8, Rank); 5],
    len: usize,
}

impl RankGroups {
    fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }

        let mut groups = [(0, Rank::Deuce); 5];
        let mut len = 0;
        for rank in Rank::ranks().rev() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[len] = (count, rank);
                len += 1;
            }
        }

        // Stable sort keeps equal counts from highest to lowest rank.
        groups[..len].sort_by(|g1, g2| g2.0.cmp(&g1.0));

        Self { groups, len }
    }

    fn as_slice(&self) -> &[(u8, Rank)] {
        &self.groups[..self.len]
    }
}

/// Groups five distinct cards by rank.
fn rank_groups(cards: &[Card]) -> Option<RankGroups> {
    five_distinct(cards).ok().map(RankGroups::new)
}

/// The hand ranks from highest to lowest.
fn ranks_desc(cards: &[Card; 5]) -> [Rank; 5] {
    let mut ranks = cards.map(|c| c.rank());
    ranks.sort_unstable_by(|r1, r2| r2.cmp(r1));
    ranks
}

/// Checks if five distinct cards have the same suit.
pub fn is_flush(cards: &[Card]) -> bool {
    five_distinct(cards)
        .map(|cards| cards.iter().fold(0xf, |bits, c| bits & c.suit_bits()) != 0)
        .unwrap_or(false)
}

/// Checks if five distinct cards have ranks that, sorted ascending, are each
/// the successor of the previous one.
///
/// Aces are always high, A2345 is not a straight.
pub fn is_straight(cards: &[Card]) -> bool {
    five_distinct(cards)
        .map(|cards| {
            let mut ranks = cards.map(|c| c.rank());
            ranks.sort_unstable();
            ranks.windows(2).all(|w| w[1].is_successor_of(w[0]))
        })
        .unwrap_or(false)
}

/// Five distinct ranks that are neither a straight nor a flush.
pub fn high_card(cards: &[Card]) -> Option<Ranking> {
    let hand = five_distinct(cards).ok()?;
    match RankGroups::new(hand).as_slice() {
        [(1, _), (1, _), (1, _), (1, _), (1, _)] if !is_flush(cards) && !is_straight(cards) => {
            Some(Ranking::HighCard(ranks_desc(hand)))
        }
        _ => None,
    }
}

/// One pair and three single cards.
pub fn pair(cards: &[Card]) -> Option<Ranking> {
    match rank_groups(cards)?.as_slice() {
        &[(2, pair), (1, k1), (1, k2), (1, k3)] => Some(Ranking::Pair {
            pair,
            kickers: [k1, k2, k3],
        }),
        _ => None,
    }
}

/// Two pairs and a single card.
pub fn two_pair(cards: &[Card]) -> Option<Ranking> {
    match rank_groups(cards)?.as_slice() {
        &[(2, high), (2, low), (1, kicker)] => Some(Ranking::TwoPair { high, low, kicker }),
        _ => None,
    }
}

/// Three cards of a rank and two single cards.
pub fn three_of_a_kind(cards: &[Card]) -> Option<Ranking> {
    match rank_groups(cards)?.as_slice() {
        &[(3, triple), (1, k1), (1, k2)] => Some(Ranking::ThreeOfAKind {
            triple,
            kickers: [k1, k2],
        }),
        _ => None,
    }
}

/// Five cards with consecutive ranks regardless of suits.
pub fn straight(cards: &[Card]) -> Option<Ranking> {
    if !is_straight(cards) {
        return None;
    }

    let high = cards.iter().map(|c| c.rank()).max()?;
    Some(Ranking::Straight { high })
}

/// Five cards of the same suit regardless of ranks.
pub fn flush(cards: &[Card]) -> Option<Ranking> {
    let hand = five_distinct(cards).ok()?;
    is_flush(hand).then(|| Ranking::Flush(ranks_desc(hand)))
}

/// Three cards of a rank and a pair.
pub fn full_house(cards: &[Card]) -> Option<Ranking> {
    match rank_groups(cards)?.as_slice() {
        &[(3, triple), (2, pair)] => Some(Ranking::FullHouse { triple, pair }),
        _ => None,
    }
}

/// Four cards of a rank and a single card.
pub fn four_of_a_kind(cards: &[Card]) -> Option<Ranking> {
    match rank_groups(cards)?.as_slice() {
        &[(4, quad), (1, kicker)] => Some(Ranking::FourOfAKind { quad, kicker }),
        _ => None,
    }
}

/// A hand that is both a [straight] and a [flush].
pub fn straight_flush(cards: &[Card]) -> Option<Ranking> {
    match (straight(cards)?, is_flush(cards)) {
        (Ranking::Straight { high }, true) => Some(Ranking::StraightFlush { high }),
        _ => None,
    }
}
