// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw dealer.
//!
//! The [Dealer] deals five cards to each player from a deck, classifies the
//! players hands and finds the showdown winners.
use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use fivedraw_cards::{Card, Deck};

use crate::{
    Error,
    eval::{self, Category, Hand},
};

/// The minimum number of players.
pub const MIN_PLAYERS: usize = 2;

/// The maximum number of players.
pub const MAX_PLAYERS: usize = 7;

/// A player with a dealt hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    seat: usize,
    hand: Hand,
}

impl Player {
    /// The player name, `Player 1` for the first seat.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player seat starting from 0.
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// The player hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

impl AsRef<Hand> for Player {
    fn as_ref(&self) -> &Hand {
        &self.hand
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Player", 3)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("hand", &self.hand)?;
        s.serialize_field("category", &self.hand.category())?;
        s.end()
    }
}

/// Deals hands from a deck.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    deck: Deck,
}

impl Dealer {
    /// Creates a dealer that deals from the given deck.
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// The dealer deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deals five cards to each player, one card at a time starting from the
    /// first seat.
    pub fn deal(&self, num_players: usize) -> Result<Vec<Player>, Error> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(Error::PlayerCount(num_players));
        }

        let mut cards = vec![Vec::with_capacity(Hand::SIZE); num_players];
        for (idx, card) in self.deck.iter().take(num_players * Hand::SIZE).enumerate() {
            cards[idx % num_players].push(card);
        }

        let players = cards
            .into_iter()
            .enumerate()
            .map(|(seat, cards)| {
                Hand::new(&cards).map(|hand| Player {
                    name: format!("Player {}", seat + 1),
                    seat,
                    hand,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            "Dealt {num_players} hands: {}",
            players
                .iter()
                .map(|p| format!("{} {}", p.hand, p.hand.category()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(players)
    }

    /// Finds the winning players.
    ///
    /// Only players with the strongest category compete for the pot and ties are
    /// broken within that category. Winners are returned in seat order and more
    /// than one winner means a split pot. An empty table has no winners.
    pub fn showdown<'a>(&self, players: &'a [Player]) -> Result<Vec<&'a Player>, Error> {
        let mut by_category = AHashMap::<Category, Vec<&Player>>::default();
        for player in players {
            by_category
                .entry(player.hand.category())
                .or_default()
                .push(player);
        }

        let Some((category, contenders)) = by_category.into_iter().max_by_key(|(c, _)| *c) else {
            return Ok(Vec::new());
        };

        let winners = eval::reduce(&contenders)?
            .into_iter()
            .copied()
            .collect::<Vec<_>>();

        debug!(
            "Showdown {category} won by {}",
            winners
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(winners)
    }
}

/// Builds a deck that deals the given cards to each player.
///
/// The players cards are laid out so that dealing round robin gives each player
/// its cards in order, the rest of the deck follows in the default deck order.
pub fn stacked_deck(hands: &[Vec<Card>]) -> Result<Deck, Error> {
    let mut seen = AHashSet::default();
    for (idx, cards) in hands.iter().enumerate() {
        if cards.len() != Hand::SIZE {
            return Err(Error::StackedHand {
                player: idx + 1,
                cards: cards.len(),
            });
        }

        for card in cards {
            if !seen.insert(*card) {
                return Err(Error::DuplicateCard(*card));
            }
        }
    }

    let mut deck = Vec::with_capacity(Deck::SIZE);
    for round in 0..Hand::SIZE {
        deck.extend(hands.iter().map(|cards| cards[round]));
    }

    deck.extend(Deck::default().into_iter().filter(|c| !seen.contains(c)));

    Ok(Deck::new(deck)?)
}
