// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text parsing.
//!
//! A card is a rank character followed by a suit, the suit can be a letter,
//! the suit name, or its symbol:
//!
//! ```
//! # use fivedraw_cards::{Card, Rank, Suit};
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!("KD".parse::<Card>().unwrap(), kd);
//! assert_eq!("kd".parse::<Card>().unwrap(), kd);
//! assert_eq!("Kdiamonds".parse::<Card>().unwrap(), kd);
//! assert_eq!("K♦".parse::<Card>().unwrap(), kd);
//! ```
use std::str::FromStr;

use crate::{Card, Rank, Suit};

/// Emoji presentation selector that may follow a suit symbol.
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Errors parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The token is too short to be a card.
    #[error("invalid card {0:?}")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid card rank {0:?}")]
    Rank(char),
    /// Unknown suit.
    #[error("invalid card suit {0:?}")]
    Suit(String),
}

impl Rank {
    /// Returns the rank for a rank character, `2-9`, `T`, `J`, `Q`, `K`, `A`.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c).ok_or(ParseCardError::Rank(c)),
            _ => Err(ParseCardError::Length(s.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s
            .trim_end_matches(VARIATION_SELECTOR)
            .to_ascii_lowercase()
            .as_str()
        {
            "c" | "clubs" | "♣" | "♧" => Suit::Clubs,
            "d" | "diamonds" | "♦" | "♢" => Suit::Diamonds,
            "h" | "hearts" | "♥" | "♡" => Suit::Hearts,
            "s" | "spades" | "♠" | "♤" => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };

        Ok(suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank = chars
            .next()
            .ok_or_else(|| ParseCardError::Length(s.to_string()))?;

        let suit = chars.as_str();
        if suit.is_empty() {
            return Err(ParseCardError::Length(s.to_string()));
        }

        let rank = Rank::from_char(rank).ok_or(ParseCardError::Rank(rank))?;
        Ok(Card::new(rank, suit.parse()?))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses a list of cards separated by whitespaces, commas, or semicolons.
///
/// An empty text returns no cards, duplicated cards are kept.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
