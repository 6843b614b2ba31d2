// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards and deck definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
///
/// A card is represented using a reduced version of the encoding in the
/// [Cactus Kev's][kevlink] Poker hand evaluator, without the rank prime:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxxxxxxx|
///   +--------+--------+--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// The suit bits survive the AND of five cards only when they are a flush.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self((rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_bits(self.rank_bits())
            .unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// The card with the suit symbol, i.e. `K♦`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.rank(), self.suit().symbol())
    }

    /// The card long name, i.e. `K of Diamonds`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank(), self.suit().name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for the given rank bits (deuce=0,...,ace=12).
    pub fn from_bits(bits: u8) -> Option<Rank> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Returns the next higher rank, aces do not wrap around.
    pub fn successor(&self) -> Option<Rank> {
        Self::from_bits(*self as u8 + 1)
    }

    /// Checks if this rank comes right after `other`.
    pub fn is_successor_of(&self, other: Rank) -> bool {
        other.successor() == Some(*self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no order, they never break ties between hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit full name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Errors creating a deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The deck doesn't have 52 cards.
    #[error("a deck must contain exactly {size} cards, got {0}", size = Deck::SIZE)]
    Size(usize),
    /// The same card appears twice.
    #[error("duplicate card {0} in deck")]
    Duplicate(Card),
}

/// A cards Deck.
///
/// A deck always holds 52 distinct cards in a fixed order, drawing a card reads
/// it at an index and never changes the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck with the cards in the given order.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != Self::SIZE {
            return Err(DeckError::Size(cards.len()));
        }

        let mut seen = AHashSet::with_capacity(Self::SIZE);
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(DeckError::Duplicate(*card));
        }

        Ok(Self { cards })
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Draws the card at the given index.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// The deck cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the deck cards in order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Calls the `f` closure for each 5-cards hand.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card; 5]),
    {
        let n = self.cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
