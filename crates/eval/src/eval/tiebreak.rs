// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tiebreaking hands of the same category.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Category, Hand, Ranking};
use crate::Error;

/// The outcome of a showdown between two hands, from the first hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowdownResult {
    /// The first hand wins.
    Higher,
    /// The first hand loses.
    Lower,
    /// The hands have the same strength and split the pot.
    Split,
}

impl From<Ordering> for ShowdownResult {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => ShowdownResult::Higher,
            Ordering::Less => ShowdownResult::Lower,
            Ordering::Equal => ShowdownResult::Split,
        }
    }
}

/// Compares two hands of the given category.
///
/// Returns an error if any of the hands is not of `category`.
pub fn compare(category: Category, h1: &Hand, h2: &Hand) -> Result<ShowdownResult, Error> {
    for hand in [h1, h2] {
        if hand.category() != category {
            return Err(Error::CategoryMismatch {
                expected: category,
                found: hand.category(),
            });
        }
    }

    Ok(compare_rankings(h1.ranking(), h2.ranking()).into())
}

fn compare_rankings(r1: &Ranking, r2: &Ranking) -> Ordering {
    use Ranking::*;

    match (r1, r2) {
        // A flush compares like a high card hand.
        (HighCard(ranks1), HighCard(ranks2)) | (Flush(ranks1), Flush(ranks2)) => {
            ranks1.cmp(ranks2)
        }
        (
            Pair {
                pair: p1,
                kickers: k1,
            },
            Pair {
                pair: p2,
                kickers: k2,
            },
        ) => p1.cmp(p2).then_with(|| k1.cmp(k2)),
        (
            TwoPair {
                high: h1,
                low: l1,
                kicker: k1,
            },
            TwoPair {
                high: h2,
                low: l2,
                kicker: k2,
            },
        ) => h1.cmp(h2).then_with(|| l1.cmp(l2)).then_with(|| k1.cmp(k2)),
        // With five cards only one hand can have a given triple or quad rank.
        (ThreeOfAKind { triple: t1, .. }, ThreeOfAKind { triple: t2, .. })
        | (FullHouse { triple: t1, .. }, FullHouse { triple: t2, .. })
        | (FourOfAKind { quad: t1, .. }, FourOfAKind { quad: t2, .. }) => t1.cmp(t2),
        // A straight flush compares like a straight.
        (Straight { high: h1 }, Straight { high: h2 })
        | (StraightFlush { high: h1 }, StraightFlush { high: h2 }) => h1.cmp(h2),
        _ => unreachable!("Comparing {r1:?} with {r2:?}"),
    }
}

/// Finds the winning hands amongst hands of the same category.
///
/// Each hand is compared with the last of the current winners: a lower hand is
/// discarded, a higher hand replaces all the winners, and a split hand joins the
/// winners. Winners keep the input order and equal hands are not removed.
///
/// Returns an error if the hands are not all of the same category.
pub fn reduce<H: AsRef<Hand>>(hands: &[H]) -> Result<Vec<&H>, Error> {
    let Some((first, rest)) = hands.split_first() else {
        return Ok(Vec::new());
    };

    let category = first.as_ref().category();
    if hands.iter().any(|h| h.as_ref().category() != category) {
        return Err(Error::MixedCategories);
    }

    let mut winners = vec![first];
    let mut leader = first;

    for hand in rest {
        match compare(category, hand.as_ref(), leader.as_ref())? {
            ShowdownResult::Lower => continue,
            ShowdownResult::Higher => winners.clear(),
            ShowdownResult::Split => {}
        }

        winners.push(hand);
        leader = hand;
    }

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_cards::parse_cards;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn hand(text: &str) -> Hand {
        Hand::new(&parse_cards(text).unwrap()).unwrap()
    }

    /// Checks the tiebreaks for three hands where h1 and h2 split and h3 wins.
    fn check_split_and_win(category: Category, h1: &str, h2: &str, h3: &str) {
        let (h1, h2, h3) = (hand(h1), hand(h2), hand(h3));
        for h in [&h1, &h2, &h3] {
            assert_eq!(h.category(), category, "{h}");
        }

        assert_eq!(compare(category, &h1, &h2), Ok(ShowdownResult::Split));
        assert_eq!(compare(category, &h3, &h1), Ok(ShowdownResult::Higher));
        assert_eq!(compare(category, &h2, &h3), Ok(ShowdownResult::Lower));

        assert_eq!(reduce(&[h1.clone()]).unwrap(), vec![&h1]);
        assert_eq!(reduce(&[&h1, &h2]).unwrap(), vec![&&h1, &&h2]);
        assert_eq!(reduce(&[&h1, &h2, &h2]).unwrap(), vec![&&h1, &&h2, &&h2]);
        assert_eq!(reduce(&[&h1, &h2, &h3]).unwrap(), vec![&&h3]);
        assert_eq!(reduce(&[&h3, &h1, &h2]).unwrap(), vec![&&h3]);
    }

    /// Checks the tiebreaks for three increasingly stronger hands.
    fn check_increasing(category: Category, h1: &str, h2: &str, h3: &str) {
        let (h1, h2, h3) = (hand(h1), hand(h2), hand(h3));
        for h in [&h1, &h2, &h3] {
            assert_eq!(h.category(), category, "{h}");
        }

        assert_eq!(compare(category, &h1, &h2), Ok(ShowdownResult::Lower));
        assert_eq!(compare(category, &h2, &h1), Ok(ShowdownResult::Higher));
        assert_eq!(compare(category, &h1, &h1), Ok(ShowdownResult::Split));

        assert_eq!(reduce(&[&h1, &h2]).unwrap(), vec![&&h2]);
        assert_eq!(reduce(&[&h1, &h2, &h2]).unwrap(), vec![&&h2, &&h2]);
        assert_eq!(reduce(&[&h1, &h2, &h3]).unwrap(), vec![&&h3]);
        assert_eq!(reduce(&[&h3, &h2, &h1]).unwrap(), vec![&&h3]);
    }

    #[test]
    fn high_card() {
        check_split_and_win(
            Category::HighCard,
            "2S 4D 8H TC KD",
            "2D 4S 8C TD KH",
            "2H 4H 9C TC KC",
        );

        // Lower third card loses.
        let h1 = hand("2S 4D 8H TC KD");
        let h2 = hand("2H 4H 5C TC KC");
        assert_eq!(compare(Category::HighCard, &h1, &h2), Ok(ShowdownResult::Higher));
        assert_eq!(reduce(&[&h1, &h2]).unwrap(), vec![&&h1]);
    }

    #[test]
    fn pair() {
        check_split_and_win(
            Category::Pair,
            "2S 2D 8H TC KD",
            "2H 2C 8C TD KH",
            "4S 4H 5C TC KC",
        );

        // Same pair, first different kicker wins.
        let h1 = hand("KS KC 3H 5D 6C");
        let h2 = hand("KD KH 3C 5H 7C");
        assert_eq!(compare(Category::Pair, &h1, &h2), Ok(ShowdownResult::Lower));
        assert_eq!(reduce(&[&h1, &h2]).unwrap(), vec![&&h2]);

        // Last kicker.
        let h1 = hand("KS KC 2H 5D 7D");
        let h2 = hand("KD KH 3C 5H 7C");
        assert_eq!(compare(Category::Pair, &h1, &h2), Ok(ShowdownResult::Lower));
    }

    #[test]
    fn two_pair() {
        check_increasing(
            Category::TwoPair,
            "3H 3C 8C 8D KH",
            "4S 4D 8H 8S KD",
            "9S 9D 2C 2D KC",
        );

        // Same pairs, kicker wins.
        let h1 = hand("4S 4D 8H 8S KD");
        let h2 = hand("4H 4C 8D 8C AD");
        assert_eq!(compare(Category::TwoPair, &h1, &h2), Ok(ShowdownResult::Lower));

        let h3 = hand("4H 4C 8D 8C KC");
        assert_eq!(compare(Category::TwoPair, &h1, &h3), Ok(ShowdownResult::Split));
    }

    #[test]
    fn three_of_a_kind() {
        check_increasing(
            Category::ThreeOfAKind,
            "3H 3C 3D 8D KH",
            "4S 4D 4H 8S KD",
            "9S 9D 9C 2D KC",
        );
    }

    #[test]
    fn straight() {
        check_split_and_win(
            Category::Straight,
            "5S 6D 7H 8S 9D",
            "5C 6S 7S 8C 9H",
            "7D 8H 9C TH JC",
        );
    }

    #[test]
    fn flush() {
        check_split_and_win(
            Category::Flush,
            "2S 6S 7S 8S 9S",
            "2C 6C 7C 8C 9C",
            "2S 4S 5S TS JS",
        );

        // Compares like a high card, the lowest card can decide.
        let h1 = hand("3D 6D 7D 8D 9D");
        let h2 = hand("2C 6C 7C 8C 9C");
        assert_eq!(compare(Category::Flush, &h1, &h2), Ok(ShowdownResult::Higher));
    }

    #[test]
    fn full_house() {
        check_increasing(
            Category::FullHouse,
            "AS AC 8H 8C 8S",
            "9C 9H 9S KC KH",
            "JS JD JH QS QH",
        );
    }

    #[test]
    fn four_of_a_kind() {
        check_increasing(
            Category::FourOfAKind,
            "AS 8D 8H 8C 8S",
            "9C 9H 9S 9D KH",
            "JS JD JH JC QH",
        );
    }

    #[test]
    fn straight_flush() {
        check_split_and_win(
            Category::StraightFlush,
            "8D 7D 6D 4D 5D",
            "8C 7C 6C 4C 5C",
            "AD KD QD TD JD",
        );
    }

    #[test]
    fn mismatched_categories() {
        let high_card = hand("2S 4D 8H TC KD");
        let quads = hand("JS JD JH JC AS");

        assert_eq!(
            compare(Category::HighCard, &high_card, &quads),
            Err(Error::CategoryMismatch {
                expected: Category::HighCard,
                found: Category::FourOfAKind,
            })
        );

        assert_eq!(
            compare(Category::FourOfAKind, &high_card, &quads),
            Err(Error::CategoryMismatch {
                expected: Category::FourOfAKind,
                found: Category::HighCard,
            })
        );

        // A category that neither hand has.
        assert!(compare(Category::Flush, &quads, &quads).is_err());

        let h2 = hand("2D 4S 8C TD KH");
        assert_eq!(
            reduce(&[&high_card, &h2, &quads]),
            Err(Error::MixedCategories)
        );
    }

    #[test]
    fn reduce_trivial() {
        let hands: [Hand; 0] = [];
        assert!(reduce(&hands).unwrap().is_empty());

        let quads = hand("JS JD JH JC AS");
        assert_eq!(reduce(&[&quads]).unwrap(), vec![&&quads]);
    }

    #[test]
    fn reduce_winners_do_not_depend_on_order() {
        let mut hands = [
            "2S 2D 8H TC KD",
            "4S 4H 5C TC KC",
            "2H 2C 8C TD KH",
            "4D 4C 5D TD KS",
            "3S 3H 5H 8D KH",
            "4D 4C 5D TD KS",
        ]
        .map(hand)
        .to_vec();

        let expected = vec![hand("4S 4H 5C TC KC"), hand("4D 4C 5D TD KS"), hand("4D 4C 5D TD KS")];

        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..20 {
            hands.shuffle(&mut rng);

            let mut winners = reduce(&hands)
                .unwrap()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            winners.sort_by_key(|h| h.to_string());

            let mut expected = expected.clone();
            expected.sort_by_key(|h| h.to_string());
            assert_eq!(winners, expected);
        }
    }

    #[test]
    fn category_order_dominates_ranks() {
        // Quads beat a full house with higher triple, categories are never
        // tiebroken with each other.
        let quads = hand("QS QH QC QD 3S");
        let full_house = hand("KS KD KH 5S 5C");
        assert!(quads.category() > full_house.category());
        assert!(compare(Category::FourOfAKind, &quads, &full_house).is_err());

        let pair = hand("KS KC 3H 5D 6C");
        let high_card = hand("AS 2H 3C 5H 6D");
        assert!(pair.category() > high_card.category());
    }
}
