// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw command line dealer.
//!
//! Deals a five card draw table from a shuffled or stacked deck and prints
//! the players hands and the showdown winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow, bail};
use clap::Parser;
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use fivedraw_cards::{Deck, parse_cards};
use fivedraw_eval::dealer::{self, Dealer};

pub mod table;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=7))]
    players: u8,
    /// Seed for shuffling the deck.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the table as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
    /// The players hands for a stacked deck, i.e. "KS KC 3H 5D 6C".
    hands: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let num_players = cli.players as usize;
    let deck = make_deck(&cli, num_players)?;

    let dealer = Dealer::new(deck);
    let players = dealer
        .deal(num_players)
        .map_err(|e| anyhow!("Deal error: {e}"))?;
    let winners = dealer
        .showdown(&players)
        .map_err(|e| anyhow!("Showdown error: {e}"))?;

    let table = table::Table::new(&players, &winners);
    if cli.json {
        println!("{}", table.to_json()?);
    } else {
        println!("{table}");
    }

    Ok(())
}

/// Creates a stacked deck from the command line hands or a shuffled deck.
fn make_deck(cli: &Cli, num_players: usize) -> Result<Deck> {
    if cli.hands.is_empty() {
        let deck = match cli.seed {
            Some(seed) => {
                debug!("Shuffling deck with seed {seed}");
                Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
            }
            None => Deck::new_and_shuffled(&mut rand::rng()),
        };

        return Ok(deck);
    }

    if cli.hands.len() != num_players {
        bail!(
            "Expected {num_players} hands for {num_players} players, got {}",
            cli.hands.len()
        );
    }

    let hands = cli
        .hands
        .iter()
        .map(|h| parse_cards(h).map_err(|e| anyhow!("Invalid hand {h:?}: {e}")))
        .collect::<Result<Vec<_>>>()?;

    dealer::stacked_deck(&hands).map_err(|e| anyhow!("Stacked deck error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["fivedraw"]).unwrap();
        assert_eq!(cli.players, 2);
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
        assert!(cli.hands.is_empty());
    }

    #[test]
    fn cli_players_range() {
        assert!(Cli::try_parse_from(["fivedraw", "--players", "1"]).is_err());
        assert!(Cli::try_parse_from(["fivedraw", "--players", "8"]).is_err());
        assert!(Cli::try_parse_from(["fivedraw", "--players", "7"]).is_ok());
    }

    #[test]
    fn seeded_deck() {
        let cli = Cli::try_parse_from(["fivedraw", "--seed", "7"]).unwrap();
        assert_eq!(make_deck(&cli, 2).unwrap(), make_deck(&cli, 2).unwrap());
    }

    #[test]
    fn stacked_hands() {
        let cli =
            Cli::try_parse_from(["fivedraw", "QS QH QC QD 3S", "KS,KD,KH,5S,5C"]).unwrap();
        let deck = make_deck(&cli, 2).unwrap();
        let players = Dealer::new(deck).deal(2).unwrap();
        assert_eq!(players[0].hand().to_string(), "QS QH QC QD 3S");
        assert_eq!(players[1].hand().to_string(), "KS KD KH 5S 5C");

        // Wrong number of hands.
        let cli = Cli::try_parse_from(["fivedraw", "-p", "3", "QS QH QC QD 3S"]).unwrap();
        assert!(make_deck(&cli, 3).is_err());

        // Invalid cards.
        let cli = Cli::try_parse_from(["fivedraw", "QS QH QC QD 3X", "KS KD KH 5S 5C"]).unwrap();
        assert!(make_deck(&cli, 2).is_err());

        let cli = Cli::try_parse_from(["fivedraw", "QS QH QC QD 3S", "QS KD KH 5S 5C"]).unwrap();
        assert!(make_deck(&cli, 2).is_err());
    }
}
