// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealt table output.
use serde::Serialize;
use std::fmt;

use fivedraw_eval::dealer::Player;

/// A dealt table with the showdown winners.
#[derive(Debug, Serialize)]
pub struct Table<'a> {
    players: &'a [Player],
    winners: Vec<&'a str>,
}

impl<'a> Table<'a> {
    /// Creates a table from the dealt players and the showdown winners.
    pub fn new(players: &'a [Player], winners: &[&'a Player]) -> Self {
        Self {
            players,
            winners: winners.iter().map(|&p| p.name()).collect(),
        }
    }

    /// The table as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.players.iter().map(|p| p.name().len()).max().unwrap_or(0);

        for player in self.players {
            writeln!(
                f,
                "{:<width$}  {}  {}",
                player.name(),
                player.hand().symbols(),
                player.hand().category(),
            )?;
        }

        match self.winners.as_slice() {
            [] => Ok(()),
            [winner] => write!(f, "Winner: {winner}"),
            winners => write!(f, "Split pot: {}", winners.join(", ")),
        }
    }
}
