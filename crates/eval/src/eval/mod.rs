// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier and tiebreaker.
//!
//! A [Hand] is classified into a [Category] by running the [matchers] category
//! rules from the strongest to the weakest. Hands in the same category are
//! compared using the [Ranking] computed at classification, and [reduce]
//! selects the winning hands amongst hands of the same category.

mod category;
pub use category::Category;

mod hand;
pub use hand::Hand;

pub mod matchers;

mod ranking;
pub use ranking::Ranking;

pub mod tiebreak;
pub use tiebreak::{ShowdownResult, compare, reduce};
