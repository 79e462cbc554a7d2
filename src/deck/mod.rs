//! Deck builder.
//!
//! Turns a set of N symbols into 2N face-down cards, each symbol exactly
//! twice, in uniformly shuffled order.

mod builder;

pub use builder::{arranged_deck, build_deck, deck_symbols};
