//! Core engine types: symbols, cards, RNG, configuration.
//!
//! These are the building blocks shared by the deck builder, the match
//! engine and the theme layer.

pub mod symbol;
pub mod card;
pub mod rng;
pub mod config;

pub use symbol::Symbol;
pub use card::Card;
pub use rng::GameRng;
pub use config::{EngineConfig, DEFAULT_CELEBRATION_DURATION, DEFAULT_RESOLVE_DELAY};
