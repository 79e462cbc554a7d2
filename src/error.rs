//! Error types for memory-match.
//!
//! Gameplay never fails; these cover building decks and themes.

use thiserror::Error;

use crate::core::Symbol;
use crate::themes::ThemeId;

/// Errors from building a deck in a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("{symbol} appears {count} times, expected exactly 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },
}

/// Errors from defining, registering or choosing themes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme {theme:?} lists symbol name {name:?} more than once")]
    DuplicateSymbolName { theme: String, name: String },

    #[error("theme {theme:?} has {count} symbols, at most 65536 fit")]
    TooManySymbols { theme: String, count: usize },

    #[error("theme {0} is already registered")]
    DuplicateTheme(ThemeId),

    #[error("unknown theme {0}")]
    UnknownTheme(ThemeId),
}
