//! # memory-match
//!
//! A memory-matching (card pairs) game engine.
//!
//! ## Design Principles
//!
//! 1. **Plain State**: The engine is an ordinary struct mutated by explicit
//!    calls. No UI framework, no threads, no wall clock.
//!
//! 2. **Tolerant Input**: Invalid taps are ignored, never errors. Rapid
//!    double taps can't corrupt a game.
//!
//! 3. **Cancellable Timers**: Deferred resolutions carry a token tied to the
//!    session that scheduled them. Resetting a game invalidates them all.
//!
//! ## Modules
//!
//! - `core`: Symbols, cards, RNG, configuration
//! - `deck`: Deck builder (pairing and shuffling)
//! - `engine`: Match engine, sessions, timer queue
//! - `events`: Signals for the renderer
//! - `themes`: Image themes and the theme registry
//! - `app`: Home/Game screen navigation

pub mod core;
pub mod deck;
pub mod engine;
pub mod events;
pub mod themes;
pub mod app;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Card, EngineConfig, GameRng, Symbol};

pub use crate::deck::{arranged_deck, build_deck};

pub use crate::engine::{
    MatchEngine, Rejection, SelectOutcome, Session, SessionSnapshot,
    TimerToken,
};

pub use crate::events::GameEvent;

pub use crate::themes::{SymbolDef, Theme, ThemeId, ThemeRegistry};

pub use crate::app::{CardFace, MemoryApp, Screen};

pub use crate::error::{DeckError, ThemeError};
