//! Game event types.

use serde::{Deserialize, Serialize};

use crate::core::Symbol;

/// Something the renderer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt (game start, reset or theme change).
    Dealt {
        /// Session generation of the new deck.
        generation: u64,
        /// Number of cards on the board.
        cards: usize,
    },

    /// A card was turned face up by the player.
    Flipped { position: usize },

    /// The two selected cards carry the same symbol.
    Matched {
        first: usize,
        second: usize,
        symbol: Symbol,
    },

    /// The two selected cards differ; they will turn back after the delay.
    Mismatched { first: usize, second: usize },

    /// A mismatched pair was turned face down again.
    Hidden { first: usize, second: usize },

    /// The selection emptied; the board accepts input again.
    SelectionCleared,

    /// Show the match celebration overlay.
    CelebrationStarted,

    /// Hide the match celebration overlay.
    CelebrationEnded,

    /// Every card is matched.
    Won { moves: u32 },
}

/// Ordered buffer of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all buffered events, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at buffered events without consuming them.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
