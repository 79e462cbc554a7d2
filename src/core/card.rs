//! Card state.
//!
//! A `Card` is one tile on the board. Its position never changes during a
//! session; only the `face_up` and `matched` flags do.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// One tile at a fixed board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Board position (0..2N-1), unique within a session.
    pub position: usize,

    /// The picture on the card's face.
    pub symbol: Symbol,

    /// Is the card currently showing its symbol?
    pub face_up: bool,

    /// Has the card been paired? Implies `face_up`.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(position: usize, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Can this card be turned over by the player?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card back over. Matched cards stay up.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
