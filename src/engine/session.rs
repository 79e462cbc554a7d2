//! Session state: one in-progress game.
//!
//! The session holds the pure transition rules. Scheduling the deferred
//! halves of a transition is the engine's job; the session only exposes the
//! mutations those timers perform.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::timer::TimerToken;
use crate::core::{Card, Symbol};

/// Face-up positions of the pair attempt in progress (at most two).
pub type Selection = SmallVec<[usize; 2]>;

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No card at that position.
    OutOfRange,
    /// Two cards are already up and waiting to resolve.
    SelectionFull,
    /// The card is already face up (selected a moment ago).
    AlreadyFaceUp,
    /// The card already belongs to a found pair.
    AlreadyMatched,
}

/// Result of selecting a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// First card of a pair turned up.
    Flipped,
    /// Second card completed a pair.
    Matched {
        first: usize,
        second: usize,
        symbol: Symbol,
    },
    /// Second card differs from the first.
    Mismatched { first: usize, second: usize },
}

impl SelectOutcome {
    /// Was the selection ignored?
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectOutcome::Rejected(_))
    }

    /// Did this selection complete a pair attempt (and count a move)?
    #[must_use]
    pub fn completes_pair(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. }
        )
    }
}

/// The full mutable state of one game.
#[derive(Clone, Debug)]
pub struct Session {
    generation: u64,
    cards: Vector<Card>,
    selection: Selection,
    move_count: u32,
    found: Vec<Symbol>,
    celebration: Option<TimerToken>,
}

impl Session {
    /// Create a session over a freshly dealt deck.
    #[must_use]
    pub fn new(generation: u64, cards: Vec<Card>) -> Self {
        Self {
            generation,
            cards: Vector::from(cards),
            selection: Selection::new(),
            move_count: 0,
            found: Vec::new(),
            celebration: None,
        }
    }

    /// Identifier of this session; grows with every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cards in position order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// The card at `position`.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Positions of the pair attempt in progress.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Completed pair attempts.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Symbols of the pairs found so far, in the order they were matched.
    #[must_use]
    pub fn found_symbols(&self) -> &[Symbol] {
        &self.found
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Is the match celebration showing?
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Every card matched. An empty board counts as won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Capture the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            cards: self.cards.clone(),
            selection: self.selection.clone(),
            move_count: self.move_count,
            celebrating: self.is_celebrating(),
            won: self.is_won(),
        }
    }

    /// Apply a player selection.
    pub(crate) fn select(&mut self, position: usize) -> SelectOutcome {
        if self.selection.len() >= 2 {
            return SelectOutcome::Rejected(Rejection::SelectionFull);
        }
        let Some(card) = self.cards.get_mut(position) else {
            return SelectOutcome::Rejected(Rejection::OutOfRange);
        };
        if !card.is_selectable() {
            let reason = if card.matched {
                Rejection::AlreadyMatched
            } else {
                Rejection::AlreadyFaceUp
            };
            return SelectOutcome::Rejected(reason);
        }

        card.reveal();
        self.selection.push(position);
        if self.selection.len() < 2 {
            return SelectOutcome::Flipped;
        }

        self.move_count += 1;
        let (first, second) = (self.selection[0], self.selection[1]);
        let symbol = self.cards[first].symbol;
        if symbol != self.cards[second].symbol {
            return SelectOutcome::Mismatched { first, second };
        }

        for position in [first, second] {
            if let Some(card) = self.cards.get_mut(position) {
                card.mark_matched();
            }
        }
        self.found.push(symbol);
        SelectOutcome::Matched {
            first,
            second,
            symbol,
        }
    }

    /// End a resolved pair attempt.
    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Turn back exactly the two captured positions and end the attempt.
    pub(crate) fn hide_pair(&mut self, first: usize, second: usize) {
        for position in [first, second] {
            if let Some(card) = self.cards.get_mut(position) {
                card.hide();
            }
        }
        self.selection.clear();
    }

    pub(crate) fn celebration(&self) -> Option<TimerToken> {
        self.celebration
    }

    pub(crate) fn set_celebration(&mut self, token: Option<TimerToken>) {
        self.celebration = token;
    }
}

/// Read-only copy of a session, cheap to take after every change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub generation: u64,
    pub cards: Vector<Card>,
    pub selection: Selection,
    pub move_count: u32,
    pub celebrating: bool,
    pub won: bool,
}

impl SessionSnapshot {
    /// Positions currently showing their symbol.
    pub fn face_up_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards.iter().filter(|c| c.face_up).map(|c| c.position)
    }
}
