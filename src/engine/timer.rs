//! Deferred actions and their cancellable tokens.
//!
//! Deadlines are measured on the engine's logical clock (time since the
//! engine was created), so the queue never reads the wall clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one scheduled action.
///
/// `generation` is the session that scheduled it. Tokens are never reused,
/// so a token from a replaced session can't address anything in the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub generation: u64,
    pub sequence: u64,
}

/// What to do when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// End the pause after a match; the selection empties.
    ClearSelection,
    /// Turn a mismatched pair back over and empty the selection.
    HideMismatch { first: usize, second: usize },
    /// Turn off the celebration signal.
    EndCelebration,
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: Duration,
    token: TimerToken,
    action: Deferred,
}

/// A pending timer as seen by hosts that drive their own timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub due: Duration,
    pub action: Deferred,
}

/// Pending deferred actions, fired in deadline order.
///
/// Only a handful of entries are ever live, so a flat `Vec` is scanned
/// instead of keeping a heap.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Scheduled>,
    next_sequence: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire at `due`.
    pub fn schedule(&mut self, generation: u64, due: Duration, action: Deferred) -> TimerToken {
        let token = TimerToken {
            generation,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.entries.push(Scheduled { due, token, action });
        token
    }

    /// Remove a scheduled action. Returns it if it was still pending.
    pub fn cancel(&mut self, token: TimerToken) -> Option<Deferred> {
        let index = self.entries.iter().position(|e| e.token == token)?;
        Some(self.entries.remove(index).action)
    }

    /// Drop every pending action. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Pop the earliest action due at or before `now`.
    ///
    /// Ties go to the action scheduled first.
    pub fn pop_due(&mut self, now: Duration) -> Option<PendingTimer> {
        let index = self.earliest()?;
        if self.entries[index].due > now {
            return None;
        }
        Some(self.take(index))
    }

    /// Pop the earliest action regardless of its deadline.
    pub fn pop_next(&mut self) -> Option<PendingTimer> {
        let index = self.earliest()?;
        Some(self.take(index))
    }

    /// Pending actions in deadline order.
    #[must_use]
    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut pending: Vec<_> = self
            .entries
            .iter()
            .map(|e| PendingTimer {
                token: e.token,
                due: e.due,
                action: e.action,
            })
            .collect();
        pending.sort_by_key(|p| (p.due, p.token.sequence));
        pending
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| (e.due, e.token.sequence))
            .map(|(i, _)| i)
    }

    fn take(&mut self, index: usize) -> PendingTimer {
        let entry = self.entries.remove(index);
        PendingTimer {
            token: entry.token,
            due: entry.due,
            action: entry.action,
        }
    }
}
