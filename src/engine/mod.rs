//! Match engine.
//!
//! ## Transition rules
//!
//! - Selecting a face-down card turns it up and adds it to the selection.
//! - The second card counts a move and is compared with the first:
//!   - equal symbols are matched at once; the selection clears after the
//!     resolve delay
//!   - different symbols turn back face down after the resolve delay
//! - While two cards are selected every further selection is ignored.
//! - `reset()` deals a new session; deferred actions of the old one are
//!   dropped and their tokens stop working.
//!
//! Deferred actions run on a `TimerQueue` driven by `MatchEngine::advance`.

mod match_engine;
mod session;
mod timer;

pub use match_engine::MatchEngine;
pub use session::{Rejection, SelectOutcome, Selection, Session, SessionSnapshot};
pub use timer::{Deferred, PendingTimer, TimerQueue, TimerToken};
