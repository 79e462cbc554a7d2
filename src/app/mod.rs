//! Two-screen application model.
//!
//! The Home screen picks a theme and starts a game; the Game screen owns one
//! match engine and offers "new game" and "home". Drawing either screen is
//! left to the host.

mod shell;

pub use shell::{CardFace, MemoryApp, Screen};
