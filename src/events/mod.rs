//! Events observed by the presentation layer.
//!
//! The engine pushes a `GameEvent` for every visible change. Renderers drain
//! them to drive flip animations, the celebration overlay and the win screen.

mod event;

pub use event::{EventLog, GameEvent};
