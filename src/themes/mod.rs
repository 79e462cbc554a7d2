//! Image themes.
//!
//! A theme maps the engine's opaque symbols to picture names and asset
//! paths. Changing theme means dealing a new game from its symbols.

mod builtin;
mod registry;
mod theme;

pub use builtin::{animals, dinosaurs, prehistoric, ANIMALS, DINOSAURS, PREHISTORIC};
pub use registry::ThemeRegistry;
pub use theme::{SymbolDef, Theme, ThemeId, MAX_SYMBOLS};
