//! Symbol identifiers.
//!
//! A `Symbol` names the picture shared by one pair of cards. The engine only
//! compares symbols for equality; themes attach names and assets to them.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a pair's picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Symbols `0..count`, handy for theme-less games and tests.
    pub fn range(count: u16) -> impl Iterator<Item = Symbol> {
        (0..count).map(Symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol() {
        let symbol = Symbol::new(7);
        assert_eq!(symbol.raw(), 7);
        assert_eq!(format!("{}", symbol), "Symbol(7)");
    }

    #[test]
    fn test_symbol_range() {
        let symbols: Vec<_> = Symbol::range(3).collect();
        assert_eq!(symbols, vec![Symbol(0), Symbol(1), Symbol(2)]);
        assert_eq!(Symbol::range(0).count(), 0);
    }
}
