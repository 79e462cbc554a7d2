//! Theme definitions.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Symbol;
use crate::error::ThemeError;

/// Most symbols one theme can define (one per `Symbol` id).
pub const MAX_SYMBOLS: usize = u16::MAX as usize + 1;

/// Theme identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ThemeId(pub u16);

impl ThemeId {
    /// Create a new theme ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theme({})", self.0)
    }
}

/// What a symbol looks like in a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDef {
    pub symbol: Symbol,

    /// Display name (e.g. "trex").
    pub name: String,

    /// Image path relative to the host's asset root. The engine never
    /// opens it.
    pub asset: String,
}

/// A named set of pictures a deck can be dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    symbols: Vec<SymbolDef>,
}

impl Theme {
    /// Build a theme from picture names.
    ///
    /// Symbols are numbered in list order and each asset path is
    /// `{asset_dir}/{name}.webp` (just `{name}.webp` for an empty dir).
    /// Names must be unique, and there can be at most 65536 of them.
    pub fn from_names<I, S>(
        id: ThemeId,
        name: impl Into<String>,
        asset_dir: &str,
        names: I,
    ) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(ThemeError::DuplicateSymbolName {
                theme: name,
                name: duplicate.clone(),
            });
        }

        if names.len() > MAX_SYMBOLS {
            return Err(ThemeError::TooManySymbols {
                theme: name,
                count: names.len(),
            });
        }

        Ok(Self::assemble(id, name, asset_dir, names))
    }

    /// Build without checking names. Names past the symbol id space are
    /// dropped.
    pub(crate) fn assemble(id: ThemeId, name: String, asset_dir: &str, names: Vec<String>) -> Self {
        let symbols = (0..=u16::MAX)
            .map(Symbol::new)
            .zip(names)
            .map(|(symbol, symbol_name)| SymbolDef {
                symbol,
                asset: if asset_dir.is_empty() {
                    format!("{}.webp", symbol_name)
                } else {
                    format!("{}/{}.webp", asset_dir, symbol_name)
                },
                name: symbol_name,
            })
            .collect();

        Self { id, name, symbols }
    }

    /// Symbol definitions in order.
    #[must_use]
    pub fn symbol_defs(&self) -> &[SymbolDef] {
        &self.symbols
    }

    /// The symbols to deal from.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.symbols.iter().map(|d| d.symbol).collect()
    }

    /// Look up a symbol's definition.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<&SymbolDef> {
        self.symbols.get(symbol.raw() as usize)
    }

    /// Number of pairs a game in this theme has.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names() {
        let theme = Theme::from_names(ThemeId::new(4), "Fruit", "fruit", ["apple", "pear"]).unwrap();

        assert_eq!(theme.pair_count(), 2);
        assert_eq!(theme.symbols(), vec![Symbol(0), Symbol(1)]);

        let pear = theme.get(Symbol(1)).unwrap();
        assert_eq!(pear.name, "pear");
        assert_eq!(pear.asset, "fruit/pear.webp");
        assert!(theme.get(Symbol(2)).is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Theme::from_names(ThemeId::new(0), "Fruit", "fruit", ["apple", "apple"])
            .unwrap_err();
        assert_eq!(
            err,
            ThemeError::DuplicateSymbolName {
                theme: "Fruit".to_string(),
                name: "apple".to_string(),
            }
        );
    }

    #[test]
    fn test_symbol_id_space_limit() {
        let names = |count: usize| (0..count).map(|i| format!("pic{}", i));

        let full = Theme::from_names(ThemeId::new(1), "Full", "", names(MAX_SYMBOLS)).unwrap();
        assert_eq!(full.pair_count(), MAX_SYMBOLS);
        assert_eq!(full.symbol_defs()[MAX_SYMBOLS - 1].symbol, Symbol(u16::MAX));

        let err = Theme::from_names(ThemeId::new(2), "Over", "", names(MAX_SYMBOLS + 1))
            .unwrap_err();
        assert_eq!(
            err,
            ThemeError::TooManySymbols {
                theme: "Over".to_string(),
                count: MAX_SYMBOLS + 1,
            }
        );
    }

    #[test]
    fn test_theme_id_display() {
        assert_eq!(format!("{}", ThemeId::new(2)), "Theme(2)");
        assert_eq!(ThemeId::new(2).raw(), 2);
    }
}
