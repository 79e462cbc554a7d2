//! Theme registry for lookup by id.

use rustc_hash::FxHashMap;

use super::builtin;
use super::theme::{Theme, ThemeId};
use crate::error::ThemeError;

/// Registry of available themes.
///
/// ```
/// use memory_match::themes::{ThemeRegistry, DINOSAURS};
///
/// let registry = ThemeRegistry::with_builtins();
/// let dinos = registry.get(DINOSAURS).unwrap();
/// assert_eq!(dinos.pair_count(), 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<ThemeId, Theme>,
}

impl ThemeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in themes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in builtin::all() {
            registry.themes.insert(theme.id, theme);
        }
        registry
    }

    /// Register a theme. Ids must be unique.
    pub fn register(&mut self, theme: Theme) -> Result<(), ThemeError> {
        if self.themes.contains_key(&theme.id) {
            return Err(ThemeError::DuplicateTheme(theme.id));
        }
        self.themes.insert(theme.id, theme);
        Ok(())
    }

    /// Get a theme by id.
    #[must_use]
    pub fn get(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(&id)
    }

    /// Get a theme by id, failing with `UnknownTheme`.
    pub fn require(&self, id: ThemeId) -> Result<&Theme, ThemeError> {
        self.get(id).ok_or(ThemeError::UnknownTheme(id))
    }

    /// Check if a theme id is registered.
    #[must_use]
    pub fn contains(&self, id: ThemeId) -> bool {
        self.themes.contains_key(&id)
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Themes in id order, for a menu.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Theme> {
        let mut themes: Vec<_> = self.themes.values().collect();
        themes.sort_by_key(|t| t.id);
        themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{ANIMALS, DINOSAURS, PREHISTORIC};

    #[test]
    fn test_builtins() {
        let registry = ThemeRegistry::with_builtins();

        assert_eq!(registry.len(), 3);
        assert!(registry.contains(DINOSAURS));
        assert!(registry.contains(ANIMALS));
        assert!(registry.contains(PREHISTORIC));

        let ids: Vec<_> = registry.sorted().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![DINOSAURS, ANIMALS, PREHISTORIC]);
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.is_empty());

        let theme = Theme::from_names(ThemeId::new(9), "Tiny", "tiny", ["a"]).unwrap();
        registry.register(theme.clone()).unwrap();

        assert_eq!(
            registry.register(theme),
            Err(ThemeError::DuplicateTheme(ThemeId::new(9)))
        );
    }

    #[test]
    fn test_require_unknown() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.require(ThemeId::new(5)).unwrap_err(),
            ThemeError::UnknownTheme(ThemeId::new(5))
        );
    }
}
