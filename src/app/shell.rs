//! Navigation between the home menu and a running game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::EngineConfig;
use crate::engine::MatchEngine;
use crate::error::ThemeError;
use crate::themes::{SymbolDef, Theme, ThemeId, ThemeRegistry, DINOSAURS};

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Game,
}

/// How to draw the card at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace<'a> {
    /// Show the card back.
    Hidden,
    /// Show the picture.
    Shown { def: &'a SymbolDef, matched: bool },
}

/// Application state: theme choice, current screen, running game.
#[derive(Debug)]
pub struct MemoryApp {
    registry: ThemeRegistry,
    config: EngineConfig,
    theme: ThemeId,
    screen: Screen,
    engine: Option<MatchEngine>,
}

impl MemoryApp {
    /// Start on the Home screen with `theme` selected.
    pub fn new(
        registry: ThemeRegistry,
        theme: ThemeId,
        config: EngineConfig,
    ) -> Result<Self, ThemeError> {
        registry.require(theme)?;
        Ok(Self {
            registry,
            config,
            theme,
            screen: Screen::Home,
            engine: None,
        })
    }

    /// Built-in themes, dinosaurs selected.
    #[must_use]
    pub fn with_builtins(config: EngineConfig) -> Self {
        Self {
            registry: ThemeRegistry::with_builtins(),
            config,
            theme: DINOSAURS,
            screen: Screen::Home,
            engine: None,
        }
    }

    // === Navigation ===

    /// Leave the menu and deal a game in the selected theme.
    pub fn start_game(&mut self) -> &mut MatchEngine {
        let symbols = self.current_theme().map(Theme::symbols).unwrap_or_default();
        debug!(theme = %self.theme, pairs = symbols.len(), "starting game");
        self.screen = Screen::Game;
        self.engine.insert(MatchEngine::new(&symbols, self.config.clone()))
    }

    /// Deal again in the same theme. Does nothing on the Home screen.
    pub fn new_game(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.reset();
        }
    }

    /// Back to the menu. The running game is discarded.
    pub fn back_to_home(&mut self) {
        if self.engine.take().is_some() {
            debug!("game abandoned");
        }
        self.screen = Screen::Home;
    }

    /// Select a theme. A running game is re-dealt with the new pictures.
    pub fn choose_theme(&mut self, theme: ThemeId) -> Result<(), ThemeError> {
        let symbols = self.registry.require(theme)?.symbols();
        self.theme = theme;
        debug!(%theme, "theme selected");

        if let Some(engine) = self.engine.as_mut() {
            engine.choose_symbols(&symbols);
        }
        Ok(())
    }

    // === Queries ===

    /// The screen to draw.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected theme id.
    #[must_use]
    pub fn theme_id(&self) -> ThemeId {
        self.theme
    }

    /// Selected theme.
    #[must_use]
    pub fn current_theme(&self) -> Option<&Theme> {
        self.registry.get(self.theme)
    }

    /// Themes to offer on the menu.
    #[must_use]
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The running game, on the Game screen.
    #[must_use]
    pub fn engine(&self) -> Option<&MatchEngine> {
        self.engine.as_ref()
    }

    /// The running game, for input and clock ticks.
    pub fn engine_mut(&mut self) -> Option<&mut MatchEngine> {
        self.engine.as_mut()
    }

    /// What the card at `position` should show.
    #[must_use]
    pub fn card_face(&self, position: usize) -> Option<CardFace<'_>> {
        let card = self.engine.as_ref()?.session().card(position)?;
        if !card.face_up {
            return Some(CardFace::Hidden);
        }
        let def = self.current_theme()?.get(card.symbol)?;
        Some(CardFace::Shown {
            def,
            matched: card.matched,
        })
    }
}
