//! Engine configuration.
//!
//! Hosts configure timing and randomness at startup through `EngineConfig`.
//! Nothing is read from files or the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default pause before a completed pair attempt resolves.
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Default time the match celebration stays visible.
pub const DEFAULT_CELEBRATION_DURATION: Duration = Duration::from_millis(1500);

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause between the second card flipping and the pair resolving
    /// (selection cleared, or a mismatch turned back over).
    pub resolve_delay: Duration,

    /// How long the celebration signal stays on after a match.
    pub celebration_duration: Duration,

    /// Seed for the deck shuffle. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolve_delay: DEFAULT_RESOLVE_DELAY,
            celebration_duration: DEFAULT_CELEBRATION_DURATION,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolve delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the celebration duration.
    #[must_use]
    pub fn with_celebration_duration(mut self, duration: Duration) -> Self {
        self.celebration_duration = duration;
        self
    }

    /// Use a fixed shuffle seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
