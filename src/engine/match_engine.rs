//! The match engine: session, timers and events behind one API.

use std::time::Duration;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::session::{SelectOutcome, Session, SessionSnapshot};
use super::timer::{Deferred, PendingTimer, TimerQueue, TimerToken};
use crate::core::{Card, EngineConfig, GameRng, Symbol};
use crate::deck::{arranged_deck, build_deck, deck_symbols};
use crate::error::DeckError;
use crate::events::{EventLog, GameEvent};

/// Memory game state machine.
///
/// ## Driving the engine
///
/// - `select()`: the player tapped a card; returns immediately
/// - `advance()`: time passed; fires due deferred actions
/// - `reset()` / `choose_symbols()`: deal a new game
///
/// After any call, `snapshot()` gives the board and `drain_events()` the
/// signals to animate.
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::{EngineConfig, Symbol};
/// use memory_match::engine::MatchEngine;
///
/// let (a, b) = (Symbol::new(0), Symbol::new(1));
/// let mut engine = MatchEngine::with_layout(&[a, b, a, b], EngineConfig::new()).unwrap();
///
/// engine.select(0);
/// engine.select(2);
/// assert_eq!(engine.session().move_count(), 1);
///
/// engine.advance(Duration::from_millis(1000));
/// assert!(engine.session().selection().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: EngineConfig,
    rng: GameRng,
    symbols: Vec<Symbol>,
    session: Session,
    timers: TimerQueue,
    clock: Duration,
    events: EventLog,
}

impl MatchEngine {
    /// Deal a shuffled game over `symbols`.
    #[must_use]
    pub fn new(symbols: &[Symbol], config: EngineConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let cards = build_deck(symbols, &mut rng);
        let symbols = deck_symbols(&cards);
        Self::from_parts(config, rng, symbols, cards)
    }

    /// Start from a fixed card order. Later resets shuffle the same symbols.
    pub fn with_layout(layout: &[Symbol], config: EngineConfig) -> Result<Self, DeckError> {
        let cards = arranged_deck(layout)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let symbols = deck_symbols(&cards);
        Ok(Self::from_parts(config, rng, symbols, cards))
    }

    fn from_parts(
        config: EngineConfig,
        rng: GameRng,
        symbols: Vec<Symbol>,
        cards: Vec<Card>,
    ) -> Self {
        let mut engine = Self {
            config,
            rng,
            symbols,
            session: Session::new(1, cards),
            timers: TimerQueue::new(),
            clock: Duration::ZERO,
            events: EventLog::new(),
        };
        engine.announce_deal();
        engine
    }

    // === Inbound ===

    /// The player selected the card at `position`.
    ///
    /// Invalid selections change nothing; the outcome says why.
    pub fn select(&mut self, position: usize) -> SelectOutcome {
        let outcome = self.session.select(position);
        let generation = self.session.generation();

        match outcome {
            SelectOutcome::Rejected(reason) => {
                trace!(position, ?reason, "selection ignored");
            }
            SelectOutcome::Flipped => {
                self.events.push(GameEvent::Flipped { position });
            }
            SelectOutcome::Matched {
                first,
                second,
                symbol,
            } => {
                self.events.push(GameEvent::Flipped { position });
                self.events.push(GameEvent::Matched {
                    first,
                    second,
                    symbol,
                });
                debug!(
                    first,
                    second,
                    %symbol,
                    moves = self.session.move_count(),
                    "pair matched"
                );
                let resolve_at = self.clock.saturating_add(self.config.resolve_delay);
                self.timers
                    .schedule(generation, resolve_at, Deferred::ClearSelection);
                self.start_celebration();

                if self.session.is_won() {
                    let moves = self.session.move_count();
                    debug!(moves, "game won");
                    self.events.push(GameEvent::Won { moves });
                }
            }
            SelectOutcome::Mismatched { first, second } => {
                self.events.push(GameEvent::Flipped { position });
                self.events.push(GameEvent::Mismatched { first, second });
                debug!(first, second, moves = self.session.move_count(), "pair mismatched");
                let resolve_at = self.clock.saturating_add(self.config.resolve_delay);
                self.timers.schedule(
                    generation,
                    resolve_at,
                    Deferred::HideMismatch { first, second },
                );
            }
        }

        outcome
    }

    /// Deal a new game over the current symbols.
    ///
    /// Anything still scheduled for the old game is dropped. A celebration
    /// in progress ends before the new deal is announced.
    pub fn reset(&mut self) {
        let generation = self.session.generation() + 1;
        let dropped = self.timers.len();
        self.timers.clear();
        if self.session.is_celebrating() {
            self.events.push(GameEvent::CelebrationEnded);
        }

        let cards = build_deck(&self.symbols, &mut self.rng);
        self.session = Session::new(generation, cards);
        debug!(generation, dropped_timers = dropped, "game reset");
        self.announce_deal();
    }

    /// Switch to a new symbol set (theme change) and deal.
    pub fn choose_symbols(&mut self, symbols: &[Symbol]) {
        let mut seen = FxHashSet::default();
        self.symbols = symbols.iter().copied().filter(|s| seen.insert(*s)).collect();
        debug!(symbols = self.symbols.len(), "symbol set changed");
        self.reset();
    }

    /// Move the clock forward and fire every action now due.
    ///
    /// Returns the number of actions applied. The clock stops at
    /// `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.clock = self.clock.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(self.clock) {
            self.apply(timer);
            fired += 1;
        }
        fired
    }

    /// Fire everything pending right away, in deadline order.
    ///
    /// The clock jumps to the last deadline fired.
    pub fn flush(&mut self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_next() {
            self.clock = self.clock.max(timer.due);
            self.apply(timer);
            fired += 1;
        }
        fired
    }

    /// Fire one action early, for hosts that arm their own timers.
    ///
    /// Returns false if the token was already fired or belongs to a game
    /// that has since been reset.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if token.generation != self.session.generation() {
            trace!(?token, "stale timer ignored");
            return false;
        }
        let Some(action) = self.timers.cancel(token) else {
            return false;
        };
        let due = self.clock;
        self.apply(PendingTimer { token, due, action });
        true
    }

    // === Outbound ===

    /// The current game.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Capture the current game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Every card matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Time until the next deferred action is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|due| due.saturating_sub(self.clock))
    }

    /// Deferred actions still waiting, in deadline order.
    #[must_use]
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.timers.pending()
    }

    /// Logical time since the engine was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// The symbol set new games are dealt from.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Internals ===

    fn announce_deal(&mut self) {
        let generation = self.session.generation();
        let cards = self.session.cards().len();
        debug!(generation, cards, seed = self.rng.seed(), "dealt deck");
        self.events.push(GameEvent::Dealt { generation, cards });

        if cards == 0 {
            self.events.push(GameEvent::Won { moves: 0 });
        }
    }

    fn start_celebration(&mut self) {
        if let Some(previous) = self.session.celebration() {
            self.timers.cancel(previous);
        }
        let token = self.timers.schedule(
            self.session.generation(),
            self.clock.saturating_add(self.config.celebration_duration),
            Deferred::EndCelebration,
        );
        self.session.set_celebration(Some(token));
        self.events.push(GameEvent::CelebrationStarted);
    }

    fn apply(&mut self, timer: PendingTimer) {
        trace!(token = ?timer.token, action = ?timer.action, "timer fired");
        match timer.action {
            Deferred::ClearSelection => {
                self.session.clear_selection();
                self.events.push(GameEvent::SelectionCleared);
            }
            Deferred::HideMismatch { first, second } => {
                self.session.hide_pair(first, second);
                self.events.push(GameEvent::Hidden { first, second });
                self.events.push(GameEvent::SelectionCleared);
            }
            Deferred::EndCelebration => {
                if self.session.celebration() == Some(timer.token) {
                    self.session.set_celebration(None);
                    self.events.push(GameEvent::CelebrationEnded);
                }
            }
        }
    }
}
