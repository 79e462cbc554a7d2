//! Deck construction.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::{Card, GameRng, Symbol};
use crate::error::DeckError;

/// Build a shuffled deck holding every symbol exactly twice.
///
/// Repeated input symbols are collapsed to their first occurrence, so the
/// pairing invariant holds whatever the caller passes. An empty symbol list
/// gives an empty deck.
///
/// ```
/// use memory_match::core::{GameRng, Symbol};
/// use memory_match::deck::build_deck;
///
/// let mut rng = GameRng::new(42);
/// let deck = build_deck(&[Symbol::new(1), Symbol::new(2)], &mut rng);
///
/// assert_eq!(deck.len(), 4);
/// assert!(deck.iter().enumerate().all(|(i, card)| card.position == i));
/// ```
pub fn build_deck(symbols: &[Symbol], rng: &mut GameRng) -> Vec<Card> {
    let mut seen = FxHashSet::default();
    let mut instances: Vec<Symbol> = Vec::with_capacity(symbols.len() * 2);
    for &symbol in symbols {
        if seen.insert(symbol) {
            instances.push(symbol);
            instances.push(symbol);
        }
    }

    rng.shuffle(&mut instances);
    trace!(cards = instances.len(), seed = rng.seed(), "shuffled deck");

    instances
        .into_iter()
        .enumerate()
        .map(|(position, symbol)| Card::new(position, symbol))
        .collect()
}

/// Build a deck in exactly the given order, without shuffling.
///
/// Every symbol in `layout` must occur exactly twice.
pub fn arranged_deck(layout: &[Symbol]) -> Result<Vec<Card>, DeckError> {
    let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
    for &symbol in layout {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    // Report the first offender in layout order so errors are stable.
    if let Some(&symbol) = layout.iter().find(|s| counts[*s] != 2) {
        return Err(DeckError::UnpairedSymbol {
            symbol,
            count: counts[&symbol],
        });
    }

    Ok(layout
        .iter()
        .enumerate()
        .map(|(position, &symbol)| Card::new(position, symbol))
        .collect())
}

/// The distinct symbols of a deck, in first-seen order.
pub fn deck_symbols(cards: &[Card]) -> Vec<Symbol> {
    let mut seen = FxHashSet::default();
    cards
        .iter()
        .map(|card| card.symbol)
        .filter(|symbol| seen.insert(*symbol))
        .collect()
}
