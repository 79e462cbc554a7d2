//! Property tests for the deck builder and match engine.
//!
//! Random decks and random tap sequences must never break the pairing,
//! selection or move-count invariants.

use std::time::Duration;

use proptest::prelude::*;

use memory_match::core::{EngineConfig, GameRng, Symbol};
use memory_match::deck::build_deck;
use memory_match::engine::{MatchEngine, SelectOutcome};

/// One thing a player or the clock can do.
#[derive(Clone, Debug)]
enum Step {
    Select(usize),
    Wait(u64),
    Reset,
}

fn step(max_position: usize) -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0..max_position + 2).prop_map(Step::Select),
        3 => (0u64..2000).prop_map(Step::Wait),
        1 => Just(Step::Reset),
    ]
}

proptest! {
    #[test]
    fn deck_pairs_every_symbol(n in 1u16..40, seed in any::<u64>()) {
        let symbols: Vec<_> = Symbol::range(n).collect();
        let deck = build_deck(&symbols, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 2 * n as usize);
        for (i, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.position, i);
            prop_assert!(!card.face_up && !card.matched);
        }
        for symbol in &symbols {
            prop_assert_eq!(deck.iter().filter(|c| c.symbol == *symbol).count(), 2);
        }
    }

    #[test]
    fn invariants_hold_for_any_tap_sequence(
        pairs in 1u16..8,
        seed in any::<u64>(),
        steps in prop::collection::vec(step(16), 0..80),
    ) {
        let symbols: Vec<_> = Symbol::range(pairs).collect();
        let mut engine = MatchEngine::new(&symbols, EngineConfig::new().with_seed(seed));

        for step in steps {
            let before = engine.snapshot();
            match step {
                Step::Select(position) => {
                    let outcome = engine.select(position);
                    let after = engine.snapshot();

                    if outcome.is_rejected() {
                        prop_assert_eq!(&after, &before);
                    } else if outcome.completes_pair() {
                        prop_assert_eq!(after.move_count, before.move_count + 1);
                    } else {
                        prop_assert_eq!(after.move_count, before.move_count);
                    }

                    if let SelectOutcome::Matched { first, second, .. } = outcome {
                        prop_assert!(after.cards[first].matched && after.cards[second].matched);
                    }
                }
                Step::Wait(millis) => {
                    engine.advance(Duration::from_millis(millis));
                    let after = engine.snapshot();
                    prop_assert_eq!(after.move_count, before.move_count);
                }
                Step::Reset => {
                    engine.reset();
                    prop_assert_eq!(engine.session().move_count(), 0);
                }
            }

            let snapshot = engine.snapshot();
            prop_assert!(snapshot.selection.len() <= 2);
            for position in &snapshot.selection {
                prop_assert!(snapshot.cards[*position].face_up);
            }
            for card in &snapshot.cards {
                prop_assert!(!card.matched || card.face_up);
            }
            // A matched card is only ever unmatched by a new deal.
            if snapshot.generation == before.generation {
                for (old, new) in before.cards.iter().zip(snapshot.cards.iter()) {
                    prop_assert!(!old.matched || new.matched);
                }
            }
            prop_assert_eq!(snapshot.won, snapshot.cards.iter().all(|c| c.matched));
        }
    }

    #[test]
    fn perfect_play_wins_in_pair_count_moves(pairs in 1u16..12, seed in any::<u64>()) {
        let symbols: Vec<_> = Symbol::range(pairs).collect();
        let mut engine = MatchEngine::new(&symbols, EngineConfig::new().with_seed(seed));

        for symbol in &symbols {
            let positions: Vec<_> = engine
                .session()
                .cards()
                .iter()
                .filter(|c| c.symbol == *symbol)
                .map(|c| c.position)
                .collect();
            engine.select(positions[0]);
            engine.select(positions[1]);
            engine.advance(Duration::from_millis(1000));
        }

        prop_assert!(engine.is_won());
        prop_assert_eq!(engine.session().move_count(), pairs as u32);
    }
}
