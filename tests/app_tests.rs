//! Application shell tests.
//!
//! Home -> Game -> Home navigation, theme switching and card faces.

use std::time::Duration;

use memory_match::app::{CardFace, MemoryApp, Screen};
use memory_match::core::EngineConfig;
use memory_match::events::GameEvent;
use memory_match::themes::{Theme, ThemeId, ThemeRegistry, ANIMALS, DINOSAURS};

fn config() -> EngineConfig {
    EngineConfig::new().with_seed(2024)
}

/// Start a game, play a pair, go home.
#[test]
fn test_home_game_home() {
    let mut app = MemoryApp::with_builtins(config());
    assert_eq!(app.screen(), Screen::Home);

    app.start_game();
    assert_eq!(app.screen(), Screen::Game);

    let engine = app.engine_mut().unwrap();
    engine.select(0);
    engine.select(1);
    engine.advance(Duration::from_millis(1000));
    assert_eq!(engine.session().move_count(), 1);

    app.back_to_home();
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.engine().is_none());

    // A new start is a fresh game.
    let engine = app.start_game();
    assert_eq!(engine.session().move_count(), 0);
}

/// "New game" re-deals in place.
#[test]
fn test_new_game_resets_moves() {
    let mut app = MemoryApp::with_builtins(config());
    let engine = app.start_game();
    engine.select(0);
    engine.select(1);

    app.new_game();

    let engine = app.engine().unwrap();
    assert_eq!(engine.session().move_count(), 0);
    assert_eq!(engine.session().generation(), 2);
}

/// Switching theme on the menu affects the next game.
#[test]
fn test_theme_choice_on_menu() {
    let mut app = MemoryApp::with_builtins(config());
    app.choose_theme(ANIMALS).unwrap();
    assert_eq!(app.theme_id(), ANIMALS);

    app.start_game().select(4);
    match app.card_face(4) {
        Some(CardFace::Shown { def, .. }) => {
            assert!(def.asset.starts_with("Memory/Animals/"));
        }
        other => panic!("expected a shown card, got {:?}", other),
    }
}

/// Switching theme mid-game re-deals and drops pending timers.
#[test]
fn test_theme_change_mid_game() {
    let mut app = MemoryApp::with_builtins(config());
    let engine = app.start_game();
    engine.select(0);
    engine.select(1);
    assert!(engine.next_deadline().is_some());

    app.choose_theme(DINOSAURS).unwrap();

    let engine = app.engine_mut().unwrap();
    assert_eq!(engine.next_deadline(), None);
    assert!(engine.session().cards().iter().all(|c| !c.face_up));
    assert!(engine
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::Dealt { generation: 2, .. })));
}

/// Custom themes can be registered and played.
#[test]
fn test_custom_theme() {
    let mut registry = ThemeRegistry::new();
    let fruit = Theme::from_names(ThemeId::new(10), "Fruit", "fruit", ["apple", "pear", "plum"])
        .unwrap();
    registry.register(fruit).unwrap();

    let mut app = MemoryApp::new(registry, ThemeId::new(10), config()).unwrap();
    assert_eq!(app.current_theme().unwrap().name, "Fruit");

    let engine = app.start_game();
    assert_eq!(engine.session().cards().len(), 6);

    for position in 0..6 {
        assert_eq!(app.card_face(position), Some(CardFace::Hidden));
    }
    assert_eq!(app.card_face(6), None);
}

/// Switching theme right after a match also ends the celebration.
#[test]
fn test_theme_change_ends_celebration() {
    let mut app = MemoryApp::with_builtins(config());
    let engine = app.start_game();
    let first = engine.session().card(0).unwrap().symbol;
    let partner = engine
        .session()
        .cards()
        .iter()
        .skip(1)
        .find(|c| c.symbol == first)
        .map(|c| c.position)
        .unwrap();
    engine.select(0);
    engine.select(partner);
    assert!(engine.session().is_celebrating());
    engine.drain_events();

    app.choose_theme(ANIMALS).unwrap();

    let engine = app.engine_mut().unwrap();
    assert!(!engine.session().is_celebrating());
    assert_eq!(
        engine.drain_events(),
        vec![
            GameEvent::CelebrationEnded,
            GameEvent::Dealt {
                generation: 2,
                cards: 18
            },
        ]
    );
}
