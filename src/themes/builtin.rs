//! Built-in themes.
//!
//! "Dinosaurs" and "Animals" are the two selectable themes of the menu;
//! "Prehistoric" is the fixed eight-pair deck of the single-theme game.

use super::theme::{Theme, ThemeId};

pub const DINOSAURS: ThemeId = ThemeId(0);
pub const ANIMALS: ThemeId = ThemeId(1);
pub const PREHISTORIC: ThemeId = ThemeId(2);

const DINOSAUR_NAMES: [&str; 9] = [
    "trex",
    "mosasauro",
    "pterodattilo",
    "megalodon",
    "brontosauro",
    "kraken",
    "velociraptor",
    "triceratopo",
    "spinosauro",
];

const ANIMAL_NAMES: [&str; 9] = [
    "anaconda",
    "canguro",
    "coccodrillo",
    "cornacchia",
    "leone",
    "orca",
    "rinoceronte",
    "squaloBianco",
    "tigre",
];

const PREHISTORIC_NAMES: [&str; 8] = [
    "Brachiosauro",
    "Mosasauro",
    "Plesiosauro",
    "Pterodattilo",
    "Spinosauro",
    "Velociraptor",
    "stegosauro",
    "triceratopo",
];

fn theme(id: ThemeId, name: &str, asset_dir: &str, names: &[&str]) -> Theme {
    Theme::assemble(
        id,
        name.to_string(),
        asset_dir,
        names.iter().map(|n| n.to_string()).collect(),
    )
}

/// Nine dinosaurs and sea monsters.
#[must_use]
pub fn dinosaurs() -> Theme {
    theme(DINOSAURS, "Dinosaurs", "Memory/Dinos", &DINOSAUR_NAMES)
}

/// Nine wild animals.
#[must_use]
pub fn animals() -> Theme {
    theme(ANIMALS, "Animals", "Memory/Animals", &ANIMAL_NAMES)
}

/// The classic eight-pair prehistoric deck.
#[must_use]
pub fn prehistoric() -> Theme {
    theme(PREHISTORIC, "Prehistoric", "", &PREHISTORIC_NAMES)
}

/// Every built-in theme, in id order.
#[must_use]
pub fn all() -> Vec<Theme> {
    vec![dinosaurs(), animals(), prehistoric()]
}
