// src/persona/default.rs
//! Catch-all persona for answer combinations outside the table.

use super::{CardColor, PersonaRecord};

/// Returned whenever the composite key misses. Carries no hero styling, so
/// the avatar prompt uses the generic style description.
pub static DEFAULT_PERSONA: PersonaRecord = PersonaRecord {
    title: "🌟 One-of-a-Kind Shopper ✨",
    traits: [
        "Writes their own shopping rules",
        "Impossible to put in a box (or a cart)",
        "Keeps every algorithm guessing",
    ],
    tagline: "No quiz can contain this shopping energy",
    card_color: CardColor {
        start: "#E91E63",
        end: "#FC5185",
    },
    superhero_name: None,
    hero: None,
};
