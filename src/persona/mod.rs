// src/persona/mod.rs
// Persona assignment: maps quiz answers onto the canned shopping personas.

pub mod default;
pub mod describe;
pub mod table;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use default::DEFAULT_PERSONA;
pub use describe::describe_answers;

/// Values the quiz offers for `cartBehavior`
pub const CART_BEHAVIORS: [&str; 3] = ["ghost", "decisive", "collector"];
/// Values the quiz offers for `paymentStyle`
pub const PAYMENT_STYLES: [&str; 3] = ["prepaid", "cod", "bnpl"];
/// Values the quiz offers for `shoppingSpeed`
pub const SHOPPING_SPEEDS: [&str; 3] = ["lightning", "planner", "zen"];

/// The three quiz answers as submitted by the client.
///
/// Fields are not validated against the quiz options; anything outside
/// the table simply resolves to [`DEFAULT_PERSONA`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    #[serde(default)]
    pub cart_behavior: Option<String>,
    #[serde(default)]
    pub payment_style: Option<String>,
    #[serde(default)]
    pub shopping_speed: Option<String>,
}

impl AnswerSet {
    pub fn new(
        cart_behavior: impl Into<String>,
        payment_style: impl Into<String>,
        shopping_speed: impl Into<String>,
    ) -> Self {
        Self {
            cart_behavior: Some(cart_behavior.into()),
            payment_style: Some(payment_style.into()),
            shopping_speed: Some(shopping_speed.into()),
        }
    }

    /// `"{cartBehavior}-{paymentStyle}-{shoppingSpeed}"`, or None when any
    /// field is missing or blank.
    pub fn composite_key(&self) -> Option<String> {
        let behavior = non_blank(&self.cart_behavior)?;
        let style = non_blank(&self.payment_style)?;
        let speed = non_blank(&self.shopping_speed)?;
        Some(format!("{behavior}-{style}-{speed}"))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Gradient used behind the result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColor {
    pub start: &'static str,
    pub end: &'static str,
}

/// Costume direction fed into the avatar prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroStyling {
    pub costume: &'static str,
    pub pose: &'static str,
    pub powers: &'static str,
    pub background: &'static str,
}

/// A canned persona. All records are compiled in and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    pub title: &'static str,
    pub traits: [&'static str; 3],
    pub tagline: &'static str,
    pub card_color: CardColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superhero_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroStyling>,
}

impl PersonaRecord {
    /// Name shown on the card header; falls back to the title
    pub fn display_name(&self) -> &'static str {
        self.superhero_name.unwrap_or(self.title)
    }
}

static PERSONA_INDEX: Lazy<HashMap<&'static str, &'static PersonaRecord>> = Lazy::new(|| {
    table::PERSONAS
        .iter()
        .map(|(key, record)| (*key, record))
        .collect()
});

/// Resolve the persona for a set of answers.
///
/// Total: unknown combinations and missing fields resolve to
/// [`DEFAULT_PERSONA`].
pub fn resolve_persona(answers: &AnswerSet) -> &'static PersonaRecord {
    answers
        .composite_key()
        .and_then(|key| lookup(&key))
        .unwrap_or(&DEFAULT_PERSONA)
}

/// Like [`resolve_persona`], but a miss gets traits composed from the
/// individual answers instead of the generic default traits.
pub fn resolve_persona_described(answers: &AnswerSet) -> PersonaRecord {
    match answers.composite_key().and_then(|key| lookup(&key)) {
        Some(record) => record.clone(),
        None => PersonaRecord {
            traits: describe_answers(answers),
            ..DEFAULT_PERSONA.clone()
        },
    }
}

/// Exact lookup by composite key
pub fn lookup(key: &str) -> Option<&'static PersonaRecord> {
    PERSONA_INDEX.get(key).copied()
}

/// Every composite key present in the table
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    table::PERSONAS.iter().map(|(key, _)| *key)
}
