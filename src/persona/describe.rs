// src/persona/describe.rs
// Per-answer phrases used to build traits for the catch-all persona.

use super::AnswerSet;

const CART_FALLBACK: &str = "Mystery shopper";
const PAYMENT_FALLBACK: &str = "Payment philosopher";
const SPEED_FALLBACK: &str = "Time traveler";

pub fn describe_cart_behavior(value: Option<&str>) -> &'static str {
    match value {
        Some("ghost") => "Master of the saved-for-later list",
        Some("decisive") => "Sees it, loves it, buys it",
        Some("collector") => "Curator of the perfect wishlist",
        _ => CART_FALLBACK,
    }
}

pub fn describe_payment_style(value: Option<&str>) -> &'static str {
    match value {
        Some("prepaid") => "Never misses an online-payment discount",
        Some("cod") => "Pays only when the parcel is in hand",
        Some("bnpl") => "Splits every splurge into easy instalments",
        _ => PAYMENT_FALLBACK,
    }
}

pub fn describe_shopping_speed(value: Option<&str>) -> &'static str {
    match value {
        Some("lightning") => "Checks out faster than the page loads",
        Some("planner") => "Shops from a colour-coded list",
        Some("zen") => "Browses like it's a spa day",
        _ => SPEED_FALLBACK,
    }
}

/// One phrase per answer, in quiz order. Each field falls back on its own.
pub fn describe_answers(answers: &AnswerSet) -> [&'static str; 3] {
    [
        describe_cart_behavior(answers.cart_behavior.as_deref()),
        describe_payment_style(answers.payment_style.as_deref()),
        describe_shopping_speed(answers.shopping_speed.as_deref()),
    ]
}
