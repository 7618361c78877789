//! Canned demo responder.
//!
//! Matches the typed question against a fixed table after trimming and
//! lowercasing; anything else gets the fixed coaching line. There is no
//! parsing and no scoring, only an exact-match lookup.

use crate::content::{DEMO_FALLBACK, DEMO_RESPONSES};

/// Answers a demo question from the fixed table.
pub fn respond(input: &str) -> &'static str {
    let normalized = input.trim().to_lowercase();
    DEMO_RESPONSES
        .iter()
        .find(|(question, _)| *question == normalized)
        .map(|(_, answer)| *answer)
        .unwrap_or(DEMO_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_questions_match() {
        assert_eq!(
            respond("am i overspending"),
            "You're 2,100 PKR over budget this month. Maybe skip a few Careem rides? 😉"
        );
        assert_eq!(
            respond("show my biggest expense"),
            "Your biggest expense was rent at 35,000 PKR, followed by groceries at 8,200 PKR."
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(respond("Am I Overspending"), respond("am i overspending"));
        assert_eq!(respond("  am i overspending  "), respond("am i overspending"));
    }

    #[test]
    fn test_unknown_input_falls_back() {
        assert_eq!(respond("what is the meaning of life"), DEMO_FALLBACK);
        assert_eq!(respond(""), DEMO_FALLBACK);
    }
}
