//! Hint derivation for cards shown during practice.

use crate::types::{Flashcard, DEFAULT_HINT_PREFIX};

/// Hint for a card.
///
/// Returns the card's own hint, trimmed, when it has any non-whitespace
/// text. Otherwise a generic prompt built from the card's front.
pub fn get_hint(card: &Flashcard) -> String {
    hint_with_prefix(card, DEFAULT_HINT_PREFIX)
}

/// Same as [`get_hint`] with a custom prefix for the generated prompt.
pub fn hint_with_prefix(card: &Flashcard, prefix: &str) -> String {
    let hint = card.hint.trim();
    if hint.is_empty() {
        format!("{}{}", prefix, card.front)
    } else {
        hint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_hint_is_returned() {
        let card = Flashcard::new("Destruction?", "Ruin").with_hint("It's the opposite of creation");
        assert_eq!(get_hint(&card), "It's the opposite of creation");
    }

    #[test]
    fn custom_hint_is_trimmed() {
        let card = Flashcard::new("Q", "A").with_hint("  padded hint \n");
        assert_eq!(get_hint(&card), "padded hint");
    }

    #[test]
    fn empty_hint_falls_back_to_front() {
        let card = Flashcard::new("X?", "Y");
        assert_eq!(get_hint(&card), "Think about the key concepts related to X?");
    }

    #[test]
    fn whitespace_hint_falls_back_to_front() {
        let card = Flashcard::new("X?", "Y").with_hint("   ");
        assert_eq!(get_hint(&card), "Think about the key concepts related to X?");
    }

    #[test]
    fn front_is_used_verbatim() {
        let card = Flashcard::new("  spaced front ", "A");
        assert_eq!(
            get_hint(&card),
            "Think about the key concepts related to   spaced front "
        );
    }

    #[test]
    fn custom_prefix() {
        let card = Flashcard::new("Rust", "A language");
        assert_eq!(hint_with_prefix(&card, "Recall: "), "Recall: Rust");
    }
}
