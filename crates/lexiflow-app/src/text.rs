/// Punctuation stripped from a token before it becomes a clickable
/// lookup target.
pub const TOKEN_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '"', '\'', '[', ']', '{', '}',
];

/// The lookup target hiding in one whitespace-delimited token, if any.
pub fn clickable_word(token: &str) -> Option<String> {
    let stripped = token.trim_matches(TOKEN_PUNCTUATION);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// All lookup targets in a run of text, in order.
pub fn clickable_words(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(clickable_word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_punctuation() {
        assert_eq!(clickable_word("run,"), Some("run".to_string()));
        assert_eq!(clickable_word("\"quickly\""), Some("quickly".to_string()));
        assert_eq!(clickable_word("(jog)"), Some("jog".to_string()));
    }

    #[test]
    fn keeps_interior_punctuation() {
        assert_eq!(clickable_word("don't"), Some("don't".to_string()));
        assert_eq!(clickable_word("well-known."), Some("well-known".to_string()));
    }

    #[test]
    fn pure_punctuation_is_not_clickable() {
        assert_eq!(clickable_word("..."), None);
        assert_eq!(clickable_word("!?"), None);
    }

    #[test]
    fn splits_a_sentence_into_targets() {
        assert_eq!(
            clickable_words("She runs every morning, rain or shine."),
            ["She", "runs", "every", "morning", "rain", "or", "shine"]
        );
    }
}
