//! Centralized validation and helper functions.

/// Maximum text length accepted for a single annotation request (DOS protection)
pub const MAX_TEXT_LENGTH: usize = 1024 * 1024; // 1MB

/// Check whether the text looks like it contains at least one sentence.
///
/// This is a deliberately crude pre-filter: non-empty and at least one `.`
/// character. Real sentence segmentation is the annotation server's job
/// (the `ssplit` annotator); this check only rejects obvious non-sentences
/// before paying for a network round trip.
///
/// # Examples
///
/// ```
/// use anno_gateway::utils::validation::looks_like_sentence;
///
/// assert!(looks_like_sentence("Hello world. How are you?"));
/// assert!(looks_like_sentence(".")); // crude on purpose
/// assert!(!looks_like_sentence("hello"));
/// assert!(!looks_like_sentence(""));
/// ```
#[must_use]
pub fn looks_like_sentence(text: &str) -> bool {
    !text.is_empty() && text.contains('.')
}

/// Check whether the text exceeds the maximum accepted length.
///
/// Returns an error message if the text is too long, None if it is safe to
/// forward to the annotation server.
#[must_use]
pub fn check_text_length(text: &str) -> Option<String> {
    if text.len() > MAX_TEXT_LENGTH {
        Some(format!(
            "Text too long: {} bytes exceeds maximum of {MAX_TEXT_LENGTH}",
            text.len()
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_sentence() {
        assert!(looks_like_sentence("Hello world. How are you?"));
        assert!(looks_like_sentence("One sentence."));
        assert!(looks_like_sentence("no trailing period. still fine"));
        assert!(looks_like_sentence(".")); // single period passes both predicates
        assert!(looks_like_sentence("3.14")); // numbers with a dot pass too

        assert!(!looks_like_sentence(""));
        assert!(!looks_like_sentence("hello"));
        assert!(!looks_like_sentence("no period here"));
        assert!(!looks_like_sentence("   ")); // whitespace but no period
    }

    #[test]
    fn test_check_text_length() {
        assert!(check_text_length("short text.").is_none());
        assert!(check_text_length(&"a".repeat(MAX_TEXT_LENGTH)).is_none());
        assert!(check_text_length(&"a".repeat(MAX_TEXT_LENGTH + 1)).is_some());
    }
}
