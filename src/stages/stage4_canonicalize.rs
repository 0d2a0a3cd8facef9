use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static SPACE_BEFORE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\n").unwrap());
static SPACE_AFTER_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n ?").unwrap());
static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Stage 4: canonical spacing and blank lines
///
/// Applied in order:
/// 1. Runs of spaces become one space
/// 2. A single space on either side of a newline is dropped
/// 3. Three or more newlines become one blank line
/// 4. Leading and trailing newlines are stripped
///
/// Idempotent: canonical text passes through unchanged.
pub fn canonicalize(text: &str) -> String {
    let text = MULTI_SPACE.replace_all(text, " ");
    let text = SPACE_BEFORE_NEWLINE.replace_all(&text, "\n");
    let text = SPACE_AFTER_NEWLINE.replace_all(&text, "\n");
    let text = EXTRA_NEWLINES.replace_all(&text, "\n\n");
    text.trim_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(canonicalize("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_collapses_spaces() {
        assert_eq!(canonicalize("a   b"), "a b");
    }

    #[test]
    fn test_trims_spaces_around_newlines() {
        assert_eq!(canonicalize("one  \n   two \n\n three"), "one\ntwo\n\nthree");
    }

    #[test]
    fn test_strips_outer_newlines() {
        assert_eq!(canonicalize("\n\n\nla la\n\n"), "la la");
        assert_eq!(canonicalize("\n\n"), "");
    }

    #[test]
    fn test_canonical_text_is_unchanged() {
        let text = "La la la\n\nblah blah\n\nLa la la";
        assert_eq!(canonicalize(text), text);
    }

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(s in "[ a-c\\n\\t]{0,40}") {
            let once = canonicalize(&s);
            prop_assert_eq!(canonicalize(&once), once);
        }

        #[test]
        fn canonicalize_is_idempotent_for_arbitrary_text(s in any::<String>()) {
            let once = canonicalize(&s);
            prop_assert_eq!(canonicalize(&once), once.clone());
            prop_assert!(!once.contains("  "));
            prop_assert!(!once.contains("\n\n\n"));
        }
    }
}
