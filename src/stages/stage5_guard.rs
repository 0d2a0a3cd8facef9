use tracing::warn;

use crate::models::Diagnostic;

/// Result of the final validity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardResult {
    pub text: String,
    pub diagnostic: Option<Diagnostic>,
}

/// Stage 5: reject empty results and stub pages
///
/// Text with no alphabetic character becomes empty with `EmptyLyrics`. Text
/// containing a placeholder sentinel becomes empty with
/// `PlaceholderDetected`.
pub fn guard(text: String, placeholder_sentinels: &[String]) -> GuardResult {
    if !text.chars().any(char::is_alphabetic) {
        warn!("No lyrics left after cleaning");
        return GuardResult {
            text: String::new(),
            diagnostic: Some(Diagnostic::EmptyLyrics),
        };
    }

    let is_placeholder = placeholder_sentinels
        .iter()
        .any(|sentinel| !sentinel.is_empty() && text.contains(sentinel.as_str()));
    if is_placeholder {
        warn!("Lyrics page is a placeholder for a missing song");
        return GuardResult {
            text: String::new(),
            diagnostic: Some(Diagnostic::PlaceholderDetected),
        };
    }

    GuardResult {
        text,
        diagnostic: None,
    }
}
