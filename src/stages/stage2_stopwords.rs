use tracing::debug;

use crate::models::StopwordKeyword;

/// Result of stripping keyword lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordResult {
    /// Text with every matched line replaced by a paragraph break
    pub text: String,
    /// Number of lines removed
    pub lines_removed: usize,
}

/// Stage 2: remove lines introducing structural sections
pub fn remove_structural_lines(text: &str) -> StopwordResult {
    strip_keyword_lines(text, &StopwordKeyword::STRUCTURAL)
}

/// Remove every line naming one of `keywords`
///
/// A removed line becomes an empty line, so together with its own line
/// ending it leaves a paragraph break and the stanzas on either side stay
/// apart.
pub fn strip_keyword_lines(text: &str, keywords: &[StopwordKeyword]) -> StopwordResult {
    let mut lines_removed = 0;

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if keywords.iter().any(|kw| kw.matches_line(line)) {
                lines_removed += 1;
                ""
            } else {
                line
            }
        })
        .collect();

    if lines_removed > 0 {
        debug!("Removed {} keyword lines", lines_removed);
    }

    StopwordResult {
        text: lines.join("\n"),
        lines_removed,
    }
}
