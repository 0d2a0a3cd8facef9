use tracing::{debug, info, warn};

use crate::error::StageError;
use crate::models::{
    ChorusClassification, ChorusVerdict, Diagnostic, KeywordMatch, StanzaSet, StopwordKeyword,
};

use super::stage2_stopwords::strip_keyword_lines;

/// Result of Stage 3 chorus handling
#[derive(Debug, Clone, Default)]
pub struct ChorusResult {
    /// Text with shortcuts expanded and every chorus keyword line removed
    pub text: String,
    /// One entry per keyword that occurred at least twice
    pub classifications: Vec<ChorusClassification>,
    /// `ChorusCopied` and `MalformedChorusStructure` findings
    pub diagnostics: Vec<Diagnostic>,
}

/// Chorus text chosen as the source for a keyword's expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalChorus {
    /// Stanza holding the keyword's first occurrence, left untouched by expansion
    pub source_index: usize,
    pub text: String,
}

/// Decide whether a keyword is a shortcut or a plain label
///
/// Splitting the text at each of n matched lines gives n+1 segments, the
/// first preceding the first match. When the opening lines of segments 1
/// and 2 differ, the keyword points back at chorus text written elsewhere.
/// When they agree, every chorus is written out and the keyword is only a
/// label. Returns `None` for fewer than two matches.
///
/// Two different choruses that open with the same line are classified as
/// labels.
pub fn classify(matches: &[KeywordMatch]) -> Option<ChorusVerdict> {
    match matches {
        [first, second, ..] if first.following_line != second.following_line => {
            Some(ChorusVerdict::Shortcut)
        }
        [_, _, ..] => Some(ChorusVerdict::Label),
        _ => None,
    }
}

/// Find the chorus text a shortcut keyword refers to
///
/// The stanza containing the keyword's first occurrence is the source. If
/// it holds lyrics besides the keyword line, the whole stanza is the chorus;
/// a bare keyword line means the chorus is the next stanza. A bare keyword
/// closing the text has nothing to point at.
pub fn resolve_canonical(
    stanzas: &StanzaSet,
    keyword: StopwordKeyword,
    first: &KeywordMatch,
) -> Result<CanonicalChorus, StageError> {
    let source_index = first.stanza_index;
    let malformed = StageError::MalformedChorusStructure {
        keyword,
        stanza_index: source_index,
    };

    let source = stanzas.get(source_index).ok_or(malformed.clone())?;
    let text = if source.line_count() > 1 {
        source.text.clone()
    } else {
        stanzas.get(source_index + 1).ok_or(malformed)?.text.clone()
    };

    Ok(CanonicalChorus { source_index, text })
}

/// Stanzas to overwrite: every stanza holding a match, except the source
fn expansion_targets(matches: &[KeywordMatch], source_index: usize) -> Vec<usize> {
    let mut targets: Vec<usize> = matches
        .iter()
        .map(|m| m.stanza_index)
        .filter(|&i| i != source_index)
        .collect();
    targets.dedup();
    targets
}

/// Stage 3: classify chorus keywords and expand shortcuts
///
/// Keywords are handled in the fixed order chorus, refrain, hook. Each one
/// sees the text as rewritten by the previous keyword, so stanzas are split
/// again every time. Once all three are resolved, the remaining keyword
/// lines (the source stanza's own label and plain labels) are stripped.
pub fn expand_choruses(text: &str) -> ChorusResult {
    let mut text = text.to_string();
    let mut classifications = Vec::new();
    let mut diagnostics = Vec::new();

    for keyword in StopwordKeyword::CHORUS {
        let mut stanzas = StanzaSet::split(&text);
        let matches = stanzas.find_matches(keyword);

        let Some(verdict) = classify(&matches) else {
            continue;
        };
        debug!("'{}' occurs {} times, classified as {:?}", keyword, matches.len(), verdict);

        if verdict == ChorusVerdict::Label {
            classifications.push(ChorusClassification {
                keyword,
                verdict,
                canonical_text: None,
            });
            continue;
        }

        let canonical = match resolve_canonical(&stanzas, keyword, &matches[0]) {
            Ok(canonical) => canonical,
            Err(err) => {
                warn!("{}", err);
                diagnostics.push(err.diagnostic());
                CanonicalChorus {
                    source_index: matches[0].stanza_index,
                    text: String::new(),
                }
            }
        };

        let targets = expansion_targets(&matches, canonical.source_index);
        for &index in &targets {
            stanzas.replace(index, &canonical.text);
        }

        info!("Copied '{}' chorus into {} stanzas", keyword, targets.len());
        text = stanzas.join();
        diagnostics.push(Diagnostic::ChorusCopied(keyword));
        classifications.push(ChorusClassification {
            keyword,
            verdict,
            canonical_text: Some(canonical.text),
        });
    }

    let swept = strip_keyword_lines(&text, &StopwordKeyword::CHORUS);

    ChorusResult {
        text: swept.text,
        classifications,
        diagnostics,
    }
}
