use serde::Serialize;

use super::StopwordKeyword;

/// How a chorus-indicating keyword is used in a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChorusVerdict {
    /// Bare keyword lines stand in for chorus text written out once
    Shortcut,
    /// Every chorus is written out and the keyword only labels it
    Label,
}

/// Classification outcome for one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChorusClassification {
    pub keyword: StopwordKeyword,
    pub verdict: ChorusVerdict,
    /// Text copied over every later occurrence; only set for shortcuts
    pub canonical_text: Option<String>,
}
