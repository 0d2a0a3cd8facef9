use std::fmt;

use serde::{Deserialize, Serialize};

use super::StopwordKeyword;

/// Advisory finding reported while cleaning one song
///
/// Diagnostics never stop the pipeline; callers decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "keyword", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Final text had no alphabetic content
    EmptyLyrics,
    /// Input could not be decoded and folded to ASCII
    EncodingFailure,
    /// Shortcut occurrences of the keyword were expanded to full chorus text
    ChorusCopied(StopwordKeyword),
    /// The keyword's first occurrence was a bare label closing the song
    MalformedChorusStructure(StopwordKeyword),
    /// Text was a stub page for a song with no lyrics
    PlaceholderDetected,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyLyrics => write!(f, "empty lyrics"),
            Diagnostic::EncodingFailure => write!(f, "encoding failure"),
            Diagnostic::ChorusCopied(kw) => write!(f, "copied choruses labelled with '{}'", kw),
            Diagnostic::MalformedChorusStructure(kw) => {
                write!(f, "'{}' shortcut has no chorus text to copy", kw)
            }
            Diagnostic::PlaceholderDetected => write!(f, "placeholder page"),
        }
    }
}

/// Identifies the song being cleaned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongContext {
    /// Opaque per-song key (e.g. the output file stem)
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SongContext {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            artist: None,
            title: None,
        }
    }

    pub fn with_song(mut self, artist: impl Into<String>, title: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self.title = Some(title.into());
        self
    }
}

impl fmt::Display for SongContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.title, &self.artist) {
            (Some(title), Some(artist)) => write!(f, "{}: {} - {}", self.key, title, artist),
            (Some(title), None) => write!(f, "{}: {}", self.key, title),
            _ => write!(f, "{}", self.key),
        }
    }
}

/// A diagnostic tied to the song it was reported for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub song: SongContext,
    pub diagnostic: Diagnostic,
}
