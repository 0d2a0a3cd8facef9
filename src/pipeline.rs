//! The lyric normalization engine.
//!
//! Runs the stages in a fixed order over one raw lyric text and hands back
//! clean text. Stage failures are reported as diagnostics; nothing is
//! raised past this boundary.

use serde::Serialize;
use tracing::debug;

use crate::config::NormalizerConfig;
use crate::diagnostics::DiagnosticSink;
use crate::models::{ChorusClassification, Diagnostic, SongContext};
use crate::stages::{
    canonicalize, expand_choruses, guard, normalize_breaks, normalize_encoding,
    remove_structural_lines,
};

/// Outcome of cleaning one song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanedLyrics {
    /// ASCII lyric text, possibly empty
    pub text: String,
    /// Findings in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
    /// Verdicts for chorus keywords occurring at least twice
    pub classifications: Vec<ChorusClassification>,
}

impl CleanedLyrics {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }
}

/// Lyric normalization engine
#[derive(Debug, Clone, Default)]
pub struct LyricsNormalizer {
    config: NormalizerConfig,
}

impl LyricsNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Clean raw lyric bytes
    ///
    /// Stages:
    /// 0. Decode, fold to ASCII, truncate at copyright, decode entities
    /// 1. Forced line-break markers to newlines
    /// 2. Structural stopword lines removed
    /// 3. Chorus shortcuts expanded, chorus labels removed
    /// 4. Whitespace canonicalized
    /// 5. Empty and placeholder results rejected
    pub fn normalize(&self, raw: &[u8]) -> CleanedLyrics {
        let text = match normalize_encoding(raw, &self.config) {
            Ok(text) => text,
            Err(err) => {
                return CleanedLyrics {
                    text: String::new(),
                    diagnostics: vec![err.diagnostic()],
                    classifications: Vec::new(),
                };
            }
        };

        let text = normalize_breaks(&text, &self.config.break_marker);

        let stopwords = remove_structural_lines(&text);
        debug!("Stopword stage removed {} lines", stopwords.lines_removed);

        let chorus = expand_choruses(&stopwords.text);
        let mut diagnostics = chorus.diagnostics;

        let text = canonicalize(&chorus.text);

        let guarded = guard(text, &self.config.placeholder_sentinels);
        diagnostics.extend(guarded.diagnostic);

        CleanedLyrics {
            text: guarded.text,
            diagnostics,
            classifications: chorus.classifications,
        }
    }

    /// Clean one song and report its diagnostics to `sink`
    pub fn clean(&self, raw: &[u8], song: &SongContext, sink: &dyn DiagnosticSink) -> String {
        let cleaned = self.normalize(raw);
        for diagnostic in &cleaned.diagnostics {
            debug!("{}: {}", song, diagnostic);
            sink.record(song, *diagnostic);
        }
        cleaned.text
    }
}

/// Clean raw lyric text with the default configuration
pub fn clean_lyrics(raw: &str) -> CleanedLyrics {
    LyricsNormalizer::default().normalize(raw.as_bytes())
}
