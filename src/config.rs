//! Normalizer configuration.
//!
//! Holds the site-specific literals the pipeline looks for. Defaults match
//! the lyric sites the pipeline was built against.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Site-specific markers used by the normalization stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Literal forced line-break marker
    pub break_marker: String,
    /// Text after the first occurrence of this marker is dropped
    pub copyright_marker: String,
    /// Attribution strings removed verbatim
    pub attribution_markers: Vec<String>,
    /// Substrings identifying a stub page for a song with no lyrics
    pub placeholder_sentinels: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            break_marker: "[br]".to_string(),
            copyright_marker: "&#169;".to_string(),
            attribution_markers: vec!["Lyrics delivered by lyricsfly.com".to_string()],
            placeholder_sentinels: vec!["PUT LYRICS HERE (and delete this".to_string()],
        }
    }
}

impl NormalizerConfig {
    /// Load a config from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse normalizer config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NormalizerConfig::from_json(r#"{"break_marker": "<br>"}"#).unwrap();
        assert_eq!(config.break_marker, "<br>");
        assert_eq!(config.copyright_marker, "&#169;");
        assert_eq!(config.placeholder_sentinels.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(NormalizerConfig::from_json("{not json").is_err());
    }
}
