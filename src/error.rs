//! Stage failure types.
//!
//! Failures are converted into diagnostics by the pipeline and never cross
//! the engine boundary.

use thiserror::Error;

use crate::models::{Diagnostic, StopwordKeyword};

/// A pipeline stage could not produce its normal output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    EncodingFailure {
        /// Length of the longest valid prefix
        valid_up_to: usize,
    },

    /// Canonical chorus lookup ran past the last stanza
    #[error("no chorus text follows the first '{keyword}' label (stanza {stanza_index})")]
    MalformedChorusStructure {
        /// Keyword whose canonical text could not be found
        keyword: StopwordKeyword,
        /// Stanza holding the keyword's first occurrence
        stanza_index: usize,
    },
}

impl StageError {
    /// Diagnostic reported to the caller for this failure
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            StageError::EncodingFailure { .. } => Diagnostic::EncodingFailure,
            StageError::MalformedChorusStructure { keyword, .. } => {
                Diagnostic::MalformedChorusStructure(*keyword)
            }
        }
    }
}
