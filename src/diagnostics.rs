//! Diagnostic sinks.
//!
//! The engine reports findings through a `DiagnosticSink` so a caller can
//! collect them across many songs, possibly cleaned on several threads.

use std::sync::Mutex;

use crate::models::{Diagnostic, DiagnosticRecord, SongContext};

/// Receives diagnostics as songs are cleaned
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, song: &SongContext, diagnostic: Diagnostic);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _song: &SongContext, _diagnostic: Diagnostic) {}
}

/// Thread-safe in-memory collector
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn into_records(self) -> Vec<DiagnosticRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn record(&self, song: &SongContext, diagnostic: Diagnostic) {
        let record = DiagnosticRecord {
            song: song.clone(),
            diagnostic,
        };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
