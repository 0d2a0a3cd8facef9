pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use config::NormalizerConfig;
pub use diagnostics::{DiagnosticCollector, DiagnosticSink, NullSink};
pub use error::StageError;
pub use io::{
    BatchReport, ReportCategory, SONG_MANIFEST, SongInput, discover_inputs, load_song_manifest,
    read_raw_lyrics, write_cleaned,
};
pub use models::{
    ChorusClassification, ChorusVerdict, Diagnostic, DiagnosticRecord, KeywordKind, KeywordMatch,
    SongContext, Stanza, StanzaSet, StopwordKeyword,
};
pub use pipeline::{CleanedLyrics, LyricsNormalizer, clean_lyrics};
pub use stages::{
    canonicalize, classify, expand_choruses, guard, normalize_breaks, normalize_encoding,
    remove_structural_lines, resolve_canonical, strip_keyword_lines,
};
