use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Diagnostic, DiagnosticRecord, SongContext, StopwordKeyword};

/// Report category, one per diagnostic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    EmptyLyrics,
    PlaceholderPages,
    EncodingFailures,
    ChorusesCopied,
    MalformedChoruses,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::EmptyLyrics,
        ReportCategory::PlaceholderPages,
        ReportCategory::EncodingFailures,
        ReportCategory::ChorusesCopied,
        ReportCategory::MalformedChoruses,
    ];

    pub fn of(diagnostic: &Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::EmptyLyrics => ReportCategory::EmptyLyrics,
            Diagnostic::PlaceholderDetected => ReportCategory::PlaceholderPages,
            Diagnostic::EncodingFailure => ReportCategory::EncodingFailures,
            Diagnostic::ChorusCopied(_) => ReportCategory::ChorusesCopied,
            Diagnostic::MalformedChorusStructure(_) => ReportCategory::MalformedChoruses,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ReportCategory::EmptyLyrics => "The following songs have empty lyrics:",
            ReportCategory::PlaceholderPages => {
                "The following songs led to placeholder pages with no lyrics:"
            }
            ReportCategory::EncodingFailures => {
                "When cleaning the following songs, the text could not be decoded:"
            }
            ReportCategory::ChorusesCopied => {
                "In the following songs, choruses were detected and copied accordingly:"
            }
            ReportCategory::MalformedChoruses => {
                "In the following songs, a chorus shortcut had no chorus text to copy:"
            }
        }
    }
}

/// One song listed under a report category
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub song: SongContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<StopwordKeyword>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub category: ReportCategory,
    pub heading: &'static str,
    pub entries: Vec<ReportEntry>,
}

/// Diagnostics for a batch of songs grouped by category
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_songs: usize,
    pub sections: Vec<ReportSection>,
}

impl BatchReport {
    /// Group records by category; entries are sorted by song key
    pub fn from_records(total_songs: usize, records: &[DiagnosticRecord]) -> Self {
        let sections = ReportCategory::ALL
            .iter()
            .map(|&category| {
                let mut entries: Vec<ReportEntry> = records
                    .iter()
                    .filter(|r| ReportCategory::of(&r.diagnostic) == category)
                    .map(|r| ReportEntry {
                        song: r.song.clone(),
                        keyword: match r.diagnostic {
                            Diagnostic::ChorusCopied(kw)
                            | Diagnostic::MalformedChorusStructure(kw) => Some(kw),
                            _ => None,
                        },
                    })
                    .collect();
                entries.sort_by(|a, b| a.song.key.cmp(&b.song.key));
                ReportSection {
                    category,
                    heading: category.heading(),
                    entries,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            total_songs,
            sections,
        }
    }

    pub fn section(&self, category: ReportCategory) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Format the report as human-readable text
    pub fn format(&self) -> String {
        let mut output = format!(
            "Cleaned {} songs ({})\n",
            self.total_songs,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for section in &self.sections {
            output.push_str("\n\n");
            output.push_str(section.heading);
            for entry in &section.entries {
                output.push('\n');
                output.push_str(&entry.song.to_string());
                if let Some(kw) = entry.keyword {
                    output.push_str(&format!(". Keyword '{}'.", kw));
                }
            }
        }

        output.push('\n');
        output
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Write cleaned lyrics to `<dir>/<key>.txt`
pub fn write_cleaned(dir: &Path, song: &SongContext, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.txt", song.key));
    std::fs::write(&path, text).with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, diagnostic: Diagnostic) -> DiagnosticRecord {
        DiagnosticRecord {
            song: SongContext::new(key),
            diagnostic,
        }
    }

    #[test]
    fn test_report_groups_by_category() {
        let records = vec![
            record("z", Diagnostic::EmptyLyrics),
            record("a", Diagnostic::EmptyLyrics),
            record("c", Diagnostic::ChorusCopied(StopwordKeyword::Hook)),
        ];
        let report = BatchReport::from_records(5, &records);

        assert_eq!(report.sections.len(), ReportCategory::ALL.len());
        let empty = report.section(ReportCategory::EmptyLyrics).unwrap();
        let keys: Vec<_> = empty.entries.iter().map(|e| e.song.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "z"]);

        let copied = report.section(ReportCategory::ChorusesCopied).unwrap();
        assert_eq!(copied.entries[0].keyword, Some(StopwordKeyword::Hook));
        assert!(report.section(ReportCategory::PlaceholderPages).unwrap().entries.is_empty());
    }

    #[test]
    fn test_format_lists_songs_under_headings() {
        let records = vec![record("c", Diagnostic::ChorusCopied(StopwordKeyword::Chorus))];
        let text = BatchReport::from_records(1, &records).format();

        assert!(text.starts_with("Cleaned 1 songs"));
        assert!(text.contains(
            "choruses were detected and copied accordingly:\nc. Keyword 'chorus'."
        ));
        assert!(text.contains("The following songs have empty lyrics:"));
    }

    #[test]
    fn test_write_json_and_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        let report = BatchReport::from_records(0, &[]);
        let json_path = dir.path().join("report.json");
        report.write_json(&json_path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["total_songs"], 0);
        assert_eq!(value["sections"][0]["category"], "empty_lyrics");

        let path = write_cleaned(dir.path(), &SongContext::new("k"), "la la").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "la la");
    }
}
