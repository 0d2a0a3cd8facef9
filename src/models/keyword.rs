use std::fmt;

use serde::{Deserialize, Serialize};

/// Which role a stopword plays in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordKind {
    /// Names a non-chorus section; lines are always stripped
    Structural,
    /// May be a repeated label or a shortcut back to earlier chorus text
    ChorusIndicating,
}

/// Fixed vocabulary of section labels found in scraped lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordKeyword {
    Verse,
    Bridge,
    Intro,
    Repeat,
    Outro,
    Instrumental,
    Chorus,
    Refrain,
    Hook,
}

impl StopwordKeyword {
    /// Structural keywords, stripped by the stopword stage
    pub const STRUCTURAL: [StopwordKeyword; 6] = [
        StopwordKeyword::Verse,
        StopwordKeyword::Bridge,
        StopwordKeyword::Intro,
        StopwordKeyword::Repeat,
        StopwordKeyword::Outro,
        StopwordKeyword::Instrumental,
    ];

    /// Chorus-indicating keywords, in the order they are resolved
    pub const CHORUS: [StopwordKeyword; 3] = [
        StopwordKeyword::Chorus,
        StopwordKeyword::Refrain,
        StopwordKeyword::Hook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StopwordKeyword::Verse => "verse",
            StopwordKeyword::Bridge => "bridge",
            StopwordKeyword::Intro => "intro",
            StopwordKeyword::Repeat => "repeat",
            StopwordKeyword::Outro => "outro",
            StopwordKeyword::Instrumental => "instrumental",
            StopwordKeyword::Chorus => "chorus",
            StopwordKeyword::Refrain => "refrain",
            StopwordKeyword::Hook => "hook",
        }
    }

    pub fn kind(&self) -> KeywordKind {
        match self {
            StopwordKeyword::Chorus | StopwordKeyword::Refrain | StopwordKeyword::Hook => {
                KeywordKind::ChorusIndicating
            }
            _ => KeywordKind::Structural,
        }
    }

    /// Check whether a line introduces this keyword's section
    ///
    /// Leading punctuation and whitespace are skipped so that "[Chorus]",
    /// "==Verse 2==" and "  *Hook*" all match. The comparison is a
    /// case-insensitive prefix match, so "versey" matches `Verse` too.
    pub fn matches_line(&self, line: &str) -> bool {
        let rest = line.trim_start_matches(|c: char| !c.is_alphanumeric());
        let word = self.as_str();
        rest.get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for StopwordKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
