use once_cell::sync::Lazy;
use regex::Regex;

use super::StopwordKeyword;

/// Two or more consecutive newlines separate stanzas
static STANZA_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Separator used when stanzas are stitched back together
pub const STANZA_SEPARATOR: &str = "\n\n";

/// A block of lines bounded by blank lines or the ends of the text
///
/// Identity is positional: two stanzas with the same text are still
/// different stanzas if their indices differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    /// Position within the text
    pub index: usize,
    /// Raw stanza text, without the surrounding blank lines
    pub text: String,
}

impl Stanza {
    /// Non-blank lines of this stanza
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|l| !l.trim().is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// One line of text that names a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Stanza containing the matched line
    pub stanza_index: usize,
    /// First non-blank line of the segment that follows this match, trimmed.
    /// `None` when the segment is empty, i.e. the next keyword line or the
    /// end of the text comes first.
    pub following_line: Option<String>,
}

/// Ordered stanzas of a lyric text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StanzaSet {
    pub stanzas: Vec<Stanza>,
}

impl StanzaSet {
    /// Split text into stanzas wherever two or more newlines occur
    pub fn split(text: &str) -> Self {
        let stanzas = STANZA_BREAK
            .split(text)
            .enumerate()
            .map(|(index, part)| Stanza {
                index,
                text: part.to_string(),
            })
            .collect();
        Self { stanzas }
    }

    /// Stitch stanzas back together with a single blank line between each
    pub fn join(&self) -> String {
        self.stanzas
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(STANZA_SEPARATOR)
    }

    pub fn len(&self) -> usize {
        self.stanzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stanza> {
        self.stanzas.get(index)
    }

    /// Every line naming `keyword`, in text order
    pub fn find_matches(&self, keyword: StopwordKeyword) -> Vec<KeywordMatch> {
        let lines: Vec<(usize, &str)> = self
            .stanzas
            .iter()
            .flat_map(|s| s.lines().map(move |line| (s.index, line)))
            .collect();

        let mut matches = Vec::new();
        for (pos, &(stanza_index, line)) in lines.iter().enumerate() {
            if !keyword.matches_line(line) {
                continue;
            }
            let following_line = lines
                .get(pos + 1)
                .filter(|(_, next)| !keyword.matches_line(next))
                .map(|(_, next)| next.trim().to_string());
            matches.push(KeywordMatch {
                stanza_index,
                following_line,
            });
        }
        matches
    }

    /// Replace the text of a stanza in place, keeping its position
    pub fn replace(&mut self, index: usize, text: &str) {
        if let Some(stanza) = self.stanzas.get_mut(index) {
            stanza.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let set = StanzaSet::split("a\nb\n\nc\n\n\n\nd");
        assert_eq!(set.len(), 3);
        assert_eq!(set.stanzas[0].text, "a\nb");
        assert_eq!(set.stanzas[1].text, "c");
        assert_eq!(set.stanzas[2].text, "d");
        assert_eq!(set.stanzas[2].index, 2);
    }

    #[test]
    fn test_single_newline_does_not_split() {
        let set = StanzaSet::split("one\ntwo\nthree");
        assert_eq!(set.len(), 1);
        assert_eq!(set.stanzas[0].line_count(), 3);
    }

    #[test]
    fn test_join_restores_canonical_text() {
        let text = "a\nb\n\nc\n\nd";
        assert_eq!(StanzaSet::split(text).join(), text);
    }

    #[test]
    fn test_find_matches_mid_stanza() {
        let set = StanzaSet::split("verse a\n[Chorus]\nLa la\n\nother\n[Chorus]\n\nend");
        let matches = set.find_matches(StopwordKeyword::Chorus);

        let stanzas: Vec<_> = matches.iter().map(|m| m.stanza_index).collect();
        assert_eq!(stanzas, vec![0, 1]);
        assert_eq!(matches[0].following_line.as_deref(), Some("La la"));
        assert_eq!(matches[1].following_line.as_deref(), Some("end"));
        assert!(set.find_matches(StopwordKeyword::Hook).is_empty());
    }

    #[test]
    fn test_find_matches_records_following_line() {
        let set = StanzaSet::split("Chorus\nLa la\n\nblah\n\nChorus\n\nother");
        let matches = set.find_matches(StopwordKeyword::Chorus);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].stanza_index, 0);
        assert_eq!(matches[0].following_line.as_deref(), Some("La la"));
        assert_eq!(matches[1].stanza_index, 2);
        assert_eq!(matches[1].following_line.as_deref(), Some("other"));
    }

    #[test]
    fn test_find_matches_empty_segments() {
        let set = StanzaSet::split("Chorus\nChorus");
        let matches = set.find_matches(StopwordKeyword::Chorus);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].following_line, None);
        assert_eq!(matches[1].following_line, None);
    }
}
