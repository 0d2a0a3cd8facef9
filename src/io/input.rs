use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::SongContext;

/// One raw lyric file waiting to be cleaned
#[derive(Debug, Clone)]
pub struct SongInput {
    pub song: SongContext,
    pub path: PathBuf,
}

/// Read raw lyric bytes from a file, or from stdin when `path` is `-`
pub fn read_raw_lyrics(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read lyrics from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Optional file in a batch input directory naming each song
pub const SONG_MANIFEST: &str = "songs.json";

/// Load a JSON array of `{ "key", "artist", "title" }` song entries
pub fn load_song_manifest(path: &Path) -> Result<Vec<SongContext>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read song manifest: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse song manifest: {:?}", path))
}

/// List the `.txt` files in a directory, keyed by file stem, sorted by key
///
/// When the directory holds a `songs.json` manifest, artist and title are
/// taken from the entry with the matching key.
pub fn discover_inputs(dir: &Path) -> Result<Vec<SongInput>> {
    let manifest_path = dir.join(SONG_MANIFEST);
    let mut known: HashMap<String, SongContext> = if manifest_path.is_file() {
        load_song_manifest(&manifest_path)?
            .into_iter()
            .map(|song| (song.key.clone(), song))
            .collect()
    } else {
        HashMap::new()
    };

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {:?}", dir))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {:?}", dir))?
            .path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let Some(key) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let song = known.remove(&key).unwrap_or_else(|| SongContext::new(key));
        inputs.push(SongInput { song, path });
    }

    inputs.sort_by(|a, b| a.song.key.cmp(&b.song.key));
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b_song.txt"), "two").unwrap();
        std::fs::write(dir.path().join("a_song.txt"), "one").unwrap();
        std::fs::write(dir.path().join("notes.md"), "skip").unwrap();
        std::fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();
        let keys: Vec<_> = inputs.iter().map(|i| i.song.key.as_str()).collect();

        assert_eq!(keys, vec!["a_song", "b_song"]);
    }

    #[test]
    fn test_manifest_names_songs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a1.txt"), "one").unwrap();
        std::fs::write(dir.path().join("b2.txt"), "two").unwrap();
        std::fs::write(
            dir.path().join(SONG_MANIFEST),
            r#"[{"key": "a1", "artist": "Queen", "title": "Bicycle Race"}, {"key": "zz"}]"#,
        )
        .unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].song, SongContext::new("a1").with_song("Queen", "Bicycle Race"));
        assert_eq!(inputs[0].song.to_string(), "a1: Bicycle Race - Queen");
        assert_eq!(inputs[1].song, SongContext::new("b2"));
    }

    #[test]
    fn test_bad_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a1.txt"), "one").unwrap();
        std::fs::write(dir.path().join(SONG_MANIFEST), "{not json").unwrap();

        assert!(discover_inputs(dir.path()).is_err());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_inputs(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_read_raw_lyrics_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.txt");
        std::fs::write(&path, [b'a', 0xff]).unwrap();

        assert_eq!(read_raw_lyrics(&path).unwrap(), vec![b'a', 0xff]);
    }
}
