use lyricscrub::{
    BatchReport, Diagnostic, DiagnosticCollector, LyricsNormalizer, ReportCategory,
    StopwordKeyword, discover_inputs, read_raw_lyrics, write_cleaned,
};
use rayon::prelude::*;

#[test]
fn test_batch_cleans_directory_in_parallel() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    std::fs::write(
        input.path().join("shortcut.txt"),
        "[Verse 1]\nwalking down[br]\nthe road\n\n[Chorus]\nOh my &amp; oh\n\n[Verse 2]\nback again\n\n[Chorus]",
    )
    .unwrap();
    std::fs::write(
        input.path().join("stub.txt"),
        "PUT LYRICS HERE (and delete this entire line)",
    )
    .unwrap();
    std::fs::write(input.path().join("broken.txt"), [0xff, 0xfe, 0xfd]).unwrap();
    std::fs::write(input.path().join("plain.txt"), "just words\n\n\n\nmore words").unwrap();

    let inputs = discover_inputs(input.path()).unwrap();
    assert_eq!(inputs.len(), 4);

    let normalizer = LyricsNormalizer::default();
    let collector = DiagnosticCollector::new();
    inputs.par_iter().for_each(|song| {
        let raw = read_raw_lyrics(&song.path).unwrap();
        let text = normalizer.clean(&raw, &song.song, &collector);
        write_cleaned(output.path(), &song.song, &text).unwrap();
    });

    let shortcut = std::fs::read_to_string(output.path().join("shortcut.txt")).unwrap();
    assert_eq!(
        shortcut,
        "walking down\nthe road\n\nOh my & oh\n\nback again\n\nOh my & oh"
    );
    let plain = std::fs::read_to_string(output.path().join("plain.txt")).unwrap();
    assert_eq!(plain, "just words\n\nmore words");
    assert_eq!(std::fs::read_to_string(output.path().join("stub.txt")).unwrap(), "");
    assert_eq!(std::fs::read_to_string(output.path().join("broken.txt")).unwrap(), "");

    let records = collector.into_records();
    assert_eq!(records.len(), 3);

    let report = BatchReport::from_records(inputs.len(), &records);
    let keys = |category| -> Vec<String> {
        report
            .section(category)
            .unwrap()
            .entries
            .iter()
            .map(|e| e.song.key.clone())
            .collect()
    };
    assert_eq!(keys(ReportCategory::ChorusesCopied), vec!["shortcut"]);
    assert_eq!(keys(ReportCategory::PlaceholderPages), vec!["stub"]);
    assert_eq!(keys(ReportCategory::EncodingFailures), vec!["broken"]);
    assert!(keys(ReportCategory::EmptyLyrics).is_empty());

    assert!(records.iter().any(|r| {
        r.song.key == "shortcut" && r.diagnostic == Diagnostic::ChorusCopied(StopwordKeyword::Chorus)
    }));
}
