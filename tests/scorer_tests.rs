use colbreak::error::ColBreakError;
use colbreak::scorer::loader::load_tetragrams;
use colbreak::scorer::Scorer;
use std::io::Cursor;
use std::io::Write;

fn table(entries: &[(&str, f64)]) -> Scorer {
    Scorer::from_entries(entries.iter().map(|(s, f)| {
        let b = s.as_bytes();
        ([b[0], b[1], b[2], b[3]], *f)
    }))
}

#[test]
fn score_sums_every_window() {
    let scorer = table(&[("tion", 10.0), ("atio", 4.0)]);
    // "ation" has windows "atio" and "tion".
    assert_eq!(scorer.score("ation"), 14.0);
}

#[test]
fn unknown_windows_contribute_nothing() {
    let scorer = table(&[("tion", 10.0)]);
    assert_eq!(scorer.score("zzzzzz"), 0.0);
}

#[test]
fn short_text_scores_zero() {
    let scorer = table(&[("tion", 10.0)]);
    assert_eq!(scorer.score(""), 0.0);
    assert_eq!(scorer.score("tio"), 0.0);
}

#[test]
fn exact_window_length_scores_once() {
    let scorer = table(&[("tion", 10.0)]);
    assert_eq!(scorer.score("tion"), 10.0);
}

#[test]
fn repeated_grams_accumulate() {
    let scorer = table(&[("aaaa", 1.5)]);
    // "aaaaaa" has three overlapping "aaaa" windows.
    assert_eq!(scorer.score("aaaaaa"), 4.5);
}

#[test]
fn duplicate_entries_merge_additively() {
    let scorer = table(&[("tion", 10.0), ("tion", 2.5)]);
    assert_eq!(scorer.len(), 1);
    assert_eq!(scorer.score("tion"), 12.5);
}

#[test]
fn loader_reads_tab_separated_counts() {
    let data = "TION\t100\nnthe\t50\nbad\t1\ntoolong\t5\nheck\tnope\n";
    let raw = load_tetragrams(Cursor::new(data), 1.0).unwrap();
    assert_eq!(raw.entries.len(), 2);

    let scorer = Scorer::from_entries(raw.entries);
    // Grams are lowercased on load.
    assert_eq!(scorer.score("tion"), 100.0);
    assert_eq!(scorer.score("nthe"), 50.0);
}

#[test]
fn loader_applies_table_scale() {
    let raw = load_tetragrams(Cursor::new("tion\t100\n"), 4.0).unwrap();
    assert_eq!(raw.entries.len(), 1);
    assert_eq!(raw.entries[0].1, 25.0);
}

#[test]
fn loader_skips_negative_and_non_finite_counts() {
    let raw = load_tetragrams(Cursor::new("tion\t-5\nnthe\tNaN\nther\t5\n"), 1.0).unwrap();
    assert_eq!(raw.entries.len(), 1);
    assert_eq!(raw.entries[0].0, *b"ther");
}

#[test]
fn scorer_loads_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("grams.tsv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "tion\t100").unwrap();
    writeln!(f, "nthe\t40").unwrap();

    let scorer = Scorer::from_path(&path, 1.0).unwrap();
    assert_eq!(scorer.len(), 2);
    // "nthetion" covers both grams once.
    assert_eq!(scorer.score("nthetion"), 140.0);
}

#[test]
fn missing_table_file_is_an_io_error() {
    let err = Scorer::from_path("no/such/table.tsv", 1.0).unwrap_err();
    assert!(matches!(err, ColBreakError::Io(_)));
}
