use std::io::Write;

use plagiarism_detector::{
    check_sources, check_texts, compare_texts, CanonicalizeConfig, CompareConfig,
    DetectorConfig, TextSource,
};
use tempfile::NamedTempFile;

const ORIGINAL: &str = "Counting Bloom filters extend ordinary Bloom filters with small \
counters instead of single bits. Each insertion increments k counters and each deletion \
decrements them, so elements can be removed without rebuilding the whole structure.";

#[test]
fn verbatim_copy_scores_full() {
    let copied = "Each insertion increments k counters and each deletion decrements them.";
    let report = compare_texts(
        ORIGINAL,
        copied,
        &CanonicalizeConfig::default(),
        &CompareConfig::new().with_window_size(3),
    )
    .unwrap();
    assert!(report.is_full_match());
    assert_eq!(report.score, 100.0);
}

#[test]
fn light_edit_scores_partial() {
    let edited = "Each insertion bumps k counters and each removal decrements them.";
    let report = compare_texts(
        ORIGINAL,
        edited,
        &CanonicalizeConfig::default(),
        &CompareConfig::new().with_window_size(2),
    )
    .unwrap();
    // Windows: each insertion | insertion bumps | bumps k | k counters | counters and |
    // and each | each removal | removal decrements | decrements them
    assert_eq!(report.candidate_windows, 9);
    assert_eq!(report.match_count, 5);
    assert_eq!(
        report.matched_windows,
        vec![
            "each insertion",
            "k counters",
            "counters and",
            "and each",
            "decrements them"
        ]
    );
}

#[test]
fn unrelated_text_scores_zero() {
    let report = compare_texts(
        ORIGINAL,
        "Tomatoes ripen faster when stored next to bananas.",
        &CanonicalizeConfig::default(),
        &CompareConfig::default(),
    )
    .unwrap();
    assert_eq!(report.score, 0.0);
    assert!(report.matched_windows.is_empty());
}

#[test]
fn candidate_shorter_than_window() {
    let report = compare_texts(
        ORIGINAL,
        "Counting.",
        &CanonicalizeConfig::default(),
        &CompareConfig::new().with_window_size(3),
    )
    .unwrap();
    assert_eq!(report.candidate_windows, 0);
    assert_eq!(report.score, 0.0);
}

#[test]
fn direction_matters() {
    let short = "ordinary Bloom filters";
    let cfg = DetectorConfig::default();
    let forward = check_texts(ORIGINAL, short, &cfg).unwrap();
    let backward = check_texts(short, ORIGINAL, &cfg).unwrap();
    assert_eq!(forward.score, 100.0);
    assert!(backward.score < 15.0, "score {}", backward.score);
}

#[test]
fn sources_from_files() {
    let mut reference = NamedTempFile::new().unwrap();
    reference.write_all(ORIGINAL.as_bytes()).unwrap();
    let mut candidate = NamedTempFile::new().unwrap();
    candidate
        .write_all(b"Counting Bloom filters extend ordinary\nBloom filters!")
        .unwrap();

    let report = check_sources(
        &TextSource::Path(reference.path().to_path_buf()),
        &TextSource::Path(candidate.path().to_path_buf()),
        &DetectorConfig::default(),
    )
    .unwrap();
    assert_eq!(report.score, 100.0);
}

#[test]
fn report_serializes_to_json() {
    let report = check_texts(ORIGINAL, ORIGINAL, &DetectorConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["score"], 100.0);
    assert_eq!(json["filter"]["num_hashes"], 7);
    assert!(json["matched_windows"].as_array().unwrap().len() > 10);
}
