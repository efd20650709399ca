use plagiarism_detector::{
    compare, compare_texts, fingerprint_tokens, CanonicalizeConfig, CompareConfig,
    PerceptualConfig,
};

fn canonical_defaults() -> CanonicalizeConfig {
    CanonicalizeConfig::default()
}

const ESSAY: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness.";

const REWRITE: &str = "It was the best of days and the worst of days; it was the age of \
wisdom and the age of folly. It was the season of Light, it was the season of gloom.";

#[test]
fn equivalent_inputs_fingerprint_identically() {
    let a = plagiarism_detector::canonicalize(" Hello   world!  ", &canonical_defaults()).unwrap();
    let b = plagiarism_detector::canonicalize("hello WORLD", &canonical_defaults()).unwrap();
    assert_eq!(a.words(), b.words());

    let cfg = PerceptualConfig::default();
    let fp_a = fingerprint_tokens(&a.tokens, &cfg).unwrap();
    let fp_b = fingerprint_tokens(&b.tokens, &cfg).unwrap();
    assert_eq!(fp_a, fp_b);
}

#[test]
fn scores_are_stable_across_runs() {
    let cfg = CompareConfig::new().with_window_size(3);
    let first = compare_texts(ESSAY, REWRITE, &canonical_defaults(), &cfg).unwrap();
    for _ in 0..10 {
        let again = compare_texts(ESSAY, REWRITE, &canonical_defaults(), &cfg).unwrap();
        assert_eq!(again, first);
    }
    assert!(first.score > 0.0 && first.score < 100.0, "score {}", first.score);
}

#[test]
fn parallel_and_sequential_agree() {
    let reference: Vec<String> = ESSAY.repeat(50).split(' ').map(str::to_string).collect();
    let candidate: Vec<String> = REWRITE.repeat(40).split(' ').map(str::to_string).collect();
    for window_size in [1, 2, 3, 5] {
        let seq = CompareConfig::new().with_window_size(window_size);
        let par = seq.clone().with_parallel(true);
        let a = plagiarism_detector::compare_with_config(&reference, &candidate, &seq).unwrap();
        let b = plagiarism_detector::compare_with_config(&reference, &candidate, &par).unwrap();
        assert_eq!(a, b, "window_size={window_size}");
    }
}

#[test]
fn fixed_scenarios() {
    let fox = ["the", "quick", "brown", "fox"];
    assert_eq!(compare(&fox, &fox, 10_000, 0.01, 2).unwrap(), 100.0);
    assert_eq!(
        compare(&["a", "b", "c"], &["d", "e", "f"], 10_000, 0.01, 2).unwrap(),
        0.0
    );
}
