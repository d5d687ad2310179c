use super::*;
use pretty_assertions::assert_eq;

fn texts(found: &[CloseMatch<'_>]) -> Vec<String> {
    found.iter().map(|m| m.text.to_owned()).collect()
}

// Similarity

#[test]
fn test_similarity_identical() {
    assert!((similarity("append", "append") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_similarity_both_empty_is_one() {
    assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_similarity_one_empty_is_zero() {
    assert!(similarity("", "abc").abs() < f64::EPSILON);
    assert!(similarity("abc", "").abs() < f64::EPSILON);
}

#[test]
fn test_similarity_shifted_block() {
    // "bcd" is the only block: 2 * 3 / 8
    assert!((similarity("abcd", "bcde") - 0.75).abs() < 1e-9);
}

#[test]
fn test_similarity_recurses_on_both_sides() {
    // "app" then "l" to its right: 2 * 4 / 10
    assert!((similarity("apple", "appel") - 0.8).abs() < 1e-9);
    // "ap" then "e": 2 * 3 / 8
    assert!((similarity("ape", "appel") - 0.75).abs() < 1e-9);
}

#[test]
fn test_similarity_prefix() {
    // 2 * 4 / 9
    assert!((similarity("baba", "babar") - 8.0 / 9.0).abs() < 1e-9);
}

#[test]
fn test_similarity_counts_chars_not_bytes() {
    assert!((similarity("héllo", "hello") - 0.8).abs() < 1e-9);
}

#[test]
fn test_similarity_disjoint() {
    assert!(similarity("abc", "xyz").abs() < f64::EPSILON);
}

#[test]
fn test_cheap_bounds_never_undercut_ratio() {
    let pairs = [
        ("apple", "appel"),
        ("abcd", "bcde"),
        ("append", "extend"),
        ("iteritems", "items"),
        ("", "x"),
    ];
    for (a, b) in pairs {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let full = ratio(&a, &b);
        assert!(quick_ratio(&a, &b) >= full);
        assert!(real_quick_ratio(&a, &b) >= quick_ratio(&a, &b));
    }
}

// Close matches

#[test]
fn test_close_matches_ranked_by_score() {
    let found = close_matches("appel", ["ape", "apple", "peach", "puppy"], MatchBounds::DEFAULT);
    assert_eq!(texts(&found), vec!["apple", "ape"]);
    assert!(found[0].score > found[1].score);
}

#[test]
fn test_close_matches_excludes_target() {
    let found = close_matches("babar", ["babar", "baba"], MatchBounds::DEFAULT);
    assert_eq!(texts(&found), vec!["baba"]);
}

#[test]
fn test_close_matches_ties_keep_input_order() {
    let found = close_matches("abcd", ["abce", "abcf"], MatchBounds::DEFAULT);
    assert_eq!(texts(&found), vec!["abce", "abcf"]);

    let found = close_matches("abcd", ["abcf", "abce"], MatchBounds::DEFAULT);
    assert_eq!(texts(&found), vec!["abcf", "abce"]);
}

#[test]
fn test_close_matches_respects_max_results() {
    let candidates = ["abce", "abcf", "abcg", "abch"];
    assert_eq!(close_matches("abcd", candidates, MatchBounds::DEFAULT).len(), 3);
    assert_eq!(close_matches("abcd", candidates, MatchBounds::LOOSE).len(), 4);
}

#[test]
fn test_close_matches_zero_results() {
    let bounds = MatchBounds {
        max_results: 0,
        min_similarity: 0.0,
    };
    assert!(close_matches("abcd", ["abce"], bounds).is_empty());
}

#[test]
fn test_close_matches_threshold_is_inclusive() {
    // Exactly 0.75.
    let bounds = MatchBounds {
        max_results: 3,
        min_similarity: 0.75,
    };
    assert_eq!(texts(&close_matches("abcd", ["abce"], bounds)), vec!["abce"]);
}

#[test]
fn test_close_matches_below_threshold() {
    assert!(close_matches("append", ["extend", "insert"], MatchBounds::DEFAULT).is_empty());
}

#[test]
fn test_close_matches_empty_candidates() {
    assert!(close_matches("x", std::iter::empty(), MatchBounds::DEFAULT).is_empty());
}

#[test]
fn test_close_matches_caps_candidates() {
    let filler: Vec<String> = (0..MAX_FUZZY_CANDIDATES).map(|n| format!("zz{n}")).collect();
    let candidates = filler
        .iter()
        .map(String::as_str)
        .chain(std::iter::once("babar"));
    assert!(close_matches("baba", candidates, MatchBounds::DEFAULT).is_empty());
}

#[test]
fn test_close_match_texts() {
    assert_eq!(
        close_match_texts("appendh", ["append", "extend"], MatchBounds::DEFAULT),
        vec!["append"]
    );
}

#[test]
fn test_bounds_default() {
    assert_eq!(MatchBounds::default(), MatchBounds::DEFAULT);
    assert_eq!(MatchBounds::DEFAULT.max_results, 3);
    assert_eq!(MatchBounds::LOOSE.max_results, 5);
}
