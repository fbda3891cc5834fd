//! Find engine tests
//!
//! Scan rules, cycling laws, and property tests against a simple reference
//! scan.

use proptest::prelude::*;
use yanta::search::{find, is_valid_at, MatchSet, SearchDirection, SearchQuery};

// ========================================================================
// Helpers
// ========================================================================

/// Non-overlapping left-to-right scan over ASCII text, filtered by word bounds
fn reference_scan(text: &str, query: &SearchQuery) -> Vec<usize> {
    let (haystack, needle) = if query.match_case {
        (text.to_string(), query.text.clone())
    } else {
        (text.to_ascii_lowercase(), query.text.to_ascii_lowercase())
    };
    let bytes = haystack.as_bytes();
    haystack
        .match_indices(needle.as_str())
        .map(|(i, _)| i)
        .filter(|&i| {
            if !query.match_whole_word {
                return true;
            }
            let before = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
            let after = bytes
                .get(i + needle.len())
                .map_or(true, |b| !b.is_ascii_alphanumeric());
            before && after
        })
        .collect()
}

fn offsets(set: &MatchSet) -> Vec<usize> {
    set.matches().to_vec()
}

// ========================================================================
// Scan rules
// ========================================================================

#[test]
fn test_whole_word_skips_occurrence_inside_word() {
    let query = SearchQuery::new("cat").whole_word(true);
    let set = find("cat catalog cat", &query);
    assert_eq!(offsets(&set), vec![0, 12]);
}

#[test]
fn test_case_sensitive_only_exact() {
    let query = SearchQuery::new("cat").match_case(true);
    assert_eq!(offsets(&find("Cat cat CAT", &query)), vec![4]);
}

#[test]
fn test_case_insensitive_finds_all() {
    let query = SearchQuery::new("cat").match_case(false);
    assert_eq!(offsets(&find("Cat cat CAT", &query)), vec![0, 4, 8]);
}

#[test]
fn test_not_found_is_empty_with_no_cursor() {
    let set = find("nothing here", &SearchQuery::new("zebra"));
    assert!(set.is_empty());
    assert_eq!(set.cursor(), None);
    assert_eq!(set.current_range(), None);
}

#[test]
fn test_matches_across_lines() {
    let set = find("one\ntwo one\n\none", &SearchQuery::new("one"));
    assert_eq!(offsets(&set), vec![0, 8, 13]);
}

// ========================================================================
// Cycling
// ========================================================================

#[test]
fn test_next_wraps_around() {
    let text = "x . x . x";
    let query = SearchQuery::new("x");
    let mut set = find(text, &query);

    assert_eq!(set.next(text, &query), Some(4..5));
    assert_eq!(set.next(text, &query), Some(8..9));
    assert_eq!(set.next(text, &query), Some(0..1));
}

#[test]
fn test_previous_wraps_to_last() {
    let text = "x . x . x";
    let query = SearchQuery::new("x");
    let mut set = find(text, &query);

    assert_eq!(set.previous(text, &query), Some(8..9));
    assert_eq!(set.cursor(), Some(2));
}

#[test]
fn test_full_cycle_returns_to_start() {
    let text = "ab ab ab ab ab";
    let query = SearchQuery::new("ab");
    let mut set = find(text, &query);
    let original = set.clone();

    for _ in 0..set.len() {
        set.next(text, &query);
    }
    assert_eq!(set, original);

    for _ in 0..set.len() {
        set.previous(text, &query);
    }
    assert_eq!(set, original);
}

#[test]
fn test_next_and_previous_are_inverses() {
    let text = "ab ab ab ab";
    let query = SearchQuery::new("ab");
    let mut set = find(text, &query);

    for start in 0..set.len() {
        let before = set.clone();
        set.next(text, &query);
        set.previous(text, &query);
        assert_eq!(set, before, "cursor {}", start);
        set.next(text, &query);
    }
}

#[test]
fn test_single_match_cycles_to_itself() {
    let text = "only one";
    let query = SearchQuery::new("one");
    let mut set = find(text, &query);
    assert_eq!(set.next(text, &query), Some(5..8));
    assert_eq!(set.previous(text, &query), Some(5..8));
}

#[test]
fn test_cycling_skips_match_removed_by_edit() {
    let query = SearchQuery::new("fox");
    let mut set = find("fox fox fox", &query);

    // Middle occurrence overwritten since the find
    let edited = "fox dog fox";
    assert_eq!(set.step(edited, &query, SearchDirection::Forward), Some(8..11));
    assert_eq!(set.step(edited, &query, SearchDirection::Backward), Some(0..3));
}

#[test]
fn test_cycling_terminates_when_nothing_revalidates() {
    let query = SearchQuery::new("fox").whole_word(true);
    let mut set = find("fox fox", &query);
    let before = set.clone();

    assert_eq!(set.next("foxy foxy", &query), None);
    assert_eq!(set, before);
    assert_eq!(set.previous("", &query), None);
    assert_eq!(set, before);
}

#[test]
fn test_cycling_on_empty_set_is_noop() {
    let query = SearchQuery::new("x");
    let mut set = find("abc", &query);
    assert_eq!(set.next("abc", &query), None);
    assert_eq!(set.previous("abc", &query), None);
    assert!(set.is_empty());
}

// ========================================================================
// Re-validation
// ========================================================================

#[test]
fn test_is_valid_at_checks_boundaries_against_current_text() {
    let query = SearchQuery::new("cat").whole_word(true);
    assert!(is_valid_at("a cat b", &query, 2));
    assert!(!is_valid_at("a cats b", &query, 2));
    assert!(!is_valid_at("acat b", &query, 1));
}

#[test]
fn test_is_valid_at_requires_text_at_offset() {
    let query = SearchQuery::new("cat");
    assert!(!is_valid_at("a dog b", &query, 2));
    assert!(!is_valid_at("cat", &query, 1));
}

// ========================================================================
// Properties
// ========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_scan_matches_reference(
        text in "[aAbB 1.]{0,40}",
        needle in "[aAbB 1.]{1,3}",
        match_case: bool,
        whole_word: bool,
    ) {
        let query = SearchQuery::new(needle)
            .match_case(match_case)
            .whole_word(whole_word);

        let set = find(&text, &query);
        prop_assert_eq!(offsets(&set), reference_scan(&text, &query));
        prop_assert_eq!(set.cursor().is_some(), !set.is_empty());
    }

    #[test]
    fn test_every_found_offset_revalidates(
        text in "[ab c]{0,30}",
        needle in "[ab]{2}",
        whole_word: bool,
    ) {
        let query = SearchQuery::new(needle).whole_word(whole_word);
        let set = find(&text, &query);
        for &offset in set.matches() {
            prop_assert!(is_valid_at(&text, &query, offset));
        }
    }

    #[test]
    fn test_full_cycle_on_unchanged_text(
        text in "[ab ]{0,40}",
        needle in "[ab]{1,2}",
        match_case: bool,
    ) {
        let query = SearchQuery::new(needle).match_case(match_case);
        let mut set = find(&text, &query);
        let original = set.clone();

        for _ in 0..set.len() {
            prop_assert!(set.next(&text, &query).is_some());
        }
        prop_assert_eq!(&set, &original);

        for _ in 0..set.len() {
            set.next(&text, &query);
            set.previous(&text, &query);
            prop_assert_eq!(&set, &original);
        }
    }
}
