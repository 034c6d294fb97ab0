//! Property-based tests for the log parser
//!
//! Uses proptest to verify the parser handles arbitrary input without
//! panicking and never emits an invalid record.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;
use jj_gui::jj::Parser;
use jj_gui::model::Commit;

// =============================================================================
// Strategy generators for realistic-ish jj output
// =============================================================================

/// Generate a change_id-like string
fn change_id_strategy() -> impl Strategy<Value = String> {
    "[k-z]{4,12}".prop_map(|s| s.to_string())
}

/// Generate a bookmark list (space-separated names)
fn bookmarks_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9/_-]{0,10}", 0..4)
}

/// Generate a free-text field (single line, no separator)
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :@._-]{0,40}".prop_map(|s| s.trim().to_string())
}

fn commit_strategy() -> impl Strategy<Value = Commit> {
    (
        change_id_strategy(),
        bookmarks_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(id, branches, author, date, message, is_working, is_immutable)| Commit {
                id,
                author,
                date,
                message,
                is_working,
                is_immutable,
                branches,
            },
        )
}

// =============================================================================
// Robustness: the parser never panics and never emits an invalid record
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn log_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_log(&input);
    }

    #[test]
    fn log_parser_ids_are_valid(input in "[a-z|\n ]{0,200}") {
        for commit in Parser::parse_log(&input) {
            prop_assert!(commit.id.chars().count() >= 4);
            prop_assert_eq!(commit.id.trim(), commit.id.as_str());
        }
    }

    #[test]
    fn log_parser_never_yields_more_records_than_lines(input in "[a-z|\n]{0,200}") {
        let lines = input.lines().count();
        prop_assert!(Parser::parse_log(&input).len() <= lines);
    }
}

// =============================================================================
// Round trip: formatted records parse back to themselves, in order
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn log_round_trip(commits in prop::collection::vec(commit_strategy(), 0..20)) {
        let raw: String = commits
            .iter()
            .map(|c| format!("{}\n", c.to_log_line()))
            .collect();
        prop_assert_eq!(Parser::parse_log(&raw), commits);
    }

    #[test]
    fn noise_lines_are_ignored(
        commits in prop::collection::vec(commit_strategy(), 1..10),
        noise in "[a-zA-Z ]{0,30}",
    ) {
        let mut raw = String::new();
        for commit in &commits {
            raw.push_str(&noise);
            raw.push('\n');
            raw.push_str(&commit.to_log_line());
            raw.push('\n');
        }
        prop_assert_eq!(Parser::parse_log(&raw), commits);
    }
}
