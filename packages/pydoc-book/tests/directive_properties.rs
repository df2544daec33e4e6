//! Property-based tests for the directive scanner
//!
//! Invariants:
//! - Totality: any input yields Ok or a directive error, never a panic
//! - Roundtrip: names written into an ignore block come back as the exclusion set
//! - Locality: code after the leading comment run never adds exclusions

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;
use pydoc_book::features::directives::{scan_directives, Directive};
use pydoc_book::ErrorKind;

fn qualified_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}(\\.[A-Za-z][A-Za-z0-9_]{0,8})?"
}

fn names_of(directive: Directive) -> BTreeSet<String> {
    match directive {
        Directive::Exclude(set) => set.sorted().into_iter().map(String::from).collect(),
        Directive::SkipFile => panic!("unexpected SkipFile"),
    }
}

proptest! {
    #[test]
    fn prop_scanner_never_panics(text in "\\PC*") {
        if let Err(err) = scan_directives(&text, Path::new("any.py")) {
            prop_assert_eq!(err.kind, ErrorKind::Directive);
        }
    }

    #[test]
    fn prop_comment_heavy_input_never_panics(
        lines in prop::collection::vec(
            prop_oneof![
                Just("# doc: ignore".to_string()),
                Just("# doc: end ignore".to_string()),
                Just("# doc: module ignore".to_string()),
                Just("#".to_string()),
                "#[ -~]{0,20}",
                "[ -~]{0,20}",
                "# ünïcødé ✓ {0,3}",
            ],
            0..12,
        )
    ) {
        let text = lines.join("\n");
        let _ = scan_directives(&text, Path::new("any.py"));
    }

    #[test]
    fn prop_ignore_block_roundtrip(
        names in prop::collection::vec(qualified_name(), 1..8),
        per_line in 1usize..4,
    ) {
        let mut text = String::from("# license header, not names\n# doc: ignore\n");
        for chunk in names.chunks(per_line) {
            text.push_str(&format!("# {},\n", chunk.join(", ")));
        }
        text.push_str("# doc: end ignore\nclass Foo:\n    pass\n");

        let found = names_of(scan_directives(&text, Path::new("m.py")).unwrap());
        let expected: BTreeSet<String> = names.into_iter().collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_code_after_comment_run_is_ignored(
        names in prop::collection::vec(qualified_name(), 1..5),
        tail in "[a-z =,.\\n]{0,40}",
    ) {
        let text = format!("# doc: ignore\n# {}\nimport os\n# {}\n", names.join(","), tail);

        let found = names_of(scan_directives(&text, Path::new("m.py")).unwrap());
        let expected: BTreeSet<String> = names.into_iter().collect();
        prop_assert_eq!(found, expected);
    }
}
