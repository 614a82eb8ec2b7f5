//! Property tests for the end-to-end `format_document` pipeline, covering
//! the invariants spec.md §8 lists beyond the literal worked scenarios:
//! idempotence (formatting a formatted document changes nothing) and
//! keyword-case independence (the same statement, differently cased,
//! formats to the same shape once keywords are lowercased consistently).

use proptest::prelude::*;

use sqlfmt_common::dialect::AnsiDialect;
use sqlfmt_common::FormatOptions;

const STATEMENTS: &[&str] = &[
    "SELECT a FROM t",
    "SELECT a, b FROM t",
    "SELECT a FROM t WHERE a = 1 AND b = 2",
    "SELECT a FROM t INNER JOIN u ON t.id = u.id",
    "SELECT a FROM t GROUP BY a ORDER BY a",
    "SELECT * FROM (SELECT a FROM t) s",
    "SELECT CASE WHEN a = 1 THEN x ELSE y END FROM t",
];

fn opts() -> FormatOptions {
    FormatOptions { tab_size: 2, insert_spaces: true }
}

proptest! {
    #[test]
    fn formatting_is_idempotent(idx in 0..STATEMENTS.len()) {
        let src = STATEMENTS[idx];
        let first = sqlfmt_format::format_document(src, &opts(), &AnsiDialect, false).unwrap();
        let second = sqlfmt_format::format_document(&first.new_text, &opts(), &AnsiDialect, false).unwrap();
        prop_assert_eq!(first.new_text, second.new_text);
    }

    #[test]
    fn lowercase_flag_round_trips_regardless_of_source_casing(idx in 0..STATEMENTS.len()) {
        let src = STATEMENTS[idx];
        let upper = sqlfmt_format::format_document(src, &opts(), &AnsiDialect, true).unwrap();
        let lower = sqlfmt_format::format_document(&src.to_ascii_lowercase(), &opts(), &AnsiDialect, true).unwrap();
        prop_assert_eq!(upper.new_text, lower.new_text);
    }
}
