//! Property-based tests for the record grammar and the label escaping.

use eolcsv::{escape_label, parse_record};
use proptest::prelude::*;

/// Test-only inverse of `escape_label`.
fn unescape_label(field: &str) -> Option<String> {
    let inner = field.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}

proptest! {
    #[test]
    fn valid_records_roundtrip(
        id in "[0-9]{1,12}",
        gap in "[ \t]{1,3}",
        label in "[A-Za-z(\"'][A-Za-z0-9 ()\"'.-]{0,40}",
    ) {
        let input = format!("{}{}{}", id, gap, label);
        let fields = parse_record(&input).expect("grammar must accept digit-gap-label");
        prop_assert_eq!(fields.id, id);
        prop_assert_eq!(fields.label, label.trim());
    }

    #[test]
    fn inputs_without_leading_digits_never_match(
        text in "[A-Za-z ()\"'.-]{0,60}",
    ) {
        prop_assert!(parse_record(&text).is_none());
    }

    #[test]
    fn bare_digit_runs_never_match(id in "[0-9]{1,12}", pad in "[ \t]{0,4}") {
        let input = format!("{}{}", id, pad);
        prop_assert!(parse_record(&input).is_none());
    }

    #[test]
    fn escaping_roundtrips_any_label(label in "[ -~]{0,60}") {
        let escaped = escape_label(&label);
        prop_assert_eq!(unescape_label(&escaped), Some(label));
    }

    #[test]
    fn escaped_labels_never_leak_a_lone_quote(label in "[ -~]{0,60}") {
        let escaped = escape_label(&label);
        let inner = &escaped[1..escaped.len() - 1];
        // Quotes inside the field body only ever appear doubled.
        let mut chars = inner.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '"' {
                prop_assert_eq!(chars.next(), Some('"'));
            }
        }
    }
}
