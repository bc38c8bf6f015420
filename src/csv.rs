//! CSV serialization
//!
//! Renders the master index to delimited text: one header line, then one
//! line per entry, sorted by configured category order and numeric id.
//! Labels are wrapped in double quotes with inner quotes doubled. The
//! export timestamp is rendered once and shared by every line, so two
//! renders with the same stamp are byte-identical.

use crate::config::ExportConfig;
use crate::record::{MasterEntry, MasterIndex};
use chrono::{DateTime, Local, Utc};
use std::cmp::Ordering;

/// Quote a label for CSV output, doubling any inner double quotes.
pub fn escape_label(label: &str) -> String {
    format!("\"{}\"", label.replace('"', "\"\""))
}

/// Numeric order on digit strings without integer parsing.
///
/// Shorter digit runs are smaller; equal lengths compare lexicographically,
/// which on digits is the numeric order. Leading zeros break ties ("7"
/// before "07").
pub fn numeric_id_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Render the index as delimited text with the given export timestamp.
pub fn render_csv(index: &MasterIndex, config: &ExportConfig, exported_at: &str) -> String {
    let mut rows: Vec<(&String, &MasterEntry)> = index.iter().collect();
    rows.sort_by(|(id_a, entry_a), (id_b, entry_b)| {
        let rank_a = config.rank(entry_a.category).unwrap_or(usize::MAX);
        let rank_b = config.rank(entry_b.category).unwrap_or(usize::MAX);
        rank_a
            .cmp(&rank_b)
            .then_with(|| numeric_id_order(id_a, id_b))
    });

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(config.header.clone());
    for (id, entry) in rows {
        lines.push(format!(
            "{category}{sep}{id}{sep}{label}{sep}{stamp}",
            category = entry.category,
            sep = config.separator,
            id = id,
            label = escape_label(&entry.label),
            stamp = exported_at,
        ));
    }
    lines.join("\n")
}

/// Fixed-locale export timestamp, `DD.MM.YYYY, HH:MM:SS` in local time.
pub fn export_timestamp(now: DateTime<Local>) -> String {
    now.format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// Download filename carrying the UTC export instant.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryKey;
    use chrono::TimeZone;

    fn entry(label: &str, year: u16) -> MasterEntry {
        MasterEntry {
            label: label.to_string(),
            category: CategoryKey(year),
        }
    }

    #[test]
    fn escapes_inner_quotes_by_doubling() {
        assert_eq!(
            escape_label("He said \"hi\""),
            "\"He said \"\"hi\"\"\"".to_string()
        );
        assert_eq!(escape_label("plain"), "\"plain\"".to_string());
    }

    #[test]
    fn numeric_order_handles_length_and_zeros() {
        assert_eq!(numeric_id_order("9", "10"), Ordering::Less);
        assert_eq!(numeric_id_order("10953", "77050"), Ordering::Less);
        assert_eq!(numeric_id_order("07", "7"), Ordering::Greater);
        assert_eq!(
            numeric_id_order("99999999999999999999", "100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn rows_sort_by_category_then_numeric_id() {
        let config = ExportConfig::default();
        let mut index = MasterIndex::new();
        index.insert("77050".to_string(), entry("Speed Set", 2025));
        index.insert("9090".to_string(), entry("Small Set", 2026));
        index.insert("10953".to_string(), entry("Icons Set", 2025));

        let csv = render_csv(&index, &config, "01.01.2026, 00:00:00");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "EOL Year;Set Number;Set Name;Export Date");
        assert_eq!(lines[1], "2025;10953;\"Icons Set\";01.01.2026, 00:00:00");
        assert_eq!(lines[2], "2025;77050;\"Speed Set\";01.01.2026, 00:00:00");
        assert_eq!(lines[3], "2026;9090;\"Small Set\";01.01.2026, 00:00:00");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_index_renders_header_only() {
        let config = ExportConfig::default();
        let csv = render_csv(&MasterIndex::new(), &config, "stamp");
        assert_eq!(csv, config.header);
    }

    #[test]
    fn same_stamp_renders_identically() {
        let config = ExportConfig::default();
        let mut index = MasterIndex::new();
        index.insert("10953".to_string(), entry("Icons Set", 2025));

        let first = render_csv(&index, &config, "23.08.2026, 12:00:00");
        let second = render_csv(&index, &config, "23.08.2026, 12:00:00");
        assert_eq!(first, second);
    }

    #[test]
    fn filename_encodes_the_utc_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 23, 9, 5, 7).unwrap();
        assert_eq!(
            export_filename("eol_export", instant),
            "eol_export_2026-08-23T09-05-07.csv".to_string()
        );
    }
}
