//! Header row location and normalization.

use iaenr_map::{FieldPatterns, historical_eras, modern_field_map, resolve_index};
use iaenr_model::CanonicalField;
use tracing::debug;

/// Zero-based row assumed to hold the header when detection fails.
///
/// The published sheets put four title rows above the header, so the fifth
/// row is the best blind guess.
pub const FALLBACK_HEADER_ROW: usize = 4;

/// Rows scanned when looking for the header.
const PROBE_ROWS: usize = 10;

/// How to locate the header row of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderRow {
    /// Scan for a row naming a district identifier column.
    #[default]
    Detect,
    /// Header sits below exactly this many title rows.
    Fixed(usize),
}

/// Trims whitespace and a stray byte-order mark, collapsing inner runs of
/// whitespace to a single space.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the index of the first row naming a district identifier column,
/// or [`FALLBACK_HEADER_ROW`] if none of the leading rows does.
pub fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let candidates = district_id_patterns();
    let found = rows.iter().take(PROBE_ROWS).position(|row| {
        candidates
            .iter()
            .any(|entry| resolve_index(row, &entry.patterns).is_some())
    });
    match found {
        Some(idx) => idx,
        None => {
            debug!(
                fallback = FALLBACK_HEADER_ROW,
                "no header row detected; assuming fallback row"
            );
            FALLBACK_HEADER_ROW
        }
    }
}

fn district_id_patterns() -> Vec<&'static FieldPatterns> {
    modern_field_map()
        .iter()
        .chain(historical_eras().iter().flat_map(|era| era.fields.iter()))
        .filter(|entry| entry.field == CanonicalField::DistrictId)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  DISTRICT   NAME "), "DISTRICT NAME");
        assert_eq!(normalize_header("\u{feff}DISTRICT_CODE"), "DISTRICT_CODE");
    }

    #[test]
    fn test_detects_header_below_title_rows() {
        let sheet = rows(&[
            &["Iowa Department of Education", ""],
            &["2023-2024 Certified Enrollment", ""],
            &["DISTRICT_CODE", "TOTAL_PK12"],
            &["9", "500"],
        ]);
        assert_eq!(detect_header_row(&sheet), 2);
    }

    #[test]
    fn test_falls_back_to_fifth_row() {
        let sheet = rows(&[&["a"], &["b"], &["c"], &["d"], &["LEA", "COUNT"], &["1", "2"]]);
        assert_eq!(detect_header_row(&sheet), FALLBACK_HEADER_ROW);
        assert_eq!(detect_header_row(&[]), FALLBACK_HEADER_ROW);
    }
}
