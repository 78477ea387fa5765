//! Numeric conversion of raw enrollment cells.

/// Placeholders the state publishes instead of a redacted or unavailable count.
pub const SUPPRESSION_MARKERS: &[&str] = &[
    "*", ".", "-", "-1", "<5", "<10", "N/A", "NA", "", "NULL",
];

/// True if `value` (already trimmed) is a suppression marker or a `<n` range.
pub fn is_suppressed(value: &str) -> bool {
    value.starts_with('<')
        || SUPPRESSION_MARKERS
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(value))
}

/// Converts a raw cell to a count.
///
/// Handles:
/// - Thousands separators: "1,234"
/// - Surrounding whitespace, and non-breaking spaces used as separators
/// - Suppression markers: "*", "<10", "N/A", ... become `None`
///
/// Returns `None` for anything that does not parse, and for negative,
/// infinite or NaN results, so a present value is always a usable count.
pub fn normalize(cell: Option<&str>) -> Option<f64> {
    let trimmed = cell?.trim();
    if is_suppressed(trimmed) {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|ch| *ch != ',' && *ch != '\u{a0}')
        .collect();
    if cleaned.is_empty() || is_suppressed(&cleaned) {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        // -0.0 compares equal to 0.0; store the positive zero
        Some(value.abs())
    } else {
        None
    }
}
