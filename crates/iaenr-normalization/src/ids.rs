//! Identifier and name cleanup.

use iaenr_model::DistrictId;

/// Character used to left-pad short district codes.
pub const DISTRICT_ID_PAD: char = '0';

/// Canonicalizes a district code to four digits.
///
/// Short codes are left-padded ("9" becomes "0009"). Anything that is not
/// exactly four digits after padding is dropped rather than truncated, so
/// "12345" is `None`.
pub fn standardize_district_id(raw: Option<&str>) -> Option<DistrictId> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let padded = format!(
        "{}{trimmed}",
        DISTRICT_ID_PAD
            .to_string()
            .repeat(DistrictId::WIDTH.saturating_sub(trimmed.chars().count()))
    );
    DistrictId::new(padded).ok()
}

/// Trims a school code; no width or format validation.
pub fn standardize_school_id(raw: Option<&str>) -> Option<String> {
    non_empty_trimmed(raw)
}

/// Trims a district or school name.
pub fn clean_name(raw: Option<&str>) -> Option<String> {
    non_empty_trimmed(raw)
}

fn non_empty_trimmed(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
