//! Historical adapter for the pre-2004 grade-only extracts.

use iaenr_map::{era_for_year, matches_year_label, resolve_index};
use iaenr_model::{CanonicalWideRow, Level, RawTable};
use tracing::{debug, warn};

use crate::processor::build_rows;

/// Turns a historical extract into District rows for `end_year`.
///
/// The header map is chosen by era. Multi-year extracts are narrowed to the
/// rows whose year label names `end_year`; an extract without a year-label
/// column is taken to hold that year alone. Demographic, gender and school
/// fields are always missing.
pub fn process_historical(raw: Option<&RawTable>, end_year: i32) -> Vec<CanonicalWideRow> {
    let Some(era) = era_for_year(end_year) else {
        warn!(end_year, "no historical header map covers this year");
        return Vec::new();
    };
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    let filtered;
    let table = match resolve_index(&raw.headers, &era.year_label) {
        Some(column) => {
            filtered = raw.clone().retain_rows(|row| {
                row.get(column)
                    .is_some_and(|label| matches_year_label(label, end_year))
            });
            debug!(
                end_year,
                era = era.name,
                kept = filtered.height(),
                of = raw.height(),
                "filtered historical extract by year label"
            );
            if filtered.rows.is_empty() {
                return Vec::new();
            }
            &filtered
        }
        None => raw,
    };

    build_rows(table, &era.fields, end_year, Level::District)
}
