//! Statewide rollup of district rows.

use iaenr_model::{CanonicalWideRow, EntityType, NumericField};

/// Name carried by the computed state row.
pub const STATE_NAME: &str = "Iowa";

/// Builds the single State row for `end_year` from district rows.
///
/// Missing district values count as zero, so a field no district reports
/// sums to zero. With no district rows at all every field stays missing.
pub fn aggregate_state(district_rows: &[CanonicalWideRow], end_year: i32) -> CanonicalWideRow {
    let mut state = CanonicalWideRow::new(end_year, EntityType::State);
    state.district_name = Some(STATE_NAME.to_string());
    for field in NumericField::ALL {
        state.set(field, state_sum(district_rows, field));
    }
    state
}

fn state_sum(district_rows: &[CanonicalWideRow], field: NumericField) -> Option<f64> {
    if district_rows.is_empty() {
        return None;
    }
    // fold from +0.0; an empty float `sum` is -0.0
    Some(
        district_rows
            .iter()
            .filter_map(|row| row.get(field))
            .fold(0.0, |acc, value| acc + value),
    )
}
