//! Level processor: one raw table into canonical wide rows.

use iaenr_map::{ColumnResolution, FieldPatterns, modern_field_map, resolve_fields};
use iaenr_model::{CanonicalField, CanonicalWideRow, Level, NumericField, RawTable};
use iaenr_normalization::{clean_name, normalize, standardize_district_id, standardize_school_id};
use tracing::debug;

/// Turns a modern district or school table into wide rows.
///
/// Columns are resolved against the modern field map; any field without a
/// matching column is missing on every row. When no total column resolves,
/// `row_total` is the sum of the grade counts, and a zero sum is treated as
/// missing. An absent or empty table yields no rows.
pub fn process(raw: Option<&RawTable>, end_year: i32, level: Level) -> Vec<CanonicalWideRow> {
    match raw {
        Some(raw) if !raw.is_empty() => build_rows(raw, modern_field_map(), end_year, level),
        _ => Vec::new(),
    }
}

/// Resolves `map` against the table headers and assembles one row per data row.
pub(crate) fn build_rows(
    raw: &RawTable,
    map: &[FieldPatterns],
    end_year: i32,
    level: Level,
) -> Vec<CanonicalWideRow> {
    let resolution = resolve_fields(&raw.headers, map);
    if !resolution.unresolved.is_empty() {
        let unresolved: Vec<&str> = resolution.unresolved.iter().map(CanonicalField::name).collect();
        debug!(end_year, %level, ?unresolved, "fields absent from source table");
    }
    let backfill = !resolution.is_resolved(CanonicalField::Numeric(NumericField::RowTotal));

    let rows: Vec<CanonicalWideRow> = (0..raw.height())
        .map(|idx| {
            let mut row = assemble_row(raw, &resolution, idx, end_year, level);
            if backfill {
                backfill_row_total(&mut row);
            }
            row
        })
        .collect();
    debug!(end_year, %level, rows = rows.len(), backfill, "processed source table");
    rows
}

fn assemble_row(
    raw: &RawTable,
    resolution: &ColumnResolution,
    idx: usize,
    end_year: i32,
    level: Level,
) -> CanonicalWideRow {
    let cell = |field: CanonicalField| {
        resolution
            .column(field)
            .and_then(|column| raw.cell(idx, column))
    };

    let mut row = CanonicalWideRow::new(end_year, level.entity_type());
    row.district_id = standardize_district_id(cell(CanonicalField::DistrictId));
    row.district_name = clean_name(cell(CanonicalField::DistrictName));
    if level == Level::School {
        row.school_id = standardize_school_id(cell(CanonicalField::SchoolId));
        row.school_name = clean_name(cell(CanonicalField::SchoolName));
    }
    for field in NumericField::ALL {
        row.set(field, normalize(cell(CanonicalField::Numeric(field))));
    }
    row
}

/// Fills `row_total` from the grade counts. A zero sum cannot be told apart
/// from "nothing reported", so it stays missing.
pub(crate) fn backfill_row_total(row: &mut CanonicalWideRow) {
    let sum = row.grade_sum();
    row.row_total = (sum > 0.0).then_some(sum);
}

#[cfg(test)]
mod tests {
    use iaenr_model::EntityType;

    use super::*;

    #[test]
    fn test_district_rows() {
        let raw = RawTable::from_rows(
            &["DISTRICT_CODE", "DISTRICT_NAME", "TOTAL_PK12", "TOTAL_MALE", "TOTAL_FEMALE"],
            &[
                &["9", " Adair-Casey ", "500", "260", "240"],
                &["17", "Adel", "1,200", "*", "590"],
            ],
        );
        let rows = process(Some(&raw), 2024, Level::District);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].entity_type, EntityType::District);
        assert_eq!(rows[0].district_id.as_ref().map(|id| id.as_str()), Some("0009"));
        assert_eq!(rows[0].district_name.as_deref(), Some("Adair-Casey"));
        assert_eq!(rows[0].row_total, Some(500.0));
        assert_eq!(rows[0].school_id, None);

        assert_eq!(rows[1].district_id.as_ref().map(|id| id.as_str()), Some("0017"));
        assert_eq!(rows[1].row_total, Some(1200.0));
        assert_eq!(rows[1].male, None);
        assert_eq!(rows[1].female, Some(590.0));
        assert_eq!(rows[1].white, None);
    }

    #[test]
    fn test_school_rows_keep_district() {
        let raw = RawTable::from_rows(
            &["DISTRICT_CODE", "SCHOOL_CODE", "SCHOOL_NAME", "TOTAL_PK12"],
            &[&["441", " 0109 ", "Lincoln Elementary", "312"]],
        );
        let rows = process(Some(&raw), 2024, Level::School);
        assert_eq!(rows[0].entity_type, EntityType::School);
        assert_eq!(rows[0].district_id.as_ref().map(|id| id.as_str()), Some("0441"));
        assert_eq!(rows[0].school_id.as_deref(), Some("0109"));
        assert_eq!(rows[0].school_name.as_deref(), Some("Lincoln Elementary"));
    }

    #[test]
    fn test_total_backfilled_from_grades() {
        let raw = RawTable::from_rows(
            &["DISTRICT", "K", "GRADE 1", "GRADE 12"],
            &[&["9", "10", "12", "<10"], &["17", "0", "", "0"]],
        );
        let rows = process(Some(&raw), 2010, Level::District);
        assert_eq!(rows[0].row_total, Some(22.0));
        assert_eq!(rows[0].grade_12, None);
        assert_eq!(rows[1].row_total, None);
        assert_eq!(rows[1].grade_k, Some(0.0));
    }

    #[test]
    fn test_resolved_total_is_not_backfilled() {
        let raw = RawTable::from_rows(&["DISTRICT", "TOTAL", "K"], &[&["9", "*", "10"]]);
        let rows = process(Some(&raw), 2010, Level::District);
        assert_eq!(rows[0].row_total, None);
    }

    #[test]
    fn test_invalid_district_id_is_missing() {
        let raw = RawTable::from_rows(&["DISTRICT", "TOTAL"], &[&["12345", "1"], &["AB", "2"]]);
        let rows = process(Some(&raw), 2010, Level::District);
        assert!(rows.iter().all(|row| row.district_id.is_none()));
    }

    #[test]
    fn test_empty_input() {
        assert!(process(None, 2024, Level::District).is_empty());
        assert!(process(Some(&RawTable::default()), 2024, Level::School).is_empty());
        let header_only = RawTable::from_rows(&["DISTRICT_CODE"], &[]);
        assert!(process(Some(&header_only), 2024, Level::District).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let raw = RawTable::from_rows(&["DISTRICT", "TOTAL", "MALE"], &[&["9", "100", "51"]]);
        assert_eq!(
            process(Some(&raw), 2020, Level::District),
            process(Some(&raw), 2020, Level::District)
        );
    }
}
