//! Wide-to-long reshaping.

use iaenr_model::{CanonicalTidyRow, CanonicalWideRow, GradeLevel, NumericField, Subgroup};
use tracing::debug;

/// Rows emitted per wide row: ten subgroups at `TOTAL`, fourteen grades.
pub const TIDY_ROWS_PER_ENTITY: usize = Subgroup::ALL.len() + NumericField::GRADES.len();

/// `n / total`, or `None` when either side is missing or the total is zero.
pub fn share(n: Option<f64>, total: Option<f64>) -> Option<f64> {
    match (n, total) {
        (Some(n), Some(total)) if total > 0.0 => Some(n / total),
        _ => None,
    }
}

/// Reshapes wide rows into one row per (entity, grade level, subgroup).
///
/// For each entity this emits every subgroup at grade level `TOTAL`, then
/// every grade at subgroup `total_enrollment`. Subgroups are never crossed
/// with grades. Rows whose count is missing are kept so a reader can tell
/// "not reported" apart from a reported zero.
pub fn tidy(wide_rows: &[CanonicalWideRow]) -> Vec<CanonicalTidyRow> {
    let mut out = Vec::with_capacity(wide_rows.len() * TIDY_ROWS_PER_ENTITY);
    for row in wide_rows {
        let total = row.row_total;
        for subgroup in Subgroup::ALL {
            let n = row.get(NumericField::for_subgroup(subgroup));
            out.push(CanonicalTidyRow::for_entity(
                row,
                GradeLevel::Total,
                subgroup,
                n,
                share(n, total),
            ));
        }
        for (field, grade) in NumericField::GRADES.iter().zip(GradeLevel::GRADES) {
            let n = row.get(*field);
            out.push(CanonicalTidyRow::for_entity(
                row,
                grade,
                Subgroup::TotalEnrollment,
                n,
                share(n, total),
            ));
        }
    }
    debug!(entities = wide_rows.len(), rows = out.len(), "tidied enrollment");
    out
}
