//! Grade-band rollups over tidy rows.

use std::collections::HashMap;

use iaenr_model::{CanonicalTidyRow, GradeLevel, Subgroup};

use crate::tidy::share;

/// Grade bands and the single grades each one sums.
pub const GRADE_BANDS: [(GradeLevel, &[GradeLevel]); 3] = [
    (
        GradeLevel::K8,
        &[
            GradeLevel::K,
            GradeLevel::G01,
            GradeLevel::G02,
            GradeLevel::G03,
            GradeLevel::G04,
            GradeLevel::G05,
            GradeLevel::G06,
            GradeLevel::G07,
            GradeLevel::G08,
        ],
    ),
    (
        GradeLevel::Hs,
        &[
            GradeLevel::G09,
            GradeLevel::G10,
            GradeLevel::G11,
            GradeLevel::G12,
        ],
    ),
    (
        GradeLevel::K12,
        &[
            GradeLevel::K,
            GradeLevel::G01,
            GradeLevel::G02,
            GradeLevel::G03,
            GradeLevel::G04,
            GradeLevel::G05,
            GradeLevel::G06,
            GradeLevel::G07,
            GradeLevel::G08,
            GradeLevel::G09,
            GradeLevel::G10,
            GradeLevel::G11,
            GradeLevel::G12,
        ],
    ),
];

struct EntityGrades<'a> {
    template: &'a CanonicalTidyRow,
    total: Option<f64>,
    grades: HashMap<GradeLevel, Option<f64>>,
}

impl<'a> EntityGrades<'a> {
    fn new(template: &'a CanonicalTidyRow) -> Self {
        Self {
            template,
            total: None,
            grades: HashMap::new(),
        }
    }

    /// Whether `row` continues this entity. Identity keys can repeat (rows
    /// without a usable id), so a grade seen twice also starts a new entity.
    fn continues(&self, row: &CanonicalTidyRow) -> bool {
        self.template.entity_key() == row.entity_key()
            && !self.grades.contains_key(&row.grade_level)
    }
}

/// Computes `K8`, `HS` and `K12` rows at subgroup `total_enrollment` for
/// every entity in `rows`.
///
/// Entities are taken in order of appearance; each one's rows must be
/// contiguous, as [`tidy`](crate::tidy) emits them. A band count is the sum
/// of its present grade counts, missing when none is present. `pct` is
/// relative to the entity's `TOTAL` enrollment row. Only the band rows are
/// returned.
pub fn grade_band_aggregates(rows: &[CanonicalTidyRow]) -> Vec<CanonicalTidyRow> {
    let mut entities: Vec<EntityGrades<'_>> = Vec::new();

    for row in rows {
        if row.subgroup != Subgroup::TotalEnrollment || row.grade_level.is_band() {
            continue;
        }
        if entities.last().is_none_or(|entity| !entity.continues(row)) {
            entities.push(EntityGrades::new(row));
        }
        let Some(entity) = entities.last_mut() else {
            continue;
        };
        entity.grades.insert(row.grade_level, row.n_students);
        if row.grade_level == GradeLevel::Total {
            entity.total = row.n_students;
        }
    }

    let mut out = Vec::with_capacity(entities.len() * GRADE_BANDS.len());
    for entity in &entities {
        for (band, members) in GRADE_BANDS {
            let present: Vec<f64> = members
                .iter()
                .filter_map(|grade| entity.grades.get(grade).copied().flatten())
                .collect();
            let n = (!present.is_empty()).then(|| present.iter().sum::<f64>());
            out.push(CanonicalTidyRow {
                grade_level: band,
                subgroup: Subgroup::TotalEnrollment,
                n_students: n,
                pct: share(n, entity.total),
                ..entity.template.clone()
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use iaenr_model::{CanonicalWideRow, EntityType, NumericField};

    use super::*;
    use crate::tidy::tidy;

    fn band(rows: &[CanonicalTidyRow], grade: GradeLevel) -> &CanonicalTidyRow {
        rows.iter().find(|row| row.grade_level == grade).unwrap()
    }

    #[test]
    fn sums_bands_per_entity() {
        let mut wide = CanonicalWideRow::new(2024, EntityType::State)
            .with(NumericField::RowTotal, Some(200.0))
            .with(NumericField::GradePk, Some(20.0));
        for field in &NumericField::GRADES[1..] {
            wide.set(*field, Some(10.0));
        }
        let bands = grade_band_aggregates(&tidy(&[wide]));
        assert_eq!(bands.len(), 3);

        let k8 = band(&bands, GradeLevel::K8);
        assert_eq!(k8.n_students, Some(90.0));
        assert_eq!(k8.pct, Some(0.45));
        assert!(k8.is_state);
        assert_eq!(band(&bands, GradeLevel::Hs).n_students, Some(40.0));
        assert_eq!(band(&bands, GradeLevel::K12).n_students, Some(130.0));
    }

    #[test]
    fn band_without_grades_is_missing() {
        let wide = CanonicalWideRow::new(2024, EntityType::District)
            .with(NumericField::RowTotal, Some(50.0))
            .with(NumericField::Grade10, Some(12.0));
        let bands = grade_band_aggregates(&tidy(&[wide]));
        assert_eq!(band(&bands, GradeLevel::K8).n_students, None);
        assert_eq!(band(&bands, GradeLevel::Hs).n_students, Some(12.0));
        assert_eq!(band(&bands, GradeLevel::Hs).pct, Some(0.24));
    }

    #[test]
    fn keeps_entities_apart() {
        let a = CanonicalWideRow::new(2024, EntityType::District)
            .with(NumericField::Grade09, Some(1.0));
        let mut b = a.clone().with(NumericField::Grade09, Some(5.0));
        b.school_id = Some("0109".to_string());
        b.entity_type = EntityType::School;
        let bands = grade_band_aggregates(&tidy(&[a, b]));
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[1].n_students, Some(1.0));
        assert_eq!(bands[4].n_students, Some(5.0));
        assert!(bands[4].is_school);
    }

    #[test]
    fn entities_without_ids_stay_separate() {
        let a = CanonicalWideRow::new(2024, EntityType::District)
            .with(NumericField::RowTotal, Some(500.0))
            .with(NumericField::Grade09, Some(100.0));
        let b = CanonicalWideRow::new(2024, EntityType::District)
            .with(NumericField::RowTotal, Some(1200.0))
            .with(NumericField::Grade09, Some(300.0));
        let bands = grade_band_aggregates(&tidy(&[a, b]));
        assert_eq!(bands.len(), 6);

        let hs: Vec<(Option<f64>, Option<f64>)> = bands
            .iter()
            .filter(|row| row.grade_level == GradeLevel::Hs)
            .map(|row| (row.n_students, row.pct))
            .collect();
        assert_eq!(hs, vec![(Some(100.0), Some(0.2)), (Some(300.0), Some(0.25))]);
    }
}
