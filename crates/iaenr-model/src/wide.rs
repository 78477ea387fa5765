use serde::{Deserialize, Serialize};

use crate::{DistrictId, EntityType, NumericField};

/// One entity (state, district or school) for one end year.
///
/// Numeric slots are `None` when the source did not provide a usable value.
/// A present value is always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalWideRow {
    pub end_year: i32,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub district_id: Option<DistrictId>,
    pub school_id: Option<String>,
    pub district_name: Option<String>,
    pub school_name: Option<String>,
    pub row_total: Option<f64>,
    pub white: Option<f64>,
    pub black: Option<f64>,
    pub hispanic: Option<f64>,
    pub asian: Option<f64>,
    pub native_american: Option<f64>,
    pub pacific_islander: Option<f64>,
    pub multiracial: Option<f64>,
    pub male: Option<f64>,
    pub female: Option<f64>,
    pub grade_pk: Option<f64>,
    pub grade_k: Option<f64>,
    pub grade_01: Option<f64>,
    pub grade_02: Option<f64>,
    pub grade_03: Option<f64>,
    pub grade_04: Option<f64>,
    pub grade_05: Option<f64>,
    pub grade_06: Option<f64>,
    pub grade_07: Option<f64>,
    pub grade_08: Option<f64>,
    pub grade_09: Option<f64>,
    pub grade_10: Option<f64>,
    pub grade_11: Option<f64>,
    pub grade_12: Option<f64>,
}

impl CanonicalWideRow {
    /// Creates a row with every optional field missing.
    pub fn new(end_year: i32, entity_type: EntityType) -> Self {
        Self {
            end_year,
            entity_type,
            district_id: None,
            school_id: None,
            district_name: None,
            school_name: None,
            row_total: None,
            white: None,
            black: None,
            hispanic: None,
            asian: None,
            native_american: None,
            pacific_islander: None,
            multiracial: None,
            male: None,
            female: None,
            grade_pk: None,
            grade_k: None,
            grade_01: None,
            grade_02: None,
            grade_03: None,
            grade_04: None,
            grade_05: None,
            grade_06: None,
            grade_07: None,
            grade_08: None,
            grade_09: None,
            grade_10: None,
            grade_11: None,
            grade_12: None,
        }
    }

    pub fn get(&self, field: NumericField) -> Option<f64> {
        *self.slot(field)
    }

    /// Returns a copy of `self` with `field` replaced.
    #[must_use]
    pub fn with(mut self, field: NumericField, value: Option<f64>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: NumericField, value: Option<f64>) {
        *self.slot_mut(field) = value;
    }

    /// Sum of the fourteen grade fields with missing treated as zero.
    pub fn grade_sum(&self) -> f64 {
        NumericField::GRADES
            .iter()
            .filter_map(|field| self.get(*field))
            .sum()
    }

    fn slot(&self, field: NumericField) -> &Option<f64> {
        match field {
            NumericField::RowTotal => &self.row_total,
            NumericField::White => &self.white,
            NumericField::Black => &self.black,
            NumericField::Hispanic => &self.hispanic,
            NumericField::Asian => &self.asian,
            NumericField::NativeAmerican => &self.native_american,
            NumericField::PacificIslander => &self.pacific_islander,
            NumericField::Multiracial => &self.multiracial,
            NumericField::Male => &self.male,
            NumericField::Female => &self.female,
            NumericField::GradePk => &self.grade_pk,
            NumericField::GradeK => &self.grade_k,
            NumericField::Grade01 => &self.grade_01,
            NumericField::Grade02 => &self.grade_02,
            NumericField::Grade03 => &self.grade_03,
            NumericField::Grade04 => &self.grade_04,
            NumericField::Grade05 => &self.grade_05,
            NumericField::Grade06 => &self.grade_06,
            NumericField::Grade07 => &self.grade_07,
            NumericField::Grade08 => &self.grade_08,
            NumericField::Grade09 => &self.grade_09,
            NumericField::Grade10 => &self.grade_10,
            NumericField::Grade11 => &self.grade_11,
            NumericField::Grade12 => &self.grade_12,
        }
    }

    fn slot_mut(&mut self, field: NumericField) -> &mut Option<f64> {
        match field {
            NumericField::RowTotal => &mut self.row_total,
            NumericField::White => &mut self.white,
            NumericField::Black => &mut self.black,
            NumericField::Hispanic => &mut self.hispanic,
            NumericField::Asian => &mut self.asian,
            NumericField::NativeAmerican => &mut self.native_american,
            NumericField::PacificIslander => &mut self.pacific_islander,
            NumericField::Multiracial => &mut self.multiracial,
            NumericField::Male => &mut self.male,
            NumericField::Female => &mut self.female,
            NumericField::GradePk => &mut self.grade_pk,
            NumericField::GradeK => &mut self.grade_k,
            NumericField::Grade01 => &mut self.grade_01,
            NumericField::Grade02 => &mut self.grade_02,
            NumericField::Grade03 => &mut self.grade_03,
            NumericField::Grade04 => &mut self.grade_04,
            NumericField::Grade05 => &mut self.grade_05,
            NumericField::Grade06 => &mut self.grade_06,
            NumericField::Grade07 => &mut self.grade_07,
            NumericField::Grade08 => &mut self.grade_08,
            NumericField::Grade09 => &mut self.grade_09,
            NumericField::Grade10 => &mut self.grade_10,
            NumericField::Grade11 => &mut self.grade_11,
            NumericField::Grade12 => &mut self.grade_12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_field() {
        let mut row = CanonicalWideRow::new(2024, EntityType::School);
        for (idx, field) in NumericField::ALL.iter().enumerate() {
            row.set(*field, Some(idx as f64));
        }
        for (idx, field) in NumericField::ALL.iter().enumerate() {
            assert_eq!(row.get(*field), Some(idx as f64), "{field}");
        }
    }

    #[test]
    fn grade_sum_skips_missing() {
        let row = CanonicalWideRow::new(2024, EntityType::District)
            .with(NumericField::GradeK, Some(10.0))
            .with(NumericField::Grade12, Some(5.0));
        assert_eq!(row.grade_sum(), 15.0);
        assert_eq!(CanonicalWideRow::new(2024, EntityType::District).grade_sum(), 0.0);
    }
}
