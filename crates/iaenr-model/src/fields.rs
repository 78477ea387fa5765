//! Canonical fields: the fixed named slots of the normalized schema.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{GradeLevel, Subgroup};

/// Every numeric slot of a [`CanonicalWideRow`](crate::CanonicalWideRow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    RowTotal,
    White,
    Black,
    Hispanic,
    Asian,
    NativeAmerican,
    PacificIslander,
    Multiracial,
    Male,
    Female,
    GradePk,
    GradeK,
    Grade01,
    Grade02,
    Grade03,
    Grade04,
    Grade05,
    Grade06,
    Grade07,
    Grade08,
    Grade09,
    Grade10,
    Grade11,
    Grade12,
}

impl NumericField {
    /// All numeric fields in wide column order.
    pub const ALL: [NumericField; 24] = [
        NumericField::RowTotal,
        NumericField::White,
        NumericField::Black,
        NumericField::Hispanic,
        NumericField::Asian,
        NumericField::NativeAmerican,
        NumericField::PacificIslander,
        NumericField::Multiracial,
        NumericField::Male,
        NumericField::Female,
        NumericField::GradePk,
        NumericField::GradeK,
        NumericField::Grade01,
        NumericField::Grade02,
        NumericField::Grade03,
        NumericField::Grade04,
        NumericField::Grade05,
        NumericField::Grade06,
        NumericField::Grade07,
        NumericField::Grade08,
        NumericField::Grade09,
        NumericField::Grade10,
        NumericField::Grade11,
        NumericField::Grade12,
    ];

    pub const RACE_ETHNICITY: [NumericField; 7] = [
        NumericField::White,
        NumericField::Black,
        NumericField::Hispanic,
        NumericField::Asian,
        NumericField::NativeAmerican,
        NumericField::PacificIslander,
        NumericField::Multiracial,
    ];

    pub const GENDER: [NumericField; 2] = [NumericField::Male, NumericField::Female];

    pub const GRADES: [NumericField; 14] = [
        NumericField::GradePk,
        NumericField::GradeK,
        NumericField::Grade01,
        NumericField::Grade02,
        NumericField::Grade03,
        NumericField::Grade04,
        NumericField::Grade05,
        NumericField::Grade06,
        NumericField::Grade07,
        NumericField::Grade08,
        NumericField::Grade09,
        NumericField::Grade10,
        NumericField::Grade11,
        NumericField::Grade12,
    ];

    /// Column name used in wide output.
    pub fn column_name(&self) -> &'static str {
        match self {
            NumericField::RowTotal => "row_total",
            NumericField::White => "white",
            NumericField::Black => "black",
            NumericField::Hispanic => "hispanic",
            NumericField::Asian => "asian",
            NumericField::NativeAmerican => "native_american",
            NumericField::PacificIslander => "pacific_islander",
            NumericField::Multiracial => "multiracial",
            NumericField::Male => "male",
            NumericField::Female => "female",
            NumericField::GradePk => "grade_pk",
            NumericField::GradeK => "grade_k",
            NumericField::Grade01 => "grade_01",
            NumericField::Grade02 => "grade_02",
            NumericField::Grade03 => "grade_03",
            NumericField::Grade04 => "grade_04",
            NumericField::Grade05 => "grade_05",
            NumericField::Grade06 => "grade_06",
            NumericField::Grade07 => "grade_07",
            NumericField::Grade08 => "grade_08",
            NumericField::Grade09 => "grade_09",
            NumericField::Grade10 => "grade_10",
            NumericField::Grade11 => "grade_11",
            NumericField::Grade12 => "grade_12",
        }
    }

    /// Grade level for grade fields, `None` otherwise.
    pub fn grade_level(&self) -> Option<GradeLevel> {
        NumericField::GRADES
            .iter()
            .position(|field| field == self)
            .map(|idx| GradeLevel::GRADES[idx])
    }

    /// Subgroup reported at grade level `TOTAL` for this field, if any.
    pub fn subgroup(&self) -> Option<Subgroup> {
        let subgroup = match self {
            NumericField::RowTotal => Subgroup::TotalEnrollment,
            NumericField::White => Subgroup::White,
            NumericField::Black => Subgroup::Black,
            NumericField::Hispanic => Subgroup::Hispanic,
            NumericField::Asian => Subgroup::Asian,
            NumericField::NativeAmerican => Subgroup::NativeAmerican,
            NumericField::PacificIslander => Subgroup::PacificIslander,
            NumericField::Multiracial => Subgroup::Multiracial,
            NumericField::Male => Subgroup::Male,
            NumericField::Female => Subgroup::Female,
            _ => return None,
        };
        Some(subgroup)
    }

    /// Inverse of [`NumericField::subgroup`].
    pub fn for_subgroup(subgroup: Subgroup) -> NumericField {
        match subgroup {
            Subgroup::TotalEnrollment => NumericField::RowTotal,
            Subgroup::White => NumericField::White,
            Subgroup::Black => NumericField::Black,
            Subgroup::Hispanic => NumericField::Hispanic,
            Subgroup::Asian => NumericField::Asian,
            Subgroup::NativeAmerican => NumericField::NativeAmerican,
            Subgroup::PacificIslander => NumericField::PacificIslander,
            Subgroup::Multiracial => NumericField::Multiracial,
            Subgroup::Male => NumericField::Male,
            Subgroup::Female => NumericField::Female,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A slot of the canonical schema that a source column can be resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    DistrictId,
    SchoolId,
    DistrictName,
    SchoolName,
    Numeric(NumericField),
}

impl CanonicalField {
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::DistrictId => "district_id",
            CanonicalField::SchoolId => "school_id",
            CanonicalField::DistrictName => "district_name",
            CanonicalField::SchoolName => "school_name",
            CanonicalField::Numeric(field) => field.column_name(),
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
