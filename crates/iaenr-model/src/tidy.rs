use serde::{Deserialize, Serialize};

use crate::{CanonicalWideRow, DistrictId, EntityType, GradeLevel, Subgroup};

/// One (entity, grade level, subgroup) observation in long form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTidyRow {
    pub end_year: i32,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub district_id: Option<DistrictId>,
    pub school_id: Option<String>,
    pub district_name: Option<String>,
    pub school_name: Option<String>,
    pub is_state: bool,
    pub is_district: bool,
    pub is_school: bool,
    pub grade_level: GradeLevel,
    pub subgroup: Subgroup,
    pub n_students: Option<f64>,
    /// Share of the entity's total; `None` when the denominator is missing or zero.
    pub pct: Option<f64>,
}

impl CanonicalTidyRow {
    /// Carries the identity of `entity` into a new observation.
    pub fn for_entity(
        entity: &CanonicalWideRow,
        grade_level: GradeLevel,
        subgroup: Subgroup,
        n_students: Option<f64>,
        pct: Option<f64>,
    ) -> Self {
        Self {
            end_year: entity.end_year,
            entity_type: entity.entity_type,
            district_id: entity.district_id.clone(),
            school_id: entity.school_id.clone(),
            district_name: entity.district_name.clone(),
            school_name: entity.school_name.clone(),
            is_state: entity.entity_type == EntityType::State,
            is_district: entity.entity_type == EntityType::District,
            is_school: entity.entity_type == EntityType::School,
            grade_level,
            subgroup,
            n_students,
            pct,
        }
    }

    /// Identity key of the entity this row belongs to.
    pub fn entity_key(&self) -> (i32, EntityType, Option<&DistrictId>, Option<&str>) {
        (
            self.end_year,
            self.entity_type,
            self.district_id.as_ref(),
            self.school_id.as_deref(),
        )
    }
}
