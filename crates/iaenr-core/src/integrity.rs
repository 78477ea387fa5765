//! Post-hoc consistency checks over fetched tables.
//!
//! Nothing here runs inside the pipeline. Callers who want to vet a table
//! run [`audit`] or [`audit_tidy`] and decide what to do with the findings.

use std::collections::BTreeMap;
use std::fmt;

use iaenr_model::{
    CanonicalTidyRow, CanonicalWideRow, DistrictId, EntityType, GradeLevel, NumericField,
    Subgroup,
};
use thiserror::Error;

/// Slack allowed when comparing counts that went through rounding upstream.
pub const ROUNDING_TOLERANCE: f64 = 1.0;

/// Slack for comparing sums of the same values.
const SUM_EPSILON: f64 = 1e-6;

/// Which entity an anomaly was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub end_year: i32,
    pub entity_type: EntityType,
    pub district_id: Option<DistrictId>,
    pub school_id: Option<String>,
}

impl EntityRef {
    fn of_wide(row: &CanonicalWideRow) -> Self {
        Self {
            end_year: row.end_year,
            entity_type: row.entity_type,
            district_id: row.district_id.clone(),
            school_id: row.school_id.clone(),
        }
    }

    fn of_tidy(row: &CanonicalTidyRow) -> Self {
        Self {
            end_year: row.end_year,
            entity_type: row.entity_type,
            district_id: row.district_id.clone(),
            school_id: row.school_id.clone(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity_type, self.end_year)?;
        if let Some(id) = &self.district_id {
            write!(f, " district {id}")?;
        }
        if let Some(id) = &self.school_id {
            write!(f, " school {id}")?;
        }
        Ok(())
    }
}

/// A data-quality finding. Anomalies describe the data; they are not failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrityAnomaly {
    #[error("{end_year}: state {field} is {state:?} but districts sum to {districts:?}")]
    StateTotalMismatch {
        end_year: i32,
        field: NumericField,
        state: Option<f64>,
        districts: Option<f64>,
    },

    #[error("{end_year}: expected one state row, found {count}")]
    StateRowCount { end_year: i32, count: usize },

    #[error("{entity}: {field} is {value}")]
    InvalidValue {
        entity: EntityRef,
        field: NumericField,
        value: f64,
    },

    #[error("{entity}: male {male} + female {female} differs from total {total}")]
    GenderMismatch {
        entity: EntityRef,
        male: f64,
        female: f64,
        total: f64,
    },

    #[error("{entity}: {field} {value} exceeds total {total}")]
    ExceedsTotal {
        entity: EntityRef,
        field: NumericField,
        value: f64,
        total: f64,
    },

    #[error("{entity}: pct {pct} for {subgroup} at {grade_level} is outside [0, 1]")]
    PctOutOfRange {
        entity: EntityRef,
        grade_level: GradeLevel,
        subgroup: Subgroup,
        pct: f64,
    },
}

/// Checks wide rows for per-entity consistency and, per year, that the state
/// row matches the sum of the district rows.
pub fn audit(rows: &[CanonicalWideRow]) -> Vec<IntegrityAnomaly> {
    let mut anomalies = Vec::new();
    for row in rows {
        audit_entity(row, &mut anomalies);
    }

    let mut years: BTreeMap<i32, (Vec<&CanonicalWideRow>, Vec<&CanonicalWideRow>)> =
        BTreeMap::new();
    for row in rows {
        let (states, districts) = years.entry(row.end_year).or_default();
        match row.entity_type {
            EntityType::State => states.push(row),
            EntityType::District => districts.push(row),
            EntityType::School => {}
        }
    }
    for (end_year, (states, districts)) in years {
        let [state] = states.as_slice() else {
            anomalies.push(IntegrityAnomaly::StateRowCount {
                end_year,
                count: states.len(),
            });
            continue;
        };
        for field in NumericField::ALL {
            // missing district values count as zero once any district exists
            let sum = (!districts.is_empty())
                .then(|| districts.iter().filter_map(|row| row.get(field)).sum::<f64>());
            let consistent = match (state.get(field), sum) {
                (None, None) => true,
                (Some(state), Some(sum)) => (state - sum).abs() <= SUM_EPSILON,
                _ => false,
            };
            if !consistent {
                anomalies.push(IntegrityAnomaly::StateTotalMismatch {
                    end_year,
                    field,
                    state: state.get(field),
                    districts: sum,
                });
            }
        }
    }
    anomalies
}

fn audit_entity(row: &CanonicalWideRow, anomalies: &mut Vec<IntegrityAnomaly>) {
    for field in NumericField::ALL {
        if let Some(value) = row.get(field)
            && (!value.is_finite() || value < 0.0)
        {
            anomalies.push(IntegrityAnomaly::InvalidValue {
                entity: EntityRef::of_wide(row),
                field,
                value,
            });
        }
    }

    let Some(total) = row.row_total else {
        return;
    };
    if let (Some(male), Some(female)) = (row.male, row.female)
        && (male + female - total).abs() > ROUNDING_TOLERANCE
    {
        anomalies.push(IntegrityAnomaly::GenderMismatch {
            entity: EntityRef::of_wide(row),
            male,
            female,
            total,
        });
    }
    for field in NumericField::RACE_ETHNICITY
        .iter()
        .chain(&NumericField::GENDER)
        .chain(&NumericField::GRADES)
    {
        if let Some(value) = row.get(*field)
            && value > total + ROUNDING_TOLERANCE
        {
            anomalies.push(IntegrityAnomaly::ExceedsTotal {
                entity: EntityRef::of_wide(row),
                field: *field,
                value,
                total,
            });
        }
    }
}

/// Checks that every present `pct` lies in `[0, 1]`.
pub fn audit_tidy(rows: &[CanonicalTidyRow]) -> Vec<IntegrityAnomaly> {
    rows.iter()
        .filter_map(|row| {
            let pct = row.pct?;
            (!(0.0..=1.0).contains(&pct)).then(|| IntegrityAnomaly::PctOutOfRange {
                entity: EntityRef::of_tidy(row),
                grade_level: row.grade_level,
                subgroup: row.subgroup,
                pct,
            })
        })
        .collect()
}
