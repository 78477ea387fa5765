//! Canonical data model for Iowa enrollment tables.
//!
//! Every crate in the workspace speaks in terms of these types:
//! - [`RawTable`]: header-named string cells as delivered by a source
//! - [`CanonicalWideRow`]: one row per entity (state, district, school) per year
//! - [`CanonicalTidyRow`]: one row per (entity, grade level, subgroup)
//!
//! The crate also carries the fixed year configuration ([`YearBounds`]) and the
//! [`SourceFetcher`] port that ingestion backends implement.

pub mod enums;
pub mod error;
pub mod fields;
pub mod ids;
pub mod options;
pub mod raw;
pub mod source;
pub mod tidy;
pub mod wide;
pub mod years;

pub use enums::{EntityType, GradeLevel, Level, Subgroup};
pub use error::{ModelError, Result};
pub use fields::{CanonicalField, NumericField};
pub use ids::DistrictId;
pub use options::EnrollmentConfig;
pub use raw::RawTable;
pub use source::{FetchError, SourceFetcher};
pub use tidy::CanonicalTidyRow;
pub use wide::CanonicalWideRow;
pub use years::{AvailableYears, YearBounds, YearValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_row_serializes() {
        let mut row = CanonicalWideRow::new(2024, EntityType::District);
        row.district_id = Some(DistrictId::new("0009").unwrap());
        row.row_total = Some(500.0);

        let json = serde_json::to_string(&row).expect("serialize row");
        let round: CanonicalWideRow = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
    }
}
