//! Fixed pattern table for the modern (2004+) district and school files.

use std::sync::LazyLock;

use iaenr_model::{CanonicalField, NumericField};

use crate::resolver::{FieldMap, FieldPatterns};

static MODERN_FIELD_MAP: LazyLock<FieldMap> = LazyLock::new(build_modern_field_map);

/// Field map for the modern formats, compiled once.
pub fn modern_field_map() -> &'static [FieldPatterns] {
    &MODERN_FIELD_MAP
}

fn numeric(field: NumericField, patterns: &[&str]) -> FieldPatterns {
    FieldPatterns::new(CanonicalField::Numeric(field), patterns)
}

fn build_modern_field_map() -> FieldMap {
    let mut map = vec![
        FieldPatterns::new(
            CanonicalField::DistrictId,
            &[
                r"^DISTRICT_CODE$",
                r"^DIST(RICT)?[ _]?(ID|CODE|NUMBER|NO\.?|#)$",
                r"^DIST(RICT)?$",
            ],
        ),
        FieldPatterns::new(
            CanonicalField::SchoolId,
            &[
                r"^SCHOOL_CODE$",
                r"^(SCHOOL|BUILDING|BLDG)[ _]?(ID|CODE|NUMBER|NO\.?|#)$",
                r"^(SCHOOL|BUILDING|BLDG)$",
            ],
        ),
        FieldPatterns::new(
            CanonicalField::DistrictName,
            &[r"^DISTRICT_NAME$", r"^DIST(RICT)?[ _]?NAME$"],
        ),
        FieldPatterns::new(
            CanonicalField::SchoolName,
            &[r"^SCHOOL_NAME$", r"^(SCHOOL|BUILDING|BLDG)[ _]?NAME$"],
        ),
        numeric(
            NumericField::RowTotal,
            &[
                r"^TOTAL_PK12$",
                r"^TOTAL[ _-]?(PK|PK[ _-]?12|K[ _-]?12)$",
                r"^(GRAND[ _])?TOTAL([ _]ENROLLMENT)?$",
                r"^ENROLLMENT$",
            ],
        ),
        numeric(
            NumericField::White,
            &[
                r"^TOTAL_WHITE$",
                r"^WHITE([ _]TOTAL)?$",
                r"^WHITE[ _,-]+(NOT|NON)[ _-]?HISPANIC$",
            ],
        ),
        numeric(
            NumericField::Black,
            &[
                r"^TOTAL_(BLACK|AFRICAN_AMERICAN)$",
                r"^(BLACK|AFRICAN[ _]AMERICAN)([ _]TOTAL)?$",
                r"^BLACK[ _/]+AFRICAN[ _]AMERICAN$",
            ],
        ),
        numeric(
            NumericField::Hispanic,
            &[
                r"^TOTAL_HISPANIC$",
                r"^HISPANIC([ _]TOTAL)?$",
                r"^HISPANIC[ _/]+LATINO$",
            ],
        ),
        numeric(
            NumericField::Asian,
            &[r"^TOTAL_ASIAN$", r"^ASIAN([ _]TOTAL)?$"],
        ),
        numeric(
            NumericField::NativeAmerican,
            &[
                r"^TOTAL_(AMERICAN_INDIAN|NATIVE_AMERICAN)$",
                r"^(AMERICAN[ _]INDIAN|NATIVE[ _]AMERICAN)([ _]TOTAL)?$",
                r"^AMERICAN[ _]INDIAN[ _/]+ALASKA[ _]NATIVE$",
            ],
        ),
        numeric(
            NumericField::PacificIslander,
            &[
                r"^TOTAL_(PACIFIC_ISLANDER|HAWAIIAN)$",
                r"^(NATIVE[ _])?HAWAIIAN([ _/]+(OTHER[ _])?PACIFIC[ _]ISLANDER)?$",
                r"^PACIFIC[ _]ISLANDER$",
            ],
        ),
        numeric(
            NumericField::Multiracial,
            &[
                r"^TOTAL_(MULTI_?RACE|MULTIRACIAL|TWO_OR_MORE)$",
                r"^(MULTI[ _-]?RACE|MULTI[ _-]?RACIAL|TWO[ _]OR[ _]MORE([ _]RACES)?)$",
            ],
        ),
        numeric(
            NumericField::Male,
            &[r"^TOTAL_MALE$", r"^MALES?([ _]TOTAL)?$"],
        ),
        numeric(
            NumericField::Female,
            &[r"^TOTAL_FEMALE$", r"^FEMALES?([ _]TOTAL)?$"],
        ),
        numeric(
            NumericField::GradePk,
            &[
                r"^GRADE_PK$",
                r"^(PK|PREK|PRE[ _-]K|PRE[ _-]?KINDERGARTEN)$",
            ],
        ),
        numeric(
            NumericField::GradeK,
            &[r"^GRADE_K$", r"^(K|KG|KINDERGARTEN)$"],
        ),
    ];
    map.extend(
        NumericField::GRADES
            .iter()
            .skip(2)
            .zip(1u8..)
            .map(|(field, grade)| numeric_grade(*field, grade)),
    );
    map
}

/// Grade 1-12 patterns: the underscored modern form before the loose forms.
fn numeric_grade(field: NumericField, grade: u8) -> FieldPatterns {
    let patterns = [
        format!(r"^GRADE_0?{grade}$"),
        format!(r"^(GR?|GRADE)[ _]?0?{grade}$"),
        format!(r"^0?{grade}(ST|ND|RD|TH)?([ _]GRADE)?$"),
    ];
    FieldPatterns::new(CanonicalField::Numeric(field), &patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_fields;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn covers_every_canonical_field() {
        let map = modern_field_map();
        assert_eq!(map.len(), 4 + NumericField::ALL.len());
        for field in NumericField::ALL {
            assert!(
                map.iter().any(|entry| entry.field == CanonicalField::Numeric(field)),
                "{field} missing from map"
            );
        }
    }

    #[test]
    fn resolves_modern_district_headers() {
        let resolution = resolve_fields(
            &headers(&[
                "DISTRICT_CODE",
                "DISTRICT_NAME",
                "TOTAL_PK12",
                "TOTAL_MALE",
                "TOTAL_FEMALE",
                "TOTAL",
            ]),
            modern_field_map(),
        );
        assert_eq!(resolution.column(CanonicalField::DistrictId), Some(0));
        assert_eq!(resolution.column(CanonicalField::DistrictName), Some(1));
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::RowTotal)),
            Some(2)
        );
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::Male)),
            Some(3)
        );
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::Female)),
            Some(4)
        );
        assert!(!resolution.is_resolved(CanonicalField::SchoolId));
    }

    #[test]
    fn grade_patterns_do_not_cross_match() {
        let resolution = resolve_fields(
            &headers(&["Grade 1", "Grade 10", "Grade 11", "Grade 12", "KG"]),
            modern_field_map(),
        );
        let column = |field| resolution.column(CanonicalField::Numeric(field));
        assert_eq!(column(NumericField::Grade01), Some(0));
        assert_eq!(column(NumericField::Grade10), Some(1));
        assert_eq!(column(NumericField::Grade11), Some(2));
        assert_eq!(column(NumericField::Grade12), Some(3));
        assert_eq!(column(NumericField::GradeK), Some(4));
        assert_eq!(column(NumericField::Grade02), None);
    }

    #[test]
    fn female_is_not_captured_by_male() {
        let resolution = resolve_fields(&headers(&["FEMALE", "MALE"]), modern_field_map());
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::Male)),
            Some(1)
        );
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::Female)),
            Some(0)
        );
    }
}
