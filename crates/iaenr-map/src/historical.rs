//! Header maps for the pre-2004 grade-only extracts.
//!
//! Each era of historical files names its columns differently, carries a
//! different number of title rows above the header, and packs several school
//! years into one table behind a year-label column.

use std::sync::LazyLock;

use regex::Regex;

use iaenr_model::{CanonicalField, NumericField};

use crate::resolver::{FieldMap, FieldPatterns, compile_patterns};

/// One family of historical files sharing a header layout.
#[derive(Debug)]
pub struct HistoricalEra {
    pub name: &'static str,
    pub first_year: i32,
    pub last_year: i32,
    /// Title rows above the header row in the source sheet.
    pub skip_rows: usize,
    /// Candidates for the column holding "1995-96" style year labels.
    pub year_label: Vec<Regex>,
    /// District identity, total and grade fields. No school, demographic or
    /// gender fields exist in these files.
    pub fields: FieldMap,
}

impl HistoricalEra {
    pub fn covers(&self, end_year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&end_year)
    }
}

struct EraLayout {
    name: &'static str,
    first_year: i32,
    last_year: i32,
    skip_rows: usize,
    year_label: &'static [&'static str],
    district_id: &'static [&'static str],
    district_name: &'static [&'static str],
    total: &'static [&'static str],
    grade_pk: &'static [&'static str],
    grade_k: &'static [&'static str],
    /// `{n}` expands to the grade number, `{nn}` to the zero-padded number.
    grades: &'static [&'static str],
}

const LAYOUTS: &[EraLayout] = &[
    EraLayout {
        name: "census",
        first_year: 1947,
        last_year: 1985,
        skip_rows: 2,
        year_label: &[r"^YEAR$"],
        district_id: &[r"^DIST(RICT)?[ _]?(NO\.?|NUMBER)$", r"^DIST$"],
        district_name: &[r"^(DISTRICT[ _])?NAME$"],
        total: &[r"^TOTAL[ _]?K[ _-]?12$", r"^TOTAL$"],
        grade_pk: &[r"^PK$"],
        grade_k: &[r"^(K|KG|KDG)$"],
        grades: &[r"^GR[ _]?{n}$", r"^{n}$"],
    },
    EraLayout {
        name: "digest",
        first_year: 1986,
        last_year: 1999,
        skip_rows: 1,
        year_label: &[r"^SCHOOL[ _]YEAR$", r"^YEAR$"],
        district_id: &[r"^DIST(RICT)?[ _]?(NO\.?|NUMBER|CODE)$", r"^DIST(RICT)?$"],
        district_name: &[r"^DIST(RICT)?[ _]NAME$", r"^NAME$"],
        total: &[r"^TOTAL[ _]ENROLLMENT$", r"^TOTAL$"],
        grade_pk: &[r"^(PK|PRE[ _-]?K)$"],
        grade_k: &[r"^(K|KG)$"],
        grades: &[r"^(GRADE|GR)[ _]?{n}$", r"^G{nn}$"],
    },
    EraLayout {
        name: "transition",
        first_year: 2000,
        last_year: 2003,
        skip_rows: 0,
        year_label: &[r"^SCHOOL_YEAR$", r"^YEAR$"],
        district_id: &[r"^DISTRICT_CODE$", r"^DISTRICT$"],
        district_name: &[r"^DISTRICT_NAME$"],
        total: &[r"^TOTAL_K12$", r"^TOTAL$"],
        grade_pk: &[r"^GRADE_PK$", r"^PK$"],
        grade_k: &[r"^GRADE_K$", r"^K$"],
        grades: &[r"^GRADE_{nn}$", r"^GRADE_{n}$"],
    },
];

static HISTORICAL_ERAS: LazyLock<Vec<HistoricalEra>> =
    LazyLock::new(|| LAYOUTS.iter().map(build_era).collect());

/// All historical eras, oldest first.
pub fn historical_eras() -> &'static [HistoricalEra] {
    &HISTORICAL_ERAS
}

/// The era whose header map applies to `end_year`, if any.
pub fn era_for_year(end_year: i32) -> Option<&'static HistoricalEra> {
    historical_eras().iter().find(|era| era.covers(end_year))
}

/// True if `label` names the school year ending in `end_year`, either as
/// "1995-96" or "1995-1996".
pub fn matches_year_label(label: &str, end_year: i32) -> bool {
    let label = label.trim();
    let start = end_year - 1;
    label == format!("{start}-{:02}", end_year.rem_euclid(100)) || label == format!("{start}-{end_year}")
}

fn build_era(layout: &EraLayout) -> HistoricalEra {
    let mut fields = vec![
        FieldPatterns::new(CanonicalField::DistrictId, layout.district_id),
        FieldPatterns::new(CanonicalField::DistrictName, layout.district_name),
        FieldPatterns::new(
            CanonicalField::Numeric(NumericField::RowTotal),
            layout.total,
        ),
        FieldPatterns::new(
            CanonicalField::Numeric(NumericField::GradePk),
            layout.grade_pk,
        ),
        FieldPatterns::new(CanonicalField::Numeric(NumericField::GradeK), layout.grade_k),
    ];
    for (field, grade) in NumericField::GRADES.iter().skip(2).zip(1u8..) {
        let patterns: Vec<String> = layout
            .grades
            .iter()
            .map(|template| {
                template
                    .replace("{nn}", &format!("{grade:02}"))
                    .replace("{n}", &grade.to_string())
            })
            .collect();
        fields.push(FieldPatterns::new(CanonicalField::Numeric(*field), &patterns));
    }
    HistoricalEra {
        name: layout.name,
        first_year: layout.first_year,
        last_year: layout.last_year,
        skip_rows: layout.skip_rows,
        year_label: compile_patterns(layout.year_label),
        fields,
    }
}
