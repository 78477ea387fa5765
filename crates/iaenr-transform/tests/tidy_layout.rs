use iaenr_model::{CanonicalWideRow, DistrictId, EntityType, NumericField};
use iaenr_transform::{grade_band_aggregates, tidy};

fn render(rows: &[iaenr_model::CanonicalTidyRow]) -> String {
    rows.iter()
        .map(|row| {
            let n = row.n_students.map_or("-".to_string(), |n| n.to_string());
            let pct = row.pct.map_or("-".to_string(), |p| format!("{p:.3}"));
            format!(
                "{:<6} {:<16} {n:>5} {pct}",
                row.grade_level.as_str(),
                row.subgroup.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn district_tidy_layout() {
    let mut wide = CanonicalWideRow::new(2024, EntityType::District)
        .with(NumericField::RowTotal, Some(400.0))
        .with(NumericField::White, Some(300.0))
        .with(NumericField::Hispanic, Some(60.0))
        .with(NumericField::Male, Some(210.0))
        .with(NumericField::Female, Some(190.0))
        .with(NumericField::GradeK, Some(30.0))
        .with(NumericField::Grade12, Some(24.0));
    wide.district_id = Some(DistrictId::new("0441").unwrap());

    let rows = tidy(&[wide]);
    assert!(
        rows.iter()
            .all(|row| row.district_id.as_ref().map(DistrictId::as_str) == Some("0441"))
    );
    insta::assert_snapshot!(render(&rows), @r"
    TOTAL  total_enrollment   400 1.000
    TOTAL  white              300 0.750
    TOTAL  black                - -
    TOTAL  hispanic            60 0.150
    TOTAL  asian                - -
    TOTAL  native_american      - -
    TOTAL  pacific_islander     - -
    TOTAL  multiracial          - -
    TOTAL  male               210 0.525
    TOTAL  female             190 0.475
    PK     total_enrollment     - -
    K      total_enrollment    30 0.075
    01     total_enrollment     - -
    02     total_enrollment     - -
    03     total_enrollment     - -
    04     total_enrollment     - -
    05     total_enrollment     - -
    06     total_enrollment     - -
    07     total_enrollment     - -
    08     total_enrollment     - -
    09     total_enrollment     - -
    10     total_enrollment     - -
    11     total_enrollment     - -
    12     total_enrollment    24 0.060
    ");

    let bands = grade_band_aggregates(&rows);
    insta::assert_snapshot!(render(&bands), @r"
    K8     total_enrollment    30 0.075
    HS     total_enrollment    24 0.060
    K12    total_enrollment    54 0.135
    ");
}
