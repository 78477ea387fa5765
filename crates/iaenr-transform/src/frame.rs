//! Polars export of canonical rows.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use iaenr_model::{CanonicalTidyRow, CanonicalWideRow, DistrictId, NumericField};

use crate::error::{Result, TransformError};

fn text_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into()
}

fn district_ids<'a>(ids: impl Iterator<Item = Option<&'a DistrictId>>) -> Vec<Option<String>> {
    ids.map(|id| id.map(|id| id.as_str().to_string())).collect()
}

/// Builds a frame with one column per canonical wide field.
///
/// Identity columns come first, then the numeric fields in canonical order
/// as nullable `f64`.
pub fn wide_to_dataframe(rows: &[CanonicalWideRow]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(6 + NumericField::ALL.len());
    let years: Vec<i32> = rows.iter().map(|r| r.end_year).collect();
    columns.push(Series::new("end_year".into(), years).into());
    columns.push(text_column(
        "type",
        rows.iter()
            .map(|r| Some(r.entity_type.as_str().to_string()))
            .collect(),
    ));
    columns.push(text_column(
        "district_id",
        district_ids(rows.iter().map(|r| r.district_id.as_ref())),
    ));
    columns.push(text_column(
        "school_id",
        rows.iter().map(|r| r.school_id.clone()).collect(),
    ));
    columns.push(text_column(
        "district_name",
        rows.iter().map(|r| r.district_name.clone()).collect(),
    ));
    columns.push(text_column(
        "school_name",
        rows.iter().map(|r| r.school_name.clone()).collect(),
    ));
    for field in NumericField::ALL {
        let values: Vec<Option<f64>> = rows.iter().map(|r| r.get(field)).collect();
        columns.push(Series::new(field.column_name().into(), values).into());
    }
    DataFrame::new(columns).map_err(|source| TransformError::Frame {
        table: "wide",
        source,
    })
}

/// Builds a long-form frame, one row per tidy observation.
pub fn tidy_to_dataframe(rows: &[CanonicalTidyRow]) -> Result<DataFrame> {
    let flag = |name: &str, pick: fn(&CanonicalTidyRow) -> bool| -> Column {
        Series::new(name.into(), rows.iter().map(pick).collect::<Vec<bool>>()).into()
    };
    let years: Vec<i32> = rows.iter().map(|r| r.end_year).collect();
    let columns: Vec<Column> = vec![
        Series::new("end_year".into(), years).into(),
        text_column(
            "type",
            rows.iter()
                .map(|r| Some(r.entity_type.as_str().to_string()))
                .collect(),
        ),
        text_column(
            "district_id",
            district_ids(rows.iter().map(|r| r.district_id.as_ref())),
        ),
        text_column("school_id", rows.iter().map(|r| r.school_id.clone()).collect()),
        text_column(
            "district_name",
            rows.iter().map(|r| r.district_name.clone()).collect(),
        ),
        text_column(
            "school_name",
            rows.iter().map(|r| r.school_name.clone()).collect(),
        ),
        flag("is_state", |r| r.is_state),
        flag("is_district", |r| r.is_district),
        flag("is_school", |r| r.is_school),
        text_column(
            "grade_level",
            rows.iter()
                .map(|r| Some(r.grade_level.as_str().to_string()))
                .collect(),
        ),
        text_column(
            "subgroup",
            rows.iter()
                .map(|r| Some(r.subgroup.as_str().to_string()))
                .collect(),
        ),
        Series::new(
            "n_students".into(),
            rows.iter().map(|r| r.n_students).collect::<Vec<_>>(),
        )
        .into(),
        Series::new("pct".into(), rows.iter().map(|r| r.pct).collect::<Vec<_>>()).into(),
    ];
    DataFrame::new(columns).map_err(|source| TransformError::Frame {
        table: "tidy",
        source,
    })
}
