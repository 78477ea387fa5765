//! Precedence-based header resolution.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use tracing::trace;

use iaenr_model::CanonicalField;

/// Compiles anchored patterns case-insensitively.
///
/// The pattern tables are fixed at compile time, so an invalid pattern is a
/// programming error and panics.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern.as_ref())
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|err| panic!("invalid column pattern {:?}: {err}", pattern.as_ref()))
        })
        .collect()
}

/// Returns the index of the header selected by `patterns`.
///
/// Patterns are tried in order; the first pattern with any matching header
/// wins, and within it the leftmost matching header is chosen. Headers are
/// compared after trimming surrounding whitespace.
pub fn resolve_index(headers: &[String], patterns: &[Regex]) -> Option<usize> {
    patterns.iter().find_map(|pattern| {
        headers
            .iter()
            .position(|header| pattern.is_match(header.trim()))
    })
}

/// Returns the header selected by `patterns`, or `None` when nothing matches.
pub fn resolve<'h>(headers: &'h [String], patterns: &[Regex]) -> Option<&'h str> {
    resolve_index(headers, patterns).map(|idx| headers[idx].as_str())
}

/// Ordered candidate patterns for one canonical field.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    pub field: CanonicalField,
    pub patterns: Vec<Regex>,
}

impl FieldPatterns {
    pub fn new<S: AsRef<str>>(field: CanonicalField, patterns: &[S]) -> Self {
        Self {
            field,
            patterns: compile_patterns(patterns),
        }
    }
}

/// The full field-to-patterns table for one file format.
pub type FieldMap = Vec<FieldPatterns>;

/// Outcome of resolving every field of a [`FieldMap`] against one header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnResolution {
    /// Column index selected for each resolved field.
    pub columns: BTreeMap<CanonicalField, usize>,
    /// Fields with no matching column; absent from this table.
    pub unresolved: Vec<CanonicalField>,
    /// Headers no field claimed.
    pub unmapped_headers: Vec<String>,
}

impl ColumnResolution {
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }
}

/// Resolves every field in `map` against `headers`.
///
/// Fields resolve independently; an unresolved field is reported, not an
/// error.
pub fn resolve_fields(headers: &[String], map: &[FieldPatterns]) -> ColumnResolution {
    let mut resolution = ColumnResolution::default();
    for entry in map {
        match resolve_index(headers, &entry.patterns) {
            Some(idx) => {
                trace!(field = %entry.field, column = %headers[idx], "resolved column");
                resolution.columns.insert(entry.field, idx);
            }
            None => resolution.unresolved.push(entry.field),
        }
    }
    resolution.unmapped_headers = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !resolution.columns.values().any(|used| used == idx))
        .map(|(_, header)| header.clone())
        .collect();
    resolution
}

#[cfg(test)]
mod tests {
    use iaenr_model::NumericField;

    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn earlier_pattern_wins_over_earlier_column() {
        let headers = headers(&["TOTAL", "TOTAL_PK12"]);
        let patterns = compile_patterns(&["^TOTAL_PK12$", "^TOTAL$"]);
        assert_eq!(resolve(&headers, &patterns), Some("TOTAL_PK12"));
    }

    #[test]
    fn leftmost_header_wins_within_pattern() {
        let headers = headers(&["Grade 1", "GRADE1", "GR1"]);
        let patterns = compile_patterns(&["^GR(ADE)? ?1$"]);
        assert_eq!(resolve(&headers, &patterns), Some("Grade 1"));
    }

    #[test]
    fn matching_is_case_insensitive_and_anchored() {
        let headers = headers(&["total_male", "District_Code "]);
        let patterns = compile_patterns(&["^DISTRICT_CODE$"]);
        assert_eq!(resolve(&headers, &patterns), Some("District_Code "));

        let loose = compile_patterns(&["^TOTAL$"]);
        assert_eq!(resolve(&headers, &loose), None);
    }

    #[test]
    fn no_match_is_none() {
        let patterns = compile_patterns(&["^X$"]);
        assert_eq!(resolve(&[], &patterns), None);
        assert_eq!(resolve(&headers(&["A"]), &[]), None);
    }

    #[test]
    fn resolve_fields_reports_gaps_and_leftovers() {
        let map = vec![
            FieldPatterns::new(CanonicalField::DistrictId, &["^DISTRICT_CODE$"]),
            FieldPatterns::new(
                CanonicalField::Numeric(NumericField::RowTotal),
                &["^TOTAL_PK12$", "^TOTAL$"],
            ),
            FieldPatterns::new(CanonicalField::Numeric(NumericField::Male), &["^MALE$"]),
        ];
        let resolution = resolve_fields(&headers(&["DISTRICT_CODE", "TOTAL", "NOTES"]), &map);

        assert_eq!(resolution.column(CanonicalField::DistrictId), Some(0));
        assert_eq!(
            resolution.column(CanonicalField::Numeric(NumericField::RowTotal)),
            Some(1)
        );
        assert_eq!(
            resolution.unresolved,
            vec![CanonicalField::Numeric(NumericField::Male)]
        );
        assert_eq!(resolution.unmapped_headers, vec!["NOTES".to_string()]);
    }
}
