//! Property tests for cell normalization.

use iaenr_normalization::{normalize, standardize_district_id};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_never_yields_unusable_numbers(cell in ".*") {
        if let Some(value) = normalize(Some(&cell)) {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn normalize_reads_formatted_counts(count in 0u32..10_000_000) {
        let mut formatted = String::new();
        let digits = count.to_string();
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                formatted.push(',');
            }
            formatted.push(ch);
        }
        prop_assert_eq!(normalize(Some(&formatted)), Some(f64::from(count)));
    }

    #[test]
    fn suppressed_ranges_are_missing(bound in 1u32..1000) {
        let cell = format!("<{bound}");
        prop_assert_eq!(normalize(Some(&cell)), None);
    }

    #[test]
    fn district_ids_are_four_digits_or_missing(raw in "[0-9]{0,6}") {
        match standardize_district_id(Some(&raw)) {
            Some(id) => {
                prop_assert_eq!(id.as_str().len(), 4);
                prop_assert!(raw.len() <= 4 && !raw.is_empty());
                prop_assert!(id.as_str().ends_with(&raw));
            }
            None => prop_assert!(raw.is_empty() || raw.len() > 4),
        }
    }
}
