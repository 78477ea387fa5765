//! Column resolution for enrollment tables.
//!
//! Source files rename their columns from year to year. This crate holds a
//! fixed, ordered table of candidate patterns per canonical field and a pure
//! resolver that picks at most one source column per field:
//!
//! - patterns are anchored and case-insensitive
//! - patterns are tried in declaration order; the first one matching any
//!   header wins
//! - among headers matching that pattern, the leftmost wins
//!
//! Precedence, not best match: `^TOTAL_PK12$` is listed before `^TOTAL$` so
//! the looser pattern never captures a column the stricter one should have.
//!
//! # Example
//!
//! ```
//! use iaenr_map::{compile_patterns, resolve};
//!
//! let headers = vec!["TOTAL_PK12".to_string(), "TOTAL".to_string()];
//! let patterns = compile_patterns(&["^TOTAL_PK12$", "^TOTAL$"]);
//! assert_eq!(resolve(&headers, &patterns), Some("TOTAL_PK12"));
//! ```

mod historical;
mod patterns;
mod resolver;

pub use historical::{HistoricalEra, era_for_year, historical_eras, matches_year_label};
pub use patterns::modern_field_map;
pub use resolver::{
    ColumnResolution, FieldMap, FieldPatterns, compile_patterns, resolve, resolve_fields,
    resolve_index,
};
