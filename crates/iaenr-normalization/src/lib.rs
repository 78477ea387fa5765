//! Cell-level normalization for enrollment tables.
//!
//! - [`normalize`]: raw cell to count, with suppression markers mapped to missing
//! - [`standardize_district_id`], [`standardize_school_id`], [`clean_name`]:
//!   identifier and label cleanup
//!
//! All functions are pure and never panic.

mod ids;
mod value;

pub use ids::{DISTRICT_ID_PAD, clean_name, standardize_district_id, standardize_school_id};
pub use value::{SUPPRESSION_MARKERS, is_suppressed, normalize};
