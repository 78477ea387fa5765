//! Reshaping and export of canonical enrollment rows.
//!
//! - [`tidy`]: wide rows to one row per (entity, grade level, subgroup)
//! - [`grade_band_aggregates`]: `K8`, `HS` and `K12` rollups over tidy rows
//! - [`wide_to_dataframe`] / [`tidy_to_dataframe`]: polars export
//!
//! # Example
//!
//! ```ignore
//! use iaenr_transform::{tidy, tidy_to_dataframe};
//!
//! let long = tidy(&wide_rows);
//! let df = tidy_to_dataframe(&long)?;
//! ```

mod bands;
mod error;
mod frame;
mod tidy;

pub use bands::{GRADE_BANDS, grade_band_aggregates};
pub use error::{Result, TransformError};
pub use frame::{tidy_to_dataframe, wide_to_dataframe};
pub use polars::prelude::DataFrame;
pub use tidy::{TIDY_ROWS_PER_ENTITY, share, tidy};
