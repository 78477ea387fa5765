//! Local CSV ingestion for enrollment tables.
//!
//! The state publishes spreadsheets; decoding those is someone else's job.
//! This crate reads their CSV exports into [`RawTable`](iaenr_model::RawTable)s:
//!
//! - **Header detection**: title rows above the header are skipped by looking
//!   for a district identifier column, falling back to the fifth row
//! - **Size check**: files too small to hold a real table are rejected
//! - **Directory source**: [`CsvDirectorySource`] implements
//!   [`SourceFetcher`](iaenr_model::SourceFetcher) over `{level}_{end_year}.csv`
//!
//! # Example
//!
//! ```ignore
//! use iaenr_ingest::CsvDirectorySource;
//! use iaenr_model::{Level, SourceFetcher};
//!
//! let source = CsvDirectorySource::new("data/enrollment");
//! let table = source.fetch(2024, Level::District)?;
//! ```

mod error;
mod header;
mod reader;
mod source;

pub use error::{IngestError, Result};
pub use header::{FALLBACK_HEADER_ROW, HeaderRow, detect_header_row, normalize_header};
pub use reader::{DEFAULT_MIN_SOURCE_BYTES, check_file_size, read_raw_table};
pub use source::CsvDirectorySource;
