//! Iowa enrollment pipeline.
//!
//! Reconciles the state's shifting enrollment file layouts into one schema:
//!
//! - **Level processing**: [`process`] turns a modern district or school table
//!   into canonical wide rows
//! - **Historical adapter**: [`process_historical`] does the same for the
//!   pre-2004 grade-only extracts, one era-specific header map at a time
//! - **Aggregation**: [`aggregate_state`] derives the single State row
//! - **Pipeline**: [`fetch_enr`] and [`fetch_enr_multi`] tie these to a
//!   [`SourceFetcher`](iaenr_model::SourceFetcher) and a [`CacheStore`]
//! - **Integrity**: [`integrity::audit`] reports anomalies without failing
//!
//! # Example
//!
//! ```ignore
//! use iaenr_core::{InMemoryCacheStore, fetch_enr};
//! use iaenr_ingest::CsvDirectorySource;
//! use iaenr_model::EnrollmentConfig;
//!
//! let source = CsvDirectorySource::new("data/enrollment");
//! let cache = InMemoryCacheStore::new();
//! let table = fetch_enr(&source, &cache, &EnrollmentConfig::default(), 2024, true)?;
//! ```

mod aggregate;
mod cache;
mod error;
mod historical;
pub mod integrity;
mod pipeline;
mod processor;
mod table;

pub use aggregate::{STATE_NAME, aggregate_state};
pub use cache::{
    CacheEntryStatus, CacheError, CacheKey, CacheStore, CachedTable, InMemoryCacheStore, NoCache,
};
pub use error::{EnrollmentError, Result};
pub use historical::process_historical;
pub use pipeline::{fetch_enr, fetch_enr_multi, get_available_years};
pub use processor::process;
pub use table::EnrollmentTable;
