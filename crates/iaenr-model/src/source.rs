//! Port for retrieving raw tables.

use thiserror::Error;

use crate::{Level, RawTable};

/// Why a source could not deliver a table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Remote resource unreachable or returned a non-success status.
    #[error("download failed for {level} {end_year}: {reason}")]
    Download {
        end_year: i32,
        level: Level,
        reason: String,
    },
    /// Payload too small to be plausible or not parseable as a table.
    #[error("unusable {level} {end_year} payload: {reason}")]
    Format {
        end_year: i32,
        level: Level,
        reason: String,
    },
}

/// Delivers the raw table for one (end year, level).
///
/// Implementations own retrieval, retries and decoding. Callers treat any
/// error as "no data for this year/level".
pub trait SourceFetcher {
    fn fetch(&self, end_year: i32, level: Level) -> Result<RawTable, FetchError>;
}

impl<F: SourceFetcher + ?Sized> SourceFetcher for &F {
    fn fetch(&self, end_year: i32, level: Level) -> Result<RawTable, FetchError> {
        (**self).fetch(end_year, level)
    }
}
