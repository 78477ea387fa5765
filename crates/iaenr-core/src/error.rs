//! Error types for the enrollment pipeline.

use iaenr_model::YearValidationError;
use thiserror::Error;

/// Errors surfaced by the pipeline entry points.
///
/// Source and cache failures are recovered inside the pipeline and never
/// appear here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnrollmentError {
    /// Requested year is outside the supported range or a known gap.
    #[error(transparent)]
    Validation(#[from] YearValidationError),
}

pub type Result<T> = std::result::Result<T, EnrollmentError>;
