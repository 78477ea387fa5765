use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to build {table} frame: {source}")]
    Frame {
        table: &'static str,
        #[source]
        source: PolarsError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
