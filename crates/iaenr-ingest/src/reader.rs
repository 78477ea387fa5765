//! CSV file reading with header row location.

use std::fs::File;
use std::path::Path;

use iaenr_model::RawTable;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::header::{HeaderRow, detect_header_row, normalize_header};

/// Files below this size cannot hold a header and a data row; the state's
/// download endpoint answers missing years with short error pages.
pub const DEFAULT_MIN_SOURCE_BYTES: u64 = 64;

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check that a source file exists and is at least `min_size` bytes.
pub fn check_file_size(path: &Path, min_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() < min_size {
        return Err(IngestError::TooSmall {
            path: path.to_path_buf(),
            size: metadata.len(),
            min_size,
        });
    }
    Ok(())
}

/// Reads a CSV export into a [`RawTable`].
///
/// Rows above the header are discarded, cells are trimmed and blank rows
/// below the header are dropped. A file too short to reach its header row
/// yields an empty table rather than an error.
pub fn read_raw_table(path: &Path, header: HeaderRow) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    let header_idx = match header {
        HeaderRow::Fixed(skip) => skip,
        HeaderRow::Detect => detect_header_row(&rows),
    };
    if header_idx >= rows.len() {
        debug!(
            path = %path.display(),
            header_row = header_idx,
            rows = rows.len(),
            "file ends before its header row"
        );
        return Ok(RawTable::default());
    }

    let mut rows = rows.split_off(header_idx);
    let headers: Vec<String> = rows.remove(0).iter().map(|h| normalize_header(h)).collect();
    rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));

    debug!(
        path = %path.display(),
        header_row = header_idx,
        columns = headers.len(),
        rows = rows.len(),
        "read source table"
    );
    Ok(RawTable::new(headers, rows))
}
