//! Directory-backed [`SourceFetcher`].

use std::path::{Path, PathBuf};

use iaenr_map::era_for_year;
use iaenr_model::{FetchError, Level, RawTable, SourceFetcher};
use tracing::debug;

use crate::error::IngestError;
use crate::header::HeaderRow;
use crate::reader::{DEFAULT_MIN_SOURCE_BYTES, check_file_size, read_raw_table};

/// Serves tables from CSV exports named `{level}_{end_year}.csv`, e.g.
/// `district_2024.csv` or `school_2019.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    dir: PathBuf,
    min_bytes: u64,
}

impl CsvDirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            min_bytes: DEFAULT_MIN_SOURCE_BYTES,
        }
    }

    /// Overrides the minimum plausible file size.
    pub fn with_min_bytes(mut self, min_bytes: u64) -> Self {
        self.min_bytes = min_bytes;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the table for (`end_year`, `level`) is expected at.
    pub fn path_for(&self, end_year: i32, level: Level) -> PathBuf {
        self.dir.join(format!("{level}_{end_year}.csv"))
    }

    fn header_row(end_year: i32, level: Level) -> HeaderRow {
        match (level, era_for_year(end_year)) {
            (Level::District, Some(era)) => HeaderRow::Fixed(era.skip_rows),
            _ => HeaderRow::Detect,
        }
    }
}

impl SourceFetcher for CsvDirectorySource {
    fn fetch(&self, end_year: i32, level: Level) -> Result<RawTable, FetchError> {
        let path = self.path_for(end_year, level);
        debug!(path = %path.display(), "reading local source");
        let into_fetch_error = |err: IngestError| {
            if err.is_unavailable() {
                FetchError::Download {
                    end_year,
                    level,
                    reason: err.to_string(),
                }
            } else {
                FetchError::Format {
                    end_year,
                    level,
                    reason: err.to_string(),
                }
            }
        };
        check_file_size(&path, self.min_bytes).map_err(into_fetch_error)?;
        read_raw_table(&path, Self::header_row(end_year, level)).map_err(into_fetch_error)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_fetch_modern_district() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("district_2024.csv"),
            "Iowa Certified Enrollment\n\nDISTRICT_CODE,DISTRICT_NAME,TOTAL_PK12\n9,Adair-Casey,300\n",
        )
        .unwrap();
        let source = CsvDirectorySource::new(dir.path()).with_min_bytes(1);
        let table = source.fetch(2024, Level::District).unwrap();
        assert_eq!(table.headers[0], "DISTRICT_CODE");
        assert_eq!(table.cell(0, 2), Some("300"));
    }

    #[test]
    fn test_fetch_historical_uses_era_skip_rows() {
        let dir = TempDir::new().unwrap();
        // digest era: one title row
        fs::write(
            dir.path().join("district_1996.csv"),
            "Basic Educational Data Survey\nSCHOOL YEAR,DIST,TOTAL\n1995-96,9,250\n1996-97,9,260\n",
        )
        .unwrap();
        let source = CsvDirectorySource::new(dir.path()).with_min_bytes(1);
        let table = source.fetch(1996, Level::District).unwrap();
        assert_eq!(table.headers, vec!["SCHOOL YEAR", "DIST", "TOTAL"]);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_missing_file_is_download_error() {
        let dir = TempDir::new().unwrap();
        let source = CsvDirectorySource::new(dir.path());
        let err = source.fetch(2024, Level::School).unwrap_err();
        assert!(matches!(
            err,
            FetchError::Download {
                end_year: 2024,
                level: Level::School,
                ..
            }
        ));
    }

    #[test]
    fn test_tiny_file_is_format_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("school_2024.csv"), "<html>").unwrap();
        let source = CsvDirectorySource::new(dir.path());
        assert!(matches!(
            source.fetch(2024, Level::School),
            Err(FetchError::Format { .. })
        ));
    }
}
