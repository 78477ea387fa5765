//! Supported end-year range and historical gaps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest end year available from the historical digests.
pub const FULL_MIN_YEAR: i32 = 1947;
/// Earliest end year in deployments that only carry the digest and modern files.
pub const SIMPLIFIED_MIN_YEAR: i32 = 1992;
/// Latest published end year. Bumped once a year when new files appear.
pub const MAX_YEAR: i32 = 2026;

/// Nearest known gap years on either side of a requested year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestGaps {
    pub below: Option<i32>,
    pub above: Option<i32>,
}

/// A requested end year that cannot be served.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum YearValidationError {
    #[error("end year {year} is outside the supported range {min_year}-{max_year}")]
    OutOfRange {
        year: i32,
        min_year: i32,
        max_year: i32,
        nearest_gaps: NearestGaps,
    },
    #[error("end year {year} is a known gap in the source data (supported range {min_year}-{max_year})")]
    KnownGap {
        year: i32,
        min_year: i32,
        max_year: i32,
        nearest_gaps: NearestGaps,
    },
}

/// Inclusive year range plus years inside it with no published data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min_year: i32,
    pub max_year: i32,
    /// Sorted, deduplicated.
    pub gaps: Vec<i32>,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self::full()
    }
}

impl YearBounds {
    pub fn full() -> Self {
        Self {
            min_year: FULL_MIN_YEAR,
            max_year: MAX_YEAR,
            gaps: Vec::new(),
        }
    }

    pub fn simplified() -> Self {
        Self {
            min_year: SIMPLIFIED_MIN_YEAR,
            max_year: MAX_YEAR,
            gaps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_gaps(mut self, gaps: impl IntoIterator<Item = i32>) -> Self {
        self.gaps.extend(gaps);
        self.gaps.sort_unstable();
        self.gaps.dedup();
        self
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year) && !self.is_gap(year)
    }

    pub fn is_gap(&self, year: i32) -> bool {
        self.gaps.binary_search(&year).is_ok()
    }

    /// Fails fast when `year` is out of range or inside a known gap.
    pub fn validate(&self, year: i32) -> Result<(), YearValidationError> {
        let nearest_gaps = self.nearest_gaps(year);
        if !(self.min_year..=self.max_year).contains(&year) {
            return Err(YearValidationError::OutOfRange {
                year,
                min_year: self.min_year,
                max_year: self.max_year,
                nearest_gaps,
            });
        }
        if self.is_gap(year) {
            return Err(YearValidationError::KnownGap {
                year,
                min_year: self.min_year,
                max_year: self.max_year,
                nearest_gaps,
            });
        }
        Ok(())
    }

    fn nearest_gaps(&self, year: i32) -> NearestGaps {
        NearestGaps {
            below: self.gaps.iter().rev().find(|gap| **gap < year).copied(),
            above: self.gaps.iter().find(|gap| **gap > year).copied(),
        }
    }

    pub fn available(&self) -> AvailableYears {
        AvailableYears {
            min_year: self.min_year,
            max_year: self.max_year,
            gaps: self.gaps.clone(),
        }
    }
}

/// Summary of the years a deployment can serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableYears {
    pub min_year: i32,
    pub max_year: i32,
    pub gaps: Vec<i32>,
}

impl AvailableYears {
    /// Every servable year in ascending order.
    pub fn years(&self) -> Vec<i32> {
        (self.min_year..=self.max_year)
            .filter(|year| self.gaps.binary_search(year).is_err())
            .collect()
    }
}
