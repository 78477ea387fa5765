//! Configuration for enrollment fetches.

use serde::{Deserialize, Serialize};

use crate::YearBounds;

/// First end year published in the modern (demographics-bearing) format.
pub const MODERN_START_YEAR: i32 = 2004;

/// Options controlling a fetch. The constants are fixed per release; callers
/// only choose between the full and simplified year ranges and caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    /// Supported end years and known gaps.
    pub years: YearBounds,

    /// End years before this are read with the historical adapter.
    pub modern_start_year: i32,

    /// Consult and populate the cache store.
    pub use_cache: bool,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            years: YearBounds::default(),
            modern_start_year: MODERN_START_YEAR,
            use_cache: true,
        }
    }
}

impl EnrollmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for deployments that start at the 1992 digests.
    pub fn simplified() -> Self {
        Self {
            years: YearBounds::simplified(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_years(mut self, years: YearBounds) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, enable: bool) -> Self {
        self.use_cache = enable;
        self
    }

    /// True when `end_year` is served by the historical adapter.
    pub fn is_historical(&self, end_year: i32) -> bool {
        end_year < self.modern_start_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_cutoff() {
        let config = EnrollmentConfig::default();
        assert!(config.is_historical(2003));
        assert!(!config.is_historical(2004));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "years": {"min_year": 1992, "max_year": 2026, "gaps": [1998]},
            "modern_start_year": 2004,
            "use_cache": false
        }"#;
        let config: EnrollmentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.years.gaps, vec![1998]);
        assert!(!config.use_cache);
    }
}
