//! Fetch entry points: validate, consult the cache, fetch, process, combine.

use iaenr_model::{
    AvailableYears, CanonicalWideRow, EnrollmentConfig, Level, RawTable, SourceFetcher,
};
use iaenr_transform::tidy;
use tracing::{debug, info, instrument, warn};

use crate::aggregate::aggregate_state;
use crate::cache::{CacheKey, CacheStore};
use crate::error::Result;
use crate::historical::process_historical;
use crate::processor::process;
use crate::table::EnrollmentTable;

/// Years the configuration can serve.
pub fn get_available_years(config: &EnrollmentConfig) -> AvailableYears {
    config.years.available()
}

/// Enrollment for one end year: the state row, then districts, then schools.
///
/// The year is validated before anything is fetched. A source failure for
/// either level is logged and treated as "no rows" for that level; cache
/// failures are logged and otherwise ignored.
#[instrument(skip(fetcher, cache, config))]
pub fn fetch_enr<F, C>(
    fetcher: &F,
    cache: &C,
    config: &EnrollmentConfig,
    end_year: i32,
    tidy_output: bool,
) -> Result<EnrollmentTable>
where
    F: SourceFetcher + ?Sized,
    C: CacheStore + ?Sized,
{
    config.years.validate(end_year)?;

    let key = CacheKey::new(end_year, tidy_output);
    if config.use_cache {
        match cache.get(&key) {
            Ok(Some(table)) if table.is_tidy() == tidy_output => {
                debug!(rows = table.len(), "cache hit");
                return Ok(table);
            }
            Ok(Some(_)) => warn!("cached table has the wrong shape; refetching"),
            Ok(None) => debug!("cache miss"),
            Err(err) => warn!(error = %err, "cache read failed; refetching"),
        }
    }

    let wide = build_wide(fetcher, config, end_year);
    let table = if tidy_output {
        EnrollmentTable::Tidy(tidy(&wide))
    } else {
        EnrollmentTable::Wide(wide)
    };

    if config.use_cache
        && let Err(err) = cache.put(key, table.clone())
    {
        warn!(error = %err, "cache write failed");
    }
    info!(rows = table.len(), "fetched enrollment");
    Ok(table)
}

/// Enrollment for several end years, concatenated in the order given.
///
/// Every year is validated before the first fetch, so one bad year fails the
/// whole request without doing any work.
#[instrument(skip(fetcher, cache, config))]
pub fn fetch_enr_multi<F, C>(
    fetcher: &F,
    cache: &C,
    config: &EnrollmentConfig,
    end_years: &[i32],
    tidy_output: bool,
) -> Result<EnrollmentTable>
where
    F: SourceFetcher + ?Sized,
    C: CacheStore + ?Sized,
{
    for year in end_years {
        config.years.validate(*year)?;
    }
    let mut combined = EnrollmentTable::empty(tidy_output);
    for year in end_years {
        let table = fetch_enr(fetcher, cache, config, *year, tidy_output)?;
        if combined.append(table).is_err() {
            warn!(end_year = *year, "dropping table of unexpected shape");
        }
    }
    Ok(combined)
}

fn build_wide<F>(fetcher: &F, config: &EnrollmentConfig, end_year: i32) -> Vec<CanonicalWideRow>
where
    F: SourceFetcher + ?Sized,
{
    let (districts, schools) = if config.is_historical(end_year) {
        let raw = fetch_or_empty(fetcher, end_year, Level::District);
        (process_historical(raw.as_ref(), end_year), Vec::new())
    } else {
        let district_raw = fetch_or_empty(fetcher, end_year, Level::District);
        let school_raw = fetch_or_empty(fetcher, end_year, Level::School);
        (
            process(district_raw.as_ref(), end_year, Level::District),
            process(school_raw.as_ref(), end_year, Level::School),
        )
    };
    debug!(
        end_year,
        districts = districts.len(),
        schools = schools.len(),
        "processed levels"
    );

    let mut rows = Vec::with_capacity(1 + districts.len() + schools.len());
    rows.push(aggregate_state(&districts, end_year));
    rows.extend(districts);
    rows.extend(schools);
    rows
}

fn fetch_or_empty<F>(fetcher: &F, end_year: i32, level: Level) -> Option<RawTable>
where
    F: SourceFetcher + ?Sized,
{
    match fetcher.fetch(end_year, level) {
        Ok(raw) => Some(raw),
        Err(err) => {
            warn!(end_year, %level, error = %err, "source unavailable; continuing without it");
            None
        }
    }
}
