//! Cache port and an in-process implementation.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::debug;

use crate::table::EnrollmentTable;

/// Identifies one cached output: a year in wide or tidy form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey {
    pub end_year: i32,
    pub tidy: bool,
}

impl CacheKey {
    pub fn new(end_year: i32, tidy: bool) -> Self {
        Self { end_year, tidy }
    }
}

/// What a cache stores: the final output of one fetch.
pub type CachedTable = EnrollmentTable;

/// Cache backend failure. The pipeline treats these as misses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Persistence for finished tables, keyed by year and shape.
pub trait CacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<CachedTable>, CacheError>;
    fn put(&self, key: CacheKey, table: CachedTable) -> Result<(), CacheError>;
}

impl<C: CacheStore + ?Sized> CacheStore for &C {
    fn get(&self, key: &CacheKey) -> Result<Option<CachedTable>, CacheError> {
        (**self).get(key)
    }

    fn put(&self, key: CacheKey, table: CachedTable) -> Result<(), CacheError> {
        (**self).put(key, table)
    }
}

/// A store that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CacheStore for NoCache {
    fn get(&self, _key: &CacheKey) -> Result<Option<CachedTable>, CacheError> {
        Ok(None)
    }

    fn put(&self, _key: CacheKey, _table: CachedTable) -> Result<(), CacheError> {
        Ok(())
    }
}

struct CacheEntry {
    table: CachedTable,
    stored_at: DateTime<Utc>,
}

/// One line of [`InMemoryCacheStore::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntryStatus {
    pub key: CacheKey,
    pub rows: usize,
    pub stored_at: DateTime<Utc>,
    pub age: Duration,
    pub stale: bool,
}

/// Thread-safe in-process cache with an optional maximum entry age.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: Mutex<BTreeMap<CacheKey, CacheEntry>>,
    max_age: Option<Duration>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries older than `max_age` read as misses.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<CacheKey, CacheEntry>>, CacheError> {
        self.entries.lock().map_err(|_| CacheError::Unavailable {
            reason: "cache lock poisoned".to_string(),
        })
    }

    fn is_stale(&self, age: Duration) -> bool {
        self.max_age.is_some_and(|max_age| age > max_age)
    }

    /// Every entry with its age, in key order.
    pub fn status(&self) -> Result<Vec<CacheEntryStatus>, CacheError> {
        let now = Utc::now();
        let entries = self.lock()?;
        Ok(entries
            .iter()
            .map(|(key, entry)| {
                let age = now.signed_duration_since(entry.stored_at);
                CacheEntryStatus {
                    key: *key,
                    rows: entry.table.len(),
                    stored_at: entry.stored_at,
                    age,
                    stale: self.is_stale(age),
                }
            })
            .collect())
    }

    /// Drops entries for `end_year`, or everything when `None`. Returns the
    /// number of entries removed.
    pub fn clear(&self, end_year: Option<i32>) -> Result<usize, CacheError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        match end_year {
            Some(year) => entries.retain(|key, _| key.end_year != year),
            None => entries.clear(),
        }
        let removed = before - entries.len();
        debug!(?end_year, removed, "cleared cache entries");
        Ok(removed)
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<CachedTable>, CacheError> {
        let entries = self.lock()?;
        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };
        let age = Utc::now().signed_duration_since(entry.stored_at);
        if self.is_stale(age) {
            debug!(
                end_year = key.end_year,
                tidy = key.tidy,
                age_secs = age.num_seconds(),
                "cache entry stale"
            );
            return Ok(None);
        }
        Ok(Some(entry.table.clone()))
    }

    fn put(&self, key: CacheKey, table: CachedTable) -> Result<(), CacheError> {
        let mut entries = self.lock()?;
        entries.insert(
            key,
            CacheEntry {
                table,
                stored_at: Utc::now(),
            },
        );
        Ok(())
    }
}
