//! Name lookup over a name-sorted slice of records.
//!
//! [`find`] bisects on the full lower-case name but accepts a record as soon
//! as the query is a substring of the probed name. A query that only occurs
//! inside a name away from the bisection path is therefore missed. This is
//! the long-standing behaviour and is kept as-is; [`find_or_scan`] adds a
//! linear substring scan when the bisection misses.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};
use crate::record::RaceRecord;

/// Bisects `sorted` for the first probed record whose name contains `query`.
///
/// `sorted` must be ordered ascending by lower-case name, see
/// [`RecordStore::sorted_by_name`](crate::RecordStore::sorted_by_name).
pub fn find<'a>(sorted: &'a [RaceRecord], query: &str) -> CoreResult<&'a RaceRecord> {
    let needle = normalize_query(query)?;

    // Half-open window; `mid` matches the inclusive (low + high) / 2 probe.
    let mut low = 0usize;
    let mut high = sorted.len();
    while low < high {
        let mid = (low + high - 1) / 2;
        let name = sorted[mid].name.to_lowercase();
        trace!(mid, name = %name, "probing");
        if name.contains(&needle) {
            debug!(query = %needle, index = mid, "record found");
            return Ok(&sorted[mid]);
        }
        match name.as_str().cmp(needle.as_str()) {
            Ordering::Less => low = mid + 1,
            _ => high = mid,
        }
    }

    debug!(query = %needle, "no record found by bisection");
    Err(CoreError::not_found(query))
}

/// Runs [`find`], then falls back to the first name in `sorted` containing `query`.
pub fn find_or_scan<'a>(sorted: &'a [RaceRecord], query: &str) -> CoreResult<&'a RaceRecord> {
    match find(sorted, query) {
        Err(CoreError::NotFound { .. }) => {
            let needle = normalize_query(query)?;
            sorted
                .iter()
                .find(|record| record.name.to_lowercase().contains(&needle))
                .ok_or_else(|| CoreError::not_found(query))
        }
        other => other,
    }
}

// Surrounding whitespace is part of the needle; only all-blank queries are refused.
fn normalize_query(query: &str) -> CoreResult<String> {
    if query.trim().is_empty() {
        return Err(CoreError::invalid_input("search query must not be blank"));
    }
    Ok(query.to_lowercase())
}
