//! Descending sorts over a chosen [`RecordField`].
//!
//! Two strategies are provided and both leave the input slice untouched:
//!
//! - [`SortStrategy::Partition`]: recursive three-way partition around the
//!   middle element. Expected `O(n log n)`, `O(n²)` on unlucky pivots.
//! - [`SortStrategy::Exchange`]: adjacent-swap bubble sort, always `O(n²)`
//!   and stable.
//!
//! For keys without duplicates both strategies yield the same order. Among
//! records with equal keys only the relative order may differ.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::CoreError;
use crate::record::{RaceRecord, RecordField};

/// Ordering algorithm used by [`sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    Partition,
    Exchange,
}

impl SortStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortStrategy::Partition => "partition",
            SortStrategy::Exchange => "exchange",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partition" | "quick" => Ok(SortStrategy::Partition),
            "exchange" | "bubble" => Ok(SortStrategy::Exchange),
            other => Err(CoreError::invalid_input(format!(
                "unknown sort strategy '{}'",
                other
            ))),
        }
    }
}

/// Sorted records together with the time the sort took.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub strategy: SortStrategy,
    pub field: RecordField,
    pub records: Vec<RaceRecord>,
    pub elapsed: Duration,
}

impl SortReport {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Returns `records` ordered descending by `field`.
pub fn sort(records: &[RaceRecord], field: RecordField, strategy: SortStrategy) -> Vec<RaceRecord> {
    debug!(%strategy, %field, len = records.len(), "sorting records");
    match strategy {
        SortStrategy::Partition => partition_sort(records, field),
        SortStrategy::Exchange => exchange_sort(records, field),
    }
}

/// Like [`sort`], but also measures how long the sort took.
pub fn sort_timed(records: &[RaceRecord], field: RecordField, strategy: SortStrategy) -> SortReport {
    let start = Instant::now();
    let sorted = sort(records, field, strategy);
    let elapsed = start.elapsed();
    debug!(%strategy, elapsed_us = elapsed.as_micros() as u64, "sort finished");
    SortReport {
        strategy,
        field,
        records: sorted,
        elapsed,
    }
}

/// Three-way partition sort: greater ++ equal ++ less around the middle pivot.
pub fn partition_sort(records: &[RaceRecord], field: RecordField) -> Vec<RaceRecord> {
    if records.len() <= 1 {
        return records.to_vec();
    }
    let pivot = field.value(&records[records.len() / 2]);

    let mut greater = Vec::new();
    let mut equal = Vec::new();
    let mut less = Vec::new();
    for record in records {
        match field.value(record).total_cmp(&pivot) {
            Ordering::Greater => greater.push(record.clone()),
            Ordering::Equal => equal.push(record.clone()),
            Ordering::Less => less.push(record.clone()),
        }
    }

    let mut sorted = partition_sort(&greater, field);
    sorted.append(&mut equal);
    sorted.append(&mut partition_sort(&less, field));
    sorted
}

/// Bubble sort on a copy, swapping adjacent records while the left one is smaller.
pub fn exchange_sort(records: &[RaceRecord], field: RecordField) -> Vec<RaceRecord> {
    let mut sorted = records.to_vec();
    let len = sorted.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            let left = field.value(&sorted[j]);
            let right = field.value(&sorted[j + 1]);
            if left.total_cmp(&right) == Ordering::Less {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    sorted
}
