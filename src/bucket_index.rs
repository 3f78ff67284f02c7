use std::fmt;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::record::RaceRecord;

/// Label rendered for a bucket with no entries.
pub const EMPTY_BUCKET: &str = "Empty";

/// Fixed-size chained hash of surnames keyed by name length.
///
/// Buckets only grow by appending; their contents follow input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketIndex {
    buckets: Vec<Vec<String>>,
}

/// Bucket for `name`: its character count modulo `bucket_count`.
pub fn bucket_of(name: &str, bucket_count: usize) -> CoreResult<usize> {
    if bucket_count == 0 {
        return Err(CoreError::invalid_input("bucket count must be positive"));
    }
    Ok(name.chars().count() % bucket_count)
}

/// Last whitespace-separated word of `name`, or the name itself when it has none.
pub fn surname(name: &str) -> &str {
    name.split_whitespace().next_back().unwrap_or(name)
}

impl BucketIndex {
    /// Distributes the surnames of `records` into `bucket_count` buckets.
    pub fn build(records: &[RaceRecord], bucket_count: usize) -> CoreResult<Self> {
        // Checked up front so an empty input still rejects a zero count.
        bucket_of("", bucket_count)?;
        let mut buckets = vec![Vec::new(); bucket_count];
        for record in records {
            let index = bucket_of(&record.name, bucket_count)?;
            buckets[index].push(surname(&record.name).to_string());
        }
        debug!(
            bucket_count,
            records = records.len(),
            empty = buckets.iter().filter(|b| b.is_empty()).count(),
            "built bucket index"
        );
        Ok(Self { buckets })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket at `index`, if in range.
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates `(index, bucket)` pairs, empty buckets included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    /// Newline-joined contents of a bucket, or [`EMPTY_BUCKET`].
    pub fn render_bucket(&self, index: usize) -> Option<String> {
        let bucket = self.bucket(index)?;
        if bucket.is_empty() {
            Some(EMPTY_BUCKET.to_string())
        } else {
            Some(bucket.join("\n"))
        }
    }
}

impl fmt::Display for BucketIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.iter() {
            if index > 0 {
                writeln!(f)?;
            }
            if bucket.is_empty() {
                write!(f, "Bucket {}: {}", index, EMPTY_BUCKET)?;
            } else {
                write!(f, "Bucket {}: {}", index, bucket.join(", "))?;
            }
        }
        Ok(())
    }
}
