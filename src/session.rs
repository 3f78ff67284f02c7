//! Composition of the analytics components behind one explicit owner.
//!
//! An [`AnalyticsSession`] holds the loaded records, the configuration, the
//! manual ledger and the activity log. Nothing is process-global: callers
//! create a session and pass it where it is needed.

use tracing::warn;

use crate::accumulator::{factorial, total_points};
use crate::activity::ActivityLog;
use crate::bucket_index::BucketIndex;
use crate::config::AnalyticsConfig;
use crate::error::{CoreError, CoreResult};
use crate::ledger::{EntryMode, ManualEntry, ManualLedger};
use crate::locator;
use crate::rank_tree::RankTree;
use crate::record::{RaceRecord, RecordField, RecordStore};
use crate::sorter::{sort_timed, SortReport, SortStrategy};

#[derive(Debug)]
pub struct AnalyticsSession {
    store: RecordStore,
    config: AnalyticsConfig,
    ledger: ManualLedger,
    activity: ActivityLog,
}

impl AnalyticsSession {
    /// Creates a session over `store` after validating `config`.
    pub fn new(store: RecordStore, config: AnalyticsConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            ledger: ManualLedger::new(),
            activity: ActivityLog::new(),
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn ledger(&self) -> &ManualLedger {
        &self.ledger
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Sorts the leading sample and keeps the top `chart_top` records.
    pub fn sort_sample(&mut self, field: RecordField, strategy: SortStrategy) -> SortReport {
        let sample = self.store.head(self.config.sort_sample);
        let mut report = sort_timed(sample, field, strategy);
        report.records.truncate(self.config.chart_top);
        self.activity.record(format!(
            "Sorted {} records by {} ({}) in {:.4} ms",
            sample.len(),
            field,
            strategy,
            report.elapsed_ms()
        ));
        report
    }

    /// Looks a driver up by (partial) name, ignoring surrounding whitespace.
    pub fn search(&mut self, query: &str) -> CoreResult<RaceRecord> {
        let query = query.trim();
        let sorted = self.store.sorted_by_name();
        match locator::find(&sorted, query) {
            Ok(record) => {
                self.activity.record(format!("Searched '{}': found {}", query, record.name));
                Ok(record.clone())
            }
            Err(err) => {
                warn!(query, error = %err, "search failed");
                self.activity.record(format!("Searched '{}': {}", query, err));
                Err(err)
            }
        }
    }

    /// Hashes the surnames of the leading sample into `bucket_count` buckets.
    pub fn bucket_view(&mut self) -> CoreResult<BucketIndex> {
        let sample = self.store.head(self.config.bucket_sample);
        let index = BucketIndex::build(sample, self.config.bucket_count)?;
        self.activity.record(format!(
            "Hashed {} names into {} buckets",
            sample.len(),
            index.bucket_count()
        ));
        Ok(index)
    }

    /// Ranks the leading sample by points, highest first.
    pub fn ranking(&mut self) -> Vec<RaceRecord> {
        let sample = self.store.head(self.config.tree_sample);
        let tree = RankTree::from_records(sample);
        self.activity.record(format!("Ranked {} records by points", tree.len()));
        tree.descending()
    }

    /// Sums the points of the leading sample recursively.
    pub fn total_points(&mut self) -> f64 {
        let sample = self.store.head(self.config.sum_sample);
        let total = total_points(sample);
        self.activity.record(format!("Total points of {} records: {}", sample.len(), total));
        total
    }

    /// Computes `n!` for `n` up to `factorial_max`.
    pub fn factorial(&mut self, n: i64) -> CoreResult<u128> {
        let result = if n > self.config.factorial_max {
            Err(CoreError::invalid_input(format!(
                "factorial input {} exceeds the configured maximum {}",
                n, self.config.factorial_max
            )))
        } else {
            factorial(n)
        };
        match &result {
            Ok(value) => self.activity.record(format!("Factorial of {} = {}", n, value)),
            Err(err) => self.activity.record(format!("Factorial of {}: {}", n, err)),
        }
        result
    }

    /// Validates and adds a manual entry.
    pub fn add_entry(&mut self, name: &str, laptime: &str, mode: EntryMode) -> CoreResult<()> {
        let entry = ManualEntry::new(name, laptime)?;
        self.ledger.add(entry, mode);
        self.activity.record(format!("Added {} via {}", name, mode));
        Ok(())
    }

    /// Removes the first ledger entry.
    pub fn pull_entry(&mut self) -> CoreResult<ManualEntry> {
        let entry = self.ledger.remove_first()?;
        self.activity.record(format!("Pulled {}", entry.name));
        Ok(entry)
    }

    /// The newest `activity_window` messages, newest first.
    pub fn recent_activity(&self) -> Vec<&str> {
        self.activity.recent(self.config.activity_window)
    }

    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }
}
