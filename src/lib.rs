//! Classic data-structure and algorithm routines over race statistics.
//!
//! This crate provides:
//! - [`RaceRecord`] and [`RecordStore`]: the record type and a read-only holder with unique names.
//! - [`sorter`]: partition and exchange sorts, descending by a [`RecordField`].
//! - [`locator`]: name lookup by bisection over a name-sorted slice.
//! - [`BucketIndex`]: a fixed-size hash of surnames keyed by name length.
//! - [`RankTree`]: an unbalanced binary search tree ordered by points.
//! - [`accumulator`]: recursive sum and factorial.
//! - [`ManualLedger`]: one sequence of manual entries usable as a stack or a queue.
//! - [`AnalyticsSession`]: an explicit owner composing all of the above.
//!
//! Every component works on in-memory values passed in by the caller. Parsing,
//! deduplication of raw input and presentation are left to the embedding
//! application.

pub mod accumulator;
pub mod activity;
pub mod bucket_index;
pub mod config;
pub mod error;
pub mod ledger;
pub mod locator;
pub mod rank_tree;
pub mod record;
pub mod session;
pub mod sorter;

pub use accumulator::{factorial, recursive_sum, total_points};
pub use activity::ActivityLog;
pub use bucket_index::BucketIndex;
pub use config::AnalyticsConfig;
pub use error::{CoreError, CoreResult};
pub use ledger::{EntryMode, ManualEntry, ManualLedger};
pub use locator::{find, find_or_scan};
pub use rank_tree::{RankTree, RankTreeIter};
pub use record::{RaceRecord, RecordField, RecordStore};
pub use session::AnalyticsSession;
pub use sorter::{sort, sort_timed, SortReport, SortStrategy};
