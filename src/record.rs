use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;

/// One competitor's statistics for a race session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRecord {
    #[serde(rename = "driverId")]
    pub driver_id: u32,
    pub name: String,
    pub points: f64,
    pub grid: u32,
    pub laps: u32,
}

impl RaceRecord {
    pub fn new(driver_id: u32, name: impl Into<String>, points: f64, grid: u32, laps: u32) -> Self {
        Self {
            driver_id,
            name: name.into(),
            points,
            grid,
            laps,
        }
    }

    /// Returns the value stored in `field` as a float.
    pub fn field(&self, field: RecordField) -> f64 {
        field.value(self)
    }
}

/// Numeric fields a caller can order or key records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Points,
    Laps,
    Grid,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [RecordField::Points, RecordField::Laps, RecordField::Grid];

    /// Reads this field from `record`. Negative zero reads as zero.
    pub fn value(self, record: &RaceRecord) -> f64 {
        match self {
            RecordField::Points if record.points == 0.0 => 0.0,
            RecordField::Points => record.points,
            RecordField::Laps => f64::from(record.laps),
            RecordField::Grid => f64::from(record.grid),
        }
    }

    /// Returns a lower-case name for the field.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Points => "points",
            RecordField::Laps => "laps",
            RecordField::Grid => "grid",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(RecordField::Points),
            "laps" => Ok(RecordField::Laps),
            "grid" => Ok(RecordField::Grid),
            other => Err(CoreError::invalid_input(format!(
                "unknown field '{}', expected points, laps or grid",
                other
            ))),
        }
    }
}

/// Read-only holder of validated records with unique names.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RaceRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store, keeping the first record seen for every name.
    pub fn from_records(records: impl IntoIterator<Item = RaceRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut dropped = 0usize;
        for record in records {
            if seen.insert(record.name.clone()) {
                kept.push(record);
            } else {
                dropped += 1;
            }
        }
        debug!(kept = kept.len(), dropped, "built record store");
        Self { records: kept }
    }

    pub fn records(&self) -> &[RaceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns at most the first `n` records.
    pub fn head(&self, n: usize) -> &[RaceRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Returns a copy ordered by name, ascending and case-insensitive.
    pub fn sorted_by_name(&self) -> Vec<RaceRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by_cached_key(|r| r.name.to_lowercase());
        sorted
    }

    /// Returns the points of at most the first `n` records.
    pub fn points(&self, n: usize) -> Vec<f64> {
        self.head(n).iter().map(|r| r.points).collect()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a RaceRecord;
    type IntoIter = std::slice::Iter<'a, RaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
