use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::accumulator::MAX_FACTORIAL_INPUT;
use crate::error::{CoreError, CoreResult};

/// Sampling windows and limits used by [`AnalyticsSession`](crate::AnalyticsSession).
///
/// Missing keys in a JSON document fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Leading records fed to the sorter.
    pub sort_sample: usize,
    /// Sorted records kept in a sort report.
    pub chart_top: usize,
    /// Number of hash buckets.
    pub bucket_count: usize,
    /// Leading records distributed into buckets.
    pub bucket_sample: usize,
    /// Leading records inserted into the rank tree.
    pub tree_sample: usize,
    /// Leading records whose points are summed.
    pub sum_sample: usize,
    /// Activity messages shown by default.
    pub activity_window: usize,
    /// Largest factorial input accepted from a caller.
    pub factorial_max: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            sort_sample: 100,
            chart_top: 10,
            bucket_count: 10,
            bucket_sample: 20,
            tree_sample: 15,
            sum_sample: 50,
            activity_window: 10,
            factorial_max: 20,
        }
    }
}

impl AnalyticsConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| CoreError::invalid_input(format!("malformed config: {}", err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            CoreError::invalid_input(format!("cannot read config {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.bucket_count == 0 {
            return Err(CoreError::invalid_input("bucket_count must be positive"));
        }
        if !(0..=MAX_FACTORIAL_INPUT).contains(&self.factorial_max) {
            return Err(CoreError::invalid_input(format!(
                "factorial_max must be between 0 and {}",
                MAX_FACTORIAL_INPUT
            )));
        }
        Ok(())
    }
}
