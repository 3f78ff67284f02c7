use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Format used when rendering entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Operator-entered lap time. The lap time is free text and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub name: String,
    pub laptime: String,
    pub timestamp: NaiveTime,
}

impl ManualEntry {
    /// Creates an entry stamped with the current local time.
    ///
    /// Both `name` and `laptime` must be non-empty.
    pub fn new(name: impl Into<String>, laptime: impl Into<String>) -> CoreResult<Self> {
        Self::with_timestamp(name, laptime, Local::now().time())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn with_timestamp(
        name: impl Into<String>,
        laptime: impl Into<String>,
        timestamp: NaiveTime,
    ) -> CoreResult<Self> {
        let name = name.into();
        let laptime = laptime.into();
        if name.is_empty() || laptime.is_empty() {
            return Err(CoreError::invalid_input(
                "entry needs both a driver name and a lap time",
            ));
        }
        Ok(Self {
            name,
            laptime,
            timestamp,
        })
    }

    /// Timestamp rendered as `HH:MM:SS`.
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Where [`ManualLedger::add`] places a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    /// Insert at the front: last in, first out.
    Stack,
    /// Append at the back: first in, first out.
    Queue,
}

impl EntryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryMode::Stack => "stack",
            EntryMode::Queue => "queue",
        }
    }
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" | "lifo" => Ok(EntryMode::Stack),
            "queue" | "fifo" => Ok(EntryMode::Queue),
            other => Err(CoreError::invalid_input(format!(
                "unknown entry mode '{}', expected stack or queue",
                other
            ))),
        }
    }
}

/// Single sequence of manual entries shared by stack and queue insertion.
///
/// Removal always takes the front entry, whichever mode added it.
#[derive(Debug, Clone, Default)]
pub struct ManualLedger {
    entries: VecDeque<ManualEntry>,
}

impl ManualLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` at the front (stack) or back (queue).
    pub fn add(&mut self, entry: ManualEntry, mode: EntryMode) {
        debug!(name = %entry.name, %mode, len = self.entries.len() + 1, "adding ledger entry");
        match mode {
            EntryMode::Stack => self.entries.push_front(entry),
            EntryMode::Queue => self.entries.push_back(entry),
        }
    }

    /// Removes and returns the entry at position 0.
    pub fn remove_first(&mut self) -> CoreResult<ManualEntry> {
        let entry = self.entries.pop_front().ok_or(CoreError::Empty)?;
        debug!(name = %entry.name, remaining = self.entries.len(), "removed ledger entry");
        Ok(entry)
    }

    /// Borrows the entry that [`remove_first`](Self::remove_first) would return.
    pub fn peek_first(&self) -> Option<&ManualEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &ManualEntry> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Renders the ledger into a padded textual table.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ManualLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("(empty ledger)");
        }
        let headers = ["name", "laptime", "timestamp"];
        let rows: Vec<[String; 3]> = self
            .entries
            .iter()
            .map(|e| [e.name.clone(), e.laptime.clone(), e.timestamp_label()])
            .collect();
        let mut widths = headers.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (idx, (header, width)) in headers.iter().zip(widths.iter()).enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:<width$}", header, width = *width)?;
        }
        writeln!(f)?;
        for (idx, width) in widths.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&"-".repeat(*width))?;
        }
        for row in &rows {
            writeln!(f)?;
            for (idx, (cell, width)) in row.iter().zip(widths.iter()).enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:<width$}", cell, width = *width)?;
            }
        }
        Ok(())
    }
}
