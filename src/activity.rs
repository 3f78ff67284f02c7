use tracing::info;

/// Append-only log of actions taken during a session.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the log.
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(activity = %message);
        self.entries.push(message);
    }

    /// Returns at most `n` messages, newest first.
    pub fn recent(&self, n: usize) -> Vec<&str> {
        self.entries.iter().rev().take(n).map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
