//! Calculation history.
//!
//! An append-only log of formatted calculation records. Entries are created
//! by the calculator on every successful calculation and only ever removed
//! wholesale by a reset. Rendering shows a bounded window of the most recent
//! entries so a long session stays readable.

use std::fmt::Write as _;

/// Ordered, append-only record of completed calculations.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one formatted record.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Remove all records.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render the most recent `window` records for display.
    ///
    /// Records are shown oldest-of-the-window first and numbered from 1.
    /// When more than `window` records exist, a trailing line reports the
    /// total. An empty history renders as a placeholder notice.
    pub fn render(&self, window: usize) -> String {
        if self.entries.is_empty() {
            return "No calculations yet.".to_string();
        }

        let mut out = String::new();
        out.push_str("Calculation history:\n");
        out.push_str(RULE);

        let start = self.entries.len().saturating_sub(window);
        for (i, entry) in self.entries[start..].iter().enumerate() {
            let _ = writeln!(out, "{:2}. {}", i + 1, entry);
        }

        if self.entries.len() > window {
            let _ = writeln!(out, "... ({} calculations total)", self.entries.len());
        }

        out.push_str(RULE.trim_end());
        out
    }
}

const RULE: &str = "------------------------------\n";
