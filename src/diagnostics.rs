//! Diagnostics sink injected into the aggregation pipeline.
//!
//! Nothing reported here changes control flow beyond skipping the record it
//! names. Two categories exist: `missing-data` (a match record could not be
//! located or read) and `corrupt-data` (a timeline record failed to parse).

use std::collections::HashSet;

pub const MISSING_DATA: &str = "missing-data";
pub const CORRUPT_DATA: &str = "corrupt-data";

pub trait Diagnostics {
    /// A match record for `match_id` is absent or unreadable.
    fn missing_data(&mut self, match_id: &str, detail: &str);

    /// A timeline record named `source` was skipped.
    fn corrupt_data(&mut self, source: &str, detail: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn missing_data(&mut self, match_id: &str, detail: &str) {
        tracing::warn!(category = MISSING_DATA, match_id, "{}", detail);
    }

    fn corrupt_data(&mut self, source: &str, detail: &str) {
        tracing::error!(category = CORRUPT_DATA, source, "{}", detail);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: &'static str,
    pub subject: String,
    pub detail: String,
}

/// Keeps every diagnostic and optionally forwards to `tracing` as well.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Vec<Diagnostic>,
    forward: bool,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and also logs through [`TracingDiagnostics`].
    pub fn forwarding() -> Self {
        RecordingDiagnostics {
            entries: Vec::new(),
            forward: true,
        }
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn count(&self, category: &str) -> usize {
        self.entries.iter().filter(|d| d.category == category).count()
    }

    /// Number of distinct subjects reported under `category`.
    pub fn distinct(&self, category: &str) -> usize {
        self.entries
            .iter()
            .filter(|d| d.category == category)
            .map(|d| d.subject.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, category: &'static str, subject: &str, detail: &str) {
        self.entries.push(Diagnostic {
            category,
            subject: subject.to_string(),
            detail: detail.to_string(),
        });
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn missing_data(&mut self, match_id: &str, detail: &str) {
        if self.forward {
            TracingDiagnostics.missing_data(match_id, detail);
        }
        self.push(MISSING_DATA, match_id, detail);
    }

    fn corrupt_data(&mut self, source: &str, detail: &str) {
        if self.forward {
            TracingDiagnostics.corrupt_data(source, detail);
        }
        self.push(CORRUPT_DATA, source, detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_counts_by_category() {
        let mut sink = RecordingDiagnostics::new();
        sink.missing_data("NA1_1", "match file not found");
        sink.corrupt_data("timeline_NA1_2.json", "expected value at line 1");
        sink.missing_data("NA1_3", "match file not found");

        assert_eq!(sink.count(MISSING_DATA), 2);
        assert_eq!(sink.count(CORRUPT_DATA), 1);
        assert_eq!(sink.entries()[1].subject, "timeline_NA1_2.json");
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_distinct_ignores_repeated_subjects() {
        let mut sink = RecordingDiagnostics::new();
        sink.corrupt_data("timeline_NA1_2.json", "Error reading: EOF");
        sink.corrupt_data("timeline_NA1_2.json", "Error processing: EOF");
        sink.corrupt_data("timeline_NA1_5.json", "Error reading: EOF");

        assert_eq!(sink.count(CORRUPT_DATA), 3);
        assert_eq!(sink.distinct(CORRUPT_DATA), 2);
        assert_eq!(sink.distinct(MISSING_DATA), 0);
    }
}
