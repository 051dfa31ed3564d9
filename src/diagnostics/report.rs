// SPDX-License-Identifier: MPL-2.0
//! JSON export format for the player event log.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about an exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    pub iced_reel_version: String,
    /// Scheduler clock at export time, in milliseconds
    pub clock_ms: u64,
    pub event_count: usize,
    /// Events dropped because the buffer was full
    pub dropped_events: u64,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(clock: Duration, event_count: usize, dropped_events: u64) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            iced_reel_version: env!("CARGO_PKG_VERSION").to_string(),
            clock_ms: millis(clock),
            event_count,
            dropped_events,
        }
    }
}

/// An event with its timestamp flattened to milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds on the scheduler clock
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(timestamp: Duration, kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp_ms: millis(timestamp),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        Self { metadata, events }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
