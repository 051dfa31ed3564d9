// SPDX-License-Identifier: MPL-2.0
//! Synchronous event collector owned by the player controls.

use std::time::Duration;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    PlayerStateEvent, ReportMetadata, SerializableEvent, UserAction,
};
use crate::error::Result;

/// Bounded log of player events.
///
/// Callers pass the timestamp explicitly (the scheduler clock), which keeps
/// the log deterministic under a simulated clock.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    dropped: u64,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            dropped: 0,
        }
    }

    pub fn log_action(&mut self, action: UserAction, at: Duration) {
        self.log_action_with_details(action, None, at);
    }

    pub fn log_action_with_details(
        &mut self,
        action: UserAction,
        details: Option<String>,
        at: Duration,
    ) {
        self.push(DiagnosticEventKind::UserAction { action, details }, at);
    }

    pub fn log_state(&mut self, state: PlayerStateEvent, at: Duration) {
        self.push(DiagnosticEventKind::PlayerState { state }, at);
    }

    pub fn log_warning(&mut self, message: impl Into<String>, at: Duration) {
        self.push(
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
            at,
        );
    }

    pub fn log_error(&mut self, message: impl Into<String>, at: Duration) {
        self.push(
            DiagnosticEventKind::Error {
                message: message.into(),
            },
            at,
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of events evicted since creation or the last `clear`.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.dropped = 0;
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Diagnostics`] if serialization fails.
    pub fn export_json(&self, clock: Duration) -> Result<String> {
        Ok(self.build_report(clock).to_json()?)
    }

    fn build_report(&self, clock: Duration) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, event.kind.clone()))
            .collect();
        let metadata = ReportMetadata::new(clock, events.len(), self.dropped);
        DiagnosticReport::new(metadata, events)
    }

    fn push(&mut self, kind: DiagnosticEventKind, at: Duration) {
        if self.buffer.len() >= self.buffer.capacity() {
            self.dropped += 1;
        }
        self.buffer.push(DiagnosticEvent::new(kind, at));
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_collector_is_empty() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), BufferCapacity::default().value());
    }

    #[test]
    fn log_action_stores_event_with_timestamp() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::TogglePlayback, ms(250));

        let event = collector.iter().next().expect("event should be stored");
        assert_eq!(event.timestamp, ms(250));
        assert!(matches!(
            event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::TogglePlayback,
                details: None
            }
        ));
    }

    #[test]
    fn full_collector_counts_dropped_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        for i in 0..20 {
            collector.log_action(UserAction::ToggleControls, ms(i));
        }

        assert_eq!(collector.len(), 16);
        assert_eq!(collector.dropped(), 4);
        assert_eq!(collector.iter().next().map(|e| e.timestamp), Some(ms(4)));
    }

    #[test]
    fn clear_resets_events_and_drop_count() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        for i in 0..17 {
            collector.log_state(PlayerStateEvent::ControlsHidden, ms(i));
        }
        collector.clear();

        assert!(collector.is_empty());
        assert_eq!(collector.dropped(), 0);
    }

    #[test]
    fn export_json_contains_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_state(PlayerStateEvent::PlayerAttached, ms(0));
        collector.log_action(UserAction::SkipBackward, ms(1200));
        collector.log_warning("config fallback", ms(1300));

        let json = collector.export_json(ms(2000)).expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["metadata"]["event_count"], 3);
        assert_eq!(value["metadata"]["clock_ms"], 2000);
        let events = value["events"].as_array().expect("events array");
        assert_eq!(events[0]["type"], "player_state");
        assert_eq!(events[1]["timestamp_ms"], 1200);
        assert_eq!(events[1]["action"]["action"], "skip_backward");
        assert_eq!(events[2]["message"], "config fallback");
    }
}
