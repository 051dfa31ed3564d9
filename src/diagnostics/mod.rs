// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the control screen.
//!
//! The player controls record user actions and state changes into a
//! memory-bounded ring buffer that can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: one recorded event, stamped with the scheduler clock
//! - [`DiagnosticsCollector`]: owner of the buffer and the export entry point

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, PlayerStateEvent, SeekIgnoredReason, UserAction,
};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
