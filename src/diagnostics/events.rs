// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded by the player controls.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User-initiated actions on the control overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Tap on the video surface.
    ToggleControls,

    /// Play/pause button.
    TogglePlayback,

    /// Skip forward button.
    SkipForward,

    /// Skip backward button.
    SkipBackward,

    /// Seek requested from the slider or a skip button.
    SeekVideo {
        /// Target position in seconds.
        position_secs: f64,
    },
}

/// Why a seek request was dropped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeekIgnoredReason {
    /// Media metadata has not loaded yet.
    UnknownDuration,
    /// Slider reported NaN or infinity.
    NonFiniteValue,
    /// No player attached.
    NoPlayer,
}

/// State changes of the control screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlayerStateEvent {
    /// Player attached and polling started.
    PlayerAttached,

    /// Idle timeout hid the overlay.
    ControlsHidden,

    /// A seek request was dropped.
    SeekIgnored { reason: SeekIgnoredReason },

    /// Timers cancelled and player released.
    TornDown,
}

/// A diagnostic event with timestamp.
///
/// The timestamp is the scheduler clock at the time of recording, so events
/// line up with the timers that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: Duration,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind, timestamp: Duration) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional context, such as the skip target.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    PlayerState { state: PlayerStateEvent },

    /// Non-critical issue, e.g. a config file that failed to parse.
    Warning { message: String },

    /// Engine failure reported by the player.
    Error { message: String },
}
