// SPDX-License-Identifier: MPL-2.0
//! Render state of the control overlay.

use super::icons::ControlIcon;
use super::visibility::{ControlsVisibility, OverlayElements};
use crate::config::TimeLabelMode;
use crate::video_player::{format_elapsed, RemainingTime};

/// Everything the overlay view needs, recomputed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsState {
    pub visibility: ControlsVisibility,
    /// Icon of the play/pause button.
    pub play_icon: ControlIcon,
    /// Position as a fraction of the duration. Untouched while the duration
    /// is unknown.
    pub slider_value: f64,
    /// `HH:MM:SS` since the start of the media.
    pub elapsed_label: String,
    /// Time left, `None` until the duration is known.
    pub remaining: Option<RemainingTime>,
    pub title: String,
    pub time_label_mode: TimeLabelMode,
}

impl ControlsState {
    #[must_use]
    pub fn new(title: impl Into<String>, time_label_mode: TimeLabelMode) -> Self {
        Self {
            visibility: ControlsVisibility::Visible,
            play_icon: ControlIcon::Play,
            slider_value: 0.0,
            elapsed_label: format_elapsed(0),
            remaining: None,
            title: title.into(),
            time_label_mode,
        }
    }

    /// Text of the time label.
    ///
    /// In [`TimeLabelMode::Remaining`] the elapsed string is shown until the
    /// remaining time can be computed.
    #[must_use]
    pub fn time_label(&self) -> String {
        match (self.time_label_mode, &self.remaining) {
            (TimeLabelMode::Remaining, Some(remaining)) => remaining.to_string(),
            _ => self.elapsed_label.clone(),
        }
    }

    #[must_use]
    pub fn elements(&self) -> OverlayElements {
        self.visibility.elements()
    }
}

impl Default for ControlsState {
    fn default() -> Self {
        Self::new(String::new(), TimeLabelMode::default())
    }
}
