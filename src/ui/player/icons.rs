// SPDX-License-Identifier: MPL-2.0
//! Logical icons of the transport controls.

/// Icon shown on a transport button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlIcon {
    /// Shown while paused; tapping starts playback.
    #[default]
    Play,
    /// Shown while playing; tapping pauses.
    Pause,
    SkipForward,
    SkipBackward,
}

impl ControlIcon {
    /// Asset name the icon is looked up by.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::SkipForward => "10sec_forward",
            Self::SkipBackward => "10sec_backward",
        }
    }

    /// Text glyph used when no image asset is bundled.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
            Self::SkipForward => "⏩",
            Self::SkipBackward => "⏪",
        }
    }
}
