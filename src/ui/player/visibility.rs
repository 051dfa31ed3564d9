// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility and the element group it controls.

/// Whether the transport overlay is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlsVisibility {
    #[default]
    Visible,
    Hidden,
}

impl ControlsVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Maps visibility onto every overlay element at once.
    #[must_use]
    pub fn elements(self) -> OverlayElements {
        OverlayElements::all(self.is_visible())
    }
}

/// Per-element visibility of the overlay.
///
/// Only ever built through [`ControlsVisibility::elements`], so the group is
/// shown or hidden as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayElements {
    pub play_pause: bool,
    pub skip_forward: bool,
    pub skip_backward: bool,
    pub slider: bool,
    pub time_label: bool,
    pub title: bool,
}

impl OverlayElements {
    fn all(shown: bool) -> Self {
        Self {
            play_pause: shown,
            skip_forward: shown,
            skip_backward: shown,
            slider: shown,
            time_label: shown,
            title: shown,
        }
    }

    /// Flags in display order: play/pause, forward, backward, slider, time, title.
    #[must_use]
    pub fn as_array(self) -> [bool; 6] {
        [
            self.play_pause,
            self.skip_forward,
            self.skip_backward,
            self.slider,
            self.time_label,
            self.title,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_visible() {
        assert_eq!(ControlsVisibility::default(), ControlsVisibility::Visible);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(
            ControlsVisibility::Visible.toggled(),
            ControlsVisibility::Hidden
        );
        assert_eq!(
            ControlsVisibility::Hidden.toggled(),
            ControlsVisibility::Visible
        );
    }

    #[test]
    fn elements_are_all_or_nothing() {
        assert!(ControlsVisibility::Visible
            .elements()
            .as_array()
            .iter()
            .all(|shown| *shown));
        assert!(ControlsVisibility::Hidden
            .elements()
            .as_array()
            .iter()
            .all(|shown| !*shown));
    }
}
