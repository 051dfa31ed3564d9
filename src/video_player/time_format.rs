// SPDX-License-Identifier: MPL-2.0
//! Time display formatting for the playback overlay.
//!
//! Two formats are produced:
//! - elapsed time as `HH:MM:SS` (hours are not capped, `36:00:00` is valid)
//! - remaining time as separate minute and second strings, `MM` and `SS`
//!
//! All functions are pure; non-finite input yields `None` instead of a
//! garbage string.

use std::fmt;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Formats whole elapsed seconds as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use iced_reel::video_player::time_format::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(3661), "01:01:01");
/// assert_eq!(format_elapsed(129_600), "36:00:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats a real playback position as `HH:MM:SS`, flooring to whole seconds.
///
/// Negative positions saturate to zero. Returns `None` for NaN or infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_label(position_secs: f64) -> Option<String> {
    if !position_secs.is_finite() {
        return None;
    }
    Some(format_elapsed(position_secs.max(0.0).floor() as u64))
}

/// Remaining playback time split into display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingTime {
    /// Whole minutes, at least two digits.
    pub minutes: String,
    /// Whole seconds within the minute, two digits.
    pub seconds: String,
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Splits remaining seconds into `MM` and `SS` strings.
///
/// Minutes are `floor(seconds / 60)`, seconds are the real remainder rounded
/// down. Minutes are not capped at 59, so two hours renders as `"120"`.
///
/// Returns `None` for non-finite or negative input.
///
/// # Examples
///
/// ```
/// use iced_reel::video_player::time_format::format_remaining;
///
/// let remaining = format_remaining(125.7).unwrap();
/// assert_eq!(remaining.minutes, "02");
/// assert_eq!(remaining.seconds, "05");
/// assert_eq!(remaining.to_string(), "02:05");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_remaining(seconds: f64) -> Option<RemainingTime> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;

    Some(RemainingTime {
        minutes: format!("{minutes:02}"),
        seconds: format!("{secs:02}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_pads_every_field() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(60), "00:01:00");
        assert_eq!(format_elapsed(3661), "01:01:01");
    }

    #[test]
    fn format_elapsed_has_no_hour_cap() {
        assert_eq!(format_elapsed(36 * 3600), "36:00:00");
        assert_eq!(format_elapsed(100 * 3600 + 5), "100:00:05");
    }

    #[test]
    fn elapsed_label_floors_fractional_seconds() {
        assert_eq!(elapsed_label(5.99).as_deref(), Some("00:00:05"));
        assert_eq!(elapsed_label(30.0).as_deref(), Some("00:00:30"));
    }

    #[test]
    fn elapsed_label_saturates_negative_positions() {
        assert_eq!(elapsed_label(-4.0).as_deref(), Some("00:00:00"));
    }

    #[test]
    fn elapsed_label_rejects_non_finite() {
        assert_eq!(elapsed_label(f64::NAN), None);
        assert_eq!(elapsed_label(f64::INFINITY), None);
    }

    #[test]
    fn format_remaining_rounds_seconds_down() {
        let remaining = format_remaining(125.7).expect("finite input");
        assert_eq!(remaining.minutes, "02");
        assert_eq!(remaining.seconds, "05");
    }

    #[test]
    fn format_remaining_zero() {
        let remaining = format_remaining(0.0).expect("finite input");
        assert_eq!(remaining.to_string(), "00:00");
    }

    #[test]
    fn format_remaining_sub_second_is_zero() {
        assert_eq!(format_remaining(0.999).map(|r| r.to_string()).as_deref(), Some("00:00"));
    }

    #[test]
    fn format_remaining_minutes_are_not_capped() {
        let remaining = format_remaining(7200.0).expect("finite input");
        assert_eq!(remaining.minutes, "120");
        assert_eq!(remaining.seconds, "00");
    }

    #[test]
    fn format_remaining_rejects_non_finite_and_negative() {
        assert_eq!(format_remaining(f64::NAN), None);
        assert_eq!(format_remaining(f64::INFINITY), None);
        assert_eq!(format_remaining(f64::NEG_INFINITY), None);
        assert_eq!(format_remaining(-1.0), None);
    }
}
