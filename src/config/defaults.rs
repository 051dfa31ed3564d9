// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Media**: The compiled-in media source
//! - **Transport**: Skip step and position polling
//! - **Overlay**: Controls auto-hide timeout
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Progressive MP4 played by the control screen.
pub const DEFAULT_MEDIA_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Title shown at the top of the overlay.
pub const DEFAULT_MEDIA_TITLE: &str = "Big Buck Bunny";

// ==========================================================================
// Transport Defaults
// ==========================================================================

/// Default forward/backward skip amount (in seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip amount (in seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum skip amount (in seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

/// Default position polling interval (in milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Minimum position polling interval (in milliseconds).
pub const MIN_POLL_INTERVAL_MS: u32 = 10;

/// Maximum position polling interval (in milliseconds).
pub const MAX_POLL_INTERVAL_MS: u32 = 1000;

/// Whether playback starts as soon as the screen appears.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Overlay/Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for the controls overlay (in seconds).
pub const DEFAULT_IDLE_TIMEOUT_SECS: u32 = 10;

/// Minimum idle timeout (in seconds).
pub const MIN_IDLE_TIMEOUT_SECS: u32 = 1;

/// Maximum idle timeout (in seconds).
pub const MAX_IDLE_TIMEOUT_SECS: u32 = 60;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Skip step validation
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    // Poll interval validation
    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(MAX_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);

    // Idle timeout validation
    assert!(MIN_IDLE_TIMEOUT_SECS > 0);
    assert!(MAX_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_defaults_match_reference_screen() {
        assert_eq!(DEFAULT_SKIP_STEP_SECS, 10.0);
        assert_eq!(DEFAULT_POLL_INTERVAL_MS, 10);
    }

    #[test]
    fn idle_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_IDLE_TIMEOUT_SECS, 10);
        assert!(DEFAULT_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
        assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);
    }

    #[test]
    fn media_defaults_point_at_mp4() {
        assert!(DEFAULT_MEDIA_URL.ends_with(".mp4"));
        assert!(!DEFAULT_MEDIA_TITLE.is_empty());
    }
}
