// SPDX-License-Identifier: MPL-2.0
//! Transport newtypes.
//!
//! This module provides type-safe wrappers for transport settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (1 to 60 seconds).
pub mod skip_step_bounds {
    use crate::config;

    /// Minimum skip step in seconds.
    pub const MIN: f64 = config::MIN_SKIP_STEP_SECS;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = config::MAX_SKIP_STEP_SECS;
    /// Default skip step in seconds.
    pub const DEFAULT: f64 = config::DEFAULT_SKIP_STEP_SECS;
}

/// Amount the forward/backward buttons move the playhead, in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1.0–60.0 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step value, clamping to valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// PollInterval
// =============================================================================

/// Position polling interval bounds (10 to 1000 milliseconds).
pub mod poll_interval_bounds {
    use crate::config;

    /// Minimum polling interval in milliseconds.
    pub const MIN: u32 = config::MIN_POLL_INTERVAL_MS;
    /// Maximum polling interval in milliseconds.
    pub const MAX: u32 = config::MAX_POLL_INTERVAL_MS;
    /// Default polling interval in milliseconds.
    pub const DEFAULT: u32 = config::DEFAULT_POLL_INTERVAL_MS;
}

/// How often the playback position is sampled for the slider and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u32);

impl PollInterval {
    /// Creates a new polling interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(poll_interval_bounds::MIN, poll_interval_bounds::MAX))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(poll_interval_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
