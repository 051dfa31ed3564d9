// SPDX-License-Identifier: MPL-2.0
//! Idle timeout domain type for the controls overlay.
//!
//! This module provides a type-safe wrapper for the overlay auto-hide
//! timeout in seconds.

use crate::config::{DEFAULT_IDLE_TIMEOUT_SECS, MAX_IDLE_TIMEOUT_SECS, MIN_IDLE_TIMEOUT_SECS};

/// Seconds without interaction before the controls overlay hides.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_reel::ui::state::IdleTimeout;
///
/// let timeout = IdleTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = IdleTimeout::new(100);
/// assert_eq!(too_high.value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u32);

impl IdleTimeout {
    /// Creates a new idle timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_IDLE_TIMEOUT_SECS, MAX_IDLE_TIMEOUT_SECS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(DEFAULT_IDLE_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(IdleTimeout::new(0).value(), MIN_IDLE_TIMEOUT_SECS);
        assert_eq!(IdleTimeout::new(100).value(), MAX_IDLE_TIMEOUT_SECS);
    }

    #[test]
    fn default_is_ten_seconds() {
        assert_eq!(IdleTimeout::default().value(), 10);
        assert_eq!(
            IdleTimeout::default().as_duration(),
            std::time::Duration::from_secs(10)
        );
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(IdleTimeout::new(1).value(), 1);
        assert_eq!(IdleTimeout::new(30).value(), 30);
        assert_eq!(IdleTimeout::new(60).value(), 60);
    }
}
