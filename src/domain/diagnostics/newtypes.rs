// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (16 to 10000 events).
pub mod buffer_capacity_bounds {
    use crate::config;

    /// Minimum buffer capacity.
    pub const MIN: usize = config::MIN_DIAGNOSTICS_BUFFER_CAPACITY;
    /// Maximum buffer capacity.
    pub const MAX: usize = config::MAX_DIAGNOSTICS_BUFFER_CAPACITY;
    /// Default buffer capacity.
    pub const DEFAULT: usize = config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Buffer capacity for diagnostic events.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (16–10000 events).
///
/// # Example
///
/// ```
/// use iced_reel::domain::diagnostics::BufferCapacity;
///
/// let capacity = BufferCapacity::new(1000);
/// assert_eq!(capacity.value(), 1000);
///
/// // Values outside range are clamped
/// let too_high = BufferCapacity::new(50000);
/// assert_eq!(too_high.value(), 10000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= buffer_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= buffer_capacity_bounds::MAX
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
