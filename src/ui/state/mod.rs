// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that outlives a single frame of the control screen but is not tied
//! to any widget: the idle countdown and its timeout value.

pub mod idle_timeout;
pub mod idle_timer;

// Re-export commonly used types for convenience
pub use idle_timeout::IdleTimeout;
pub use idle_timer::{IdleState, IdleTimer};
