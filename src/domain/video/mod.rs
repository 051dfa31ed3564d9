// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects that are independent of any
//! presentation or media engine concerns.

pub mod newtypes;
pub mod playback;

pub use newtypes::{poll_interval_bounds, skip_step_bounds, PollInterval, SkipStep};
pub use playback::{normalized_position, MediaDuration};
