// SPDX-License-Identifier: MPL-2.0
//! Playback clock port.
//!
//! This module defines the [`PlaybackClock`] trait: the narrow view of the
//! media engine that the control overlay depends on. Decoding, networking and
//! rendering stay behind the implementation.
//!
//! # Design Notes
//!
//! - Methods are infallible: a failed engine reports `is_playing() == false`
//!   and keeps its last position
//! - Positions and durations are seconds as `f64`
//! - Periodic position updates are not pushed by the engine; the controller
//!   polls `current_position()` from a [`PeriodicObserver`] timer

use crate::domain::video::MediaDuration;
use crate::scheduler::{Scheduler, TimerId};
use std::time::Duration;

/// Port over the media engine's transport.
///
/// # Example
///
/// ```
/// use iced_reel::video_player::PlaybackClock;
///
/// fn progress(player: &impl PlaybackClock) -> Option<f64> {
///     let duration = player.duration().secs()?;
///     Some(player.current_position() / duration)
/// }
/// ```
pub trait PlaybackClock {
    /// Current playhead in seconds.
    fn current_position(&self) -> f64;

    /// Total media length, `Unknown` until metadata has loaded.
    fn duration(&self) -> MediaDuration;

    /// Moves the playhead. Implementations decide how to treat positions
    /// outside the media.
    fn seek(&mut self, to_secs: f64);

    fn play(&mut self);

    fn pause(&mut self);

    /// True when the rate is nonzero and the engine is not in an error state.
    fn is_playing(&self) -> bool;
}

/// Scoped subscription to periodic position polling.
///
/// Created with [`PeriodicObserver::subscribe`] and released with
/// [`PeriodicObserver::release`], which consumes the handle so it cannot be
/// released twice.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle leaks the repeating timer; call release()"]
pub struct PeriodicObserver {
    timer: TimerId,
    interval: Duration,
}

impl PeriodicObserver {
    /// Subscribes a repeating timer at `interval`.
    pub fn subscribe<S: Scheduler + ?Sized>(scheduler: &mut S, interval: Duration) -> Self {
        let timer = scheduler.subscribe_repeating(interval);
        Self { timer, interval }
    }

    /// Timer id delivered each time a position sample is due.
    #[must_use]
    pub fn timer(&self) -> TimerId {
        self.timer
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if `timer` belongs to this subscription.
    #[must_use]
    pub fn owns(&self, timer: TimerId) -> bool {
        self.timer == timer
    }

    /// Cancels the repeating timer.
    pub fn release<S: Scheduler + ?Sized>(self, scheduler: &mut S) {
        scheduler.cancel(self.timer);
    }
}
