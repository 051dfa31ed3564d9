// SPDX-License-Identifier: MPL-2.0
//! Wall-clock playback adapter.
//!
//! [`SyncedPlayer`] implements [`PlaybackClock`] for engines that only report
//! discrete facts (metadata loaded, playback failed) and leave position
//! tracking to the caller. While playing, the position is interpolated from
//! the wall clock since the last play/seek; while paused it is frozen.
//!
//! # Timeline
//!
//! ```text
//!  play()          seek(40)             pause()
//!    │  position = anchor_pos + elapsed    │
//!    ▼──────────────────▶ ▼───────────────▶▼ frozen
//!  anchor=(t0, 0)       anchor=(t1, 40)
//! ```
//!
//! Reaching the end of the media behaves like a pause pinned at the
//! duration: the rate reads zero, a seek moves the frozen playhead without
//! resuming, and `play()` restarts from the beginning.
//!
//! Every method has an `_at` variant taking the current `Instant`, which is
//! what the tests drive.

use super::clock::PlaybackClock;
use crate::domain::video::MediaDuration;
use crate::error::PlaybackError;
use std::time::Instant;

/// Rate applied while playing.
const NORMAL_RATE: f64 = 1.0;

/// Playback position tracker for a single media URL.
#[derive(Debug, Clone)]
pub struct SyncedPlayer {
    url: String,

    /// Position at `anchor`, or the frozen position when paused.
    position_secs: f64,

    /// Wall-clock instant the current play segment started. `None` when paused.
    anchor: Option<Instant>,

    rate: f64,

    duration: MediaDuration,

    error: Option<PlaybackError>,

    /// Set once the recorded error has been handed out for reporting.
    error_reported: bool,
}

impl SyncedPlayer {
    /// Creates a paused player at position zero with unknown duration.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            position_secs: 0.0,
            anchor: None,
            rate: 0.0,
            duration: MediaDuration::Unknown,
            error: None,
            error_reported: false,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Records the duration once the engine has loaded the media metadata.
    pub fn set_duration(&mut self, duration: MediaDuration) {
        self.duration = duration;
    }

    /// Puts the player in the error state. Playback stops at the current
    /// position and `is_playing` reports false from now on.
    pub fn fail(&mut self, error: PlaybackError) {
        self.fail_at(error, Instant::now());
    }

    pub fn fail_at(&mut self, error: PlaybackError, now: Instant) {
        self.freeze(now);
        self.error = Some(error);
        self.error_reported = false;
    }

    #[must_use]
    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    /// Returns the recorded error the first time it is asked for, then `None`.
    pub fn take_error_report(&mut self) -> Option<PlaybackError> {
        if self.error_reported {
            return None;
        }
        let error = self.error.clone()?;
        self.error_reported = true;
        Some(error)
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate_at(Instant::now())
    }

    /// Playback rate, zero once the end has been reached.
    #[must_use]
    pub fn rate_at(&self, now: Instant) -> f64 {
        if self.reached_end(now) {
            0.0
        } else {
            self.rate
        }
    }

    /// Starts playback. At the end of the media, playback restarts from zero.
    pub fn play_at(&mut self, now: Instant) {
        if self.error.is_some() {
            return;
        }
        if self.reached_end(now) {
            self.freeze(now);
        }
        if self.anchor.is_some() {
            return;
        }
        if self.is_at_end(self.position_secs) {
            self.position_secs = 0.0;
        }
        self.anchor = Some(now);
        self.rate = NORMAL_RATE;
    }

    pub fn pause_at(&mut self, now: Instant) {
        self.freeze(now);
    }

    /// Moves the playhead, clamped to the media bounds.
    ///
    /// A playing player keeps playing from the new position.
    pub fn seek_at(&mut self, to_secs: f64, now: Instant) {
        if !to_secs.is_finite() {
            return;
        }
        if self.reached_end(now) {
            self.freeze(now);
        }
        self.position_secs = self.clamp(to_secs);
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
    }

    #[must_use]
    pub fn current_position_at(&self, now: Instant) -> f64 {
        match self.anchor {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start).as_secs_f64();
                self.clamp(self.position_secs + elapsed * self.rate)
            }
            None => self.position_secs,
        }
    }

    /// True while the rate is nonzero, no error was recorded and the end of
    /// the media has not been reached.
    #[must_use]
    pub fn is_playing_at(&self, now: Instant) -> bool {
        self.anchor.is_some() && self.error.is_none() && self.rate_at(now) != 0.0
    }

    /// True while a play segment is running but the playhead sits at the end.
    fn reached_end(&self, now: Instant) -> bool {
        self.anchor.is_some() && self.is_at_end(self.current_position_at(now))
    }

    fn is_at_end(&self, secs: f64) -> bool {
        self.duration.secs().is_some_and(|duration| secs >= duration)
    }

    fn freeze(&mut self, now: Instant) {
        self.position_secs = self.current_position_at(now);
        self.anchor = None;
        self.rate = 0.0;
    }

    fn clamp(&self, secs: f64) -> f64 {
        match self.duration.secs() {
            Some(duration) => secs.clamp(0.0, duration),
            None => secs.max(0.0),
        }
    }
}

impl PlaybackClock for SyncedPlayer {
    fn current_position(&self) -> f64 {
        self.current_position_at(Instant::now())
    }

    fn duration(&self) -> MediaDuration {
        self.duration
    }

    fn seek(&mut self, to_secs: f64) {
        self.seek_at(to_secs, Instant::now());
    }

    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn is_playing(&self) -> bool {
        self.is_playing_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const URL: &str = "https://example.com/clip.mp4";

    fn after(start: Instant, secs: f64) -> Instant {
        start + Duration::from_secs_f64(secs)
    }

    #[test]
    fn new_player_is_paused_at_zero() {
        let player = SyncedPlayer::new(URL);
        assert_eq!(player.url(), URL);
        assert_eq!(player.current_position(), 0.0);
        assert_eq!(player.duration(), MediaDuration::Unknown);
        assert!(!player.is_playing());
    }

    #[test]
    fn position_advances_while_playing() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.play_at(t0);

        assert!(player.is_playing_at(after(t0, 1.0)));
        assert!((player.current_position_at(after(t0, 2.5)) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn pause_preserves_position() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.play_at(t0);
        player.pause_at(after(t0, 3.0));

        assert!(!player.is_playing_at(after(t0, 4.0)));
        assert!((player.current_position_at(after(t0, 10.0)) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn seek_while_playing_keeps_playing_from_target() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(100.0));
        player.play_at(t0);
        player.seek_at(40.0, after(t0, 1.0));

        assert!((player.current_position_at(after(t0, 3.0)) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn seek_clamps_to_media_bounds() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.seek_at(-5.0, t0);
        assert_eq!(player.current_position_at(t0), 0.0);

        player.set_duration(MediaDuration::from_secs(60.0));
        player.seek_at(75.0, t0);
        assert_eq!(player.current_position_at(t0), 60.0);
    }

    #[test]
    fn seek_ignores_non_finite_target() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.seek_at(12.0, t0);
        player.seek_at(f64::NAN, t0);
        assert_eq!(player.current_position_at(t0), 12.0);
    }

    #[test]
    fn playback_stops_reporting_playing_at_end() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(5.0));
        player.play_at(t0);

        assert!(player.is_playing_at(after(t0, 4.0)));
        assert!(!player.is_playing_at(after(t0, 6.0)));
        assert_eq!(player.current_position_at(after(t0, 6.0)), 5.0);
    }

    #[test]
    fn reaching_the_end_stops_the_clock() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(5.0));
        player.play_at(t0);

        assert_eq!(player.rate_at(after(t0, 4.0)), 1.0);
        assert_eq!(player.rate_at(after(t0, 6.0)), 0.0);
    }

    #[test]
    fn seek_after_end_does_not_resume_playback() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(5.0));
        player.play_at(t0);

        player.seek_at(1.0, after(t0, 8.0));

        assert!(!player.is_playing_at(after(t0, 10.0)));
        assert_eq!(player.current_position_at(after(t0, 10.0)), 1.0);
        assert_eq!(player.rate_at(after(t0, 10.0)), 0.0);
    }

    #[test]
    fn play_at_end_restarts_from_the_beginning() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(5.0));
        player.play_at(t0);

        player.play_at(after(t0, 6.0));

        assert!(player.is_playing_at(after(t0, 7.0)));
        assert!((player.current_position_at(after(t0, 7.0)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn play_from_paused_end_restarts_from_the_beginning() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.set_duration(MediaDuration::from_secs(60.0));
        player.seek_at(60.0, t0);

        player.play_at(t0);

        assert!(player.is_playing_at(after(t0, 2.0)));
        assert!((player.current_position_at(after(t0, 2.0)) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn failed_player_never_reports_playing() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.play_at(t0);
        player.fail_at(PlaybackError::Network("offline".into()), after(t0, 2.0));

        assert!(!player.is_playing_at(after(t0, 3.0)));
        assert!((player.current_position_at(after(t0, 3.0)) - 2.0).abs() < 1e-9);

        player.play_at(after(t0, 4.0));
        assert!(!player.is_playing_at(after(t0, 5.0)));
        assert!(player.error().is_some());
    }

    #[test]
    fn error_is_reported_once() {
        let mut player = SyncedPlayer::new(URL);
        assert_eq!(player.take_error_report(), None);

        player.fail(PlaybackError::from_message("connection reset"));

        assert!(matches!(
            player.take_error_report(),
            Some(PlaybackError::Network(_))
        ));
        assert_eq!(player.take_error_report(), None);
        assert!(player.error().is_some());
    }

    #[test]
    fn play_twice_does_not_reset_anchor() {
        let t0 = Instant::now();
        let mut player = SyncedPlayer::new(URL);
        player.play_at(t0);
        player.play_at(after(t0, 2.0));

        assert!((player.current_position_at(after(t0, 3.0)) - 3.0).abs() < 1e-9);
        assert_eq!(player.rate(), 1.0);
    }
}
