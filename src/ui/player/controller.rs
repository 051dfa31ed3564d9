// SPDX-License-Identifier: MPL-2.0
//! Controller of the transport overlay.
//!
//! [`PlayerControls`] owns the overlay state, the idle countdown and the
//! position poll, and translates user input into calls on the attached
//! [`PlaybackClock`].
//!
//! # Timers
//!
//! Both timers live in the injected [`Scheduler`]. The host pushes time in
//! with [`PlayerControls::advance`], which delivers each due timer through
//! [`Message::Timer`] one at a time:
//!
//! ```text
//!   advance(now) ──▶ pop_due ──▶ Timer(id) ─┬─ observer id ─▶ on_periodic_tick(position)
//!                       ▲                   ├─ idle id ─────▶ on_idle_expire()
//!                       └───────────────────┴─ unknown id ──▶ ignored
//! ```
//!
//! # Guards
//!
//! Nothing here fails. A missing player or an unknown duration turns the
//! affected operation into a no-op, recorded in the diagnostics log when it
//! drops a user request.

use std::time::Duration;

use super::icons::ControlIcon;
use super::state::ControlsState;
use super::visibility::ControlsVisibility;
use crate::config::{Config, TimeLabelMode, DEFAULT_MEDIA_TITLE};
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, PlayerStateEvent, SeekIgnoredReason, UserAction,
};
use crate::domain::video::{normalized_position, MediaDuration, PollInterval, SkipStep};
use crate::error::Result;
use crate::scheduler::{DeadlineScheduler, Scheduler, TimerId};
use crate::ui::state::{IdleTimeout, IdleTimer};
use crate::video_player::{elapsed_label, format_remaining, PeriodicObserver, PlaybackClock};

/// Input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tap on the video surface.
    ToggleControls,
    TogglePlayback,
    SkipForward,
    SkipBackward,
    /// Slider moved to a fraction of the duration.
    SeekTo(f64),
    /// A scheduler timer came due.
    Timer(TimerId),
}

/// Tunables of the control screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSettings {
    pub title: String,
    pub skip_step: SkipStep,
    pub idle_timeout: IdleTimeout,
    pub poll_interval: PollInterval,
    /// Start playback on attach.
    pub autoplay: bool,
    pub time_label: TimeLabelMode,
    pub diagnostics_capacity: BufferCapacity,
}

impl ControlSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.media_title().to_string(),
            skip_step: config.skip_step(),
            idle_timeout: config.idle_timeout(),
            poll_interval: config.poll_interval(),
            autoplay: config.autoplay(),
            time_label: config.time_label(),
            diagnostics_capacity: config.diagnostics_capacity(),
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_MEDIA_TITLE.to_string(),
            skip_step: SkipStep::default(),
            idle_timeout: IdleTimeout::default(),
            poll_interval: PollInterval::default(),
            autoplay: true,
            time_label: TimeLabelMode::default(),
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}

/// State machine behind the control overlay.
pub struct PlayerControls<P, S = DeadlineScheduler>
where
    P: PlaybackClock,
    S: Scheduler,
{
    settings: ControlSettings,
    state: ControlsState,
    scheduler: S,
    player: Option<P>,
    observer: Option<PeriodicObserver>,
    idle: IdleTimer,
    diagnostics: DiagnosticsCollector,
    torn_down: bool,
}

impl<P: PlaybackClock> PlayerControls<P, DeadlineScheduler> {
    /// Controller driven by a fresh [`DeadlineScheduler`].
    #[must_use]
    pub fn with_settings(settings: ControlSettings) -> Self {
        Self::new(settings, DeadlineScheduler::new())
    }
}

impl<P, S> PlayerControls<P, S>
where
    P: PlaybackClock,
    S: Scheduler,
{
    /// Creates a controller with no player attached.
    #[must_use]
    pub fn new(settings: ControlSettings, scheduler: S) -> Self {
        Self {
            state: ControlsState::new(settings.title.clone(), settings.time_label),
            idle: IdleTimer::new(settings.idle_timeout),
            diagnostics: DiagnosticsCollector::new(settings.diagnostics_capacity),
            settings,
            scheduler,
            player: None,
            observer: None,
            torn_down: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Screen setup: takes the player, starts position polling, arms the idle
    /// timer and, with autoplay, starts playback.
    ///
    /// Attaching over an existing player releases the previous poll first.
    pub fn attach(&mut self, player: P) {
        if let Some(observer) = self.observer.take() {
            observer.release(&mut self.scheduler);
        }

        self.player = Some(player);
        self.torn_down = false;
        self.observer = Some(PeriodicObserver::subscribe(
            &mut self.scheduler,
            self.settings.poll_interval.as_duration(),
        ));
        self.idle.arm(&mut self.scheduler);
        self.log_state(PlayerStateEvent::PlayerAttached);

        if self.settings.autoplay {
            self.toggle_playback();
        }
    }

    /// Cancels the idle timer and releases the position poll.
    ///
    /// Idempotent. Timer ids that come due afterwards are ignored, so no late
    /// callback can change the state.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        self.idle.cancel(&mut self.scheduler);
        if let Some(observer) = self.observer.take() {
            observer.release(&mut self.scheduler);
        }
        self.log_state(PlayerStateEvent::TornDown);
    }

    /// Tears down and hands the player back.
    pub fn detach(&mut self) -> Option<P> {
        self.teardown();
        self.player.take()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches one message. Everything is ignored after teardown.
    pub fn update(&mut self, message: Message) {
        if self.torn_down {
            return;
        }
        match message {
            Message::ToggleControls => self.on_tap(),
            Message::TogglePlayback => self.on_play_pause_tapped(),
            Message::SkipForward => self.on_forward_tapped(),
            Message::SkipBackward => self.on_backward_tapped(),
            Message::SeekTo(value) => self.on_slider_dragged(value),
            Message::Timer(id) => self.on_timer(id),
        }
    }

    /// Moves the scheduler clock to `now`, delivering every due timer in
    /// order.
    ///
    /// Timers are popped one at a time, so a cancel issued while handling one
    /// timer suppresses any later one in the same batch.
    pub fn advance(&mut self, now: Duration) {
        while let Some(id) = self.scheduler.pop_due(now) {
            self.update(Message::Timer(id));
        }
    }

    fn on_timer(&mut self, id: TimerId) {
        if self.observer.as_ref().is_some_and(|o| o.owns(id)) {
            let Some(position) = self.player.as_ref().map(P::current_position) else {
                return;
            };
            self.on_periodic_tick(position);
        } else if self.idle.on_fired(id) {
            self.on_idle_expire();
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Flips overlay visibility and restarts the idle countdown.
    pub fn on_tap(&mut self) {
        if self.torn_down {
            return;
        }
        self.state.visibility = self.state.visibility.toggled();
        self.idle.arm(&mut self.scheduler);
        self.log_action(UserAction::ToggleControls, None);
    }

    /// Hides the overlay. Idempotent.
    pub fn on_idle_expire(&mut self) {
        if self.torn_down || self.state.visibility == ControlsVisibility::Hidden {
            return;
        }
        self.state.visibility = ControlsVisibility::Hidden;
        self.log_state(PlayerStateEvent::ControlsHidden);
    }

    /// Pauses a playing player, plays a paused one. Leaves visibility and the
    /// idle timer alone.
    pub fn on_play_pause_tapped(&mut self) {
        if self.torn_down {
            return;
        }
        if self.toggle_playback() {
            self.log_action(UserAction::TogglePlayback, None);
        }
    }

    pub fn on_forward_tapped(&mut self) {
        if self.torn_down {
            return;
        }
        self.skip(self.settings.skip_step.value(), UserAction::SkipForward);
    }

    pub fn on_backward_tapped(&mut self) {
        if self.torn_down {
            return;
        }
        self.skip(-self.settings.skip_step.value(), UserAction::SkipBackward);
    }

    /// Seeks to `value` times the duration.
    ///
    /// Ignored until the duration is known. `value` is clamped to `[0, 1]`;
    /// NaN and infinities are dropped.
    pub fn on_slider_dragged(&mut self, value: f64) {
        if self.torn_down {
            return;
        }
        if !value.is_finite() {
            self.log_state(PlayerStateEvent::SeekIgnored {
                reason: SeekIgnoredReason::NonFiniteValue,
            });
            return;
        }

        let Some(player) = self.player.as_mut() else {
            self.log_state(PlayerStateEvent::SeekIgnored {
                reason: SeekIgnoredReason::NoPlayer,
            });
            return;
        };

        let Some(duration) = player.duration().secs() else {
            self.log_state(PlayerStateEvent::SeekIgnored {
                reason: SeekIgnoredReason::UnknownDuration,
            });
            return;
        };

        let target = value.clamp(0.0, 1.0) * duration;
        player.seek(target);
        self.log_action(
            UserAction::SeekVideo {
                position_secs: target,
            },
            None,
        );
    }

    /// Recomputes slider and labels from a position sample.
    ///
    /// With an unknown duration only the elapsed label changes.
    pub fn on_periodic_tick(&mut self, position: f64) {
        if self.torn_down {
            return;
        }

        match self.duration().secs() {
            Some(duration) => {
                self.state.slider_value = normalized_position(position, duration);
                self.state.remaining = format_remaining(duration - position);
                if let Some(label) = elapsed_label(position) {
                    self.state.elapsed_label = label;
                }
            }
            None => {
                if let Some(label) = elapsed_label(position) {
                    self.state.elapsed_label = label;
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &ControlsState {
        &self.state
    }

    #[must_use]
    pub fn visibility(&self) -> ControlsVisibility {
        self.state.visibility
    }

    #[must_use]
    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    #[must_use]
    pub fn player(&self) -> Option<&P> {
        self.player.as_ref()
    }

    /// Mutable access for the engine side (metadata, errors).
    pub fn player_mut(&mut self) -> Option<&mut P> {
        self.player.as_mut()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn idle_timer(&self) -> &IdleTimer {
        &self.idle
    }

    /// Id of the position poll, while subscribed.
    #[must_use]
    pub fn poll_timer(&self) -> Option<TimerId> {
        self.observer.as_ref().map(PeriodicObserver::timer)
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Records a non-fatal issue raised outside the controller.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        let now = self.scheduler.now();
        self.diagnostics.log_warning(message, now);
    }

    /// Records an engine failure raised outside the controller.
    pub fn log_error(&mut self, message: impl Into<String>) {
        let now = self.scheduler.now();
        self.diagnostics.log_error(message, now);
    }

    /// Exports the diagnostics log as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_diagnostics(&self) -> Result<String> {
        self.diagnostics.export_json(self.scheduler.now())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn duration(&self) -> MediaDuration {
        self.player
            .as_ref()
            .map_or(MediaDuration::Unknown, P::duration)
    }

    /// Returns false when no player is attached. The icon follows what the
    /// player reports afterwards, not what was requested.
    fn toggle_playback(&mut self) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };

        if player.is_playing() {
            player.pause();
        } else {
            player.play();
        }
        self.state.play_icon = if player.is_playing() {
            ControlIcon::Pause
        } else {
            ControlIcon::Play
        };
        true
    }

    fn skip(&mut self, delta: f64, action: UserAction) {
        let Some(player) = self.player.as_mut() else {
            self.log_state(PlayerStateEvent::SeekIgnored {
                reason: SeekIgnoredReason::NoPlayer,
            });
            return;
        };

        let target = player.current_position() + delta;
        let target = match player.duration().secs() {
            Some(duration) => target.clamp(0.0, duration),
            None => target.max(0.0),
        };
        player.seek(target);
        self.log_action(action, Some(format!("target={target:.3}s")));
    }

    fn log_action(&mut self, action: UserAction, details: Option<String>) {
        let now = self.scheduler.now();
        self.diagnostics.log_action_with_details(action, details, now);
    }

    fn log_state(&mut self, state: PlayerStateEvent) {
        let now = self.scheduler.now();
        self.diagnostics.log_state(state, now);
    }
}

impl<P, S> Drop for PlayerControls<P, S>
where
    P: PlaybackClock,
    S: Scheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
