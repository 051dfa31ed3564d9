// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts the player control screen in an `iced` window.
//!
//! The `App` owns the [`PlayerControls`] and feeds it two kinds of input:
//! overlay messages from the view, and wall-clock ticks that become scheduler
//! time.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::player::{self, ControlSettings, PlayerControls};
use crate::video_player::{create_player, SyncedPlayer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 270;

/// Root application state.
pub struct App {
    controls: PlayerControls<SyncedPlayer>,
    /// Origin of the control scheduler's clock.
    started_at: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("title", &self.controls.state().title)
            .field("visibility", &self.controls.visibility())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let mut app = Self::with_config(&config, &flags);

        if let Some(warning) = config_warning {
            eprintln!("Warning: {warning}");
            app.controls.log_warning(warning);
        }

        (app, Task::none())
    }

    /// Builds the app and attaches the player. Flags win over the config.
    fn with_config(config: &Config, flags: &Flags) -> Self {
        let mut settings = ControlSettings::from_config(config);
        if let Some(title) = &flags.title {
            settings.title.clone_from(title);
        }

        let url = flags.url.as_deref().unwrap_or_else(|| config.media_url());
        let duration = flags.duration_secs.or_else(|| config.media_duration_secs());

        let mut controls = PlayerControls::with_settings(settings);
        controls.attach(create_player(url, duration));

        Self {
            controls,
            started_at: Instant::now(),
        }
    }

    fn title(&self) -> String {
        format!("{} - IcedReel", self.controls.state().title)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(message) => self.controls.update(message),
            Message::Tick(now) => {
                self.controls
                    .advance(now.saturating_duration_since(self.started_at));
                self.report_player_error();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let ctx = player::ViewContext {
            skip_step: self.controls.settings().skip_step,
        };
        player::view(ctx, self.controls.state()).map(Message::Controls)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.controls.settings().poll_interval.as_duration(),
            !self.controls.is_torn_down(),
        )
    }

    /// Surfaces an engine failure once, then forgets it.
    fn report_player_error(&mut self) {
        let Some(error) = self
            .controls
            .player_mut()
            .and_then(SyncedPlayer::take_error_report)
        else {
            return;
        };
        eprintln!("Playback error: {error}");
        self.controls.log_error(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::player::ControlsVisibility;
    use crate::video_player::PlaybackClock;

    #[test]
    fn flags_override_config() {
        let flags = Flags {
            url: Some("https://example.com/other.mp4".to_string()),
            title: Some("Other".to_string()),
            duration_secs: Some(42.0),
            config_dir: None,
        };

        let app = App::with_config(&Config::default(), &flags);

        let player = app.controls.player().expect("player attached");
        assert_eq!(player.url(), "https://example.com/other.mp4");
        assert_eq!(player.duration().secs(), Some(42.0));
        assert_eq!(app.controls.state().title, "Other");
        assert_eq!(app.title(), "Other - IcedReel");
    }

    #[test]
    fn defaults_come_from_config() {
        let app = App::with_config(&Config::default(), &Flags::default());

        let player = app.controls.player().expect("player attached");
        assert_eq!(player.url(), config::DEFAULT_MEDIA_URL);
        assert_eq!(app.controls.state().title, config::DEFAULT_MEDIA_TITLE);
        assert!(player.duration().secs().is_none());
    }

    #[test]
    fn control_messages_reach_the_controller() {
        let mut app = App::with_config(&Config::default(), &Flags::default());

        let _ = app.update(Message::Controls(player::Message::ToggleControls));

        assert_eq!(app.controls.visibility(), ControlsVisibility::Hidden);
    }
}
