// SPDX-License-Identifier: MPL-2.0
//! Playback side of the control screen.
//!
//! The media engine itself (decoding, networking, rendering) is external;
//! this module holds the port the overlay talks to, the wall-clock adapter
//! used by the application and the time formatting shown in the overlay.

mod clock;
mod sync;
pub mod time_format;

pub use clock::{PeriodicObserver, PlaybackClock};
pub use sync::SyncedPlayer;
pub use time_format::{elapsed_label, format_elapsed, format_remaining, RemainingTime};

/// Creates the player for the given media URL with an optional known duration.
pub fn create_player(url: &str, duration_secs: Option<f64>) -> SyncedPlayer {
    let mut player = SyncedPlayer::new(url);
    player.set_duration(duration_secs.into());
    player
}
