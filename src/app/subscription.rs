// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks at the position poll interval while the controls are live.
///
/// Each tick pushes wall-clock time into the control scheduler; nothing
/// fires in between, so the poll interval is also the tick resolution.
pub fn create_tick_subscription(interval: Duration, active: bool) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
