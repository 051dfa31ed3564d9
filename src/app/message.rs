// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::player;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(player::Message),
    /// Wall-clock tick driving the control timers.
    Tick(Instant),
}

/// Runtime flags passed from the launcher.
///
/// Every field overrides the matching `settings.toml` value when set.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub url: Option<String>,
    pub title: Option<String>,
    /// Media length in seconds, for engines that do not report it.
    pub duration_secs: Option<f64>,
    pub config_dir: Option<PathBuf>,
}
