// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a full-screen video player screen built with the Iced GUI
//! framework.
//!
//! The crate holds the control logic of the screen: an auto-hiding
//! transport overlay (play/pause, skip, scrub slider, time label) driven by
//! an injected timer scheduler and a narrow playback clock port. Decoding and
//! networking stay behind that port.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod scheduler;
pub mod ui;
pub mod video_player;
