// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependencies beyond `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`video`]: Playback types ([`MediaDuration`](video::MediaDuration),
//!   [`SkipStep`](video::SkipStep), [`PollInterval`](video::PollInterval))

pub mod diagnostics;
pub mod video;
