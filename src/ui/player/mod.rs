// SPDX-License-Identifier: MPL-2.0
//! Player control screen.
//!
//! - [`PlayerControls`]: the state machine behind the overlay
//! - [`ControlsState`]: what the overlay renders
//! - [`view`]: the `iced` layout of the overlay

mod controller;
mod icons;
mod state;
mod view;
mod visibility;

pub use controller::{ControlSettings, Message, PlayerControls};
pub use icons::ControlIcon;
pub use state::ControlsState;
pub use view::{view, ViewContext};
pub use visibility::{ControlsVisibility, OverlayElements};
