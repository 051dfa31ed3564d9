// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`player`] - Transport overlay and its controller
//! - [`state`] - Idle countdown shared by the overlay
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod player;
pub mod state;
pub mod styles;
