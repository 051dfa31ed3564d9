// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: how many player events the in-memory log retains

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
