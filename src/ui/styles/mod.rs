// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the viewer overlay.

pub mod button;

pub use button::{ButtonAppearance, ButtonStatus, ButtonStyle, CloseButtonStyle};
