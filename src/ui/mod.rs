// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! components own a `State`, accept a `Message` and return an `Effect`
//! for the host to carry out. Drawing is left to the host.
//!
//! - [`viewer`] - Full-screen viewer with zoom, flick-to-dismiss and sharing
//! - [`state`] - State that outlives a single gesture (zoom)
//! - [`styles`] - Pluggable button appearance
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod viewer;
