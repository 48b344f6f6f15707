// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains state that outlives a single gesture, separated
//! from the viewer orchestrator.

pub mod zoom;

// Re-export commonly used types for convenience
pub use zoom::{ZoomLevel, ZoomState};
