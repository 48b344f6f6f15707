// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── dismiss   - Flick-to-dismiss drag decision
//!     └── zoom      - Encapsulates ZoomState
//! ```

pub mod dismiss;
pub mod zoom;
