// SPDX-License-Identifier: MPL-2.0
//! Time-based property animation.
//!
//! Properties are plain values wrapped in a [`Tween`]. Writing a new target
//! while an animation is running retargets it from the currently sampled
//! value, so transitions can interrupt each other freely and the last write
//! always wins. Time only moves when the host calls `tick`.

pub mod clock;
pub mod easing;
pub mod tween;

pub use clock::FrameClock;
pub use easing::Easing;
pub use tween::{Curve, Interpolate, Tween};
