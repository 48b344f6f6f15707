// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults;
use std::time::Duration;

// =============================================================================
// Opacity
// =============================================================================

/// Opacity, guaranteed to be within `[0, 1]`.
///
/// NaN inputs collapse to fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::TRANSPARENT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Magnification bounds.
pub mod zoom_bounds {
    /// Minimum magnification (image fits the screen).
    pub const MIN_SCALE: f32 = 1.0;
    /// Upper limit accepted for the configurable maximum.
    pub const MAX_SCALE_LIMIT: f32 = 10.0;
}

/// Maximum magnification, guaranteed to be within `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new maximum zoom scale, clamping to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(zoom_bounds::MIN_SCALE, zoom_bounds::MAX_SCALE_LIMIT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(defaults::DEFAULT_MAXIMUM_ZOOM_SCALE)
    }
}

// =============================================================================
// AnimationSpeed
// =============================================================================

/// Animation duration bounds, in milliseconds.
pub mod animation_bounds {
    /// Shortest accepted animation.
    pub const MIN_MS: u64 = 0;
    /// Longest accepted animation.
    pub const MAX_MS: u64 = 5_000;
}

/// A transition duration, guaranteed to be at most five seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnimationSpeed(u64);

impl AnimationSpeed {
    /// Creates a new duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self(defaults::DEFAULT_ANIMATION_SPEED_MS)
    }
}

// =============================================================================
// Distance
// =============================================================================

/// A strictly positive, finite length in layout units.
///
/// Used for the dismiss threshold and the fly-off distance, both of which
/// are divisors or direction scales and must never be zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f32);

impl Distance {
    /// Smallest accepted distance.
    pub const MIN: f32 = 1.0;

    /// Creates a new distance, falling back to `fallback` for non-finite
    /// input and clamping to at least [`Distance::MIN`].
    #[must_use]
    pub fn new(value: f32, fallback: f32) -> Self {
        let value = if value.is_finite() { value } else { fallback };
        Self(value.max(Self::MIN))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// Fraction
// =============================================================================

/// A proportion of some reference length, within `[0, 1]`.
///
/// Used for watermark scale and margin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fraction(f32);

impl Fraction {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the fraction to a length.
    #[must_use]
    pub fn of(self, length: f32) -> f32 {
        self.0 * length
    }
}

// =============================================================================
// Tests
// =============================================================================
