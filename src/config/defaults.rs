// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Transition durations
//! - **Dismiss**: Flick-to-dismiss gesture tuning
//! - **Zoom**: Magnification limits
//! - **Watermark**: Share watermark placement

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the appear fade and the fly-off, in milliseconds.
pub const DEFAULT_ANIMATION_SPEED_MS: u64 = 400;

/// Duration of the snap-back after a cancelled dismiss, in milliseconds.
/// Matches the platform's default ease-out duration.
pub const DEFAULT_SNAP_BACK_MS: u64 = 350;

/// Extra delay after the fly-off before the image is cleared, in milliseconds.
pub const DEFAULT_TEARDOWN_DELAY_MS: u64 = 100;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Predicted translation (in layout units) beyond which a drag dismisses.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 200.0;

/// Background opacity reached when the drag is at the dismiss threshold.
pub const DEFAULT_OPACITY_FLOOR: f32 = 0.8;

/// Minimum distance the image travels when flying off-screen.
pub const DEFAULT_DISMISS_DISTANCE: f32 = 1000.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Maximum magnification for pinch and double-tap zoom.
pub const DEFAULT_MAXIMUM_ZOOM_SCALE: f32 = 2.0;

// ==========================================================================
// Watermark Defaults
// ==========================================================================

/// Watermark height as a fraction of the base image's shorter side.
pub const DEFAULT_WATERMARK_SCALE: f32 = 0.10;

/// Margin from the bottom-right corner as a fraction of each dimension.
pub const DEFAULT_WATERMARK_MARGIN: f32 = 0.05;

/// Opacity the watermark is drawn with.
pub const DEFAULT_WATERMARK_ALPHA: f32 = 0.5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Dismiss validation
    assert!(DEFAULT_DISMISS_THRESHOLD > 0.0);
    assert!(DEFAULT_DISMISS_DISTANCE > DEFAULT_DISMISS_THRESHOLD);
    assert!(DEFAULT_OPACITY_FLOOR >= 0.0);
    assert!(DEFAULT_OPACITY_FLOOR <= 1.0);

    // Zoom validation
    assert!(DEFAULT_MAXIMUM_ZOOM_SCALE >= 1.0);

    // Watermark validation
    assert!(DEFAULT_WATERMARK_SCALE > 0.0);
    assert!(DEFAULT_WATERMARK_SCALE <= 1.0);
    assert!(DEFAULT_WATERMARK_MARGIN >= 0.0);
    assert!(DEFAULT_WATERMARK_SCALE + DEFAULT_WATERMARK_MARGIN < 1.0);
    assert!(DEFAULT_WATERMARK_ALPHA >= 0.0);
    assert!(DEFAULT_WATERMARK_ALPHA <= 1.0);

    // Animation validation
    assert!(DEFAULT_ANIMATION_SPEED_MS > 0);
};
