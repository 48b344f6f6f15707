// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the viewer overlay.
//!
//! Colors are straight-alpha RGBA8 so hosts can hand them to any renderer.

use image_rs::Rgba;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Rgba;

    pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const GRAY_700: Rgba<u8> = Rgba([77, 77, 77, 255]);
    pub const GRAY_200: Rgba<u8> = Rgba([191, 191, 191, 255]);

    /// Backdrop behind the full-screen image.
    pub const BACKDROP: Rgba<u8> = BLACK;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing and Sizing
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Glyph size of the overlay symbols.
    pub const ICON_LG: f32 = 32.0;
    /// Minimum touch target.
    pub const HIT_TARGET: f32 = 44.0;
}
