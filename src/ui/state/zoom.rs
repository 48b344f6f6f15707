// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module tracks the image magnification driven by pinch and
//! double-tap gestures, including:
//! - Current magnification factor
//! - Zoom category (at minimum vs zoomed in)
//! - Whether a pinch is in progress

use crate::domain::ui::newtypes::{zoom_bounds, ZoomScale};

/// Magnification below which a released pinch settles back to minimum.
const MIN_SNAP_TOLERANCE: f32 = 0.01;

/// Zoom category as seen by the dismiss gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomLevel {
    /// Image fits the screen; drags dismiss.
    Min,
    /// Image is magnified by the given factor; drags pan.
    ZoomedIn(f32),
}

/// Manages all zoom-related state for the image viewer
#[derive(Debug, Clone)]
pub struct ZoomState {
    /// Current magnification factor, within `[1, maximum]`.
    scale: f32,
    /// Upper bound for `scale`.
    maximum: ZoomScale,
    /// Scale at the start of the active pinch.
    pinch_origin: Option<f32>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomScale::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(maximum: ZoomScale) -> Self {
        Self {
            scale: zoom_bounds::MIN_SCALE,
            maximum,
            pinch_origin: None,
        }
    }

    /// Current magnification factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn maximum(&self) -> ZoomScale {
        self.maximum
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        if self.scale <= zoom_bounds::MIN_SCALE {
            ZoomLevel::Min
        } else {
            ZoomLevel::ZoomedIn(self.scale)
        }
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.level() == ZoomLevel::Min
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch_origin.is_some()
    }

    /// Starts a pinch from the current scale.
    pub fn begin_pinch(&mut self) {
        self.pinch_origin = Some(self.scale);
    }

    /// Applies the cumulative pinch `factor` relative to the pinch start.
    ///
    /// Returns `false` when no pinch is active.
    pub fn pinch(&mut self, factor: f32) -> bool {
        let Some(origin) = self.pinch_origin else {
            return false;
        };
        if factor.is_finite() && factor > 0.0 {
            self.set_scale(origin * factor);
        }
        true
    }

    /// Ends the pinch, settling near-minimum scales to exactly minimum.
    pub fn end_pinch(&mut self) {
        self.pinch_origin = None;
        if self.scale - zoom_bounds::MIN_SCALE < MIN_SNAP_TOLERANCE {
            self.scale = zoom_bounds::MIN_SCALE;
        }
    }

    /// Double-tap behaviour: zoom to maximum from minimum, otherwise back to minimum.
    pub fn toggle(&mut self) {
        self.pinch_origin = None;
        if self.is_min() {
            self.scale = self.maximum.value();
        } else {
            self.scale = zoom_bounds::MIN_SCALE;
        }
    }

    /// Returns to minimum zoom and abandons any pinch.
    pub fn reset(&mut self) {
        self.scale = zoom_bounds::MIN_SCALE;
        self.pinch_origin = None;
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(zoom_bounds::MIN_SCALE, self.maximum.value());
    }
}
