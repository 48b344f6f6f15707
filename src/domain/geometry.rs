// SPDX-License-Identifier: MPL-2.0
//! Geometry value objects.
//!
//! Framework-independent 2D types used by the interaction core: the drag
//! [`Offset`], viewport [`Size`] and safe-area [`Insets`], and the
//! [`GeometryContext`] a host supplies for the current layout pass.

use std::ops::{Add, Mul, Neg, Sub};

// =============================================================================
// Offset
// =============================================================================

/// A 2D displacement, in layout units.
///
/// Used for the image's visual displacement from rest as well as for raw
/// and predicted drag translations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Unit vector with the same direction, or [`Offset::ZERO`] for a
    /// zero-length input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= f32::EPSILON {
            return Self::ZERO;
        }
        Self::new(self.dx / magnitude, self.dy / magnitude)
    }

    /// Returns whichever of `self` and `other` is longer.
    ///
    /// Ties keep `self`.
    #[must_use]
    pub fn longest(self, other: Self) -> Self {
        if other.magnitude() > self.magnitude() {
            other
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f32> for Offset {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

// =============================================================================
// Point / Size / Insets / Rect
// =============================================================================

/// A location in the viewer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` for a degenerate size.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.width <= 0.0 || self.height <= 0.0 {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The smaller of the two dimensions.
    #[must_use]
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    /// Largest size with the given aspect ratio that fits inside `self`.
    #[must_use]
    pub fn fit_aspect(self, aspect_ratio: f32) -> Self {
        if self.is_empty() || aspect_ratio <= 0.0 {
            return Self::default();
        }
        let width_limited = Self::new(self.width, self.width / aspect_ratio);
        if width_limited.height <= self.height {
            width_limited
        } else {
            Self::new(self.height * aspect_ratio, self.height)
        }
    }
}

/// Safe-area insets reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f32 {
        self.leading + self.trailing
    }

    #[must_use]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Rectangle grown by `amount` on every side.
    #[must_use]
    pub fn expand(self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

// =============================================================================
// GeometryContext
// =============================================================================

/// Viewport size and safe-area insets for the current layout.
///
/// Read-only input from the host; the viewer never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryContext {
    /// Size of the safe area the viewer is laid out in.
    pub size: Size,
    /// Insets between the safe area and the physical screen edges.
    pub safe_area: Insets,
}

impl GeometryContext {
    #[must_use]
    pub const fn new(size: Size, safe_area: Insets) -> Self {
        Self { size, safe_area }
    }

    /// The whole screen, safe area included. The image ignores the safe area.
    #[must_use]
    pub fn full_bleed(self) -> Rect {
        Rect::new(
            -self.safe_area.leading,
            -self.safe_area.top,
            self.size.width + self.safe_area.horizontal(),
            self.size.height + self.safe_area.vertical(),
        )
    }

    /// Frame the image occupies at rest: aspect-fit into the full-bleed
    /// area and centred. Doubles as the drag hit area.
    #[must_use]
    pub fn content_frame(self, image_size: Size) -> Rect {
        let bleed = self.full_bleed();
        let Some(aspect) = image_size.aspect_ratio() else {
            return Rect::new(bleed.x + bleed.width / 2.0, bleed.y + bleed.height / 2.0, 0.0, 0.0);
        };
        let fitted = bleed.size().fit_aspect(aspect);
        Rect::new(
            bleed.x + (bleed.width - fitted.width) / 2.0,
            bleed.y + (bleed.height - fitted.height) / 2.0,
            fitted.width,
            fitted.height,
        )
    }

    /// Backdrop rectangle: the full-bleed area padded by the larger viewport
    /// dimension so a dragged image never uncovers what lies behind it.
    #[must_use]
    pub fn backdrop_frame(self) -> Rect {
        self.full_bleed()
            .expand(self.size.width.max(self.size.height))
    }
}
