// SPDX-License-Identifier: MPL-2.0
//! Watermark compositing for shared images.
//!
//! The mark is sized from the base image's shorter side, kept within the
//! same fraction of the base width, and anchored to the bottom-right corner
//! with a margin proportional to each dimension.

use crate::config::WatermarkSettings;
use crate::domain::geometry::{Rect, Size};
use crate::media::image::ImageData;
use tiny_skia::{BlendMode, ColorU8, FilterQuality, Pixmap, PixmapPaint, Transform};

/// Where the mark lands on a base image, in base pixel coordinates.
///
/// Returns `None` when either image has no area.
#[must_use]
pub fn watermark_frame(base: Size, mark: Size, settings: &WatermarkSettings) -> Option<Rect> {
    if base.is_empty() {
        return None;
    }
    let aspect = mark.aspect_ratio()?;

    let mut height = settings.scale.of(base.min_dimension());
    let mut width = height * aspect;
    let max_width = settings.scale.of(base.width);
    if width > max_width {
        width = max_width;
        height = width / aspect;
    }

    Some(Rect::new(
        base.width - width - settings.margin.of(base.width),
        base.height - height - settings.margin.of(base.height),
        width,
        height,
    ))
}

/// Draws `mark` over `base` at the configured size, position and alpha.
///
/// A missing or empty mark yields an unchanged copy of `base`.
///
/// # Panics
///
/// Panics if a rendering surface the size of `base` cannot be allocated.
#[must_use]
pub fn composite(base: &ImageData, mark: Option<&ImageData>, settings: &WatermarkSettings) -> ImageData {
    let Some(mark) = mark.filter(|mark| !mark.is_empty()) else {
        return base.clone();
    };
    let Some(frame) = watermark_frame(base.size(), mark.size(), settings) else {
        return base.clone();
    };

    let mut canvas = to_pixmap(base);
    let mark_pixmap = to_pixmap(mark);
    let transform = Transform::from_row(
        frame.width / mark.width as f32,
        0.0,
        0.0,
        frame.height / mark.height as f32,
        frame.x,
        frame.y,
    );
    let paint = PixmapPaint {
        opacity: settings.alpha.value(),
        blend_mode: BlendMode::SourceOver,
        quality: FilterQuality::Bilinear,
    };
    canvas.draw_pixmap(0, 0, mark_pixmap.as_ref(), &paint, transform, None);

    tracing::debug!(
        width = base.width,
        height = base.height,
        ?frame,
        "watermark composited"
    );
    from_pixmap(&canvas)
}

fn to_pixmap(image: &ImageData) -> Pixmap {
    let mut pixmap = Pixmap::new(image.width, image.height).unwrap_or_else(|| {
        panic!(
            "failed to allocate {}x{} rendering surface",
            image.width, image.height
        )
    });
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.rgba_bytes().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    pixmap
}

fn from_pixmap(pixmap: &Pixmap) -> ImageData {
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    ImageData::from_parts(pixmap.width(), pixmap.height(), pixels)
}
