// SPDX-License-Identifier: MPL-2.0
//! Image data, watermark compositing and the share hand-off.

pub mod image;
pub mod share;
pub mod watermark;

pub use image::{load_image, save_png, ImageData};
pub use share::{PngExportSurface, ShareSurface};
pub use watermark::{composite, watermark_frame};
