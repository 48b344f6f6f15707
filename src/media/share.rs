// SPDX-License-Identifier: MPL-2.0
//! Hand-off of watermarked images to whatever the host uses for sharing.

use crate::error::{Error, Result};
use crate::media::image::{save_png, ImageData};
use std::path::{Path, PathBuf};

/// Receives an image the user chose to share.
pub trait ShareSurface {
    /// Presents `image` to the user. Errors are reported, not retried.
    fn present(&mut self, image: ImageData) -> Result<()>;
}

/// Share surface that writes each shared image as a numbered PNG.
#[derive(Debug, Clone)]
pub struct PngExportSurface {
    directory: PathBuf,
    exported: Vec<PathBuf>,
}

impl PngExportSurface {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            exported: Vec::new(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Files written so far, oldest first.
    #[must_use]
    pub fn exported(&self) -> &[PathBuf] {
        &self.exported
    }

    fn next_path(&self) -> PathBuf {
        let mut index = self.exported.len() + 1;
        loop {
            let candidate = self.directory.join(format!("shared-{index:04}.png"));
            if !candidate.exists() {
                return candidate;
            }
            index += 1;
        }
    }
}

impl ShareSurface for PngExportSurface {
    fn present(&mut self, image: ImageData) -> Result<()> {
        if image.is_empty() {
            return Err(Error::Share("nothing to share".into()));
        }
        std::fs::create_dir_all(&self.directory)?;
        let path = self.next_path();
        save_png(&image, &path)?;
        tracing::info!(path = %path.display(), "shared image exported");
        self.exported.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::load_image;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn exports_numbered_pngs() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut surface = PngExportSurface::new(temp_dir.path().join("shared"));
        let image = ImageData::from(RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255])));

        surface.present(image.clone()).expect("first share");
        surface.present(image).expect("second share");

        let names: Vec<_> = surface
            .exported()
            .iter()
            .filter_map(|path| path.file_name()?.to_str().map(str::to_owned))
            .collect();
        assert_eq!(names, ["shared-0001.png", "shared-0002.png"]);

        let reloaded = load_image(&surface.exported()[1]).expect("reload");
        assert_eq!((reloaded.width, reloaded.height), (4, 4));
    }

    #[test]
    fn skips_existing_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("shared-0001.png"), b"taken").expect("write");
        let mut surface = PngExportSurface::new(temp_dir.path());
        surface
            .present(ImageData::from(RgbaImage::new(1, 1)))
            .expect("share");
        assert!(surface.exported()[0].ends_with("shared-0002.png"));
    }

    #[test]
    fn empty_image_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut surface = PngExportSurface::new(temp_dir.path());
        let err = surface.present(ImageData::empty()).unwrap_err();
        assert!(matches!(err, Error::Share(_)));
        assert!(surface.exported().is_empty());
    }
}
