// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/sheet.rs
//
// The loaded sheet image: decoded pixels plus a cached display handle.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{DynamicImage, ImageReader, RgbImage};

/// Re-export the image handle type used for rendering.
pub type ImageHandle = cosmic::iced::widget::image::Handle;

/// A scanned question sheet.
///
/// Pixels are normalized to 3-channel RGB regardless of the source format;
/// alpha and grayscale inputs are converted on load. The handle is rebuilt
/// only when a new image replaces the session, so cloning it per frame is
/// cheap.
pub struct SheetImage {
    pixels: RgbImage,
    pub handle: ImageHandle,
    path: PathBuf,
}

impl SheetImage {
    /// Load and normalize a sheet image from disk.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let decoded = ImageReader::open(path)
            .with_context(|| format!("opening {}", path.display()))?
            .decode()
            .with_context(|| format!("decoding {}", path.display()))?;
        let pixels = decoded.to_rgb8();
        let handle = create_image_handle(&pixels);

        Ok(Self {
            pixels,
            handle,
            path: path.to_path_buf(),
        })
    }

    /// Native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Create an iced image handle from the decoded pixels.
fn create_image_handle(pixels: &RgbImage) -> ImageHandle {
    let (w, h) = pixels.dimensions();
    let rgba = DynamicImage::ImageRgb8(pixels.clone()).to_rgba8();
    ImageHandle::from_rgba(w, h, rgba.into_raw())
}
