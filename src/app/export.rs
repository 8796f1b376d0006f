// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/export.rs
//
// Slice export: sort question bands top to bottom, clamp to the image,
// crop to the width band, and write one PNG per surviving band.

use std::path::{Path, PathBuf};

use image::{RgbImage, imageops};
use thiserror::Error;

use crate::app::region::RegionSet;
use crate::constant::{MIN_SLICE_PX, SLICE_TAG};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no question bands to export")]
    NoRegions,
    #[error("width band narrower than {MIN_SLICE_PX}px after clamping")]
    XRegionTooNarrow,
    #[error("source path {0:?} has no file stem")]
    BadSourcePath(PathBuf),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Outcome of a successful export.
#[derive(Debug)]
pub struct ExportReport {
    /// Number of slice files actually written.
    pub written: usize,
    /// Directory the slices were written to.
    pub out_dir: PathBuf,
}

/// Write one PNG per question band next to the source image.
///
/// Bands are exported in ascending order of their normalized top edge,
/// regardless of creation order; ties keep creation order. Each band is
/// clamped to the image and skipped silently if the clamped height falls
/// below [`MIN_SLICE_PX`]. Surviving bands are numbered contiguously from 1,
/// so a skipped band never leaves a gap in the filenames. A width band, when
/// present, is clamped the same way and applied to every slice; if it ends up
/// narrower than the minimum the whole export is rejected before any file is
/// written. Existing files with colliding names are overwritten.
///
/// The session is never mutated; output file handles are closed before this
/// returns on every path.
pub fn export_slices(
    pixels: &RgbImage,
    source: &Path,
    regions: &RegionSet,
) -> Result<ExportReport, ExportError> {
    if regions.is_empty() {
        return Err(ExportError::NoRegions);
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ExportError::BadSourcePath(source.to_path_buf()))?;
    let out_dir = source.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

    let (width, height) = pixels.dimensions();

    // All-or-nothing: a degenerate width band rejects the export outright.
    let (x1, x2) = match regions.x_region() {
        Some(x) => {
            let (x1, x2) = x.clamped(width);
            if x2 - x1 < MIN_SLICE_PX {
                return Err(ExportError::XRegionTooNarrow);
            }
            (x1, x2)
        }
        None => (0, width),
    };

    let mut ordered: Vec<_> = regions.iter().collect();
    ordered.sort_by(|a, b| {
        let (a_top, _) = a.normalized();
        let (b_top, _) = b.normalized();
        a_top.cmp(&b_top)
    });

    let mut written = 0;
    for region in ordered {
        let (y1, y2) = region.clamped(height);
        if y2 - y1 < MIN_SLICE_PX {
            continue;
        }

        let slice = imageops::crop_imm(pixels, x1, y1, x2 - x1, y2 - y1).to_image();
        let name = format!("{stem}_{SLICE_TAG}_{:02}.png", written + 1);
        slice.save(out_dir.join(name))?;
        written += 1;
    }

    Ok(ExportReport { written, out_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Deterministic gradient so every pixel is distinguishable.
    fn test_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    fn source_in(dir: &Path) -> PathBuf {
        dir.join("sheet.png")
    }

    #[test]
    fn empty_region_set_is_rejected() {
        let img = test_image(100, 100);
        let dir = tempfile::tempdir().unwrap();
        let err = export_slices(&img, &source_in(dir.path()), &RegionSet::default()).unwrap_err();
        assert!(matches!(err, ExportError::NoRegions));
    }

    #[test]
    fn export_order_is_ascending_top_regardless_of_creation_order() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(300.0, 320.0);
        regions.add(100.0, 120.0);
        regions.add(200.0, 220.0);

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 3);

        // slice_01 must be the topmost band (top=100), not the first created.
        let first = image::open(dir.path().join("sheet_slice_01.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(*first.get_pixel(0, 0), *img.get_pixel(0, 100));
        let second = image::open(dir.path().join("sheet_slice_02.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(*second.get_pixel(0, 0), *img.get_pixel(0, 200));
        let third = image::open(dir.path().join("sheet_slice_03.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(*third.get_pixel(0, 0), *img.get_pixel(0, 300));
    }

    #[test]
    fn out_of_range_bounds_are_clamped_not_rejected() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(-50.0, 200.0);

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 1);

        let slice = image::open(dir.path().join("sheet_slice_01.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(slice.dimensions(), (800, 200));
    }

    #[test]
    fn band_below_minimum_height_is_skipped() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(500.0, 503.0);

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 0);
        assert!(!dir.path().join("sheet_slice_01.png").exists());
    }

    #[test]
    fn skipped_band_leaves_no_gap_in_numbering() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(100.0, 200.0);
        regions.add(500.0, 503.0); // degenerate, sits between the others
        regions.add(700.0, 800.0);

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 2);
        assert!(dir.path().join("sheet_slice_01.png").exists());
        assert!(dir.path().join("sheet_slice_02.png").exists());
        assert!(!dir.path().join("sheet_slice_03.png").exists());
    }

    #[test]
    fn narrow_width_band_aborts_the_whole_export() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(100.0, 300.0);
        regions.add(400.0, 600.0);
        regions.toggle_x(800);
        let x = regions.x_region_mut().unwrap();
        x.left = 780.0;
        x.right = 784.0;

        let err = export_slices(&img, &source_in(dir.path()), &regions).unwrap_err();
        assert!(matches!(err, ExportError::XRegionTooNarrow));
        assert!(!dir.path().join("sheet_slice_01.png").exists());
    }

    #[test]
    fn slice_content_matches_the_source_submatrix() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(100.0, 300.0);
        regions.toggle_x(800);
        let x = regions.x_region_mut().unwrap();
        x.left = 50.0;
        x.right = 750.0;

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 1);
        assert_eq!(report.out_dir, dir.path());

        let slice = image::open(dir.path().join("sheet_slice_01.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(slice.dimensions(), (700, 200));
        let expected = imageops::crop_imm(&img, 50, 100, 700, 200).to_image();
        assert_eq!(slice.as_raw(), expected.as_raw());
    }

    #[test]
    fn crossed_endpoints_export_like_sorted_ones() {
        let img = test_image(800, 1000);
        let dir = tempfile::tempdir().unwrap();
        let mut regions = RegionSet::default();
        regions.add(300.0, 100.0);

        let report = export_slices(&img, &source_in(dir.path()), &regions).unwrap();
        assert_eq!(report.written, 1);
        let slice = image::open(dir.path().join("sheet_slice_01.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(slice.dimensions(), (800, 200));
    }
}
