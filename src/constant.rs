// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Minimum slice extent in pixels after clamping. A question band shorter than
/// this is skipped at export; a width band narrower than this aborts the export.
pub const MIN_SLICE_PX: u32 = 5;

/// Top of the first auto-added question band (fraction of image height).
pub const FIRST_BAND_TOP: f32 = 0.25;

/// Bottom of the first auto-added question band (fraction of image height).
pub const FIRST_BAND_BOTTOM: f32 = 0.75;

/// Left edge of the default width band (fraction of image width).
pub const X_BAND_LEFT: f32 = 0.10;

/// Right edge of the default width band (fraction of image width).
pub const X_BAND_RIGHT: f32 = 0.90;

/// Filename tag inserted between the source stem and the slice number.
pub const SLICE_TAG: &str = "slice";
