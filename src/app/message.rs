// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: the named user commands and overlay drag signals.

use std::path::PathBuf;

use crate::app::region::{DragTarget, RegionId};

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File handling.
    OpenImage,
    OpenPath(PathBuf),

    // Region commands.
    AddYRegion,
    ToggleXRegion,
    SelectRegion(Option<RegionId>),
    DeleteSelected,
    ClearAll,

    // Export.
    Save,

    // Overlay drags (coordinates are image-space pixels).
    RegionDragStart { target: DragTarget, x: f32, y: f32 },
    RegionDragMove { x: f32, y: f32 },
    RegionDragEnd,

    // Notices.
    DismissNotice,
}
