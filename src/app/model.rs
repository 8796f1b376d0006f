// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use crate::app::region::{DragTarget, RegionId, RegionSet};
use crate::app::sheet::SheetImage;
use crate::fl;

/// An in-flight drag on a band edge or interior.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub target: DragTarget,
    /// Image-space coordinate along the drag axis at press time.
    pub grab: f32,
    /// The target interval's endpoints at press time.
    pub origin: (f32, f32),
}

pub struct AppModel {
    // Session.
    pub sheet: Option<SheetImage>,
    pub regions: RegionSet,

    // Editor state.
    pub selected: Option<RegionId>,
    pub drag: Option<DragState>,

    // UI state.
    pub notice: Option<String>,
    pub status: String,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            sheet: None,
            regions: RegionSet::default(),
            selected: None,
            drag: None,
            notice: None,
            status: fl!("status-ready"),
        }
    }

    /// Raise a modal notice; the window stays usable behind it.
    pub fn set_notice<S: Into<String>>(&mut self, msg: S) {
        self.notice = Some(msg.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Replace the session image and reset everything derived from it.
    pub fn install_sheet(&mut self, sheet: SheetImage) {
        self.sheet = Some(sheet);
        self.regions.reset();
        self.selected = None;
        self.drag = None;
    }
}
