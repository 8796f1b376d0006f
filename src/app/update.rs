// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: each user command is a state transition over the model.

use std::path::Path;

use cosmic::{Action, Task};
use rfd::FileDialog;

use crate::app::SecareApp;
use crate::app::export::{self, ExportError};
use crate::app::message::AppMessage;
use crate::app::model::DragState;
use crate::app::region::{DragTarget, drag_interval};
use crate::app::sheet::SheetImage;
use crate::fl;

pub fn update(app: &mut SecareApp, message: AppMessage) -> Task<Action<AppMessage>> {
    match message {
        AppMessage::OpenImage => {
            let mut picker = FileDialog::new()
                .set_title(fl!("open-image"))
                .add_filter(fl!("image-filter"), &["png", "jpg", "jpeg", "bmp"]);
            if let Some(dir) = &app.config.last_image_dir {
                picker = picker.set_directory(dir);
            }
            // Synchronous by design: the session is single-threaded and the
            // picker blocks the interface until dismissed.
            if let Some(path) = picker.pick_file() {
                open_path(app, &path);
            }
        }

        AppMessage::OpenPath(path) => open_path(app, &path),

        AppMessage::AddYRegion => match &app.model.sheet {
            Some(sheet) => {
                let (_, height) = sheet.dimensions();
                app.model.regions.add_auto(height);
                app.model.status = fl!("status-band-count", count = app.model.regions.len());
            }
            None => app.model.set_notice(fl!("warn-no-image")),
        },

        AppMessage::ToggleXRegion => match &app.model.sheet {
            Some(sheet) => {
                let (width, _) = sheet.dimensions();
                app.model.status = if app.model.regions.toggle_x(width) {
                    fl!("status-x-added")
                } else {
                    fl!("status-x-removed")
                };
            }
            None => app.model.set_notice(fl!("warn-no-image")),
        },

        AppMessage::SelectRegion(selection) => {
            app.model.selected = selection.filter(|id| app.model.regions.get(*id).is_some());
        }

        AppMessage::DeleteSelected => {
            // No selection: nothing to do.
            if let Some(id) = app.model.selected.take() {
                app.model.regions.remove(id);
                app.model.status = fl!("status-band-count", count = app.model.regions.len());
            }
        }

        AppMessage::ClearAll => {
            app.model.regions.clear();
            app.model.selected = None;
            app.model.status = fl!("status-band-count", count = 0usize);
        }

        AppMessage::Save => save_slices(app),

        AppMessage::RegionDragStart { target, x, y } => drag_start(app, target, x, y),
        AppMessage::RegionDragMove { x, y } => drag_move(app, x, y),
        AppMessage::RegionDragEnd => app.model.drag = None,

        AppMessage::DismissNotice => app.model.clear_notice(),
    }

    Task::none()
}

/// Load an image and reset the session around it.
pub fn open_path(app: &mut SecareApp, path: &Path) {
    match SheetImage::open(path) {
        Ok(sheet) => {
            app.model.install_sheet(sheet);
            app.model.status = fl!("status-loaded", path = path.display().to_string());

            if let Some(parent) = path.parent() {
                app.config.last_image_dir = Some(parent.to_path_buf());
                app.save_config();
            }
        }
        Err(e) => {
            log::error!("failed to open {}: {e:#}", path.display());
            app.model
                .set_notice(fl!("error-open-image", error = e.to_string()));
        }
    }
}

fn save_slices(app: &mut SecareApp) {
    let Some(sheet) = &app.model.sheet else {
        app.model.set_notice(fl!("warn-no-image"));
        return;
    };

    match export::export_slices(sheet.pixels(), sheet.path(), &app.model.regions) {
        Ok(report) => {
            let done = fl!(
                "export-done",
                count = report.written,
                dir = report.out_dir.display().to_string()
            );
            app.model.status = done.clone();
            app.model.set_notice(done);
        }
        Err(ExportError::NoRegions) => app.model.set_notice(fl!("warn-no-regions")),
        Err(ExportError::XRegionTooNarrow) => app.model.set_notice(fl!("warn-x-too-narrow")),
        Err(e) => {
            log::error!("export failed: {e}");
            app.model.set_notice(fl!("error-export", error = e.to_string()));
        }
    }
}

fn drag_start(app: &mut SecareApp, target: DragTarget, x: f32, y: f32) {
    // The overlay may race a removal; ignore drags on vanished targets.
    let (grab, origin) = match target {
        DragTarget::Y { id, .. } => {
            let Some(region) = app.model.regions.get(id) else {
                return;
            };
            app.model.selected = Some(id);
            (y, (region.top, region.bottom))
        }
        DragTarget::X { .. } => {
            let Some(x_region) = app.model.regions.x_region() else {
                return;
            };
            (x, (x_region.left, x_region.right))
        }
    };

    app.model.drag = Some(DragState {
        target,
        grab,
        origin,
    });
}

fn drag_move(app: &mut SecareApp, x: f32, y: f32) {
    let Some(drag) = app.model.drag else {
        return;
    };
    let Some(sheet) = &app.model.sheet else {
        return;
    };
    let (width, height) = sheet.dimensions();

    match drag.target {
        DragTarget::Y { id, handle } => {
            let Some(region) = app.model.regions.get_mut(id) else {
                return;
            };
            let (top, bottom) = drag_interval(handle, drag.origin, y - drag.grab, height as f32);
            region.top = top;
            region.bottom = bottom;
        }
        DragTarget::X { handle } => {
            let Some(x_region) = app.model.regions.x_region_mut() else {
                return;
            };
            let (left, right) = drag_interval(handle, drag.origin, x - drag.grab, width as f32);
            x_region.left = left;
            x_region.right = right;
        }
    }
}
