// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Top-level layout: canvas on the left, band list on the right.

pub mod canvas;
pub mod overlay;
pub mod sidebar;

use cosmic::Element;
use cosmic::iced_widget::row;

use crate::app::message::AppMessage;
use crate::app::model::AppModel;

pub fn view<'a>(model: &'a AppModel) -> Element<'a, AppMessage> {
    row![canvas::view(model), sidebar::view(model)].into()
}
