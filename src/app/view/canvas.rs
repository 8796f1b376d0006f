// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area: the sheet image with the region overlay.

use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{container, text};

use super::overlay::region_overlay;
use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::fl;

pub fn view<'a>(model: &'a AppModel) -> Element<'a, AppMessage> {
    let Some(sheet) = &model.sheet else {
        return container(text(fl!("no-image")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    };

    let (width, height) = sheet.dimensions();

    let image = cosmic::widget::image(sheet.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = region_overlay(
        width,
        height,
        &model.regions,
        model.selected,
        model.drag.map(|d| d.target),
    );

    // Overlay last so it is drawn on top and sees pointer events first.
    stack![image, overlay].into()
}
