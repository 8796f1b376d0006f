// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/sidebar.rs
//
// Sidebar: question bands in creation order with live pixel-range labels.

use cosmic::iced::Length;
use cosmic::{Element, theme, widget};

use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::fl;

const SIDEBAR_WIDTH: f32 = 240.0;

pub fn view<'a>(model: &'a AppModel) -> Element<'a, AppMessage> {
    let mut rows = widget::column().spacing(4);

    rows = rows.push(widget::text::heading(fl!("bands")));

    for (region, label) in model.regions.iter().zip(model.regions.labels()) {
        let selected = model.selected == Some(region.id());
        rows = rows.push(
            widget::button::custom(widget::text(label))
                .class(if selected {
                    theme::Button::Suggested
                } else {
                    theme::Button::MenuItem
                })
                .width(Length::Fill)
                .on_press(AppMessage::SelectRegion(Some(region.id()))),
        );
    }

    let actions = widget::column()
        .spacing(4)
        .push(
            widget::button::destructive(fl!("delete-band"))
                .width(Length::Fill)
                .on_press_maybe(model.selected.map(|_| AppMessage::DeleteSelected)),
        )
        .push(
            widget::button::standard(fl!("clear-bands"))
                .width(Length::Fill)
                .on_press(AppMessage::ClearAll),
        );

    widget::container(
        widget::column()
            .spacing(12)
            .push(widget::scrollable(rows).height(Length::Fill))
            .push(actions),
    )
    .padding(8.0)
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .into()
}
