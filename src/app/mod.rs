// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod export;
pub mod message;
pub mod model;
pub mod region;
pub mod sheet;
pub mod update;
pub mod view;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::window;
use cosmic::{Action, Element, Task, widget};

use self::message::AppMessage;
use self::model::AppModel;
use crate::Args;
use crate::config::AppConfig;
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct SecareApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
}

impl cosmic::Application for SecareApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.wfx.Secare";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_default();
                    (config, Some(handler))
                }
                Err(_) => (AppConfig::default(), None),
            };

        let Flags::Args(args) = flags;

        let mut app = Self {
            core,
            model: AppModel::new(),
            config,
            config_handler,
        };

        // Open the CLI-supplied image, if any.
        if let Some(path) = args.file {
            update::open_path(&mut app, &path);
        }

        (app, Task::none())
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        update::update(self, message)
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            header_button("document-open-symbolic", fl!("open-image"), AppMessage::OpenImage),
            header_button("list-add-symbolic", fl!("add-band"), AppMessage::AddYRegion),
            header_button(
                "object-flip-horizontal-symbolic",
                fl!("toggle-width-band"),
                AppMessage::ToggleXRegion,
            ),
            header_button("document-save-symbolic", fl!("save-slices"), AppMessage::Save),
        ]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        let notice = self.model.notice.as_ref()?;

        Some(
            widget::dialog()
                .title(fl!("notice"))
                .body(notice.clone())
                .primary_action(
                    widget::button::suggested(fl!("ok")).on_press(AppMessage::DismissNotice),
                )
                .into(),
        )
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(
            widget::container(widget::text::caption(self.model.status.clone()))
                .padding([4.0, 12.0])
                .into(),
        )
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl SecareApp {
    /// Save current config to disk.
    pub fn save_config(&self) {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }
    }
}

fn header_button(
    icon: &'static str,
    description: String,
    message: AppMessage,
) -> Element<'static, AppMessage> {
    widget::tooltip(
        widget::button::icon(widget::icon::from_name(icon)).on_press(message),
        widget::text(description),
        widget::tooltip::Position::Bottom,
    )
    .into()
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{AddYRegion, DeleteSelected, OpenImage, Save, SelectRegion, ToggleXRegion};

    if modifiers.control() && !modifiers.shift() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character(ch) if ch.eq_ignore_ascii_case("o") => Some(OpenImage),
            Key::Character(ch) if ch.eq_ignore_ascii_case("s") => Some(Save),
            _ => None,
        };
    }

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Remove the selected band; no-op without a selection.
        Key::Named(Named::Delete) | Key::Named(Named::Backspace) => Some(DeleteSelected),

        Key::Named(Named::Escape) => Some(SelectRegion(None)),

        // Band management.
        Key::Character(ch) if ch.eq_ignore_ascii_case("a") => Some(AddYRegion),
        Key::Character(ch) if ch.eq_ignore_ascii_case("x") => Some(ToggleXRegion),

        _ => None,
    }
}
