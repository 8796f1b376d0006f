// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: CLI parsing, logging, localization, and application launch.

use std::path::PathBuf;

use clap::Parser;

mod app;
mod config;
mod constant;
mod i18n;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Scanned sheet image to open at startup.
    pub file: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    i18n::init(&i18n_embed::DesktopLanguageRequester::requested_languages());

    let args = Args::parse();

    // Window geometry sized for a portrait A4 scan plus the sidebar.
    let settings = cosmic::app::Settings::default().size(cosmic::iced::Size::new(1250.0, 820.0));

    cosmic::app::run::<app::SecareApp>(settings, app::Flags::Args(args))
}
