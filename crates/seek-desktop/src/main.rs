//! Seek Desktop Application
//!
//! A search box you can reach from anywhere in the window with one shortcut.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod error;
mod hotkey;
mod routes;
mod settings;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use seek_core::Shortcut;

use crate::error::DesktopError;
use crate::hotkey::ActivationHotkey;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seek=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Seek...");

    let config = settings::load_config();

    // Register the OS hotkey BEFORE launching Dioxus
    // The manager must be kept alive and stay on the main thread
    let _activation = config.activation_hotkey.as_deref().and_then(|raw| {
        match Shortcut::parse(raw)
            .map_err(DesktopError::from)
            .and_then(|shortcut| ActivationHotkey::register(&shortcut))
        {
            Ok(hotkey) => Some(hotkey),
            Err(e) => {
                tracing::error!("Failed to register activation hotkey: {}", e);
                None
            }
        }
    });

    let window = WindowBuilder::new()
        .with_title("Seek")
        .with_inner_size(LogicalSize::new(720.0, 520.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}
