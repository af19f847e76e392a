// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{WinitSettings, UpdateMode},
};
use clap::Parser;
use std::time::Duration;

use bevy_egui::EguiPlugin;

mod cli;
mod predictions;
mod settings;
mod ui;

use predictions::{navigation::{DetailNavigatorHandle, SystemBrowserNavigator}, PredictionsPlugin};
use ui::EditorUiPlugin;

fn main() {
    let cli = cli::Cli::parse();
    let app_settings = cli::resolve_settings(&cli);

    if let Some(command) = &cli.command {
        std::process::exit(cli::run_command(command, &app_settings));
    }

    let navigator = SystemBrowserNavigator::from_settings(&app_settings);

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Patient Predictions".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .insert_resource(app_settings)
        .insert_resource(DetailNavigatorHandle::new(navigator))
        .add_plugins(PredictionsPlugin)
        .add_plugins(EditorUiPlugin)
        .add_systems(Startup, log_active_settings)
        .run();
}

fn log_active_settings(settings: Res<settings::AppSettings>) {
    info!(
        "Detail page: '{}' (site root: {})",
        settings.detail_page,
        settings.site_root.as_deref().unwrap_or("<working directory>")
    );
}
