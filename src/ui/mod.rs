// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::editor::prediction_table_editor_ui;
use elements::editor::state::EditorWindowState;
use systems::{handle_table_modified, handle_ui_feedback};

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the prediction table editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_systems(Update, (handle_ui_feedback, handle_table_modified))
            .add_systems(EguiContextPass, prediction_table_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
