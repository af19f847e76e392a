// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::predictions::{events::RequestAddPatientRow, resources::PredictionTable};
use crate::settings::AppSettings;
use crate::ui::elements::editor::state::EditorWindowState;
use crate::ui::systems::request_add_row;

pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    table: &PredictionTable,
    settings: &AppSettings,
    add_row_event_writer: &mut EventWriter<RequestAddPatientRow>,
) {
    ui.horizontal(|ui| {
        if ui
            .button("➕ Add Row")
            .on_hover_text("Append an empty patient row")
            .clicked()
        {
            request_add_row(add_row_event_writer, state);
        }
        ui.separator();
        ui.label(format!("Rows: {}", table.len()));
        ui.separator();
        ui.weak(format!("Click a Patient ID to open {}", settings.detail_page));
    });
}
