// src/ui/elements/editor/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::predictions::{
    events::{RequestAddPatientRow, RequestOpenPatientDetails, UpdatePatientCellEvent},
    resources::PredictionTable,
};
use crate::settings::AppSettings;
use crate::ui::{elements::top_panel::show_top_panel, UiFeedbackState};
use super::state::EditorWindowState;
use super::table_body::prediction_table;

#[allow(clippy::too_many_arguments)]
pub fn prediction_table_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut add_row_event_writer: EventWriter<RequestAddPatientRow>,
    mut cell_update_writer: EventWriter<UpdatePatientCellEvent>,
    mut open_details_writer: EventWriter<RequestOpenPatientDetails>,
    table: Res<PredictionTable>,
    settings: Res<AppSettings>,
    ui_feedback: Res<UiFeedbackState>,
) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default().show(ctx, |ui| {
        let text_style = egui::TextStyle::Body;
        let row_height = ui.text_style_height(&text_style)
            + ui.style().spacing.item_spacing.y
            + ui.style().spacing.button_padding.y * 2.0;

        show_top_panel(
            ui,
            &mut state,
            &table,
            &settings,
            &mut add_row_event_writer,
        );

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        if table.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label("No patients yet. Click \"➕ Add Row\" to start.");
            });
            return;
        }

        prediction_table(
            ui,
            row_height,
            &table,
            &mut state,
            &mut cell_update_writer,
            &mut open_details_writer,
        );
    });
}
