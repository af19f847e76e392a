// src/ui/elements/editor/table_body.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBody, TableBuilder};

use crate::predictions::{
    definitions::{PatientField, PatientRow},
    events::{RequestOpenPatientDetails, UpdatePatientCellEvent},
    resources::PredictionTable,
};
use super::state::EditorWindowState;

const INITIAL_COLUMN_WIDTH: f32 = 140.0;

/// Projects the prediction table into an egui table.
/// Edits and identifier clicks come back out as events.
pub fn prediction_table(
    ui: &mut egui::Ui,
    row_height: f32,
    table: &PredictionTable,
    state: &mut EditorWindowState,
    cell_update_writer: &mut EventWriter<UpdatePatientCellEvent>,
    open_details_writer: &mut EventWriter<RequestOpenPatientDetails>,
) {
    egui::ScrollArea::both()
        .id_salt("prediction_table_scroll_area")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let mut table_builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0);

            for _ in PatientField::ALL {
                table_builder = table_builder.column(
                    Column::initial(INITIAL_COLUMN_WIDTH)
                        .at_least(40.0)
                        .resizable(true)
                        .clip(true),
                );
            }

            if let Some(row_idx) = state.scroll_to_row_index.take() {
                table_builder = table_builder.scroll_to_row(row_idx, Some(egui::Align::BOTTOM));
            }

            table_builder
                .header(20.0, |mut header_row| {
                    for field in PatientField::ALL {
                        header_row.col(|ui| {
                            ui.strong(field.header());
                        });
                    }
                })
                .body(|body: TableBody| {
                    body.rows(row_height, table.len(), |mut table_row| {
                        let row_index = table_row.index();
                        let Some(row) = table.rows().get(row_index) else {
                            warn!("Row index {} out of bounds during render.", row_index);
                            return;
                        };
                        for field in PatientField::ALL {
                            table_row.col(|ui| {
                                patient_cell(
                                    ui,
                                    row_index,
                                    row,
                                    field,
                                    cell_update_writer,
                                    open_details_writer,
                                );
                            });
                        }
                    });
                });
        });
}

fn patient_cell(
    ui: &mut egui::Ui,
    row_index: usize,
    row: &PatientRow,
    field: PatientField,
    cell_update_writer: &mut EventWriter<UpdatePatientCellEvent>,
    open_details_writer: &mut EventWriter<RequestOpenPatientDetails>,
) {
    let mut buffer = row.get(field).to_owned();
    let cell_id = egui::Id::new("patient_cell")
        .with(row_index)
        .with(field.index());
    let mut response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .id(cell_id)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        cell_update_writer.write(UpdatePatientCellEvent {
            row_index,
            field,
            new_value: buffer,
        });
    }

    if field.opens_details() {
        response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("Click to open patient details");
        if response.clicked() {
            open_details_writer.write(RequestOpenPatientDetails { row_index });
        }
    }
}
