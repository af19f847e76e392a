// src/predictions/events.rs
use bevy::prelude::Event;

use super::definitions::PatientField;

/// Event sent when the user clicks the "Add Row" button.
/// Handled by `systems::logic::handle_add_row_request`.
#[derive(Event, Debug, Clone, Default)]
pub struct RequestAddPatientRow;

/// Event sent when the user edits a cell in place.
#[derive(Event, Debug, Clone)]
pub struct UpdatePatientCellEvent {
    pub row_index: usize,
    pub field: PatientField,
    pub new_value: String,
}

/// Event sent when the user clicks a row's identifier cell.
#[derive(Event, Debug, Clone)]
pub struct RequestOpenPatientDetails {
    pub row_index: usize,
}

/// Fired after a row was appended or a cell changed.
#[derive(Event, Debug, Clone)]
pub struct PredictionTableModified {
    pub row_index: usize,
}

/// User-facing outcome of an operation, shown in the editor's feedback line.
#[derive(Event, Debug, Clone)]
pub struct PredictionOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
