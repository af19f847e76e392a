// src/ui/systems.rs
use crate::{
    predictions::events::{PredictionOperationFeedback, PredictionTableModified, RequestAddPatientRow},
    ui::{elements::editor::state::EditorWindowState, UiFeedbackState},
};
use bevy::prelude::*;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<PredictionOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Stop at the first error so it stays on screen
        if event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Scrolls to a freshly appended row once it exists in the table.
pub fn handle_table_modified(
    mut modified_events: EventReader<PredictionTableModified>,
    mut state: ResMut<EditorWindowState>,
) {
    for event in modified_events.read() {
        if state.request_scroll_to_new_row {
            debug!("Scrolling to new row {}", event.row_index);
            state.scroll_to_row_index = Some(event.row_index);
            state.request_scroll_to_new_row = false;
        }
    }
}

/// Sends an add request as if the user clicked "Add Row".
pub fn request_add_row(
    writer: &mut EventWriter<RequestAddPatientRow>,
    state: &mut EditorWindowState,
) {
    writer.write(RequestAddPatientRow);
    state.request_scroll_to_new_row = true;
}
