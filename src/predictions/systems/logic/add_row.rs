// src/predictions/systems/logic/add_row.rs

use crate::predictions::{
    events::{PredictionOperationFeedback, PredictionTableModified, RequestAddPatientRow},
    resources::PredictionTable,
};
use bevy::prelude::*;

/// Appends one empty row per request, preserving request order.
pub fn handle_add_row_request(
    mut events: EventReader<RequestAddPatientRow>,
    mut table: ResMut<PredictionTable>,
    mut feedback_writer: EventWriter<PredictionOperationFeedback>,
    mut modified_writer: EventWriter<PredictionTableModified>,
) {
    for _ in events.read() {
        let row_index = table.append_empty_row();
        let msg = format!("Added row {} to the prediction table.", row_index + 1);
        info!("{}", msg);
        feedback_writer.write(PredictionOperationFeedback {
            message: msg,
            is_error: false,
        });
        modified_writer.write(PredictionTableModified { row_index });
    }
}
