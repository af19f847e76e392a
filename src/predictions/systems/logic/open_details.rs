// src/predictions/systems/logic/open_details.rs
// Identifier-cell click handling

use crate::predictions::{
    events::{PredictionOperationFeedback, RequestOpenPatientDetails},
    navigation::{DetailNavigatorHandle, DetailPageTarget},
    resources::PredictionTable,
};
use crate::settings::AppSettings;
use bevy::prelude::*;

/// Opens the detail page for the clicked row's identifier.
///
/// The identifier is read from the table at handling time, so an edit sent
/// earlier in the same frame is already applied. A blank identifier never
/// navigates; the user gets an error message instead.
pub fn handle_open_patient_details(
    mut events: EventReader<RequestOpenPatientDetails>,
    table: Res<PredictionTable>,
    settings: Res<AppSettings>,
    navigator: Res<DetailNavigatorHandle>,
    mut feedback_writer: EventWriter<PredictionOperationFeedback>,
) {
    for event in events.read() {
        let result = table
            .row(event.row_index)
            .and_then(|row| DetailPageTarget::for_patient(&settings.detail_page, row.patient_id()))
            .and_then(|target| navigator.navigate(&target).map(|()| target));

        match result {
            Ok(target) => {
                info!("Navigated to patient details: {}", target);
                feedback_writer.write(PredictionOperationFeedback {
                    message: format!("Opened details for patient '{}'.", target.patient_id()),
                    is_error: false,
                });
            }
            Err(e) => {
                warn!("Open patient details for row {} failed: {}", event.row_index, e);
                feedback_writer.write(PredictionOperationFeedback {
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
