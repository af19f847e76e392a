// src/predictions/systems/logic/update_cell.rs
//! In-place cell edits

use crate::predictions::{
    events::{PredictionOperationFeedback, PredictionTableModified, UpdatePatientCellEvent},
    resources::PredictionTable,
};
use bevy::prelude::*;

pub fn handle_cell_update(
    mut events: EventReader<UpdatePatientCellEvent>,
    mut table: ResMut<PredictionTable>,
    mut feedback_writer: EventWriter<PredictionOperationFeedback>,
    mut modified_writer: EventWriter<PredictionTableModified>,
) {
    for event in events.read() {
        match table.set_cell(event.row_index, event.field, event.new_value.as_str()) {
            Ok(true) => {
                trace!(
                    "Cell [{}, {:?}] set to '{}'",
                    event.row_index,
                    event.field,
                    event.new_value
                );
                modified_writer.write(PredictionTableModified {
                    row_index: event.row_index,
                });
            }
            Ok(false) => {}
            Err(e) => {
                let msg = format!("Cell update failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(PredictionOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{feedback, test_app};
    use crate::predictions::{
        definitions::PatientField,
        events::{RequestAddPatientRow, UpdatePatientCellEvent},
        resources::PredictionTable,
    };

    #[test]
    fn edits_persist_in_table() {
        let (mut app, _) = test_app();
        app.world_mut().send_event(RequestAddPatientRow);
        app.update();

        app.world_mut().send_event(UpdatePatientCellEvent {
            row_index: 0,
            field: PatientField::FirstName,
            new_value: "Ada".into(),
        });
        app.world_mut().send_event(UpdatePatientCellEvent {
            row_index: 0,
            field: PatientField::Condition,
            new_value: "Asthma".into(),
        });
        app.update();
        // Later frames leave the values alone.
        app.update();

        let table = app.world().resource::<PredictionTable>();
        let row = table.row(0).unwrap();
        assert_eq!(row.get(PatientField::FirstName), "Ada");
        assert_eq!(row.get(PatientField::Condition), "Asthma");
        assert_eq!(row.get(PatientField::PatientId), "");
    }

    #[test]
    fn edit_of_missing_row_reports_error() {
        let (mut app, _) = test_app();
        app.world_mut().send_event(UpdatePatientCellEvent {
            row_index: 2,
            field: PatientField::LastName,
            new_value: "Nobody".into(),
        });
        app.update();

        assert!(app.world().resource::<PredictionTable>().is_empty());
        let errors: Vec<_> = feedback(&app).into_iter().filter(|f| f.is_error).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Row 2 does not exist"));
    }
}
