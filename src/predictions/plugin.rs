// src/predictions/plugin.rs
use bevy::prelude::*;

use super::events::{
    PredictionOperationFeedback, PredictionTableModified, RequestAddPatientRow,
    RequestOpenPatientDetails, UpdatePatientCellEvent,
};
use super::navigation::{DetailNavigatorHandle, SystemBrowserNavigator};
use super::resources::PredictionTable;
use super::systems;
use crate::settings::AppSettings;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum PredictionSystemSet {
    ApplyChanges, // Mutate the table
    Navigation,   // Read the table after changes landed
}

/// Registers the prediction table, its request events and handlers.
///
/// `AppSettings` and `DetailNavigatorHandle` may be inserted before this
/// plugin is added; otherwise defaults are used and the system browser
/// navigator is built from the settings.
pub struct PredictionsPlugin;

impl Plugin for PredictionsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            PredictionSystemSet::Navigation.after(PredictionSystemSet::ApplyChanges),
        );

        app.init_resource::<PredictionTable>()
            .init_resource::<AppSettings>();

        if !app.world().contains_resource::<DetailNavigatorHandle>() {
            let navigator = SystemBrowserNavigator::from_settings(app.world().resource::<AppSettings>());
            app.insert_resource(DetailNavigatorHandle::new(navigator));
        }

        app.add_event::<RequestAddPatientRow>()
            .add_event::<UpdatePatientCellEvent>()
            .add_event::<RequestOpenPatientDetails>()
            .add_event::<PredictionTableModified>()
            .add_event::<PredictionOperationFeedback>();

        // Adds before edits so an edit to a row added this frame lands.
        app.add_systems(
            Update,
            (
                systems::logic::handle_add_row_request,
                systems::logic::handle_cell_update,
            )
                .chain()
                .in_set(PredictionSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::logic::handle_open_patient_details.in_set(PredictionSystemSet::Navigation),
        );

        info!("PredictionsPlugin initialized.");
    }
}
