// src/predictions/systems/logic/mod.rs
// Handlers that apply user requests to the prediction table

mod add_row;
mod open_details;
mod update_cell;

pub use add_row::handle_add_row_request;
pub use open_details::handle_open_patient_details;
pub use update_cell::handle_cell_update;
