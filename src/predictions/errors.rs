// src/predictions/errors.rs

use thiserror::Error;

/// Failures surfaced by prediction table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Patient ID is empty. Enter an ID before opening patient details.")]
    EmptyPatientId,
    #[error("Row {row_index} does not exist (table has {row_count} rows).")]
    RowNotFound { row_index: usize, row_count: usize },
    #[error("Failed to open '{location}': {reason}")]
    LaunchFailed { location: String, reason: String },
}
