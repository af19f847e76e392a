// src/predictions/resources.rs
use bevy::prelude::*;

use super::definitions::{PatientField, PatientRow};
use super::errors::PredictionError;

/// The table of patient rows shown in the editor.
/// Rows are only ever appended; this component never removes them.
#[derive(Resource, Default, Debug, Clone)]
pub struct PredictionTable {
    rows: Vec<PatientRow>,
}

impl PredictionTable {
    /// Appends a row of five empty cells and returns its index.
    pub fn append_empty_row(&mut self) -> usize {
        self.rows.push(PatientRow::default());
        self.rows.len() - 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PatientRow] {
        &self.rows
    }

    pub fn row(&self, row_index: usize) -> Result<&PatientRow, PredictionError> {
        self.rows.get(row_index).ok_or(PredictionError::RowNotFound {
            row_index,
            row_count: self.rows.len(),
        })
    }

    /// Writes a cell. Returns whether the stored text changed.
    pub fn set_cell(
        &mut self,
        row_index: usize,
        field: PatientField,
        value: impl Into<String>,
    ) -> Result<bool, PredictionError> {
        let row_count = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(PredictionError::RowNotFound { row_index, row_count })?;
        Ok(row.set(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_sequential_indices() {
        let mut table = PredictionTable::default();
        assert!(table.is_empty());
        assert_eq!(table.append_empty_row(), 0);
        assert_eq!(table.append_empty_row(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn set_cell_on_missing_row_fails() {
        let mut table = PredictionTable::default();
        table.append_empty_row();
        let err = table
            .set_cell(3, PatientField::Condition, "Flu")
            .unwrap_err();
        assert_eq!(
            err,
            PredictionError::RowNotFound {
                row_index: 3,
                row_count: 1
            }
        );
    }

    #[test]
    fn set_cell_only_touches_target_cell() {
        let mut table = PredictionTable::default();
        table.append_empty_row();
        table.append_empty_row();
        assert_eq!(table.set_cell(1, PatientField::Prediction, "Positive"), Ok(true));
        assert_eq!(table.row(1).unwrap().get(PatientField::Prediction), "Positive");
        assert!(table.row(0).unwrap().cells().iter().all(String::is_empty));
    }
}
