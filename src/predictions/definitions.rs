// src/predictions/definitions.rs

/// The five fields of a patient row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    PatientId,
    LastName,
    FirstName,
    Condition,
    Prediction,
}

impl PatientField {
    pub const COUNT: usize = 5;

    /// All fields in column order.
    pub const ALL: [PatientField; Self::COUNT] = [
        PatientField::PatientId,
        PatientField::LastName,
        PatientField::FirstName,
        PatientField::Condition,
        PatientField::Prediction,
    ];

    /// Column position of this field within a row.
    pub fn index(self) -> usize {
        match self {
            PatientField::PatientId => 0,
            PatientField::LastName => 1,
            PatientField::FirstName => 2,
            PatientField::Condition => 3,
            PatientField::Prediction => 4,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            PatientField::PatientId => "Patient ID",
            PatientField::LastName => "Last Name",
            PatientField::FirstName => "First Name",
            PatientField::Condition => "Disease",
            PatientField::Prediction => "Prediction",
        }
    }

    /// Only the identifier cell opens the detail page when clicked.
    pub fn opens_details(self) -> bool {
        matches!(self, PatientField::PatientId)
    }
}

/// One editable patient record candidate. Always exactly five cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientRow {
    cells: [String; PatientField::COUNT],
}

impl PatientRow {
    pub fn get(&self, field: PatientField) -> &str {
        &self.cells[field.index()]
    }

    /// Replaces the cell text. Returns `true` if the value actually changed.
    pub fn set(&mut self, field: PatientField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = &mut self.cells[field.index()];
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn cells(&self) -> &[String; PatientField::COUNT] {
        &self.cells
    }

    /// Identifier text with surrounding whitespace removed.
    pub fn patient_id(&self) -> &str {
        self.get(PatientField::PatientId).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_in_column_order() {
        for (position, field) in PatientField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
        assert_eq!(PatientField::ALL[0], PatientField::PatientId);
        assert_eq!(PatientField::ALL[4], PatientField::Prediction);
    }

    #[test]
    fn new_row_has_five_empty_cells() {
        let row = PatientRow::default();
        assert_eq!(row.cells().len(), 5);
        assert!(row.cells().iter().all(String::is_empty));
    }

    #[test]
    fn set_reports_whether_value_changed() {
        let mut row = PatientRow::default();
        assert!(row.set(PatientField::LastName, "Okafor"));
        assert!(!row.set(PatientField::LastName, "Okafor"));
        assert_eq!(row.get(PatientField::LastName), "Okafor");
        assert_eq!(row.get(PatientField::FirstName), "");
    }

    #[test]
    fn patient_id_is_trimmed() {
        let mut row = PatientRow::default();
        row.set(PatientField::PatientId, "  P123\t");
        assert_eq!(row.patient_id(), "P123");
        assert_eq!(row.get(PatientField::PatientId), "  P123\t");
    }
}
