//! Full view of one record: header, stepper and the active step's form.

use std::fmt;

use super::{LocalDateTime, StepForm, Stepper};
use crate::{locator::resource_path, models::WizardRecord};

/// Markdown view of a whole record as a session shows it.
pub struct RecordView<'a>(pub &'a WizardRecord);

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        match &record.identifier {
            Some(id) => writeln!(f, "## Record {id}")?,
            None => writeln!(f, "## New record (unsaved)")?,
        }
        writeln!(f)?;
        writeln!(f, "**Location**: `{}`", resource_path(record.identifier.as_ref()))?;
        if let Some(saved_at) = &record.saved_at {
            writeln!(f, "**Saved**: {}", LocalDateTime(saved_at))?;
        }
        writeln!(f)?;
        write!(f, "{}", Stepper(record))?;
        writeln!(f)?;
        write!(f, "{}", StepForm::current(record))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Field;

    #[test]
    fn test_unsaved_record_view() {
        let output = format!("{}", RecordView(&WizardRecord::fresh()));
        assert!(output.starts_with("## New record (unsaved)\n"));
        assert!(output.contains("**Location**: `/`"));
        assert!(!output.contains("**Saved**"));
        assert!(output.contains("### Contact info"));
    }

    #[test]
    fn test_saved_record_view() {
        let mut record = WizardRecord::fresh().edit_field(Field::Name, "Ada");
        record.identifier = Some("abc123".parse().unwrap());
        record.saved_at = Some(Timestamp::from_second(1640995200).unwrap());

        let output = format!("{}", RecordView(&record));
        assert!(output.starts_with("## Record abc123\n"));
        assert!(output.contains("**Location**: `/abc123`"));
        assert!(output.contains("**Saved**: "));
        assert!(output.contains("- **Name** (`name`): Ada"));
    }
}
