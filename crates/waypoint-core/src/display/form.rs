//! The input form of a single step.

use std::fmt;

use crate::models::{Step, WizardRecord};

/// Markdown for the fields of `step`: label, current value and any errors.
///
/// Empty values render as `_empty_`. Each error is listed under its field.
pub struct StepForm<'a> {
    pub record: &'a WizardRecord,
    pub step: Step,
}

impl<'a> StepForm<'a> {
    /// The form of the record's current step.
    pub fn current(record: &'a WizardRecord) -> Self {
        Self {
            record,
            step: record.step,
        }
    }
}

impl fmt::Display for StepForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.step.title())?;
        writeln!(f)?;
        for field in self.step.fields() {
            let value = self.record.value(*field);
            if value.is_empty() {
                writeln!(f, "- **{}** (`{}`): _empty_", field.label(), field)?;
            } else {
                writeln!(f, "- **{}** (`{}`): {}", field.label(), field, value)?;
            }
            for error in &self.record.entry(*field).errors {
                writeln!(f, "  - ✗ {error}")?;
            }
        }
        Ok(())
    }
}
