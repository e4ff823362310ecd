//! Collection wrapper types for displaying saved records.

use std::fmt;

use super::LocalDateTime;
use crate::models::{Field, Step, WizardRecord};

/// Newtype wrapper for displaying the saved records of a store.
///
/// Each record is one line: identifier, name (when filled), the label of
/// every step and the save time.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::SavedRecords, models::WizardRecord};
///
/// assert_eq!(format!("{}", SavedRecords(vec![])), "No saved records.\n");
/// ```
pub struct SavedRecords(pub Vec<WizardRecord>);

impl SavedRecords {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WizardRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SavedRecords {
    type Item = &'a WizardRecord;
    type IntoIter = std::slice::Iter<'a, WizardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SavedRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved records.");
        }
        for record in &self.0 {
            let id = record.identifier.as_ref().map(|id| id.as_str()).unwrap_or("?");
            write!(f, "- **{id}**")?;
            let name = record.value(Field::Name);
            if !name.is_empty() {
                write!(f, " {name}")?;
            }
            let labels: Vec<String> = Step::ALL
                .iter()
                .map(|step| {
                    let badge = record.label(*step).badge().unwrap_or("-");
                    format!("{}: {badge}", step.title())
                })
                .collect();
            write!(f, " [{}]", labels.join(", "))?;
            if let Some(saved_at) = &record.saved_at {
                write!(f, " saved {}", LocalDateTime(saved_at))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
