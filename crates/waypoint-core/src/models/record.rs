//! The wizard record: the persisted and in-memory state of one form session.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Field, FieldTable, Label, PendingSteps, Step, StepTable};
use crate::error::WizardError;

/// Validation state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidationEntry {
    /// Human-readable errors, empty when the field is valid
    pub errors: Vec<String>,

    /// Set once the field is edited or a forced validation pass has run
    pub dirty: bool,
}

impl ValidationEntry {
    /// Entry for a field the user just edited: dirty, errors cleared.
    pub fn touched() -> Self {
        Self {
            errors: Vec::new(),
            dirty: true,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Opaque identifier a record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh random identifier (32 lowercase hex digits).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = WizardError;

    /// Accepts a bare identifier or a resource path such as `/3f2a...`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(WizardError::invalid_input("identifier").with_reason("identifier cannot be empty"));
        }
        if trimmed.contains('/') || trimmed.chars().any(char::is_whitespace) {
            return Err(WizardError::invalid_input("identifier")
                .with_reason(format!("'{trimmed}' is not a valid record identifier")));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete state of one wizard session.
///
/// Every transition produces a new record; see [`crate::wizard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WizardRecord {
    /// Assigned on first save and never changed afterwards
    pub identifier: Option<RecordId>,

    /// The step currently shown
    pub step: Step,

    /// Steps whose labels are recomputed on the next refresh
    pub pending_validation_steps: PendingSteps,

    /// Field values for every step
    pub data: FieldTable<String>,

    /// Validation entries for every field
    pub validation: FieldTable<ValidationEntry>,

    /// Last computed label per step
    pub labels: StepTable<Label>,

    /// When the record was last saved (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub saved_at: Option<Timestamp>,
}

impl WizardRecord {
    /// An unsaved record with empty fields, clear validation and no labels.
    pub fn fresh() -> Self {
        Self {
            identifier: None,
            step: Step::first(),
            pending_validation_steps: PendingSteps::only(Step::first()),
            data: FieldTable::default(),
            validation: FieldTable::default(),
            labels: StepTable::default(),
            saved_at: None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn entry(&self, field: Field) -> &ValidationEntry {
        self.validation.get(field)
    }

    pub fn label(&self, step: Step) -> Label {
        *self.labels.get(step)
    }

    pub fn is_saved(&self) -> bool {
        self.identifier.is_some()
    }
}

impl Default for WizardRecord {
    fn default() -> Self {
        Self::fresh()
    }
}
