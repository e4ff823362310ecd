//! Pure state transitions on [`WizardRecord`].
//!
//! Each transition borrows the prior snapshot and returns a new one; nothing
//! here touches storage or the resource locator.

use jiff::Timestamp;
use log::debug;

use crate::{
    labels::refresh_labels,
    models::{Field, FieldTable, PendingSteps, RecordId, Step, ValidationEntry, WizardRecord},
    validation::validate,
};

impl WizardRecord {
    /// Moves to `target`.
    ///
    /// The current and target steps are marked pending and the fields of the
    /// step being left count as touched. Dirty fields are then re-validated
    /// and labels are recomputed for every pending step before the current
    /// step changes. Selecting the current step again re-runs the same
    /// refresh.
    pub fn change_step(&self, target: Step) -> Self {
        let mut next = Self {
            pending_validation_steps: self.pending_validation_steps.with(self.step).with(target),
            ..self.clone()
        };
        for field in self.step.fields() {
            next.validation[*field].dirty = true;
        }
        next.validation = validate(&next, false);
        next.labels = refresh_labels(&next);
        next.step = target;

        debug!(
            "Changed step {} -> {} (pending: {:?})",
            self.step, target, next.pending_validation_steps
        );
        next
    }

    /// Sets `field` to `value`, marking it dirty and clearing its errors.
    ///
    /// Labels are left alone; cleared errors come back only on the next step
    /// change or forced validation.
    pub fn edit_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.data.set(field, value.into());
        next.validation.set(field, ValidationEntry::touched());
        next
    }

    /// The snapshot written on save: identified, validation cleared, back on
    /// the first step.
    pub(crate) fn prepared_for_save(&self, identifier: RecordId, saved_at: Timestamp) -> Self {
        Self {
            identifier: Some(identifier),
            step: Step::first(),
            validation: FieldTable::default(),
            saved_at: Some(saved_at),
            ..self.clone()
        }
    }

    /// Revalidates a record loaded from storage.
    ///
    /// Stored validation is discarded; every step is marked pending, a forced
    /// validation pass runs, and labels are recomputed once afterwards.
    pub fn resumed(&self) -> Self {
        let mut next = Self {
            pending_validation_steps: PendingSteps::all(),
            validation: FieldTable::default(),
            ..self.clone()
        };
        next.validation = validate(&next, true);
        next.labels = refresh_labels(&next);
        next
    }
}
