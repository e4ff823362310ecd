//! Step label derivation.

use crate::models::{Label, Step, StepTable, WizardRecord};

/// Derives the label for `step`: any field error wins, then any empty value,
/// otherwise the step is complete.
pub fn derive_label(step: Step, record: &WizardRecord) -> Label {
    if record.validation.in_step(step).any(|(_, entry)| entry.has_errors()) {
        Label::Error
    } else if record.data.in_step(step).any(|(_, value)| value.is_empty()) {
        Label::MissedInfo
    } else {
        Label::Completed
    }
}

/// Recomputes labels for exactly the pending steps, in declaration order.
/// Other steps keep their last label.
pub fn refresh_labels(record: &WizardRecord) -> StepTable<Label> {
    let mut labels = record.labels.clone();
    for step in record.pending_validation_steps.iter() {
        labels[step] = derive_label(step, record);
    }
    labels
}
