//! User intents a view layer dispatches into the wizard.
//!
//! These types carry no rendering or framework concerns. A view (terminal,
//! web, test harness) translates its own input events into an [`Intent`],
//! hands it to [`crate::Wizard::dispatch`] and uses the returned [`Outcome`]
//! to decide what feedback to show.

use crate::models::{Field, RecordId, Step};

/// A transition requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Click on a stepper entry
    ChangeStep(Step),

    /// Change the value of a field on the current step
    EditField { field: Field, value: String },

    /// Persist the record and point the locator at it
    Save,

    /// Delete the persisted record and start over
    Remove,
}

/// What a dispatched intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The in-memory record changed
    Updated,

    /// The record was written under this identifier
    Saved(RecordId),

    /// The record was deleted (if saved) and the session reset
    Removed,
}
