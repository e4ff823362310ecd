//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::{error::WizardError, intent::Outcome, locator::resource_path};

/// A one-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Feedback for a dispatched intent. Plain updates produce no message.
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Updated => None,
            Outcome::Saved(id) => Some(Self::success(format!(
                "Saved record {id} (location {})",
                resource_path(Some(id))
            ))),
            Outcome::Removed => Some(Self::success("Removed record, starting over".to_string())),
        }
    }

    pub fn from_error(error: &WizardError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
