//! The fixed, ordered set of wizard steps.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Field;
use crate::error::WizardError;

/// One page of the multi-step form.
///
/// Declaration order is the order the stepper shows and the order labels are
/// refreshed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Contact information (name, email)
    ContactInfo,

    /// Pet details (dog name, cat name)
    Details,

    /// Items (bone, box)
    Items,
}

impl Step {
    /// Number of steps in the wizard.
    pub const COUNT: usize = 3;

    /// All steps in declaration order.
    pub const ALL: [Step; Step::COUNT] = [Step::ContactInfo, Step::Details, Step::Items];

    /// The step a fresh or freshly saved record starts on.
    pub fn first() -> Self {
        Step::ContactInfo
    }

    /// Zero-based position in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based position, as shown in the stepper.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Looks up a step by its one-based stepper number.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Step::ALL.get(index))
            .copied()
    }

    /// Wire name used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::ContactInfo => "contact_info",
            Step::Details => "details",
            Step::Items => "items",
        }
    }

    /// Human-readable title shown in the stepper.
    pub fn title(&self) -> &'static str {
        match self {
            Step::ContactInfo => "Contact info",
            Step::Details => "Details",
            Step::Items => "Items",
        }
    }

    /// Fields belonging to this step, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::ContactInfo => &[Field::Name, Field::Email],
            Step::Details => &[Field::DogName, Field::CatName],
            Step::Items => &[Field::Bone, Field::Box],
        }
    }
}

impl FromStr for Step {
    type Err = WizardError;

    /// Parses a wire name (`contact_info`), a dashed or squashed variant
    /// (`contact-info`, `contactinfo`) or a stepper number (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.trim().parse::<usize>() {
            return Step::from_number(number).ok_or_else(|| {
                WizardError::invalid_input("step")
                    .with_reason(format!("step number must be 1-{}, got {number}", Step::COUNT))
            });
        }

        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "contactinfo" | "contact" => Ok(Step::ContactInfo),
            "details" => Ok(Step::Details),
            "items" => Ok(Step::Items),
            _ => Err(WizardError::invalid_input("step").with_reason(format!("unknown step '{s}'"))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
