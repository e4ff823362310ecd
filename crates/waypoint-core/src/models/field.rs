//! Form fields and the step each one belongs to.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Step;
use crate::error::WizardError;

/// A single named input. Every field belongs to exactly one [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    DogName,
    CatName,
    Bone,
    Box,
}

impl Field {
    /// Number of fields across all steps.
    pub const COUNT: usize = 6;

    /// All fields, grouped by step in declaration order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Name,
        Field::Email,
        Field::DogName,
        Field::CatName,
        Field::Bone,
        Field::Box,
    ];

    /// Zero-based slot used by [`super::FieldTable`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The step this field is rendered on.
    pub fn step(self) -> Step {
        match self {
            Field::Name | Field::Email => Step::ContactInfo,
            Field::DogName | Field::CatName => Step::Details,
            Field::Bone | Field::Box => Step::Items,
        }
    }

    /// Wire name, unique within the field's step.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::DogName => "dogName",
            Field::CatName => "catName",
            Field::Bone => "bone",
            Field::Box => "box",
        }
    }

    /// Input label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::DogName => "Dog name",
            Field::CatName => "Cat name",
            Field::Bone => "Bone",
            Field::Box => "Box",
        }
    }

    /// Resolves a field name within `step`.
    pub fn in_step(step: Step, name: &str) -> Result<Self, WizardError> {
        let normalized = normalize(name);
        step.fields()
            .iter()
            .copied()
            .find(|field| normalize(field.as_str()) == normalized)
            .ok_or_else(|| {
                WizardError::invalid_input("field")
                    .with_reason(format!("step '{step}' has no field '{name}'"))
            })
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(['-', '_', ' '], "")
}

impl FromStr for Field {
    type Err = WizardError;

    /// Parses `field` or a qualified `step.field`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((step, name)) = s.split_once('.') {
            return Field::in_step(step.parse()?, name);
        }

        let normalized = normalize(s);
        Field::ALL
            .into_iter()
            .find(|field| normalize(field.as_str()) == normalized)
            .ok_or_else(|| WizardError::invalid_input("field").with_reason(format!("unknown field '{s}'")))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
