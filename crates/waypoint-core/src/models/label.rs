//! Per-step status labels shown in the stepper.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Derived completion state of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Not validated yet
    #[default]
    None,

    /// No errors, but at least one field is empty
    MissedInfo,

    /// At least one field has validation errors
    Error,

    /// Every field is filled and valid
    Completed,
}

impl Label {
    /// Wire name used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::None => "none",
            Label::MissedInfo => "missed_info",
            Label::Error => "error",
            Label::Completed => "completed",
        }
    }

    /// Badge text for the stepper. `None` renders no badge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::models::Label;
    ///
    /// assert_eq!(Label::MissedInfo.badge(), Some("missed info"));
    /// assert_eq!(Label::None.badge(), None);
    /// ```
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Label::None => None,
            Label::MissedInfo => Some("missed info"),
            Label::Error => Some("error"),
            Label::Completed => Some("completed"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
