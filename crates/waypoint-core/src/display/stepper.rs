//! The stepper: every step with its number, title and label badge.

use std::fmt;

use crate::models::{Step, WizardRecord};

/// Markdown list of the steps of a record.
///
/// The active step is bold and marked with `➤`; steps whose label has a
/// badge show it in parentheses.
pub struct Stepper<'a>(pub &'a WizardRecord);

impl fmt::Display for Stepper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in Step::ALL {
            let title = format!("{}. {}", step.number(), step.title());
            if step == self.0.step {
                write!(f, "➤ **{title}**")?;
            } else {
                write!(f, "  {title}")?;
            }
            if let Some(badge) = self.0.label(step).badge() {
                write!(f, " ({badge})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
