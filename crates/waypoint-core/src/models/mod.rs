//! Data models for the form wizard.
//!
//! The wizard's shape is fixed at compile time: three [`Step`]s, each owning
//! a known set of [`Field`]s. Per-field and per-step data is held in
//! [`FieldTable`] and [`StepTable`], so the field values, the validation
//! entries and the labels can never disagree about which fields exist.
//!
//! # Persisted shape
//!
//! A [`WizardRecord`] serializes to JSON as:
//!
//! ```json
//! {
//!   "identifier": "3f2a9c...",
//!   "step": "contact_info",
//!   "pendingValidationSteps": ["contact_info", "details"],
//!   "data": {
//!     "contact_info": {"name": "Ada", "email": ""},
//!     "details": {"dogName": "", "catName": ""},
//!     "items": {"bone": "", "box": ""}
//!   },
//!   "validation": {
//!     "contact_info": {
//!       "name": {"errors": [], "dirty": false},
//!       "email": {"errors": [], "dirty": false}
//!     },
//!     "details": {...},
//!     "items": {...}
//!   },
//!   "labels": {"contact_info": "missed_info", "details": "none", "items": "none"}
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Field, Label, Step, WizardRecord};
//!
//! let record = WizardRecord::fresh();
//! assert_eq!(record.step, Step::ContactInfo);
//! assert_eq!(record.value(Field::Name), "");
//! assert!(Step::ALL.iter().all(|step| record.label(*step) == Label::None));
//! assert_eq!(Field::DogName.step(), Step::Details);
//! ```

mod field;
mod label;
mod record;
mod step;
mod table;


pub use field::Field;
pub use label::Label;
pub use record::{RecordId, ValidationEntry, WizardRecord};
pub use step::Step;
pub use table::{FieldTable, PendingSteps, StepTable};
