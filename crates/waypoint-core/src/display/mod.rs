//! Display formatting wrappers for wizard state.
//!
//! Views never format a [`crate::models::WizardRecord`] directly. They wrap
//! it in one of the types below, each of which implements
//! [`std::fmt::Display`] and produces markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  WizardRecord   │    │ Display         │    │   Markdown      │
//! │  (snapshot)     │───▶│ wrappers        │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`stepper`]: the step list with the active marker and label badges
//! - [`form`]: the fields of one step with their values and errors
//! - [`record`]: a whole record (header, stepper, active form)
//! - [`collections`]: lists of saved records
//! - [`status`]: status and confirmation messages
//! - [`datetime`]: date/time formatting utilities
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::{
//!     display::{OperationStatus, Stepper},
//!     models::{Field, Step, WizardRecord},
//! };
//!
//! let record = WizardRecord::fresh()
//!     .edit_field(Field::Name, "Ada")
//!     .change_step(Step::Details);
//!
//! let stepper = format!("{}", Stepper(&record));
//! assert!(stepper.contains("1. Contact info (missed info)"));
//! assert!(stepper.contains("**2. Details**"));
//!
//! let status = OperationStatus::success("Saved".to_string());
//! assert_eq!(format!("{status}"), "Success: Saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod form;
pub mod record;
pub mod status;
pub mod stepper;

pub use collections::SavedRecords;
pub use datetime::LocalDateTime;
pub use form::StepForm;
pub use record::RecordView;
pub use status::OperationStatus;
pub use stepper::Stepper;
