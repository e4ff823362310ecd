//! Core library for the Waypoint multi-step form wizard.
//!
//! This crate holds the wizard state machine: the typed record of field
//! values, per-field validation and per-step labels, the transitions that
//! move between snapshots of it, and the persistence and resource locator
//! seams a view layer plugs into.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): steps, fields, labels and the record
//! - **Display Wrappers** ([`display`]): markdown for the stepper, the active
//!   step's form, saved record lists and status lines
//! - **Terminal Rendering**: the CLI prints that markdown through its
//!   terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{models::{Field, Step}, store::MemoryStore, WizardBuilder};
//!
//! # fn example() -> Result<(), waypoint_core::WizardError> {
//! let mut wizard = WizardBuilder::new().with_store(MemoryStore::new()).build()?;
//!
//! wizard.edit_field(Field::Name, "Ada")?;
//! wizard.edit_field(Field::Email, "ada@example.com")?;
//! wizard.change_step(Step::Details);
//!
//! let id = wizard.save()?;
//! println!("Saved under {}", wizard.location());
//!
//! // A later session resumes from the identifier
//! wizard.load(&id);
//! assert_eq!(wizard.state().value(Field::Name), "Ada");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod intent;
pub mod labels;
pub mod locator;
pub mod models;
pub mod persistence;
pub mod store;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use display::{LocalDateTime, OperationStatus, RecordView, SavedRecords, StepForm, Stepper};
pub use error::{Result, WizardError};
pub use intent::{Intent, Outcome};
pub use locator::{resource_path, MemoryLocator, ResourceLocator};
pub use models::{Field, Label, RecordId, Step, ValidationEntry, WizardRecord};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use wizard::{Wizard, WizardBuilder};
