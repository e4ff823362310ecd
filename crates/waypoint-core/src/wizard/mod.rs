//! The wizard session: current record, storage and resource locator.
//!
//! [`Wizard`] owns the current [`WizardRecord`] snapshot together with the
//! [`KeyValueStore`] it persists to and the [`ResourceLocator`] that exposes
//! the record's address. Pure transitions live on the record itself (see
//! `transitions.rs`); the session replaces its snapshot with their result
//! and performs the storage and locator side effects for save, remove and
//! load.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   View layer    │    │     Wizard      │    │  KeyValueStore  │
//! │ (Intent, render)│───▶│ (transitions,   │───▶│ ResourceLocator │
//! │                 │◀───│  snapshot)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     models::{Field, Label, Step},
//!     store::MemoryStore,
//!     MemoryLocator, Wizard,
//! };
//!
//! let mut wizard = Wizard::new(Box::new(MemoryStore::new()), Box::new(MemoryLocator::new()));
//! wizard.edit_field(Field::Name, "Ada")?;
//! wizard.change_step(Step::Details);
//! assert_eq!(wizard.state().label(Step::ContactInfo), Label::MissedInfo);
//!
//! let id = wizard.save()?;
//! assert_eq!(wizard.location(), format!("/{id}"));
//! # Ok::<(), waypoint_core::WizardError>(())
//! ```

use jiff::Timestamp;
use log::info;

pub mod builder;
mod transitions;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;

use crate::{
    error::{Result, WizardError},
    intent::{Intent, Outcome},
    locator::{resource_path, ResourceLocator},
    models::{Field, RecordId, Step, WizardRecord},
    persistence,
    store::KeyValueStore,
};

/// A single-user form session.
pub struct Wizard {
    store: Box<dyn KeyValueStore>,
    locator: Box<dyn ResourceLocator>,
    state: WizardRecord,
}

impl Wizard {
    /// Creates a session on a fresh, unsaved record.
    pub fn new(store: Box<dyn KeyValueStore>, locator: Box<dyn ResourceLocator>) -> Self {
        Self {
            store,
            locator,
            state: WizardRecord::fresh(),
        }
    }

    /// Creates a session and performs the one-time startup load when the
    /// locator carries an identifier.
    pub fn start(store: Box<dyn KeyValueStore>, locator: Box<dyn ResourceLocator>) -> Self {
        let mut wizard = Self::new(store, locator);
        if let Some(identifier) = wizard.locator.resource_on_startup() {
            wizard.load(&identifier);
        }
        wizard
    }

    /// Read-only view of the current record.
    pub fn state(&self) -> &WizardRecord {
        &self.state
    }

    /// Address of the current record: `/<identifier>` or `/`.
    pub fn location(&self) -> String {
        resource_path(self.state.identifier.as_ref())
    }

    /// Applies a user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::ChangeStep(step) => {
                self.change_step(step);
                Ok(Outcome::Updated)
            }
            Intent::EditField { field, value } => {
                self.edit_field(field, value)?;
                Ok(Outcome::Updated)
            }
            Intent::Save => self.save().map(Outcome::Saved),
            Intent::Remove => {
                self.remove()?;
                Ok(Outcome::Removed)
            }
        }
    }

    /// Moves to `step`; see [`WizardRecord::change_step`].
    pub fn change_step(&mut self, step: Step) {
        self.state = self.state.change_step(step);
    }

    /// Edits a field of the current step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` when `field` belongs to another
    /// step; the view only offers the current step's inputs.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        if field.step() != self.state.step {
            return Err(WizardError::invalid_input(field.as_str()).with_reason(format!(
                "field belongs to step '{}' but the current step is '{}'",
                field.step(),
                self.state.step
            )));
        }
        self.state = self.state.edit_field(field, value);
        Ok(())
    }

    /// Persists the record and points the locator at it.
    ///
    /// Reuses the record's identifier or generates one. The stored (and new
    /// in-memory) record is back on the first step with validation cleared.
    /// The snapshot is only replaced once the write succeeded.
    pub fn save(&mut self) -> Result<RecordId> {
        let identifier = match &self.state.identifier {
            Some(identifier) => identifier.clone(),
            None => persistence::generate_identifier(self.store.as_ref()),
        };

        let next = self.state.prepared_for_save(identifier.clone(), Timestamp::now());
        persistence::write(self.store.as_mut(), &next)?;
        self.locator.set_resource(Some(&identifier));
        self.state = next;

        info!("Saved wizard record '{identifier}'");
        Ok(identifier)
    }

    /// Deletes the persisted record, if any, and resets the session.
    pub fn remove(&mut self) -> Result<()> {
        if let Some(identifier) = &self.state.identifier {
            persistence::delete(self.store.as_mut(), identifier)?;
            info!("Removed wizard record '{identifier}'");
        }
        self.reset();
        Ok(())
    }

    /// Loads the record stored under `identifier`, revalidates it and points
    /// the locator at it.
    ///
    /// A missing or unreadable record resets the session exactly like
    /// [`Wizard::remove`] on an unsaved record.
    pub fn load(&mut self, identifier: &RecordId) {
        match persistence::read(self.store.as_ref(), identifier) {
            Some(record) => {
                info!("Resumed wizard record '{identifier}'");
                self.locator.set_resource(Some(identifier));
                self.state = record.resumed();
            }
            None => self.reset(),
        }
    }

    /// Every readable record in the store.
    pub fn saved_records(&self) -> Result<Vec<WizardRecord>> {
        persistence::list(self.store.as_ref())
    }

    /// Deletes the record stored under `identifier`, whether or not it is the
    /// one open in this session. Returns whether a record existed.
    pub fn delete_record(&mut self, identifier: &RecordId) -> Result<bool> {
        let existed = self.store.contains(identifier.as_str())?;
        if existed {
            persistence::delete(self.store.as_mut(), identifier)?;
            info!("Deleted wizard record '{identifier}'");
        }
        if self.state.identifier.as_ref() == Some(identifier) {
            self.reset();
        }
        Ok(existed)
    }

    fn reset(&mut self) {
        self.locator.set_resource(None);
        self.state = WizardRecord::fresh();
    }
}
