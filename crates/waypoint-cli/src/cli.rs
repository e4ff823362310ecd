//! One-shot command handlers.
//!
//! Each handler owns the wizard for the duration of a single command and
//! renders its result through the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use log::info;
use waypoint_core::{
    display::{OperationStatus, RecordView, SavedRecords},
    RecordId, Wizard, WizardBuilder, WizardError, WizardRecord,
};

use crate::{renderer::TerminalRenderer, session};

pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Opens the wizard, resuming `resource` when given.
    pub fn open(builder: WizardBuilder, resource: Option<RecordId>, renderer: TerminalRenderer) -> Result<Self> {
        let wizard = builder
            .with_startup_resource(resource)
            .build()
            .context("Failed to initialize wizard")?;
        Ok(Self::new(wizard, renderer))
    }

    pub fn run_session(mut self, requested: Option<&RecordId>) -> Result<()> {
        if let Some(id) = requested {
            if self.wizard.state().identifier.as_ref() != Some(id) {
                self.renderer.show(&OperationStatus::failure(format!(
                    "No saved record '{id}', starting a new one"
                )));
            }
        }
        session::run(&mut self.wizard, &self.renderer)
    }

    pub fn show_record(&self, id: &RecordId) -> Result<()> {
        if self.wizard.state().identifier.as_ref() != Some(id) {
            bail!("No saved record '{id}'");
        }
        self.renderer.show(&RecordView(self.wizard.state()));
        Ok(())
    }

    pub fn list_records(&self) -> Result<()> {
        let records = self.wizard.saved_records().context("Failed to list saved records")?;
        self.renderer.render(&format!("# Saved records\n\n{}", SavedRecords(records)));
        Ok(())
    }

    pub fn delete_record(mut self, id: &RecordId, confirm: bool) -> Result<()> {
        if !confirm {
            return Err(WizardError::invalid_input("confirm")
                .with_reason(format!("deleting record '{id}' requires --confirm"))
                .into());
        }
        if !self.wizard.delete_record(id).context("Failed to delete record")? {
            bail!("No saved record '{id}'");
        }
        info!("Deleted record '{id}' from the command line");
        self.renderer.show(&OperationStatus::success(format!("Deleted record {id}")));
        Ok(())
    }
}

/// Pretty-printed JSON schema of the persisted record.
pub fn record_schema() -> Result<String> {
    let schema = schemars::schema_for!(WizardRecord);
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}
