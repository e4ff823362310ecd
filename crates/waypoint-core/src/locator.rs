//! Resource locator: the externally visible address of the current record.
//!
//! In a browser this is the URL path; the wizard only needs to read the
//! identifier once at startup and to point the address at a record (or back
//! at the root) afterwards.

use crate::models::RecordId;

/// Service that exposes the current record identifier to the outside world.
pub trait ResourceLocator {
    /// Points the address at `identifier`, or back at the root when `None`.
    fn set_resource(&mut self, identifier: Option<&RecordId>);

    /// The identifier the session was opened with, read once at startup.
    fn resource_on_startup(&self) -> Option<RecordId>;
}

/// Address for `identifier`: `/<identifier>`, or `/` when there is none.
pub fn resource_path(identifier: Option<&RecordId>) -> String {
    match identifier {
        Some(id) => format!("/{id}"),
        None => "/".to_string(),
    }
}

/// Locator that keeps the address in memory and records every change.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    startup: Option<RecordId>,
    current: Option<RecordId>,
    history: Vec<String>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A locator whose address already points at `identifier`.
    pub fn with_startup(identifier: Option<RecordId>) -> Self {
        Self {
            startup: identifier.clone(),
            current: identifier,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&RecordId> {
        self.current.as_ref()
    }

    pub fn path(&self) -> String {
        resource_path(self.current.as_ref())
    }

    /// Every address pushed through [`ResourceLocator::set_resource`].
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ResourceLocator for MemoryLocator {
    fn set_resource(&mut self, identifier: Option<&RecordId>) {
        self.current = identifier.cloned();
        self.history.push(resource_path(identifier));
    }

    fn resource_on_startup(&self) -> Option<RecordId> {
        self.startup.clone()
    }
}
