//! Builder for creating and configuring Wizard sessions.

use std::path::{Path, PathBuf};

use log::debug;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    locator::{MemoryLocator, ResourceLocator},
    models::RecordId,
    store::{KeyValueStore, SqliteStore},
};

/// Builder for creating and configuring Wizard sessions.
///
/// By default the session persists to a SQLite database at the XDG data
/// location and keeps its address in a [`MemoryLocator`].
#[derive(Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    store: Option<Box<dyn KeyValueStore>>,
    locator: Option<Box<dyn ResourceLocator>>,
    startup_resource: Option<RecordId>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `store` instead of opening a database.
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Uses `locator` instead of a [`MemoryLocator`]. Overrides
    /// [`WizardBuilder::with_startup_resource`].
    pub fn with_locator(mut self, locator: impl ResourceLocator + 'static) -> Self {
        self.locator = Some(Box::new(locator));
        self
    }

    /// Identifier the default locator reports at startup; the session loads
    /// it when built.
    pub fn with_startup_resource(mut self, identifier: Option<RecordId>) -> Self {
        self.startup_resource = identifier;
        self
    }

    /// Builds the session, performing the startup load.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if no default path can be resolved,
    /// `WizardError::Configuration` if the database path is a directory,
    /// `WizardError::FileSystem` if the database directory cannot be created,
    /// and `WizardError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<Wizard> {
        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                Box::new(Self::open_database(&db_path)?)
            }
        };

        let locator: Box<dyn ResourceLocator> = match self.locator {
            Some(locator) => locator,
            None => Box::new(MemoryLocator::with_startup(self.startup_resource)),
        };

        Ok(Wizard::start(store, locator))
    }

    fn open_database(db_path: &Path) -> Result<SqliteStore> {
        if db_path.is_dir() {
            return Err(WizardError::Configuration {
                message: format!("database path '{}' is a directory", db_path.display()),
            });
        }
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        debug!("Opening record store at {}", db_path.display());
        SqliteStore::open(db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}
