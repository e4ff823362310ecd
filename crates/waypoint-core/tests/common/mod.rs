use std::path::Path;

use waypoint_core::{models::RecordId, Wizard, WizardBuilder};

/// Helper function to open a session on the database at `db_path`, resuming
/// `resource` when given
pub fn open_wizard(db_path: &Path, resource: Option<&str>) -> Wizard {
    let startup = resource.map(|id| id.parse::<RecordId>().expect("Invalid test identifier"));
    WizardBuilder::new()
        .with_database_path(Some(db_path))
        .with_startup_resource(startup)
        .build()
        .expect("Failed to create wizard")
}
