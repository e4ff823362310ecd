//! Persistence adapter between wizard records and a [`KeyValueStore`].
//!
//! Records are stored as JSON under their identifier. Reads never fail:
//! a missing key, an unreadable payload or a storage read error all come
//! back as `None`, and the caller starts from a fresh record instead.

use log::{debug, warn};

use crate::{
    error::{Result, WizardError},
    models::{RecordId, WizardRecord},
    store::KeyValueStore,
};

/// Attempts made to find an identifier not already used in the store.
const MAX_ID_ATTEMPTS: usize = 8;

/// Serializes a record to its stored form.
pub fn encode(record: &WizardRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Parses a stored payload, returning `None` for anything malformed.
pub fn decode(payload: &str) -> Option<WizardRecord> {
    serde_json::from_str(payload)
        .map_err(|e| warn!("Discarding unreadable wizard record: {e}"))
        .ok()
}

/// Reads the record stored under `identifier`.
///
/// The returned record always carries `identifier`, whatever the payload
/// says, since that is the key it was found under.
pub fn read(store: &dyn KeyValueStore, identifier: &RecordId) -> Option<WizardRecord> {
    let payload = match store.get(identifier.as_str()) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!("No stored record for '{identifier}'");
            return None;
        }
        Err(e) => {
            warn!("Failed to read record '{identifier}': {e}");
            return None;
        }
    };

    let mut record = decode(&payload)?;
    record.identifier = Some(identifier.clone());
    Some(record)
}

/// Writes `record` under its identifier.
///
/// # Errors
///
/// Returns `WizardError::InvalidInput` if the record has no identifier, or
/// the store's error if the write fails.
pub fn write(store: &mut dyn KeyValueStore, record: &WizardRecord) -> Result<()> {
    let identifier = record.identifier.as_ref().ok_or_else(|| {
        WizardError::invalid_input("identifier").with_reason("cannot store a record without an identifier")
    })?;
    store.set(identifier.as_str(), &encode(record)?)
}

/// Deletes the record stored under `identifier`.
pub fn delete(store: &mut dyn KeyValueStore, identifier: &RecordId) -> Result<()> {
    store.delete(identifier.as_str())
}

/// Generates an identifier, retrying while the store already holds it.
///
/// The check is best effort: after a few collisions (or if the store cannot
/// be read) the last generated identifier is used as is.
pub fn generate_identifier(store: &dyn KeyValueStore) -> RecordId {
    let mut identifier = RecordId::generate();
    for _ in 1..MAX_ID_ATTEMPTS {
        match store.contains(identifier.as_str()) {
            Ok(true) => {
                debug!("Identifier '{identifier}' already taken, regenerating");
                identifier = RecordId::generate();
            }
            Ok(false) | Err(_) => break,
        }
    }
    identifier
}

/// Every readable record in the store. Unreadable entries are skipped.
pub fn list(store: &dyn KeyValueStore) -> Result<Vec<WizardRecord>> {
    let records = store
        .keys()?
        .iter()
        .filter_map(|key| key.parse::<RecordId>().ok())
        .filter_map(|identifier| read(store, &identifier))
        .collect();
    Ok(records)
}
