mod common;

use tempfile::TempDir;
use waypoint_core::{
    models::{Field, Label, Step, WizardRecord},
    KeyValueStore, SqliteStore, WizardBuilder, WizardError,
};

#[test]
fn test_builder_creates_database_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("wizard.db");

    let wizard = common::open_wizard(&db_path, None);
    assert!(db_path.exists());
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_builder_rejects_directory_as_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = WizardBuilder::new().with_database_path(Some(temp_dir.path())).build();
    assert!(matches!(result, Err(WizardError::Configuration { .. })));
}

#[test]
fn test_save_then_resume_in_new_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let id = {
        let mut wizard = common::open_wizard(&db_path, None);
        wizard.edit_field(Field::Name, "Ada").unwrap();
        wizard.edit_field(Field::Email, "ada@example.com").unwrap();
        wizard.change_step(Step::Items);
        wizard.edit_field(Field::Bone, "femur").unwrap();
        wizard.edit_field(Field::Box, "crate").unwrap();
        wizard.save().expect("Failed to save")
    };

    let resumed = common::open_wizard(&db_path, Some(id.as_str()));
    let state = resumed.state();
    assert_eq!(state.identifier.as_ref(), Some(&id));
    assert_eq!(state.step, Step::ContactInfo);
    assert_eq!(state.value(Field::Name), "Ada");
    assert_eq!(state.value(Field::Bone), "femur");
    assert_eq!(state.label(Step::ContactInfo), Label::Completed);
    assert_eq!(state.label(Step::Details), Label::MissedInfo);
    assert_eq!(state.label(Step::Items), Label::Completed);
    assert!(state.saved_at.is_some());
    assert_eq!(resumed.location(), format!("/{id}"));
}

#[test]
fn test_resume_accepts_resource_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let id = common::open_wizard(&db_path, None).save().unwrap();
    let path = format!("/{id}");

    let resumed = common::open_wizard(&db_path, Some(&path));
    assert_eq!(resumed.state().identifier.as_ref(), Some(&id));
}

#[test]
fn test_resume_unknown_identifier_is_fresh() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let wizard = common::open_wizard(&db_path, Some("does-not-exist"));
    assert_eq!(wizard.state(), &WizardRecord::fresh());
    assert_eq!(wizard.location(), "/");
}

#[test]
fn test_resume_payload_missing_field_is_fresh() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut payload: serde_json::Value =
        serde_json::to_value(WizardRecord::fresh()).expect("Failed to encode record");
    payload["data"]["items"]
        .as_object_mut()
        .expect("items should be an object")
        .remove("box");
    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set("partial", &payload.to_string()).unwrap();
        store.set("garbage", "not json at all").unwrap();
    }

    for id in ["partial", "garbage"] {
        let wizard = common::open_wizard(&db_path, Some(id));
        assert_eq!(wizard.state(), &WizardRecord::fresh(), "{id}");
    }
}

#[test]
fn test_saved_records_skip_unreadable_payloads() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let mut wizard = common::open_wizard(&db_path, None);
        wizard.edit_field(Field::Name, "Ada").unwrap();
        wizard.save().unwrap();
        wizard.remove().unwrap();
        wizard.edit_field(Field::Name, "Grace").unwrap();
        wizard.save().unwrap();
    }
    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set("garbage", "{").unwrap();
    }

    let wizard = common::open_wizard(&db_path, None);
    let records = wizard.saved_records().expect("Failed to list records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value(Field::Name), "Grace");
}
