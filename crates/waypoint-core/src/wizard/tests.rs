//! Tests for the wizard module.

use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    locator::MemoryLocator,
    models::{Label, PendingSteps, ValidationEntry},
    persistence::encode,
    store::MemoryStore,
    validation::NAME_REQUIRED,
};

/// Helper function to create a session on an empty in-memory store
fn create_test_wizard() -> Wizard {
    Wizard::new(Box::new(MemoryStore::new()), Box::new(MemoryLocator::new()))
}

/// Locator whose address history stays readable after the session takes it
#[derive(Clone, Default)]
struct SharedLocator(Rc<RefCell<MemoryLocator>>);

impl SharedLocator {
    fn history(&self) -> Vec<String> {
        self.0.borrow().history().to_vec()
    }
}

impl ResourceLocator for SharedLocator {
    fn set_resource(&mut self, identifier: Option<&RecordId>) {
        self.0.borrow_mut().set_resource(identifier);
    }

    fn resource_on_startup(&self) -> Option<RecordId> {
        self.0.borrow().resource_on_startup()
    }
}

fn labels(record: &WizardRecord) -> Vec<Label> {
    Step::ALL.iter().map(|step| record.label(*step)).collect()
}

#[test]
fn test_edit_then_change_step_reports_missed_info() {
    let mut wizard = create_test_wizard();
    wizard.edit_field(Field::Name, "Ada").expect("Failed to edit name");
    wizard.change_step(Step::Details);

    let state = wizard.state();
    assert_eq!(state.step, Step::Details);
    assert_eq!(state.label(Step::ContactInfo), Label::MissedInfo);
    assert!(state.entry(Field::Name).errors.is_empty());
}

#[test]
fn test_change_step_without_name_reports_error() {
    let mut wizard = create_test_wizard();
    wizard.change_step(Step::Details);

    let state = wizard.state();
    assert_eq!(state.label(Step::ContactInfo), Label::Error);
    assert_eq!(state.entry(Field::Name).errors, vec![NAME_REQUIRED.to_string()]);
}

#[test]
fn test_change_step_refreshes_target_step() {
    let record = WizardRecord::fresh().change_step(Step::Details);

    assert_eq!(
        record.pending_validation_steps.iter().collect::<Vec<_>>(),
        vec![Step::ContactInfo, Step::Details]
    );
    assert_eq!(record.label(Step::ContactInfo), Label::Error);
    assert_eq!(record.label(Step::Details), Label::MissedInfo);
    assert_eq!(record.label(Step::Items), Label::None);
}

#[test]
fn test_change_to_same_step_is_idempotent() {
    let record = WizardRecord::fresh()
        .edit_field(Field::Name, "Ada")
        .edit_field(Field::Email, "ada@example.com");

    let once = record.change_step(Step::ContactInfo);
    let twice = once.change_step(Step::ContactInfo);
    assert_eq!(labels(&once), labels(&twice));
    assert_eq!(once.label(Step::ContactInfo), Label::Completed);
}

#[test]
fn test_edit_field_clears_errors_and_marks_dirty() {
    for value in ["", "Ada"] {
        let mut record = WizardRecord::fresh();
        record.validation.set(
            Field::Name,
            ValidationEntry {
                errors: vec![NAME_REQUIRED.to_string()],
                dirty: false,
            },
        );

        let edited = record.edit_field(Field::Name, value);
        assert_eq!(edited.entry(Field::Name), &ValidationEntry::touched());
        assert_eq!(edited.value(Field::Name), value);
        // labels are untouched until the next refresh
        assert_eq!(edited.labels, record.labels);
    }
}

#[test]
fn test_cleared_error_returns_on_next_step_change() {
    let record = WizardRecord::fresh()
        .edit_field(Field::Name, "Ada")
        .edit_field(Field::Name, "")
        .change_step(Step::Items);
    assert_eq!(record.entry(Field::Name).errors, vec![NAME_REQUIRED.to_string()]);
    assert_eq!(record.label(Step::ContactInfo), Label::Error);

    let fixed = record.change_step(Step::ContactInfo).edit_field(Field::Name, "Ada");
    assert!(fixed.entry(Field::Name).errors.is_empty());
    assert_eq!(fixed.label(Step::ContactInfo), Label::Error);

    let refreshed = fixed.change_step(Step::Details);
    assert_eq!(refreshed.label(Step::ContactInfo), Label::MissedInfo);
}

#[test]
fn test_transitions_do_not_mutate_prior_snapshot() {
    let before = WizardRecord::fresh();
    let snapshot = before.clone();
    let _ = before.change_step(Step::Items);
    let _ = before.edit_field(Field::Bone, "femur");
    let _ = before.resumed();
    assert_eq!(before, snapshot);
}

#[test]
fn test_edit_field_on_other_step_is_rejected() {
    let mut wizard = create_test_wizard();
    let err = wizard
        .edit_field(Field::DogName, "Rex")
        .expect_err("Editing a field off the current step should fail");
    assert!(matches!(err, WizardError::InvalidInput { .. }));
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_save_assigns_identifier_once() {
    let mut wizard = create_test_wizard();
    let first = wizard.save().expect("Failed to save");
    assert!(!first.as_str().is_empty());

    wizard.edit_field(Field::Email, "ada@example.com").unwrap();
    let second = wizard.save().expect("Failed to save again");
    assert_eq!(first, second);
    assert_eq!(wizard.location(), format!("/{first}"));
    assert_eq!(wizard.saved_records().unwrap().len(), 1);
}

/// Save deliberately drops validation state and returns to the first step.
#[test]
fn test_save_resets_step_and_validation() {
    let mut wizard = create_test_wizard();
    wizard.change_step(Step::Items);
    wizard.edit_field(Field::Bone, "femur").unwrap();
    wizard.save().expect("Failed to save");

    let state = wizard.state();
    assert_eq!(state.step, Step::ContactInfo);
    assert!(state.validation.iter().all(|(_, entry)| entry == &ValidationEntry::default()));
    assert_eq!(state.value(Field::Bone), "femur");
    assert_eq!(state.label(Step::ContactInfo), Label::Error);
    assert!(state.saved_at.is_some());
}

#[test]
fn test_save_then_remove_restores_fresh_state() {
    let mut wizard = create_test_wizard();
    wizard.edit_field(Field::Name, "Ada").unwrap();
    let id = wizard.save().expect("Failed to save");

    wizard.remove().expect("Failed to remove");
    assert_eq!(wizard.state(), &WizardRecord::fresh());
    assert_eq!(wizard.state().identifier, None);
    assert_eq!(wizard.location(), "/");
    assert!(!wizard.store.contains(id.as_str()).unwrap());
}

#[test]
fn test_remove_unsaved_record_resets() {
    let mut wizard = create_test_wizard();
    wizard.edit_field(Field::Name, "Ada").unwrap();
    assert_eq!(wizard.dispatch(Intent::Remove).unwrap(), Outcome::Removed);
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_load_round_trips_field_values() {
    let mut wizard = create_test_wizard();
    wizard.edit_field(Field::Name, "Ada").unwrap();
    wizard.edit_field(Field::Email, "ada@example.com").unwrap();
    wizard.change_step(Step::Details);
    wizard.edit_field(Field::DogName, "Rex").unwrap();
    let id = wizard.save().expect("Failed to save");
    let saved = wizard.state().clone();

    let mut resumed = create_test_wizard();
    resumed.store = wizard.store;
    resumed.load(&id);

    let state = resumed.state();
    assert_eq!(state.identifier.as_ref(), Some(&id));
    assert_eq!(state.data, saved.data);
    assert_eq!(state.pending_validation_steps, PendingSteps::all());
    assert_eq!(
        labels(state),
        vec![Label::Completed, Label::MissedInfo, Label::MissedInfo]
    );
    assert!(state.validation.iter().all(|(_, entry)| entry.dirty));
}

#[test]
fn test_load_overrides_persisted_validation() {
    let mut store = MemoryStore::new();
    let mut record = WizardRecord::fresh();
    record.identifier = Some("stale".parse().unwrap());
    record.validation[Field::Name].errors = vec!["old error".to_string()];
    record.data.set(Field::Name, "Ada".to_string());
    store.set("stale", &encode(&record).unwrap()).unwrap();

    let mut wizard = Wizard::new(Box::new(store), Box::new(MemoryLocator::new()));
    wizard.load(&"stale".parse().unwrap());

    assert!(wizard.state().entry(Field::Name).errors.is_empty());
    assert_eq!(wizard.state().label(Step::ContactInfo), Label::MissedInfo);
}

#[test]
fn test_load_unknown_identifier_is_fresh() {
    let mut wizard = create_test_wizard();
    wizard.edit_field(Field::Name, "Ada").unwrap();
    wizard.load(&"nope".parse().unwrap());
    assert_eq!(wizard.state(), &WizardRecord::fresh());
    assert_eq!(wizard.location(), "/");
}

#[test]
fn test_load_corrupt_payload_is_fresh() {
    let mut store = MemoryStore::new();
    store.set("corrupt", r#"{"identifier":"corrupt","step":"details"}"#).unwrap();

    let locator = MemoryLocator::with_startup(Some("corrupt".parse().unwrap()));
    let wizard = Wizard::start(Box::new(store), Box::new(locator));
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_start_without_resource_is_fresh() {
    let wizard = Wizard::start(Box::new(MemoryStore::new()), Box::new(MemoryLocator::new()));
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_dispatch_routes_intents() {
    let mut wizard = create_test_wizard();
    let outcome = wizard
        .dispatch(Intent::EditField {
            field: Field::Name,
            value: "Ada".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);

    wizard.dispatch(Intent::ChangeStep(Step::Items)).unwrap();
    assert_eq!(wizard.state().step, Step::Items);

    let Outcome::Saved(id) = wizard.dispatch(Intent::Save).unwrap() else {
        panic!("Save should report the identifier");
    };
    assert_eq!(wizard.state().identifier, Some(id));
}

#[test]
fn test_delete_record_resets_open_session() {
    let mut wizard = create_test_wizard();
    let id = wizard.save().unwrap();

    assert!(wizard.delete_record(&id).unwrap());
    assert!(!wizard.delete_record(&id).unwrap());
    assert_eq!(wizard.state(), &WizardRecord::fresh());
}

#[test]
fn test_load_points_locator_at_loaded_record() {
    let mut store = MemoryStore::new();
    for key in ["first", "second"] {
        let mut record = WizardRecord::fresh();
        record.identifier = Some(key.parse().unwrap());
        store.set(key, &encode(&record).unwrap()).unwrap();
    }

    let locator = SharedLocator::default();
    let mut wizard = Wizard::new(Box::new(store), Box::new(locator.clone()));
    wizard.load(&"first".parse().unwrap());
    wizard.load(&"second".parse().unwrap());
    assert_eq!(locator.history(), ["/first", "/second"]);
    assert_eq!(wizard.location(), "/second");

    wizard.load(&"missing".parse().unwrap());
    assert_eq!(locator.history(), ["/first", "/second", "/"]);
    assert_eq!(wizard.location(), "/");
}
