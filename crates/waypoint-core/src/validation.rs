//! Field validation rules.
//!
//! Rules are a static table: each [`FieldRule`] names the field it guards and
//! a check returning an error message when the value is unacceptable. A
//! rule only fires for a field that is dirty, or when a forced pass is
//! requested. Fields without rules keep whatever errors they already carry.

use log::debug;

use crate::models::{Field, FieldTable, ValidationEntry, WizardRecord};

/// Error reported when the contact name is left empty.
pub const NAME_REQUIRED: &str = "Name can't be empty";

/// A named check attached to one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field the rule applies to
    pub field: Field,

    /// Rule identifier, used in logs
    pub name: &'static str,

    /// Returns the error message when `value` is rejected
    pub check: fn(&str) -> Option<String>,
}

/// Every active rule, applied in table order.
pub static RULES: &[FieldRule] = &[FieldRule {
    field: Field::Name,
    name: "name_required",
    check: required_name,
}];

fn required_name(value: &str) -> Option<String> {
    value.is_empty().then(|| NAME_REQUIRED.to_string())
}

/// Rules guarding `field`.
pub fn rules_for(field: Field) -> impl Iterator<Item = &'static FieldRule> {
    RULES.iter().filter(move |rule| rule.field == field)
}

/// Computes fresh validation state for `record` without modifying it.
///
/// With `force_all`, every field is treated as dirty and every rule fires;
/// the returned entries are all marked dirty. Callers merge the result into
/// the next record snapshot.
pub fn validate(record: &WizardRecord, force_all: bool) -> FieldTable<ValidationEntry> {
    FieldTable::from_fn(|field| {
        let current = record.entry(field);
        let dirty = current.dirty || force_all;
        let mut rules = rules_for(field).peekable();

        if !dirty || rules.peek().is_none() {
            return ValidationEntry {
                errors: current.errors.clone(),
                dirty,
            };
        }

        let value = record.value(field);
        let errors: Vec<String> = rules
            .filter_map(|rule| {
                let error = (rule.check)(value);
                if error.is_some() {
                    debug!("Rule '{}' rejected field '{}'", rule.name, field);
                }
                error
            })
            .collect();

        ValidationEntry { errors, dirty }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_name(name: &str, dirty: bool) -> WizardRecord {
        let mut record = WizardRecord::fresh();
        record.data.set(Field::Name, name.to_string());
        record.validation.set(
            Field::Name,
            ValidationEntry {
                errors: Vec::new(),
                dirty,
            },
        );
        record
    }

    #[test]
    fn test_clean_empty_name_is_not_checked() {
        let validation = validate(&record_with_name("", false), false);
        assert!(validation[Field::Name].errors.is_empty());
        assert!(!validation[Field::Name].dirty);
    }

    #[test]
    fn test_dirty_empty_name_is_rejected() {
        let validation = validate(&record_with_name("", true), false);
        assert_eq!(validation[Field::Name].errors, vec![NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn test_forced_pass_checks_clean_fields() {
        let validation = validate(&record_with_name("", false), true);
        assert_eq!(validation[Field::Name].errors, vec![NAME_REQUIRED.to_string()]);
        assert!(validation.iter().all(|(_, entry)| entry.dirty));
    }

    #[test]
    fn test_passing_rule_clears_previous_errors() {
        let mut record = record_with_name("Ada", true);
        record.validation[Field::Name].errors = vec![NAME_REQUIRED.to_string()];

        let validation = validate(&record, false);
        assert!(validation[Field::Name].errors.is_empty());
    }

    #[test]
    fn test_fields_without_rules_keep_their_errors() {
        let mut record = WizardRecord::fresh();
        record.validation[Field::Email].errors = vec!["stale".to_string()];

        let validation = validate(&record, true);
        assert_eq!(validation[Field::Email].errors, vec!["stale".to_string()]);
        assert!(validation[Field::Email].dirty);
    }

    #[test]
    fn test_validate_does_not_touch_input() {
        let record = record_with_name("", true);
        let before = record.clone();
        let _ = validate(&record, true);
        assert_eq!(record, before);
    }

    #[test]
    fn test_rules_for_only_name() {
        assert_eq!(rules_for(Field::Name).count(), 1);
        assert_eq!(rules_for(Field::Email).count(), 0);
    }
}
