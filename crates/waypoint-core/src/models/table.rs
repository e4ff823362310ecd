//! Fixed-shape tables keyed by [`Field`] and [`Step`].
//!
//! Field values, validation entries and labels all live in tables whose
//! shape is fixed at compile time, so a table can never be missing a slot.
//! Serialization uses nested JSON maps (`{"contact_info": {"name": ...}}`)
//! and deserialization rejects any payload that does not fill every slot.

use std::{
    collections::BTreeMap,
    fmt,
    ops::{Index, IndexMut},
};

use serde::{
    de::{self, Deserializer},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

use super::{Field, Step};

/// One value per [`Field`], grouped by step when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTable<T>([T; Field::COUNT]);

impl<T> FieldTable<T> {
    /// Builds a table by calling `f` once per field.
    pub fn from_fn(mut f: impl FnMut(Field) -> T) -> Self {
        Self(std::array::from_fn(|index| f(Field::ALL[index])))
    }

    pub fn get(&self, field: Field) -> &T {
        &self.0[field.index()]
    }

    pub fn set(&mut self, field: Field, value: T) {
        self.0[field.index()] = value;
    }

    /// Iterates every field in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterates the fields of one step in display order.
    pub fn in_step(&self, step: Step) -> impl Iterator<Item = (Field, &T)> + '_ {
        step.fields().iter().map(move |&field| (field, self.get(field)))
    }
}

impl<T: Default> Default for FieldTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Field> for FieldTable<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        self.get(field)
    }
}

impl<T> IndexMut<Field> for FieldTable<T> {
    fn index_mut(&mut self, field: Field) -> &mut T {
        &mut self.0[field.index()]
    }
}

struct StepRow<'a, T> {
    table: &'a FieldTable<T>,
    step: Step,
}

impl<T: Serialize> Serialize for StepRow<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.table.in_step(self.step))
    }
}

impl<T: Serialize> Serialize for FieldTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Step::COUNT))?;
        for step in Step::ALL {
            map.serialize_entry(&step, &StepRow { table: self, step })?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = BTreeMap::<Step, BTreeMap<Field, T>>::deserialize(deserializer)?;

        let mut slots: BTreeMap<Field, T> = BTreeMap::new();
        for (step, row) in rows {
            for (field, value) in row {
                if field.step() != step {
                    return Err(de::Error::custom(format!(
                        "field '{field}' does not belong to step '{step}'"
                    )));
                }
                slots.insert(field, value);
            }
        }

        let mut values = Vec::with_capacity(Field::COUNT);
        for field in Field::ALL {
            let value = slots.remove(&field).ok_or_else(|| {
                de::Error::custom(format!("missing field '{field}' in step '{}'", field.step()))
            })?;
            values.push(value);
        }

        <[T; Field::COUNT]>::try_from(values)
            .map(Self)
            .map_err(|_| de::Error::custom("field table has the wrong number of slots"))
    }
}

/// One value per [`Step`], serialized as a map keyed by step name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTable<T>([T; Step::COUNT]);

impl<T> StepTable<T> {
    /// Builds a table by calling `f` once per step.
    pub fn from_fn(mut f: impl FnMut(Step) -> T) -> Self {
        Self(std::array::from_fn(|index| f(Step::ALL[index])))
    }

    pub fn get(&self, step: Step) -> &T {
        &self.0[step.index()]
    }

    /// Iterates every step in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Step, &T)> {
        Step::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Default> Default for StepTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Step> for StepTable<T> {
    type Output = T;

    fn index(&self, step: Step) -> &T {
        self.get(step)
    }
}

impl<T> IndexMut<Step> for StepTable<T> {
    fn index_mut(&mut self, step: Step) -> &mut T {
        &mut self.0[step.index()]
    }
}

impl<T: Serialize> Serialize for StepTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StepTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = BTreeMap::<Step, T>::deserialize(deserializer)?;

        let mut values = Vec::with_capacity(Step::COUNT);
        for step in Step::ALL {
            let value = entries
                .remove(&step)
                .ok_or_else(|| de::Error::custom(format!("missing step '{step}'")))?;
            values.push(value);
        }

        <[T; Step::COUNT]>::try_from(values)
            .map(Self)
            .map_err(|_| de::Error::custom("step table has the wrong number of slots"))
    }
}

/// Steps whose label must be recomputed on the next refresh.
///
/// Stored as one flag per step and always iterated in declaration order.
/// Serialized as a JSON array of step names.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingSteps([bool; Step::COUNT]);

impl PendingSteps {
    /// Every step pending.
    pub fn all() -> Self {
        Self([true; Step::COUNT])
    }

    /// Only `step` pending.
    pub fn only(step: Step) -> Self {
        Self::default().with(step)
    }

    /// Returns a copy with `step` marked pending.
    pub fn with(mut self, step: Step) -> Self {
        self.insert(step);
        self
    }

    pub fn insert(&mut self, step: Step) {
        self.0[step.index()] = true;
    }

    pub fn contains(&self, step: Step) -> bool {
        self.0[step.index()]
    }

    /// Pending steps in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Step> + '_ {
        Step::ALL.into_iter().filter(|step| self.contains(*step))
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|pending| **pending).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PendingSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Step> for PendingSteps {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

impl Serialize for PendingSteps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for PendingSteps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Step>::deserialize(deserializer)?.into_iter().collect())
    }
}

#[cfg(feature = "schema")]
mod schema {
    use std::{borrow::Cow, collections::BTreeMap};

    use schemars::{JsonSchema, Schema, SchemaGenerator};

    use super::{Field, FieldTable, PendingSteps, Step, StepTable};

    impl<T: JsonSchema> JsonSchema for FieldTable<T> {
        fn schema_name() -> Cow<'static, str> {
            format!("FieldTable_for_{}", T::schema_name()).into()
        }

        fn json_schema(generator: &mut SchemaGenerator) -> Schema {
            <BTreeMap<Step, BTreeMap<Field, T>>>::json_schema(generator)
        }
    }

    impl<T: JsonSchema> JsonSchema for StepTable<T> {
        fn schema_name() -> Cow<'static, str> {
            format!("StepTable_for_{}", T::schema_name()).into()
        }

        fn json_schema(generator: &mut SchemaGenerator) -> Schema {
            <BTreeMap<Step, T>>::json_schema(generator)
        }
    }

    impl JsonSchema for PendingSteps {
        fn schema_name() -> Cow<'static, str> {
            "PendingSteps".into()
        }

        fn json_schema(generator: &mut SchemaGenerator) -> Schema {
            <Vec<Step>>::json_schema(generator)
        }
    }
}
