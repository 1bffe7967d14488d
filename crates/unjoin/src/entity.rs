use crate::Value;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A mapped node in the object graph under construction.
///
/// Slots are insertion-ordered and explicitly present: a name that is absent
/// is *unset*, while a present slot is set even when it holds null. Scalar
/// slots are first-write-wins: once set, later rows never overwrite them,
/// including legitimately falsy values such as `0`, `""`, or null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    slots: IndexMap<String, Slot>,
}

/// The content of one named slot on an [`Entity`].
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A scalar field, identity components included.
    Value(Value),

    /// A to-one association. `None` when the rows seen so far carried no
    /// related entity; a later row may still produce one.
    One(Option<Entity>),

    /// A to-many collection, ordered and deduplicated by identity.
    Many(Vec<Entity>),
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Returns the scalar value under `name`, if that slot is set and scalar.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.slots.get(name) {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the associated entity under `name`, if one exists.
    ///
    /// Use [`get`](Entity::get) to distinguish an unset association from one
    /// explicitly resolved to null.
    pub fn one(&self, name: &str) -> Option<&Entity> {
        match self.slots.get(name) {
            Some(Slot::One(child)) => child.as_ref(),
            _ => None,
        }
    }

    /// Returns the collection under `name`, if that slot is a collection.
    pub fn many(&self, name: &str) -> Option<&[Entity]> {
        match self.slots.get(name) {
            Some(Slot::Many(items)) => Some(items),
            _ => None,
        }
    }

    /// Sets a slot, replacing any previous content.
    ///
    /// Factories use this to pre-seed entities; a pre-seeded slot counts as
    /// set and is not overwritten by mapped columns.
    pub fn set(&mut self, name: impl Into<String>, slot: impl Into<Slot>) {
        self.slots.insert(name.into(), slot.into());
    }

    /// Sets a slot and returns the entity. Chainable form of
    /// [`set`](Entity::set) for factory closures.
    pub fn with(mut self, name: impl Into<String>, slot: impl Into<Slot>) -> Self {
        self.set(name, slot);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    /// Writes a scalar slot only when `name` is unset.
    pub(crate) fn set_value_if_unset(&mut self, name: &str, value: &Value) {
        if !self.slots.contains_key(name) {
            self.slots.insert(name.to_owned(), Slot::Value(value.clone()));
        }
    }

    /// Sets an association slot, replacing any previous content.
    pub(crate) fn set_one(&mut self, name: &str, child: Option<Entity>) {
        self.slots.insert(name.to_owned(), Slot::One(child));
    }

    /// Returns the existing associated entity under `name`, if any.
    pub(crate) fn one_mut(&mut self, name: &str) -> Option<&mut Entity> {
        match self.slots.get_mut(name) {
            Some(Slot::One(Some(child))) => Some(child),
            _ => None,
        }
    }

    /// Returns the collection under `name`, creating it empty on first use.
    pub(crate) fn many_mut(&mut self, name: &str) -> &mut Vec<Entity> {
        let slot = self
            .slots
            .entry(name.to_owned())
            .or_insert_with(|| Slot::Many(Vec::new()));

        if !matches!(slot, Slot::Many(_)) {
            *slot = Slot::Many(Vec::new());
        }

        let Slot::Many(items) = slot else { unreachable!() };
        items
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Entity> for Slot {
    fn from(child: Entity) -> Self {
        Self::One(Some(child))
    }
}

impl From<Option<Entity>> for Slot {
    fn from(child: Option<Entity>) -> Self {
        Self::One(child)
    }
}

impl From<Vec<Entity>> for Slot {
    fn from(items: Vec<Entity>) -> Self {
        Self::Many(items)
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (name, slot) in &self.slots {
            map.serialize_entry(name, slot)?;
        }
        map.end()
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::One(child) => child.serialize(serializer),
            Self::Many(items) => items.serialize(serializer),
        }
    }
}
