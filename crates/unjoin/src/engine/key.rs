use crate::schema::{EntityMap, Field};
use crate::{Entity, Row, Value};

/// The identity key one row carries for one entity: the ordered identity
/// column values. Order-significant, compared by value equality.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Key(Vec<Value>);

impl Key {
    /// Whether `entity` was created for this key.
    ///
    /// Compares the entity's identity slots against the key values,
    /// component by component. Identity slots are written on first contact
    /// and never overwritten, so they are a stable record of the key the
    /// entity was created under.
    pub(crate) fn matches(&self, identity: &[Field], entity: &Entity) -> bool {
        identity
            .iter()
            .zip(&self.0)
            .all(|(part, value)| entity.value(&part.name) == Some(value))
    }
}

/// Resolves the identity key `row` carries for `entity_map` under
/// `column_prefix`.
///
/// Returns `None` when any identity column is null or absent from the row,
/// the way an outer join encodes "no related entity here". Identity is
/// resolved independently at every nesting level: one row can carry an
/// identity for a parent while carrying none for a sibling relation.
pub(crate) fn key_of(entity_map: &EntityMap, row: &Row, column_prefix: &str) -> Option<Key> {
    let mut values = Vec::with_capacity(entity_map.identity.len());

    for part in &entity_map.identity {
        match row.get_prefixed(column_prefix, part.column()) {
            None | Some(Value::Null) => return None,
            Some(value) => values.push(value.clone()),
        }
    }

    Some(Key(values))
}
