use serde::Deserialize;

/// A to-one relation: the parent gains a slot holding a single nested
/// entity, or null when the joined rows carry no related entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    /// Slot name on the parent entity.
    pub name: String,

    /// `mapId` of the definition describing the related entity.
    pub map_id: String,

    /// Prefix scoping the related entity's columns within the row.
    #[serde(default)]
    pub column_prefix: String,
}

impl Association {
    pub fn new(
        name: impl Into<String>,
        map_id: impl Into<String>,
        column_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            map_id: map_id.into(),
            column_prefix: column_prefix.into(),
        }
    }
}

/// A to-many relation: the parent gains a slot holding an ordered,
/// identity-deduplicated sequence of nested entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Slot name on the parent entity.
    pub name: String,

    /// `mapId` of the definition describing the element entities.
    pub map_id: String,

    /// Prefix scoping the element entities' columns within the row.
    #[serde(default)]
    pub column_prefix: String,
}

impl Collection {
    pub fn new(
        name: impl Into<String>,
        map_id: impl Into<String>,
        column_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            map_id: map_id.into(),
            column_prefix: column_prefix.into(),
        }
    }
}
