use super::EntityMap;
use crate::{engine, Entity, Error, Result, Row};

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::Deserialize;

/// An indexed set of mapping definitions, looked up by `map_id`.
///
/// When the same `map_id` appears more than once, the first definition wins.
/// Consistency of the definitions (no dangling or recursive references) is
/// the caller's responsibility; a dangling reference surfaces as a schema
/// error the moment it is dereferenced.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    maps: IndexMap<String, EntityMap>,
}

impl Schema {
    pub fn new(maps: impl IntoIterator<Item = EntityMap>) -> Self {
        let mut index = IndexMap::new();
        for map in maps {
            index.entry(map.map_id.clone()).or_insert(map);
        }
        Self { maps: index }
    }

    /// Looks up a mapping definition by `map_id`.
    pub fn entity_map(&self, map_id: &str) -> Result<&EntityMap> {
        self.maps
            .get(map_id)
            .ok_or_else(|| Error::unknown_map(map_id))
    }

    pub fn contains(&self, map_id: &str) -> bool {
        self.maps.contains_key(map_id)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityMap> {
        self.maps.values()
    }

    /// Maps a result set to the entities described by `map_id`. See
    /// [`map`](crate::map).
    pub fn map(
        &self,
        result_set: &[Row],
        map_id: &str,
        column_prefix: Option<&str>,
    ) -> Result<Vec<Entity>> {
        engine::map(result_set, self, map_id, column_prefix)
    }

    /// Maps a result set to a single required entity. See
    /// [`map_one`](crate::map_one).
    pub fn map_one(
        &self,
        result_set: &[Row],
        map_id: &str,
        column_prefix: Option<&str>,
    ) -> Result<Entity> {
        engine::map_one(result_set, self, map_id, column_prefix)
    }

    /// Maps a result set to a single optional entity. See
    /// [`map_one_optional`](crate::map_one_optional).
    pub fn map_one_optional(
        &self,
        result_set: &[Row],
        map_id: &str,
        column_prefix: Option<&str>,
    ) -> Result<Option<Entity>> {
        engine::map_one_optional(result_set, self, map_id, column_prefix)
    }
}

impl From<Vec<EntityMap>> for Schema {
    fn from(maps: Vec<EntityMap>) -> Self {
        Self::new(maps)
    }
}

impl FromIterator<EntityMap> for Schema {
    fn from_iter<I: IntoIterator<Item = EntityMap>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        Vec::<EntityMap>::deserialize(deserializer).map(Self::new)
    }
}
