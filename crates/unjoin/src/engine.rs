mod apply;
use apply::apply_row;

mod key;
use key::key_of;

use crate::schema::{EntityMap, Schema};
use crate::{Entity, Error, Result, Row};

/// Maps a result set to the entities described by `map_id`.
///
/// Rows are folded in input order: top-level and nested entities appear in
/// first-occurrence order, and rows sharing an identity at any nesting level
/// merge into a single entity. The same inputs always produce a
/// structurally identical graph.
pub fn map(
    result_set: &[Row],
    schema: &Schema,
    map_id: &str,
    column_prefix: Option<&str>,
) -> Result<Vec<Entity>> {
    let entity_map = schema.entity_map(map_id)?;
    let column_prefix = column_prefix.unwrap_or("");

    let mut mapped = Vec::new();
    for row in result_set {
        project_row(row, &mut mapped, schema, entity_map, column_prefix)?;
    }

    Ok(mapped)
}

/// Maps a result set to a single entity.
///
/// The result set may still hold many rows (a top-level entity with
/// one-to-many children spans several), so this maps the full set and
/// returns the first entity. Fails with a not-found error when the set maps
/// to nothing; [`map_one_optional`] is the tolerant variant.
pub fn map_one(
    result_set: &[Row],
    schema: &Schema,
    map_id: &str,
    column_prefix: Option<&str>,
) -> Result<Entity> {
    map_one_optional(result_set, schema, map_id, column_prefix)?
        .ok_or_else(|| Error::not_found("EmptyResponse"))
}

/// Like [`map_one`], returning `None` instead of an error when the result
/// set maps to nothing.
pub fn map_one_optional(
    result_set: &[Row],
    schema: &Schema,
    map_id: &str,
    column_prefix: Option<&str>,
) -> Result<Option<Entity>> {
    let mapped = map(result_set, schema, map_id, column_prefix)?;
    Ok(mapped.into_iter().next())
}

/// Routes one row into `sequence`: merges into the element owning the row's
/// identity, or appends a new one, then populates it from the row.
///
/// A row carrying no identity for `entity_map` is skipped entirely: a
/// one-to-many join to nothing leaves the sequence untouched rather than
/// producing a placeholder element.
pub(crate) fn project_row(
    row: &Row,
    sequence: &mut Vec<Entity>,
    schema: &Schema,
    entity_map: &EntityMap,
    column_prefix: &str,
) -> Result<()> {
    let Some(key) = key_of(entity_map, row, column_prefix) else {
        return Ok(());
    };

    let position = sequence
        .iter()
        .position(|entity| key.matches(&entity_map.identity, entity));

    let position = match position {
        Some(position) => position,
        None => {
            sequence.push(entity_map.instantiate());
            sequence.len() - 1
        }
    };

    apply_row(row, &mut sequence[position], schema, entity_map, column_prefix)
}
