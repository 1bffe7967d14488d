use super::key::key_of;
use super::project_row;
use crate::schema::{EntityMap, Schema};
use crate::{Entity, Result, Row};

/// Populates one graph node from one row, recursing into its associations
/// and collections.
///
/// Scalar writes are first-write-wins: identity components and fields are
/// written only into unset slots, so repeated rows accumulate into the node
/// without clobbering what earlier rows established.
///
/// Only called for rows that resolved an identity for `target`; the caller
/// owns that check.
pub(crate) fn apply_row(
    row: &Row,
    target: &mut Entity,
    schema: &Schema,
    entity_map: &EntityMap,
    column_prefix: &str,
) -> Result<()> {
    for part in &entity_map.identity {
        if let Some(value) = row.get_prefixed(column_prefix, part.column()) {
            target.set_value_if_unset(&part.name, value);
        }
    }

    for field in &entity_map.fields {
        if let Some(value) = row.get_prefixed(column_prefix, field.column()) {
            target.set_value_if_unset(&field.name, value);
        }
    }

    for association in &entity_map.associations {
        let child_map = schema.entity_map(&association.map_id)?;

        // An existing child keeps absorbing descendant data from later rows.
        if let Some(child) = target.one_mut(&association.name) {
            apply_row(row, child, schema, child_map, &association.column_prefix)?;
            continue;
        }

        // Unset slot, or a null left by earlier rows: a later row may still
        // carry the related entity, so identity is re-resolved each time.
        match key_of(child_map, row, &association.column_prefix) {
            None => target.set_one(&association.name, None),
            Some(_) => {
                let mut child = child_map.instantiate();
                apply_row(row, &mut child, schema, child_map, &association.column_prefix)?;
                target.set_one(&association.name, Some(child));
            }
        }
    }

    for collection in &entity_map.collections {
        let child_map = schema.entity_map(&collection.map_id)?;
        let sequence = target.many_mut(&collection.name);
        project_row(row, sequence, schema, child_map, &collection.column_prefix)?;
    }

    Ok(())
}
