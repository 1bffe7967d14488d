use crate::Entity;

/// Instantiates entities for one mapping definition.
///
/// A mapping definition may carry a factory so that mapped entities start
/// from something other than [`Entity::new()`], typically pre-seeded slots.
/// Every call must return a fresh value; the engine owns what it creates and
/// pre-seeded slots count as set for first-write-wins purposes.
///
/// Any `Fn() -> Entity` closure is a factory:
///
/// ```
/// use unjoin::{Entity, Value};
/// use unjoin::schema::EntityMap;
///
/// let map = EntityMap::new("userMap")
///     .factory(|| Entity::new().with("kind", Value::from("user")));
/// ```
pub trait Factory: Send + Sync {
    fn create(&self) -> Entity;
}

impl<F> Factory for F
where
    F: Fn() -> Entity + Send + Sync,
{
    fn create(&self) -> Entity {
        self()
    }
}
