//! Declarative mapping definitions

mod entity_map;
pub use entity_map::EntityMap;

mod field;
pub use field::Field;

mod relation;
pub use relation::{Association, Collection};

mod schema;
pub use schema::Schema;
