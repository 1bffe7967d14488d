mod engine;
pub use engine::{map, map_one, map_one_optional};

mod entity;
pub use entity::{Entity, Slot};

mod error;
pub use error::Error;

mod factory;
pub use factory::Factory;

mod row;
pub use row::Row;

pub mod schema;
pub use schema::Schema;

mod value;
pub use value::Value;

/// A Result type alias that uses unjoin's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
