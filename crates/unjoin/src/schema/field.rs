use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use std::fmt;

/// One scalar mapping: entity field `name`, read from a row column.
///
/// The column name defaults to the field name. In the declarative format a
/// field may be given as a bare string (`"name"`) or as an object
/// (`{"name": "firstName", "column": "first_name"}`); the shorthand is
/// resolved here, at load time, so the engine never sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name of the slot on the mapped entity.
    pub name: String,

    /// Column the value is read from; `None` means "same as `name`".
    pub column: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
        }
    }

    pub fn with_column(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: Some(column.into()),
        }
    }

    /// The column this field reads from.
    pub fn column(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for Field {
    fn from((name, column): (&str, &str)) -> Self {
        Self::with_column(name, column)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a field name or a {name, column} object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                Ok(Field::new(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Field, A::Error> {
                let mut name: Option<String> = None;
                let mut column: Option<String> = None;

                while let Some(key) = access.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(access.next_value()?),
                        "column" => column = Some(access.next_value()?),
                        other => {
                            return Err(de::Error::unknown_field(other, &["name", "column"]));
                        }
                    }
                }

                let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
                Ok(Field { name, column })
            }
        }

        deserializer.deserialize_any(FieldVisitor)
    }
}
