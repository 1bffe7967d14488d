use super::Error;

/// Error when the mapping definitions themselves are unusable.
///
/// This occurs when an association or collection references a `mapId` that
/// the schema does not contain. It is a configuration error: the engine
/// fails fast and never substitutes a default definition.
#[derive(Debug)]
pub(super) struct SchemaError {
    message: Box<str>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema error: {}", self.message)
    }
}

impl Error {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            message: message.into().into(),
        }))
    }

    /// Creates a schema error for a `mapId` the schema does not contain.
    pub fn unknown_map(map_id: &str) -> Error {
        Error::schema(format!("unknown mapId `{map_id}`"))
    }

    /// Returns `true` if this error is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Schema(_))
    }
}
