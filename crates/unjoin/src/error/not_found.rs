use super::Error;

/// Error when a required mapping produces no entities.
///
/// Raised by [`map_one`](crate::map_one) when the result set maps to
/// nothing. Callers that can tolerate an empty result use
/// [`map_one_optional`](crate::map_one_optional) instead of catching this.
#[derive(Debug)]
pub(super) struct NotFoundError {
    context: Box<str>,
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not found: {}", self.context)
    }
}

impl Error {
    /// Creates a not-found error with context describing what was missing.
    pub fn not_found(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
