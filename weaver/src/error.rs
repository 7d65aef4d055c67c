use thiserror::Error;

/// Result type for the `object_weaver` library
pub type Result<T> = core::result::Result<T, error_stack::Report<Error>>;

/// Errors surfaced by the mapping entry points
#[derive(Error)]
pub enum Error {
    /// The object handed to a custom mapper is not the mapper's source type
    #[error("Type mismatch: expected source of type `{expected}`")]
    TypeMismatch {
        /// Type name the mapper accepts
        expected: &'static str,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected } => f
                .debug_struct("TypeMismatch")
                .field("expected", expected)
                .finish(),
        }
    }
}

impl Error {
    /// Create a type mismatch error for the expected source type `S`
    pub fn type_mismatch<S: ?Sized>() -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<S>(),
        }
    }
}
