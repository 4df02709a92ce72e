/// Error types for chart and table model operations.
use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Error types for model operations.
///
/// All failures are raised synchronously at the offending setter or
/// constructor call; serialization never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A numeric argument was negative or out of the schema's unsigned range
    #[error("invalid argument for {context}: {value} is not a non-negative integer")]
    InvalidArgument {
        context: &'static str,
        value: i64,
    },

    /// A value could not be coerced to the type the field requires
    #[error("type mismatch for {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        got: String,
    },
}
