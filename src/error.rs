/// Error types that can occur during network operations
///
/// # Variants
///
/// - `InputValidationError` - Indicates a constructor argument or input does not meet the expected rules
/// - `ShapeMismatch` - Indicates an array shape does not match the configured network or prediction shape
/// - `InvalidState` - Indicates an operation was called in the wrong state (e.g. `backward` before `forward`)
/// - `NumericDomainError` - Indicates a computation produced or received non-finite values
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ShapeMismatch(String),
    InvalidState(String),
    NumericDomainError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            ModelError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            ModelError::NumericDomainError(msg) => write!(f, "Numeric domain error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}
