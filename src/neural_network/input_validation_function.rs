use crate::error::ModelError;
use crate::neural_network::Float;
use ndarray::{ArrayBase, Data, Dimension};

/// Validates that a layer dimension is positive.
///
/// # Parameters
///
/// - `value` - The dimension to validate
/// - `param_name` - The name of the parameter (for error messages)
///
/// # Returns
///
/// - `Ok(())` if the dimension is greater than zero
/// - `Err(ModelError::InputValidationError)` if the dimension is zero
pub(super) fn validate_dimension(value: usize, param_name: &str) -> Result<(), ModelError> {
    if value == 0 {
        return Err(ModelError::InputValidationError(format!(
            "{} must be a positive integer, got 0",
            param_name
        )));
    }
    Ok(())
}

/// Validates that the hidden layer width feeds the second affine map exactly.
pub(super) fn validate_hidden_link(
    linear_1_out_features: usize,
    linear_2_in_features: usize,
) -> Result<(), ModelError> {
    if linear_1_out_features != linear_2_in_features {
        return Err(ModelError::InputValidationError(format!(
            "linear_2_in_features ({}) must equal linear_1_out_features ({})",
            linear_2_in_features, linear_1_out_features
        )));
    }
    Ok(())
}

/// Validates that an array has exactly the expected shape.
///
/// # Parameters
///
/// - `actual` - Shape of the array supplied by the caller
/// - `expected` - Shape the operation requires
/// - `what` - Name of the array (for error messages)
///
/// # Returns
///
/// - `Ok(())` if the shapes are identical
/// - `Err(ModelError::ShapeMismatch)` otherwise
pub(super) fn validate_shape(
    actual: &[usize],
    expected: &[usize],
    what: &str,
) -> Result<(), ModelError> {
    if actual != expected {
        return Err(ModelError::ShapeMismatch(format!(
            "{} has shape {:?}, expected {:?}",
            what, actual, expected
        )));
    }
    Ok(())
}

/// Validates that a batch holds at least one sample.
pub(super) fn validate_non_empty_batch(batch_size: usize, what: &str) -> Result<(), ModelError> {
    if batch_size == 0 {
        return Err(ModelError::InputValidationError(format!(
            "{} must contain at least one sample",
            what
        )));
    }
    Ok(())
}

/// Validates that every value of an array is finite.
///
/// # Returns
///
/// - `Ok(())` if no value is NaN or infinite
/// - `Err(ModelError::NumericDomainError)` naming how many values are non-finite
pub(super) fn validate_finite<S, D>(array: &ArrayBase<S, D>, what: &str) -> Result<(), ModelError>
where
    S: Data<Elem = Float>,
    D: Dimension,
{
    let non_finite = array.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(ModelError::NumericDomainError(format!(
            "{} contains {} non-finite value(s) out of {}",
            what,
            non_finite,
            array.len()
        )));
    }
    Ok(())
}
