/// Binary Cross Entropy loss function for binary classification
pub mod binary_cross_entropy;
/// Mean Squared Error loss function
pub mod mean_squared_error;

pub use binary_cross_entropy::*;
pub use mean_squared_error::*;

use super::input_validation_function::{validate_non_empty_batch, validate_shape};
use crate::error::ModelError;
use crate::neural_network::Matrix;

/// Checks that target and prediction tensors are non-empty and identically shaped.
fn validate_loss_inputs(y: &Matrix, y_hat: &Matrix) -> Result<(), ModelError> {
    validate_shape(y.shape(), y_hat.shape(), "target y")?;
    validate_non_empty_batch(y_hat.len(), "prediction y_hat")
}
