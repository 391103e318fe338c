use super::validate_loss_inputs;
use crate::error::ModelError;
use crate::neural_network::{Float, LossFunction, Matrix};

/// Mean Squared Error loss function
///
/// `J = mean((y_hat - y)^2) / 2`, averaged over every element.
///
/// The gradient returned is the plain difference `y_hat - y`. It is deliberately not
/// divided by the batch size or the number of outputs: the network's backward pass
/// averages over the batch itself.
///
/// # Example
///
/// ```rust
/// use mlp_backprop::neural_network::loss_function::*;
/// use mlp_backprop::neural_network::LossFunction;
/// use ndarray::array;
///
/// let mse = MeanSquaredError::new();
///
/// let y = array![[1.0], [2.0], [3.0]];
/// let y_hat = array![[1.1], [2.2], [2.8]];
///
/// let loss = mse.compute_loss(&y, &y_hat).unwrap();
/// let grad = mse.compute_grad(&y, &y_hat).unwrap();
/// assert!((loss - 0.015).abs() < 1e-12);
/// assert!((grad[[1, 0]] - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// Creates a new instance of MeanSquaredError
    pub fn new() -> Self {
        Self {}
    }
}

impl LossFunction for MeanSquaredError {
    fn compute_loss(&self, y: &Matrix, y_hat: &Matrix) -> Result<Float, ModelError> {
        validate_loss_inputs(y, y_hat)?;

        let squared_diff = (y_hat - y).mapv(|d| d * d);
        let n = squared_diff.len() as Float;
        Ok(squared_diff.sum() / n / 2.0)
    }

    fn compute_grad(&self, y: &Matrix, y_hat: &Matrix) -> Result<Matrix, ModelError> {
        validate_loss_inputs(y, y_hat)?;

        Ok(y_hat - y)
    }
}

/// Computes the mean squared error and its gradient with respect to `y_hat`.
///
/// # Parameters
///
/// - `y` - Target tensor with shape (batch_size, output_size)
/// - `y_hat` - Prediction tensor with the same shape
///
/// # Returns
///
/// - `Ok((Float, Matrix))` - The loss `mean((y_hat - y)^2) / 2` and the gradient `y_hat - y`
/// - `Err(ModelError::ShapeMismatch)` - If the shapes differ
/// - `Err(ModelError::InputValidationError)` - If the tensors are empty
pub fn mean_squared_error(y: &Matrix, y_hat: &Matrix) -> Result<(Float, Matrix), ModelError> {
    MeanSquaredError::new().loss_and_grad(y, y_hat)
}
