use crate::error::ModelError;
use crate::neural_network::{Float, Matrix};

/// Defines the interface for loss functions used with the two-layer network.
///
/// A loss maps a target tensor `y` and a prediction tensor `y_hat`, both shaped
/// `(batch_size, output_size)`, to a scalar loss and to the gradient of that loss
/// with respect to `y_hat`. The gradient is fed directly into
/// [`TwoLayerNetwork::backward`](crate::neural_network::TwoLayerNetwork::backward),
/// which performs the averaging over the batch.
pub trait LossFunction {
    /// Computes the scalar loss between target and predicted values.
    ///
    /// # Parameters
    ///
    /// - `y` - Tensor containing the ground truth values
    /// - `y_hat` - Tensor containing the predicted values
    ///
    /// # Returns
    ///
    /// - `Ok(Float)` - The scalar loss value
    /// - `Err(ModelError)` - If the shapes differ or the result is not finite
    fn compute_loss(&self, y: &Matrix, y_hat: &Matrix) -> Result<Float, ModelError>;

    /// Computes the gradient of the loss with respect to the predictions.
    ///
    /// # Parameters
    ///
    /// - `y` - Tensor containing the ground truth values
    /// - `y_hat` - Tensor containing the predicted values
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Gradient tensor shaped like `y_hat`
    /// - `Err(ModelError)` - If the shapes differ or the result is not finite
    fn compute_grad(&self, y: &Matrix, y_hat: &Matrix) -> Result<Matrix, ModelError>;

    /// Computes the loss and its gradient in one call.
    fn loss_and_grad(&self, y: &Matrix, y_hat: &Matrix) -> Result<(Float, Matrix), ModelError> {
        Ok((self.compute_loss(y, y_hat)?, self.compute_grad(y, y_hat)?))
    }
}
