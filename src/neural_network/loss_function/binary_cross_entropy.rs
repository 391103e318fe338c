use super::validate_loss_inputs;
use crate::error::ModelError;
use crate::neural_network::{Float, LossFunction, Matrix};
use ndarray::Zip;
use tracing::warn;

/// Binary Cross Entropy loss function for binary classification
///
/// `J = mean(-y * ln(y_hat) - (1 - y) * ln(1 - y_hat))`, with gradient
/// `dJ/dy_hat = (y_hat - y) / (y_hat * (1 - y_hat))`.
///
/// Predictions must lie strictly inside (0, 1). Values are not clipped: a prediction
/// at or outside the interval yields a non-finite loss or gradient, which is returned
/// as `ModelError::NumericDomainError` instead of being passed on silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCrossEntropy;

impl BinaryCrossEntropy {
    /// Creates a new instance of BinaryCrossEntropy
    pub fn new() -> Self {
        Self {}
    }
}

/// Turns a non-finite result into an error, logging it on the way out.
fn ensure_finite(value_count: usize, non_finite: usize, what: &str) -> Result<(), ModelError> {
    if non_finite > 0 {
        warn!(non_finite, value_count, "{} produced non-finite values", what);
        return Err(ModelError::NumericDomainError(format!(
            "{} produced {} non-finite value(s) out of {}; predictions must lie strictly in (0, 1)",
            what, non_finite, value_count
        )));
    }
    Ok(())
}

impl LossFunction for BinaryCrossEntropy {
    fn compute_loss(&self, y: &Matrix, y_hat: &Matrix) -> Result<Float, ModelError> {
        validate_loss_inputs(y, y_hat)?;

        let mut losses = Matrix::zeros(y_hat.raw_dim());
        Zip::from(&mut losses)
            .and(y)
            .and(y_hat)
            .for_each(|l, &t, &p| *l = -t * p.ln() - (1.0 - t) * (1.0 - p).ln());

        let non_finite = losses.iter().filter(|v| !v.is_finite()).count();
        ensure_finite(losses.len(), non_finite, "binary cross entropy loss")?;

        let n = losses.len() as Float;
        Ok(losses.sum() / n)
    }

    fn compute_grad(&self, y: &Matrix, y_hat: &Matrix) -> Result<Matrix, ModelError> {
        validate_loss_inputs(y, y_hat)?;

        let mut grad = Matrix::zeros(y_hat.raw_dim());
        Zip::from(&mut grad)
            .and(y)
            .and(y_hat)
            .for_each(|g, &t, &p| *g = (p - t) / (p * (1.0 - p)));

        let non_finite = grad.iter().filter(|v| !v.is_finite()).count();
        ensure_finite(grad.len(), non_finite, "binary cross entropy gradient")?;

        Ok(grad)
    }
}

/// Computes the binary cross entropy and its gradient with respect to `y_hat`.
///
/// # Parameters
///
/// - `y` - Target tensor with shape (batch_size, output_size), usually 0/1 labels
/// - `y_hat` - Prediction tensor with the same shape, every entry strictly in (0, 1)
///
/// # Returns
///
/// - `Ok((Float, Matrix))` - The mean loss and the gradient `(y_hat - y) / (y_hat * (1 - y_hat))`
/// - `Err(ModelError::ShapeMismatch)` - If the shapes differ
/// - `Err(ModelError::NumericDomainError)` - If a prediction lies outside (0, 1)
pub fn binary_cross_entropy(y: &Matrix, y_hat: &Matrix) -> Result<(Float, Matrix), ModelError> {
    BinaryCrossEntropy::new().loss_and_grad(y, y_hat)
}
