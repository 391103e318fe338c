use super::input_validation_function::{
    validate_dimension, validate_finite, validate_hidden_link, validate_non_empty_batch,
    validate_shape,
};
use crate::error::ModelError;
use crate::neural_network::{Activation, Float, Matrix, Vector};
use ndarray::{Array1, Array2, ArrayViewMut1, ArrayViewMut2, Axis};
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::{debug, trace};

/// Trainable parameters of a [`TwoLayerNetwork`]
///
/// # Fields
///
/// - `w1` - First-layer weight matrix with shape (hidden_size, input_size)
/// - `b1` - First-layer bias vector with shape (hidden_size)
/// - `w2` - Second-layer weight matrix with shape (output_size, hidden_size)
/// - `b2` - Second-layer bias vector with shape (output_size)
///
/// Shapes are fixed once the set is built. Mutable access goes through array views,
/// so values can be updated in place by an optimizer but never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    w1: Matrix,
    b1: Vector,
    w2: Matrix,
    b2: Vector,
}

impl ParameterSet {
    /// Builds a parameter set from explicit arrays.
    ///
    /// # Parameters
    ///
    /// - `w1` - Weight matrix with shape (hidden_size, input_size)
    /// - `b1` - Bias vector with shape (hidden_size)
    /// - `w2` - Weight matrix with shape (output_size, hidden_size)
    /// - `b2` - Bias vector with shape (output_size)
    ///
    /// # Returns
    ///
    /// - `Ok(ParameterSet)` - If every dimension is positive and the four shapes agree
    /// - `Err(ModelError)` - If a dimension is zero or the shapes are inconsistent
    pub fn new(w1: Matrix, b1: Vector, w2: Matrix, b2: Vector) -> Result<Self, ModelError> {
        let (hidden_size, input_size) = w1.dim();
        let (output_size, linear_2_in_features) = w2.dim();

        validate_dimension(input_size, "input_size")?;
        validate_dimension(hidden_size, "hidden_size")?;
        validate_dimension(output_size, "output_size")?;
        validate_hidden_link(hidden_size, linear_2_in_features)?;
        validate_shape(b1.shape(), &[hidden_size], "b1")?;
        validate_shape(b2.shape(), &[output_size], "b2")?;

        Ok(Self { w1, b1, w2, b2 })
    }

    /// Samples every parameter independently from a standard normal distribution.
    fn random<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut sample = || rng.sample::<Float, _>(StandardNormal);
        let w1 = Array2::from_shape_simple_fn((hidden_size, input_size), &mut sample);
        let b1 = Array1::from_shape_simple_fn(hidden_size, &mut sample);
        let w2 = Array2::from_shape_simple_fn((output_size, hidden_size), &mut sample);
        let b2 = Array1::from_shape_simple_fn(output_size, &mut sample);
        Self { w1, b1, w2, b2 }
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn b1(&self) -> &Vector {
        &self.b1
    }

    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    pub fn b2(&self) -> &Vector {
        &self.b2
    }

    /// Mutable view of `w1` for in-place updates
    pub fn w1_mut(&mut self) -> ArrayViewMut2<'_, Float> {
        self.w1.view_mut()
    }

    /// Mutable view of `b1` for in-place updates
    pub fn b1_mut(&mut self) -> ArrayViewMut1<'_, Float> {
        self.b1.view_mut()
    }

    /// Mutable view of `w2` for in-place updates
    pub fn w2_mut(&mut self) -> ArrayViewMut2<'_, Float> {
        self.w2.view_mut()
    }

    /// Mutable view of `b2` for in-place updates
    pub fn b2_mut(&mut self) -> ArrayViewMut1<'_, Float> {
        self.b2.view_mut()
    }
}

/// Gradients of the loss with respect to each parameter of a [`TwoLayerNetwork`]
///
/// Each field mirrors the shape of the parameter it belongs to. The set is
/// overwritten by every `backward` call and zeroed by `reset_state`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSet {
    dj_dw1: Matrix,
    dj_db1: Vector,
    dj_dw2: Matrix,
    dj_db2: Vector,
}

impl GradientSet {
    fn zeros(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            dj_dw1: Array2::zeros((hidden_size, input_size)),
            dj_db1: Array1::zeros(hidden_size),
            dj_dw2: Array2::zeros((output_size, hidden_size)),
            dj_db2: Array1::zeros(output_size),
        }
    }

    fn fill_zero(&mut self) {
        self.dj_dw1.fill(0.0);
        self.dj_db1.fill(0.0);
        self.dj_dw2.fill(0.0);
        self.dj_db2.fill(0.0);
    }

    /// Gradient with respect to `w1`, shape (hidden_size, input_size)
    pub fn dj_dw1(&self) -> &Matrix {
        &self.dj_dw1
    }

    /// Gradient with respect to `b1`, shape (hidden_size)
    pub fn dj_db1(&self) -> &Vector {
        &self.dj_db1
    }

    /// Gradient with respect to `w2`, shape (output_size, hidden_size)
    pub fn dj_dw2(&self) -> &Matrix {
        &self.dj_dw2
    }

    /// Gradient with respect to `b2`, shape (output_size)
    pub fn dj_db2(&self) -> &Vector {
        &self.dj_db2
    }

    /// Returns true if every gradient entry is exactly zero
    pub fn is_zero(&self) -> bool {
        self.dj_dw1.iter().all(|&v| v == 0.0)
            && self.dj_db1.iter().all(|&v| v == 0.0)
            && self.dj_dw2.iter().all(|&v| v == 0.0)
            && self.dj_db2.iter().all(|&v| v == 0.0)
    }
}

/// Intermediate values of the latest forward pass.
///
/// `pre1`, `post1` and `pre2` keep the batch on the column axis, as produced by
/// `W·xᵀ + b`.
#[derive(Debug, Clone)]
struct ForwardCache {
    /// Input batch, (batch_size, input_size)
    x: Matrix,
    /// (hidden_size, batch_size)
    pre1: Matrix,
    /// (hidden_size, batch_size)
    post1: Matrix,
    /// (output_size, batch_size)
    pre2: Matrix,
}

/// Lifecycle state of a [`TwoLayerNetwork`]
///
/// - `Fresh` - No forward cache is held; `backward` is rejected
/// - `Forwarded` - A forward cache is held; `backward` may be called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    Fresh,
    Forwarded,
}

/// Two-layer fully connected network with hand-derived backpropagation.
///
/// The network computes `y_hat = g(W2 · f(W1 · xᵀ + b1) + b2)` for a batch `x`
/// shaped (batch_size, input_size) and returns `y_hat` shaped
/// (batch_size, output_size). `backward` takes the gradient of a scalar loss with
/// respect to `y_hat` and writes the batch-averaged gradients of every parameter into
/// the network's [`GradientSet`]. Parameter updates are left to the caller.
///
/// # Fields
///
/// - `f_function` - Activation applied after the first affine map
/// - `g_function` - Activation applied after the second affine map
/// - `parameters` - Weights and biases
/// - `grads` - Gradients written by the latest `backward`
/// - `cache` - Intermediate values of the latest `forward`, `None` when fresh
///
/// # Example
/// ```rust
/// use mlp_backprop::prelude::*;
/// use ndarray::Array2;
///
/// let mut net = TwoLayerNetwork::new(3, 4, Activation::ReLU, 4, 2, Activation::Identity).unwrap();
/// let x = Array2::ones((5, 3));
/// let y = Array2::zeros((5, 2));
///
/// let y_hat = net.forward(&x).unwrap();
/// let (loss, dj_dy_hat) = mean_squared_error(&y, &y_hat).unwrap();
/// net.backward(&dj_dy_hat).unwrap();
///
/// assert!(loss >= 0.0);
/// assert_eq!(net.gradients().dj_dw1().dim(), (4, 3));
///
/// // an external optimizer would update `net.parameters_mut()` here
/// net.reset_state();
/// ```
#[derive(Debug, Clone)]
pub struct TwoLayerNetwork {
    f_function: Activation,
    g_function: Activation,
    parameters: ParameterSet,
    grads: GradientSet,
    cache: Option<ForwardCache>,
}

impl TwoLayerNetwork {
    /// Creates a new network with parameters drawn from the thread-local generator.
    ///
    /// # Parameters
    ///
    /// - `linear_1_in_features` - Input size of the first affine map
    /// - `linear_1_out_features` - Output size of the first affine map (hidden size)
    /// - `f_function` - Activation after the first affine map
    /// - `linear_2_in_features` - Input size of the second affine map, must equal `linear_1_out_features`
    /// - `linear_2_out_features` - Output size of the second affine map
    /// - `g_function` - Activation after the second affine map
    ///
    /// # Returns
    ///
    /// - `Ok(TwoLayerNetwork)` - A network with standard-normal parameters and zero gradients
    /// - `Err(ModelError::InputValidationError)` - If a dimension is zero or the hidden sizes differ
    pub fn new(
        linear_1_in_features: usize,
        linear_1_out_features: usize,
        f_function: Activation,
        linear_2_in_features: usize,
        linear_2_out_features: usize,
        g_function: Activation,
    ) -> Result<Self, ModelError> {
        Self::with_rng(
            linear_1_in_features,
            linear_1_out_features,
            f_function,
            linear_2_in_features,
            linear_2_out_features,
            g_function,
            &mut rand::rng(),
        )
    }

    /// Creates a new network drawing its initial parameters from `rng`.
    ///
    /// Same contract as [`TwoLayerNetwork::new`]; a seeded generator makes the
    /// initialization reproducible.
    pub fn with_rng<R: Rng>(
        linear_1_in_features: usize,
        linear_1_out_features: usize,
        f_function: Activation,
        linear_2_in_features: usize,
        linear_2_out_features: usize,
        g_function: Activation,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        validate_dimension(linear_1_in_features, "linear_1_in_features")?;
        validate_dimension(linear_1_out_features, "linear_1_out_features")?;
        validate_dimension(linear_2_in_features, "linear_2_in_features")?;
        validate_dimension(linear_2_out_features, "linear_2_out_features")?;
        validate_hidden_link(linear_1_out_features, linear_2_in_features)?;

        let parameters = ParameterSet::random(
            linear_1_in_features,
            linear_1_out_features,
            linear_2_out_features,
            rng,
        );
        Ok(Self::from_parameters(parameters, f_function, g_function))
    }

    /// Creates a network around an existing parameter set.
    ///
    /// Gradients start at zero and the cache starts empty.
    pub fn from_parameters(
        parameters: ParameterSet,
        f_function: Activation,
        g_function: Activation,
    ) -> Self {
        let (hidden_size, input_size) = parameters.w1.dim();
        let output_size = parameters.w2.nrows();
        debug!(
            input_size,
            hidden_size,
            output_size,
            f = %f_function,
            g = %g_function,
            "built two-layer network"
        );

        Self {
            f_function,
            g_function,
            grads: GradientSet::zeros(input_size, hidden_size, output_size),
            parameters,
            cache: None,
        }
    }

    /// Performs the forward pass.
    ///
    /// Computes `pre1 = W1·xᵀ + b1`, `post1 = f(pre1)`, `pre2 = W2·post1 + b2` and
    /// `y_hat = g(pre2)`, caching `x`, `pre1`, `post1` and `pre2` for `backward`.
    /// Any previous cache is replaced.
    ///
    /// # Parameters
    ///
    /// * `x` - Input batch with shape (batch_size, input_size)
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Predictions with shape (batch_size, output_size)
    /// - `Err(ModelError::ShapeMismatch)` - If the feature dimension is not `input_size`
    /// - `Err(ModelError::InputValidationError)` - If the batch is empty
    /// - `Err(ModelError::NumericDomainError)` - If `x` contains NaN or infinite values
    pub fn forward(&mut self, x: &Matrix) -> Result<Matrix, ModelError> {
        validate_non_empty_batch(x.nrows(), "input batch")?;
        validate_shape(
            x.shape(),
            &[x.nrows(), self.input_size()],
            "input batch",
        )?;
        validate_finite(x, "input batch")?;

        debug!(
            batch_size = x.nrows(),
            input_size = self.input_size(),
            "forward pass"
        );

        let params = &self.parameters;
        let pre1 = &params.w1.dot(&x.t()) + &params.b1.view().insert_axis(Axis(1));
        let post1 = self.f_function.apply(&pre1);
        let pre2 = &params.w2.dot(&post1) + &params.b2.view().insert_axis(Axis(1));
        let y_hat = self.g_function.apply(&pre2).reversed_axes();

        self.cache = Some(ForwardCache {
            x: x.clone(),
            pre1,
            post1,
            pre2,
        });

        Ok(y_hat)
    }

    /// Performs the backward pass.
    ///
    /// For every sample `s` in the cached batch:
    ///
    /// - `dJ/db2_s = dJ/dy_hat_s ⊙ g'(pre2_s)`
    /// - `dJ/dW2_s = dJ/db2_sᵀ ⊗ post1_s`
    /// - `dJ/db1_s = (dJ/db2_s · W2) ⊙ f'(pre1_s)`
    /// - `dJ/dW1_s = dJ/db1_sᵀ ⊗ x_s`
    ///
    /// and each gradient is the mean of its per-sample values over the batch.
    /// Activation derivatives are applied as element-wise products, and the
    /// per-sample outer products are summed by a single matrix product before the
    /// division by the batch size.
    ///
    /// The four gradients are overwritten, not accumulated. The cache is kept, so
    /// `backward` may be called again with another upstream gradient.
    ///
    /// # Parameters
    ///
    /// * `dj_dy_hat` - Gradient of the loss with respect to the output, shape (batch_size, output_size)
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Gradients are available through [`TwoLayerNetwork::gradients`]
    /// - `Err(ModelError::InvalidState)` - If no forward pass has been run since construction or the last reset
    /// - `Err(ModelError::ShapeMismatch)` - If `dj_dy_hat` does not match the cached batch
    pub fn backward(&mut self, dj_dy_hat: &Matrix) -> Result<(), ModelError> {
        let cache = self.cache.as_ref().ok_or_else(|| {
            ModelError::InvalidState(
                "backward called without a preceding forward pass".to_string(),
            )
        })?;

        let batch_size = cache.x.nrows();
        validate_shape(
            dj_dy_hat.shape(),
            &[batch_size, self.output_size()],
            "dJ/dy_hat",
        )?;

        debug!(batch_size, "backward pass");

        // (batch_size, output_size)
        let delta2 = dj_dy_hat * &self.g_function.derivative(&cache.pre2).t();
        // (batch_size, hidden_size)
        let delta1 = &delta2.dot(&self.parameters.w2) * &self.f_function.derivative(&cache.pre1).t();

        let n = batch_size as Float;
        trace!(batch_size, "averaging per-sample gradients over the batch");

        self.grads
            .dj_db2
            .assign(&(delta2.sum_axis(Axis(0)) / n));
        self.grads
            .dj_dw2
            .assign(&(delta2.t().dot(&cache.post1.t()) / n));
        self.grads
            .dj_db1
            .assign(&(delta1.sum_axis(Axis(0)) / n));
        self.grads
            .dj_dw1
            .assign(&(delta1.t().dot(&cache.x) / n));

        Ok(())
    }

    /// Zeroes all gradients in place and drops the forward cache.
    ///
    /// Calling it repeatedly is harmless. After a reset, `backward` is rejected until
    /// the next `forward`.
    pub fn reset_state(&mut self) {
        self.grads.fill_zero();
        self.cache = None;
        trace!("gradients and cache cleared");
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> NetworkState {
        if self.cache.is_some() {
            NetworkState::Forwarded
        } else {
            NetworkState::Fresh
        }
    }

    /// Returns true if a forward cache is held and `backward` may be called.
    pub fn is_forwarded(&self) -> bool {
        self.state() == NetworkState::Forwarded
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Mutable access to the parameters, for an external optimizer.
    ///
    /// The shapes cannot change through this handle. Updating parameters between
    /// `forward` and `backward` makes the cached activations stale.
    pub fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    pub fn gradients(&self) -> &GradientSet {
        &self.grads
    }

    pub fn f_function(&self) -> Activation {
        self.f_function
    }

    pub fn g_function(&self) -> Activation {
        self.g_function
    }

    pub fn input_size(&self) -> usize {
        self.parameters.w1.ncols()
    }

    pub fn hidden_size(&self) -> usize {
        self.parameters.w1.nrows()
    }

    pub fn output_size(&self) -> usize {
        self.parameters.w2.nrows()
    }

    /// Returns the total number of trainable parameters.
    pub fn param_count(&self) -> usize {
        let (input, hidden, output) = (self.input_size(), self.hidden_size(), self.output_size());
        hidden * input + hidden + output * hidden + output
    }
}
