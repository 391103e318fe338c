//! A two-layer fully connected neural network with hand-derived backpropagation.
//!
//! Every derivative of the forward pass `y_hat = g(W2 · f(W1 · xᵀ + b1) + b2)` is
//! written out by hand on top of `ndarray`, with no automatic differentiation. The
//! crate stops at gradients: updating parameters, looping over epochs and loading
//! data are left to the caller.
//!
//! # Training step
//!
//! ```rust
//! use mlp_backprop::prelude::*;
//! use ndarray::array;
//!
//! let mut net = TwoLayerNetwork::new(2, 3, Activation::Sigmoid, 3, 1, Activation::Sigmoid).unwrap();
//! let x = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let y = array![[0.0], [1.0], [1.0], [0.0]];
//!
//! let y_hat = net.forward(&x).unwrap();
//! let (_loss, dj_dy_hat) = binary_cross_entropy(&y, &y_hat).unwrap();
//! net.backward(&dj_dy_hat).unwrap();
//!
//! // plain gradient descent, done by the caller
//! let grads = net.gradients().clone();
//! let params = net.parameters_mut();
//! params.w1_mut().scaled_add(-0.1, grads.dj_dw1());
//! params.b1_mut().scaled_add(-0.1, grads.dj_db1());
//! params.w2_mut().scaled_add(-0.1, grads.dj_dw2());
//! params.b2_mut().scaled_add(-0.1, grads.dj_db2());
//!
//! net.reset_state();
//! ```

/// Error types returned by the network and the loss functions
pub mod error;

pub use error::ModelError;

/// Module `neural_network` contains the two-layer network, its activation selector and
/// the loss functions.
///
/// # Components
///
/// - `TwoLayerNetwork` - Owns parameters, gradients and the forward cache; exposes
///   `forward`, `backward` and `reset_state`
/// - `Activation` - Closed set of element-wise activations: ReLU, Sigmoid, Identity
/// - `mean_squared_error` / `MeanSquaredError` - `mean((y_hat - y)^2) / 2` with gradient `y_hat - y`
/// - `binary_cross_entropy` / `BinaryCrossEntropy` - Mean binary cross entropy with
///   gradient `(y_hat - y) / (y_hat * (1 - y_hat))`
pub mod neural_network;

/// Prelude re-exporting the public API
pub mod prelude;

/// Traits shared across the crate
pub mod traits;
