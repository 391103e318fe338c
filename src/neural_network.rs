/// Module that contains the activation selector and its element-wise math
pub mod activation;
/// Module that contains the input validation helpers shared by the network and the losses
mod input_validation_function;
/// Module that contains loss function implementations
pub mod loss_function;
/// Module that contains the two-layer network with hand-derived backpropagation
pub mod two_layer_network;

pub use activation::*;
pub use loss_function::*;
pub use two_layer_network::*;

use ndarray::{Array1, Array2};

/// Scalar type used for parameters, activations and losses
pub type Float = f64;

/// Type alias for 2D arrays used as batched tensors, shaped `(rows, cols)`
pub type Matrix = Array2<Float>;

/// Type alias for 1D arrays used as bias vectors
pub type Vector = Array1<Float>;

pub use crate::traits::LossFunction;
