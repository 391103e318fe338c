pub use crate::neural_network::activation::Activation;
pub use crate::neural_network::loss_function::*;
pub use crate::neural_network::two_layer_network::*;
pub use crate::neural_network::{Float, Matrix, Vector};
pub use crate::traits::LossFunction;
