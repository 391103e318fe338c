/// Prelude module for the two-layer network, its activations and loss functions.
pub mod neural_network_prelude;

pub use crate::error::ModelError;
pub use neural_network_prelude::*;
