use crate::error::ModelError;
use crate::neural_network::{Float, Matrix};
use std::fmt;
use std::str::FromStr;

/// Threshold for using parallel computation (number of elements)
const ACTIVATION_PARALLEL_THRESHOLD: usize = 10_000;

/// Activation function selector, supporting ReLU, Sigmoid and Identity
///
/// One selector is chosen for each of the two layers when the network is built and
/// never changes afterwards. Selectors can also be parsed from the string tags
/// `"relu"`, `"sigmoid"` and `"identity"` (`"linear"` is accepted as an alias).
///
/// # Example
/// ```rust
/// use mlp_backprop::neural_network::Activation;
///
/// let f: Activation = "relu".parse().unwrap();
/// assert_eq!(f, Activation::ReLU);
/// assert_eq!(f.derivative_scalar(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    ReLU,
    Sigmoid,
    Identity,
}

impl Activation {
    /// Applies the activation to a single value.
    ///
    /// # Parameters
    ///
    /// * `v` - Pre-activation value
    ///
    /// # Returns
    ///
    /// * `Float` - The activated value
    pub fn apply_scalar(&self, v: Float) -> Float {
        match self {
            Activation::ReLU => {
                if v > 0.0 {
                    v
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + (-v).exp()),
            Activation::Identity => v,
        }
    }

    /// Derivative of the activation evaluated at the pre-activation value `v`.
    ///
    /// The ReLU derivative uses a strict `v > 0` test, so it is 0 at `v == 0`.
    pub fn derivative_scalar(&self, v: Float) -> Float {
        match self {
            Activation::ReLU => {
                if v > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => {
                let s = Activation::Sigmoid.apply_scalar(v);
                s * (1.0 - s)
            }
            Activation::Identity => 1.0,
        }
    }

    /// Forward application of the activation function
    ///
    /// Applies the activation element-wise to the pre-activation tensor.
    ///
    /// # Parameters
    ///
    /// * `z` - Pre-activation tensor
    ///
    /// # Returns
    ///
    /// * `Matrix` - A new tensor with the activation function applied
    pub fn apply(&self, z: &Matrix) -> Matrix {
        if *self == Activation::Identity {
            return z.clone();
        }
        let activation = *self;
        let mut result = z.clone();
        if result.len() >= ACTIVATION_PARALLEL_THRESHOLD {
            result.par_mapv_inplace(|v| activation.apply_scalar(v));
        } else {
            result.mapv_inplace(|v| activation.apply_scalar(v));
        }
        result
    }

    /// Computes the element-wise derivative of the activation
    ///
    /// Unlike an activation layer that differentiates from its cached output, the
    /// derivative here is evaluated at the cached pre-activation, which is what the
    /// network stores.
    ///
    /// # Parameters
    ///
    /// * `z` - Pre-activation tensor from the forward pass
    ///
    /// # Returns
    ///
    /// * `Matrix` - A tensor of the same shape holding the derivative values
    pub fn derivative(&self, z: &Matrix) -> Matrix {
        let activation = *self;
        let mut result = z.clone();
        if result.len() >= ACTIVATION_PARALLEL_THRESHOLD {
            result.par_mapv_inplace(|v| activation.derivative_scalar(v));
        } else {
            result.mapv_inplace(|v| activation.derivative_scalar(v));
        }
        result
    }

    /// Returns the string tag of the activation (`"relu"`, `"sigmoid"` or `"identity"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Activation::ReLU => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Identity => "identity",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relu" => Ok(Activation::ReLU),
            "sigmoid" => Ok(Activation::Sigmoid),
            "identity" | "linear" => Ok(Activation::Identity),
            other => Err(ModelError::InputValidationError(format!(
                "unknown activation '{}', expected one of relu | sigmoid | identity",
                other
            ))),
        }
    }
}
