//! Element-wise activation functions.

use serde::{Deserialize, Serialize};

use crate::primitives::Matrix;

/// Activation applied element-wise to the matrix product.
///
/// The set is closed: the datapath implements exactly these four functions.
/// Tags that name anything else resolve to [`Activation::Identity`], so a
/// harness asking for an unsupported function still gets well-defined
/// vectors rather than an error.
///
/// # Example
///
/// ```
/// use dorado::stages::Activation;
///
/// assert_eq!(Activation::from_tag("relu"), Activation::Relu);
/// assert_eq!(Activation::from_tag("none"), Activation::Identity);
/// assert_eq!(Activation::Relu.apply_scalar(-3.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// max(x, 0)
    #[default]
    Relu,
    /// 1 / (1 + e^-x), with the input clamped to [-500, 500] first
    Sigmoid,
    /// Hyperbolic tangent
    Tanh,
    /// Passthrough
    Identity,
}

impl Activation {
    /// Resolves a textual tag to an activation.
    ///
    /// Recognized tags are `"relu"`, `"sigmoid"`, `"tanh"`, and
    /// `"identity"`. Anything else (including the legacy `"none"`
    /// spelling) falls back to [`Activation::Identity`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "relu" => Self::Relu,
            "sigmoid" => Self::Sigmoid,
            "tanh" => Self::Tanh,
            "identity" => Self::Identity,
            _ => Self::Identity,
        }
    }

    /// The canonical lowercase tag for this activation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::Identity => "identity",
        }
    }

    /// Applies the activation to a single value.
    ///
    /// Sigmoid clamps its input to [-500, 500] before exponentiating so
    /// that extreme values saturate to 0.0 or 1.0 instead of producing
    /// NaN. In f32 the exponential still reaches infinity near the clamp
    /// bound, but `1 / (1 + inf)` is a clean 0.0.
    #[must_use]
    pub fn apply_scalar(self, x: f32) -> f32 {
        match self {
            Self::Relu => x.max(0.0),
            Self::Sigmoid => 1.0 / (1.0 + (-x.clamp(-500.0, 500.0)).exp()),
            Self::Tanh => x.tanh(),
            Self::Identity => x,
        }
    }

    /// Applies the activation element-wise, preserving the shape.
    #[must_use]
    pub fn apply(self, input: &Matrix<f32>) -> Matrix<f32> {
        input.map(|x| self.apply_scalar(x))
    }
}
