//! Dropout stage.
//!
//! The vectors this crate generates describe inference behavior, so a fresh
//! [`Dropout`] starts in eval mode and is an exact bitwise passthrough.
//! Training mode exists for harnesses that exercise the masking datapath:
//! it zeroes elements with probability `p` and scales survivors by
//! `1/(1-p)` (inverted dropout), so the expected value is preserved.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitives::Matrix;

/// Dropout unit of the accelerator datapath.
///
/// # Example
///
/// ```
/// use dorado::primitives::Matrix;
/// use dorado::stages::Dropout;
///
/// let x = Matrix::<f32>::ones(4, 4);
///
/// let dropout = Dropout::new(0.5);
/// assert_eq!(dropout.apply(&x), x); // eval mode: passthrough
///
/// let mut dropout = Dropout::with_seed(0.5, 42);
/// dropout.train();
/// let y = dropout.apply(&x); // ~50% zeros, rest scaled by 2
/// assert_eq!(y.shape(), (4, 4));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Dropout {
    /// Probability of element being zeroed
    p: f32,

    /// Whether in training mode
    training: bool,

    /// Seed for the mask stream; entropy-seeded when absent
    seed: Option<u64>,
}

impl Dropout {
    /// Create a new Dropout stage in eval mode.
    ///
    /// # Arguments
    ///
    /// * `p` - Probability of element being zeroed (must be in [0, 1))
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in [0, 1).
    #[must_use]
    pub fn new(p: f32) -> Self {
        assert!(
            (0.0..1.0).contains(&p),
            "Dropout probability must be in [0, 1), got {p}",
        );

        Self {
            p,
            training: false,
            seed: None,
        }
    }

    /// Create a new Dropout stage with a specific seed for reproducibility.
    ///
    /// The seed fixes the mask stream: every call to [`Dropout::apply`]
    /// starts the stream over, so the same input always produces the same
    /// mask.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in [0, 1).
    #[must_use]
    pub fn with_seed(p: f32, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(p)
        }
    }

    /// Get the dropout probability.
    #[must_use]
    pub fn probability(&self) -> f32 {
        self.p
    }

    /// Switch to training mode (masking enabled).
    pub fn train(&mut self) {
        self.training = true;
    }

    /// Switch to eval mode (exact passthrough).
    pub fn eval(&mut self) {
        self.training = false;
    }

    /// Whether masking is currently enabled.
    #[must_use]
    pub fn training(&self) -> bool {
        self.training
    }

    /// Applies the stage to the input.
    ///
    /// In eval mode (the default) or with `p == 0`, the output is a clone
    /// of the input: bit patterns included, nothing is recomputed. In
    /// training mode the mask is drawn element by element in row-major
    /// order from a fresh RNG, seeded per the constructor.
    #[must_use]
    pub fn apply(&self, input: &Matrix<f32>) -> Matrix<f32> {
        if !self.training || self.p == 0.0 {
            return input.clone();
        }

        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let scale = 1.0 / (1.0 - self.p);

        input.map(|x| {
            if rng.gen::<f32>() < self.p {
                0.0
            } else {
                x * scale
            }
        })
    }
}

impl std::fmt::Debug for Dropout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropout")
            .field("p", &self.p)
            .field("training", &self.training)
            .finish_non_exhaustive()
    }
}
