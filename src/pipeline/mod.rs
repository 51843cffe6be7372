//! End-to-end pipeline orchestration.
//!
//! One [`run`] executes the full datapath the generated vectors describe:
//!
//! ```text
//! A, B  -->  C = A x B  -->  activation  -->  top-left region  -->  maxpool  -->  dropout
//! ```
//!
//! Everything downstream of the seed is deterministic: the same
//! [`PipelineConfig`] always produces bit-identical matrices, which is the
//! whole point of golden vectors.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{DoradoError, Result};
use crate::primitives::Matrix;
use crate::stages::{Activation, Dropout, MaxPool2d};
use crate::synthetic::{self, MatrixKind};

/// Edge length of the region handed to the pooling stage.
///
/// The downstream harness feeds its pooling unit from a fixed 5x5 window at
/// the top-left of the activated product, independent of the configured
/// matrix size. Matrices smaller than 5x5 hand over everything they have.
pub const POOL_REGION: usize = 5;

/// Full description of one pipeline run.
///
/// Field defaults mirror the harness defaults: a 32x32 random matmul with
/// relu, 2x2/stride-2 pooling with one ring of zero padding, dropout
/// probability 0.5 (recorded, not applied: vectors describe inference),
/// and seed 42.
///
/// # Example
///
/// ```
/// use dorado::pipeline::PipelineConfig;
/// use dorado::stages::Activation;
///
/// let config = PipelineConfig::default()
///     .with_n(8)
///     .with_activation(Activation::Tanh)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input matrices are `n` x `n`
    pub n: usize,
    /// Activation applied to the matrix product
    pub activation: Activation,
    /// Pooling window height
    pub pool_h: usize,
    /// Pooling window width
    pub pool_w: usize,
    /// Vertical pooling stride; defaults to the window height
    pub stride_h: Option<usize>,
    /// Horizontal pooling stride; defaults to the window width
    pub stride_w: Option<usize>,
    /// Zero rings added around the pool input
    pub pool_padding: usize,
    /// Dropout probability, must be in [0, 1)
    pub dropout_p: f32,
    /// Kind of input matrices to synthesize
    pub matrix_kind: MatrixKind,
    /// Half-open [min, max) range for random values
    pub value_range: (f32, f32),
    /// RNG seed; `None` draws from OS entropy (irreproducible on purpose)
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n: 32,
            activation: Activation::Relu,
            pool_h: 2,
            pool_w: 2,
            stride_h: None,
            stride_w: None,
            pool_padding: 1,
            dropout_p: 0.5,
            matrix_kind: MatrixKind::Random,
            value_range: (-1.0, 1.0),
            seed: Some(42),
        }
    }
}

impl PipelineConfig {
    /// Sets the input matrix size.
    #[must_use]
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Sets the activation function.
    #[must_use]
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the pooling window dimensions.
    #[must_use]
    pub fn with_pool_window(mut self, pool_h: usize, pool_w: usize) -> Self {
        self.pool_h = pool_h;
        self.pool_w = pool_w;
        self
    }

    /// Sets explicit pooling strides (otherwise the window is the stride).
    #[must_use]
    pub fn with_pool_stride(mut self, stride_h: usize, stride_w: usize) -> Self {
        self.stride_h = Some(stride_h);
        self.stride_w = Some(stride_w);
        self
    }

    /// Sets the zero padding around the pool input.
    #[must_use]
    pub fn with_pool_padding(mut self, pool_padding: usize) -> Self {
        self.pool_padding = pool_padding;
        self
    }

    /// Sets the dropout probability.
    #[must_use]
    pub fn with_dropout(mut self, dropout_p: f32) -> Self {
        self.dropout_p = dropout_p;
        self
    }

    /// Sets the kind of input matrices.
    #[must_use]
    pub fn with_matrix_kind(mut self, matrix_kind: MatrixKind) -> Self {
        self.matrix_kind = matrix_kind;
        self
    }

    /// Sets the half-open random value range.
    #[must_use]
    pub fn with_value_range(mut self, min_val: f32, max_val: f32) -> Self {
        self.value_range = (min_val, max_val);
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The edge length of the pool input region for this config.
    #[must_use]
    pub fn pool_region_edge(&self) -> usize {
        self.n.min(POOL_REGION)
    }

    /// Builds the pooling stage this config describes.
    #[must_use]
    pub fn pool(&self) -> MaxPool2d {
        MaxPool2d::with_options(
            (self.pool_h, self.pool_w),
            (
                self.stride_h.unwrap_or(self.pool_h),
                self.stride_w.unwrap_or(self.pool_w),
            ),
        )
        .with_padding(self.pool_padding)
    }

    /// Checks every constraint up front, before any RNG draw or file write.
    ///
    /// # Errors
    ///
    /// Returns [`DoradoError::InvalidConfig`] naming the offending
    /// parameter:
    ///
    /// - `n` must be at least 1
    /// - `dropout_p` must be in [0, 1)
    /// - a random `value_range` must be non-empty (`min < max`)
    /// - the pooling window and strides must be at least 1x1, and the
    ///   window must fit the padded pool region (degenerate combinations
    ///   of tiny `n`, a big window, and no padding are rejected here
    ///   instead of producing empty vector files)
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(DoradoError::invalid_config("n", self.n, ">= 1"));
        }
        if !(0.0..1.0).contains(&self.dropout_p) {
            return Err(DoradoError::invalid_config(
                "dropout_p",
                self.dropout_p,
                "0.0 <= p < 1.0",
            ));
        }
        if self.matrix_kind == MatrixKind::Random {
            let (min_val, max_val) = self.value_range;
            if min_val >= max_val {
                return Err(DoradoError::invalid_config(
                    "value_range",
                    format!("[{min_val}, {max_val})"),
                    "min_val < max_val",
                ));
            }
        }

        let edge = self.pool_region_edge();
        self.pool().output_shape(edge, edge)?;
        Ok(())
    }
}

/// Every intermediate of one pipeline run, in datapath order.
///
/// All six matrices are kept so a failing harness stage can be compared
/// against the exact value it should have produced, not just the final
/// scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// First operand (the "north" matrix)
    pub a: Matrix<f32>,
    /// Second operand (the "west" matrix)
    pub b: Matrix<f32>,
    /// Raw product C = A x B
    pub matmul: Matrix<f32>,
    /// Product after the activation stage
    pub activated: Matrix<f32>,
    /// Pool output over the top-left region of `activated`
    pub pooled: Matrix<f32>,
    /// After the dropout stage; equals `pooled` bit for bit at inference
    pub final_output: Matrix<f32>,
}

impl PipelineResult {
    /// The region the pooling stage consumed, recomputed from `activated`.
    #[must_use]
    pub fn pool_input(&self) -> Matrix<f32> {
        self.activated.top_left(POOL_REGION, POOL_REGION)
    }
}

/// Runs the full pipeline for one config.
///
/// A single RNG is seeded once and threaded through both operand draws (A
/// completely, then B), so a seed pins every byte of the result. The
/// dropout stage runs in eval mode: `final_output` equals `pooled` exactly.
///
/// # Errors
///
/// Returns [`DoradoError::InvalidConfig`] if [`PipelineConfig::validate`]
/// rejects the config, or [`DoradoError::DimensionMismatch`] if an internal
/// shape stops lining up (which would be a bug, not an input problem).
pub fn run(config: &PipelineConfig) -> Result<PipelineResult> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let (a, b) = synthetic::generate_pair(config.matrix_kind, config.n, config.value_range, &mut rng);
    let matmul = a.matmul(&b)?;
    let activated = config.activation.apply(&matmul);

    let edge = config.pool_region_edge();
    let region = activated.top_left(edge, edge);
    let pooled = config.pool().apply(&region)?;

    let final_output = Dropout::new(config.dropout_p).apply(&pooled);

    Ok(PipelineResult {
        a,
        b,
        matmul,
        activated,
        pooled,
        final_output,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
