//! Synthetic input matrices for the vector pipeline.
//!
//! Besides uniformly random inputs, the generator offers structured kinds
//! whose products are easy to verify by eye: identity (matmul fixed point),
//! all-ones (every product element equals N), and small integers (products
//! are exactly representable, so hand-checking against a waveform viewer
//! doesn't involve rounding).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::primitives::Matrix;

/// The kind of input matrix to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    /// Uniform random values in a half-open range
    #[default]
    Random,
    /// Identity matrix
    Identity,
    /// All ones
    Ones,
    /// Random integers in [-3, 3], stored as floats
    SmallInt,
}

impl MatrixKind {
    /// The canonical lowercase tag for this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Identity => "identity",
            Self::Ones => "ones",
            Self::SmallInt => "small_int",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "identity" => Ok(Self::Identity),
            "ones" => Ok(Self::Ones),
            "small_int" => Ok(Self::SmallInt),
            other => Err(format!(
                "unknown matrix kind '{other}' (expected: random, identity, ones, small_int)"
            )),
        }
    }
}

/// Generates one `n` x `n` matrix of the given kind.
///
/// Random draws fill the matrix in row-major order, one element per draw,
/// so the number of values consumed from `rng` is exactly `n * n` for the
/// random kinds and zero for the structured ones.
///
/// # Panics
///
/// Panics for [`MatrixKind::Random`] if `range` is empty (`min >= max`).
/// [`crate::pipeline::PipelineConfig::validate`] rejects such configs
/// before generation.
#[must_use]
pub fn generate<R: Rng>(kind: MatrixKind, n: usize, range: (f32, f32), rng: &mut R) -> Matrix<f32> {
    match kind {
        MatrixKind::Random => {
            let (min_val, max_val) = range;
            let mut m = Matrix::zeros(n, n);
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, rng.gen_range(min_val..max_val));
                }
            }
            m
        }
        MatrixKind::Identity => Matrix::eye(n),
        MatrixKind::Ones => Matrix::ones(n, n),
        MatrixKind::SmallInt => {
            let mut m = Matrix::zeros(n, n);
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, rng.gen_range(-3..=3) as f32);
                }
            }
            m
        }
    }
}

/// Generates the (A, B) operand pair for one pipeline run.
///
/// A is drawn completely before B from the same stream, with no reseeding
/// in between. Structured kinds consume nothing, so a seeded stream stays
/// untouched for any later stage that shares it.
#[must_use]
pub fn generate_pair<R: Rng>(
    kind: MatrixKind,
    n: usize,
    range: (f32, f32),
    rng: &mut R,
) -> (Matrix<f32>, Matrix<f32>) {
    let a = generate(kind, n, range, rng);
    let b = generate(kind, n, range, rng);
    (a, b)
}
