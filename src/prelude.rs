//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use dorado::prelude::*;
//! ```

pub use crate::artifacts::{write_vectors, VectorFiles};
pub use crate::error::{DoradoError, Result};
pub use crate::pipeline::{run, PipelineConfig, PipelineResult, POOL_REGION};
pub use crate::primitives::Matrix;
pub use crate::stages::{Activation, Dropout, MaxPool2d};
pub use crate::synthetic::MatrixKind;
