//! Dorado: deterministic golden test vectors for a fixed-function matmul pipeline.
//!
//! Dorado generates the input and expected-output files a hardware
//! simulation harness replays against a systolic-array accelerator. The
//! datapath is fixed: an N x N matrix product, an element-wise activation,
//! 2D max pooling over the top-left region of the activated product, and a
//! dropout unit that is an exact passthrough at inference time. Every value
//! crosses the file boundary as eight lowercase hex characters encoding the
//! raw IEEE-754 float32 bits, so vectors survive the trip into a waveform
//! viewer without rounding.
//!
//! Determinism is the contract: one seed pins every byte of every file.
//!
//! # Quick Start
//!
//! ```
//! use dorado::prelude::*;
//!
//! let config = PipelineConfig::default().with_n(8).with_seed(7);
//! let result = run(&config).unwrap();
//!
//! assert_eq!(result.matmul.shape(), (8, 8));
//! assert_eq!(result.pooled, result.final_output);
//!
//! // Same seed, same bytes.
//! let again = run(&config).unwrap();
//! assert_eq!(result, again);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core row-major Matrix type
//! - [`codec`]: Bit-exact float32 <-> hex word conversion
//! - [`stages`]: Activation, max pooling, and dropout stages
//! - [`synthetic`]: Input matrix synthesis (random, identity, ones, small_int)
//! - [`pipeline`]: Config, validation, and end-to-end execution
//! - [`artifacts`]: Vector-file persistence for the harness
//! - [`error`]: Error types
//! - [`prelude`]: Convenience re-exports

pub mod artifacts;
pub mod codec;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod stages;
pub mod synthetic;

pub use error::{DoradoError, Result};
pub use primitives::Matrix;
