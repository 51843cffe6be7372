//! Core compute primitives (Matrix).
//!
//! The pipeline stages all operate on row-major [`Matrix`] values; every
//! intermediate the generator persists is one of these.

mod matrix;

pub use matrix::Matrix;
