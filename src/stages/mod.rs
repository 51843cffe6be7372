//! Pipeline stages applied after the matrix product.
//!
//! The generator models a fixed-function accelerator datapath: a systolic
//! matrix multiply feeding an element-wise activation, a 2D max-pooling
//! unit, and a dropout unit that is a passthrough at inference time.
//!
//! - **Activation**: [`Activation`] (relu, sigmoid, tanh, identity)
//! - **Pooling**: [`MaxPool2d`] with zero padding and floor-division shapes
//! - **Regularization**: [`Dropout`] (inverted scaling when training)
//!
//! Each stage consumes and produces a [`crate::primitives::Matrix`], so the
//! whole datapath composes by plain function application.

mod activation;
mod dropout;
mod pool;

pub use activation::Activation;
pub use dropout::Dropout;
pub use pool::MaxPool2d;
