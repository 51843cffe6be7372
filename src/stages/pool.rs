//! 2D max pooling with zero padding.

use crate::error::{DoradoError, Result};
use crate::primitives::Matrix;

/// Max pooling over a single 2D feature map.
///
/// The input is first surrounded by `padding` rings of zeros, then a
/// `kernel_h` x `kernel_w` window slides over it at the configured strides
/// and keeps the maximum of each placement. Windows never extend past the
/// padded input; positions that don't fit are dropped (floor division).
///
/// # Shape
///
/// - Input: `(H, W)`
/// - Output: `((H + 2*padding - kernel_h) / stride_h + 1, (W + 2*padding - kernel_w) / stride_w + 1)`
///
/// # Example
///
/// ```
/// use dorado::primitives::Matrix;
/// use dorado::stages::MaxPool2d;
///
/// let input = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let pooled = MaxPool2d::new(2).apply(&input).unwrap();
/// assert_eq!(pooled.shape(), (1, 1));
/// assert_eq!(pooled.get(0, 0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxPool2d {
    kernel_h: usize,
    kernel_w: usize,
    stride_h: usize,
    stride_w: usize,
    padding: usize,
}

impl MaxPool2d {
    /// Create a new `MaxPool2d` with square kernel, stride equal to the
    /// kernel, and no padding.
    #[must_use]
    pub fn new(kernel_size: usize) -> Self {
        Self {
            kernel_h: kernel_size,
            kernel_w: kernel_size,
            stride_h: kernel_size,
            stride_w: kernel_size,
            padding: 0,
        }
    }

    /// Create `MaxPool2d` with custom stride.
    #[must_use]
    pub fn with_stride(kernel_size: usize, stride: usize) -> Self {
        Self {
            kernel_h: kernel_size,
            kernel_w: kernel_size,
            stride_h: stride,
            stride_w: stride,
            padding: 0,
        }
    }

    /// Create `MaxPool2d` with rectangular kernel and stride.
    #[must_use]
    pub fn with_options(kernel_size: (usize, usize), stride: (usize, usize)) -> Self {
        Self {
            kernel_h: kernel_size.0,
            kernel_w: kernel_size.1,
            stride_h: stride.0,
            stride_w: stride.1,
            padding: 0,
        }
    }

    /// Sets the number of zero rings added around the input.
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Computes the output shape for an `(rows, cols)` input.
    ///
    /// # Errors
    ///
    /// Returns [`DoradoError::InvalidConfig`] if the kernel or stride is
    /// zero, or if the kernel does not fit inside the padded input (which
    /// would make an output dimension non-positive).
    pub fn output_shape(&self, rows: usize, cols: usize) -> Result<(usize, usize)> {
        if self.kernel_h == 0 || self.kernel_w == 0 {
            return Err(DoradoError::invalid_config(
                "pool_window",
                format!("{}x{}", self.kernel_h, self.kernel_w),
                "kernel dimensions >= 1",
            ));
        }
        if self.stride_h == 0 || self.stride_w == 0 {
            return Err(DoradoError::invalid_config(
                "pool_stride",
                format!("{}x{}", self.stride_h, self.stride_w),
                "stride dimensions >= 1",
            ));
        }

        let padded_h = rows + 2 * self.padding;
        let padded_w = cols + 2 * self.padding;
        if self.kernel_h > padded_h || self.kernel_w > padded_w {
            return Err(DoradoError::invalid_config(
                "pool_window",
                format!("{}x{}", self.kernel_h, self.kernel_w),
                &format!("window fits padded input ({padded_h}x{padded_w})"),
            ));
        }

        Ok((
            (padded_h - self.kernel_h) / self.stride_h + 1,
            (padded_w - self.kernel_w) / self.stride_w + 1,
        ))
    }

    /// Applies max pooling to the input.
    ///
    /// Padding zeros compete in the max like any other value, so an
    /// all-negative input pools to 0.0 wherever the window touches the
    /// border.
    ///
    /// # Errors
    ///
    /// Returns [`DoradoError::InvalidConfig`] under the same conditions as
    /// [`MaxPool2d::output_shape`].
    pub fn apply(&self, input: &Matrix<f32>) -> Result<Matrix<f32>> {
        let (out_h, out_w) = self.output_shape(input.n_rows(), input.n_cols())?;

        let padded = input.zero_pad(self.padding);
        let in_w = padded.n_cols();
        let input_data = padded.as_slice();

        let mut output = vec![f32::NEG_INFINITY; out_h * out_w];
        for oh in 0..out_h {
            for ow in 0..out_w {
                let mut max_val = f32::NEG_INFINITY;

                for kh in 0..self.kernel_h {
                    for kw in 0..self.kernel_w {
                        let ih = oh * self.stride_h + kh;
                        let iw = ow * self.stride_w + kw;
                        let val = input_data[ih * in_w + iw];
                        max_val = max_val.max(val);
                    }
                }

                output[oh * out_w + ow] = max_val;
            }
        }

        Matrix::from_vec(out_h, out_w, output)
    }
}
