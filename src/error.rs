use core::fmt;

/// Geometry error from the range-checked and strided entry points.
///
/// The contiguous swaps ([`swap_in_place`](crate::swap_in_place),
/// [`swap_to`](crate::swap_to)) never fail; they bound their work to the
/// views they are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SizeError {
    /// A source range or destination offset lies outside the buffer.
    OutOfBounds,
    /// Zero width or height, `stride < width * 4`, arithmetic overflow, or a
    /// buffer shorter than `(height - 1) * stride + width * 4`.
    InvalidStride,
    /// Source and destination images differ in width or height.
    DimensionMismatch,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("range is out of bounds for the buffer"),
            Self::InvalidStride => f.write_str("invalid stride for image geometry"),
            Self::DimensionMismatch => f.write_str("source and destination dimensions differ"),
        }
    }
}

impl core::error::Error for SizeError {}
