//! Ternary element-wise kernel over strided array-like buffers.
//!
//! Applies `out[i] = f(x[i], y[i], z[i])` for `i = 0..n`, where each of the
//! four arrays is addressed through its own stride and starting offset. The
//! data never needs to be contiguous: strides may be positive, negative or
//! zero, and containers are anything implementing [`ArrayLike`] /
//! [`ArrayLikeMut`] (dense slices, sparse objects, aliasable cell views).
//!
//! # Primary API
//!
//! - [`ternary`]: derive offsets from the strides, then apply
//! - [`ternary_ndarray`]: apply with caller-supplied offsets
//! - [`stride2offset`]: the offset derivation for a single array
//!
//! # Checked and unchecked variants
//!
//! The primary API performs no validation of its own. An index the declared
//! length cannot satisfy fails however the container fails (slices panic).
//!
//! - [`try_ternary`], [`try_ternary_ndarray`]: validate every array's access
//!   range first and return [`StridedError`] without touching any data
//! - [`ternary_unchecked`], [`ternary_ndarray_unchecked`]: `unsafe`, skip the
//!   containers' own bounds checks
//!
//! # Features
//!
//! - `bounds-check`: the primary API validates like the `try_` variants and
//!   panics with the error message instead of reaching the container
//! - `simd`: runtime SIMD dispatch for the all-unit-stride dense path
//! - `ndarray`: [`ArrayLike`] for one-dimensional `ndarray` arrays
//!
//! # Example
//!
//! ```rust
//! use strided_ternary::ternary;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let z = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut w = [0.0; 5];
//!
//! ternary((&x, &y, &z, &mut w), [5], [1, 1, 1, 1], |a, b, c| a + b + c);
//! assert_eq!(w, [3.0, 6.0, 9.0, 12.0, 15.0]);
//!
//! // Negative strides walk backward from the resolved offset.
//! let mut w = [0.0; 5];
//! ternary((&x, &y, &z, &mut w), [3], [-2, -2, -2, -1], |a, b, c| a + b + c);
//! assert_eq!(w, [3.0, 9.0, 15.0, 0.0, 0.0]);
//! ```

mod apply;
mod checked;
mod offset;
mod simd;

use std::fmt;

pub use apply::{ternary, ternary_ndarray, ternary_ndarray_unchecked, ternary_unchecked};
pub use checked::{try_ternary, try_ternary_ndarray, validate_access};
pub use offset::{resolve_offsets, stride2offset};

// ============================================================================
// Re-exports from strided-traits
// ============================================================================
pub use strided_traits::{ArrayLike, ArrayLikeMut, ArrayLikeObject, SharedView};

// ============================================================================
// Error types
// ============================================================================

/// Position of an array in the `(x, y, z, out)` argument tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayRole {
    X,
    Y,
    Z,
    Out,
}

impl ArrayRole {
    /// All roles in argument order.
    pub const ALL: [ArrayRole; 4] = [ArrayRole::X, ArrayRole::Y, ArrayRole::Z, ArrayRole::Out];
}

impl fmt::Display for ArrayRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrayRole::X => "x",
            ArrayRole::Y => "y",
            ArrayRole::Z => "z",
            ArrayRole::Out => "out",
        };
        f.write_str(name)
    }
}

/// Errors reported by the checked entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// A visited physical index falls outside `[0, len)`.
    #[error("index {index} out of bounds for array `{array}` of length {len}")]
    IndexOutOfBounds {
        array: ArrayRole,
        index: isize,
        len: usize,
    },

    /// Integer overflow while computing an index range.
    #[error("offset overflow while computing index range of array `{array}`")]
    OffsetOverflow { array: ArrayRole },
}

/// Result type for checked strided operations.
pub type Result<T> = std::result::Result<T, StridedError>;
