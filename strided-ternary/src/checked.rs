//! Validated entry points.
//!
//! Every array's visited index range is computed up front with checked
//! arithmetic. On failure nothing has been read or written.

use tracing::{debug, trace};

use crate::apply::apply;
use crate::offset::resolve_offsets;
use crate::{ArrayLike, ArrayLikeMut, ArrayRole, Result, StridedError};

/// Check that `n` steps of `stride` from `offset` stay within `[0, len)`.
///
/// For `n <= 0` nothing is visited and any arguments are accepted. Otherwise
/// the first (`offset`) and last (`offset + (n - 1) * stride`) visited
/// indices bound the range, since the walk is monotonic.
pub fn validate_access(
    array: ArrayRole,
    len: usize,
    n: isize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }
    let overflow = || StridedError::OffsetOverflow { array };
    let first = isize::try_from(offset).map_err(|_| overflow())?;
    let last = stride
        .checked_mul(n - 1)
        .and_then(|span| first.checked_add(span))
        .ok_or_else(overflow)?;

    let (lo, hi) = if last < first {
        (last, first)
    } else {
        (first, last)
    };
    if lo < 0 {
        return Err(StridedError::IndexOutOfBounds {
            array,
            index: lo,
            len,
        });
    }
    if hi as usize >= len {
        return Err(StridedError::IndexOutOfBounds {
            array,
            index: hi,
            len,
        });
    }
    Ok(())
}

/// Validate all four arrays in argument order, reporting the first failure.
pub(crate) fn validate_arrays(
    lens: [usize; 4],
    n: isize,
    strides: &[isize; 4],
    offsets: &[usize; 4],
) -> Result<()> {
    for (i, &array) in ArrayRole::ALL.iter().enumerate() {
        validate_access(array, lens[i], n, strides[i], offsets[i])?;
    }
    Ok(())
}

/// Checked [`ternary_ndarray`](crate::ternary_ndarray).
///
/// # Errors
/// [`StridedError::IndexOutOfBounds`] if any visited index of any array is
/// outside `[0, len)`, [`StridedError::OffsetOverflow`] if an index cannot be
/// represented. Nothing is read or written when an error is returned.
pub fn try_ternary_ndarray<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    offsets: [usize; 4],
    fcn: F,
) -> Result<()>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return Ok(());
    }
    let (x, y, z, out) = arrays;
    let lens = [x.len(), y.len(), z.len(), out.len()];
    if let Err(err) = validate_arrays(lens, n, &strides, &offsets) {
        debug!(%err, n, ?lens, ?strides, ?offsets, "try_ternary_ndarray: rejected");
        return Err(err);
    }
    apply(x, y, z, out, n, &strides, &offsets, &fcn);
    Ok(())
}

/// Checked [`ternary`](crate::ternary).
///
/// Offsets are derived with [`stride2offset`](crate::stride2offset), then
/// validated as in [`try_ternary_ndarray`].
pub fn try_ternary<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    fcn: F,
) -> Result<()>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let offsets = resolve_offsets(shape[0], strides);
    trace!(n = shape[0], ?strides, ?offsets, "try_ternary: resolved offsets");
    try_ternary_ndarray(arrays, shape, strides, offsets, fcn)
}
