//! Ternary map over strided array-like containers.
//!
//! `out[ow + i*sw] = f(x[ox + i*sx], y[oy + i*sy], z[oz + i*sz])` for
//! `i = 0..n`, always in increasing `i`. Each step reads its three inputs,
//! calls `f`, writes the output and only then advances. When storage is
//! shared between an input and the output (see [`SharedView`]), a slot
//! written at step `i` is therefore observed by any read of it at a later
//! step.
//!
//! [`SharedView`]: strided_traits::SharedView

use tracing::trace;

use crate::offset::resolve_offsets;
use crate::simd;
use crate::{ArrayLike, ArrayLikeMut};

// ============================================================================
// Inner loops
//
// When every stride is 1 and every container exposes a dense slice, iterate
// slices so LLVM can auto-vectorize. Otherwise walk four running indices.
// ============================================================================

/// Contiguous inner loop: `dst[i] = f(a[i], b[i], c[i])`.
#[inline(always)]
fn inner_loop_contiguous<A: Clone, B: Clone, C: Clone, D>(
    dst: &mut [D],
    src_a: &[A],
    src_b: &[B],
    src_c: &[C],
    f: &impl Fn(A, B, C) -> D,
) {
    let len = dst.len();
    let (src_a, src_b, src_c) = (&src_a[..len], &src_b[..len], &src_c[..len]);
    simd::dispatch_if_large(len, || {
        for i in 0..len {
            dst[i] = f(src_a[i].clone(), src_b[i].clone(), src_c[i].clone());
        }
    });
}

/// Strided inner loop through the containers' checked accessors.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn apply_strided<X, Y, Z, W, F>(
    x: &X,
    y: &Y,
    z: &Z,
    out: &mut W,
    n: isize,
    strides: &[isize; 4],
    offsets: &[usize; 4],
    f: &F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let [sx, sy, sz, sw] = *strides;
    let [mut ix, mut iy, mut iz, mut iw] = offsets.map(|o| o as isize);
    for _ in 0..n {
        let v = f(x.get(ix as usize), y.get(iy as usize), z.get(iz as usize));
        out.set(iw as usize, v);
        // Wrapping: the step after the last element is never used.
        ix = ix.wrapping_add(sx);
        iy = iy.wrapping_add(sy);
        iz = iz.wrapping_add(sz);
        iw = iw.wrapping_add(sw);
    }
}

/// Strided inner loop through the containers' unchecked accessors.
///
/// # Safety
/// Every visited index of every container must be in range.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
unsafe fn apply_strided_unchecked<X, Y, Z, W, F>(
    x: &X,
    y: &Y,
    z: &Z,
    out: &mut W,
    n: isize,
    strides: &[isize; 4],
    offsets: &[usize; 4],
    f: &F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let [sx, sy, sz, sw] = *strides;
    let [mut ix, mut iy, mut iz, mut iw] = offsets.map(|o| o as isize);
    for _ in 0..n {
        let v = f(
            x.get_unchecked(ix as usize),
            y.get_unchecked(iy as usize),
            z.get_unchecked(iz as usize),
        );
        out.set_unchecked(iw as usize, v);
        ix = ix.wrapping_add(sx);
        iy = iy.wrapping_add(sy);
        iz = iz.wrapping_add(sz);
        iw = iw.wrapping_add(sw);
    }
}

/// Contiguous fast path when every stride is 1 and every container exposes
/// a dense slice, strided loop otherwise. Requires `n > 0`.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply<X, Y, Z, W, F>(
    x: &X,
    y: &Y,
    z: &Z,
    out: &mut W,
    n: isize,
    strides: &[isize; 4],
    offsets: &[usize; 4],
    f: &F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    if *strides == [1; 4] {
        if let (Some(sa), Some(sb), Some(sc), Some(dst)) =
            (x.as_slice(), y.as_slice(), z.as_slice(), out.as_mut_slice())
        {
            let len = n as usize;
            let [oa, ob, oc, od] = *offsets;
            trace!(n, "contiguous fast path");
            inner_loop_contiguous(
                &mut dst[od..][..len],
                &sa[oa..][..len],
                &sb[ob..][..len],
                &sc[oc..][..len],
                f,
            );
            return;
        }
    }

    apply_strided(x, y, z, out, n, strides, offsets, f);
}

#[cfg(feature = "bounds-check")]
#[inline]
fn enforce_bounds<X, Y, Z, W>(
    arrays: (&X, &Y, &Z, &W),
    n: isize,
    strides: &[isize; 4],
    offsets: &[usize; 4],
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLike + ?Sized,
{
    let (x, y, z, out) = arrays;
    let lens = [x.len(), y.len(), z.len(), out.len()];
    if let Err(err) = crate::checked::validate_arrays(lens, n, strides, offsets) {
        panic!("ternary_ndarray: {err}");
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Apply a ternary callback to strided input elements, writing a strided
/// output, with caller-supplied starting offsets.
///
/// `arrays` is `(x, y, z, out)`; `strides` and `offsets` are aligned with it.
/// For `i = 0..shape[0]`:
///
/// ```text
/// out[offsets[3] + i*strides[3]] =
///     fcn(x[offsets[0] + i*strides[0]], y[..], z[..])
/// ```
///
/// - `shape[0] <= 0` is a no-op: no container is read or written and `fcn`
///   is never called.
/// - Otherwise `fcn` is called exactly `shape[0]` times, with arguments in
///   `(x, y, z)` order.
/// - A zero stride pins that array to a single slot.
/// - `fcn` is expected to be pure; its result is written verbatim.
///
/// No validation is performed (unless the `bounds-check` feature is
/// enabled). An index the container cannot satisfy fails the way the
/// container's [`ArrayLike::get`] / [`ArrayLikeMut::set`] fail; for slices
/// that is a panic. Use [`try_ternary_ndarray`](crate::try_ternary_ndarray)
/// for a `Result`.
///
/// # Example
///
/// ```rust
/// use strided_ternary::ternary_ndarray;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut w = [0.0; 6];
///
/// // Every other input element from the back, written from index 3 forward.
/// ternary_ndarray(
///     (&x, &x, &x, &mut w),
///     [3],
///     [-2, -2, -2, 1],
///     [5, 5, 5, 3],
///     |a, b, c| a + b + c,
/// );
/// assert_eq!(w, [0.0, 0.0, 0.0, 18.0, 12.0, 6.0]);
/// ```
pub fn ternary_ndarray<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    offsets: [usize; 4],
    fcn: F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let (x, y, z, out) = arrays;

    #[cfg(feature = "bounds-check")]
    enforce_bounds((x, y, z, &*out), n, &strides, &offsets);

    apply(x, y, z, out, n, &strides, &offsets, &fcn);
}

/// Apply a ternary callback to strided input elements, writing a strided
/// output.
///
/// The starting offset of each array is derived from its stride with
/// [`stride2offset`](crate::stride2offset): `0` for non-negative strides,
/// the slot of the last logical element for negative ones. Semantics are
/// otherwise those of [`ternary_ndarray`].
///
/// # Example
///
/// ```rust
/// use strided_ternary::ternary;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut w = vec![0.0; 6];
///
/// // Inputs forward with stride 2, output backward from index 2.
/// ternary((&x, &x, &x, &mut w), [3], [2, 2, 2, -1], |a, b, c| a + b + c);
/// assert_eq!(w, vec![15.0, 9.0, 3.0, 0.0, 0.0, 0.0]);
/// ```
pub fn ternary<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    fcn: F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let offsets = resolve_offsets(shape[0], strides);
    trace!(n = shape[0], ?strides, ?offsets, "ternary: resolved offsets");
    ternary_ndarray(arrays, shape, strides, offsets, fcn)
}

/// [`ternary_ndarray`] without bounds checks on container access.
///
/// # Safety
/// For every array, each visited index `offset + i*stride` (`i = 0..n`) must
/// be non-negative and below the container's `len()`, and the container's
/// `get_unchecked` / `set_unchecked` must be sound for such indices.
/// [`validate_access`](crate::validate_access) checks the first condition.
pub unsafe fn ternary_ndarray_unchecked<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    offsets: [usize; 4],
    fcn: F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let (x, y, z, out) = arrays;

    if strides == [1; 4] {
        if let (Some(sa), Some(sb), Some(sc), Some(dst)) =
            (x.as_slice(), y.as_slice(), z.as_slice(), out.as_mut_slice())
        {
            let len = n as usize;
            let [oa, ob, oc, od] = offsets;
            inner_loop_contiguous(
                dst.get_unchecked_mut(od..od + len),
                sa.get_unchecked(oa..oa + len),
                sb.get_unchecked(ob..ob + len),
                sc.get_unchecked(oc..oc + len),
                &fcn,
            );
            return;
        }
    }

    apply_strided_unchecked(x, y, z, out, n, &strides, &offsets, &fcn);
}

/// [`ternary`] without bounds checks on container access.
///
/// # Safety
/// As for [`ternary_ndarray_unchecked`], with offsets resolved by
/// [`stride2offset`](crate::stride2offset).
pub unsafe fn ternary_unchecked<X, Y, Z, W, F>(
    arrays: (&X, &Y, &Z, &mut W),
    shape: [isize; 1],
    strides: [isize; 4],
    fcn: F,
) where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
    Z: ArrayLike + ?Sized,
    W: ArrayLikeMut + ?Sized,
    F: Fn(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let offsets = resolve_offsets(shape[0], strides);
    ternary_ndarray_unchecked(arrays, shape, strides, offsets, fcn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use strided_traits::{ArrayLikeObject, SharedView};

    fn add3(a: f64, b: f64, c: f64) -> f64 {
        a + b + c
    }

    #[test]
    fn test_contiguous_fast_path_with_offsets() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 20.0, 30.0, 40.0];
        let z = [100.0, 200.0, 300.0, 400.0];
        let mut w = [0.0; 4];
        ternary_ndarray((&x, &y, &z, &mut w), [2], [1; 4], [2, 1, 0, 1], add3);
        assert_eq!(w, [0.0, 123.0, 234.0, 0.0]);
    }

    #[test]
    fn test_strided_path_matches_fast_path() {
        let x: Vec<f64> = (0..200).map(|i| i as f64).collect();
        let mut fast = vec![0.0; 200];
        ternary((&x, &x, &x, &mut fast), [200], [1; 4], |a, b, c| a * b - c);

        // Same data through a container without a dense slice.
        let obj = ArrayLikeObject::from_slice(&x);
        let mut slow = vec![0.0; 200];
        ternary((&obj, &obj, &obj, &mut slow), [200], [1; 4], |a, b, c| {
            a.unwrap() * b.unwrap() - c.unwrap()
        });
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_zero_strides_pin_slots() {
        let x = [2.0, 9.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let z = [0.5];
        let mut w = [0.0; 4];
        ternary((&x, &y, &z, &mut w), [4], [0, 1, 0, 1], |a, b, c| a * b + c);
        assert_eq!(w, [2.5, 4.5, 6.5, 8.5]);

        // Output pinned: the last write wins.
        let mut w = [0.0; 2];
        ternary((&y, &y, &y, &mut w), [4], [1, 1, 1, 0], add3);
        assert_eq!(w, [12.0, 0.0]);
    }

    #[test]
    fn test_write_before_later_read_when_aliased() {
        let mut data = [1.0, 0.0, 0.0, 0.0, 0.0];
        let buf = SharedView::from_mut(&mut data);
        let mut out = buf;
        // out[i + 1] = 3 * buf[i]: each step reads the previous step's write.
        ternary_ndarray((&buf, &buf, &buf, &mut out), [4], [1; 4], [0, 0, 0, 1], add3);
        assert_eq!(buf.to_vec(), vec![1.0, 3.0, 9.0, 27.0, 81.0]);
    }

    #[test]
    fn test_aliased_reverse_in_place() {
        // Reading forward while writing backward over the same cells: the
        // second half reads back values written by the first half.
        let cells: Vec<Cell<i32>> = (1..=4).map(Cell::new).collect();
        let buf = SharedView::new(&cells);
        let mut out = buf;
        ternary((&buf, &buf, &buf, &mut out), [4], [1, 1, 1, -1], |a, _, _| a);
        assert_eq!(buf.to_vec(), vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_unchecked_matches_checked() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut checked = [0.0; 5];
        let mut unchecked = [0.0; 5];
        ternary((&x, &x, &x, &mut checked), [3], [-2, 1, 2, -1], add3);
        unsafe { ternary_unchecked((&x, &x, &x, &mut unchecked), [3], [-2, 1, 2, -1], add3) };
        assert_eq!(checked, unchecked);

        let mut fast = [0.0; 5];
        unsafe {
            ternary_ndarray_unchecked((&x, &x, &x, &mut fast), [4], [1; 4], [1, 1, 0, 0], add3)
        };
        assert_eq!(fast, [5.0, 8.0, 11.0, 14.0, 0.0]);
    }

    #[test]
    #[cfg_attr(not(feature = "bounds-check"), should_panic)]
    #[cfg_attr(
        feature = "bounds-check",
        should_panic(expected = "index 5 out of bounds for array `out`")
    )]
    fn test_out_of_range_output_panics() {
        let x = [1.0; 8];
        let mut w = [0.0; 5];
        ternary((&x, &x, &x, &mut w), [6], [1; 4], add3);
    }
}
