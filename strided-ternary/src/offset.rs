//! Stride to starting-offset resolution.

/// Starting physical index for `n` elements visited with step `stride`.
///
/// Walking `offset + i * stride` for `i = 0..n` then visits the logical
/// elements in order:
///
/// - `stride >= 0`: traversal starts at the first slot, so the offset is `0`.
/// - `stride < 0`: traversal starts at the slot of the last logical element,
///   `(n - 1) * |stride|`, and walks backward.
/// - `n <= 0`: nothing is visited; the offset is `0`.
///
/// Offsets too large for `usize` saturate to `usize::MAX`, which no container
/// can satisfy, so the failure surfaces at access time instead of wrapping.
///
/// ```
/// use strided_ternary::stride2offset;
///
/// assert_eq!(stride2offset(5, 1), 0);
/// assert_eq!(stride2offset(3, -2), 4);
/// assert_eq!(stride2offset(0, -2), 0);
/// ```
#[inline]
pub fn stride2offset(n: isize, stride: isize) -> usize {
    if stride >= 0 || n <= 0 {
        return 0;
    }
    (n - 1).unsigned_abs().saturating_mul(stride.unsigned_abs())
}

/// Resolve one offset per array for a shared element count.
#[inline]
pub fn resolve_offsets<const K: usize>(n: isize, strides: [isize; K]) -> [usize; K] {
    strides.map(|s| stride2offset(n, s))
}
