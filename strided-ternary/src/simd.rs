//! Runtime SIMD dispatch for the contiguous fast path.
//!
//! With the `simd` feature, the loop body is re-instantiated for the best
//! instruction set detected at runtime (via `pulp`), which lets LLVM
//! auto-vectorize `dst[i] = f(a[i], b[i], c[i])` with wider registers.
//! Without it, the closure simply runs.

#[inline(always)]
pub(crate) fn dispatch<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "simd")]
    {
        pulp::Arch::new().dispatch(f)
    }
    #[cfg(not(feature = "simd"))]
    {
        f()
    }
}

/// Minimum loop length for which dispatch overhead is worth paying.
pub(crate) const DISPATCH_MIN_LEN: usize = 64;

#[inline(always)]
pub(crate) fn dispatch_if_large<R>(len: usize, f: impl FnOnce() -> R) -> R {
    // Heuristic only; correctness does not depend on it.
    if len >= DISPATCH_MIN_LEN {
        dispatch(f)
    } else {
        f()
    }
}
