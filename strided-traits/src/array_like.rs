//! Capability traits for indexable, length-reporting containers.
//!
//! A kernel that walks a buffer with an offset and a stride only needs three
//! things from it: its length, a read at an integer index and (for outputs) a
//! write at an integer index. [`ArrayLike`] and [`ArrayLikeMut`] capture
//! exactly that, so dense buffers (`[T]`, `Vec<T>`, ...) and sparse or
//! interior-mutable containers can be driven by the same loop.
//!
//! Dense containers additionally expose their storage through
//! [`ArrayLike::as_slice`] / [`ArrayLikeMut::as_mut_slice`], which kernels use
//! to select a contiguous fast path.

use std::collections::VecDeque;

/// Read access to an ordered, randomly indexable sequence.
pub trait ArrayLike {
    /// Element type produced by a read.
    type Elem: Clone;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`.
    ///
    /// Out-of-range behavior is the container's own: slices panic, while a
    /// sparse container may return an "absent" value.
    fn get(&self, index: usize) -> Self::Elem;

    /// Read the element at `index` without bounds checking.
    ///
    /// The default forwards to [`ArrayLike::get`].
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> Self::Elem {
        self.get(index)
    }

    /// The backing storage, when it is one dense slice of `len()` elements.
    #[inline(always)]
    fn as_slice(&self) -> Option<&[Self::Elem]> {
        None
    }
}

/// Write access on top of [`ArrayLike`].
pub trait ArrayLikeMut: ArrayLike {
    /// Write `value` at `index`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Write `value` at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: Self::Elem) {
        self.set(index, value)
    }

    /// Mutable counterpart of [`ArrayLike::as_slice`].
    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [Self::Elem]> {
        None
    }
}

// ============================================================================
// Dense storage
// ============================================================================

impl<T: Clone> ArrayLike for [T] {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> T {
        <[T]>::get_unchecked(self, index).clone()
    }

    #[inline(always)]
    fn as_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: Clone> ArrayLikeMut for [T] {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        *<[T]>::get_unchecked_mut(self, index) = value;
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

// Containers that deref to a slice forward to the slice impls.
macro_rules! impl_array_like_via_slice {
    ($(impl<$($g:tt),*> for $ty:ty;)*) => {
        $(
            impl<$($g),*> ArrayLike for $ty
            where
                T: Clone,
            {
                type Elem = T;

                #[inline(always)]
                fn len(&self) -> usize {
                    <[T] as ArrayLike>::len(&self[..])
                }

                #[inline(always)]
                fn get(&self, index: usize) -> T {
                    <[T] as ArrayLike>::get(&self[..], index)
                }

                #[inline(always)]
                unsafe fn get_unchecked(&self, index: usize) -> T {
                    <[T] as ArrayLike>::get_unchecked(&self[..], index)
                }

                #[inline(always)]
                fn as_slice(&self) -> Option<&[T]> {
                    Some(&self[..])
                }
            }

            impl<$($g),*> ArrayLikeMut for $ty
            where
                T: Clone,
            {
                #[inline(always)]
                fn set(&mut self, index: usize, value: T) {
                    <[T] as ArrayLikeMut>::set(&mut self[..], index, value)
                }

                #[inline(always)]
                unsafe fn set_unchecked(&mut self, index: usize, value: T) {
                    <[T] as ArrayLikeMut>::set_unchecked(&mut self[..], index, value)
                }

                #[inline(always)]
                fn as_mut_slice(&mut self) -> Option<&mut [T]> {
                    Some(&mut self[..])
                }
            }
        )*
    };
}

impl_array_like_via_slice! {
    impl<T> for Vec<T>;
    impl<T> for Box<[T]>;
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> T {
        <[T]>::get_unchecked(&self[..], index).clone()
    }

    #[inline(always)]
    fn as_slice(&self) -> Option<&[T]> {
        Some(&self[..])
    }
}

impl<T: Clone, const N: usize> ArrayLikeMut for [T; N] {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        *<[T]>::get_unchecked_mut(&mut self[..], index) = value;
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(&mut self[..])
    }
}

// A ring buffer is only dense when it has not wrapped around.
impl<T: Clone> ArrayLike for VecDeque<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline(always)]
    fn as_slice(&self) -> Option<&[T]> {
        match self.as_slices() {
            (head, []) => Some(head),
            _ => None,
        }
    }
}

impl<T: Clone> ArrayLikeMut for VecDeque<T> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        match self.as_mut_slices() {
            (head, []) => Some(head),
            _ => None,
        }
    }
}

// ============================================================================
// Forwarding impls
// ============================================================================

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    type Elem = A::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> A::Elem {
        (**self).get(index)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> A::Elem {
        (**self).get_unchecked(index)
    }

    #[inline(always)]
    fn as_slice(&self) -> Option<&[A::Elem]> {
        (**self).as_slice()
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &mut A {
    type Elem = A::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> A::Elem {
        (**self).get(index)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> A::Elem {
        (**self).get_unchecked(index)
    }

    #[inline(always)]
    fn as_slice(&self) -> Option<&[A::Elem]> {
        (**self).as_slice()
    }
}

impl<A: ArrayLikeMut + ?Sized> ArrayLikeMut for &mut A {
    #[inline(always)]
    fn set(&mut self, index: usize, value: A::Elem) {
        (**self).set(index, value)
    }

    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: A::Elem) {
        (**self).set_unchecked(index, value)
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [A::Elem]> {
        (**self).as_mut_slice()
    }
}
