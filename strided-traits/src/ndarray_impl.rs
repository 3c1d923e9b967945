//! [`ArrayLike`] for one-dimensional ndarray arrays and views.

use ndarray::{ArrayBase, Data, DataMut, Ix1};

use crate::array_like::{ArrayLike, ArrayLikeMut};

impl<S> ArrayLike for ArrayBase<S, Ix1>
where
    S: Data,
    S::Elem: Clone,
{
    type Elem = S::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        ArrayBase::len(self)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> S::Elem {
        self[index].clone()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> S::Elem {
        ArrayBase::uget(self, index).clone()
    }

    // Only standard-layout (unit stride) arrays are one dense slice.
    #[inline(always)]
    fn as_slice(&self) -> Option<&[S::Elem]> {
        ArrayBase::as_slice(self)
    }
}

impl<S> ArrayLikeMut for ArrayBase<S, Ix1>
where
    S: DataMut,
    S::Elem: Clone,
{
    #[inline(always)]
    fn set(&mut self, index: usize, value: S::Elem) {
        self[index] = value;
    }

    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: S::Elem) {
        *ArrayBase::uget_mut(self, index) = value;
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> Option<&mut [S::Elem]> {
        ArrayBase::as_slice_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s, Array1};

    #[test]
    fn test_owned_array() {
        let mut a: Array1<f64> = array![1.0, 2.0, 3.0];
        ArrayLikeMut::set(&mut a, 0, 9.0);
        assert_eq!(ArrayLike::len(&a), 3);
        assert_eq!(ArrayLike::get(&a, 0), 9.0);
        assert!(ArrayLike::as_slice(&a).is_some());
    }

    #[test]
    fn test_strided_view_has_no_slice() {
        let a: Array1<f64> = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let v = a.slice(s![..;2]);
        assert_eq!(ArrayLike::len(&v), 3);
        assert_eq!(ArrayLike::get(&v, 2), 4.0);
        assert!(ArrayLike::as_slice(&v).is_none());
    }

    #[test]
    fn test_reversed_view_mut() {
        let mut a: Array1<i32> = array![1, 2, 3];
        {
            let mut v = a.slice_mut(s![..;-1]);
            ArrayLikeMut::set(&mut v, 0, 30);
            unsafe { ArrayLikeMut::set_unchecked(&mut v, 2, 10) };
        }
        assert_eq!(a, array![10, 2, 30]);
    }
}
