//! Shared traits for the strided-rs ecosystem.
//!
//! This crate provides the container abstraction consumed by
//! `strided-ternary`: anything that reports a length and supports reads (and,
//! for outputs, writes) at an integer index.
//!
//! External crates can depend on `strided-traits` to implement
//! [`ArrayLike`] / [`ArrayLikeMut`] for their own buffer types without orphan
//! rule violations.
//!
//! # Provided containers
//!
//! - Dense: `[T]`, `[T; N]`, `Vec<T>`, `Box<[T]>`, `VecDeque<T>`
//! - [`ArrayLikeObject`]: declared length plus sparse integer-keyed entries
//! - [`SharedView`]: copyable view over `[Cell<T>]`, for aliasing one buffer
//!   as input and output
//! - With the `ndarray` feature: one-dimensional `ndarray` arrays and views

pub mod array_like;
#[cfg(feature = "ndarray")]
mod ndarray_impl;
pub mod object;
pub mod shared;

pub use array_like::{ArrayLike, ArrayLikeMut};
pub use object::ArrayLikeObject;
pub use shared::SharedView;
