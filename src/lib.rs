// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndmat"]
#![doc(html_root_url = "https://docs.rs/ndmat/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::unreadable_literal,
    clippy::from_iter_instead_of_collect, // is not an error
    clippy::redundant_closure, // false positives clippy #7812
    clippy::len_without_is_empty,
)]
#![doc(test(attr(allow(unused_variables))))]

//! The `ndmat` crate provides a two-dimensional container for general
//! elements and for numerics, with semantics modelled on NumPy's `ndarray`.
//!
//! In *n*-dimensional we include for example 1-dimensional rows or columns
//! and 2-dimensional matrices; the data model is matrix-centric and a
//! one-dimensional array is the `1 × n` special case.
//!
//! - [`NdArray`]: an owned, contiguous, row-major array with a [`Shape`].
//! - [`Slice`] and [`SliceOrIndex`]: Python-style `start:stop:step` ranges
//!   with negative indices counted from the back of an axis.
//! - [`broadcast`]: the element-wise binary operation engine that combines
//!   arrays of equal shape, a scalar with an array, a row with a column, or a
//!   vector with a matrix.
//! - Axis reductions parameterized by [`Axis`]: sum, mean, std, var, min,
//!   max, argmin, argmax, sort, argsort, cumsum, cumprod, median, trace,
//!   diagonal.
//! - Stacking: [`concatenate`], [`row_stack`], [`column_stack`], [`insert`].
//! - [`DataCube`]: a sequence of equally shaped arrays.
//! - Headerless binary and text dumps of the element buffer.
//!
//! ## Highlights
//!
//! - Every selection is a copy: slicing, fancy indexing and masking produce
//!   a new, independently owned `NdArray`. There are no aliasing views.
//! - Negative indices are accepted everywhere an index is taken, in the full
//!   range `-extent..extent`.
//! - Fallible operations return `Result<_, ArrayError>`; the error kind is
//!   either an invalid argument or a runtime failure.
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in
//! your `Cargo.toml`.
//!
//! - `std`
//!   - Enabled by default.
//! - `serde`
//!   - Enables serialization support for serde 1.x
//! - `approx`
//!   - Enables implementations of traits from the [`approx`] crate.
//!
//! ## Logging
//!
//! Every [`ArrayError`] is reported through the [`log`] facade at `debug`
//! level with the source location where it was raised. File I/O is traced at
//! `trace` level.
//!
//! [`approx`]: https://docs.rs/approx
//! [`log`]: https://docs.rs/log

pub use crate::error::{ArrayError, ErrorKind};
pub use crate::shape::Shape;
pub use crate::slice::{Slice, SliceOrIndex};

pub use crate::array_io::{from_file, from_file_text, load, Pod};
pub use crate::broadcast::broadcast;
pub use crate::impl_ops::ScalarOperand;
pub use crate::data_cube::DataCube;
pub use crate::iterators::{ColumnIter, Rows, RowsMut};
pub use crate::stacking::{column_stack, concatenate, hstack, insert, insert_many, row_stack, vstack};

mod error;
mod shape;
mod slice;

#[cfg(feature = "approx")]
mod array_approx;
mod array_io;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod arraytraits;
mod broadcast;
mod data_cube;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod impl_selection;
mod iterators;
mod numeric;
mod numeric_util;
pub mod prelude;
mod stacking;

/// The direction of an axis-parameterized operation.
///
/// - `Axis::None`: the whole array, taken in row-major order. A reduction
///   collapses it to a single value, returned as a `1 × 1` array.
/// - `Axis::Row`: across the rows, once per column. A reduction of an
///   `R × C` array is `1 × C`.
/// - `Axis::Col`: across the columns, once per row. A reduction of an
///   `R × C` array is `1 × R`.
///
/// ```
/// use ndmat::{Axis, NdArray};
///
/// let a = NdArray::from_rows(vec![vec![1, 2, 3],
///                                 vec![4, 5, 6]]).unwrap();
/// assert_eq!(a.sum(Axis::None).as_slice(), &[21]);
/// assert_eq!(a.sum(Axis::Row).as_slice(), &[5, 7, 9]);
/// assert_eq!(a.sum(Axis::Col).as_slice(), &[6, 15]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis
{
    #[default]
    None,
    Row,
    Col,
}

/// A two-dimensional array with owned, contiguous, row-major storage.
///
/// The element at logical position `(row, col)` lives at flat offset
/// `row * ncols + col`. The length of the element buffer always equals
/// `shape().size()`.
///
/// Cloning an `NdArray` copies the whole buffer; moving one out with
/// `std::mem::take` leaves an empty `0 × 0` array behind.
///
/// ## Indexing
///
/// Indices are `isize`; a negative index counts from the back of its axis,
/// so that `a[-1]` is the last element in row-major order and `a[(-1, 0)]`
/// is the first element of the last row.
///
/// - `a[i]` and `a[(r, c)]` (the `Index` impls) **panic** if out of bounds.
/// - [`.get()`](NdArray::get) and [`.get2()`](NdArray::get2) return an
///   `InvalidArgument` error instead.
///
/// ## Selection
///
/// [`.slice()`](NdArray::slice), [`.select()`](NdArray::select),
/// [`.get_indices()`](NdArray::get_indices) and
/// [`.get_mask()`](NdArray::get_mask) copy the selected elements into a new
/// array. The `put` family writes through the same kinds of selection.
///
/// ```
/// use ndmat::{NdArray, Slice};
///
/// let a = NdArray::from_rows(vec![vec![1, 2, 3],
///                                 vec![4, 5, 6]]).unwrap();
/// assert_eq!(a.shape().rows, 2);
/// assert_eq!(a.size(), 6);
/// assert_eq!(a[(1, 2)], 6);
/// assert_eq!(a[-1], 6);
///
/// let b = a.select(Slice::to(2), -1).unwrap();
/// assert_eq!(b.as_slice(), &[3, 6]);
/// ```
#[derive(Clone)]
pub struct NdArray<A>
{
    data: Vec<A>,
    shape: Shape,
}

mod imp_prelude
{
    pub(crate) use crate::error::{invalid_argument, runtime, ArrayError};
    pub use crate::{Axis, NdArray, Shape, Slice, SliceOrIndex};
}
