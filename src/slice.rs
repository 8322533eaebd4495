// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::Range;

use crate::error::{index_out_of_bounds, invalid_argument, ArrayError};

/// A slice (half-open range `[start, stop)` with step size).
///
/// Negative `start` or `stop` indexes are counted from the back of the axis;
/// they are resolved against the axis extent when the slice is used.
///
/// ## Examples
///
/// `Slice::new(0, 5, 1)` is the first five elements of an axis. It can also
/// be created with `Slice::from(0..5)` or `Slice::to(5)`. The Python
/// equivalent is `[0:5]`.
///
/// `Slice::new(a, b, 2)` is every second element from `a` until `b`. It can
/// also be created with `Slice::from(a..b).step_by(2)`. The Python equivalent
/// is `[a:b:2]`.
///
/// `Slice::new(-3, -1, 1)` is the third and second to last elements.
///
/// A reversed slice such as `Slice::new(4, 1, -1)` is normalized to the
/// forward slice `[1:4:1]`: the elements are always visited in increasing
/// index order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice
{
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl Default for Slice
{
    /// The slice `[0:1:1]`.
    fn default() -> Self
    {
        Slice {
            start: 0,
            stop: 1,
            step: 1,
        }
    }
}

impl Slice
{
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(j..k)`.
    pub fn new(start: isize, stop: isize, step: isize) -> Slice
    {
        Slice { start, stop, step }
    }

    /// Create the slice `[0:stop:1]`.
    pub fn to(stop: isize) -> Slice
    {
        Slice { start: 0, stop, step: 1 }
    }

    /// Create the slice `[start:stop:1]`.
    pub fn range(start: isize, stop: isize) -> Slice
    {
        Slice { start, stop, step: 1 }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Return the slice resolved against an axis of length `extent`.
    ///
    /// Negative `start`/`stop` get `extent` added. Afterwards `start` must be
    /// a valid index (`0 <= start < extent`) and `stop` must be in
    /// `0..=extent`. A forward range (`start < stop`) needs a positive step;
    /// a backward range (`stop < start`) needs a negative step and is flipped
    /// into the equivalent forward range with the negated step.
    ///
    /// The returned slice satisfies `0 <= start <= stop <= extent` and
    /// `step > 0`.
    ///
    /// **Errors** with `InvalidArgument` if any of the conditions above do
    /// not hold, or if `step` is zero or `isize::MIN`.
    pub fn normalized(self, extent: usize) -> Result<Slice, ArrayError>
    {
        let n = extent as isize;
        let Slice {
            mut start,
            mut stop,
            mut step,
        } = self;

        if step == 0 {
            return Err(invalid_argument("Slice step cannot be zero."));
        }
        if step == isize::MIN {
            return Err(invalid_argument("Slice step is out of range."));
        }

        if start < 0 {
            start += n;
        }
        if start < 0 || start > n - 1 {
            return Err(invalid_argument(format!("Invalid start value for array of size {}.", extent)));
        }

        if stop < 0 {
            stop += n;
        }
        if stop < 0 || stop > n {
            return Err(invalid_argument(format!("Invalid stop value for array of size {}.", extent)));
        }

        if start < stop && step < 0 {
            return Err(invalid_argument("Invalid slice values."));
        }

        if stop < start {
            if step > 0 {
                return Err(invalid_argument("Invalid slice values."));
            }
            std::mem::swap(&mut start, &mut stop);
            step = -step;
        }
        if step < 0 {
            // start == stop: empty either way
            step = -step;
        }

        Ok(Slice { start, stop, step })
    }

    /// Normalize the slice in place against an axis of length `extent`.
    ///
    /// See [`Slice::normalized`]. On error `self` is left unchanged.
    pub fn normalize(&mut self, extent: usize) -> Result<(), ArrayError>
    {
        *self = self.normalized(extent)?;
        Ok(())
    }

    /// The number of indices `start, start + step, ...` that are `< stop`.
    ///
    /// This is a pure query meant for a normalized slice; a slice whose step
    /// does not move `start` towards `stop` counts zero elements.
    pub fn count(&self) -> usize
    {
        if self.step > 0 && self.start < self.stop {
            ((self.stop - self.start - 1) / self.step + 1) as usize
        } else {
            0
        }
    }

    /// The number of elements the slice selects from an axis of length
    /// `extent`.
    ///
    /// `self` is not modified; the count is taken on a normalized copy.
    ///
    /// ```
    /// use ndmat::Slice;
    ///
    /// let s = Slice::new(-3, -1, 1);
    /// assert_eq!(s.num_elements(5).unwrap(), 2);
    /// assert_eq!(s.start, -3);
    /// ```
    pub fn num_elements(&self, extent: usize) -> Result<usize, ArrayError>
    {
        Ok(self.normalized(extent)?.count())
    }

    /// The indices the slice selects from an axis of length `extent`, in
    /// visiting order.
    pub fn indices(&self, extent: usize) -> Result<Vec<usize>, ArrayError>
    {
        let s = self.normalized(extent)?;
        Ok((s.start..s.stop)
            .step_by(s.step as usize)
            .map(|i| i as usize)
            .collect())
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice
        {
            #[inline]
            fn from(r: Range<$index>) -> Slice
            {
                Slice {
                    start: r.start as isize,
                    stop: r.end as isize,
                    step: 1,
                }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl fmt::Display for Slice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[{}:{}:{}]", self.start, self.stop, self.step)
    }
}

/// A slice (range with step size), a single index, or a list of indices:
/// the selection along one axis of a two-dimensional selection.
///
/// ## Examples
///
/// `SliceOrIndex::Index(a)` is the index `a`. It can also be created with
/// `SliceOrIndex::from(a)`. The Python equivalent is `[a]`.
///
/// `SliceOrIndex::Slice(Slice::new(a, b, 2))` is every second element from
/// `a` until `b`. It can also be created with
/// `SliceOrIndex::from(Slice::from(a..b).step_by(2))`. The Python equivalent
/// is `[a:b:2]`.
///
/// `SliceOrIndex::Indices(vec![0, 2, -1])` picks the listed positions in
/// that order. The Python equivalent is `[[0, 2, -1]]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliceOrIndex
{
    /// A range with step size. Negative `start` or `stop` indexes are counted
    /// from the back of the axis.
    Slice(Slice),
    /// A single index.
    Index(isize),
    /// A list of indices, visited in the given order.
    Indices(Vec<isize>),
}

impl SliceOrIndex
{
    /// Returns `true` if `self` is a `Slice` value.
    pub fn is_slice(&self) -> bool
    {
        matches!(self, SliceOrIndex::Slice(_))
    }

    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool
    {
        matches!(self, SliceOrIndex::Index(_))
    }

    /// Resolve the selection against an axis of length `extent` into
    /// non-negative positions.
    ///
    /// **Errors** with `InvalidArgument` if the slice does not normalize or
    /// if an index is out of bounds.
    pub fn positions(&self, extent: usize) -> Result<Vec<usize>, ArrayError>
    {
        match self {
            SliceOrIndex::Slice(s) => s.indices(extent),
            SliceOrIndex::Index(i) => Ok(vec![resolve_index(*i, extent, "Axis")?]),
            SliceOrIndex::Indices(ixs) => ixs
                .iter()
                .map(|&i| resolve_index(i, extent, "Axis"))
                .collect(),
        }
    }
}

/// Resolve a possibly negative index against `extent`.
///
/// Indices in `-extent..extent` are accepted.
#[track_caller]
pub(crate) fn resolve_index(index: isize, extent: usize, what: &str) -> Result<usize, ArrayError>
{
    let n = extent as isize;
    let resolved = if index < 0 { index + n } else { index };
    if resolved < 0 || resolved >= n {
        return Err(index_out_of_bounds(what, index, extent));
    }
    Ok(resolved as usize)
}

impl From<Slice> for SliceOrIndex
{
    #[inline]
    fn from(s: Slice) -> SliceOrIndex
    {
        SliceOrIndex::Slice(s)
    }
}

macro_rules! impl_sliceorindex_from_index_type {
    ($index:ty) => {
        impl From<$index> for SliceOrIndex
        {
            #[inline]
            fn from(r: $index) -> SliceOrIndex
            {
                SliceOrIndex::Index(r as isize)
            }
        }

        impl From<Range<$index>> for SliceOrIndex
        {
            #[inline]
            fn from(r: Range<$index>) -> SliceOrIndex
            {
                SliceOrIndex::Slice(Slice::from(r))
            }
        }

        impl From<Vec<$index>> for SliceOrIndex
        {
            #[inline]
            fn from(v: Vec<$index>) -> SliceOrIndex
            {
                SliceOrIndex::Indices(v.into_iter().map(|i| i as isize).collect())
            }
        }

        impl<'a> From<&'a [$index]> for SliceOrIndex
        {
            #[inline]
            fn from(v: &'a [$index]) -> SliceOrIndex
            {
                SliceOrIndex::Indices(v.iter().map(|&i| i as isize).collect())
            }
        }
    };
}

impl_sliceorindex_from_index_type!(isize);
impl_sliceorindex_from_index_type!(usize);
impl_sliceorindex_from_index_type!(i32);

impl fmt::Display for SliceOrIndex
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            SliceOrIndex::Slice(s) => write!(f, "{}", s),
            SliceOrIndex::Index(i) => write!(f, "{}", i),
            SliceOrIndex::Indices(ixs) => write!(f, "{:?}", ixs),
        }
    }
}
