// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::imp_prelude::*;

/// Access the element at a flat, row-major index.
///
/// **Panics** if index is out of bounds.
impl<A> Index<isize> for NdArray<A>
{
    type Output = A;
    #[inline]
    #[track_caller]
    fn index(&self, index: isize) -> &A
    {
        let i = self.index_or_panic(index);
        &self.data[i]
    }
}

/// Access the element at a flat, row-major index mutably.
///
/// **Panics** if index is out of bounds.
impl<A> IndexMut<isize> for NdArray<A>
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: isize) -> &mut A
    {
        let i = self.index_or_panic(index);
        &mut self.data[i]
    }
}

/// Access the element at `(row, col)`.
///
/// **Panics** if index is out of bounds.
impl<A> Index<(isize, isize)> for NdArray<A>
{
    type Output = A;
    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (isize, isize)) -> &A
    {
        let i = self.index2_or_panic(row, col);
        &self.data[i]
    }
}

/// Access the element at `(row, col)` mutably.
///
/// **Panics** if index is out of bounds.
impl<A> IndexMut<(isize, isize)> for NdArray<A>
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (isize, isize)) -> &mut A
    {
        let i = self.index2_or_panic(row, col);
        &mut self.data[i]
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `rhs` are equal. Return `false` otherwise.
impl<A, B> PartialEq<NdArray<B>> for NdArray<A>
where A: PartialEq<B>
{
    fn eq(&self, rhs: &NdArray<B>) -> bool
    {
        self.shape == rhs.shape && self.data == rhs.data
    }
}

impl<A: Eq> Eq for NdArray<A> {}

impl<A: hash::Hash> hash::Hash for NdArray<A>
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.shape.hash(state);
        self.data.hash(state);
    }
}

/// Create a `1 × n` row vector from a vector.
impl<A> From<Vec<A>> for NdArray<A>
{
    fn from(v: Vec<A>) -> Self
    {
        NdArray::from_vec(v)
    }
}

/// Create a `1 × n` row vector from a slice (copying the elements).
impl<A: Clone> From<&[A]> for NdArray<A>
{
    fn from(s: &[A]) -> Self
    {
        NdArray::from_vec(s.to_vec())
    }
}

/// Create a `1 × n` row vector from an iterator.
///
/// ```
/// use ndmat::NdArray;
///
/// let a: NdArray<i32> = (1..4).collect();
/// assert_eq!(a.shape(), (1, 3).into());
/// ```
impl<A> FromIterator<A> for NdArray<A>
{
    fn from_iter<I>(iterable: I) -> NdArray<A>
    where I: IntoIterator<Item = A>
    {
        NdArray::from_vec(iterable.into_iter().collect())
    }
}

impl<A> AsRef<[A]> for NdArray<A>
{
    fn as_ref(&self) -> &[A]
    {
        &self.data
    }
}

impl<A> IntoIterator for NdArray<A>
{
    type Item = A;
    type IntoIter = vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.data.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a NdArray<A>
{
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.data.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut NdArray<A>
{
    type Item = &'a mut A;
    type IntoIter = slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.data.iter_mut()
    }
}
