// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Row and column iterators over the row-major buffer.

use std::iter::FusedIterator;
use std::mem;

use crate::Shape;

/// An iterator over the rows of an array.
///
/// Iterator element type is `&'a [A]`.
///
/// See [`.rows()`](crate::NdArray::rows) for more information.
#[derive(Clone, Debug)]
pub struct Rows<'a, A>
{
    data: &'a [A],
    cols: usize,
    // rows left to yield; needed because a zero-width row takes no space
    remaining: usize,
}

impl<'a, A> Rows<'a, A>
{
    pub(crate) fn new(data: &'a [A], shape: Shape) -> Self
    {
        Rows {
            data,
            cols: shape.cols,
            remaining: shape.rows,
        }
    }
}

impl<'a, A> Iterator for Rows<'a, A>
{
    type Item = &'a [A];

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (head, tail) = self.data.split_at(self.cols);
        self.data = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> DoubleEndedIterator for Rows<'_, A>
{
    fn next_back(&mut self) -> Option<Self::Item>
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (head, tail) = self.data.split_at(self.data.len() - self.cols);
        self.data = head;
        Some(tail)
    }
}

impl<A> ExactSizeIterator for Rows<'_, A> {}
impl<A> FusedIterator for Rows<'_, A> {}

/// An iterator over the rows of an array, yielding mutable slices.
///
/// Iterator element type is `&'a mut [A]`.
///
/// See [`.rows_mut()`](crate::NdArray::rows_mut) for more information.
#[derive(Debug)]
pub struct RowsMut<'a, A>
{
    data: &'a mut [A],
    cols: usize,
    remaining: usize,
}

impl<'a, A> RowsMut<'a, A>
{
    pub(crate) fn new(data: &'a mut [A], shape: Shape) -> Self
    {
        RowsMut {
            data,
            cols: shape.cols,
            remaining: shape.rows,
        }
    }
}

impl<'a, A> Iterator for RowsMut<'a, A>
{
    type Item = &'a mut [A];

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let data = mem::take(&mut self.data);
        let (head, tail) = data.split_at_mut(self.cols);
        self.data = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for RowsMut<'_, A> {}
impl<A> FusedIterator for RowsMut<'_, A> {}

/// An iterator over the elements of one column, top to bottom.
///
/// Iterator element type is `&'a A`.
///
/// See [`.column_iter()`](crate::NdArray::column_iter) for more information.
#[derive(Clone, Debug)]
pub struct ColumnIter<'a, A>
{
    data: &'a [A],
    cols: usize,
    col: usize,
    front: usize,
    back: usize,
}

impl<'a, A> ColumnIter<'a, A>
{
    pub(crate) fn new(data: &'a [A], shape: Shape, col: usize) -> Self
    {
        debug_assert!(col < shape.cols);
        ColumnIter {
            data,
            cols: shape.cols,
            col,
            front: 0,
            back: shape.rows,
        }
    }
}

impl<'a, A> Iterator for ColumnIter<'a, A>
{
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.front == self.back {
            return None;
        }
        let elt = &self.data[self.front * self.cols + self.col];
        self.front += 1;
        Some(elt)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<A> DoubleEndedIterator for ColumnIter<'_, A>
{
    fn next_back(&mut self) -> Option<Self::Item>
    {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.data[self.back * self.cols + self.col])
    }
}

impl<A> ExactSizeIterator for ColumnIter<'_, A> {}
impl<A> FusedIterator for ColumnIter<'_, A> {}
