// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// The extent of a two-dimensional array: number of rows and columns.
///
/// A one-dimensional array is a `1 × n` row vector. The *null* shape is
/// `0 × 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape
{
    pub rows: usize,
    pub cols: usize,
}

impl Shape
{
    /// Create a new `Shape` of `rows × cols`.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Shape
    {
        Shape { rows, cols }
    }

    /// Create a square `Shape` of `n × n`.
    #[inline]
    pub const fn square(n: usize) -> Shape
    {
        Shape { rows: n, cols: n }
    }

    /// The number of elements, `rows * cols`.
    #[inline]
    pub const fn size(&self) -> usize
    {
        self.rows * self.cols
    }

    /// Return `true` if both extents are zero.
    #[inline]
    pub const fn is_null(&self) -> bool
    {
        self.rows == 0 && self.cols == 0
    }

    #[inline]
    pub const fn is_square(&self) -> bool
    {
        self.rows == self.cols
    }

    /// The shape with rows and columns swapped.
    #[inline]
    pub const fn t(&self) -> Shape
    {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl From<(usize, usize)> for Shape
{
    #[inline]
    fn from((rows, cols): (usize, usize)) -> Shape
    {
        Shape { rows, cols }
    }
}

impl From<[usize; 2]> for Shape
{
    #[inline]
    fn from([rows, cols]: [usize; 2]) -> Shape
    {
        Shape { rows, cols }
    }
}

impl fmt::Display for Shape
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests
{
    use super::Shape;

    #[test]
    fn size_and_null()
    {
        assert_eq!(Shape::new(2, 3).size(), 6);
        assert!(Shape::default().is_null());
        assert!(!Shape::new(0, 3).is_null());
        assert_eq!(Shape::new(0, 3).size(), 0);
        assert!(Shape::square(4).is_square());
        assert_eq!(Shape::new(2, 5).t(), Shape::new(5, 2));
        assert_eq!(Shape::from((2, 5)).to_string(), "[2, 5]");
    }
}
