// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndmat
//!
use num_traits::{One, Zero};

use crate::array_io::Pod;
use crate::imp_prelude::*;

/// # Constructor Methods for Owned Arrays
impl<A> NdArray<A>
{
    /// Create an empty `0 × 0` array. No buffer is allocated.
    pub fn new() -> NdArray<A>
    {
        NdArray {
            data: Vec::new(),
            shape: Shape::default(),
        }
    }

    /// Create a `1 × n` array from a vector (no copying needed).
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let array = NdArray::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), (1, 4).into());
    /// ```
    pub fn from_vec(v: Vec<A>) -> NdArray<A>
    {
        let shape = if v.is_empty() {
            Shape::default()
        } else {
            Shape::new(1, v.len())
        };
        NdArray { data: v, shape }
    }

    /// Create a `1 × n` array from an iterable.
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let array = NdArray::from_iter((0..5).map(|x| x * x));
    /// assert_eq!(array.as_slice(), &[0, 1, 4, 9, 16]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iterable: I) -> NdArray<A>
    where I: IntoIterator<Item = A>
    {
        Self::from_vec(iterable.into_iter().collect())
    }

    /// Create an array with the given shape from a vector in row-major
    /// order (no copying needed).
    ///
    /// **Errors** with `InvalidArgument` if the vector length does not
    /// match the shape.
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a[(1, 0)], 3);
    /// assert!(NdArray::from_shape_vec((2, 3), vec![1, 2]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<NdArray<A>, ArrayError>
    where Sh: Into<Shape>
    {
        let shape = shape.into();
        if shape.size() != v.len() {
            return Err(invalid_argument(format!(
                "cannot build array of shape {} from {} elements",
                shape,
                v.len()
            )));
        }
        Ok(NdArray { data: v, shape })
    }

    /// Create an array from a vector of rows.
    ///
    /// **Errors** with `InvalidArgument` if the rows are not all the same
    /// length.
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2, 3],
    ///                                 vec![4, 5, 6]]).unwrap();
    /// assert_eq!(a.shape(), (2, 3).into());
    ///
    /// assert!(NdArray::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows<R>(rows: Vec<R>) -> Result<NdArray<A>, ArrayError>
    where R: IntoIterator<Item = A>
    {
        let nrows = rows.len();
        let mut ncols = None;
        let mut data = Vec::new();
        for row in rows {
            let before = data.len();
            data.extend(row);
            let len = data.len() - before;
            match ncols {
                None => ncols = Some(len),
                Some(n) if n != len => {
                    return Err(invalid_argument("All rows of the initializer list needs to have the same number of elements"));
                }
                Some(_) => {}
            }
        }
        let ncols = ncols.unwrap_or(0);
        let shape = if nrows * ncols == 0 {
            data.clear();
            Shape::default()
        } else {
            Shape::new(nrows, ncols)
        };
        Ok(NdArray { data, shape })
    }

    /// Create an array with copies of `elem`.
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_elem((2, 2), 1.);
    /// assert_eq!(a.as_slice(), &[1., 1., 1., 1.]);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> NdArray<A>
    where
        A: Clone,
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        NdArray {
            data: vec![elem; shape.size()],
            shape,
        }
    }

    /// Create an array with values created by the function `f`, which is
    /// called with the `(row, col)` position of each element in row-major
    /// order.
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> NdArray<A>
    where
        Sh: Into<Shape>,
        F: FnMut((usize, usize)) -> A,
    {
        let shape = shape.into();
        let mut data = Vec::with_capacity(shape.size());
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                data.push(f((row, col)));
            }
        }
        NdArray { data, shape }
    }

    /// Create an array filled with zeros.
    pub fn zeros<Sh>(shape: Sh) -> NdArray<A>
    where
        A: Clone + Zero,
        Sh: Into<Shape>,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array filled with ones.
    pub fn ones<Sh>(shape: Sh) -> NdArray<A>
    where
        A: Clone + One,
        Sh: Into<Shape>,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create a square `n × n` array filled with zeros.
    pub fn square(n: usize) -> NdArray<A>
    where A: Clone + Zero
    {
        Self::zeros(Shape::square(n))
    }

    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// ```rust
    /// use ndmat::NdArray;
    ///
    /// let eye = NdArray::<i32>::eye(2);
    /// assert_eq!(eye.as_slice(), &[1, 0, 0, 1]);
    /// ```
    pub fn eye(n: usize) -> NdArray<A>
    where A: Clone + Zero + One
    {
        let mut eye = Self::square(n);
        for i in 0..n {
            eye.data[i * n + i] = A::one();
        }
        eye
    }

    /// Alias for [`NdArray::eye`].
    pub fn identity(n: usize) -> NdArray<A>
    where A: Clone + Zero + One
    {
        Self::eye(n)
    }

    /// Create a `1 × n` array by reinterpreting a raw byte buffer as native
    /// endian elements of `A`.
    ///
    /// `n` is `bytes.len() / size_of::<A>()`; trailing bytes that do not
    /// make up a whole element are ignored.
    pub fn from_bytes(bytes: &[u8]) -> NdArray<A>
    where A: Pod
    {
        Self::from_vec(bytes.chunks_exact(A::SIZE).map(A::from_ne_slice).collect())
    }
}

impl<A> Default for NdArray<A>
{
    /// The empty `0 × 0` array.
    fn default() -> Self
    {
        NdArray::new()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_rows_make_null_shape()
    {
        let a = NdArray::<i32>::from_rows(Vec::<Vec<i32>>::new()).unwrap();
        assert!(a.shape().is_null());
        assert!(a.is_empty());
        let b = NdArray::<i32>::from_rows(vec![vec![], vec![]]).unwrap();
        assert!(b.shape().is_null());
    }

    #[test]
    fn from_bytes_reads_native_endian()
    {
        let mut bytes = Vec::new();
        for x in [1.5f64, -2., 8.] {
            bytes.extend_from_slice(&x.to_ne_bytes());
        }
        bytes.push(0xff);
        let a = NdArray::<f64>::from_bytes(&bytes);
        assert_eq!(a.as_slice(), &[1.5, -2., 8.]);
        assert_eq!(a.shape(), Shape::new(1, 3));
    }

    #[test]
    fn shape_fn_is_row_major()
    {
        let a = NdArray::from_shape_fn((2, 3), |(r, c)| r * 10 + c);
        assert_eq!(a.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }
}
