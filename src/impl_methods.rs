// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem;
use std::ops::{Add, Mul};
use std::slice;

use num_traits::{AsPrimitive, One, Zero};

use crate::imp_prelude::*;
use crate::iterators::{ColumnIter, Rows, RowsMut};
use crate::numeric_util;
use crate::slice::resolve_index;

/// # Methods For All Arrays
impl<A> NdArray<A>
{
    /// Return the shape of the array.
    #[inline]
    pub fn shape(&self) -> Shape
    {
        self.shape
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn size(&self) -> usize
    {
        self.data.len()
    }

    /// Alias for [`NdArray::size`].
    #[inline]
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Return whether the array has any elements
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Return the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize
    {
        self.shape.rows
    }

    /// Return the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize
    {
        self.shape.cols
    }

    /// Return the extent along `axis`: the number of rows for `Axis::Row`,
    /// of columns for `Axis::Col`, and the total size for `Axis::None`.
    pub fn dim_size(&self, axis: Axis) -> usize
    {
        match axis {
            Axis::None => self.size(),
            Axis::Row => self.shape.rows,
            Axis::Col => self.shape.cols,
        }
    }

    /// Return `true` if the array holds exactly one element.
    #[inline]
    pub fn is_scalar(&self) -> bool
    {
        self.size() == 1
    }

    /// Return `true` if the array is a row or column vector (and not a
    /// scalar).
    #[inline]
    pub fn is_flat(&self) -> bool
    {
        !self.is_scalar() && (self.shape.rows == 1 || self.shape.cols == 1)
    }

    #[inline]
    pub fn is_square(&self) -> bool
    {
        self.shape.is_square()
    }

    /// The number of bytes occupied by the elements.
    pub fn nbytes(&self) -> usize
    {
        mem::size_of::<A>() * self.size()
    }

    #[track_caller]
    pub(crate) fn flat_index(&self, index: isize) -> Result<usize, ArrayError>
    {
        resolve_index(index, self.size(), "Input")
    }

    #[track_caller]
    pub(crate) fn index2(&self, row: isize, col: isize) -> Result<usize, ArrayError>
    {
        let r = resolve_index(row, self.shape.rows, "Row")?;
        let c = resolve_index(col, self.shape.cols, "Column")?;
        Ok(r * self.shape.cols + c)
    }

    /// Return a reference to the element at flat position `index`.
    ///
    /// Negative indices count from the back: `-1` is the last element.
    ///
    /// **Errors** with `InvalidArgument` if the index is out of bounds.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3]);
    /// assert_eq!(a.get(-3), Ok(&1));
    /// assert!(a.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&A, ArrayError>
    {
        let i = self.flat_index(index)?;
        Ok(&self.data[i])
    }

    /// Return a mutable reference to the element at flat position `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut A, ArrayError>
    {
        let i = self.flat_index(index)?;
        Ok(&mut self.data[i])
    }

    /// Return a reference to the element at `(row, col)`.
    ///
    /// **Errors** with `InvalidArgument` if either index is out of bounds.
    pub fn get2(&self, row: isize, col: isize) -> Result<&A, ArrayError>
    {
        let i = self.index2(row, col)?;
        Ok(&self.data[i])
    }

    /// Return a mutable reference to the element at `(row, col)`.
    pub fn get2_mut(&mut self, row: isize, col: isize) -> Result<&mut A, ArrayError>
    {
        let i = self.index2(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Return the only element of a one-element array.
    ///
    /// **Errors** with `InvalidArgument` if the array does not hold exactly
    /// one element.
    pub fn item(&self) -> Result<A, ArrayError>
    where A: Clone
    {
        if self.size() != 1 {
            return Err(invalid_argument("Can only convert an array of size 1 to a scalar."));
        }
        Ok(self.data[0].clone())
    }

    /// The first element in row-major order.
    pub fn front(&self) -> Option<&A>
    {
        self.data.first()
    }

    /// The last element in row-major order.
    pub fn back(&self) -> Option<&A>
    {
        self.data.last()
    }

    /// Return a copy of row `row` as a `1 × ncols` array.
    pub fn row(&self, row: isize) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let r = resolve_index(row, self.shape.rows, "Row")?;
        let cols = self.shape.cols;
        NdArray::from_shape_vec((1, cols), self.data[r * cols..(r + 1) * cols].to_vec())
    }

    /// Return a copy of column `col` as an `nrows × 1` array.
    pub fn column(&self, col: isize) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let data = self.column_iter(col)?.cloned().collect();
        NdArray::from_shape_vec((self.shape.rows, 1), data)
    }

    /// Return the element buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[A]
    {
        &self.data
    }

    /// Return the element buffer in row-major order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [A]
    {
        &mut self.data
    }

    /// Return the element buffer, consuming the array.
    pub fn into_raw_vec(self) -> Vec<A>
    {
        self.data
    }

    /// Return a copy of the elements in row-major order.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.data.clone()
    }

    /// Return an iterator of references to the elements in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, A>
    {
        self.data.iter()
    }

    /// Return an iterator of mutable references to the elements in row-major
    /// order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A>
    {
        self.data.iter_mut()
    }

    /// Return an iterator over the elements of one row.
    ///
    /// **Errors** with `InvalidArgument` if `row` is out of bounds.
    pub fn row_iter(&self, row: isize) -> Result<slice::Iter<'_, A>, ArrayError>
    {
        let r = resolve_index(row, self.shape.rows, "Row")?;
        let cols = self.shape.cols;
        Ok(self.data[r * cols..(r + 1) * cols].iter())
    }

    /// Return an iterator over the elements of one column, top to bottom.
    ///
    /// **Errors** with `InvalidArgument` if `col` is out of bounds.
    pub fn column_iter(&self, col: isize) -> Result<ColumnIter<'_, A>, ArrayError>
    {
        let c = resolve_index(col, self.shape.cols, "Column")?;
        Ok(ColumnIter::new(&self.data, self.shape, c))
    }

    /// Return an iterator over the rows of the array, each row a slice.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let sums: Vec<i32> = a.rows().map(|row| row.iter().sum()).collect();
    /// assert_eq!(sums, vec![3, 7]);
    /// ```
    pub fn rows(&self) -> Rows<'_, A>
    {
        Rows::new(&self.data, self.shape)
    }

    /// Return an iterator over the rows of the array, each row a mutable
    /// slice.
    pub fn rows_mut(&mut self) -> RowsMut<'_, A>
    {
        RowsMut::new(&mut self.data, self.shape)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: A)
    where A: Clone
    {
        self.data.fill(value);
    }

    /// Set every element to zero.
    pub fn set_zeros(&mut self)
    where A: Clone + Zero
    {
        self.fill(A::zero());
    }

    /// Set every element to one.
    pub fn set_ones(&mut self)
    where A: Clone + One
    {
        self.fill(A::one());
    }

    /// Return a deep copy of the array.
    pub fn copy(&self) -> NdArray<A>
    where A: Clone
    {
        self.clone()
    }

    /// Return a copy of the elements as a `1 × size` row vector.
    pub fn flatten(&self) -> NdArray<A>
    where A: Clone
    {
        NdArray::from_vec(self.data.clone())
    }

    /// Reinterpret the array in place as a `1 × size` row vector.
    pub fn ravel(&mut self)
    {
        if !self.is_empty() {
            self.shape = Shape::new(1, self.size());
        }
    }

    /// Return the transposed array: element `(r, c)` moves to `(c, r)`.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2, 3],
    ///                                 vec![4, 5, 6]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2).into());
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// assert_eq!(t.transpose(), a);
    /// ```
    pub fn transpose(&self) -> NdArray<A>
    where A: Clone
    {
        let Shape { rows, cols } = self.shape;
        let mut data = Vec::with_capacity(self.size());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[r * cols + c].clone());
            }
        }
        NdArray {
            data,
            shape: self.shape.t(),
        }
    }

    /// Alias for [`NdArray::transpose`].
    pub fn t(&self) -> NdArray<A>
    where A: Clone
    {
        self.transpose()
    }

    /// Reinterpret the array in place with `rows × cols`, keeping the element
    /// order. One of the extents may be `-1`, in which case it is inferred
    /// from the size of the array.
    ///
    /// **Errors** with `InvalidArgument` for a negative extent other than a
    /// single `-1` or when the inferred extent does not divide the size, and
    /// with `Runtime` if `rows * cols` does not equal the size (or overflows). The array is
    /// left unchanged on error.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let mut a = NdArray::from_iter(0..6);
    /// a.reshape(-1, 2).unwrap();
    /// assert_eq!(a.shape(), (3, 2).into());
    /// assert!(a.reshape(4, 2).is_err());
    /// ```
    pub fn reshape(&mut self, rows: isize, cols: isize) -> Result<(), ArrayError>
    {
        let size = self.size();
        let (rows, cols) = match (rows, cols) {
            (r, c) if r >= 0 && c >= 0 => (r as usize, c as usize),
            (-1, c) if c > 0 => {
                let c = c as usize;
                if size % c != 0 {
                    return Err(invalid_argument(format!(
                        "{} is not a multiple of {}",
                        size, c
                    )));
                }
                (size / c, c)
            }
            (r, -1) if r > 0 => {
                let r = r as usize;
                if size % r != 0 {
                    return Err(invalid_argument(format!(
                        "{} is not a multiple of {}",
                        size, r
                    )));
                }
                (r, size / r)
            }
            (r, c) => {
                return Err(invalid_argument(format!("invalid reshape extents ({}, {})", r, c)));
            }
        };
        if rows.checked_mul(cols) != Some(size) {
            return Err(runtime(format!(
                "Cannot reshape array of size {} into shape [{}, {}]",
                size, rows, cols
            )));
        }
        self.shape = Shape::new(rows, cols);
        Ok(())
    }

    /// Reinterpret the array in place as a `1 × n` row vector.
    ///
    /// **Errors** with `Runtime` if `n` does not equal the size.
    pub fn reshape_flat(&mut self, n: usize) -> Result<(), ArrayError>
    {
        if n != self.size() {
            return Err(runtime(format!("Cannot reshape array of size {} into shape [1, {}]", self.size(), n)));
        }
        self.shape = Shape::new(1, n);
        Ok(())
    }

    /// Change the shape, discarding the old contents: every element of the
    /// resized array is zero.
    pub fn resize_fast<Sh>(&mut self, shape: Sh)
    where
        A: Clone + Zero,
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        self.data = vec![A::zero(); shape.size()];
        self.shape = shape;
    }

    /// Change the shape, keeping the elements of the region shared by the old
    /// and the new shape at their `(row, col)` positions. New positions are
    /// zero.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let mut a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// a.resize_slow((3, 1));
    /// assert_eq!(a.as_slice(), &[1, 3, 0]);
    /// ```
    pub fn resize_slow<Sh>(&mut self, shape: Sh)
    where
        A: Clone + Zero,
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let mut data = vec![A::zero(); shape.size()];
        let old = mem::take(&mut self.data);
        let keep_rows = self.shape.rows.min(shape.rows);
        let keep_cols = self.shape.cols.min(shape.cols);
        for r in 0..keep_rows {
            let src = &old[r * self.shape.cols..r * self.shape.cols + keep_cols];
            data[r * shape.cols..r * shape.cols + keep_cols].clone_from_slice(src);
        }
        self.data = data;
        self.shape = shape;
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: isize, b: isize) -> Result<(), ArrayError>
    {
        let a = resolve_index(a, self.shape.rows, "Row")?;
        let b = resolve_index(b, self.shape.rows, "Row")?;
        let cols = self.shape.cols;
        for c in 0..cols {
            self.data.swap(a * cols + c, b * cols + c);
        }
        Ok(())
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: isize, b: isize) -> Result<(), ArrayError>
    {
        let a = resolve_index(a, self.shape.cols, "Column")?;
        let b = resolve_index(b, self.shape.cols, "Column")?;
        for row in self.rows_mut() {
            row.swap(a, b);
        }
        Ok(())
    }

    /// Replace every element equal to `old` with `new`.
    pub fn replace(&mut self, old: &A, new: A)
    where A: PartialEq + Clone
    {
        for x in self.data.iter_mut().filter(|x| **x == *old) {
            *x = new.clone();
        }
    }

    /// Return a copy with every element limited to `min..=max`.
    pub fn clip(&self, min: A, max: A) -> NdArray<A>
    where A: PartialOrd + Clone
    {
        self.map(|x| {
            if *x < min {
                min.clone()
            } else if *x > max {
                max.clone()
            } else {
                x.clone()
            }
        })
    }

    /// Tile the array `rows` times vertically and `cols` times horizontally.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2]);
    /// let r = a.repeat(2, 2);
    /// assert_eq!(r.shape(), (2, 4).into());
    /// assert_eq!(r.as_slice(), &[1, 2, 1, 2, 1, 2, 1, 2]);
    /// ```
    pub fn repeat(&self, rows: usize, cols: usize) -> NdArray<A>
    where A: Clone
    {
        let shape = Shape::new(self.shape.rows * rows, self.shape.cols * cols);
        let mut data = Vec::with_capacity(shape.size());
        for _ in 0..rows {
            for row in self.rows() {
                for _ in 0..cols {
                    data.extend_from_slice(row);
                }
            }
        }
        NdArray { data, shape }
    }

    /// Call `f` by reference on each element and create a new array with the
    /// new values.
    pub fn map<'a, B, F>(&'a self, f: F) -> NdArray<B>
    where F: FnMut(&'a A) -> B
    {
        NdArray {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
        }
    }

    /// Modify the array in place by calling `f` by mutable reference on each
    /// element.
    pub fn map_inplace<F>(&mut self, f: F)
    where F: FnMut(&mut A)
    {
        self.data.iter_mut().for_each(f);
    }

    /// Return an array with the elements converted with an `as` cast.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1.7f64, -2.2]);
    /// assert_eq!(a.astype::<i32>().as_slice(), &[1, -2]);
    /// ```
    pub fn astype<B>(&self) -> NdArray<B>
    where
        A: AsPrimitive<B>,
        B: Copy + 'static,
    {
        self.map(|&x| x.as_())
    }

    /// Slice selecting every `step`-th row beginning at `start`, through the
    /// last row.
    pub fn r_slice(&self, start: isize, step: isize) -> Slice
    {
        Slice::new(start, self.shape.rows as isize, step)
    }

    /// Slice selecting every `step`-th column beginning at `start`, through
    /// the last column.
    pub fn c_slice(&self, start: isize, step: isize) -> Slice
    {
        Slice::new(start, self.shape.cols as isize, step)
    }

    /// Perform the dot product.
    ///
    /// Two vectors of the same size give their inner product as a `1 × 1`
    /// array; otherwise `self` must have as many columns as `rhs` has rows,
    /// and the result is the matrix product.
    ///
    /// **Errors** with `InvalidArgument` if the shapes are inconsistent.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = NdArray::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap().as_slice(), &[19, 22, 43, 50]);
    ///
    /// let v = NdArray::from_vec(vec![1, 2, 3]);
    /// assert_eq!(v.dot(&v).unwrap().as_slice(), &[14]);
    /// ```
    pub fn dot(&self, rhs: &NdArray<A>) -> Result<NdArray<A>, ArrayError>
    where A: Clone + Zero + Add<Output = A> + Mul<Output = A>
    {
        if self.shape == rhs.shape && (self.shape.rows == 1 || self.shape.cols == 1) {
            let sum = numeric_util::unrolled_dot(&self.data, &rhs.data);
            return Ok(NdArray::from_elem((1, 1), sum));
        }
        if self.shape.cols != rhs.shape.rows {
            return Err(invalid_argument(format!(
                "shapes of [{}, {}] and [{}, {}] are not consistent",
                self.shape.rows, self.shape.cols, rhs.shape.rows, rhs.shape.cols
            )));
        }
        let rhs_t = rhs.transpose();
        let shape = Shape::new(self.shape.rows, rhs.shape.cols);
        let mut data = Vec::with_capacity(shape.size());
        for row in self.rows() {
            for col in rhs_t.rows() {
                data.push(numeric_util::unrolled_dot(row, col));
            }
        }
        Ok(NdArray { data, shape })
    }

    #[track_caller]
    pub(crate) fn index_or_panic(&self, index: isize) -> usize
    {
        match self.flat_index(index) {
            Ok(i) => i,
            Err(e) => panic!("{}", e.message()),
        }
    }

    #[track_caller]
    pub(crate) fn index2_or_panic(&self, row: isize, col: isize) -> usize
    {
        match self.index2(row, col) {
            Ok(i) => i,
            Err(e) => panic!("{}", e.message()),
        }
    }

    /// Build from parts; the buffer length must match the shape.
    pub(crate) fn from_parts(data: Vec<A>, shape: Shape) -> NdArray<A>
    {
        debug_assert_eq!(data.len(), shape.size());
        NdArray { data, shape }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn reshape_failure_leaves_array()
    {
        let mut a = NdArray::from_iter(0..6);
        let err = a.reshape(4, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert_eq!(a.shape(), Shape::new(1, 6));
        assert!(a.reshape(-1, 4).is_err());
        assert!(a.reshape(-1, -1).is_err());
        a.reshape(2, -1).unwrap();
        assert_eq!(a.shape(), Shape::new(2, 3));
    }

    #[test]
    fn reshape_overflowing_extents()
    {
        let mut a = NdArray::from_iter(0..6);
        let err = a.reshape(isize::MAX, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert!(a.reshape(isize::MAX, isize::MAX).is_err());
        assert_eq!(a.shape(), Shape::new(1, 6));
    }

    #[test]
    fn resize_fast_zero_fills()
    {
        let mut a = NdArray::from_vec(vec![1, 2, 3]);
        a.resize_fast((2, 2));
        assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn resize_slow_grows_with_zeros()
    {
        let mut a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        a.resize_slow((3, 3));
        assert_eq!(a.as_slice(), &[1, 2, 0, 3, 4, 0, 0, 0, 0]);
        assert_eq!(a.size(), a.shape().size());
    }

    #[test]
    fn swap_rows_and_cols()
    {
        let mut a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        a.swap_rows(0, -1).unwrap();
        assert_eq!(a.as_slice(), &[3, 4, 1, 2]);
        a.swap_cols(0, 1).unwrap();
        assert_eq!(a.as_slice(), &[4, 3, 2, 1]);
        assert!(a.swap_cols(0, 2).is_err());
    }

    #[test]
    fn dot_rejects_inconsistent_shapes()
    {
        let a = NdArray::<i32>::ones((2, 3));
        assert!(a.dot(&a).is_err());
        let p = a.dot(&a.t()).unwrap();
        assert_eq!(p.as_slice(), &[3, 3, 3, 3]);
    }

    #[test]
    fn clip_and_replace()
    {
        let mut a = NdArray::from_vec(vec![-3, 0, 5, 9]);
        assert_eq!(a.clip(0, 5).as_slice(), &[0, 0, 5, 5]);
        a.replace(&0, 7);
        assert_eq!(a.as_slice(), &[-3, 7, 5, 9]);
    }

    #[test]
    fn item_requires_single_element()
    {
        assert_eq!(NdArray::from_vec(vec![4]).item(), Ok(4));
        assert!(NdArray::from_vec(vec![4, 5]).item().is_err());
    }
}
