// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Copy-out selection and the `put` family.
//!
//! Every read produces a new array; no selection aliases the source buffer.

use crate::imp_prelude::*;

/// # Selection and Assignment
impl<A> NdArray<A>
{
    /// Flat positions of a selection against the whole buffer.
    fn flat_positions(&self, sel: &SliceOrIndex) -> Result<Vec<usize>, ArrayError>
    {
        sel.positions(self.size())
    }

    /// Flat positions of a row × column selection, row-major over the
    /// Cartesian product.
    fn positions_2d(&self, rows: &SliceOrIndex, cols: &SliceOrIndex) -> Result<(Shape, Vec<usize>), ArrayError>
    {
        let rows = rows.positions(self.shape.rows)?;
        let cols = cols.positions(self.shape.cols)?;
        let ncols = self.shape.cols;
        let positions = rows
            .iter()
            .flat_map(|&r| cols.iter().map(move |&c| r * ncols + c))
            .collect();
        Ok((Shape::new(rows.len(), cols.len()), positions))
    }

    fn mask_positions(&self, mask: &NdArray<bool>) -> Result<Vec<usize>, ArrayError>
    {
        if mask.shape() != self.shape {
            return Err(invalid_argument(format!(
                "input mask must be the same shape as the array: {} vs {}",
                mask.shape(),
                self.shape
            )));
        }
        Ok(mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| if m { Some(i) } else { None })
            .collect())
    }

    fn gather(&self, positions: &[usize], shape: Shape) -> NdArray<A>
    where A: Clone
    {
        let data = positions.iter().map(|&i| self.data[i].clone()).collect();
        NdArray::from_parts(data, shape)
    }

    fn gather_flat(&self, positions: &[usize]) -> NdArray<A>
    where A: Clone
    {
        NdArray::from_vec(positions.iter().map(|&i| self.data[i].clone()).collect())
    }

    /// Write `values` at `positions`, after checking that the counts agree.
    fn scatter(&mut self, positions: &[usize], values: &NdArray<A>) -> Result<(), ArrayError>
    where A: Clone
    {
        if positions.len() != values.size() {
            return Err(invalid_argument(format!(
                "{} values supplied for {} positions",
                values.size(),
                positions.len()
            )));
        }
        for (&i, v) in positions.iter().zip(values.iter()) {
            self.data[i] = v.clone();
        }
        Ok(())
    }

    fn scatter_value(&mut self, positions: &[usize], value: A)
    where A: Clone
    {
        for &i in positions {
            self.data[i] = value.clone();
        }
    }

    /// Return a copy of the elements selected by a flat slice, as a `1 × n`
    /// row vector.
    ///
    /// **Errors** with `InvalidArgument` if the slice does not fit the array.
    ///
    /// ```
    /// use ndmat::{NdArray, Slice};
    ///
    /// let a = NdArray::from_iter(0..10);
    /// let b = a.slice(Slice::new(1, 8, 3)).unwrap();
    /// assert_eq!(b.as_slice(), &[1, 4, 7]);
    /// ```
    pub fn slice(&self, s: Slice) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&s.into())?;
        Ok(self.gather_flat(&positions))
    }

    /// Return a copy of the elements at the given flat indices, in the given
    /// order, as a `1 × n` row vector.
    ///
    /// **Errors** with `InvalidArgument` if an index is out of bounds.
    pub fn get_indices(&self, indices: &[isize]) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&SliceOrIndex::Indices(indices.to_vec()))?;
        Ok(self.gather_flat(&positions))
    }

    /// Return a copy of the elements where `mask` is `true`, in row-major
    /// order, as a `1 × n` row vector.
    ///
    /// **Errors** with `InvalidArgument` if the mask shape is not the array
    /// shape.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 5, 2, 7]);
    /// let mask = a.map(|&x| x > 2);
    /// assert_eq!(a.get_mask(&mask).unwrap().as_slice(), &[5, 7]);
    /// ```
    pub fn get_mask(&self, mask: &NdArray<bool>) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let positions = self.mask_positions(mask)?;
        Ok(self.gather_flat(&positions))
    }

    /// Return a copy of a row × column selection.
    ///
    /// Each axis is selected with anything that converts into a
    /// [`SliceOrIndex`]: an index, a range, a [`Slice`] or a list of indices.
    /// The result has one row per selected row and one column per selected
    /// column, visited in selection order.
    ///
    /// **Errors** with `InvalidArgument` if a selection does not fit its
    /// axis.
    ///
    /// ```
    /// use ndmat::{NdArray, Slice};
    ///
    /// let a = NdArray::from_shape_fn((4, 4), |(r, c)| r * 4 + c);
    /// let b = a.select(Slice::new(0, 4, 2), 1..3).unwrap();
    /// assert_eq!(b.shape(), (2, 2).into());
    /// assert_eq!(b.as_slice(), &[1, 2, 9, 10]);
    ///
    /// let c = a.select(vec![3, 0], -1).unwrap();
    /// assert_eq!(c.as_slice(), &[15, 3]);
    /// ```
    pub fn select<R, C>(&self, rows: R, cols: C) -> Result<NdArray<A>, ArrayError>
    where
        A: Clone,
        R: Into<SliceOrIndex>,
        C: Into<SliceOrIndex>,
    {
        let (shape, positions) = self.positions_2d(&rows.into(), &cols.into())?;
        Ok(self.gather(&positions, shape))
    }

    /// Return a copy of the rectangular region selected by two slices.
    pub fn slice_2d(&self, rows: Slice, cols: Slice) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        self.select(rows, cols)
    }

    /// Set the element at flat position `index`.
    ///
    /// **Errors** with `InvalidArgument` if the index is out of bounds.
    pub fn put(&mut self, index: isize, value: A) -> Result<(), ArrayError>
    {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Set the element at `(row, col)`.
    ///
    /// **Errors** with `InvalidArgument` if either index is out of bounds.
    pub fn put2(&mut self, row: isize, col: isize, value: A) -> Result<(), ArrayError>
    {
        *self.get2_mut(row, col)? = value;
        Ok(())
    }

    /// Set the elements at the given flat indices to `value`.
    ///
    /// **Errors** with `InvalidArgument` if an index is out of bounds; no
    /// element is written in that case.
    pub fn put_indices(&mut self, indices: &[isize], value: A) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&SliceOrIndex::Indices(indices.to_vec()))?;
        self.scatter_value(&positions, value);
        Ok(())
    }

    /// Set the elements at the given flat indices to the corresponding
    /// `values`.
    ///
    /// **Errors** with `InvalidArgument` if an index is out of bounds or if
    /// the number of values differs from the number of indices.
    pub fn put_indices_values(&mut self, indices: &[isize], values: &NdArray<A>) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&SliceOrIndex::Indices(indices.to_vec()))?;
        self.scatter(&positions, values)
    }

    /// Set the elements selected by a flat slice to `value`.
    pub fn put_slice(&mut self, s: Slice, value: A) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&s.into())?;
        self.scatter_value(&positions, value);
        Ok(())
    }

    /// Set the elements selected by a flat slice to `values`, in order.
    ///
    /// **Errors** with `InvalidArgument` if the slice does not fit or if the
    /// number of values differs from the number of selected elements.
    pub fn put_slice_values(&mut self, s: Slice, values: &NdArray<A>) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.flat_positions(&s.into())?;
        self.scatter(&positions, values)
    }

    /// Set every element of a row × column selection to `value`.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let mut a = NdArray::<i32>::zeros((3, 3));
    /// a.put_select(1..3, -1, 5).unwrap();
    /// assert_eq!(a.as_slice(), &[0, 0, 0, 0, 0, 5, 0, 0, 5]);
    /// ```
    pub fn put_select<R, C>(&mut self, rows: R, cols: C, value: A) -> Result<(), ArrayError>
    where
        A: Clone,
        R: Into<SliceOrIndex>,
        C: Into<SliceOrIndex>,
    {
        let (_, positions) = self.positions_2d(&rows.into(), &cols.into())?;
        self.scatter_value(&positions, value);
        Ok(())
    }

    /// Set the elements of a row × column selection to `values`, read in
    /// row-major order.
    ///
    /// **Errors** with `InvalidArgument` if a selection does not fit or if
    /// the number of values differs from the number of selected elements.
    pub fn put_select_values<R, C>(&mut self, rows: R, cols: C, values: &NdArray<A>) -> Result<(), ArrayError>
    where
        A: Clone,
        R: Into<SliceOrIndex>,
        C: Into<SliceOrIndex>,
    {
        let (_, positions) = self.positions_2d(&rows.into(), &cols.into())?;
        self.scatter(&positions, values)
    }

    /// Set the elements where `mask` is `true` to `value`.
    ///
    /// **Errors** with `InvalidArgument` if the mask shape is not the array
    /// shape.
    pub fn put_mask(&mut self, mask: &NdArray<bool>, value: A) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.mask_positions(mask)?;
        self.scatter_value(&positions, value);
        Ok(())
    }

    /// Set the elements where `mask` is `true` to `values`, in row-major
    /// order.
    ///
    /// **Errors** with `InvalidArgument` if the mask shape is not the array
    /// shape or if the number of values differs from the number of `true`
    /// mask entries.
    pub fn put_mask_values(&mut self, mask: &NdArray<bool>, values: &NdArray<A>) -> Result<(), ArrayError>
    where A: Clone
    {
        let positions = self.mask_positions(mask)?;
        self.scatter(&positions, values)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn failed_put_does_not_write()
    {
        let mut a = NdArray::from_vec(vec![1, 2, 3]);
        let err = a.put_indices(&[0, 5], 9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.as_slice(), &[1, 2, 3]);

        let values = NdArray::from_vec(vec![7, 8]);
        assert!(a.put_slice_values(Slice::to(3), &values).is_err());
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn mask_shape_must_match()
    {
        let a = NdArray::from_vec(vec![1, 2, 3]);
        let mask = NdArray::from_vec(vec![true, false]);
        assert!(a.get_mask(&mask).is_err());
    }

    #[test]
    fn select_mixed_forms()
    {
        let a = NdArray::from_shape_fn((3, 4), |(r, c)| (r * 4 + c) as i32);
        let row = a.select(1, 0..4).unwrap();
        assert_eq!(row.as_slice(), &[4, 5, 6, 7]);
        let col = a.select(0..3, 2).unwrap();
        assert_eq!(col.shape(), Shape::new(3, 1));
        assert_eq!(col.as_slice(), &[2, 6, 10]);
    }
}
