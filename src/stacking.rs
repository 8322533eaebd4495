// Copyright 2014-2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::imp_prelude::*;

/// Concatenate arrays along the given axis.
///
/// - `Axis::None`: the elements of every array, in order, as one `1 × n`
///   row vector.
/// - `Axis::Row`: the arrays stacked on top of each other, see
///   [`row_stack`].
/// - `Axis::Col`: the arrays placed side by side, see [`column_stack`].
///
/// **Errors** if the arrays have mismatching extents across the
/// concatenation axis.
///
/// ```
/// use ndmat::{concatenate, Axis, NdArray};
///
/// let a = NdArray::from_rows(vec![vec![2., 2.],
///                                 vec![3., 3.]]).unwrap();
/// let b = NdArray::from_vec(vec![5., 5.]);
/// let c = concatenate(Axis::Row, &[&a, &b]).unwrap();
/// assert_eq!(c.shape(), (3, 2).into());
///
/// let flat = concatenate(Axis::None, &[&a, &b]).unwrap();
/// assert_eq!(flat.as_slice(), &[2., 2., 3., 3., 5., 5.]);
/// ```
pub fn concatenate<A>(axis: Axis, arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    match axis {
        Axis::None => Ok(NdArray::from_iter(arrays.iter().flat_map(|a| a.iter().cloned()))),
        Axis::Row => row_stack(arrays),
        Axis::Col => column_stack(arrays),
    }
}

/// Stack arrays vertically: the rows of each array follow the rows of the
/// previous one.
///
/// Empty `0 × 0` arrays are skipped; the others must all have the same
/// number of columns.
///
/// **Errors** if the column counts differ.
///
/// ```
/// use ndmat::{row_stack, NdArray};
///
/// let a = NdArray::from_vec(vec![1, 2]);
/// let b = NdArray::from_rows(vec![vec![3, 4], vec![5, 6]]).unwrap();
/// let c = row_stack(&[&a, &NdArray::new(), &b]).unwrap();
/// assert_eq!(c.as_slice(), &[1, 2, 3, 4, 5, 6]);
/// assert!(row_stack(&[&a, &b.t()]).is_ok());
/// assert!(row_stack(&[&a, &NdArray::from_vec(vec![1])]).is_err());
/// ```
pub fn row_stack<A>(arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    let mut cols = None;
    let mut rows = 0;
    for a in arrays.iter().filter(|a| !a.shape().is_null()) {
        match cols {
            None => cols = Some(a.ncols()),
            Some(c) if c != a.ncols() => {
                return Err(invalid_argument("input arrays must have the same number of columns."));
            }
            Some(_) => {}
        }
        rows += a.nrows();
    }
    let cols = match cols {
        Some(c) => c,
        None => return Ok(NdArray::new()),
    };
    let mut data = Vec::with_capacity(rows * cols);
    for a in arrays {
        data.extend_from_slice(a.as_slice());
    }
    Ok(NdArray::from_parts(data, Shape::new(rows, cols)))
}

/// Stack arrays horizontally: row `r` of the result is row `r` of each array
/// in turn.
///
/// Empty `0 × 0` arrays are skipped; the others must all have the same
/// number of rows.
///
/// **Errors** if the row counts differ.
///
/// ```
/// use ndmat::{column_stack, NdArray};
///
/// let a = NdArray::from_shape_vec((2, 1), vec![1, 2]).unwrap();
/// let b = NdArray::from_rows(vec![vec![3, 4], vec![5, 6]]).unwrap();
/// let c = column_stack(&[&a, &b]).unwrap();
/// assert_eq!(c.as_slice(), &[1, 3, 4, 2, 5, 6]);
/// ```
pub fn column_stack<A>(arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    let mut rows = None;
    let mut cols = 0;
    let nonnull: Vec<&NdArray<A>> = arrays
        .iter()
        .copied()
        .filter(|a| !a.shape().is_null())
        .collect();
    for a in &nonnull {
        match rows {
            None => rows = Some(a.nrows()),
            Some(r) if r != a.nrows() => {
                return Err(invalid_argument("input arrays must have the same number of rows."));
            }
            Some(_) => {}
        }
        cols += a.ncols();
    }
    let rows = match rows {
        Some(r) => r,
        None => return Ok(NdArray::new()),
    };
    let mut data = Vec::with_capacity(rows * cols);
    let mut lanes: Vec<_> = nonnull.iter().map(|a| a.rows()).collect();
    for _ in 0..rows {
        for lane in lanes.iter_mut() {
            if let Some(row) = lane.next() {
                data.extend_from_slice(row);
            }
        }
    }
    Ok(NdArray::from_parts(data, Shape::new(rows, cols)))
}

/// Alias for [`column_stack`].
pub fn hstack<A>(arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    column_stack(arrays)
}

/// Alias for [`row_stack`].
pub fn vstack<A>(arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    row_stack(arrays)
}

/// Resolve an insertion position against `extent`: negative positions count
/// from the back and positions outside `0..=extent` are clamped into it.
fn clamp_position(index: isize, extent: usize) -> usize
{
    if index < 0 {
        (index + extent as isize).max(0) as usize
    } else {
        (index as usize).min(extent)
    }
}

/// View the elements as a `size × 1` column, so that flat insertion is row
/// insertion.
fn as_column<A: Clone>(a: &NdArray<A>) -> NdArray<A>
{
    NdArray::from_parts(a.to_vec(), Shape::new(a.size(), 1))
}

/// The rows to insert for `values`: a scalar repeated along a row, one row of
/// exactly `cols` elements, or a block with `cols` columns.
fn value_rows<A: Clone>(values: &NdArray<A>, cols: usize) -> Result<NdArray<A>, ArrayError>
{
    if values.size() == cols {
        Ok(NdArray::from_parts(values.to_vec(), Shape::new(1, cols)))
    } else if let [v] = values.as_slice() {
        Ok(NdArray::from_elem((1, cols), v.clone()))
    } else if values.ncols() == cols {
        Ok(values.clone())
    } else {
        Err(invalid_argument("input values shape cannot be broadcast to input array dimensions"))
    }
}

fn insert_rows<A: Clone>(arr: &NdArray<A>, row: usize, block: &NdArray<A>) -> NdArray<A>
{
    let cols = arr.ncols();
    let split = row * cols;
    let mut data = Vec::with_capacity(arr.size() + block.size());
    data.extend_from_slice(&arr.as_slice()[..split]);
    data.extend_from_slice(block.as_slice());
    data.extend_from_slice(&arr.as_slice()[split..]);
    NdArray::from_parts(data, Shape::new(arr.nrows() + block.nrows(), cols))
}

/// Insert `values` before position `index` along `axis`.
///
/// - `Axis::None`: the array is flattened and the elements of `values` are
///   inserted before flat position `index`; the result is `1 × n`.
/// - `Axis::Row`: rows are inserted before row `index`. `values` is a
///   scalar (repeated along the new row), exactly one row's worth of
///   elements, or a block with as many columns as the array.
/// - `Axis::Col`: the same for columns.
///
/// A negative `index` counts from the back; an index beyond either end is
/// clamped to it.
///
/// **Errors** if `values` cannot be broadcast to the inserted rows or
/// columns.
///
/// ```
/// use ndmat::{insert, Axis, NdArray};
///
/// let a = NdArray::from_vec(vec![1, 2, 3, 4]);
/// let b = insert(&a, 2, &NdArray::from_vec(vec![99]), Axis::None).unwrap();
/// assert_eq!(b.as_slice(), &[1, 2, 99, 3, 4]);
///
/// let m = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let c = insert(&m, -1, &NdArray::from_vec(vec![0]), Axis::Col).unwrap();
/// assert_eq!(c.as_slice(), &[1, 0, 2, 3, 0, 4]);
/// ```
pub fn insert<A>(arr: &NdArray<A>, index: isize, values: &NdArray<A>, axis: Axis) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    match axis {
        Axis::None => {
            let column = as_column(arr);
            let block = as_column(values);
            let pos = clamp_position(index, arr.size());
            Ok(insert_rows(&column, pos, &block).flatten())
        }
        Axis::Row => {
            let block = value_rows(values, arr.ncols())?;
            let pos = clamp_position(index, arr.nrows());
            Ok(insert_rows(arr, pos, &block))
        }
        Axis::Col => Ok(insert(&arr.t(), index, &values.t(), Axis::Row)?.t()),
    }
}

/// Insert `values` before each of several positions along `axis`; the
/// positions all refer to the original array.
///
/// The positions are resolved like in [`insert`], then de-duplicated and
/// sorted, so that several entries for the same position insert once.
/// `values` is one of:
///
/// - a single value (or, along an axis, a single row or column) inserted at
///   every position;
/// - one value (row, column) per entry of `indices`: for a repeated
///   position the value of its first entry is used;
/// - one value (row, column) per distinct position, in increasing position
///   order.
///
/// **Errors** if `values` matches none of these forms.
///
/// ```
/// use ndmat::{insert_many, Axis, NdArray};
///
/// let a = NdArray::from_vec(vec![1, 2, 3, 4]);
/// let values = NdArray::from_vec(vec![10, 20, 30]);
/// let b = insert_many(&a, &[1, 1, 3], &values, Axis::None).unwrap();
/// assert_eq!(b.as_slice(), &[1, 10, 2, 3, 30, 4]);
/// ```
pub fn insert_many<A>(
    arr: &NdArray<A>, indices: &[isize], values: &NdArray<A>, axis: Axis,
) -> Result<NdArray<A>, ArrayError>
where A: Clone
{
    match axis {
        Axis::None => Ok(insert_rows_many(&as_column(arr), indices, &as_column(values))?.flatten()),
        Axis::Row => insert_rows_many(arr, indices, values),
        Axis::Col => Ok(insert_rows_many(&arr.t(), indices, &values.t())?.t()),
    }
}

fn insert_rows_many<A: Clone>(arr: &NdArray<A>, indices: &[isize], values: &NdArray<A>) -> Result<NdArray<A>, ArrayError>
{
    let cols = arr.ncols();
    let resolved: Vec<usize> = indices
        .iter()
        .map(|&i| clamp_position(i, arr.nrows()))
        .collect();
    let mut unique = resolved.clone();
    unique.sort_unstable();
    unique.dedup();

    let single = values.size() == 1 || values.size() == cols;
    let lines: Vec<NdArray<A>> = if single {
        let line = value_rows(values, cols)?;
        vec![line; unique.len()]
    } else if values.ncols() == cols && values.nrows() == resolved.len() {
        unique
            .iter()
            .map(|u| {
                let first = resolved.iter().position(|r| r == u).unwrap_or(0);
                values.row(first as isize)
            })
            .collect::<Result<_, _>>()?
    } else if values.ncols() == cols && values.nrows() == unique.len() {
        (0..unique.len())
            .map(|k| values.row(k as isize))
            .collect::<Result<_, _>>()?
    } else {
        return Err(invalid_argument(format!(
            "{} values cannot be inserted at {} positions",
            values.size(),
            indices.len()
        )));
    };

    let mut result = arr.clone();
    for (&pos, line) in unique.iter().zip(&lines).rev() {
        result = insert_rows(&result, pos, line);
    }
    Ok(result)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn clamped_positions()
    {
        assert_eq!(clamp_position(-1, 4), 3);
        assert_eq!(clamp_position(-9, 4), 0);
        assert_eq!(clamp_position(9, 4), 4);
    }

    #[test]
    fn insert_block_of_rows()
    {
        let m = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let block = NdArray::from_rows(vec![vec![7, 7], vec![8, 8]]).unwrap();
        let r = insert(&m, 1, &block, Axis::Row).unwrap();
        assert_eq!(r.shape(), Shape::new(4, 2));
        assert_eq!(r.as_slice(), &[1, 2, 7, 7, 8, 8, 3, 4]);
        let bad = NdArray::from_vec(vec![1, 2, 3]);
        assert!(insert(&m, 0, &bad, Axis::Row).is_err());
    }

    #[test]
    fn insert_many_columns()
    {
        let m = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let r = insert_many(&m, &[0, 2, 0], &NdArray::from_vec(vec![0]), Axis::Col).unwrap();
        assert_eq!(r.as_slice(), &[0, 1, 2, 0, 0, 3, 4, 0]);
    }

    #[test]
    fn insert_many_per_unique_position()
    {
        let a = NdArray::from_vec(vec![1, 2, 3]);
        let values = NdArray::from_vec(vec![8, 9]);
        let r = insert_many(&a, &[2, 0, 2], &values, Axis::None).unwrap();
        assert_eq!(r.as_slice(), &[8, 1, 2, 9, 3]);
    }
}
