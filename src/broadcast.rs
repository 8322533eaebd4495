// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::incompatible_shapes;
use crate::imp_prelude::*;

/// Apply the binary function `f` element-wise over two arrays of possibly
/// different shapes.
///
/// `f` is always called as `f(elem_of_a, elem_of_b)`, whichever operand is
/// replicated. The shapes are matched by the first rule that applies:
///
/// 1. Equal shapes: pointwise, the result has the common shape.
/// 2. One operand is a scalar (one element): it is paired with every element
///    of the other operand, whose shape the result takes.
/// 3. Both operands are flat (a row and a column vector): the outer
///    combination, `R[i][j] = f(col[i], row[j])` with the operands in their
///    original argument positions. The result is `len(col) × len(row)`.
/// 4. One operand is flat: a column with as many rows as the matrix is
///    applied along each row, otherwise a row with as many columns as the
///    matrix is applied down each column.
///
/// Two flat operands of the same orientation but different lengths do not
/// broadcast.
///
/// **Errors** with `InvalidArgument` if no rule applies.
///
/// ```
/// use ndmat::{broadcast, NdArray};
///
/// let col = NdArray::from_shape_vec((3, 1), vec![1, 2, 3]).unwrap();
/// let row = NdArray::from_vec(vec![10, 20, 30]);
/// let r = broadcast(&col, &row, |&x, &y| x + y).unwrap();
/// assert_eq!(r.shape(), (3, 3).into());
/// assert_eq!(r.as_slice(), &[11, 21, 31,
///                            12, 22, 32,
///                            13, 23, 33]);
/// ```
pub fn broadcast<A, B, C, F>(a: &NdArray<A>, b: &NdArray<B>, mut f: F) -> Result<NdArray<C>, ArrayError>
where F: FnMut(&A, &B) -> C
{
    if a.shape() == b.shape() {
        let data = a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect();
        return Ok(NdArray::from_parts(data, a.shape()));
    }
    if let [y] = b.as_slice() {
        return Ok(a.map(|x| f(x, y)));
    }
    if let [x] = a.as_slice() {
        return Ok(b.map(|y| f(x, y)));
    }
    match (a.is_flat(), b.is_flat()) {
        (true, true) => outer(a, b, f),
        (false, true) => along_vector(a, b, f),
        (true, false) => along_vector(b, a, |y, x| f(x, y)),
        (false, false) => Err(incompatible_shapes(a.shape(), b.shape())),
    }
}

/// Combine a column vector with a row vector, in either argument position.
fn outer<A, B, C, F>(a: &NdArray<A>, b: &NdArray<B>, mut f: F) -> Result<NdArray<C>, ArrayError>
where F: FnMut(&A, &B) -> C
{
    let (sa, sb) = (a.shape(), b.shape());
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut data = Vec::with_capacity(sa.rows.max(sb.rows) * sa.cols.max(sb.cols));
    if sa.rows > 1 && sb.rows == 1 {
        for x in a {
            data.extend(b.iter().map(|y| f(x, y)));
        }
        Ok(NdArray::from_parts(data, Shape::new(sa.rows, sb.cols)))
    } else if sa.rows == 1 && sb.cols == 1 && sb.rows > 1 {
        for y in b {
            data.extend(a.iter().map(|x| f(x, y)));
        }
        Ok(NdArray::from_parts(data, Shape::new(sb.rows, sa.cols)))
    } else {
        Err(incompatible_shapes(sa, sb))
    }
}

/// Apply a vector `v` across a matrix `m`, calling `g(m_elem, v_elem)`.
///
/// A column vector matching the rows of `m` is used first; a row vector
/// matching the columns of `m` is the transposed case of the same rule.
fn along_vector<M, V, C, G>(m: &NdArray<M>, v: &NdArray<V>, mut g: G) -> Result<NdArray<C>, ArrayError>
where G: FnMut(&M, &V) -> C
{
    let (sm, sv) = (m.shape(), v.shape());
    let mut data = Vec::with_capacity(sm.size());
    if sv.rows > 1 && sv.rows == sm.rows {
        for (row, y) in m.rows().zip(v.iter()) {
            data.extend(row.iter().map(|x| g(x, y)));
        }
    } else if sv.cols > 1 && sv.cols == sm.cols {
        for row in m.rows() {
            data.extend(row.iter().zip(v.iter()).map(|(x, y)| g(x, y)));
        }
    } else {
        return Err(incompatible_shapes(sm, sv));
    }
    Ok(NdArray::from_parts(data, sm))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;

    fn arr(rows: usize, cols: usize, v: Vec<i32>) -> NdArray<i32>
    {
        NdArray::from_shape_vec((rows, cols), v).unwrap()
    }

    #[test]
    fn scalar_keeps_argument_order()
    {
        let s = arr(1, 1, vec![10]);
        let m = arr(2, 2, vec![1, 2, 3, 4]);
        let r = broadcast(&s, &m, |&x, &y| x - y).unwrap();
        assert_eq!(r.as_slice(), &[9, 8, 7, 6]);
        let r = broadcast(&m, &s, |&x, &y| x - y).unwrap();
        assert_eq!(r.as_slice(), &[-9, -8, -7, -6]);
    }

    #[test]
    fn row_then_column_operands()
    {
        let row = arr(1, 2, vec![1, 2]);
        let col = arr(3, 1, vec![10, 20, 30]);
        let r = broadcast(&row, &col, |&x, &y| x - y).unwrap();
        assert_eq!(r.shape(), Shape::new(3, 2));
        assert_eq!(r.as_slice(), &[-9, -8, -19, -18, -29, -28]);
    }

    #[test]
    fn matrix_with_column_vector()
    {
        let m = arr(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let col = arr(2, 1, vec![100, 200]);
        let r = broadcast(&m, &col, |&x, &y| x + y).unwrap();
        assert_eq!(r.as_slice(), &[101, 102, 103, 204, 205, 206]);
        let r = broadcast(&col, &m, |&x, &y| x - y).unwrap();
        assert_eq!(r.as_slice(), &[99, 98, 97, 196, 195, 194]);
    }

    #[test]
    fn matrix_with_row_vector()
    {
        let m = arr(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let row = arr(1, 3, vec![10, 20, 30]);
        let r = broadcast(&m, &row, |&x, &y| x * y).unwrap();
        assert_eq!(r.as_slice(), &[10, 40, 90, 40, 100, 180]);
    }

    #[test]
    fn incompatible()
    {
        let m = arr(2, 3, vec![0; 6]);
        let n = arr(3, 2, vec![0; 6]);
        let err = broadcast(&m, &n, |&x, &y| x + y).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("could not be broadcast"));

        let short = arr(1, 2, vec![0; 2]);
        assert!(broadcast(&m, &short, |&x, &y| x + y).is_err());
        let long = arr(1, 4, vec![0; 4]);
        assert!(broadcast(&short, &long, |&x, &y| x + y).is_err());
    }
}
