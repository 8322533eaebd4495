// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use num_traits::{AsPrimitive, One, Zero};

use crate::imp_prelude::*;
use crate::numeric_util;

fn partial_order<A: PartialOrd>(a: &A, b: &A) -> Ordering
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[track_caller]
fn empty_lane(op: &str) -> ArrayError
{
    invalid_argument(format!("cannot compute the {} of an empty array", op))
}

/// Index of the first element for which no later element is `better`.
fn arg_best<A, F>(lane: &[A], better: F) -> Option<usize>
where F: Fn(&A, &A) -> bool
{
    let mut best = None;
    for (i, x) in lane.iter().enumerate() {
        match best {
            Some(b) if !better(x, &lane[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

fn population_variance<A>(lane: &[A]) -> f64
where A: AsPrimitive<f64>
{
    let n = lane.len() as f64;
    let mean = lane.iter().map(|x| x.as_()).sum::<f64>() / n;
    lane.iter()
        .map(|x| {
            let d = x.as_() - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// # Lane machinery
///
/// A lane is the whole buffer for `Axis::None`, a row for `Axis::Col` and a
/// column for `Axis::Row`. Column lanes are the rows of the transposed array.
impl<A> NdArray<A>
{
    fn try_reduce_lanes<B, F>(&self, axis: Axis, mut f: F) -> Result<NdArray<B>, ArrayError>
    where
        A: Clone,
        F: FnMut(&[A]) -> Result<B, ArrayError>,
    {
        match axis {
            Axis::None => Ok(NdArray::from_parts(vec![f(&self.data)?], Shape::new(1, 1))),
            Axis::Col => {
                let data = self.rows().map(f).collect::<Result<Vec<_>, _>>()?;
                Ok(NdArray::from_parts(data, Shape::new(1, self.shape.rows)))
            }
            Axis::Row => self.transpose().try_reduce_lanes(Axis::Col, f),
        }
    }

    fn reduce_lanes<B, F>(&self, axis: Axis, mut f: F) -> NdArray<B>
    where
        A: Clone,
        F: FnMut(&[A]) -> B,
    {
        match axis {
            Axis::None => NdArray::from_parts(vec![f(&self.data)], Shape::new(1, 1)),
            Axis::Col => {
                let data = self.rows().map(f).collect();
                NdArray::from_parts(data, Shape::new(1, self.shape.rows))
            }
            Axis::Row => self.transpose().reduce_lanes(Axis::Col, f),
        }
    }

    /// Transform each lane into a lane of the same length. `Axis::None`
    /// gives a `1 × size` result, the other axes keep the shape.
    fn map_lanes<B, F>(&self, axis: Axis, mut f: F) -> NdArray<B>
    where
        A: Clone,
        B: Clone,
        F: FnMut(&[A]) -> Vec<B>,
    {
        match axis {
            Axis::None => NdArray::from_vec(f(&self.data)),
            Axis::Col => {
                let mut data = Vec::with_capacity(self.size());
                for row in self.rows() {
                    data.extend(f(row));
                }
                NdArray::from_parts(data, self.shape)
            }
            Axis::Row => self.transpose().map_lanes(Axis::Col, f).transpose(),
        }
    }

    fn modify_lanes<F>(&mut self, axis: Axis, mut f: F)
    where
        A: Clone,
        F: FnMut(&mut [A]),
    {
        match axis {
            Axis::None => f(&mut self.data),
            Axis::Col => self.rows_mut().for_each(f),
            Axis::Row => {
                let mut t = self.transpose();
                t.modify_lanes(Axis::Col, f);
                *self = t.transpose();
            }
        }
    }
}

/// # Numerical Methods for Arrays
///
/// Every reduction takes an [`Axis`]: `Axis::None` collapses the array to a
/// `1 × 1` result, `Axis::Row` reduces down each column to `1 × ncols`, and
/// `Axis::Col` reduces along each row to `1 × nrows`.
impl<A> NdArray<A>
{
    /// Return the sum along `axis`.
    ///
    /// The sum of an empty lane is zero.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_rows(vec![vec![1., 2.],
    ///                                 vec![3., 4.]]).unwrap();
    /// assert_eq!(a.sum(Axis::None).as_slice(), &[10.]);
    /// assert_eq!(a.sum(Axis::Row).as_slice(), &[4., 6.]);
    /// assert_eq!(a.sum(Axis::Col).as_slice(), &[3., 7.]);
    /// ```
    pub fn sum(&self, axis: Axis) -> NdArray<A>
    where A: Clone + Zero
    {
        self.reduce_lanes(axis, |lane| numeric_util::unrolled_fold(lane, A::zero, A::add))
    }

    /// Return the product along `axis`.
    ///
    /// The product of an empty lane is one.
    pub fn prod(&self, axis: Axis) -> NdArray<A>
    where A: Clone + One
    {
        self.reduce_lanes(axis, |lane| numeric_util::unrolled_fold(lane, A::one, A::mul))
    }

    /// Return the arithmetic mean along `axis`, as `f64`.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2],
    ///                                 vec![3, 4]]).unwrap();
    /// assert_eq!(a.mean(Axis::Row).unwrap().as_slice(), &[2., 3.]);
    /// assert_eq!(a.mean(Axis::Col).unwrap().as_slice(), &[1.5, 3.5]);
    /// ```
    pub fn mean(&self, axis: Axis) -> Result<NdArray<f64>, ArrayError>
    where A: AsPrimitive<f64>
    {
        self.try_reduce_lanes(axis, |lane| {
            if lane.is_empty() {
                return Err(empty_lane("mean"));
            }
            Ok(lane.iter().map(|x| x.as_()).sum::<f64>() / lane.len() as f64)
        })
    }

    /// Return the population variance along `axis`: the mean of the squared
    /// deviations from the mean, divided by `N`.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    pub fn var(&self, axis: Axis) -> Result<NdArray<f64>, ArrayError>
    where A: AsPrimitive<f64>
    {
        self.try_reduce_lanes(axis, |lane| {
            if lane.is_empty() {
                return Err(empty_lane("variance"));
            }
            Ok(population_variance(lane))
        })
    }

    /// Return the population standard deviation along `axis`, the square
    /// root of [`.var()`](NdArray::var).
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_vec(vec![2, 4, 4, 4, 5, 5, 7, 9]);
    /// assert_eq!(a.std(Axis::None).unwrap().as_slice(), &[2.]);
    /// ```
    pub fn std(&self, axis: Axis) -> Result<NdArray<f64>, ArrayError>
    where A: AsPrimitive<f64>
    {
        self.try_reduce_lanes(axis, |lane| {
            if lane.is_empty() {
                return Err(empty_lane("standard deviation"));
            }
            Ok(population_variance(lane).sqrt())
        })
    }

    /// Return the minimum along `axis`.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    pub fn min(&self, axis: Axis) -> Result<NdArray<A>, ArrayError>
    where A: Clone + PartialOrd
    {
        self.try_reduce_lanes(axis, |lane| {
            arg_best(lane, |x, best| x < best)
                .map(|i| lane[i].clone())
                .ok_or_else(|| empty_lane("minimum"))
        })
    }

    /// Return the maximum along `axis`.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    pub fn max(&self, axis: Axis) -> Result<NdArray<A>, ArrayError>
    where A: Clone + PartialOrd
    {
        self.try_reduce_lanes(axis, |lane| {
            arg_best(lane, |x, best| x > best)
                .map(|i| lane[i].clone())
                .ok_or_else(|| empty_lane("maximum"))
        })
    }

    /// Return the index of the minimum along `axis`; the first one on ties.
    ///
    /// For `Axis::None` the index is a flat index.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_rows(vec![vec![3, 1, 1],
    ///                                 vec![0, 5, 0]]).unwrap();
    /// assert_eq!(a.argmin(Axis::None).unwrap().as_slice(), &[3]);
    /// assert_eq!(a.argmin(Axis::Col).unwrap().as_slice(), &[1, 0]);
    /// assert_eq!(a.argmin(Axis::Row).unwrap().as_slice(), &[1, 0, 1]);
    /// ```
    pub fn argmin(&self, axis: Axis) -> Result<NdArray<usize>, ArrayError>
    where A: Clone + PartialOrd
    {
        self.try_reduce_lanes(axis, |lane| arg_best(lane, |x, best| x < best).ok_or_else(|| empty_lane("argmin")))
    }

    /// Return the index of the maximum along `axis`; the first one on ties.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    pub fn argmax(&self, axis: Axis) -> Result<NdArray<usize>, ArrayError>
    where A: Clone + PartialOrd
    {
        self.try_reduce_lanes(axis, |lane| arg_best(lane, |x, best| x > best).ok_or_else(|| empty_lane("argmax")))
    }

    /// Return the range (maximum minus minimum) along `axis`.
    ///
    /// **Errors** with `InvalidArgument` if a lane is empty.
    pub fn ptp(&self, axis: Axis) -> Result<NdArray<A>, ArrayError>
    where A: Clone + PartialOrd + Sub<Output = A>
    {
        self.try_reduce_lanes(axis, |lane| {
            match (arg_best(lane, |x, b| x < b), arg_best(lane, |x, b| x > b)) {
                (Some(lo), Some(hi)) => Ok(lane[hi].clone() - lane[lo].clone()),
                _ => Err(empty_lane("peak to peak")),
            }
        })
    }

    /// Return the median along `axis`.
    ///
    /// The median of a lane of length `n` is the element that lands at
    /// position `n / 2` when the lane is partially sorted. For an even `n`
    /// this is the upper of the two middle elements; they are **not**
    /// averaged, so the median of `[1, 2, 3, 4]` is `3`, not `2` or `2.5`.
    ///
    /// **Errors** with `Runtime` if the array is empty.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_vec(vec![4, 1, 3, 2]);
    /// assert_eq!(a.median(Axis::None).unwrap().as_slice(), &[3]);
    /// ```
    pub fn median(&self, axis: Axis) -> Result<NdArray<A>, ArrayError>
    where A: Clone + PartialOrd
    {
        if self.is_empty() {
            return Err(runtime("cannot compute the median of an empty array"));
        }
        self.try_reduce_lanes(axis, |lane| {
            let mut lane = lane.to_vec();
            let middle = lane.len() / 2;
            let (_, m, _) = lane.select_nth_unstable_by(middle, partial_order);
            Ok(m.clone())
        })
    }

    /// Return the cumulative sum along `axis`.
    ///
    /// For `Axis::None` the result is a `1 × size` row vector in row-major
    /// order; otherwise it has the shape of `self`.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_rows(vec![vec![1, 2],
    ///                                 vec![3, 4]]).unwrap();
    /// assert_eq!(a.cumsum(Axis::None).as_slice(), &[1, 3, 6, 10]);
    /// assert_eq!(a.cumsum(Axis::Row).as_slice(), &[1, 2, 4, 6]);
    /// assert_eq!(a.cumsum(Axis::Col).as_slice(), &[1, 3, 3, 7]);
    /// ```
    pub fn cumsum(&self, axis: Axis) -> NdArray<A>
    where A: Clone + Add<Output = A>
    {
        self.map_lanes(axis, |lane| scan(lane, |acc, x| acc + x))
    }

    /// Return the cumulative product along `axis`, shaped like
    /// [`.cumsum()`](NdArray::cumsum).
    pub fn cumprod(&self, axis: Axis) -> NdArray<A>
    where A: Clone + Mul<Output = A>
    {
        self.map_lanes(axis, |lane| scan(lane, |acc, x| acc * x))
    }

    /// Sort the array in place: the whole buffer for `Axis::None`, each row
    /// for `Axis::Col`, each column for `Axis::Row`.
    ///
    /// Incomparable elements (NaN) are treated as equal to everything.
    pub fn sort(&mut self, axis: Axis)
    where A: Clone + PartialOrd
    {
        self.modify_lanes(axis, |lane| lane.sort_by(partial_order));
    }

    /// Return the indices that would sort each lane; equal elements keep their
    /// relative order.
    ///
    /// For `Axis::None` the result is a `1 × size` row vector of flat
    /// indices; otherwise it has the shape of `self` and holds positions
    /// within each lane.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_rows(vec![vec![3, 1],
    ///                                 vec![2, 5]]).unwrap();
    /// assert_eq!(a.argsort(Axis::None).as_slice(), &[1, 2, 0, 3]);
    /// assert_eq!(a.argsort(Axis::Row).as_slice(), &[1, 0, 0, 1]);
    /// ```
    pub fn argsort(&self, axis: Axis) -> NdArray<usize>
    where A: Clone + PartialOrd
    {
        self.map_lanes(axis, |lane| {
            let mut idx: Vec<usize> = (0..lane.len()).collect();
            idx.sort_by(|&i, &j| partial_order(&lane[i], &lane[j]));
            idx
        })
    }

    /// Partially sort each lane in place so that the element at position
    /// `kth` is the one that would be there in sorted order, with no larger
    /// element before it and no smaller element after it.
    ///
    /// **Errors** with `InvalidArgument` if `kth` is not a valid position in
    /// a lane.
    pub fn partition(&mut self, kth: usize, axis: Axis) -> Result<(), ArrayError>
    where A: Clone + PartialOrd
    {
        let extent = match axis {
            Axis::None => self.size(),
            Axis::Row => self.shape.rows,
            Axis::Col => self.shape.cols,
        };
        if kth >= extent {
            return Err(invalid_argument(format!("kth(={}) out of bounds ({})", kth, extent)));
        }
        self.modify_lanes(axis, |lane| {
            lane.select_nth_unstable_by(kth, partial_order);
        });
        Ok(())
    }

    /// Return the sum along a diagonal.
    ///
    /// With `Axis::Row` (and `Axis::None`) the diagonal starts at row
    /// `offset` of the first column; with `Axis::Col` it starts at column
    /// `offset` of the first row. A diagonal starting outside the array sums
    /// to zero.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_shape_fn((3, 3), |(r, c)| (r * 3 + c) as i32);
    /// assert_eq!(a.trace(0, Axis::Row), 12);
    /// assert_eq!(a.trace(1, Axis::Row), 3 + 7);
    /// assert_eq!(a.trace(1, Axis::Col), 1 + 5);
    /// assert_eq!(a.trace(3, Axis::Col), 0);
    /// ```
    pub fn trace(&self, offset: usize, axis: Axis) -> A
    where A: Clone + Zero
    {
        let (row_start, col_start) = match axis {
            Axis::Col => (0, offset),
            Axis::Row | Axis::None => (offset, 0),
        };
        let Shape { rows, cols } = self.shape;
        if row_start >= rows || col_start >= cols {
            return A::zero();
        }
        (row_start..rows)
            .zip(col_start..cols)
            .fold(A::zero(), |acc, (r, c)| acc + self.data[r * cols + c].clone())
    }

    /// Return a diagonal as a `1 × n` row vector.
    ///
    /// With `Axis::Row` the elements are `a[(i, i + offset)]`, so that a
    /// positive offset is above the main diagonal; with `Axis::Col` they are
    /// `a[(i + offset, i)]`.
    ///
    /// **Errors** with `InvalidArgument` for `Axis::None`.
    ///
    /// ```
    /// use ndmat::{Axis, NdArray};
    ///
    /// let a = NdArray::from_shape_fn((3, 3), |(r, c)| r * 3 + c);
    /// assert_eq!(a.diagonal(0, Axis::Row).unwrap().as_slice(), &[0, 4, 8]);
    /// assert_eq!(a.diagonal(1, Axis::Row).unwrap().as_slice(), &[1, 5]);
    /// assert_eq!(a.diagonal(-1, Axis::Row).unwrap().as_slice(), &[3, 7]);
    /// assert_eq!(a.diagonal(1, Axis::Col).unwrap().as_slice(), &[3, 7]);
    /// ```
    pub fn diagonal(&self, offset: isize, axis: Axis) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let (row_offset, col_offset) = match axis {
            Axis::Row => (0, offset),
            Axis::Col => (offset, 0),
            Axis::None => return Err(invalid_argument("diagonal needs Axis::Row or Axis::Col")),
        };
        let Shape { rows, cols } = self.shape;
        let skip = offset.saturating_neg().max(0) as usize;
        let mut data = Vec::new();
        let mut i = skip;
        loop {
            let r = i as isize + row_offset;
            let c = i as isize + col_offset;
            if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
                break;
            }
            data.push(self.data[r as usize * cols + c as usize].clone());
            i += 1;
        }
        Ok(NdArray::from_vec(data))
    }

    /// Return whether every element of each lane is nonzero (not equal to
    /// `A::default()`).
    ///
    /// An empty lane is `true`.
    pub fn all(&self, axis: Axis) -> NdArray<bool>
    where A: Clone + Default + PartialEq
    {
        let zero = A::default();
        self.reduce_lanes(axis, |lane| lane.iter().all(|x| *x != zero))
    }

    /// Return whether any element of each lane is nonzero (not equal to
    /// `A::default()`).
    pub fn any(&self, axis: Axis) -> NdArray<bool>
    where A: Clone + Default + PartialEq
    {
        let zero = A::default();
        self.reduce_lanes(axis, |lane| lane.iter().any(|x| *x != zero))
    }

    /// Count the nonzero elements of each lane.
    pub fn count_nonzero(&self, axis: Axis) -> NdArray<usize>
    where A: Clone + Default + PartialEq
    {
        let zero = A::default();
        self.reduce_lanes(axis, |lane| lane.iter().filter(|x| **x != zero).count())
    }

    /// Return whether each lane contains `value`.
    pub fn contains(&self, value: &A, axis: Axis) -> NdArray<bool>
    where A: Clone + PartialEq
    {
        self.reduce_lanes(axis, |lane| lane.contains(value))
    }

    /// Return whether each lane is sorted in non-decreasing order.
    pub fn is_sorted(&self, axis: Axis) -> NdArray<bool>
    where A: Clone + PartialOrd
    {
        self.reduce_lanes(axis, |lane| lane.windows(2).all(|w| w[0] <= w[1]))
    }

    /// Return the flat indices of the nonzero elements as a `1 × n` row
    /// vector.
    pub fn flatnonzero(&self) -> NdArray<usize>
    where A: Default + PartialEq
    {
        let zero = A::default();
        NdArray::from_iter(
            self.iter()
                .enumerate()
                .filter(|(_, x)| **x != zero)
                .map(|(i, _)| i),
        )
    }

    /// Return the row and the column indices of the nonzero elements, each as
    /// a `1 × n` row vector, in row-major order.
    ///
    /// ```
    /// use ndmat::NdArray;
    ///
    /// let a = NdArray::from_rows(vec![vec![0, 7],
    ///                                 vec![3, 0]]).unwrap();
    /// let (rows, cols) = a.nonzero();
    /// assert_eq!(rows.as_slice(), &[0, 1]);
    /// assert_eq!(cols.as_slice(), &[1, 0]);
    /// ```
    pub fn nonzero(&self) -> (NdArray<usize>, NdArray<usize>)
    where A: Default + PartialEq
    {
        let cols = self.shape.cols;
        let flat = self.flatnonzero();
        let rows = flat.map(|&i| i / cols);
        let cols = flat.map(|&i| i % cols);
        (rows, cols)
    }
}

fn scan<A, F>(lane: &[A], f: F) -> Vec<A>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    let mut out: Vec<A> = Vec::with_capacity(lane.len());
    for x in lane {
        let next = match out.last() {
            Some(acc) => f(acc.clone(), x.clone()),
            None => x.clone(),
        };
        out.push(next);
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn empty_reductions()
    {
        let e = NdArray::<f64>::new();
        assert_eq!(e.sum(Axis::None).as_slice(), &[0.]);
        assert_eq!(e.mean(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(e.median(Axis::None).unwrap_err().kind(), ErrorKind::Runtime);
        assert!(e.argmax(Axis::None).is_err());
        assert!(e.cumsum(Axis::None).is_empty());
    }

    #[test]
    fn reductions_of_zero_width_rows()
    {
        let a = NdArray::<i32>::from_shape_vec((2, 0), vec![]).unwrap();
        assert_eq!(a.sum(Axis::Col).as_slice(), &[0, 0]);
        assert!(a.max(Axis::Col).is_err());
        assert_eq!(a.sum(Axis::Row).size(), 0);
    }

    #[test]
    fn median_per_lane_does_not_average()
    {
        let a = NdArray::from_rows(vec![vec![4, 1, 3, 2],
                                        vec![8, 6, 7, 5]]).unwrap();
        assert_eq!(a.median(Axis::Col).unwrap().as_slice(), &[3, 7]);
        assert_eq!(a.median(Axis::Row).unwrap().as_slice(), &[8, 6, 7, 5]);
    }

    #[test]
    fn sort_axes()
    {
        let a = NdArray::from_rows(vec![vec![3, 1, 2],
                                        vec![0, 5, 4]]).unwrap();
        let mut rows = a.clone();
        rows.sort(Axis::Col);
        assert_eq!(rows.as_slice(), &[1, 2, 3, 0, 4, 5]);
        let mut cols = a.clone();
        cols.sort(Axis::Row);
        assert_eq!(cols.as_slice(), &[0, 1, 2, 3, 5, 4]);
        let mut flat = a;
        flat.sort(Axis::None);
        assert_eq!(flat.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(flat.shape(), Shape::new(2, 3));
    }

    #[test]
    fn argsort_is_stable()
    {
        let a = NdArray::from_vec(vec![2, 1, 2, 1]);
        assert_eq!(a.argsort(Axis::None).as_slice(), &[1, 3, 0, 2]);
        assert_eq!(a.argsort(Axis::Col).as_slice(), &[1, 3, 0, 2]);
    }

    #[test]
    fn partition_places_kth()
    {
        let mut a = NdArray::from_vec(vec![9, 3, 7, 1, 5]);
        a.partition(2, Axis::None).unwrap();
        assert_eq!(a[2], 5);
        assert!(a.as_slice()[..2].iter().all(|&x| x <= 5));
        assert!(a.as_slice()[3..].iter().all(|&x| x >= 5));
        assert!(a.partition(5, Axis::None).is_err());
        assert!(a.partition(1, Axis::Row).is_err());
    }

    #[test]
    fn variance_is_population()
    {
        let a = NdArray::from_vec(vec![1., 2., 3., 4.]);
        assert_eq!(a.var(Axis::None).unwrap().as_slice(), &[1.25]);
    }

    #[test]
    fn boolean_reductions()
    {
        let a = NdArray::from_rows(vec![vec![1, 0],
                                        vec![2, 3]]).unwrap();
        assert_eq!(a.all(Axis::Col).as_slice(), &[false, true]);
        assert_eq!(a.any(Axis::Row).as_slice(), &[true, true]);
        assert_eq!(a.count_nonzero(Axis::None).as_slice(), &[3]);
        assert_eq!(a.flatnonzero().as_slice(), &[0, 2, 3]);
        assert_eq!(a.contains(&0, Axis::Row).as_slice(), &[false, true]);
        assert_eq!(a.is_sorted(Axis::Row).as_slice(), &[true, true]);
        assert_eq!(a.is_sorted(Axis::None).as_slice(), &[false]);
        assert_eq!(a.ptp(Axis::None).unwrap().as_slice(), &[3]);
        assert_eq!(a.prod(Axis::Col).as_slice(), &[0, 6]);
    }
}
