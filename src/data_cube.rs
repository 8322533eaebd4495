// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::vec_deque::{self, VecDeque};
use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};

use crate::array_io::{dump_elements, Pod};
use crate::error::index_out_of_bounds;
use crate::imp_prelude::*;
use crate::slice::resolve_index;

/// A sequence of equally shaped 2D arrays ("frames"), addressable from both
/// ends.
///
/// The shape of every frame is fixed by the first frame pushed; pushing a
/// frame of any other shape is an error.
///
/// ```
/// use ndmat::{DataCube, NdArray};
///
/// let mut cube = DataCube::new();
/// cube.push_back(NdArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap()).unwrap();
/// cube.push_back(NdArray::from_shape_vec((2, 2), vec![5, 6, 7, 8]).unwrap()).unwrap();
/// assert!(cube.push_back(NdArray::zeros((3, 1))).is_err());
///
/// assert_eq!(cube.len(), 2);
/// assert_eq!(cube.slice_z(1, 0).unwrap(), NdArray::from_vec(vec![3, 7]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DataCube<A>
{
    cube: VecDeque<NdArray<A>>,
    element_shape: Shape,
}

impl<A> Default for DataCube<A>
{
    fn default() -> Self
    {
        DataCube::new()
    }
}

impl<A> DataCube<A>
{
    /// Create an empty cube.
    pub fn new() -> Self
    {
        DataCube {
            cube: VecDeque::new(),
            element_shape: Shape::new(0, 0),
        }
    }

    /// Create an empty cube with room for `n` frames.
    pub fn with_capacity(n: usize) -> Self
    {
        DataCube {
            cube: VecDeque::with_capacity(n),
            element_shape: Shape::new(0, 0),
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize
    {
        self.cube.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.cube.is_empty()
    }

    /// The shape of each frame; `[0, 0]` until the first push.
    ///
    /// Popping every frame does not reset it.
    pub fn shape(&self) -> Shape
    {
        self.element_shape
    }

    fn check_shape(&mut self, frame: &NdArray<A>) -> Result<(), ArrayError>
    {
        if self.cube.is_empty() && self.element_shape.is_null() {
            self.element_shape = frame.shape();
            return Ok(());
        }
        if frame.shape() != self.element_shape {
            return Err(invalid_argument(format!(
                "element arrays must all be the same shape: expected {}, got {}",
                self.element_shape,
                frame.shape()
            )));
        }
        Ok(())
    }

    /// Append a frame at the back.
    ///
    /// **Errors** with `InvalidArgument` if its shape differs from the
    /// frames already in the cube.
    pub fn push_back(&mut self, frame: NdArray<A>) -> Result<(), ArrayError>
    {
        self.check_shape(&frame)?;
        self.cube.push_back(frame);
        Ok(())
    }

    /// Insert a frame at the front.
    ///
    /// **Errors** with `InvalidArgument` if its shape differs from the
    /// frames already in the cube.
    pub fn push_front(&mut self, frame: NdArray<A>) -> Result<(), ArrayError>
    {
        self.check_shape(&frame)?;
        self.cube.push_front(frame);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Option<NdArray<A>>
    {
        self.cube.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<NdArray<A>>
    {
        self.cube.pop_front()
    }

    pub fn front(&self) -> Option<&NdArray<A>>
    {
        self.cube.front()
    }

    pub fn back(&self) -> Option<&NdArray<A>>
    {
        self.cube.back()
    }

    /// Return the frame at `index`.
    ///
    /// **Errors** with `InvalidArgument` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&NdArray<A>, ArrayError>
    {
        let n = self.cube.len();
        self.cube
            .get(index)
            .ok_or_else(|| index_out_of_bounds("Frame", index as isize, n))
    }

    /// Return the frame at `index`, mutably.
    ///
    /// The frame should keep its shape; `slice_z` fails on a frame that
    /// no longer matches.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut NdArray<A>, ArrayError>
    {
        let n = self.cube.len();
        self.cube
            .get_mut(index)
            .ok_or_else(|| index_out_of_bounds("Frame", index as isize, n))
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, NdArray<A>>
    {
        self.cube.iter()
    }

    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, NdArray<A>>
    {
        self.cube.iter_mut()
    }

    /// Collect the element at (`row`, `col`) of every frame, front to back,
    /// into a `1 × len()` row vector.
    ///
    /// Negative indices count from the end of each axis.
    ///
    /// **Errors** with `InvalidArgument` if the position is outside the
    /// frame shape, and with `Runtime` if a frame was reshaped through a
    /// mutable borrow.
    pub fn slice_z(&self, row: isize, col: isize) -> Result<NdArray<A>, ArrayError>
    where A: Clone
    {
        let r = resolve_index(row, self.element_shape.rows, "Row")?;
        let c = resolve_index(col, self.element_shape.cols, "Column")?;
        let offset = r * self.element_shape.cols + c;
        let values = self
            .cube
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                if frame.shape() != self.element_shape {
                    return Err(runtime(format!(
                        "Frame {} has shape {}, expected {}",
                        i,
                        frame.shape(),
                        self.element_shape
                    )));
                }
                Ok(frame.as_slice()[offset].clone())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NdArray::from_vec(values))
    }

    /// Write every frame, front to back, as raw native endian bytes.
    ///
    /// If `path` has no extension, `.bin` is appended. Returns the path that
    /// was written.
    ///
    /// **Errors** with `Runtime` if the file cannot be created or written.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ArrayError>
    where A: Pod
    {
        dump_elements(path.as_ref(), &self.cube)
    }
}

/// **Panics** if `index >= len()`.
impl<A> Index<usize> for DataCube<A>
{
    type Output = NdArray<A>;

    #[track_caller]
    fn index(&self, index: usize) -> &NdArray<A>
    {
        match self.get(index) {
            Ok(frame) => frame,
            Err(e) => panic!("{}", e.message()),
        }
    }
}

/// **Panics** if `index >= len()`.
impl<A> IndexMut<usize> for DataCube<A>
{
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut NdArray<A>
    {
        match self.get_mut(index) {
            Ok(frame) => frame,
            Err(e) => panic!("{}", e.message()),
        }
    }
}

impl<'a, A> IntoIterator for &'a DataCube<A>
{
    type Item = &'a NdArray<A>;
    type IntoIter = vec_deque::Iter<'a, NdArray<A>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut DataCube<A>
{
    type Item = &'a mut NdArray<A>;
    type IntoIter = vec_deque::IterMut<'a, NdArray<A>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter_mut()
    }
}
