// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic test arrays for the ndmat workspace.

use ndmat::NdArray;
use ndmat::Shape;

use num_traits::Num;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    shape: Shape,
    fill_order: FillOrder,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in fill order
    Sequential,
    Zero,
}

/// Which logical order sequential elements are counted in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillOrder
{
    /// `a[(r, c)] == r * ncols + c`
    RowMajor,
    /// `a[(r, c)] == c * nrows + r`
    ColMajor,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new((0, 0))
    }
}

impl ArrayBuilder
{
    pub fn new(shape: impl Into<Shape>) -> Self
    {
        ArrayBuilder {
            shape: shape.into(),
            fill_order: FillOrder::RowMajor,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn fill_order(mut self, order: FillOrder) -> Self
    {
        self.fill_order = order;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> NdArray<T>
    where T: Num + Clone
    {
        let Shape { rows, cols } = self.shape;
        let use_zeros = self.generator == ElementGenerator::Zero;
        let order = self.fill_order;
        NdArray::from_shape_fn(self.shape, |(r, c)| {
            if use_zeros {
                return T::zero();
            }
            let n = match order {
                FillOrder::RowMajor => r * cols + c,
                FillOrder::ColMajor => c * rows + r,
            };
            (0..n).fold(T::zero(), |acc, _| acc + T::one())
        })
    }
}

#[test]
fn test_order()
{
    let (m, n) = (3, 4);
    let r = ArrayBuilder::new((m, n)).build::<i32>();
    let c = ArrayBuilder::new((m, n))
        .fill_order(FillOrder::ColMajor)
        .build::<i32>();

    assert_eq!(r.shape(), Shape::new(m, n));
    assert_eq!(r.as_slice()[..4], [0, 1, 2, 3]);
    assert_eq!(c.as_slice()[..4], [0, 3, 6, 9]);
    assert_eq!(c.transpose().as_slice(), ArrayBuilder::new((n, m)).build::<i32>().as_slice());
}

#[test]
fn test_zero()
{
    let z = ArrayBuilder::new((2, 2))
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    assert!(z.iter().all(|&x| x == 0.));
}
