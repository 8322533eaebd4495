// Copyright 2016-2019 ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for randomized arrays: `rand` integration for `ndmat`.
//!
//! See **[`RandomExt`]** for usage examples.
//!
//! There is no hidden generator: every function takes the `Rng` to draw
//! from, so seeding is the caller's business.
//!
//! ## Note
//!
//! `ndmat-rand` depends on [`rand`](https://docs.rs/rand) and
//! [`rand_distr`](https://docs.rs/rand_distr), which are re-exported so that
//! the versions used by this crate can be named directly.

use crate::rand::seq::SliceRandom;
use crate::rand::Rng;
use crate::rand_distr::Distribution;

use ndmat::{Axis, NdArray, Shape};

/// [`rand`](https://docs.rs/rand/), re-exported for convenience and version-compatibility.
pub mod rand
{
    pub use rand::*;
}

/// [`rand-distr`](https://docs.rs/rand_distr/), re-exported for convenience and version-compatibility.
pub mod rand_distr
{
    pub use rand_distr::*;
}

/// Constructors for n-dimensional arrays with random elements.
///
/// This trait extends ndmat’s `NdArray` and can not be implemented
/// for other types.
///
/// ```
/// use ndmat::{Axis, NdArray, Shape};
/// use ndmat_rand::RandomExt;
/// use ndmat_rand::rand::{rngs::SmallRng, SeedableRng};
/// use ndmat_rand::rand_distr::Uniform;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let a = NdArray::random_using((2, 5), Uniform::new(0., 10.).unwrap(), &mut rng);
/// assert_eq!(a.shape(), Shape::new(2, 5));
/// assert!(a.iter().all(|&x| (0. ..10.).contains(&x)));
///
/// let b = a.shuffled_using(Axis::Row, &mut rng);
/// assert_eq!(b.shape(), a.shape());
/// ```
pub trait RandomExt<A>: private::Sealed
{
    /// Create an array with shape `shape` with elements drawn from
    /// `distribution` using the random number generator `rng`.
    fn random_using<Sh, IdS, R>(shape: Sh, distribution: IdS, rng: &mut R) -> NdArray<A>
    where
        Sh: Into<Shape>,
        IdS: Distribution<A>,
        R: Rng + ?Sized;

    /// Return a copy with its elements permuted using `rng`.
    ///
    /// - `Axis::None`: every element is shuffled, the shape is kept.
    /// - `Axis::Row`: whole rows are permuted.
    /// - `Axis::Col`: whole columns are permuted.
    fn shuffled_using<R>(&self, axis: Axis, rng: &mut R) -> NdArray<A>
    where
        A: Clone,
        R: Rng + ?Sized;
}

mod private
{
    pub trait Sealed {}
    impl<A> Sealed for ndmat::NdArray<A> {}
}

// `data.len()` is always `shape.size()` here
fn with_shape<A>(shape: Shape, data: Vec<A>) -> NdArray<A>
{
    match NdArray::from_shape_vec(shape, data) {
        Ok(a) => a,
        Err(e) => unreachable!("{}", e),
    }
}

impl<A> RandomExt<A> for NdArray<A>
{
    fn random_using<Sh, IdS, R>(shape: Sh, dist: IdS, rng: &mut R) -> NdArray<A>
    where
        Sh: Into<Shape>,
        IdS: Distribution<A>,
        R: Rng + ?Sized,
    {
        let shape = shape.into();
        let elements = dist.sample_iter(rng).take(shape.size()).collect();
        with_shape(shape, elements)
    }

    fn shuffled_using<R>(&self, axis: Axis, rng: &mut R) -> NdArray<A>
    where
        A: Clone,
        R: Rng + ?Sized,
    {
        let shape = self.shape();
        match axis {
            Axis::None => {
                let mut data = self.to_vec();
                data.shuffle(rng);
                with_shape(shape, data)
            }
            Axis::Row => {
                let mut order: Vec<usize> = (0..shape.rows).collect();
                order.shuffle(rng);
                let data = order
                    .iter()
                    .flat_map(|&r| self.as_slice()[r * shape.cols..(r + 1) * shape.cols].iter().cloned())
                    .collect();
                with_shape(shape, data)
            }
            Axis::Col => self.transpose().shuffled_using(Axis::Row, rng).transpose(),
        }
    }
}
