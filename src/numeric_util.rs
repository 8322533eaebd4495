// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp;
use std::ops::{Add, Mul};

use num_traits::Zero;

/// Fold over the manually unrolled `xs` with `f`
pub fn unrolled_fold<A, I, F>(mut xs: &[A], init: I, f: F) -> A
where
    A: Clone,
    I: Fn() -> A,
    F: Fn(A, A) -> A,
{
    // eightfold unrolled so that floating point can be vectorized
    // (even with strict floating point accuracy semantics)
    let mut acc = init();
    let (mut p0, mut p1, mut p2, mut p3, mut p4, mut p5, mut p6, mut p7) =
        (init(), init(), init(), init(), init(), init(), init(), init());
    while xs.len() >= 8 {
        p0 = f(p0, xs[0].clone());
        p1 = f(p1, xs[1].clone());
        p2 = f(p2, xs[2].clone());
        p3 = f(p3, xs[3].clone());
        p4 = f(p4, xs[4].clone());
        p5 = f(p5, xs[5].clone());
        p6 = f(p6, xs[6].clone());
        p7 = f(p7, xs[7].clone());

        xs = &xs[8..];
    }
    acc = f(acc.clone(), f(p0, p4));
    acc = f(acc.clone(), f(p1, p5));
    acc = f(acc.clone(), f(p2, p6));
    acc = f(acc.clone(), f(p3, p7));

    for x in xs {
        acc = f(acc.clone(), x.clone());
    }
    acc
}

/// Compute the dot product.
///
/// `xs` and `ys` must be the same length
pub fn unrolled_dot<A>(xs: &[A], ys: &[A]) -> A
where A: Clone + Add<Output = A> + Mul<Output = A> + Zero
{
    debug_assert_eq!(xs.len(), ys.len());
    let len = cmp::min(xs.len(), ys.len());
    let mut xs = &xs[..len];
    let mut ys = &ys[..len];
    let mut sum = A::zero();
    let (mut p0, mut p1, mut p2, mut p3, mut p4, mut p5, mut p6, mut p7) = (
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
    );
    while xs.len() >= 8 {
        p0 = p0 + xs[0].clone() * ys[0].clone();
        p1 = p1 + xs[1].clone() * ys[1].clone();
        p2 = p2 + xs[2].clone() * ys[2].clone();
        p3 = p3 + xs[3].clone() * ys[3].clone();
        p4 = p4 + xs[4].clone() * ys[4].clone();
        p5 = p5 + xs[5].clone() * ys[5].clone();
        p6 = p6 + xs[6].clone() * ys[6].clone();
        p7 = p7 + xs[7].clone() * ys[7].clone();

        xs = &xs[8..];
        ys = &ys[8..];
    }
    sum = sum + (p0 + p4);
    sum = sum + (p1 + p5);
    sum = sum + (p2 + p6);
    sum = sum + (p3 + p7);

    for (x, y) in xs.iter().zip(ys) {
        sum = sum + x.clone() * y.clone();
    }
    sum
}

#[cfg(test)]
mod tests
{
    use super::{unrolled_dot, unrolled_fold};
    use quickcheck::quickcheck;

    quickcheck! {
        fn fold_sum_matches_iterator(xs: Vec<i64>) -> bool {
            let xs: Vec<i64> = xs.into_iter().map(|x| x % 1000).collect();
            unrolled_fold(&xs, || 0, |a, b| a + b) == xs.iter().sum::<i64>()
        }

        fn dot_matches_iterator(xs: Vec<i32>) -> bool {
            let xs: Vec<i64> = xs.into_iter().map(|x| (x % 100) as i64).collect();
            let naive: i64 = xs.iter().map(|x| x * x).sum();
            unrolled_dot(&xs, &xs) == naive
        }
    }
}
