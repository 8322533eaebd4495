// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod approx_methods
{
    use crate::imp_prelude::*;

    impl<A> NdArray<A>
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// Arrays of different shapes are never equal.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        where
            A: ::approx::RelativeEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

mod approx_traits
{
    use crate::imp_prelude::*;
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    fn all_pairs<A, B, F>(a: &NdArray<A>, b: &NdArray<B>, mut f: F) -> bool
    where F: FnMut(&A, &B) -> bool
    {
        a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| f(x, y))
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> AbsDiffEq<NdArray<B>> for NdArray<A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool
        {
            all_pairs(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> RelativeEq<NdArray<B>> for NdArray<A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        {
            all_pairs(self, other, |a, b| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B> UlpsEq<NdArray<B>> for NdArray<A>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32
        {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool
        {
            all_pairs(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

    #[cfg(test)]
    mod tests
    {
        use crate::NdArray;
        use approx::{
            assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
            assert_ulps_ne,
        };

        fn pair() -> (NdArray<f32>, NdArray<f32>)
        {
            let a = NdArray::from_shape_vec((2, 2), vec![1., 2., -0.000010001, 100000000.]).unwrap();
            let b = NdArray::from_shape_vec((2, 2), vec![1., 1., -0.000010002, 100000001.]).unwrap();
            (a, b)
        }

        #[test]
        fn abs_diff_eq()
        {
            let (a, mut b) = pair();
            assert_abs_diff_ne!(a, b);
            b[(0, 1)] = 2.;
            assert_abs_diff_eq!(a, b);

            assert_abs_diff_eq!(NdArray::from_vec(vec![0.0f32]), NdArray::from_vec(vec![1e-40f32]), epsilon = 1e-40f32);
            assert_abs_diff_ne!(NdArray::from_vec(vec![0.0f32]), NdArray::from_vec(vec![1e-40f32]), epsilon = 1e-41f32);

            // different shapes compare unequal
            let c = NdArray::from_vec(vec![1., 2., -0.000010001, 100000000.]);
            assert_abs_diff_ne!(a, c);
        }

        #[test]
        fn relative_eq()
        {
            let (a, mut b) = pair();
            assert_relative_ne!(a, b);
            b[(0, 1)] = 2.;
            assert_relative_eq!(a, b);
            assert!(a.relative_eq(&b, 1e-6, 1e-6));
        }

        #[test]
        fn ulps_eq()
        {
            let (a, mut b) = pair();
            assert_ulps_ne!(a, b);
            b[(0, 1)] = 2.;
            assert_ulps_eq!(a, b);
            assert!(a.abs_diff_eq(&b, 1.));
        }
    }
}
