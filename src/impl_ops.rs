// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `a + 1.0`, and, `a * 2.`, and `a += 3.` are allowed.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`, and
/// `A @ K`, and `A @= K` are defined, as ***right hand side operands***, for
/// applicable arithmetic operators (denoted `@`).
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations
/// `K @ &A`, and `K @ A` for primitive numeric types `K`.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $itrt:ident, $imth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result (based on `self` when the shapes agree).
///
/// If their shapes disagree, the operands are broadcast together with
/// [`broadcast`](crate::broadcast).
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, A, B> $trt<&'a NdArray<B>> for NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = NdArray<A>;
    #[track_caller]
    fn $mth(mut self, rhs: &NdArray<B>) -> NdArray<A>
    {
        if self.shape() == rhs.shape() {
            for (x, y) in self.iter_mut().zip(rhs.iter()) {
                *x = x.clone() $operator y.clone();
            }
            self
        } else {
            (&self).$mth(rhs)
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result.
///
/// **Panics** if broadcasting isn’t possible.
impl<A, B> $trt<NdArray<B>> for NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = NdArray<A>;
    #[track_caller]
    fn $mth(self, rhs: NdArray<B>) -> NdArray<A>
    {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `NdArray`.
///
/// If their shapes disagree, the operands are broadcast together with
/// [`broadcast`](crate::broadcast).
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, 'b, A, B> $trt<&'b NdArray<B>> for &'a NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    type Output = NdArray<A>;
    #[track_caller]
    fn $mth(self, rhs: &'b NdArray<B>) -> NdArray<A>
    {
        match broadcast(self, rhs, |x, y| x.clone() $operator y.clone()) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result (based on `self`).
impl<A, B> $trt<B> for NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(mut self, x: B) -> NdArray<A>
    {
        self.map_inplace(move |elt| {
            *elt = elt.clone() $operator x.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new `NdArray`.
impl<'a, A, B> $trt<B> for &'a NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(self, x: B) -> NdArray<A>
    {
        self.map(move |elt| elt.clone() $operator x.clone())
    }
}

/// Perform `self @= rhs` as elementwise
#[doc=$doc]
/// (in place).
///
/// `rhs` is broadcast against `self`; the broadcast shape must be the shape
/// of `self`.
///
/// **Panics** if broadcasting isn’t possible or would change the shape of
/// `self`.
impl<'a, A, B> $itrt<&'a NdArray<B>> for NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: Clone,
{
    #[track_caller]
    fn $imth(&mut self, rhs: &NdArray<B>)
    {
        let out = (&*self).$mth(rhs);
        if out.shape() != self.shape() {
            panic!(
                "{}",
                incompatible_shapes(self.shape(), rhs.shape())
            );
        }
        *self = out;
    }
}

/// Perform `self @= x` as elementwise
#[doc=$doc]
/// with the scalar `x` (in place).
impl<A, B> $itrt<B> for NdArray<A>
where
    A: Clone + $trt<B, Output = A>,
    B: ScalarOperand,
{
    fn $imth(&mut self, x: B)
    {
        self.map_inplace(move |elt| {
            *elt = elt.clone() $operator x.clone();
        });
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result (based on `rhs`).
impl $trt<NdArray<$scalar>> for $scalar
{
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: NdArray<$scalar>) -> NdArray<$scalar>
    {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {{
            let mut rhs = rhs;
            rhs.map_inplace(move |elt| {
                *elt = self $operator *elt;
            });
            rhs
        }})
    }
}

// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new `NdArray`.
impl<'a> $trt<&'a NdArray<$scalar>> for $scalar
{
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar>
    {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.map(move |&elt| self $operator elt)
        })
    }
}
    );
}

mod arithmetic_ops
{
    use super::*;
    use crate::broadcast;
    use crate::error::incompatible_shapes;
    use crate::imp_prelude::*;

    use std::ops::*;

    impl_binary_op!(Add, +, add, AddAssign, add_assign, "addition");
    impl_binary_op!(Sub, -, sub, SubAssign, sub_assign, "subtraction");
    impl_binary_op!(Mul, *, mul, MulAssign, mul_assign, "multiplication");
    impl_binary_op!(Div, /, div, DivAssign, div_assign, "division");
    impl_binary_op!(Rem, %, rem, RemAssign, rem_assign, "remainder");
    impl_binary_op!(BitAnd, &, bitand, BitAndAssign, bitand_assign, "bit and");
    impl_binary_op!(BitOr, |, bitor, BitOrAssign, bitor_assign, "bit or");
    impl_binary_op!(BitXor, ^, bitxor, BitXorAssign, bitxor_assign, "bit xor");

    macro_rules! all_scalar_ops {
        ($int_scalar:ty) => (
            impl_scalar_lhs_op!($int_scalar, Commute, +, Add, add);
            impl_scalar_lhs_op!($int_scalar, Ordered, -, Sub, sub);
            impl_scalar_lhs_op!($int_scalar, Commute, *, Mul, mul);
            impl_scalar_lhs_op!($int_scalar, Ordered, /, Div, div);
            impl_scalar_lhs_op!($int_scalar, Ordered, %, Rem, rem);
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);

    impl<A> Neg for NdArray<A>
    where A: Clone + Neg<Output = A>
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result.
        fn neg(mut self) -> Self
        {
            self.map_inplace(|elt| {
                *elt = -elt.clone();
            });
            self
        }
    }

    impl<'a, A> Neg for &'a NdArray<A>
    where &'a A: 'a + Neg<Output = A>
    {
        type Output = NdArray<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new `NdArray`.
        fn neg(self) -> NdArray<A>
        {
            self.map(Neg::neg)
        }
    }

    impl<A> Not for NdArray<A>
    where A: Clone + Not<Output = A>
    {
        type Output = Self;
        /// Perform an elementwise unary not of `self` and return the result.
        fn not(mut self) -> Self
        {
            self.map_inplace(|elt| {
                *elt = !elt.clone();
            });
            self
        }
    }
}
