//! Combining operations for segment trees.
//!
//! A segment tree is built from some [`Operation`]. The marker trait [`Commutative`]
//! unlocks [`EfficientSegmentTree::fold_commutative`], and [`Identity`] supplies a
//! neutral element for the ready-made operations in this module.
//!
//! Any closure `Fn(&A, &A) -> A` is an operation as well:
//!
//! ```
//! use segtree::{EfficientSegmentTree, SegmentTree};
//!
//! let concat = |a: &String, b: &String| format!("{a}{b}");
//! let tree = EfficientSegmentTree::build(vec!["a".to_string(), "b".to_string()], concat).unwrap();
//! assert_eq!(tree.fold(String::new(), 0, 1).unwrap(), "ab");
//! ```
//!
//! [`EfficientSegmentTree::fold_commutative`]: crate::EfficientSegmentTree::fold_commutative

use core::num::Wrapping;

/// A trait that specifies which associative operator a segment tree combines with.
pub trait Operation<A> {
    /// Combines two values.
    ///
    /// This function must be [associative][1], that is `combine(combine(a, b), c) =
    /// combine(a, combine(b, c))`.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Associative_property
    fn combine(&self, a: &A, b: &A) -> A;
    /// Replace the value in `a` with `combine(a, b)`.
    #[inline]
    fn combine_mut(&self, a: &mut A, b: &A) {
        let res = self.combine(&*a, b);
        *a = res;
    }
    /// Replace the value in `b` with `combine(a, b)`.
    #[inline]
    fn combine_mut2(&self, a: &A, b: &mut A) {
        let res = self.combine(a, &*b);
        *b = res;
    }
}

impl<A, F> Operation<A> for F
where
    F: Fn(&A, &A) -> A,
{
    #[inline]
    fn combine(&self, a: &A, b: &A) -> A {
        self(a, b)
    }
}

/// A marker trait that specifies that an [`Operation`] is [commutative][1], that is:
/// `combine(a, b) = combine(b, a)`.
///
/// [1]: https://en.wikipedia.org/wiki/Commutative_property
pub trait Commutative<A>: Operation<A> {}

/// A trait that specifies that an [`Operation`] has an [identity element][1].
///
/// An identity must satisfy `combine(a, id) = a` and `combine(id, a) = a`.
///
/// [1]: https://en.wikipedia.org/wiki/Identity_element
pub trait Identity<A> {
    /// Returns the identity element.
    fn identity(&self) -> A;
}

/// Wraps an operation the caller vouches to be commutative.
///
/// Commutativity cannot be checked at runtime, so wrapping a non-commutative
/// operation makes [`fold_commutative`] return wrong results.
///
/// [`fold_commutative`]: crate::EfficientSegmentTree::fold_commutative
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub struct AssumeCommutative<O>(pub O);

impl<A, O: Operation<A>> Operation<A> for AssumeCommutative<O> {
    #[inline]
    fn combine(&self, a: &A, b: &A) -> A {
        self.0.combine(a, b)
    }
}
impl<A, O: Operation<A>> Commutative<A> for AssumeCommutative<O> {}
impl<A, O: Identity<A>> Identity<A> for AssumeCommutative<O> {
    #[inline]
    fn identity(&self) -> A {
        self.0.identity()
    }
}

/// Each node contains the sum of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Add;
/// Each node contains the product of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Mul;
/// Each node contains the bitwise and of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct And;
/// Each node contains the bitwise or of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Or;
/// Each node contains the bitwise xor of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Xor;
/// Each node contains the minimum of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Min;
/// Each node contains the maximum of the interval it represents.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Max;

macro_rules! impl_operation_infix {
    ($op:ty, $ty:ty, $combineop:tt) => {
        impl Operation<$ty> for $op {
            #[inline]
            fn combine(&self, a: &$ty, b: &$ty) -> $ty {
                *a $combineop *b
            }
        }
    };
}
macro_rules! impl_operation_prefix {
    ($op:ty, $ty:ty, $combinef:expr) => {
        impl Operation<$ty> for $op {
            #[inline]
            fn combine(&self, a: &$ty, b: &$ty) -> $ty {
                $combinef(*a, *b)
            }
        }
    };
}
macro_rules! impl_identity {
    ($op:ty, $ty:ty, $iden:expr) => {
        impl Identity<$ty> for $op {
            #[inline]
            fn identity(&self) -> $ty {
                $iden
            }
        }
    };
}
macro_rules! impl_integer {
    ($ty:tt, $all_ones:expr) => {
        impl_operation_infix!(Add, $ty, +);
        impl_identity!(Add, $ty, 0);
        impl Commutative<$ty> for Add {}

        impl_operation_infix!(Add, Wrapping<$ty>, +);
        impl_identity!(Add, Wrapping<$ty>, Wrapping(0));
        impl Commutative<Wrapping<$ty>> for Add {}

        impl_operation_infix!(Mul, $ty, *);
        impl_identity!(Mul, $ty, 1);
        impl Commutative<$ty> for Mul {}

        impl_operation_infix!(Mul, Wrapping<$ty>, *);
        impl_identity!(Mul, Wrapping<$ty>, Wrapping(1));
        impl Commutative<Wrapping<$ty>> for Mul {}

        impl_operation_infix!(And, $ty, &);
        impl_identity!(And, $ty, $all_ones);
        impl Commutative<$ty> for And {}

        impl_operation_infix!(Or, $ty, |);
        impl_identity!(Or, $ty, 0);
        impl Commutative<$ty> for Or {}

        impl_operation_infix!(Xor, $ty, ^);
        impl_identity!(Xor, $ty, 0);
        impl Commutative<$ty> for Xor {}

        impl_operation_prefix!(Min, $ty, core::cmp::min);
        impl_identity!(Min, $ty, $ty::MAX);
        impl Commutative<$ty> for Min {}

        impl_operation_prefix!(Max, $ty, core::cmp::max);
        impl_identity!(Max, $ty, $ty::MIN);
        impl Commutative<$ty> for Max {}
    };
}
impl_integer!(u8, u8::MAX);
impl_integer!(u16, u16::MAX);
impl_integer!(u32, u32::MAX);
impl_integer!(u64, u64::MAX);
impl_integer!(u128, u128::MAX);
impl_integer!(usize, usize::MAX);
impl_integer!(i8, -1);
impl_integer!(i16, -1);
impl_integer!(i32, -1);
impl_integer!(i64, -1);
impl_integer!(i128, -1);
impl_integer!(isize, -1);

// NaN is ignored by `min`/`max` on floats, keeping both associative.
macro_rules! impl_float {
    ($ty:tt) => {
        impl_operation_infix!(Add, $ty, +);
        impl_identity!(Add, $ty, 0.0);
        impl Commutative<$ty> for Add {}

        impl_operation_infix!(Mul, $ty, *);
        impl_identity!(Mul, $ty, 1.0);
        impl Commutative<$ty> for Mul {}

        impl_operation_prefix!(Min, $ty, $ty::min);
        impl_identity!(Min, $ty, $ty::INFINITY);
        impl Commutative<$ty> for Min {}

        impl_operation_prefix!(Max, $ty, $ty::max);
        impl_identity!(Max, $ty, $ty::NEG_INFINITY);
        impl Commutative<$ty> for Max {}
    };
}
impl_float!(f32);
impl_float!(f64);
