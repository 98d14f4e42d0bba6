//
// hungarian-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// hungarian-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with hungarian-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

//! This module contains utilities that allow the solver to be generic over
//! the primitive integer type used to express the costs of an assignment
//! problem. An alternative to defining this trait would have been to simply
//! use the `num-traits` crate. This was however decided against in order to
//! keep the compilation time of hungarian-rs low.
//!
//! Only signed types implement [`Cost`]: even though the costs themselves are
//! non-negative, the dual variables of the Hungarian method may very well
//! become negative while the solver runs.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// This type encapsulates a primitive signed int used as an edge cost
pub trait Cost:
    Sized
    + Copy
    + Clone
    + Debug
    + Display
    + Eq
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Ord
    + PartialOrd
    + Hash
    + private::Sealed // we don't want you to implement the type Cost
{
    /// Returns the zero of this type
    fn zero() -> Self;
    /// Returns the largest representable value. The solver uses it as the
    /// 'no slack observed yet' sentinel.
    fn infinity() -> Self;
    /// Returns self + other, or None when that would overflow
    fn checked_add(self, other: Self) -> Option<Self>;
    /// Returns self - other, or None when that would overflow
    fn checked_sub(self, other: Self) -> Option<Self>;
    /// Returns twice the value, or None when that would overflow
    fn checked_double(self) -> Option<Self>;
    /// Returns half the value (rounded towards zero)
    fn halve(self) -> Self;
}

/// This macro generates an implementation of the Cost trait for the given type $t
macro_rules! cost {
    ($t: ty) => {
        impl Cost for $t {
            fn zero() -> $t {
                0
            }
            fn infinity() -> $t {
                <$t>::MAX
            }
            fn checked_add(self, other: $t) -> Option<$t> {
                <$t>::checked_add(self, other)
            }
            fn checked_sub(self, other: $t) -> Option<$t> {
                <$t>::checked_sub(self, other)
            }
            fn checked_double(self) -> Option<$t> {
                self.checked_mul(2)
            }
            fn halve(self) -> $t {
                self / 2
            }
        }
    };
}

cost!(i8);
cost!(i16);
cost!(i32);
cost!(i64);
cost!(i128);
cost!(isize);

mod private {
    /// This is a marker trait which simply cannot be implemented outside of
    /// this module which prevents anyone from implementing it. Unsigned types
    /// are deliberately left out: the dual variables need a sign.
    pub trait Sealed {}

    macro_rules! sealed {
        ($t: ty) => {
            impl Sealed for $t {}
        };
    }

    sealed!(i8);
    sealed!(i16);
    sealed!(i32);
    sealed!(i64);
    sealed!(i128);
    sealed!(isize);
}
