// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::ToPrimitive;

use crate::operations::{Abs, One, Pow, Sqrt, Zero};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use std::fmt::Debug;

/// The number type the whole index/oracle stack is generic over.
///
/// Implementors decide the tolerance model: an inexact scalar compares
/// within an epsilon band, an exact scalar compares exactly and reports a
/// zero tolerance. Reference-operator arithmetic (`&a + &b`) is required
/// at each use site so exact representations are never cloned per
/// operation.
pub trait Scalar:
    Clone
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Abs
    + Pow
    + Sqrt
    + Zero
    + One
    + Eq
    + PartialEq
    + PartialOrd
    + Hash
    + ToPrimitive
    + From<i32>
    + From<f64>
{
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Half-width of the equality band. Zero for exact types.
    fn tolerance() -> Self;

    /// True when the value is neither NaN nor infinite.
    fn is_finite(&self) -> bool;

    /// Total, deterministic ordering. Unlike `PartialOrd`, never collapses
    /// nearby values; used to sort traversal fronts reproducibly.
    fn cmp_ref(a: &Self, b: &Self) -> Ordering;

    /// Returns -1, 0, or +1 under the type's sign rules.
    fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}
