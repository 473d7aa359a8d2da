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
use rug::Rational;
use rug::ops::Pow as RugPow;

use crate::{
    numeric::{robust_f64::RobustF64, scalar::Scalar},
    operations::{Abs, One, Pow, Sqrt, Zero},
};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Arbitrary-precision rational scalar. Every comparison is exact and the
/// tolerance band is zero, so predicates written against [`Scalar`]
/// degenerate to exact tests.
#[derive(Clone, Debug)]
pub struct ExactRational(pub Rational);

impl Scalar for ExactRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        ExactRational(Rational::from((num, den)))
    }

    fn tolerance() -> Self {
        ExactRational(Rational::new())
    }

    fn is_finite(&self) -> bool {
        // Rationals have no NaN/Inf representation.
        true
    }

    #[inline(always)]
    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        a.0.cmp(&b.0)
    }
}

impl Default for ExactRational {
    fn default() -> Self {
        ExactRational(Rational::new())
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;
    fn add(self, rhs: ExactRational) -> ExactRational {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;
    fn sub(self, rhs: ExactRational) -> ExactRational {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;
    fn mul(self, rhs: ExactRational) -> ExactRational {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl Div for ExactRational {
    type Output = ExactRational;
    fn div(self, rhs: ExactRational) -> ExactRational {
        &self / &rhs
    }
}

impl<'c> AddAssign<&'c ExactRational> for ExactRational {
    fn add_assign(&mut self, rhs: &'c ExactRational) {
        self.0 += &rhs.0;
    }
}

impl<'d> SubAssign<&'d ExactRational> for ExactRational {
    fn sub_assign(&mut self, rhs: &'d ExactRational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(Rational::from(-&self.0))
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<f64> for ExactRational {
    fn from(value: f64) -> Self {
        // Non-finite input has no rational image; callers reject it at
        // registration before any conversion happens.
        ExactRational(Rational::from_f64(value).unwrap_or_else(Rational::new))
    }
}

impl From<RobustF64> for ExactRational {
    fn from(value: RobustF64) -> Self {
        ExactRational::from(value.0)
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0.to_f64() as u64)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for ExactRational {}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &ExactRational) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Hash for ExactRational {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Less
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Greater
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl Abs for ExactRational {
    fn abs(&self) -> Self {
        ExactRational(self.0.clone().abs())
    }
}

impl Pow for ExactRational {
    fn pow(&self, exp: i32) -> Self {
        ExactRational(self.0.clone().pow(exp))
    }
}

impl Sqrt for ExactRational {
    fn sqrt(&self) -> Self {
        // No exact rational square root; round-trip through f64.
        ExactRational::from(self.0.to_f64().sqrt())
    }
}
