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

use crate::{
    geometry::util::EPS,
    numeric::{exact_rational::ExactRational, scalar::Scalar},
    operations::{Abs, One, Pow, Sqrt, Zero},
};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// `f64` under the crate's tolerance rules: comparisons collapse values
/// closer than [`EPS`], hashing and `==` stay bit-exact so the hashing
/// contract holds.
#[derive(Clone, Debug, Default)]
pub struct RobustF64(pub f64);

impl Scalar for RobustF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        RobustF64(num as f64 / den as f64)
    }

    fn tolerance() -> Self {
        RobustF64(EPS)
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    #[inline(always)]
    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        // total_cmp handles -0.0 and NaN deterministically
        a.0.total_cmp(&b.0)
    }
}

impl<'a, 'b> Add<&'b RobustF64> for &'a RobustF64 {
    type Output = RobustF64;

    fn add(self, rhs: &'b RobustF64) -> RobustF64 {
        RobustF64(self.0 + rhs.0)
    }
}

impl Add for RobustF64 {
    type Output = RobustF64;
    fn add(self, rhs: RobustF64) -> RobustF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b RobustF64> for &'a RobustF64 {
    type Output = RobustF64;

    fn sub(self, rhs: &'b RobustF64) -> RobustF64 {
        RobustF64(self.0 - rhs.0)
    }
}

impl Sub for RobustF64 {
    type Output = RobustF64;
    fn sub(self, rhs: RobustF64) -> RobustF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b RobustF64> for &'a RobustF64 {
    type Output = RobustF64;

    fn mul(self, rhs: &'b RobustF64) -> RobustF64 {
        RobustF64(self.0 * rhs.0)
    }
}

impl Mul for RobustF64 {
    type Output = RobustF64;
    fn mul(self, rhs: RobustF64) -> RobustF64 {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b RobustF64> for &'a RobustF64 {
    type Output = RobustF64;

    fn div(self, rhs: &'b RobustF64) -> RobustF64 {
        RobustF64(self.0 / rhs.0)
    }
}

impl Div for RobustF64 {
    type Output = RobustF64;
    fn div(self, rhs: RobustF64) -> RobustF64 {
        &self / &rhs
    }
}

impl<'c> AddAssign<&'c RobustF64> for RobustF64 {
    fn add_assign(&mut self, rhs: &'c RobustF64) {
        self.0 += rhs.0;
    }
}

impl<'d> SubAssign<&'d RobustF64> for RobustF64 {
    fn sub_assign(&mut self, rhs: &'d RobustF64) {
        self.0 -= rhs.0;
    }
}

impl Neg for RobustF64 {
    type Output = RobustF64;

    fn neg(self) -> RobustF64 {
        RobustF64(-self.0)
    }
}

impl<'a> Neg for &'a RobustF64 {
    type Output = RobustF64;

    fn neg(self) -> RobustF64 {
        RobustF64(-self.0)
    }
}

impl From<i32> for RobustF64 {
    fn from(value: i32) -> Self {
        RobustF64(value as f64)
    }
}

impl From<f64> for RobustF64 {
    fn from(value: f64) -> Self {
        RobustF64(value)
    }
}

impl From<RobustF64> for f64 {
    fn from(value: RobustF64) -> Self {
        value.0
    }
}

impl From<ExactRational> for RobustF64 {
    fn from(value: ExactRational) -> Self {
        RobustF64(value.0.to_f64())
    }
}

impl ToPrimitive for RobustF64 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0 as u64)
    }
    fn to_f32(&self) -> Option<f32> {
        Some(self.0 as f32)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl PartialEq for RobustF64 {
    fn eq(&self, other: &RobustF64) -> bool {
        self.0.to_bits() == other.0.to_bits() // Comparing with tolerance breaks the hashing contract
    }
}

impl Eq for RobustF64 {}

impl PartialOrd for RobustF64 {
    fn partial_cmp(&self, other: &RobustF64) -> Option<Ordering> {
        let diff = self.0 - other.0;
        if diff.abs() < EPS {
            return Some(Ordering::Equal);
        }
        if diff > EPS {
            return Some(Ordering::Greater);
        }
        if diff < -EPS {
            return Some(Ordering::Less);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Hash for RobustF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Zero for RobustF64 {
    fn zero() -> Self {
        RobustF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < EPS
    }

    fn is_positive(&self) -> bool {
        self.0 > EPS
    }
    fn is_negative(&self) -> bool {
        self.0 < -EPS
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0 >= -EPS
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0 <= EPS
    }
}

impl One for RobustF64 {
    fn one() -> Self {
        RobustF64(1.0)
    }
}

impl Abs for RobustF64 {
    fn abs(&self) -> Self {
        RobustF64(self.0.abs())
    }
}

impl Pow for RobustF64 {
    fn pow(&self, exp: i32) -> Self {
        RobustF64(self.0.powi(exp))
    }
}

impl Sqrt for RobustF64 {
    fn sqrt(&self) -> Self {
        RobustF64(self.0.sqrt())
    }
}
