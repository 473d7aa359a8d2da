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

use crate::{
    geometry::{
        aabb::{Aabb, Aabb3},
        point::{Point3, PointOps},
        vector::{Cross3, Vector3, VectorOps},
    },
    kernel::predicates::are_equal,
    numeric::scalar::Scalar,
    operations::Zero,
};
use std::ops::{Add, Div, Mul, Sub};

/// An ordered corner triple. Registration keeps the input orientation;
/// nothing here assumes the triple is non-degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T> Triangle3<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn new(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
            c: c.clone(),
        }
    }

    /// Unnormalized plane normal, `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vector3<T> {
        let u = self.a.vector_to(&self.b);
        let v = self.a.vector_to(&self.c);
        u.cross(&v)
    }

    pub fn bbox(&self) -> Aabb3<T> {
        Aabb::from_points(&self.a, &self.b).union(&Aabb::from_point(&self.c))
    }

    pub fn has_duplicate_corner(&self) -> bool {
        let tol = T::tolerance();
        are_equal(&self.a, &self.b, &tol)
            || are_equal(&self.b, &self.c, &tol)
            || are_equal(&self.a, &self.c, &tol)
    }

    /// Duplicate or collinear corners: the triple spans no area.
    pub fn is_degenerate(&self) -> bool {
        self.has_duplicate_corner() || self.normal().norm2().is_zero()
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}
