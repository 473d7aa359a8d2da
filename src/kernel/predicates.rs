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

use crate::geometry::aabb::Aabb;
use crate::geometry::point::{Point, Point3, PointOps};
use crate::geometry::segment::{Segment3, SegmentOps};
use crate::geometry::triangle::Triangle3;
use crate::geometry::vector::{Cross3, VectorOps};
use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, One, Zero};
use std::ops::{Add, Div, Mul, Sub};

pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>, eps: &T) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    for i in 0..N {
        if (&p1.coords[i] - &p2.coords[i]).abs() > *eps {
            return false;
        }
    }
    true
}

pub fn are_collinear<T>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let u = a.vector_to(b);
    let v = a.vector_to(c);
    u.cross(&v).norm2().is_zero()
}

/// Signed volume of tetra (a,b,c,d): `((b-a) x (c-a)) . (d-a)`.
/// Positive when `d` is on the positive side of the oriented plane (a,b,c).
pub fn orient3d<T>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let u = a.vector_to(b);
    let v = a.vector_to(c);
    let w = a.vector_to(d);
    u.cross(&v).dot(&w)
}

/// Outcome of the parametric segment/triangle test.
///
/// `Boundary` flags a hit lying on a triangle edge or corner (within the
/// scalar's tolerance; exactly, for exact scalars). Parity counting must
/// treat it as a grazing contact, not a clean crossing.
#[derive(Debug, Clone, PartialEq)]
pub enum TriangleCrossing<T: Scalar> {
    None,
    Interior { t: T, point: Point3<T> },
    Boundary { t: T, point: Point3<T> },
    Coplanar,
}

/// Where, if anywhere, segment `seg` crosses triangle `tri`.
///
/// Moller-Trumbore with the division deferred until the determinant is
/// known to be non-zero, so the exact kernel never divides by zero and
/// the inexact kernel stays inside its tolerance model. `t` is the
/// parameter along `seg` (0 at `a`, 1 at `b`).
pub fn segment_triangle_crossing<T>(seg: &Segment3<T>, tri: &Triangle3<T>) -> TriangleCrossing<T>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let dir = seg.direction();
    let e1 = tri.a.vector_to(&tri.b);
    let e2 = tri.a.vector_to(&tri.c);
    let pvec = dir.cross(&e2);
    let det = e1.dot(&pvec);

    if det.is_zero() {
        // Segment parallel to the supporting plane.
        if !orient3d(&tri.a, &tri.b, &tri.c, &seg.a).is_zero() {
            return TriangleCrossing::None;
        }
        // In-plane segment: no transversal crossing exists. Only report
        // the degeneracy when the two can actually touch.
        if tri.bbox().intersects(&Aabb::from_points(&seg.a, &seg.b)) {
            return TriangleCrossing::Coplanar;
        }
        return TriangleCrossing::None;
    }

    let zero = T::zero();
    let one = T::one();
    let inv = &one / &det;

    let svec = tri.a.vector_to(&seg.a);
    let u = &svec.dot(&pvec) * &inv;
    let qvec = svec.cross(&e1);
    let v = &dir.dot(&qvec) * &inv;
    let t = &e2.dot(&qvec) * &inv;

    if t < zero || t > one {
        return TriangleCrossing::None;
    }
    let uv = &u + &v;
    if u < zero || v < zero || uv > one {
        return TriangleCrossing::None;
    }

    let point = seg.point_at(&t);
    let edge_margin = &one - &uv;
    if u.is_zero() || v.is_zero() || edge_margin.is_zero() {
        TriangleCrossing::Boundary { t, point }
    } else {
        TriangleCrossing::Interior { t, point }
    }
}
