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
    geometry::{point::Point, segment::Segment, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};
use std::{
    array::from_fn,
    ops::{Add, Div, Mul, Sub},
};

/// An axis-aligned bounding box in N dimensions.
#[derive(Clone, Debug)]
pub struct Aabb<T: Scalar, const N: usize, P: SpatialElement<T, N>> {
    pub min: P,
    pub max: P,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Scalar, const N: usize, P: SpatialElement<T, N>> Aabb<T, N, P> {
    pub fn new(min: P, max: P) -> Self {
        Aabb {
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn min(&self) -> &P {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &P {
        &self.max
    }

    /// The degenerate box holding a single point.
    pub fn from_point(p: &P) -> Self {
        Aabb::new(p.clone(), p.clone())
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &P, b: &P) -> Self
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        let mins = from_fn(|i| min_by_sign(&a[i], &b[i]));
        let maxs = from_fn(|i| max_by_sign(&a[i], &b[i]));
        Aabb::new(P::new(mins), P::new(maxs))
    }

    pub fn union(&self, other: &Aabb<T, N, P>) -> Aabb<T, N, P>
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        let mins = from_fn(|i| min_by_sign(&self.min[i], &other.min[i]));
        let maxs = from_fn(|i| max_by_sign(&self.max[i], &other.max[i]));
        Aabb::new(P::new(mins), P::new(maxs))
    }

    /// Does this AABB intersect `other`?
    pub fn intersects(&self, other: &Aabb<T, N, P>) -> bool
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        for i in 0..N {
            if (&self.max[i] - &other.min[i]).is_negative() {
                return false;
            }
            if (&other.max[i] - &self.min[i]).is_negative() {
                return false;
            }
        }
        true
    }

    /// Is `p` inside the box, under the scalar's tolerance rules?
    pub fn contains_point(&self, p: &P) -> bool {
        for i in 0..N {
            if p[i] < self.min[i] || p[i] > self.max[i] {
                return false;
            }
        }
        true
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> T
    where
        for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let half = T::from_num_den(1, 2);
        &(&self.min[i] + &self.max[i]) * &half
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T
    where
        T: Abs,
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        (&self.max[i] - &self.min[i]).abs()
    }
}

impl<T: Scalar, const N: usize> Aabb<T, N, Point<T, N>> {
    pub fn center_point(&self) -> Point<T, N>
    where
        for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        Point {
            coords: from_fn(|i| self.center(i)),
        }
    }

    /// Clip a segment against the box; returns the parametric range
    /// `[t_enter, t_exit]` of the overlap (with `t` along the segment,
    /// clamped to `[0, 1]`), or `None` when the segment misses the box.
    pub fn clip_segment(&self, seg: &Segment<T, N>) -> Option<(T, T)>
    where
        for<'a> &'a T: Add<&'a T, Output = T>
            + Sub<&'a T, Output = T>
            + Mul<&'a T, Output = T>
            + Div<&'a T, Output = T>,
    {
        let mut t0 = T::zero();
        let mut t1 = T::one();
        for i in 0..N {
            let d = &seg.b[i] - &seg.a[i];
            if d.is_zero() {
                // Segment runs parallel to this slab; origin must lie in it.
                if seg.a[i] < self.min[i] || seg.a[i] > self.max[i] {
                    return None;
                }
            } else {
                let lo = &(&self.min[i] - &seg.a[i]) / &d;
                let hi = &(&self.max[i] - &seg.a[i]) / &d;
                let (near, far) = if lo > hi { (hi, lo) } else { (lo, hi) };
                if near > t0 {
                    t0 = near;
                }
                if far < t1 {
                    t1 = far;
                }
                if t0 > t1 {
                    return None;
                }
            }
        }
        Some((t0, t1))
    }
}

impl<T: Scalar> Aabb<T, 3, Point<T, 3>> {
    /// The eight children obtained by splitting at the center. Child `k`
    /// takes the upper half along axis `i` iff bit `i` of `k` is set.
    pub fn octants(&self) -> [Self; 8]
    where
        for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let c = self.center_point();
        from_fn(|k| {
            let min = Point {
                coords: from_fn(|i| {
                    if (k >> i) & 1 == 1 {
                        c[i].clone()
                    } else {
                        self.min[i].clone()
                    }
                }),
            };
            let max = Point {
                coords: from_fn(|i| {
                    if (k >> i) & 1 == 1 {
                        self.max[i].clone()
                    } else {
                        c[i].clone()
                    }
                }),
            };
            Aabb::new(min, max)
        })
    }
}

#[inline(always)]
fn min_by_sign<T: Scalar>(a: &T, b: &T) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    if (a - b).is_negative() {
        a.clone()
    } else {
        b.clone()
    }
}

#[inline(always)]
fn max_by_sign<T: Scalar>(a: &T, b: &T) -> T
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    if (a - b).is_positive() {
        a.clone()
    } else {
        b.clone()
    }
}

pub type Aabb3<T> = Aabb<T, 3, Point<T, 3>>;
