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

use std::{
    array::from_fn,
    ops::{Add, Div, Index, Mul, Sub},
};

use crate::{
    geometry::{point::Point, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
    operations::{Sqrt, Zero},
};

/// A displacement, kept as a thin wrapper over [`Point`] so the two share
/// coordinate storage and indexing.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn scaled(&self, s: &T) -> Self;
    fn norm2(&self) -> T;
    fn norm(&self) -> T;
}

pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector(Point { coords })
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector(Point::from_vals(vals))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl<T, const N: usize> VectorOps<T, N> for Vector<T, N>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            let prod = &self[i] * &other[i];
            acc += &prod;
        }
        acc
    }

    fn scaled(&self, s: &T) -> Self {
        Vector(Point {
            coords: from_fn(|i| &self[i] * s),
        })
    }

    fn norm2(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm2().sqrt()
    }
}

impl<T> Cross3<T> for Vector<T, 3>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn cross(&self, other: &Self) -> Self {
        let x = &(&self[1] * &other[2]) - &(&self[2] * &other[1]);
        let y = &(&self[2] * &other[0]) - &(&self[0] * &other[2]);
        let z = &(&self[0] * &other[1]) - &(&self[1] * &other[0]);
        Vector::new([x, y, z])
    }
}

pub type Vector3<T> = Vector<T, 3>;
