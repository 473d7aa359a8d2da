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
    array::{self, from_fn},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub, SubAssign},
};

use crate::{
    geometry::{spatial_element::SpatialElement, vector::Vector},
    numeric::scalar::Scalar,
    operations::Zero,
};

/// An immutable position. Identity is purely by value, under the scalar
/// type's comparison rules.
#[derive(Clone, Debug)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    type Vector;

    fn as_vector(&self) -> Self::Vector;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn midpoint(&self, other: &Self) -> Self;
    fn distance_squared_to(&self, other: &Self) -> T;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    /// All coordinates finite (no NaN/Inf components).
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Scalar, const N: usize> SpatialElement<T, N> for Point<T, N> {
    fn new(coords: [T; N]) -> Point<T, N> {
        Point { coords }
    }

    fn from_vals<V>(vals: [V; N]) -> Point<T, N>
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    fn coords(&self) -> &[T; N] {
        &self.coords
    }

    fn coords_mut(&mut self) -> &mut [T; N] {
        &mut self.coords
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N>
where
    T: Scalar + for<'c> AddAssign<&'c T>,
{
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] += &rhs.coords[i];
        }
        out
    }
}

impl<'a, 'b, T, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N>
where
    T: Scalar + for<'c> SubAssign<&'c T>,
{
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = self.clone();
        for i in 0..N {
            out.coords[i] -= &rhs.coords[i];
        }
        out
    }
}

impl<T, const N: usize> PointOps<T, N> for Point<T, N>
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    type Vector = Vector<T, N>;

    fn as_vector(&self) -> Vector<T, N> {
        Vector(self.clone())
    }

    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector(Point {
            coords: from_fn(|i| &other.coords[i] - &self.coords[i]),
        })
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| &self.coords[i] + &v[i]),
        }
    }

    fn midpoint(&self, other: &Self) -> Self {
        let two: T = T::from(2);
        Point {
            coords: from_fn(|i| {
                let sum = &self.coords[i] + &other.coords[i];
                &sum / &two
            }),
        }
    }

    fn distance_squared_to(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            let d = &self.coords[i] - &other.coords[i];
            let sq = &d * &d;
            acc += &sq;
        }
        acc
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.coords
    }
}

impl<T: Scalar, const N: usize> Hash for Point<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in &self.coords {
            coord.hash(state);
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.coords[i] != other.coords[i] {
                return false;
            }
        }
        true
    }
}

impl<T: Scalar, const N: usize> Eq for Point<T, N> {}

impl<T: Scalar, const N: usize> PartialOrd for Point<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        for i in 0..N {
            match self.coords[i].partial_cmp(&other.coords[i]) {
                Some(std::cmp::Ordering::Equal) => continue,
                Some(ordering) => return Some(ordering),
                None => return None,
            }
        }
        Some(std::cmp::Ordering::Equal)
    }
}

pub type Point3<T> = Point<T, 3>;
