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
    fmt::Debug,
    ops::{Index, IndexMut},
};

use crate::numeric::scalar::Scalar;

/// Anything with N scalar coordinates that boxes and trees can hold.
pub trait SpatialElement<T: Scalar, const N: usize>:
    Clone + Debug + PartialEq + Index<usize, Output = T> + IndexMut<usize>
{
    fn new(coords: [T; N]) -> Self;

    fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>;

    fn coords(&self) -> &[T; N];

    fn coords_mut(&mut self) -> &mut [T; N];

    fn iter(&self) -> std::slice::Iter<'_, T>;
}
