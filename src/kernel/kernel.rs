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

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// The geometry-kernel capability set the index and oracle are generic
/// over: a number type plus the 3-D predicates written against it. The
/// spatial structures never name a concrete numeric representation.
pub trait Kernel: Sized {
    type FT: Scalar;

    /// Sign of the signed volume of tetra (a,b,c,d): `((b-a) x (c-a)) . (d-a)`
    fn orient3d(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> Self::FT;

    // Convenience predicates
    fn are_equal(a: &Point3<Self::FT>, b: &Point3<Self::FT>, eps: &Self::FT) -> bool;
    fn are_collinear(a: &Point3<Self::FT>, b: &Point3<Self::FT>, c: &Point3<Self::FT>) -> bool;
}
