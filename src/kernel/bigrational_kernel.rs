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

use crate::geometry::point::Point3;
use crate::kernel::kernel::Kernel;
use crate::kernel::predicates::{are_collinear, are_equal, orient3d};
use crate::numeric::exact_rational::ExactRational;

/// Exact kernel: every predicate is decided by arbitrary-precision
/// rational arithmetic, no tolerance band.
#[derive(Debug)]
pub struct BigRationalKernel;

impl Kernel for BigRationalKernel {
    type FT = ExactRational;

    fn orient3d(
        a: &Point3<ExactRational>,
        b: &Point3<ExactRational>,
        c: &Point3<ExactRational>,
        d: &Point3<ExactRational>,
    ) -> ExactRational {
        orient3d(a, b, c, d)
    }

    fn are_equal(a: &Point3<ExactRational>, b: &Point3<ExactRational>, eps: &ExactRational) -> bool {
        are_equal(a, b, eps)
    }

    fn are_collinear(
        a: &Point3<ExactRational>,
        b: &Point3<ExactRational>,
        c: &Point3<ExactRational>,
    ) -> bool {
        are_collinear(a, b, c)
    }
}
