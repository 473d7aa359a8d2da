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

use thiserror::Error;

/// Everything the index, loader and oracle can report.
///
/// Registration-time errors (`InvalidGeometry`, `MalformedMesh`) are local
/// and recoverable: the caller may skip the offending primitive without
/// losing state already registered. Lifecycle errors (`NotBuilt`,
/// `AlreadyBuilt`, `NotReady`) signal an integration bug in the calling
/// driver and are meant to abort the run, not to be defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// A primitive with non-finite coordinates or a degenerate shape was
    /// handed to the index.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The source mesh produced a facet that is not a triangle.
    #[error("malformed mesh: facet {facet} has {arity} vertices, expected 3")]
    MalformedMesh { facet: usize, arity: usize },

    /// A query reached the index before `build()`.
    #[error("spatial index queried before build()")]
    NotBuilt,

    /// `build()` was called twice, or a registration arrived after the
    /// index was frozen.
    #[error("spatial index is already built")]
    AlreadyBuilt,

    /// An oracle query reached a surface whose indices are not built yet.
    #[error("oracle queried before the surface was built")]
    NotReady,

    /// The ray-parity test kept grazing edges/vertices after exhausting
    /// its perturbation budget.
    #[error("inside/outside classification still ambiguous after {retries} perturbed rays")]
    AmbiguousClassification { retries: usize },
}
