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

/// What the loader consumes from the upstream mesh representation: an
/// ordered vertex list (with a count for pre-sizing), facets as
/// vertex-index tuples, and optionally marked sharp edges. Facet arity is
/// the source's own; the loader rejects anything but triangles.
pub trait MeshSource<T: Scalar> {
    fn vertex_count(&self) -> usize;
    fn vertices(&self) -> &[Point3<T>];

    fn facet_count(&self) -> usize;
    /// Vertex indices of facet `facet`, in order.
    fn facet_vertices(&self, facet: usize) -> &[usize];

    /// Sharp edges as vertex-index pairs. Empty unless the source marks
    /// feature edges.
    fn feature_edges(&self) -> &[(usize, usize)] {
        &[]
    }
}

/// Plain indexed triangle soup, the simplest `MeshSource`. The readers in
/// [`crate::io`] produce this.
#[derive(Debug, Clone, Default)]
pub struct IndexedMesh<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub facets: Vec<Vec<usize>>,
    pub feature_edges: Vec<(usize, usize)>,
}

impl<T: Scalar> IndexedMesh<T> {
    pub fn new() -> Self {
        IndexedMesh {
            vertices: Vec::new(),
            facets: Vec::new(),
            feature_edges: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, p: Point3<T>) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    pub fn add_facet(&mut self, corners: Vec<usize>) -> usize {
        self.facets.push(corners);
        self.facets.len() - 1
    }

    pub fn add_feature_edge(&mut self, a: usize, b: usize) {
        self.feature_edges.push((a, b));
    }
}

impl<T: Scalar> MeshSource<T> for IndexedMesh<T> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    fn facet_count(&self) -> usize {
        self.facets.len()
    }

    fn facet_vertices(&self, facet: usize) -> &[usize] {
        &self.facets[facet]
    }

    fn feature_edges(&self) -> &[(usize, usize)] {
        &self.feature_edges
    }
}
