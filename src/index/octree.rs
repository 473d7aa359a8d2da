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

use log::{debug, warn};

use crate::{
    error::OracleError,
    geometry::{
        aabb::{Aabb, Aabb3},
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
    },
    index::traversal::LeafWalk,
    kernel::{kernel::Kernel, predicates::are_equal},
    numeric::scalar::Scalar,
};

use std::ops::{Add, Div, Mul, Sub};

/// Default leaf fan-out threshold: a node holding more constraints than
/// this splits, until `MAX_DEPTH` stops the recursion.
pub const LEAF_CAPACITY: usize = 16;
pub const MAX_DEPTH: u8 = 10;

/// Reference to a registered constraint; stable for the index lifetime
/// (constraints are never removed once registered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintRef {
    Vertex(usize),
    Facet(usize),
    Segment(usize),
}

/// What registration does with a degenerate primitive. Fixed at
/// construction; `WarnAndSkip` reports the skip in the return value and
/// through the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneracyPolicy {
    #[default]
    Reject,
    WarnAndSkip,
}

/// One cell of the subdivision. Nodes live in an arena owned by the
/// octree; children are arena indices, never owning handles, so the tree
/// stays cycle-free and traversals stay allocation-cheap.
#[derive(Debug, Clone)]
pub struct OctreeNode<T: Scalar> {
    pub region: Aabb3<T>,
    pub constraints: Vec<ConstraintRef>,
    pub children: Option<[u32; 8]>,
}

impl<T: Scalar> OctreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Octree over constrained vertices, facets and sharp-feature segments.
///
/// Registrations are buffered; `build()` freezes the set, computes the
/// tight bounding box and subdivides top-down. A constraint is assigned
/// to every child cell its extent overlaps, so one facet may be indexed
/// in several leaves. After `build()` the index is immutable and safe
/// for concurrent read-only queries.
#[derive(Debug)]
pub struct ConstraintOctree<K: Kernel> {
    vertices: Vec<Point3<K::FT>>,
    facets: Vec<Triangle3<K::FT>>,
    segments: Vec<Segment3<K::FT>>,
    nodes: Vec<OctreeNode<K::FT>>,
    bbox: Option<Aabb3<K::FT>>,
    built: bool,
    policy: DegeneracyPolicy,
    leaf_capacity: usize,
    max_depth: u8,
}

impl<K: Kernel> ConstraintOctree<K>
where
    for<'a> &'a K::FT: Add<&'a K::FT, Output = K::FT>
        + Sub<&'a K::FT, Output = K::FT>
        + Mul<&'a K::FT, Output = K::FT>
        + Div<&'a K::FT, Output = K::FT>,
{
    pub fn new() -> Self {
        Self::with_policy(DegeneracyPolicy::default())
    }

    pub fn with_policy(policy: DegeneracyPolicy) -> Self {
        ConstraintOctree {
            vertices: Vec::new(),
            facets: Vec::new(),
            segments: Vec::new(),
            nodes: Vec::new(),
            bbox: None,
            built: false,
            policy,
            leaf_capacity: LEAF_CAPACITY,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the subdivision limits (fan-out threshold, maximum depth).
    pub fn with_limits(policy: DegeneracyPolicy, leaf_capacity: usize, max_depth: u8) -> Self {
        let mut tree = Self::with_policy(policy);
        tree.leaf_capacity = leaf_capacity.max(1);
        tree.max_depth = max_depth;
        tree
    }

    /// Record a point constraint. The point survives every subdivision
    /// untouched, which is what keeps sharp corners in the index.
    pub fn register_vertex(&mut self, p: Point3<K::FT>) -> Result<(), OracleError> {
        if self.built {
            return Err(OracleError::AlreadyBuilt);
        }
        if !p.is_finite() {
            return Err(OracleError::InvalidGeometry(
                "vertex has non-finite coordinates".into(),
            ));
        }
        self.vertices.push(p);
        Ok(())
    }

    /// Record a triangle constraint from its three corners.
    ///
    /// Returns `Ok(true)` when registered, `Ok(false)` when a degenerate
    /// triple was skipped under `DegeneracyPolicy::WarnAndSkip`.
    pub fn register_facet(
        &mut self,
        a: Point3<K::FT>,
        b: Point3<K::FT>,
        c: Point3<K::FT>,
    ) -> Result<bool, OracleError> {
        if self.built {
            return Err(OracleError::AlreadyBuilt);
        }
        let tri = Triangle3::new(&a, &b, &c);
        if !tri.is_finite() {
            return Err(OracleError::InvalidGeometry(
                "facet corner has non-finite coordinates".into(),
            ));
        }
        if tri.is_degenerate() {
            match self.policy {
                DegeneracyPolicy::Reject => {
                    return Err(OracleError::InvalidGeometry(
                        "degenerate facet: duplicate or collinear corners".into(),
                    ));
                }
                DegeneracyPolicy::WarnAndSkip => {
                    warn!("skipping degenerate facet at index {}", self.facets.len());
                    return Ok(false);
                }
            }
        }
        self.facets.push(tri);
        Ok(true)
    }

    /// Record a sharp-feature segment constraint.
    pub fn register_segment(
        &mut self,
        a: Point3<K::FT>,
        b: Point3<K::FT>,
    ) -> Result<bool, OracleError> {
        if self.built {
            return Err(OracleError::AlreadyBuilt);
        }
        if !a.is_finite() || !b.is_finite() {
            return Err(OracleError::InvalidGeometry(
                "segment endpoint has non-finite coordinates".into(),
            ));
        }
        if are_equal(&a, &b, &K::FT::tolerance()) {
            match self.policy {
                DegeneracyPolicy::Reject => {
                    return Err(OracleError::InvalidGeometry(
                        "degenerate segment: coincident endpoints".into(),
                    ));
                }
                DegeneracyPolicy::WarnAndSkip => {
                    warn!("skipping degenerate segment at index {}", self.segments.len());
                    return Ok(false);
                }
            }
        }
        self.segments.push(Segment3::new(&a, &b));
        Ok(true)
    }

    /// One-shot build: bounding box, then top-down subdivision.
    /// A second call fails with `AlreadyBuilt`; queries before the first
    /// call fail with `NotBuilt`.
    pub fn build(&mut self) -> Result<(), OracleError> {
        if self.built {
            return Err(OracleError::AlreadyBuilt);
        }
        let bbox = {
            let mut extents = self
                .vertices
                .iter()
                .map(Aabb::from_point)
                .chain(self.facets.iter().map(|t| t.bbox()))
                .chain(self.segments.iter().map(|s| Aabb::from_points(&s.a, &s.b)));
            let Some(first) = extents.next() else {
                return Err(OracleError::InvalidGeometry(
                    "cannot build an index with no registered constraints".into(),
                ));
            };
            extents.fold(first, |acc, e| acc.union(&e))
        };

        let mut refs = Vec::with_capacity(self.constraint_count());
        refs.extend((0..self.vertices.len()).map(ConstraintRef::Vertex));
        refs.extend((0..self.facets.len()).map(ConstraintRef::Facet));
        refs.extend((0..self.segments.len()).map(ConstraintRef::Segment));

        self.nodes.clear();
        self.nodes.push(OctreeNode {
            region: bbox.clone(),
            constraints: refs,
            children: None,
        });
        self.subdivide(0, 0);

        self.bbox = Some(bbox);
        self.built = true;
        debug!(
            "octree built: {} constraints over {} nodes",
            self.constraint_count(),
            self.nodes.len()
        );
        Ok(())
    }

    fn subdivide(&mut self, id: usize, depth: u8) {
        if self.nodes[id].constraints.len() <= self.leaf_capacity || depth >= self.max_depth {
            return;
        }
        let region = self.nodes[id].region.clone();
        let refs = std::mem::take(&mut self.nodes[id].constraints);
        let extents: Vec<Aabb3<K::FT>> = refs.iter().map(|c| self.extent_of(c)).collect();

        let mut children = [0u32; 8];
        for (k, octant) in region.octants().into_iter().enumerate() {
            let mut kept = Vec::new();
            for (cref, extent) in refs.iter().zip(&extents) {
                if extent.intersects(&octant) {
                    kept.push(*cref);
                }
            }
            children[k] = self.nodes.len() as u32;
            self.nodes.push(OctreeNode {
                region: octant,
                constraints: kept,
                children: None,
            });
        }
        self.nodes[id].children = Some(children);

        for c in children {
            self.subdivide(c as usize, depth + 1);
        }
    }

    fn extent_of(&self, cref: &ConstraintRef) -> Aabb3<K::FT> {
        match cref {
            ConstraintRef::Vertex(i) => Aabb::from_point(&self.vertices[*i]),
            ConstraintRef::Facet(i) => self.facets[*i].bbox(),
            ConstraintRef::Segment(i) => {
                let s = &self.segments[*i];
                Aabb::from_points(&s.a, &s.b)
            }
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The tight box computed by `build()`.
    pub fn bounding_box(&self) -> Result<&Aabb3<K::FT>, OracleError> {
        self.bbox.as_ref().ok_or(OracleError::NotBuilt)
    }

    /// Lazy near-to-far walk over the leaves a segment passes through.
    /// The walk is finite and restartable: call again for a fresh cursor.
    pub fn find_leaves_intersecting(
        &self,
        seg: &Segment3<K::FT>,
    ) -> Result<LeafWalk<'_, K>, OracleError> {
        if !self.built {
            return Err(OracleError::NotBuilt);
        }
        Ok(LeafWalk::new(self, seg.clone()))
    }

    /// Point location: the leaf whose region holds `p`, or `None` when
    /// `p` is outside the root box.
    pub fn leaf_containing(
        &self,
        p: &Point3<K::FT>,
    ) -> Result<Option<&OctreeNode<K::FT>>, OracleError> {
        if !self.built {
            return Err(OracleError::NotBuilt);
        }
        let mut id = 0usize;
        if !self.nodes[id].region.contains_point(p) {
            return Ok(None);
        }
        loop {
            match self.nodes[id].children {
                None => return Ok(Some(&self.nodes[id])),
                Some(children) => {
                    let next = children
                        .iter()
                        .find(|c| self.nodes[**c as usize].region.contains_point(p));
                    match next {
                        Some(c) => id = *c as usize,
                        // Tolerance can open hairline gaps between octants;
                        // the enclosing cell is still a correct answer.
                        None => return Ok(Some(&self.nodes[id])),
                    }
                }
            }
        }
    }

    pub fn constraint_count(&self) -> usize {
        self.vertices.len() + self.facets.len() + self.segments.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn vertex(&self, i: usize) -> Option<&Point3<K::FT>> {
        self.vertices.get(i)
    }

    pub fn facet(&self, i: usize) -> Option<&Triangle3<K::FT>> {
        self.facets.get(i)
    }

    pub fn segment(&self, i: usize) -> Option<&Segment3<K::FT>> {
        self.segments.get(i)
    }

    pub fn nodes(&self) -> &[OctreeNode<K::FT>] {
        &self.nodes
    }
}

impl<K: Kernel> Default for ConstraintOctree<K>
where
    for<'a> &'a K::FT: Add<&'a K::FT, Output = K::FT>
        + Sub<&'a K::FT, Output = K::FT>
        + Mul<&'a K::FT, Output = K::FT>
        + Div<&'a K::FT, Output = K::FT>,
{
    fn default() -> Self {
        Self::new()
    }
}
