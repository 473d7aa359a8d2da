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
    geometry::{aabb::Aabb3, segment::Segment3},
    index::octree::{ConstraintOctree, ConstraintRef},
    kernel::kernel::Kernel,
    numeric::scalar::Scalar,
};

use std::ops::{Add, Div, Mul, Sub};

/// One leaf pierced by the query segment, with the parametric range of
/// the overlap. `t` runs along the segment, 0 at its origin.
pub struct LeafCut<'a, T: Scalar> {
    pub constraints: &'a [ConstraintRef],
    pub region: &'a Aabb3<T>,
    pub t_enter: T,
    pub t_exit: T,
}

/// Lazy near-to-far walk over the leaves a segment passes through.
///
/// Children of each node are expanded in ascending entry-parameter
/// order; sibling regions are disjoint, so leaves pop globally ordered
/// from the segment origin outward. Callers computing a nearest hit can
/// stop as soon as their best hit precedes the next leaf's entry.
pub struct LeafWalk<'a, K: Kernel> {
    tree: &'a ConstraintOctree<K>,
    segment: Segment3<K::FT>,
    stack: Vec<(u32, K::FT, K::FT)>,
}

impl<'a, K: Kernel> LeafWalk<'a, K>
where
    for<'b> &'b K::FT: Add<&'b K::FT, Output = K::FT>
        + Sub<&'b K::FT, Output = K::FT>
        + Mul<&'b K::FT, Output = K::FT>
        + Div<&'b K::FT, Output = K::FT>,
{
    pub(crate) fn new(tree: &'a ConstraintOctree<K>, segment: Segment3<K::FT>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.nodes().first() {
            if let Some((t0, t1)) = root.region.clip_segment(&segment) {
                stack.push((0u32, t0, t1));
            }
        }
        LeafWalk {
            tree,
            segment,
            stack,
        }
    }
}

impl<'a, K: Kernel> Iterator for LeafWalk<'a, K>
where
    for<'b> &'b K::FT: Add<&'b K::FT, Output = K::FT>
        + Sub<&'b K::FT, Output = K::FT>
        + Mul<&'b K::FT, Output = K::FT>
        + Div<&'b K::FT, Output = K::FT>,
{
    type Item = LeafCut<'a, K::FT>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree: &'a ConstraintOctree<K> = self.tree;
        while let Some((id, t0, t1)) = self.stack.pop() {
            let node = &tree.nodes()[id as usize];
            match node.children {
                None => {
                    return Some(LeafCut {
                        constraints: &node.constraints,
                        region: &node.region,
                        t_enter: t0,
                        t_exit: t1,
                    });
                }
                Some(children) => {
                    let mut pierced: Vec<(u32, K::FT, K::FT)> = Vec::new();
                    for c in children {
                        let child = &tree.nodes()[c as usize];
                        if let Some((c0, c1)) = child.region.clip_segment(&self.segment) {
                            pierced.push((c, c0, c1));
                        }
                    }
                    // Descending by entry parameter, so the nearest child
                    // pops first.
                    pierced.sort_by(|x, y| K::FT::cmp_ref(&y.1, &x.1));
                    self.stack.extend(pierced);
                }
            }
        }
        None
    }
}
