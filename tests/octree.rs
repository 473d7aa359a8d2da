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

use polyoracle::error::OracleError;
use polyoracle::geometry::point::Point3;
use polyoracle::geometry::segment::Segment3;
use polyoracle::geometry::spatial_element::SpatialElement;
use polyoracle::index::octree::{ConstraintOctree, ConstraintRef, DegeneracyPolicy};
use polyoracle::kernel::F64Kernel;
use polyoracle::numeric::robust_f64::RobustF64;

fn p(x: f64, y: f64, z: f64) -> Point3<RobustF64> {
    Point3::from_vals([x, y, z])
}

/// Vertices and the 12 facets of the unit cube surface.
fn register_unit_cube(tree: &mut ConstraintOctree<F64Kernel>) {
    let corners = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 0.0, 1.0),
        p(1.0, 0.0, 1.0),
        p(0.0, 1.0, 1.0),
        p(1.0, 1.0, 1.0),
    ];
    for c in &corners {
        tree.register_vertex(c.clone()).unwrap();
    }
    let facets = [
        [0, 1, 3],
        [0, 3, 2],
        [4, 6, 7],
        [4, 7, 5],
        [0, 4, 5],
        [0, 5, 1],
        [2, 3, 7],
        [2, 7, 6],
        [0, 2, 6],
        [0, 6, 4],
        [1, 5, 7],
        [1, 7, 3],
    ];
    for [a, b, c] in facets {
        tree.register_facet(corners[a].clone(), corners[b].clone(), corners[c].clone())
            .unwrap();
    }
}

#[test]
fn test_register_rejects_non_finite() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();

    let err = tree
        .register_vertex(p(f64::NAN, 0.0, 0.0))
        .expect_err("NaN vertex must be rejected");
    assert!(matches!(err, OracleError::InvalidGeometry(_)));

    let err = tree
        .register_facet(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, f64::INFINITY, 0.0))
        .expect_err("non-finite facet must be rejected");
    assert!(matches!(err, OracleError::InvalidGeometry(_)));
}

#[test]
fn test_register_degenerate_facet_reject_policy() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();

    // two identical corner points
    let err = tree
        .register_facet(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0))
        .expect_err("duplicate corner must be rejected");
    assert!(matches!(err, OracleError::InvalidGeometry(_)));

    // collinear corners
    let err = tree
        .register_facet(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0))
        .expect_err("collinear corners must be rejected");
    assert!(matches!(err, OracleError::InvalidGeometry(_)));

    // earlier failures must not have polluted the buffers
    assert_eq!(tree.facet_count(), 0);
}

#[test]
fn test_register_degenerate_facet_warn_and_skip_policy() {
    let mut tree: ConstraintOctree<F64Kernel> =
        ConstraintOctree::with_policy(DegeneracyPolicy::WarnAndSkip);

    let registered = tree
        .register_facet(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0))
        .unwrap();
    assert!(!registered);
    assert_eq!(tree.facet_count(), 0);

    let registered = tree
        .register_facet(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
        .unwrap();
    assert!(registered);
    assert_eq!(tree.facet_count(), 1);
}

#[test]
fn test_lifecycle_errors() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();

    // queries before build
    assert_eq!(tree.bounding_box().unwrap_err(), OracleError::NotBuilt);
    let seg = Segment3::new(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0));
    assert!(tree.find_leaves_intersecting(&seg).is_err());

    // empty build
    assert!(matches!(
        tree.build().unwrap_err(),
        OracleError::InvalidGeometry(_)
    ));

    register_unit_cube(&mut tree);
    tree.build().unwrap();

    // second build and late registration
    assert_eq!(tree.build().unwrap_err(), OracleError::AlreadyBuilt);
    assert_eq!(
        tree.register_vertex(p(0.5, 0.5, 0.5)).unwrap_err(),
        OracleError::AlreadyBuilt
    );
}

#[test]
fn test_bounding_box_contains_all_constraints() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();
    tree.register_vertex(p(-3.0, 0.5, 2.0)).unwrap();
    tree.register_vertex(p(4.0, -1.0, 0.0)).unwrap();
    tree.register_facet(p(0.0, 0.0, 0.0), p(2.0, 0.0, 5.0), p(0.0, 7.0, 1.0))
        .unwrap();
    tree.build().unwrap();

    let bbox = tree.bounding_box().unwrap();
    for i in 0..tree.vertex_count() {
        assert!(bbox.contains_point(tree.vertex(i).unwrap()));
    }
    for i in 0..tree.facet_count() {
        let tri = tree.facet(i).unwrap();
        assert!(bbox.contains_point(&tri.a));
        assert!(bbox.contains_point(&tri.b));
        assert!(bbox.contains_point(&tri.c));
    }

    assert_eq!(bbox.min, p(-3.0, -1.0, 0.0));
    assert_eq!(bbox.max, p(4.0, 7.0, 5.0));
}

#[test]
fn test_cube_bbox_is_unit_box() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    let bbox = tree.bounding_box().unwrap();
    assert_eq!(bbox.min, p(0.0, 0.0, 0.0));
    assert_eq!(bbox.max, p(1.0, 1.0, 1.0));
}

#[test]
fn test_leaf_walk_is_near_to_far() {
    // force deep subdivision so the walk crosses many leaves
    let mut tree: ConstraintOctree<F64Kernel> =
        ConstraintOctree::with_limits(DegeneracyPolicy::Reject, 2, 5);
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    let seg = Segment3::new(&p(-0.5, 0.3, 0.4), &p(1.5, 0.7, 0.6));
    let entries: Vec<f64> = tree
        .find_leaves_intersecting(&seg)
        .unwrap()
        .map(|leaf| leaf.t_enter.0)
        .collect();

    assert!(!entries.is_empty());
    for w in entries.windows(2) {
        assert!(w[0] <= w[1] + 1e-12, "leaves out of order: {:?}", entries);
    }
}

#[test]
fn test_leaf_walk_misses_outside_segment() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    let seg = Segment3::new(&p(2.0, 2.0, 2.0), &p(3.0, 3.0, 3.0));
    assert_eq!(tree.find_leaves_intersecting(&seg).unwrap().count(), 0);
}

#[test]
fn test_walk_is_restartable() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    let seg = Segment3::new(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 2.0));
    let first: usize = tree.find_leaves_intersecting(&seg).unwrap().count();
    let second: usize = tree.find_leaves_intersecting(&seg).unwrap().count();
    assert_eq!(first, second);
    assert!(first > 0);
}

#[test]
fn test_facet_indexed_in_multiple_leaves() {
    // leaf capacity 1 forces splits right through the facets
    let mut tree: ConstraintOctree<F64Kernel> =
        ConstraintOctree::with_limits(DegeneracyPolicy::Reject, 1, 4);
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    // count how many leaves reference facet 0 (a bottom-face triangle)
    let mut owners = 0usize;
    for node in tree.nodes() {
        if node.is_leaf()
            && node
                .constraints
                .iter()
                .any(|c| matches!(c, ConstraintRef::Facet(0)))
        {
            owners += 1;
        }
    }
    assert!(owners > 1, "facet spanning a split must land in several leaves");
}

#[test]
fn test_leaf_containing() {
    let mut tree: ConstraintOctree<F64Kernel> = ConstraintOctree::new();
    register_unit_cube(&mut tree);
    tree.build().unwrap();

    let leaf = tree
        .leaf_containing(&p(0.1, 0.1, 0.1))
        .unwrap()
        .expect("point is inside the root box");
    assert!(leaf.region.contains_point(&p(0.1, 0.1, 0.1)));

    assert!(tree.leaf_containing(&p(5.0, 5.0, 5.0)).unwrap().is_none());
}
