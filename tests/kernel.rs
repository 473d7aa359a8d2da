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

use polyoracle::geometry::point::{Point3, PointOps};
use polyoracle::geometry::segment::{Segment3, SegmentOps};
use polyoracle::geometry::spatial_element::SpatialElement;
use polyoracle::geometry::triangle::Triangle3;
use polyoracle::geometry::vector::{Vector3, VectorOps};
use polyoracle::kernel::{
    BigRationalKernel, F64Kernel, Kernel, TriangleCrossing, segment_triangle_crossing,
};
use polyoracle::numeric::exact_rational::ExactRational;
use polyoracle::numeric::robust_f64::RobustF64;
use polyoracle::numeric::scalar::Scalar;
use polyoracle::operations::{Pow, Zero};

fn p(x: f64, y: f64, z: f64) -> Point3<RobustF64> {
    Point3::from_vals([x, y, z])
}

fn pq(x: i32, y: i32, z: i32) -> Point3<ExactRational> {
    Point3::from_vals([x, y, z])
}

#[test]
fn test_scalar_ops() {
    assert!((RobustF64(2.0).pow(3).0 - 8.0).abs() < 1e-9);
    assert_eq!(ExactRational::from(2).pow(3), ExactRational::from(8));
    assert_eq!(
        ExactRational::from_num_den(-3, 4).sign(),
        -1,
    );
}

#[test]
fn test_segment_parametric_ops() {
    let seg = Segment3::new(&p(0.0, 0.0, 0.0), &p(2.0, 0.0, 2.0));

    let mid = seg.midpoint();
    assert!((mid.coords[0].0 - 1.0).abs() < 1e-9);
    assert!((mid.coords[2].0 - 1.0).abs() < 1e-9);

    let at = seg.point_at(&RobustF64(0.25));
    assert!((at.coords[0].0 - 0.5).abs() < 1e-9);
    assert!((at.coords[2].0 - 0.5).abs() < 1e-9);

    let inv = seg.inverse();
    assert_eq!(inv.a, seg.b);
    assert_eq!(inv.b, seg.a);

    assert!((seg.length_squared().0 - 8.0).abs() < 1e-9);
}

#[test]
fn test_vector_and_point_ops() {
    let u = Vector3::new([RobustF64(3.0), RobustF64(0.0), RobustF64(4.0)]);
    assert!((u.norm().0 - 5.0).abs() < 1e-9);
    assert!((u.norm2().0 - 25.0).abs() < 1e-9);

    let d = p(1.0, 2.0, 2.0).distance_squared_to(&p(0.0, 0.0, 0.0));
    assert!((d.0 - 9.0).abs() < 1e-9);
}

#[test]
fn test_orient3d_signs() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 0.0, 0.0);
    let c = p(0.0, 1.0, 0.0);

    let above = p(0.0, 0.0, 1.0);
    let below = p(0.0, 0.0, -1.0);
    let on = p(0.25, 0.25, 0.0);

    assert!(F64Kernel::orient3d(&a, &b, &c, &above).is_positive());
    assert!(F64Kernel::orient3d(&a, &b, &c, &below).is_negative());
    assert!(F64Kernel::orient3d(&a, &b, &c, &on).is_zero());
}

#[test]
fn test_orient3d_exact() {
    let a = pq(0, 0, 0);
    let b = pq(1, 0, 0);
    let c = pq(0, 1, 0);
    let d = pq(0, 0, 1);

    assert_eq!(
        BigRationalKernel::orient3d(&a, &b, &c, &d),
        ExactRational::from(1)
    );
}

#[test]
fn test_are_equal_and_collinear() {
    let a = p(1.0, 2.0, 3.0);
    let b = p(1.0 + 1e-12, 2.0, 3.0);
    let c = p(1.0 + 1e-3, 2.0, 3.0);

    let eps = RobustF64::tolerance();
    assert!(F64Kernel::are_equal(&a, &b, &eps));
    assert!(!F64Kernel::are_equal(&a, &c, &eps));

    assert!(F64Kernel::are_collinear(
        &p(0.0, 0.0, 0.0),
        &p(1.0, 1.0, 1.0),
        &p(2.0, 2.0, 2.0)
    ));
    assert!(!F64Kernel::are_collinear(
        &p(0.0, 0.0, 0.0),
        &p(1.0, 1.0, 1.0),
        &p(2.0, 2.0, 2.001)
    ));
}

#[test]
fn test_segment_triangle_interior_crossing() {
    let tri = Triangle3::new(&p(0.0, 0.0, 0.0), &p(4.0, 0.0, 0.0), &p(0.0, 4.0, 0.0));
    let seg = Segment3::new(&p(1.0, 1.0, -1.0), &p(1.0, 1.0, 1.0));

    match segment_triangle_crossing(&seg, &tri) {
        TriangleCrossing::Interior { t, point } => {
            assert!((t.0 - 0.5).abs() < 1e-9);
            assert!((point.coords[0].0 - 1.0).abs() < 1e-9);
            assert!((point.coords[1].0 - 1.0).abs() < 1e-9);
            assert!(point.coords[2].0.abs() < 1e-9);
        }
        other => panic!("expected interior crossing, got {:?}", other),
    }
}

#[test]
fn test_segment_triangle_edge_graze_is_boundary() {
    let tri = Triangle3::new(&p(0.0, 0.0, 0.0), &p(4.0, 0.0, 0.0), &p(0.0, 4.0, 0.0));
    // Pierces the edge y = 0 of the triangle.
    let seg = Segment3::new(&p(2.0, 0.0, -1.0), &p(2.0, 0.0, 1.0));

    assert!(matches!(
        segment_triangle_crossing(&seg, &tri),
        TriangleCrossing::Boundary { .. }
    ));

    // Pierces the corner itself.
    let corner = Segment3::new(&p(0.0, 0.0, -1.0), &p(0.0, 0.0, 1.0));
    assert!(matches!(
        segment_triangle_crossing(&corner, &tri),
        TriangleCrossing::Boundary { .. }
    ));
}

#[test]
fn test_segment_triangle_miss_and_short() {
    let tri = Triangle3::new(&p(0.0, 0.0, 0.0), &p(4.0, 0.0, 0.0), &p(0.0, 4.0, 0.0));

    // Crosses the supporting plane outside the triangle.
    let outside = Segment3::new(&p(3.0, 3.0, -1.0), &p(3.0, 3.0, 1.0));
    assert!(matches!(
        segment_triangle_crossing(&outside, &tri),
        TriangleCrossing::None
    ));

    // Stops short of the plane.
    let short = Segment3::new(&p(1.0, 1.0, -2.0), &p(1.0, 1.0, -1.0));
    assert!(matches!(
        segment_triangle_crossing(&short, &tri),
        TriangleCrossing::None
    ));
}

#[test]
fn test_segment_triangle_coplanar() {
    let tri = Triangle3::new(&p(0.0, 0.0, 0.0), &p(4.0, 0.0, 0.0), &p(0.0, 4.0, 0.0));

    // In-plane segment overlapping the triangle's extent.
    let inplane = Segment3::new(&p(-1.0, 1.0, 0.0), &p(2.0, 1.0, 0.0));
    assert!(matches!(
        segment_triangle_crossing(&inplane, &tri),
        TriangleCrossing::Coplanar
    ));

    // In-plane but far away: not a contact at all.
    let far = Segment3::new(&p(10.0, 10.0, 0.0), &p(12.0, 10.0, 0.0));
    assert!(matches!(
        segment_triangle_crossing(&far, &tri),
        TriangleCrossing::None
    ));

    // Parallel to the plane but off it.
    let above = Segment3::new(&p(-1.0, 1.0, 1.0), &p(2.0, 1.0, 1.0));
    assert!(matches!(
        segment_triangle_crossing(&above, &tri),
        TriangleCrossing::None
    ));
}

#[test]
fn test_segment_triangle_crossing_exact() {
    let tri = Triangle3::new(&pq(0, 0, 0), &pq(4, 0, 0), &pq(0, 4, 0));
    let seg = Segment3::new(&pq(1, 1, -1), &pq(1, 1, 2));

    match segment_triangle_crossing(&seg, &tri) {
        TriangleCrossing::Interior { t, point } => {
            assert_eq!(t, ExactRational::from_num_den(1, 3));
            assert_eq!(point, pq(1, 1, 0));
        }
        other => panic!("expected interior crossing, got {:?}", other),
    }
}

#[test]
fn test_degenerate_triangle_detection() {
    // duplicate corner
    let dup = Triangle3::new(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(1.0, 0.0, 0.0));
    assert!(dup.is_degenerate());

    // collinear corners
    let collinear = Triangle3::new(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0), &p(2.0, 2.0, 2.0));
    assert!(collinear.is_degenerate());

    let sound = Triangle3::new(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0));
    assert!(!sound.is_degenerate());
}
