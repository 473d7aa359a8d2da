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
use polyoracle::kernel::{BigRationalKernel, F64Kernel};
use polyoracle::numeric::exact_rational::ExactRational;
use polyoracle::numeric::robust_f64::RobustF64;
use polyoracle::numeric::scalar::Scalar;
use polyoracle::oracle::source::IndexedMesh;
use polyoracle::oracle::surface::{PolyhedralSurface, SurfaceOptions};

fn p(x: f64, y: f64, z: f64) -> Point3<RobustF64> {
    Point3::from_vals([x, y, z])
}

fn unit_cube_mesh() -> IndexedMesh<RobustF64> {
    let mut mesh = IndexedMesh::new();
    for (x, y, z) in [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
        (1.0, 1.0, 1.0),
    ] {
        mesh.add_vertex(p(x, y, z));
    }
    for corners in [
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
    ] {
        mesh.add_facet(corners.to_vec());
    }
    mesh
}

fn unit_cube_surface() -> PolyhedralSurface<F64Kernel> {
    PolyhedralSurface::from_source(&unit_cube_mesh(), SurfaceOptions::default()).unwrap()
}

#[test]
fn test_oracle_not_ready_before_build() {
    let mut surface: PolyhedralSurface<F64Kernel> =
        PolyhedralSurface::new(SurfaceOptions::default());
    surface.load_source(&unit_cube_mesh()).unwrap();

    let oracle = surface.oracle();
    let seg = Segment3::new(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 2.0));
    assert_eq!(oracle.bounding_box().unwrap_err(), OracleError::NotReady);
    assert_eq!(oracle.intersect(&seg).unwrap_err(), OracleError::NotReady);
    assert_eq!(
        oracle.is_in_volume(&p(0.5, 0.5, 0.5)).unwrap_err(),
        OracleError::NotReady
    );
}

#[test]
fn test_cube_bounding_box() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    let bbox = oracle.bounding_box().unwrap();
    assert_eq!(bbox.min, p(0.0, 0.0, 0.0));
    assert_eq!(bbox.max, p(1.0, 1.0, 1.0));
}

#[test]
fn test_cube_full_segment_returns_nearest_crossing() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    let seg = Segment3::new(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 2.0));
    let hit = oracle.intersect(&seg).unwrap().expect("segment crosses the cube");

    // nearest crossing is the bottom face, z = 0, at t = 1/3
    assert!((hit.t.0 - 1.0 / 3.0).abs() < 1e-9);
    assert!((hit.point.coords[0].0 - 0.5).abs() < 1e-9);
    assert!((hit.point.coords[1].0 - 0.5).abs() < 1e-9);
    assert!(hit.point.coords[2].0.abs() < 1e-9);

    // the reported facet really lies in the z = 0 plane
    let tri = surface.facet(hit.facet).expect("facet id resolves");
    assert!(tri.a.coords[2].0.abs() < 1e-9);
    assert!(tri.b.coords[2].0.abs() < 1e-9);
    assert!(tri.c.coords[2].0.abs() < 1e-9);
}

#[test]
fn test_cube_half_segments_find_both_faces() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    let lower = Segment3::new(&p(0.5, 0.5, -1.0), &p(0.5, 0.5, 0.5));
    let hit = oracle.intersect(&lower).unwrap().expect("crosses z = 0");
    assert!(hit.point.coords[2].0.abs() < 1e-9);

    let upper = Segment3::new(&p(0.5, 0.5, 0.5), &p(0.5, 0.5, 2.0));
    let hit = oracle.intersect(&upper).unwrap().expect("crosses z = 1");
    assert!((hit.point.coords[2].0 - 1.0).abs() < 1e-9);
}

#[test]
fn test_segment_outside_bounding_box_misses() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    let outside = Segment3::new(&p(2.0, 2.0, -1.0), &p(2.0, 2.0, 2.0));
    assert!(oracle.intersect(&outside).unwrap().is_none());

    let inside_only = Segment3::new(&p(0.4, 0.4, 0.4), &p(0.6, 0.6, 0.6));
    assert!(oracle.intersect(&inside_only).unwrap().is_none());
}

#[test]
fn test_single_facet_analytic_intersection() {
    let mut mesh: IndexedMesh<RobustF64> = IndexedMesh::new();
    mesh.add_vertex(p(0.0, 0.0, 0.0));
    mesh.add_vertex(p(4.0, 0.0, 0.0));
    mesh.add_vertex(p(0.0, 4.0, 0.0));
    mesh.add_facet(vec![0, 1, 2]);

    let surface: PolyhedralSurface<F64Kernel> =
        PolyhedralSurface::from_source(&mesh, SurfaceOptions::default()).unwrap();
    let oracle = surface.oracle();

    let seg = Segment3::new(&p(1.0, 1.0, -1.0), &p(1.0, 1.0, 1.0));
    let hit = oracle.intersect(&seg).unwrap().expect("crosses the facet");
    assert_eq!(hit.facet.0, 0);
    assert!((hit.t.0 - 0.5).abs() < 1e-9);
    assert!((hit.point.coords[0].0 - 1.0).abs() < 1e-9);
    assert!((hit.point.coords[1].0 - 1.0).abs() < 1e-9);
    assert!(hit.point.coords[2].0.abs() < 1e-9);
}

#[test]
fn test_single_facet_exact_intersection() {
    let mut mesh: IndexedMesh<ExactRational> = IndexedMesh::new();
    mesh.add_vertex(Point3::from_vals([0, 0, 0]));
    mesh.add_vertex(Point3::from_vals([4, 0, 0]));
    mesh.add_vertex(Point3::from_vals([0, 4, 0]));
    mesh.add_facet(vec![0, 1, 2]);

    let surface: PolyhedralSurface<BigRationalKernel> =
        PolyhedralSurface::from_source(&mesh, SurfaceOptions::default()).unwrap();
    let oracle = surface.oracle();

    let seg = Segment3::new(
        &Point3::from_vals([1, 1, -1]),
        &Point3::from_vals([1, 1, 2]),
    );
    let hit = oracle.intersect(&seg).unwrap().expect("crosses the facet");
    assert_eq!(hit.t, ExactRational::from_num_den(1, 3));
    assert_eq!(hit.point, Point3::from_vals([1, 1, 0]));
}

#[test]
fn test_is_in_volume_on_cube() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    assert!(oracle.is_in_volume(&p(0.5, 0.5, 0.5)).unwrap());
    assert!(!oracle.is_in_volume(&p(2.0, 2.0, 2.0)).unwrap());
}

#[test]
fn test_is_in_volume_grid_sampling() {
    let surface = unit_cube_surface();
    let oracle = surface.oracle();

    // interior grid, safely away from facets
    for x in [0.2, 0.45, 0.7] {
        for y in [0.15, 0.55, 0.8] {
            for z in [0.25, 0.5, 0.75] {
                assert!(
                    oracle.is_in_volume(&p(x, y, z)).unwrap(),
                    "({x},{y},{z}) should be inside"
                );
            }
        }
    }

    // exterior samples all around the box
    for q in [
        p(-0.5, 0.5, 0.5),
        p(1.5, 0.5, 0.5),
        p(0.5, -0.5, 0.5),
        p(0.5, 1.5, 0.5),
        p(0.5, 0.5, -0.5),
        p(0.5, 0.5, 1.5),
        p(2.0, 2.0, 2.0),
    ] {
        assert!(!oracle.is_in_volume(&q).unwrap());
    }
}

#[test]
fn test_concurrent_queries() {
    let surface = unit_cube_surface();

    std::thread::scope(|scope| {
        for i in 0..4 {
            let surface = &surface;
            scope.spawn(move || {
                let oracle = surface.oracle();
                let z = -1.0 + i as f64 * 0.1;
                let seg = Segment3::new(&p(0.4, 0.4, z), &p(0.4, 0.4, 2.0));
                let hit = oracle.intersect(&seg).unwrap().expect("crosses the cube");
                assert!(hit.point.coords[2].0.abs() < 1e-9);
                assert!(oracle.is_in_volume(&p(0.4, 0.4, 0.4)).unwrap());
            });
        }
    });
}
