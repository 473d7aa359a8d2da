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

use log::debug;

use crate::{
    error::OracleError,
    geometry::{aabb::Aabb3, point::Point3, triangle::Triangle3},
    index::octree::{ConstraintOctree, DegeneracyPolicy},
    kernel::kernel::Kernel,
    oracle::{
        oracle::{FacetId, PolyhedralOracle},
        source::MeshSource,
    },
};

use std::{
    ops::{Add, Div, Mul, Sub},
    time::{Duration, Instant},
};

/// Construction-time configuration. Fixed once the surface is created.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Build the sharp-feature (subsegments) index. Off by default;
    /// only useful when the source marks feature edges.
    pub build_subsegments: bool,
    /// What registration does with degenerate facets/segments.
    pub degeneracy_policy: DegeneracyPolicy,
    /// Perturbed-ray budget of the inside/outside classifier.
    pub max_parity_retries: usize,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        SurfaceOptions {
            build_subsegments: false,
            degeneracy_policy: DegeneracyPolicy::default(),
            max_parity_retries: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    LoadMesh,
    BuildSubfacets,
    BuildSubsegments,
}

/// Caller-supplied timing/observability hook for the construction
/// sequence. Queries are never observed; only build stages report.
pub trait BuildObserver {
    fn on_stage(&mut self, stage: BuildStage, elapsed: Duration);
}

pub struct NoopObserver;

impl BuildObserver for NoopObserver {
    fn on_stage(&mut self, _stage: BuildStage, _elapsed: Duration) {}
}

/// A triangulated polyhedron indexed for spatial queries: one octree over
/// the facet/vertex constraints, one (optional) octree over sharp-feature
/// segments, plus the ordered input point list retained for downstream
/// consumers.
///
/// Lifecycle: `new` -> `load_source`/registration -> `build` -> queries
/// through [`PolyhedralOracle`]. Construction is single-threaded; the
/// built surface is immutable and safe for unlimited concurrent readers.
#[derive(Debug)]
pub struct PolyhedralSurface<K: Kernel> {
    subfacets: ConstraintOctree<K>,
    subsegments: ConstraintOctree<K>,
    input_points: Vec<Point3<K::FT>>,
    options: SurfaceOptions,
}

impl<K: Kernel> PolyhedralSurface<K>
where
    for<'a> &'a K::FT: Add<&'a K::FT, Output = K::FT>
        + Sub<&'a K::FT, Output = K::FT>
        + Mul<&'a K::FT, Output = K::FT>
        + Div<&'a K::FT, Output = K::FT>,
{
    pub fn new(options: SurfaceOptions) -> Self {
        PolyhedralSurface {
            subfacets: ConstraintOctree::with_policy(options.degeneracy_policy),
            subsegments: ConstraintOctree::with_policy(options.degeneracy_policy),
            input_points: Vec::new(),
            options,
        }
    }

    /// Load and build in one go.
    pub fn from_source<S: MeshSource<K::FT>>(
        source: &S,
        options: SurfaceOptions,
    ) -> Result<Self, OracleError> {
        Self::from_source_with_observer(source, options, &mut NoopObserver)
    }

    pub fn from_source_with_observer<S: MeshSource<K::FT>>(
        source: &S,
        options: SurfaceOptions,
        observer: &mut dyn BuildObserver,
    ) -> Result<Self, OracleError> {
        let mut surface = Self::new(options);
        let start = Instant::now();
        surface.load_source(source)?;
        observer.on_stage(BuildStage::LoadMesh, start.elapsed());
        surface.build_with_observer(observer)?;
        Ok(surface)
    }

    /// Register everything the source exposes: every vertex as a point
    /// constraint (and into the retained point list), every facet as a
    /// triangle constraint, feature edges into the subsegments index when
    /// that index is enabled. Fails with `MalformedMesh` on any facet
    /// that does not resolve to exactly three vertices.
    pub fn load_source(&mut self, source: &impl MeshSource<K::FT>) -> Result<(), OracleError> {
        self.input_points.reserve(source.vertex_count());
        for p in source.vertices() {
            self.subfacets.register_vertex(p.clone())?;
            self.input_points.push(p.clone());
        }

        let vertices = source.vertices();
        let mut skipped = 0usize;
        for f in 0..source.facet_count() {
            let corners = source.facet_vertices(f);
            if corners.len() != 3 {
                return Err(OracleError::MalformedMesh {
                    facet: f,
                    arity: corners.len(),
                });
            }
            let resolve = |i: usize| -> Result<Point3<K::FT>, OracleError> {
                vertices.get(i).cloned().ok_or_else(|| {
                    OracleError::InvalidGeometry(format!(
                        "facet {f} references missing vertex {i}"
                    ))
                })
            };
            let a = resolve(corners[0])?;
            let b = resolve(corners[1])?;
            let c = resolve(corners[2])?;
            if !self.subfacets.register_facet(a, b, c)? {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!("loader skipped {skipped} degenerate facets");
        }

        if self.options.build_subsegments {
            let resolve = |i: usize| -> Result<Point3<K::FT>, OracleError> {
                vertices.get(i).cloned().ok_or_else(|| {
                    OracleError::InvalidGeometry(format!(
                        "feature edge references missing vertex {i}"
                    ))
                })
            };
            for &(i, j) in source.feature_edges() {
                self.subsegments.register_segment(resolve(i)?, resolve(j)?)?;
            }
        }
        Ok(())
    }

    /// One-shot build of the indices. Must complete before any query;
    /// a second call fails with `AlreadyBuilt`.
    pub fn build(&mut self) -> Result<(), OracleError> {
        self.build_with_observer(&mut NoopObserver)
    }

    pub fn build_with_observer(
        &mut self,
        observer: &mut dyn BuildObserver,
    ) -> Result<(), OracleError> {
        let start = Instant::now();
        self.subfacets.build()?;
        let elapsed = start.elapsed();
        observer.on_stage(BuildStage::BuildSubfacets, elapsed);
        debug!(
            "subfacets index built in {:?}: {} facets, {} vertices",
            elapsed,
            self.subfacets.facet_count(),
            self.subfacets.vertex_count()
        );

        if self.options.build_subsegments && self.subsegments.segment_count() > 0 {
            let start = Instant::now();
            self.subsegments.build()?;
            observer.on_stage(BuildStage::BuildSubsegments, start.elapsed());
        }
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.subfacets.is_built()
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// The tight box around every registered constraint.
    pub fn bounding_box(&self) -> Result<&Aabb3<K::FT>, OracleError> {
        self.subfacets.bounding_box()
    }

    pub fn subfacets(&self) -> &ConstraintOctree<K> {
        &self.subfacets
    }

    pub fn subsegments(&self) -> &ConstraintOctree<K> {
        &self.subsegments
    }

    /// The ordered input points, as registered.
    pub fn input_points(&self) -> &[Point3<K::FT>] {
        &self.input_points
    }

    pub fn facet(&self, id: FacetId) -> Option<&Triangle3<K::FT>> {
        self.subfacets.facet(id.0)
    }

    /// The query interface handed to the refinement driver.
    pub fn oracle(&self) -> PolyhedralOracle<'_, K> {
        PolyhedralOracle::new(self)
    }
}
