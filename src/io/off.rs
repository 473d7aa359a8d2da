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

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    geometry::{point::Point, spatial_element::SpatialElement},
    numeric::scalar::Scalar,
    oracle::source::IndexedMesh,
};

/// Read a polyhedron description from OFF.
/// Format:
///   OFF
///   <numVertices> <numFaces> <numEdges>
///   x y z
///   ...
///   k i j ...   (zero-based indices, k of them)
///
/// Faces keep their source arity; the surface loader is the one that
/// rejects non-triangles, so that callers see `MalformedMesh` with the
/// offending facet index instead of a parse failure.
pub fn read_off<T: Scalar, R: BufRead>(reader: R) -> io::Result<IndexedMesh<T>> {
    // Helper: iterate non-empty, non-comment tokens across lines
    fn tokenize<R: BufRead>(r: R) -> io::Result<Vec<String>> {
        let mut toks = Vec::new();
        for line in r.lines() {
            let l = line?;
            let trimmed = l.split('#').next().unwrap_or("").trim();
            if trimmed.is_empty() {
                continue;
            }
            toks.extend(trimmed.split_whitespace().map(|s| s.to_string()));
        }
        Ok(toks)
    }

    let toks = tokenize(reader)?;
    if toks.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "OFF: empty input",
        ));
    }

    let mut it = toks.into_iter();

    // Header token must be OFF
    let header = it
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "OFF: missing header"))?;
    if header != "OFF" {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("OFF: expected 'OFF', got '{}'", header),
        ));
    }

    let mut next_count = |what: &str| -> io::Result<usize> {
        it.next()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, format!("OFF: missing {what}"))
            })?
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("OFF: bad {what}")))
    };

    let vcount = next_count("vertex count")?;
    let fcount = next_count("face count")?;
    let _ecount = next_count("edge count")?; // ignored

    let mut mesh = IndexedMesh::new();
    mesh.vertices.reserve(vcount);
    mesh.facets.reserve(fcount);

    let mut next_coord = |axis: &str| -> io::Result<f64> {
        it.next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("OFF: incomplete vertex ({axis})"),
                )
            })?
            .parse()
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("OFF: bad vertex {axis}"),
                )
            })
    };

    for _ in 0..vcount {
        let x = next_coord("x")?;
        let y = next_coord("y")?;
        let z = next_coord("z")?;
        mesh.add_vertex(Point::<T, 3>::from_vals([x, y, z]));
    }

    let mut next_index = |what: &str| -> io::Result<usize> {
        it.next()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, format!("OFF: missing {what}"))
            })?
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("OFF: bad {what}")))
    };

    for _ in 0..fcount {
        let poly_size = next_index("face vertex count")?;
        let mut corners = Vec::with_capacity(poly_size);
        for _ in 0..poly_size {
            corners.push(next_index("face index")?);
        }
        mesh.add_facet(corners);
    }

    Ok(mesh)
}

/// Read an OFF file from disk.
pub fn read_off_path<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<IndexedMesh<T>> {
    let file = File::open(path)?;
    read_off(BufReader::new(file))
}
