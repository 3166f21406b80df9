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
    geometry::{
        edge_edge_intersect::segments_intersect, point::Point3, segment::Segment3,
        triangle::Triangle3, vector::VectorOps,
    },
    kernel::{orientation::plane_side, predicates::point_in_triangle},
    numeric::scalar::Scalar,
};

/// Where the line of `seg` crosses the plane of `tri`, scaled by
/// `k = seg.dir() · tri.normal()`.
///
/// With `X = a + t·dir` and `t = ((a0 - a) · n) / k`, this returns
/// `k·X = k·a + dir·((a0 - a) · n)`, which needs no division and stays
/// finite when `k` is zero.
pub fn scaled_plane_crossing<T: Scalar>(seg: &Segment3<T>, tri: &Triangle3<T>) -> Point3<T> {
    let n = tri.normal();
    let dir = seg.dir();
    let k = dir.dot(&n);
    let t_k = (&tri.apexes[0] - &seg.a).dot(&n);
    Point3::from(seg.a.as_vector().scale(&k) + dir.scale(&t_k))
}

/// True iff the closed segment `seg` meets the proper triangle `tri`.
pub fn segment_triangle_intersect<T: Scalar>(seg: &Segment3<T>, tri: &Triangle3<T>) -> bool {
    let n = tri.normal();
    let side_a = plane_side(&tri.apexes[0], &n, &seg.a);
    let side_b = plane_side(&tri.apexes[0], &n, &seg.b);

    match (side_a, side_b) {
        (0, 0) => {
            // lying in the plane
            return point_in_triangle(&seg.a, tri)
                || point_in_triangle(&seg.b, tri)
                || tri.edges().iter().any(|edge| segments_intersect(seg, edge));
        }
        (a, b) if a == b => return false,
        (0, _) if point_in_triangle(&seg.a, tri) => return true,
        (_, 0) if point_in_triangle(&seg.b, tri) => return true,
        _ => {}
    }

    // k is non-zero here: the endpoints are on different sides, or exactly
    // one of them is on the plane.
    let k = seg.dir().dot(&n);
    let scaled = Triangle3::new(
        &tri.apexes[0].scale(&k),
        &tri.apexes[1].scale(&k),
        &tri.apexes[2].scale(&k),
    );
    point_in_triangle(&scaled_plane_crossing(seg, tri), &scaled)
}
