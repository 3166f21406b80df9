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

use crate::geometry::point::Point3;
use crate::geometry::segment::Segment3;
use crate::geometry::triangle::Triangle3;
use crate::geometry::vector::{Vector3, VectorOps};
use crate::kernel::orientation::plane_distance;
use crate::numeric::scalar::Scalar;

/// True iff `p` lies on the closed segment `seg`.
///
/// With `u = a - p` and `v = b - p`, `p` is on the line through `a` and `b`
/// iff `u` and `v` are parallel, i.e. `(u·v)² = |u|²|v|²` (Cauchy-Schwarz
/// equality), and between the endpoints iff `u·v <= 0`. An endpoint
/// makes one of the vectors zero and passes both tests.
pub fn point_on_segment<T: Scalar>(p: &Point3<T>, seg: &Segment3<T>) -> bool {
    let u = &seg.a - p;
    let v = &seg.b - p;
    let uv = u.dot(&v);
    uv.squared() == u.norm_squared() * v.norm_squared() && !uv.is_positive()
}

/// True iff `p` lies inside or on the boundary of `tri`.
///
/// `p` must first be coplanar with `tri`. The fan `(p, a_i, a_{i+1})` is then
/// built; each fan normal is parallel to the triangle normal `n`, so
/// orienting it by `sign(n · n_i)` and summing reconstructs `n` exactly
/// when `p` is not outside any edge. Outside, the fan areas overlap and
/// the oriented sum is strictly longer than `n`.
///
/// Only meaningful for proper triangles: a zero normal passes every test.
pub fn point_in_triangle<T: Scalar>(p: &Point3<T>, tri: &Triangle3<T>) -> bool {
    let n = tri.normal();
    if !plane_distance(&tri.apexes[0], &n, p).is_zero() {
        return false;
    }

    let mut sum = Vector3::zero();
    for i in 0..3 {
        let sub = Triangle3::new(p, tri.apex(i), tri.apex(i + 1)).normal();
        let s = T::from_sign(n.dot(&sub).sign());
        sum = sum + sub.scale(&s);
    }
    sum == n
}
