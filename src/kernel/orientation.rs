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
use crate::geometry::vector::{Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

/// Unnormalized signed distance of `query` from the plane through
/// `reference` with normal `normal`: `(query - reference) · normal`.
///
/// The magnitude scales with `|normal|`; only the sign is geometric.
pub fn plane_distance<T: Scalar>(
    reference: &Point3<T>,
    normal: &Vector3<T>,
    query: &Point3<T>,
) -> T {
    (query - reference).dot(normal)
}

/// Returns:
/// - +1 if `query` is on the side `normal` points to
/// - -1 if on the opposite side
/// -  0 if on the plane
pub fn plane_side<T: Scalar>(
    reference: &Point3<T>,
    normal: &Vector3<T>,
    query: &Point3<T>,
) -> i8 {
    plane_distance(reference, normal, query).sign()
}

/// Signed volume of the parallelepiped spanned by `u`, `v`, `w`:
/// `u · (v × w)`.
pub fn triple<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>, w: &Vector3<T>) -> T {
    u.dot(&v.cross(w))
}
