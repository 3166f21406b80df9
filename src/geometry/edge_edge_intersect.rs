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
    geometry::{segment::Segment3, vector::VectorOps},
    kernel::{orientation::triple, predicates::point_on_segment},
    numeric::scalar::Scalar,
};

/// True iff the closed segments `s1` and `s2` share a point.
///
/// Skew segments are rejected by the triple product of their offset and
/// directions. For coplanar segments the in-plane normals
/// `n1 = d1 × (d1 × d2)` and `n2 = d2 × (d1 × d2)` act as 2-D separating
/// axes without projecting to a coordinate plane. Parallel and collinear
/// segments give zero normals and fall back to endpoint containment.
pub fn segments_intersect<T: Scalar>(s1: &Segment3<T>, s2: &Segment3<T>) -> bool {
    let d1 = s1.dir();
    let d2 = s2.dir();
    if !triple(&(&s2.a - &s1.a), &d1, &d2).is_zero() {
        return false;
    }

    let m = d1.cross(&d2);
    let n1 = d1.cross(&m);
    let n2 = d2.cross(&m);

    // endpoints of s1 against the line of s2, and the other way round
    let side11 = n2.dot(&(&s1.a - &s2.a)).sign();
    let side12 = n2.dot(&(&s1.b - &s2.a)).sign();
    let side21 = n1.dot(&(&s2.a - &s1.a)).sign();
    let side22 = n1.dot(&(&s2.b - &s1.a)).sign();

    if side11 != side12 && side21 != side22 {
        return true;
    }

    // Collinear overlap either puts an endpoint of s1 inside s2, or s2 sits
    // strictly inside s1 and then so does s2.a; s2.b never needs a check.
    side11 == 0
        && side12 == 0
        && (point_on_segment(&s1.a, s2)
            || point_on_segment(&s1.b, s2)
            || point_on_segment(&s2.a, s1))
}
