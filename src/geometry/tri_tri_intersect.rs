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
        edge_edge_intersect::segments_intersect,
        point::Point3,
        segment::Segment3,
        segment_tri_intersect::{scaled_plane_crossing, segment_triangle_intersect},
        triangle::{Shape, Triangle3},
        vector::VectorOps,
    },
    kernel::{
        orientation::plane_side,
        predicates::{point_in_triangle, point_on_segment},
    },
    numeric::scalar::Scalar,
};

/// The part of a proper triangle lying on the plane of another one.
///
/// Every point is carried at a scale weight: the geometric point is
/// `p / w`. Weights are never divided out; two crossings are compared only
/// after each point is multiplied by the weights of the other side.
#[derive(Debug, Clone, Copy)]
enum Crossing<T: Scalar> {
    Touch { p: Point3<T>, w: T },
    Span { p: Point3<T>, wp: T, q: Point3<T>, wq: T },
}

/// True iff the triangles `t1` and `t2` share at least one point.
///
/// Degenerate triangles are reduced to the point or segment they span and
/// tested with the matching lower-dimensional predicate. No tolerance is
/// applied anywhere; equality of coordinates is exact.
pub fn intersects<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    shapes_intersect(&t1.reduce(), &t2.reduce())
}

/// Pairwise test over the reduced forms. `Shape::Triangle` is expected to
/// hold a proper triangle, as [`Triangle3::reduce`] guarantees.
pub fn shapes_intersect<T: Scalar>(a: &Shape<T>, b: &Shape<T>) -> bool {
    match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => p == q,
        (Shape::Point(p), Shape::Segment(s)) | (Shape::Segment(s), Shape::Point(p)) => {
            point_on_segment(p, s)
        }
        (Shape::Point(p), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Point(p)) => {
            point_in_triangle(p, t)
        }
        (Shape::Segment(s1), Shape::Segment(s2)) => segments_intersect(s1, s2),
        (Shape::Segment(s), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Segment(s)) => {
            segment_triangle_intersect(s, t)
        }
        (Shape::Triangle(t1), Shape::Triangle(t2)) => proper_tri_tri_intersect(t1, t2),
    }
}

/// Sides of the apexes of `tri` relative to the plane of `other`.
fn plane_sides<T: Scalar>(tri: &Triangle3<T>, other: &Triangle3<T>) -> [i8; 3] {
    let n = other.normal();
    tri.apexes.map(|apex| plane_side(&other.apexes[0], &n, &apex))
}

fn strictly_one_side(sides: &[i8; 3]) -> bool {
    sides[0] != 0 && sides[0] == sides[1] && sides[1] == sides[2]
}

/// Crossing of edge `from -> to` with the plane of `other`, with its weight.
fn edge_crossing<T: Scalar>(
    from: &Point3<T>,
    to: &Point3<T>,
    other: &Triangle3<T>,
) -> (Point3<T>, T) {
    let edge = Segment3::new(from, to);
    (
        scaled_plane_crossing(&edge, other),
        edge.dir().dot(&other.normal()),
    )
}

/// Extracts what `tri` contributes to the line where its plane meets the
/// plane of `other`. `sides` must be neither all zero nor all equal.
fn crossing<T: Scalar>(tri: &Triangle3<T>, sides: &[i8; 3], other: &Triangle3<T>) -> Crossing<T> {
    let one = T::one();
    for i in 0..3 {
        let (si, sj, sm) = (sides[i], sides[(i + 1) % 3], sides[(i + 2) % 3]);
        let (ai, aj, am) = (tri.apex(i), tri.apex(i + 1), tri.apex(i + 2));

        // lone apex: both adjacent edges pierce the plane
        if si == -sj && sj == sm {
            let (p, wp) = edge_crossing(ai, aj, other);
            let (q, wq) = edge_crossing(am, ai, other);
            return Crossing::Span { p, wp, q, wq };
        }
        // an edge lying on the plane
        if si == 0 && sj == 0 {
            return Crossing::Span {
                p: *ai,
                wp: one,
                q: *aj,
                wq: one,
            };
        }
        // an apex on the plane, opposite edge piercing it
        if si == 0 && sj == -sm {
            let (q, wq) = edge_crossing(aj, am, other);
            return Crossing::Span {
                p: *ai,
                wp: one,
                q,
                wq,
            };
        }
        // an apex touching the plane from one side
        if si == 0 && sj == sm {
            return Crossing::Touch { p: *ai, w: one };
        }
    }
    unreachable!("apex sides {:?} do not cross the plane", sides)
}

/// Multiplies `p` by each weight in turn.
fn rescaled<T: Scalar>(p: &Point3<T>, weights: &[T]) -> Point3<T> {
    weights.iter().fold(*p, |acc, w| acc.scale(w))
}

/// Overlap test of two crossings lying on the same line. Every point is
/// brought to the common weight `product of all weights` before comparing.
fn crossings_overlap<T: Scalar>(c1: &Crossing<T>, c2: &Crossing<T>) -> bool {
    match (*c1, *c2) {
        (Crossing::Touch { p: t11, w: l11 }, Crossing::Touch { p: t21, w: l21 }) => {
            t21.scale(&l11) == t11.scale(&l21)
        }
        (
            Crossing::Touch { p: t11, w: l11 },
            Crossing::Span {
                p: t21,
                wp: l21,
                q: t22,
                wq: l22,
            },
        ) => point_on_segment(
            &rescaled(&t11, &[l21, l22]),
            &Segment3::new(&rescaled(&t21, &[l11, l22]), &rescaled(&t22, &[l11, l21])),
        ),
        (
            Crossing::Span {
                p: t11,
                wp: l11,
                q: t12,
                wq: l12,
            },
            Crossing::Touch { p: t21, w: l21 },
        ) => point_on_segment(
            &rescaled(&t21, &[l11, l12]),
            &Segment3::new(&rescaled(&t11, &[l12, l21]), &rescaled(&t12, &[l11, l21])),
        ),
        (
            Crossing::Span {
                p: t11,
                wp: l11,
                q: t12,
                wq: l12,
            },
            Crossing::Span {
                p: t21,
                wp: l21,
                q: t22,
                wq: l22,
            },
        ) => segments_intersect(
            &Segment3::new(
                &rescaled(&t11, &[l12, l21, l22]),
                &rescaled(&t12, &[l11, l21, l22]),
            ),
            &Segment3::new(
                &rescaled(&t21, &[l11, l12, l22]),
                &rescaled(&t22, &[l11, l12, l21]),
            ),
        ),
    }
}

/// Both triangles proper.
fn proper_tri_tri_intersect<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    let sides1 = plane_sides(t1, t2);
    let sides2 = plane_sides(t2, t1);

    if strictly_one_side(&sides1) || strictly_one_side(&sides2) {
        return false;
    }

    // Coplanar: only apex containment is checked. Overlaps made purely of
    // crossing edges, with no apex of either triangle inside the other,
    // are not reported.
    if sides1 == [0; 3] || sides2 == [0; 3] {
        return t1.apexes.iter().any(|apex| point_in_triangle(apex, t2))
            || t2.apexes.iter().any(|apex| point_in_triangle(apex, t1));
    }

    crossings_overlap(&crossing(t1, &sides1, t2), &crossing(t2, &sides2, t1))
}
