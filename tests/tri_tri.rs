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

use tricross::geometry::{Point3, Triangle3};
use tricross::intersects;
use tricross::numeric::Scalar;

fn tri(c: [f64; 9]) -> Triangle3<f64> {
    Triangle3::from_coords(c)
}

fn both_ways<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> bool {
    let ab = intersects(a, b);
    assert_eq!(ab, intersects(b, a), "asymmetric result for {:?} / {:?}", a, b);
    ab
}

#[test]
fn disjoint_far_apart() {
    let t1 = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let t2 = tri([10.0, 0.0, 0.0, 11.0, 0.0, 0.0, 10.0, 1.0, 0.0]);
    assert!(!both_ways(&t1, &t2));
}

#[test]
fn coplanar_overlapping() {
    let t1 = tri([0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    let t2 = tri([1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 1.0, 2.0, 0.0]);
    assert!(both_ways(&t1, &t2));
}

#[test]
fn coplanar_nested() {
    let outer = tri([0.0, 0.0, 1.0, 8.0, 0.0, 1.0, 0.0, 8.0, 1.0]);
    let inner = tri([1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0]);
    assert!(both_ways(&outer, &inner));
}

#[test]
fn parallel_planes() {
    let t1 = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let t2 = tri([0.0, 0.0, 1.0, 4.0, 0.0, 1.0, 0.0, 4.0, 1.0]);
    assert!(!both_ways(&t1, &t2));
}

#[test]
fn segment_degenerate_piercing_interior() {
    let a = [1.0, 1.0, -1.0];
    let b = [1.0, 1.0, 1.0];
    let needle = tri([a[0], a[1], a[2], a[0], a[1], a[2], b[0], b[1], b[2]]);
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    assert!(both_ways(&needle, &floor));

    let short = tri([1.0, 1.0, 0.5, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0]);
    assert!(!both_ways(&short, &floor));
}

#[test]
fn segment_degenerate_collinear_apexes() {
    // middle apex between the others; the longest edge covers all three
    let rod = tri([0.0, 0.0, -2.0, 0.5, 0.5, 0.0, 1.0, 1.0, 2.0]);
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    assert!(both_ways(&rod, &floor));
}

#[test]
fn point_degenerate_on_apex_and_outside() {
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);

    let on_apex = tri([4.0, 0.0, 0.0, 4.0, 0.0, 0.0, 4.0, 0.0, 0.0]);
    assert!(both_ways(&on_apex, &floor));

    let outside = tri([5.0, 5.0, 0.0, 5.0, 5.0, 0.0, 5.0, 5.0, 0.0]);
    assert!(!both_ways(&outside, &floor));

    let above = tri([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    assert!(!both_ways(&above, &floor));
}

#[test]
fn point_against_point_and_segment() {
    let p = tri([1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    let q = tri([1.0, 2.0, 3.5, 1.0, 2.0, 3.5, 1.0, 2.0, 3.5]);
    assert!(both_ways(&p, &p));
    assert!(!both_ways(&p, &q));

    let through = tri([1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 6.0]);
    assert!(both_ways(&p, &through));

    let beside = tri([0.0, 2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 6.0]);
    assert!(!both_ways(&p, &beside));
}

#[test]
fn segment_against_segment() {
    let s1 = tri([0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0, 0.0]);
    let s2 = tri([0.0, 2.0, 0.0, 0.0, 2.0, 0.0, 2.0, 0.0, 0.0]);
    assert!(both_ways(&s1, &s2));

    let lifted = tri([0.0, 2.0, 1.0, 0.0, 2.0, 1.0, 2.0, 0.0, 1.0]);
    assert!(!both_ways(&s1, &lifted));
}

#[test]
fn sharing_one_vertex() {
    let t1 = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let t2 = tri([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, -1.0, 1.0]);
    assert!(both_ways(&t1, &t2));
}

#[test]
fn perpendicular_planes_through_interiors() {
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = tri([1.0, 1.0, -2.0, 1.0, 1.0, 2.0, 2.0, 1.0, 0.0]);
    assert!(both_ways(&floor, &wall));
}

#[test]
fn perpendicular_planes_separated_along_line() {
    // the shared line y = 1, z = 0 leaves the floor at x = 3
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = tri([5.0, 1.0, -2.0, 5.0, 1.0, 2.0, 6.0, 1.0, 0.0]);
    assert!(!both_ways(&floor, &wall));
}

#[test]
fn piercing_but_missing() {
    // wall crosses the floor's plane, but outside the floor
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = tri([5.0, 5.0, -1.0, 6.0, 5.0, 1.0, 5.0, 6.0, 1.0]);
    assert!(!both_ways(&floor, &wall));
}

#[test]
fn every_triangle_meets_itself() {
    let cases = [
        tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
        tri([0.5, -1.0, 2.0, 3.0, 0.25, -1.0, 1.0, 1.0, 1.0]),
        tri([1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0]),
        tri([7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0]),
    ];
    for t in &cases {
        assert!(intersects(t, t), "{:?} does not meet itself", t);
        assert!(t.intersects(&t.rotated()));
    }
}

#[test]
fn rotation_keeps_result() {
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = tri([1.0, 1.0, -2.0, 1.0, 1.0, 2.0, 2.0, 1.0, 0.0]);
    let far = tri([5.0, 1.0, -2.0, 5.0, 1.0, 2.0, 6.0, 1.0, 0.0]);

    let mut a = floor;
    for _ in 0..3 {
        let mut b = wall;
        let mut c = far;
        for _ in 0..3 {
            assert!(intersects(&a, &b));
            assert!(!intersects(&a, &c));
            b = b.rotated();
            c = c.rotated();
        }
        a = a.rotated();
    }
}

#[test]
fn integer_coordinates_on_unit_lattice() {
    let p = |x: i128, y: i128, z: i128| Point3::new(x, y, z);
    let floor = Triangle3::new(&p(0, -1, 0), &p(1, -1, 0), &p(1, 1, 0));
    // Both walls stand in y = 0 and cross the floor plane along a span.
    let wall = Triangle3::new(&p(1, 0, -1), &p(1, 0, 1), &p(0, 0, 1));
    let far_wall = Triangle3::new(&p(-1, 0, -1), &p(-1, 0, 1), &p(0, 0, 1));
    assert!(both_ways(&floor, &wall));
    assert!(!both_ways(&floor, &far_wall));
}

#[test]
fn coplanar_edge_only_overlap_is_not_reported() {
    // Star of David: the triangles share a hexagon, yet no apex of one lies
    // in the other, and only apex containment is checked for coplanar pairs.
    let up = tri([0.0, 1.0, 0.0, 6.0, 1.0, 0.0, 3.0, 7.0, 0.0]);
    let down = tri([0.0, 5.0, 0.0, 6.0, 5.0, 0.0, 3.0, -1.0, 0.0]);
    assert!(!both_ways(&up, &down));
}
