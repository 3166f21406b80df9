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
        point::Point3,
        segment::Segment3,
        tri_tri_intersect::intersects,
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// What a triangle actually spans once its degeneracies are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleClass {
    /// All three apexes coincide.
    Point,
    /// Apexes are collinear but not all equal.
    Segment,
    /// Non-zero normal, well-defined plane.
    Proper,
}

/// Reduced form of a triangle: the simplest entity covering the same set of
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<T: Scalar> {
    Point(Point3<T>),
    Segment(Segment3<T>),
    Triangle(Triangle3<T>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub apexes: [Point3<T>; 3],
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Self {
        Self {
            apexes: [*a, *b, *c],
        }
    }

    /// Builds a triangle from nine coordinates in apex-major order
    /// `x0 y0 z0 x1 y1 z1 x2 y2 z2`.
    pub fn from_coords(c: [T; 9]) -> Self {
        Self {
            apexes: [
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
                Point3::new(c[6], c[7], c[8]),
            ],
        }
    }

    /// Apex `i`, taken cyclically.
    #[inline(always)]
    pub fn apex(&self, i: usize) -> &Point3<T> {
        &self.apexes[i % 3]
    }

    /// Boundary segments `(0,1)`, `(1,2)`, `(2,0)`.
    pub fn edges(&self) -> [Segment3<T>; 3] {
        [
            Segment3::new(&self.apexes[0], &self.apexes[1]),
            Segment3::new(&self.apexes[1], &self.apexes[2]),
            Segment3::new(&self.apexes[2], &self.apexes[0]),
        ]
    }

    /// Unnormalized normal `(a1 - a0) × (a2 - a1)`.
    ///
    /// Flips sign under odd permutations of the apexes, so comparisons of
    /// normals across two triangles only make sense through their signs
    /// relative to one another.
    pub fn normal(&self) -> Vector3<T> {
        let [a0, a1, a2] = &self.apexes;
        (a1 - a0).cross(&(a2 - a1))
    }

    pub fn class(&self) -> TriangleClass {
        let [a0, a1, a2] = &self.apexes;
        if a0 == a1 && a1 == a2 {
            TriangleClass::Point
        } else if self.normal().is_zero() {
            TriangleClass::Segment
        } else {
            TriangleClass::Proper
        }
    }

    /// The pair of apexes furthest apart. For a collinear triangle this
    /// segment covers the whole triangle. Ties go to the earlier edge in
    /// `(0,1)`, `(1,2)`, `(2,0)` order.
    pub fn longest_edge(&self) -> Segment3<T> {
        let [e01, e12, e20] = self.edges();
        let (l01, l12, l20) = (
            e01.dir().norm_squared(),
            e12.dir().norm_squared(),
            e20.dir().norm_squared(),
        );
        if l01 >= l12 && l01 >= l20 {
            e01
        } else if l12 >= l20 {
            e12
        } else {
            e20
        }
    }

    /// Same triangle with apexes rotated one step, `(a1, a2, a0)`. Even
    /// permutation, so the normal is unchanged.
    pub fn rotated(&self) -> Self {
        let [a0, a1, a2] = &self.apexes;
        Self::new(a1, a2, a0)
    }

    pub fn reduce(&self) -> Shape<T> {
        match self.class() {
            TriangleClass::Point => Shape::Point(self.apexes[0]),
            TriangleClass::Segment => Shape::Segment(self.longest_edge()),
            TriangleClass::Proper => Shape::Triangle(*self),
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        intersects(self, other)
    }
}
