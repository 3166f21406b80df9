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

use std::ops::Sub;

use crate::{
    geometry::vector::{Vector3, VectorOps},
    numeric::scalar::Scalar,
};

/// A point in 3-D space. Immutable value; equality is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Position vector of the point.
    pub fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector3<T> {
        other - self
    }

    /// Scales the position vector by `k`. Used to carry scale weights
    /// instead of dividing.
    pub fn scale(&self, k: &T) -> Self {
        Self::new(self.x * *k, self.y * *k, self.z * *k)
    }

    pub fn distance_squared(&self, other: &Self) -> T {
        self.vector_to(other).norm_squared()
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point3<T>> for &'a Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: &'b Point3<T>) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Point3<T>) -> Vector3<T> {
        &self - &rhs
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        Point3::new(coords[0], coords[1], coords[2])
    }
}

impl<T: Scalar> From<Vector3<T>> for Point3<T> {
    fn from(v: Vector3<T>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> Into<[T; 3]> for Point3<T> {
    fn into(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_is_a_vector() {
        let a = Point3::new(1_i128, 2, 3);
        let b = Point3::new(4_i128, 6, 3);
        assert_eq!(&b - &a, Vector3::new(3, 4, 0));
        assert_eq!(a.vector_to(&b), Vector3::new(3, 4, 0));
        assert_eq!(a.distance_squared(&b), 25);
    }

    #[test]
    fn scale_moves_away_from_origin() {
        let p = Point3::new(1.0, -2.0, 0.5);
        assert_eq!(p.scale(&2.0), Point3::new(2.0, -4.0, 1.0));
        assert_eq!(p.scale(&0.0), Point3::origin());
    }
}
