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

//! Exact intersection test for pairs of triangles in 3-D space.
//!
//! Triangles may be degenerate: collapsed to a segment or to a single point.
//! Every predicate works on unnormalized normals and carries scale weights
//! instead of dividing, so coplanar and parallel configurations never
//! produce a division by zero. Equality is exact; with integer coordinates
//! the answer is exact as long as intermediate products fit the type (see
//! [`numeric::Scalar`] for the safe `i128` range).
//!
//! ```
//! use tricross::geometry::{Point3, Triangle3};
//! use tricross::intersects;
//!
//! let t1 = Triangle3::new(
//!     &Point3::new(0.0, 0.0, 0.0),
//!     &Point3::new(2.0, 0.0, 0.0),
//!     &Point3::new(0.0, 2.0, 0.0),
//! );
//! let t2 = Triangle3::new(
//!     &Point3::new(1.0, 0.0, 0.0),
//!     &Point3::new(3.0, 0.0, 0.0),
//!     &Point3::new(1.0, 2.0, 0.0),
//! );
//! assert!(intersects(&t1, &t2));
//! ```

pub mod geometry;
pub mod kernel;
pub mod numeric;

pub use geometry::tri_tri_intersect::{intersects, shapes_intersect};
