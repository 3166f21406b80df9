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

use num_traits::{One, Zero};

use std::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};

/// Coordinate type of every geometric value in the crate.
///
/// The trait deliberately has no `Div`: every predicate works on
/// unnormalized quantities and scale weights, so a type without division
/// (`i128`) is a first-class scalar.
///
/// Integer answers are exact only while no intermediate product overflows.
/// Comparing where two proper triangles cross each other's planes weights
/// every point three times and then squares a dot product, so products grow
/// with about the 52nd power of the coordinates. `i128` stays in range when
/// all coordinates of the six apexes fit in a span of 2 and lie within 600
/// of the origin; narrower integers are not offered. Use `f64` for anything
/// larger and accept that it rounds.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        let zero = Self::zero();
        (*self > zero) as i8 - (*self < zero) as i8
    }

    fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    /// Maps -1, 0, +1 back into the scalar type.
    fn from_sign(s: i8) -> Self {
        match s.signum() {
            1 => Self::one(),
            -1 => -Self::one(),
            _ => Self::zero(),
        }
    }

    fn squared(&self) -> Self {
        *self * *self
    }
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(f32, f64, i128);
