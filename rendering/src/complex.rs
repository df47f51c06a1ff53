/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! A minimal complex number, enough for complex refractive indices.

use crate::Float;
use serde::{Deserialize, Serialize};

/// A complex number `re + i im`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub re: Float,
    /// Imaginary part
    pub im: Float,
}

impl Complex {
    /// Creates a new number
    pub const fn new(re: Float, im: Float) -> Self {
        Self { re, im }
    }

    /// A purely real number
    pub const fn real(re: Float) -> Self {
        Self { re, im: 0. }
    }

    /// `|z|^2`
    pub fn norm_sqr(&self) -> Float {
        self.re * self.re + self.im * self.im
    }

    /// `|z|`
    pub fn abs(&self) -> Float {
        self.norm_sqr().sqrt()
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Is the imaginary part negligible?
    pub fn is_real(&self) -> bool {
        self.im.abs() < 1e-12
    }

    /// `1/z`. Returns `None` for `z = 0`.
    pub fn recip(&self) -> Option<Self> {
        let n = self.norm_sqr();
        if n < 1e-24 {
            return None;
        }
        Some(Self::new(self.re / n, -self.im / n))
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im < 0. {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.re * o.re - self.im * o.im,
            self.re * o.im + self.im * o.re,
        )
    }
}

impl std::ops::Mul<Float> for Complex {
    type Output = Self;
    fn mul(self, o: Float) -> Self {
        Self::new(self.re * o, self.im * o)
    }
}

impl std::ops::Add for Complex {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.re + o.re, self.im + o.im)
    }
}
