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

use crate::{Float, Vector3D};
use serde::{Deserialize, Serialize};

/// A 3x3 matrix, stored row by row.
///
/// This is what metric tensors and basis changes are made of.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix3(pub [[Float; 3]; 3]);

impl std::default::Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.0;
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2]
        )
    }
}

impl Matrix3 {
    /// The identity matrix
    pub const fn identity() -> Self {
        Self([[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]])
    }

    /// A diagonal matrix
    pub const fn diagonal(a: Float, b: Float, c: Float) -> Self {
        Self([[a, 0., 0.], [0., b, 0.], [0., 0., c]])
    }

    /// A symmetric matrix built from its six independent elements
    pub const fn symmetric(
        xx: Float,
        xy: Float,
        xz: Float,
        yy: Float,
        yz: Float,
        zz: Float,
    ) -> Self {
        Self([[xx, xy, xz], [xy, yy, yz], [xz, yz, zz]])
    }

    /// Builds a matrix whose columns are `a`, `b` and `c`. Such a matrix
    /// maps components expressed in the basis `(a,b,c)` into global ones.
    pub fn from_columns(a: Vector3D, b: Vector3D, c: Vector3D) -> Self {
        Self([[a.x, b.x, c.x], [a.y, b.y, c.y], [a.z, b.z, c.z]])
    }

    /// Gets element `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.0[row][col]
    }

    /// The transpose
    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks whether `self` equals its transpose within `tolerance`
    pub fn is_symmetric(&self, tolerance: Float) -> bool {
        let m = &self.0;
        (m[0][1] - m[1][0]).abs() <= tolerance
            && (m[0][2] - m[2][0]).abs() <= tolerance
            && (m[1][2] - m[2][1]).abs() <= tolerance
    }

    /// The determinant
    pub fn determinant(&self) -> Float {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverts the matrix through its adjugate
    pub fn inverse(&self) -> Result<Self, String> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return Err(format!("Matrix {} is singular (det = {})", self, det));
        }
        let m = &self.0;
        let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        let adj = [
            [cof(1, 2, 1, 2), -cof(0, 2, 1, 2), cof(0, 1, 1, 2)],
            [-cof(1, 2, 0, 2), cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
            [cof(1, 2, 0, 1), -cof(0, 2, 0, 1), cof(0, 1, 0, 1)],
        ];
        let mut ret = [[0.0; 3]; 3];
        for (r, row) in adj.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                ret[r][c] = v / det;
            }
        }
        Ok(Self(ret))
    }

    /// Calculates `a^T * self * b`
    pub fn bilinear(&self, a: Vector3D, b: Vector3D) -> Float {
        a * (*self * b)
    }
}

impl std::ops::Mul<Vector3D> for Matrix3 {
    type Output = Vector3D;

    fn mul(self, v: Vector3D) -> Vector3D {
        let m = &self.0;
        Vector3D::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut ret = [[0.0; 3]; 3];
        for (r, row) in ret.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.0[r][k] * other.0[k][c]).sum();
            }
        }
        Self(ret)
    }
}
