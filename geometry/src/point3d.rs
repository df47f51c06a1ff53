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

/// A point in space
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// The X component
    pub x: Float,
    /// The Y component
    pub y: Float,
    /// The Z component
    pub z: Float,
}

impl std::fmt::Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point3D({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Point3D {
    /// Creates a new [`Point3D`]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// The origin of coordinates
    pub const fn origin() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Calculates the squared distance between two points
    pub fn squared_distance(&self, other: Point3D) -> Float {
        (*self - other).length_squared()
    }

    /// Calculates the distance between two points
    pub fn distance(&self, other: Point3D) -> Float {
        self.squared_distance(other).sqrt()
    }

    /// Interprets the point as a position vector
    pub fn as_vector3d(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Checks whether two points are (almost) the same
    pub fn compare(&self, other: Point3D) -> bool {
        self.squared_distance(other) < 1e-12
    }
}

impl std::ops::Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, other: Self) -> Vector3D {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Add<Vector3D> for Point3D {
    type Output = Self;

    fn add(self, v: Vector3D) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl std::ops::Sub<Vector3D> for Point3D {
    type Output = Self;

    fn sub(self, v: Vector3D) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl std::ops::AddAssign<Vector3D> for Point3D {
    fn add_assign(&mut self, v: Vector3D) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl std::ops::SubAssign<Vector3D> for Point3D {
    fn sub_assign(&mut self, v: Vector3D) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3D::new(1., 2., 3.);
        let b = Point3D::new(1., 2., 7.);
        assert!((a.distance(b) - 4.).abs() < 1e-9);
        assert!((a.squared_distance(b) - 16.).abs() < 1e-9);
    }

    #[test]
    fn test_point_vector_ops() {
        let a = Point3D::new(1., 2., 3.);
        let v = Vector3D::new(1., 1., -1.);
        let b = a + v;
        assert!(b.compare(Point3D::new(2., 3., 2.)));
        assert!((b - a).compare(v));
        let mut c = b;
        c -= v;
        assert!(c.compare(a));
    }
}
