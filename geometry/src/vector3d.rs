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

use crate::Float;
use serde::{Deserialize, Serialize};

/// A direction in space.
///
/// Multiplying two [`Vector3D`] returns their dot product,
/// which is what the optics code uses most.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    /// The X component
    pub x: Float,
    /// The Y component
    pub y: Float,
    /// The Z component
    pub z: Float,
}

impl std::fmt::Display for Vector3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3D({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector3D {
    /// Creates a new [`Vector3D`]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// A vector of length zero
    pub const fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    /// The squared length of the vector
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// The length of the vector
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }

    /// Checks whether the length of a vector is (almost) zero
    pub fn is_zero(&self) -> bool {
        self.length_squared() < 1e-18
    }

    /// Normalizes the vector in place. Zero vectors are left untouched.
    pub fn normalize(&mut self) {
        let l = self.length();
        if l > 0.0 {
            self.x /= l;
            self.y /= l;
            self.z /= l;
        }
    }

    /// Returns a normalized copy of the vector. Zero vectors are returned
    /// as they are.
    pub fn get_normalized(&self) -> Self {
        let mut ret = *self;
        ret.normalize();
        ret
    }

    /// Cross product
    pub fn cross(&self, other: Vector3D) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Checks whether two vectors are (almost) equal
    pub fn compare(&self, other: Vector3D) -> bool {
        (*self - other).length_squared() < 1e-12
    }

    /// Checks whether two vectors are parallel (pointing in the
    /// same direction, or in opposite directions)
    pub fn is_parallel(&self, other: Vector3D) -> bool {
        let a = self.get_normalized();
        let b = other.get_normalized();
        (1.0 - (a * b).abs()).abs() < 1e-9
    }

    /// Checks whether two vectors point in the same direction
    pub fn is_same_direction(&self, other: Vector3D) -> bool {
        let a = self.get_normalized();
        let b = other.get_normalized();
        (1.0 - a * b).abs() < 1e-9
    }

    /// Gets a normalized [`Vector3D`] that is perpendicular to `self`.
    pub fn get_perpendicular(&self) -> Result<Self, String> {
        if self.is_zero() {
            return Err("Trying to get a perpendicular of a zero-length Vector3D".to_string());
        }
        let n = self.get_normalized();
        // Cross with the axis that is least aligned with this vector
        let helper = if n.x.abs() < 0.5 {
            Vector3D::new(1., 0., 0.)
        } else if n.y.abs() < 0.5 {
            Vector3D::new(0., 1., 0.)
        } else {
            Vector3D::new(0., 0., 1.)
        };
        Ok(n.cross(helper).get_normalized())
    }

    /// Returns the component of `self` that is perpendicular
    /// to `normal` (which is assumed to be normalized)
    pub fn tangential_part(&self, normal: Vector3D) -> Self {
        *self - normal * (*self * normal)
    }

    /// Rotates the vector by `angle` (radians) around `axis`, following
    /// Rodrigues' rotation formula. `axis` does not need to be normalized.
    pub fn rotate_around(&self, axis: Vector3D, angle: Float) -> Self {
        let k = axis.get_normalized();
        let (sin, cos) = angle.sin_cos();
        *self * cos + k.cross(*self) * sin + k * ((k * *self) * (1. - cos))
    }
}

impl std::ops::Mul for Vector3D {
    type Output = Float;

    fn mul(self, other: Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl std::ops::Mul<Float> for Vector3D {
    type Output = Self;

    fn mul(self, s: Float) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl std::ops::Div<Float> for Vector3D {
    type Output = Self;

    fn div(self, s: Float) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl std::ops::Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::AddAssign for Vector3D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::SubAssign for Vector3D {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::MulAssign<Float> for Vector3D {
    fn mul_assign(&mut self, s: Float) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PI;

    #[test]
    fn test_dot_and_cross() {
        let x = Vector3D::new(1., 0., 0.);
        let y = Vector3D::new(0., 1., 0.);
        assert!((x * y).abs() < 1e-12);
        assert!(x.cross(y).compare(Vector3D::new(0., 0., 1.)));
        assert!(y.cross(x).compare(Vector3D::new(0., 0., -1.)));
    }

    #[test]
    fn test_get_perpendicular() -> Result<(), String> {
        for v in [
            Vector3D::new(1., 0., 0.),
            Vector3D::new(0., 1., 0.),
            Vector3D::new(0., 0., 1.),
            Vector3D::new(1., 2., -3.),
            Vector3D::new(-0.7, 0.7, 0.7),
        ] {
            let p = v.get_perpendicular()?;
            if (p * v).abs() > 1e-9 {
                return Err(format!("{} is not perpendicular to {}", p, v));
            }
            if (p.length() - 1.).abs() > 1e-9 {
                return Err(format!("{} is not normalized", p));
            }
        }
        assert!(Vector3D::zero().get_perpendicular().is_err());
        Ok(())
    }

    #[test]
    fn test_rotate_around() {
        let x = Vector3D::new(1., 0., 0.);
        let z = Vector3D::new(0., 0., 1.);
        let r = x.rotate_around(z, PI / 2.);
        assert!(r.compare(Vector3D::new(0., 1., 0.)), "r = {}", r);

        // Rotating around itself does nothing
        let r = z.rotate_around(z, 1.234);
        assert!(r.compare(z));
    }

    #[test]
    fn test_tangential_part() {
        let n = Vector3D::new(0., 0., 1.);
        let v = Vector3D::new(1., 2., 3.);
        assert!(v.tangential_part(n).compare(Vector3D::new(1., 2., 0.)));
    }
}
