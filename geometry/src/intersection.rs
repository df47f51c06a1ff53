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

use crate::{Float, Point3D, Vector3D};

/// Which side of a surface was hit by a ray
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceSide {
    /// The ray travels against the normal (i.e., it comes from outside)
    #[default]
    Front,
    /// The ray travels along the normal (i.e., it comes from inside)
    Back,
    /// The ray grazes the surface
    NonApplicable,
}

impl SurfaceSide {
    /// Classifies the side of a hit based on the ray direction and the
    /// outward normal
    pub fn from_direction(direction: Vector3D, normal: Vector3D) -> Self {
        let cos = direction * normal;
        if cos < -1e-12 {
            Self::Front
        } else if cos > 1e-12 {
            Self::Back
        } else {
            Self::NonApplicable
        }
    }
}

/// Everything we know about the point at which a ray hit a primitive.
///
/// `normal` always points outwards, regardless of the side that was
/// hit; `side` tells which one. `dpdu` and `dpdv` are normalized tangent
/// directions following the `u` and `v` surface coordinates.
#[derive(Debug, Default, Copy, Clone)]
pub struct IntersectionInfo {
    /// The intersection point
    pub p: Point3D,

    /// The distance along the ray
    pub t: Float,

    /// The outward normal
    pub normal: Vector3D,

    /// The tangent direction in which `u` grows
    pub dpdu: Vector3D,

    /// The tangent direction in which `v` grows
    pub dpdv: Vector3D,

    /// The first surface coordinate
    pub u: Float,

    /// The second surface coordinate
    pub v: Float,

    /// The side of the surface that was hit
    pub side: SurfaceSide,
}

/// A surface that can tell where it is at given `(u,v)` coordinates.
///
/// Teleporting surfaces rely on this for mapping a hit on one
/// object into a point on another.
pub trait ParametrisedSurface {
    /// The point at coordinates `(u, v)`
    fn point_at(&self, u: Float, v: Float) -> Point3D;

    /// The outward normal, `dpdu` and `dpdv` at coordinates `(u, v)`
    fn frame_at(&self, u: Float, v: Float) -> (Vector3D, Vector3D, Vector3D);
}

/// Builds a right-handed tangent frame around `normal`, aligned with
/// `preferred_u` when possible.
pub fn tangent_frame(normal: Vector3D, preferred_u: Vector3D) -> (Vector3D, Vector3D) {
    let mut u = preferred_u.tangential_part(normal);
    if u.is_zero() {
        // normal is never zero-length here
        u = normal.get_perpendicular().unwrap_or(Vector3D::new(1., 0., 0.));
    }
    let u = u.get_normalized();
    let v = normal.cross(u).get_normalized();
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side() {
        let n = Vector3D::new(0., 0., 1.);
        assert_eq!(
            SurfaceSide::from_direction(Vector3D::new(0., 0., -1.), n),
            SurfaceSide::Front
        );
        assert_eq!(
            SurfaceSide::from_direction(Vector3D::new(0., 1., 1.), n),
            SurfaceSide::Back
        );
        assert_eq!(
            SurfaceSide::from_direction(Vector3D::new(0., 1., 0.), n),
            SurfaceSide::NonApplicable
        );
    }

    #[test]
    fn test_tangent_frame() {
        let n = Vector3D::new(0., 0., 1.);
        let (u, v) = tangent_frame(n, Vector3D::new(1., 0., 1.));
        assert!(u.compare(Vector3D::new(1., 0., 0.)));
        assert!(v.compare(Vector3D::new(0., 1., 0.)));

        // Degenerate preference still produces a valid frame
        let (u, v) = tangent_frame(n, n);
        assert!((u * n).abs() < 1e-9);
        assert!((v * n).abs() < 1e-9);
        assert!((u * v).abs() < 1e-9);
    }
}
