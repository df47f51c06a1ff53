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

use crate::intersection::{tangent_frame, IntersectionInfo, ParametrisedSurface, SurfaceSide};
use crate::{Float, Point3D, Ray3D, Vector3D};
use serde::{Deserialize, Serialize};

/// Intersects the plane going through `point` with normal `normal`.
/// Returns the distance along the ray, if the ray travels towards the plane.
pub(crate) fn intersect_plane(point: Point3D, normal: Vector3D, ray: &Ray3D) -> Option<Float> {
    let cos = ray.direction * normal;
    if cos.abs() < 1e-12 {
        return None;
    }
    let t = ((point - ray.origin) * normal) / cos;
    if t > 1e-9 {
        Some(t)
    } else {
        None
    }
}

/// An infinite plane.
///
/// Its surface coordinates are the (signed) distances from `point`
/// along `u_direction` and along `normal x u_direction`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Plane3D {
    /// A point in the plane
    pub point: Point3D,
    /// The normal, pointing towards the "outside"
    pub normal: Vector3D,
    /// The in-plane direction in which `u` grows
    pub u_direction: Vector3D,
    /// The in-plane direction in which `v` grows
    pub v_direction: Vector3D,
}

impl Plane3D {
    /// Creates a new [`Plane3D`]. `u_direction` does not need to be
    /// perpendicular to `normal`; only its in-plane part is used.
    pub fn new(point: Point3D, normal: Vector3D, u_direction: Vector3D) -> Result<Self, String> {
        if normal.is_zero() {
            return Err("The normal of a Plane3D cannot have zero length".to_string());
        }
        let normal = normal.get_normalized();
        let (u_direction, v_direction) = tangent_frame(normal, u_direction);
        Ok(Self {
            point,
            normal,
            u_direction,
            v_direction,
        })
    }

    /// An id, for debugging purposes
    pub fn id(&self) -> &'static str {
        "plane"
    }

    /// Intersects the plane with a [`Ray3D`]
    pub fn intersect(&self, ray: &Ray3D) -> Option<IntersectionInfo> {
        let t = intersect_plane(self.point, self.normal, ray)?;
        let p = ray.project(t);
        let d = p - self.point;
        Some(IntersectionInfo {
            p,
            t,
            normal: self.normal,
            dpdu: self.u_direction,
            dpdv: self.v_direction,
            u: d * self.u_direction,
            v: d * self.v_direction,
            side: SurfaceSide::from_direction(ray.direction, self.normal),
        })
    }
}

impl ParametrisedSurface for Plane3D {
    fn point_at(&self, u: Float, v: Float) -> Point3D {
        self.point + self.u_direction * u + self.v_direction * v
    }

    fn frame_at(&self, _u: Float, _v: Float) -> (Vector3D, Vector3D, Vector3D) {
        (self.normal, self.u_direction, self.v_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect() -> Result<(), String> {
        let plane = Plane3D::new(
            Point3D::new(0., 0., 1.),
            Vector3D::new(0., 0., 2.),
            Vector3D::new(1., 0., 0.),
        )?;
        let ray = Ray3D {
            origin: Point3D::new(2., 3., 5.),
            direction: Vector3D::new(0., 0., -1.),
        };
        let info = plane.intersect(&ray).ok_or("Expecting a hit")?;
        assert!((info.t - 4.).abs() < 1e-9);
        assert!((info.u - 2.).abs() < 1e-9);
        assert!((info.v - 3.).abs() < 1e-9);
        assert_eq!(info.side, SurfaceSide::Front);
        assert!(plane.point_at(info.u, info.v).compare(info.p));

        // Going away
        let ray = Ray3D {
            origin: Point3D::new(2., 3., 5.),
            direction: Vector3D::new(0., 0., 1.),
        };
        assert!(plane.intersect(&ray).is_none());
        Ok(())
    }
}
