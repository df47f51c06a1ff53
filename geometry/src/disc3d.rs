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
use crate::plane3d::intersect_plane;
use crate::{Float, Point3D, Ray3D, Vector3D};
use serde::{Deserialize, Serialize};

/// A flat disc. Surface coordinates are Cartesian, centred at `centre`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Disc3D {
    /// The centre
    pub centre: Point3D,
    /// The outward normal
    pub normal: Vector3D,
    /// The radius
    pub radius: Float,
    /// The in-plane direction in which `u` grows
    pub u_direction: Vector3D,
    /// The in-plane direction in which `v` grows
    pub v_direction: Vector3D,
}

impl Disc3D {
    /// Creates a new [`Disc3D`]
    pub fn new(
        centre: Point3D,
        normal: Vector3D,
        radius: Float,
        u_direction: Vector3D,
    ) -> Result<Self, String> {
        if normal.is_zero() {
            return Err("The normal of a Disc3D cannot have zero length".to_string());
        }
        if radius <= 0.0 || !radius.is_finite() {
            return Err(format!(
                "The radius of a Disc3D must be a positive number... found {}",
                radius
            ));
        }
        let normal = normal.get_normalized();
        let (u_direction, v_direction) = tangent_frame(normal, u_direction);
        Ok(Self {
            centre,
            normal,
            radius,
            u_direction,
            v_direction,
        })
    }

    /// An id, for debugging purposes
    pub fn id(&self) -> &'static str {
        "disc"
    }

    /// Intersects the disc with a [`Ray3D`]
    pub fn intersect(&self, ray: &Ray3D) -> Option<IntersectionInfo> {
        let t = intersect_plane(self.centre, self.normal, ray)?;
        let p = ray.project(t);
        let d = p - self.centre;
        if d.length_squared() > self.radius * self.radius {
            return None;
        }
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

impl ParametrisedSurface for Disc3D {
    fn point_at(&self, u: Float, v: Float) -> Point3D {
        self.centre + self.u_direction * u + self.v_direction * v
    }

    fn frame_at(&self, _u: Float, _v: Float) -> (Vector3D, Vector3D, Vector3D) {
        (self.normal, self.u_direction, self.v_direction)
    }
}
