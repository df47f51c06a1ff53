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

use crate::intersection::{IntersectionInfo, ParametrisedSurface, SurfaceSide};
use crate::plane3d::intersect_plane;
use crate::{Float, Point3D, Ray3D, Vector3D};
use serde::{Deserialize, Serialize};

/// A flat parallelogram defined by a corner and two spanning vectors.
///
/// The outward normal is `span_u x span_v`. Surface coordinates are
/// lengths: `u` goes from `0` to `|span_u|` and `v` from `0` to `|span_v|`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Parallelogram3D {
    /// One of the corners
    pub corner: Point3D,
    /// The first side
    pub span_u: Vector3D,
    /// The second side
    pub span_v: Vector3D,
    normal: Vector3D,
}

impl Parallelogram3D {
    /// Creates a new [`Parallelogram3D`]
    pub fn new(corner: Point3D, span_u: Vector3D, span_v: Vector3D) -> Result<Self, String> {
        let normal = span_u.cross(span_v);
        if normal.is_zero() {
            return Err(format!(
                "The sides of a Parallelogram3D cannot be parallel or zero... found {} and {}",
                span_u, span_v
            ));
        }
        Ok(Self {
            corner,
            span_u,
            span_v,
            normal: normal.get_normalized(),
        })
    }

    /// Creates a rectangle centred at `centre`, with sides `width` (along `u`)
    /// and `height` (along `v`)
    pub fn centred(
        centre: Point3D,
        u_direction: Vector3D,
        v_direction: Vector3D,
        width: Float,
        height: Float,
    ) -> Result<Self, String> {
        let su = u_direction.get_normalized() * width;
        let sv = v_direction.get_normalized() * height;
        Self::new(centre - su * 0.5 - sv * 0.5, su, sv)
    }

    /// An id, for debugging purposes
    pub fn id(&self) -> &'static str {
        "parallelogram"
    }

    /// The outward normal
    pub fn normal(&self) -> Vector3D {
        self.normal
    }

    /// Intersects the parallelogram with a [`Ray3D`]
    pub fn intersect(&self, ray: &Ray3D) -> Option<IntersectionInfo> {
        let t = intersect_plane(self.corner, self.normal, ray)?;
        let p = ray.project(t);
        let w = p - self.corner;
        let denom = self.span_u.cross(self.span_v) * self.normal;
        let a = (w.cross(self.span_v) * self.normal) / denom;
        let b = (self.span_u.cross(w) * self.normal) / denom;
        if !(0.0..=1.0).contains(&a) || !(0.0..=1.0).contains(&b) {
            return None;
        }

        Some(IntersectionInfo {
            p,
            t,
            normal: self.normal,
            dpdu: self.span_u.get_normalized(),
            dpdv: self.span_v.get_normalized(),
            u: a * self.span_u.length(),
            v: b * self.span_v.length(),
            side: SurfaceSide::from_direction(ray.direction, self.normal),
        })
    }
}

impl ParametrisedSurface for Parallelogram3D {
    fn point_at(&self, u: Float, v: Float) -> Point3D {
        self.corner + self.span_u.get_normalized() * u + self.span_v.get_normalized() * v
    }

    fn frame_at(&self, _u: Float, _v: Float) -> (Vector3D, Vector3D, Vector3D) {
        (
            self.normal,
            self.span_u.get_normalized(),
            self.span_v.get_normalized(),
        )
    }
}
