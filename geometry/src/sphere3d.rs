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
use crate::{Float, Point3D, Ray3D, Vector3D, PI};
use serde::{Deserialize, Serialize};

/// A sphere.
///
/// Its surface coordinates are the azimuth `u = phi` (radians, in `[0, 2PI)`)
/// and the polar angle `v = theta` (radians, measured from `+Z`).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Sphere3D {
    /// The centre
    pub centre: Point3D,
    /// The radius
    pub radius: Float,
}

impl Sphere3D {
    /// Creates a new [`Sphere3D`]
    pub fn new(radius: Float, centre: Point3D) -> Result<Self, String> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(format!(
                "The radius of a Sphere3D must be a positive number... found {}",
                radius
            ));
        }
        Ok(Self { centre, radius })
    }

    /// An id, for debugging purposes
    pub fn id(&self) -> &'static str {
        "sphere"
    }

    /// Checks whether a point is inside the sphere
    pub fn contains(&self, p: Point3D) -> bool {
        self.centre.squared_distance(p) < self.radius * self.radius
    }

    /// Intersects the sphere with a ray, returning the closest hit in
    /// front of the ray's origin
    pub fn intersect(&self, ray: &Ray3D) -> Option<IntersectionInfo> {
        let oc = ray.origin - self.centre;
        let b = oc * ray.direction;
        let c = oc.length_squared() - self.radius * self.radius;
        let a = ray.direction.length_squared();
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let t0 = (-b - sq) / a;
        let t1 = (-b + sq) / a;
        const MIN_T: Float = 1e-9;
        let t = if t0 > MIN_T {
            t0
        } else if t1 > MIN_T {
            t1
        } else {
            return None;
        };

        let p = ray.project(t);
        let normal = (p - self.centre).get_normalized();
        let (u, v) = self.coordinates(normal);
        let (_, dpdu, dpdv) = self.frame_at(u, v);
        Some(IntersectionInfo {
            p,
            t,
            normal,
            dpdu,
            dpdv,
            u,
            v,
            side: SurfaceSide::from_direction(ray.direction, normal),
        })
    }

    fn coordinates(&self, radial: Vector3D) -> (Float, Float) {
        let mut phi = radial.y.atan2(radial.x);
        if phi < 0.0 {
            phi += 2. * PI;
        }
        let theta = radial.z.clamp(-1., 1.).acos();
        (phi, theta)
    }
}

impl ParametrisedSurface for Sphere3D {
    fn point_at(&self, u: Float, v: Float) -> Point3D {
        let (sin_theta, cos_theta) = v.sin_cos();
        let (sin_phi, cos_phi) = u.sin_cos();
        self.centre
            + Vector3D::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta) * self.radius
    }

    fn frame_at(&self, u: Float, v: Float) -> (Vector3D, Vector3D, Vector3D) {
        let (sin_theta, cos_theta) = v.sin_cos();
        let (sin_phi, cos_phi) = u.sin_cos();
        let normal = Vector3D::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
        let dpdu = Vector3D::new(-sin_phi, cos_phi, 0.);
        let dpdv = Vector3D::new(cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta);
        (normal, dpdu, dpdv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_from_outside() -> Result<(), String> {
        let s = Sphere3D::new(1., Point3D::new(0., 0., 0.))?;
        let ray = Ray3D {
            origin: Point3D::new(0., 0., 5.),
            direction: Vector3D::new(0., 0., -1.),
        };
        let info = s.intersect(&ray).ok_or("Expecting a hit")?;
        assert!((info.t - 4.).abs() < 1e-9);
        assert!(info.p.compare(Point3D::new(0., 0., 1.)));
        assert!(info.normal.compare(Vector3D::new(0., 0., 1.)));
        assert_eq!(info.side, SurfaceSide::Front);
        Ok(())
    }

    #[test]
    fn test_intersect_from_inside() -> Result<(), String> {
        let s = Sphere3D::new(2., Point3D::new(1., 0., 0.))?;
        let ray = Ray3D {
            origin: Point3D::new(1., 0., 0.),
            direction: Vector3D::new(1., 0., 0.),
        };
        let info = s.intersect(&ray).ok_or("Expecting a hit")?;
        assert!((info.t - 2.).abs() < 1e-9);
        assert_eq!(info.side, SurfaceSide::Back);
        Ok(())
    }

    #[test]
    fn test_miss() -> Result<(), String> {
        let s = Sphere3D::new(1., Point3D::new(0., 0., 0.))?;
        let ray = Ray3D {
            origin: Point3D::new(0., 3., 5.),
            direction: Vector3D::new(0., 0., -1.),
        };
        assert!(s.intersect(&ray).is_none());
        Ok(())
    }

    #[test]
    fn test_point_at_matches_intersection() -> Result<(), String> {
        let s = Sphere3D::new(1.5, Point3D::new(1., 2., 3.))?;
        let ray = Ray3D {
            origin: Point3D::new(5., 4., 4.),
            direction: (Point3D::new(1., 2., 3.) - Point3D::new(5., 4., 4.)).get_normalized(),
        };
        let info = s.intersect(&ray).ok_or("Expecting a hit")?;
        let p = s.point_at(info.u, info.v);
        assert!(p.compare(info.p), "p = {} | info.p = {}", p, info.p);
        let (n, du, dv) = s.frame_at(info.u, info.v);
        assert!(n.compare(info.normal));
        assert!((du * n).abs() < 1e-9);
        assert!((dv * n).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_bad_radius() {
        assert!(Sphere3D::new(0., Point3D::new(0., 0., 0.)).is_err());
        assert!(Sphere3D::new(-1., Point3D::new(0., 0., 0.)).is_err());
    }
}
