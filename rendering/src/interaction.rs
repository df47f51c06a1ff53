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

use crate::scene::ObjectId;
use crate::Float;
use geometry::intersection::{IntersectionInfo, SurfaceSide};
use geometry::{Point3D, Vector3D};

/// What the engine knows about the point at which a ray
/// struck an object. Surface models only read it.
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    /// Stores the shading information based on
    /// pure geometry
    pub info: IntersectionInfo,

    /// The object that was struck
    pub object: ObjectId,
}

impl Interaction {
    /// The [`Point3D`] of the interaction
    pub fn point(&self) -> Point3D {
        self.info.p
    }

    /// The outward normal
    pub fn normal(&self) -> Vector3D {
        self.info.normal
    }

    pub fn side(&self) -> SurfaceSide {
        self.info.side
    }

    pub fn u(&self) -> Float {
        self.info.u
    }

    pub fn v(&self) -> Float {
        self.info.v
    }

    /// The normal on the side the ray came from
    pub fn facing_normal(&self) -> Vector3D {
        match self.info.side {
            SurfaceSide::Back => self.info.normal * -1.,
            _ => self.info.normal,
        }
    }

    /// Returns the Intersection point, Normal, e1 (dpdu), e2 (dpdv)
    pub fn get_triad(&self) -> (Point3D, Vector3D, Vector3D, Vector3D) {
        (self.info.p, self.info.normal, self.info.dpdu, self.info.dpdv)
    }

    /// Expresses a world vector in the `(dpdu, dpdv, normal)` frame
    pub fn to_local(&self, v: Vector3D) -> Vector3D {
        Vector3D::new(v * self.info.dpdu, v * self.info.dpdv, v * self.info.normal)
    }

    /// Takes a vector in the `(dpdu, dpdv, normal)` frame into the world
    pub fn to_world(&self, v: Vector3D) -> Vector3D {
        self.info.dpdu * v.x + self.info.dpdv * v.y + self.info.normal * v.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_world() {
        let it = Interaction {
            info: IntersectionInfo {
                normal: Vector3D::new(0., 1., 0.),
                dpdu: Vector3D::new(0., 0., 1.),
                dpdv: Vector3D::new(1., 0., 0.),
                side: SurfaceSide::Back,
                ..IntersectionInfo::default()
            },
            object: ObjectId(0),
        };
        let v = Vector3D::new(1., 2., 3.);
        let local = it.to_local(v);
        assert!(local.compare(Vector3D::new(3., 1., 2.)));
        assert!(it.to_world(local).compare(v));
        assert!(it.facing_normal().compare(Vector3D::new(0., -1., 0.)));
    }
}
