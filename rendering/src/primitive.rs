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
use geometry::intersection::{IntersectionInfo, ParametrisedSurface};
use geometry::{Disc3D, Parallelogram3D, Plane3D, Point3D, Ray3D, Sphere3D, Vector3D};
use serde::{Deserialize, Serialize};

/// The shapes that can be placed in a [`crate::Scene`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Primitive {
    Sphere(Sphere3D),
    Plane(Plane3D),
    Parallelogram(Parallelogram3D),
    Disc(Disc3D),
}

impl std::default::Default for Primitive {
    fn default() -> Self {
        Self::Sphere(Sphere3D {
            centre: Point3D::new(0., 0., 0.),
            radius: 1.,
        })
    }
}

impl Primitive {
    /// The name of the `Primitive`. Useful for debugging.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Sphere(s) => s.id(),
            Self::Plane(s) => s.id(),
            Self::Parallelogram(s) => s.id(),
            Self::Disc(s) => s.id(),
        }
    }

    /// Intersects an object with a [`Ray3D`] (IN WORLD COORDINATES) traveling forward.
    /// Returns [`None`] if the object is behind the ray or missed.
    pub fn intersect(&self, ray: &Ray3D) -> Option<IntersectionInfo> {
        match self {
            Self::Sphere(s) => s.intersect(ray),
            Self::Plane(s) => s.intersect(ray),
            Self::Parallelogram(s) => s.intersect(ray),
            Self::Disc(s) => s.intersect(ray),
        }
    }
}

impl ParametrisedSurface for Primitive {
    fn point_at(&self, u: Float, v: Float) -> Point3D {
        match self {
            Self::Sphere(s) => s.point_at(u, v),
            Self::Plane(s) => s.point_at(u, v),
            Self::Parallelogram(s) => s.point_at(u, v),
            Self::Disc(s) => s.point_at(u, v),
        }
    }

    fn frame_at(&self, u: Float, v: Float) -> (Vector3D, Vector3D, Vector3D) {
        match self {
            Self::Sphere(s) => s.frame_at(u, v),
            Self::Plane(s) => s.frame_at(u, v),
            Self::Parallelogram(s) => s.frame_at(u, v),
            Self::Disc(s) => s.frame_at(u, v),
        }
    }
}

impl From<Sphere3D> for Primitive {
    fn from(s: Sphere3D) -> Self {
        Self::Sphere(s)
    }
}

impl From<Plane3D> for Primitive {
    fn from(s: Plane3D) -> Self {
        Self::Plane(s)
    }
}

impl From<Parallelogram3D> for Primitive {
    fn from(s: Parallelogram3D) -> Self {
        Self::Parallelogram(s)
    }
}

impl From<Disc3D> for Primitive {
    fn from(s: Disc3D) -> Self {
        Self::Disc(s)
    }
}
