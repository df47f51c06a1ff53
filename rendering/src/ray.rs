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
use geometry::{Point3D, Ray3D, Vector3D};

/// Represents a ray (of light?) beyond pure geometry. It
/// includes the wavelength it carries, the optical path it has
/// accumulated so far and the velocity of the frame in which its
/// direction is expressed.
///
/// Rays are never modified by surfaces; every transport step
/// produces a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Direction and position
    pub geometry: Ray3D,

    /// Wavelength, in metres. `None` means the ray is achromatic.
    pub wavelength: Option<Float>,

    /// The optical path length accumulated since the ray left the camera
    pub optical_path: Float,

    /// Velocity (in units of c) of the frame in which the direction
    /// is expressed, relative to the scene's frame
    pub frame_beta: Vector3D,
}

impl std::default::Default for Ray {
    fn default() -> Self {
        Self {
            geometry: Ray3D {
                origin: Point3D::new(0., 0., 0.),
                direction: Vector3D::new(0., 0., -1.),
            },
            wavelength: None,
            optical_path: 0.,
            frame_beta: Vector3D::new(0., 0., 0.),
        }
    }
}

impl Ray {
    /// Creates a new achromatic ray. The direction gets normalized.
    pub fn new(origin: Point3D, direction: Vector3D) -> Self {
        Self {
            geometry: Ray3D {
                origin,
                direction: direction.get_normalized(),
            },
            ..Self::default()
        }
    }

    pub fn direction(&self) -> Vector3D {
        self.geometry.direction
    }

    pub fn origin(&self) -> Point3D {
        self.geometry.origin
    }

    /// Returns a copy of this ray with a different wavelength
    pub fn with_wavelength(&self, wavelength: Option<Float>) -> Self {
        Self { wavelength, ..*self }
    }

    /// Returns a copy of this ray expressed in a frame moving with `frame_beta`
    pub fn with_frame_beta(&self, frame_beta: Vector3D) -> Self {
        Self { frame_beta, ..*self }
    }

    /// The ray that leaves `point` (usually an intersection point) in
    /// `direction`. The distance travelled to reach `point` is added
    /// to the optical path.
    pub fn continued(&self, point: Point3D, direction: Vector3D) -> Self {
        Self {
            geometry: Ray3D {
                origin: point,
                direction: direction.get_normalized(),
            },
            optical_path: self.optical_path + self.geometry.origin.distance(point),
            ..*self
        }
    }

    /// Same ray, in the same direction, starting at `point`
    pub fn advanced_to(&self, point: Point3D) -> Self {
        self.continued(point, self.geometry.direction)
    }

    /// Moves the origin a distance `delta` along the direction
    pub fn nudged(&self, delta: Float) -> Self {
        let mut ret = *self;
        ret.geometry.origin += self.geometry.direction * delta;
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continued() {
        let ray = Ray::new(Point3D::new(0., 0., 3.), Vector3D::new(0., 0., -2.));
        assert!(ray.direction().compare(Vector3D::new(0., 0., -1.)));

        let next = ray.continued(Point3D::new(0., 0., 1.), Vector3D::new(1., 0., 0.));
        assert!((next.optical_path - 2.).abs() < 1e-12);
        assert!(next.origin().compare(Point3D::new(0., 0., 1.)));
        assert!(next.direction().compare(Vector3D::new(1., 0., 0.)));

        let n = next.nudged(0.5);
        assert!(n.origin().compare(Point3D::new(0.5, 0., 1.)));
        assert!((n.optical_path - next.optical_path).abs() < 1e-12);
    }

    #[test]
    fn test_with() {
        let ray = Ray::default()
            .with_wavelength(Some(550e-9))
            .with_frame_beta(Vector3D::new(0.1, 0., 0.));
        assert_eq!(ray.wavelength, Some(550e-9));
        assert!(ray.frame_beta.compare(Vector3D::new(0.1, 0., 0.)));
    }
}
