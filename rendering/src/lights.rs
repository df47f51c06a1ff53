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

use crate::colour::Spectrum;
use crate::Float;
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

/// A light source. Only surfaces shaded with Phong reflectance
/// (see [`PhongReflectance`]) respond to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Light {
    /// Light arriving equally from everywhere. Never shadowed.
    Ambient(Spectrum),

    /// A point source
    Point(PointLight),
}

/// A point source, at `position`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Point3D,
    pub colour: Spectrum,
}

/// The reflectance of a Lambertian surface with a Phong highlight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhongReflectance {
    /// Diffuse reflectance
    pub diffuse: Spectrum,

    /// Specular reflectance
    pub specular: Spectrum,

    /// Phong exponent
    pub shininess: Float,
}

impl PhongReflectance {
    /// Light reflected towards the viewer from an ambient source
    pub fn ambient(&self, colour: Spectrum) -> Spectrum {
        self.diffuse * colour
    }

    /// Light reflected towards the viewer from a visible point source.
    ///
    /// `normal` must point towards the viewer's side; `to_light` and
    /// `to_viewer` are normalized directions leaving the surface.
    pub fn direct(
        &self,
        colour: Spectrum,
        normal: Vector3D,
        to_light: Vector3D,
        to_viewer: Vector3D,
    ) -> Spectrum {
        let cos = normal * to_light;
        if cos <= 0. {
            return Spectrum::BLACK;
        }
        let reflected = normal * (2. * cos) - to_light;
        let highlight = (reflected * to_viewer).max(0.).powf(self.shininess);
        self.diffuse * colour * cos + self.specular * colour * highlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct() {
        let r = PhongReflectance {
            diffuse: Spectrum::gray(0.5),
            specular: Spectrum::gray(0.2),
            shininess: 10.,
        };
        let n = Vector3D::new(0., 0., 1.);

        // Light from straight above, seen from straight above
        let found = r.direct(Spectrum::WHITE, n, n, n);
        assert!((found.red() - 0.7).abs() < 1e-9, "found {}", found);

        // Light from behind
        let found = r.direct(Spectrum::WHITE, n, n * -1., n);
        assert!(found.is_black());

        // Grazing view: no highlight
        let l = Vector3D::new(1., 0., 1.).get_normalized();
        let v = Vector3D::new(1., 0., 0.);
        let found = r.direct(Spectrum::WHITE, n, l, v);
        let expected = 0.5 * (2.0 as Float).sqrt() / 2.;
        assert!((found.red() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ambient() {
        let r = PhongReflectance {
            diffuse: Spectrum::new(0.5, 1., 0.),
            specular: Spectrum::BLACK,
            shininess: 1.,
        };
        assert_eq!(r.ambient(Spectrum::gray(0.5)), Spectrum::new(0.25, 0.5, 0.));
    }
}
