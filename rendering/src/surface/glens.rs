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

use super::ideal_thin_lens::{check_direction, check_focal_length};
use super::optics::{continue_from, lens_law};
use super::{SurfaceTrait, TransportOutcome};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

/// A generalised lens, with different focal lengths on each side.
///
/// `g` is the focal length in negative space (behind the lens, relative
/// to the optical axis direction) and `g_prime` the one in positive space.
/// For a standard lens `g = -f` and `g_prime = f`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlensSurface {
    nodal_point: Point3D,
    optical_axis_direction: Vector3D,
    g: Float,
    g_prime: Float,
    transmission_coefficient: Float,
}

impl GlensSurface {
    pub fn new(
        nodal_point: Point3D,
        optical_axis_direction: Vector3D,
        g: Float,
        g_prime: Float,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            nodal_point,
            optical_axis_direction: check_direction("optical_axis_direction", optical_axis_direction)?,
            g: check_focal_length(g)?,
            g_prime: check_focal_length(g_prime)?,
            transmission_coefficient: 1.,
        })
    }

    coefficient_accessors!();

    accessors! {
        nodal_point: Point3D => get_nodal_point, set_nodal_point;
    }

    pub fn get_optical_axis_direction(&self) -> Vector3D {
        self.optical_axis_direction
    }

    pub fn set_optical_axis_direction(&mut self, d: Vector3D) -> Result<(), ConfigError> {
        self.optical_axis_direction = check_direction("optical_axis_direction", d)?;
        Ok(())
    }

    pub fn get_g(&self) -> Float {
        self.g
    }

    pub fn set_g(&mut self, g: Float) -> Result<(), ConfigError> {
        self.g = check_focal_length(g)?;
        Ok(())
    }

    pub fn get_g_prime(&self) -> Float {
        self.g_prime
    }

    pub fn set_g_prime(&mut self, g_prime: Float) -> Result<(), ConfigError> {
        self.g_prime = check_focal_length(g_prime)?;
        Ok(())
    }
}

impl SurfaceTrait for GlensSurface {
    fn id(&self) -> &'static str {
        "GlensSurface"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_direction("optical_axis_direction", self.optical_axis_direction)?;
        check_focal_length(self.g)?;
        check_focal_length(self.g_prime)?;
        Ok(())
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        let d = incident.direction();
        let f = if d * self.optical_axis_direction > 0. {
            self.g_prime
        } else {
            -self.g
        };
        let x = hit.point() - self.nodal_point;
        match lens_law(d, self.optical_axis_direction, x, f) {
            Some(direction) => continue_from(incident, hit, direction, self.transmission_coefficient),
            None => {
                log::debug!("GlensSurface: ray parallel to the glens at {}", hit.point());
                TransportOutcome::Absorbed
            }
        }
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::test_utils::*;
    use crate::surface::SurfaceModel;

    #[test]
    fn test_focal_points() -> Result<(), String> {
        let glens = GlensSurface::new(Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.), -1., 3.)
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::GlensSurface(glens);

        // Travelling towards negative space: focus at z = g
        let (ray, hit) = flat_hit(0.4, 0., Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        let t = -1. / out.direction().z;
        assert!((out.origin() + out.direction() * t).compare(Point3D::new(0., 0., -1.)));

        // Travelling towards positive space: focus at z = g'
        let (ray, hit) = flat_hit(0.4, 0., Vector3D::new(0., 0., 1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        let t = 3. / out.direction().z;
        assert!((out.origin() + out.direction() * t).compare(Point3D::new(0., 0., 3.)));
        Ok(())
    }

    #[test]
    fn test_nodal_point() -> Result<(), String> {
        let glens = GlensSurface::new(Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.), -2., 5.)
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::GlensSurface(glens);
        let d = Vector3D::new(0.3, 0.3, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(d));
        Ok(())
    }
}
