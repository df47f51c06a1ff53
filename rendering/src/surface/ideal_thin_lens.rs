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

pub(super) fn check_focal_length(f: Float) -> Result<Float, ConfigError> {
    if f == 0. || f.is_nan() {
        Err(ConfigError::ZeroFocalLength)
    } else {
        Ok(f)
    }
}

pub(super) fn check_direction(name: &'static str, d: Vector3D) -> Result<Vector3D, ConfigError> {
    if d.is_zero() {
        Err(ConfigError::ZeroLengthVector(name))
    } else {
        Ok(d.get_normalized())
    }
}

/// An ideal thin lens. It images perfectly, whatever the shape
/// of the surface it is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealThinLensSurface {
    principal_point: Point3D,
    optical_axis_direction: Vector3D,
    focal_length: Float,
    transmission_coefficient: Float,
}

impl IdealThinLensSurface {
    pub fn new(
        principal_point: Point3D,
        optical_axis_direction: Vector3D,
        focal_length: Float,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            principal_point,
            optical_axis_direction: check_direction("optical_axis_direction", optical_axis_direction)?,
            focal_length: check_focal_length(focal_length)?,
            transmission_coefficient: 1.,
        })
    }

    coefficient_accessors!();

    accessors! {
        principal_point: Point3D => get_principal_point, set_principal_point;
    }

    pub fn get_optical_axis_direction(&self) -> Vector3D {
        self.optical_axis_direction
    }

    pub fn set_optical_axis_direction(&mut self, d: Vector3D) -> Result<(), ConfigError> {
        self.optical_axis_direction = check_direction("optical_axis_direction", d)?;
        Ok(())
    }

    pub fn get_focal_length(&self) -> Float {
        self.focal_length
    }

    pub fn set_focal_length(&mut self, focal_length: Float) -> Result<(), ConfigError> {
        self.focal_length = check_focal_length(focal_length)?;
        Ok(())
    }
}

impl SurfaceTrait for IdealThinLensSurface {
    fn id(&self) -> &'static str {
        "IdealThinLensSurface"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_direction("optical_axis_direction", self.optical_axis_direction)?;
        check_focal_length(self.focal_length)?;
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
        let x = hit.point() - self.principal_point;
        match lens_law(incident.direction(), self.optical_axis_direction, x, self.focal_length) {
            Some(direction) => continue_from(incident, hit, direction, self.transmission_coefficient),
            None => {
                log::debug!("IdealThinLensSurface: ray parallel to the lens at {}", hit.point());
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
    fn test_focus() -> Result<(), String> {
        let lens = IdealThinLensSurface::new(Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.), 2.)
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::IdealThinLensSurface(lens);
        for (u, v) in [(0.5, 0.), (0., -0.3), (0.2, 0.7)] {
            let (ray, hit) = flat_hit(u, v, Vector3D::new(0., 0., -1.));
            let (out, _) = shade_continue(&model, &ray, &hit)?;
            // Reaches the focal point at z = -2
            let t = -2. / out.direction().z;
            let p = out.origin() + out.direction() * t;
            assert!(p.compare(Point3D::new(0., 0., -2.)), "p = {}", p);
        }
        Ok(())
    }

    #[test]
    fn test_zero_focal_length() {
        assert_eq!(
            IdealThinLensSurface::new(Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.), 0.),
            Err(ConfigError::ZeroFocalLength)
        );
        assert!(IdealThinLensSurface::new(Point3D::new(0., 0., 0.), Vector3D::zero(), 1.).is_err());
    }
}
