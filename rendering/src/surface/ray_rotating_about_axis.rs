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

use super::basis::{BasisKind, LocalFrame};
use super::ideal_thin_lens::check_direction;
use super::optics::continue_from;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::Vector3D;
use serde::{Deserialize, Serialize};

/// Rotates the direction of rays by `rotation_angle` around an
/// arbitrary axis, given either in world coordinates or in the
/// local `(u, v, n)` frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayRotatingAboutArbitraryAxisDirection {
    rotation_angle: Float,
    rotation_axis_direction: Vector3D,
    basis: BasisKind,
    transmission_coefficient: Float,
}

impl RayRotatingAboutArbitraryAxisDirection {
    pub fn new(rotation_angle: Float, rotation_axis_direction: Vector3D, basis: BasisKind) -> Result<Self, ConfigError> {
        Ok(Self {
            rotation_angle,
            rotation_axis_direction: check_direction("rotation_axis_direction", rotation_axis_direction)?,
            basis,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        })
    }

    coefficient_accessors!();

    accessors! {
        rotation_angle: Float => get_rotation_angle, set_rotation_angle;
        basis: BasisKind => get_basis, set_basis;
    }

    pub fn get_rotation_axis_direction(&self) -> Vector3D {
        self.rotation_axis_direction
    }

    pub fn set_rotation_axis_direction(&mut self, d: Vector3D) -> Result<(), ConfigError> {
        self.rotation_axis_direction = check_direction("rotation_axis_direction", d)?;
        Ok(())
    }
}

impl SurfaceTrait for RayRotatingAboutArbitraryAxisDirection {
    fn id(&self) -> &'static str {
        "RayRotatingAboutArbitraryAxisDirection"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_direction("rotation_axis_direction", self.rotation_axis_direction)?;
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
        let frame = LocalFrame::from_interaction(hit);
        let axis = self.basis.vector_to_world(self.rotation_axis_direction, &frame);
        let direction = incident.direction().rotate_around(axis, self.rotation_angle);
        continue_from(incident, hit, direction, self.transmission_coefficient)
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
    use crate::PI;

    #[test]
    fn test_rotation() -> Result<(), String> {
        let m = RayRotatingAboutArbitraryAxisDirection::new(PI / 2., Vector3D::new(1., 0., 0.), BasisKind::Global)
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::RayRotatingAboutArbitraryAxisDirection(m);
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., -1., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(0., 1., -1.).get_normalized()), "{}", out.direction());
        Ok(())
    }

    #[test]
    fn test_zero_axis() {
        assert_eq!(
            RayRotatingAboutArbitraryAxisDirection::new(1., Vector3D::zero(), BasisKind::Local),
            Err(ConfigError::ZeroLengthVector("rotation_axis_direction"))
        );
    }
}
