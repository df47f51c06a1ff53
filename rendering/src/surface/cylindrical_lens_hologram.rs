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
use super::optics::hologram_outcome;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

/// The phase hologram of a cylindrical lens: the phase varies
/// quadratically along `phase_gradient_direction` and is constant
/// along the perpendicular in-plane direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseHologramOfCylindricalLens {
    principal_point: Point3D,
    phase_gradient_direction: Vector3D,
    focal_length: Float,
    transmission_coefficient: Float,
}

impl PhaseHologramOfCylindricalLens {
    pub fn new(principal_point: Point3D, phase_gradient_direction: Vector3D, focal_length: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            principal_point,
            phase_gradient_direction: check_direction("phase_gradient_direction", phase_gradient_direction)?,
            focal_length: check_focal_length(focal_length)?,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        })
    }

    coefficient_accessors!();

    accessors! {
        principal_point: Point3D => get_principal_point, set_principal_point;
    }

    pub fn get_phase_gradient_direction(&self) -> Vector3D {
        self.phase_gradient_direction
    }

    pub fn set_phase_gradient_direction(&mut self, d: Vector3D) -> Result<(), ConfigError> {
        self.phase_gradient_direction = check_direction("phase_gradient_direction", d)?;
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

impl SurfaceTrait for PhaseHologramOfCylindricalLens {
    fn id(&self) -> &'static str {
        "PhaseHologramOfCylindricalLens"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_direction("phase_gradient_direction", self.phase_gradient_direction)?;
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
        let g = self.phase_gradient_direction;
        let x = (hit.point() - self.principal_point) * g;
        let delta = g * (-x / self.focal_length);
        hologram_outcome(self.id(), incident, hit, delta, self.transmission_coefficient)
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
