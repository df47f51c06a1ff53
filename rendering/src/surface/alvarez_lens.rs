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

use super::basis::LocalFrame;
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

/// One of the two parts of an Alvarez lens: a phase hologram with
/// the cubic phase `a (x^3/3 + x y^2)`, where `x` and `y` are measured
/// from `centre` along `u_direction` and the perpendicular in-plane
/// direction. Two of them, shifted relative to each other, make a
/// lens of variable power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlvarezLensSurface {
    centre: Point3D,
    u_direction: Vector3D,
    a: Float,
    transmission_coefficient: Float,
}

impl AlvarezLensSurface {
    pub fn new(centre: Point3D, u_direction: Vector3D, a: Float) -> Result<Self, ConfigError> {
        if u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
        Ok(Self {
            centre,
            u_direction,
            a,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        })
    }

    coefficient_accessors!();

    accessors! {
        centre: Point3D => get_centre, set_centre;
        a: Float => get_a, set_a;
    }

    pub fn get_u_direction(&self) -> Vector3D {
        self.u_direction
    }

    pub fn set_u_direction(&mut self, u_direction: Vector3D) -> Result<(), ConfigError> {
        if u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
        self.u_direction = u_direction;
        Ok(())
    }
}

impl SurfaceTrait for AlvarezLensSurface {
    fn id(&self) -> &'static str {
        "AlvarezLensSurface"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
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
        let frame = LocalFrame::aligned(hit, self.u_direction);
        let r = hit.point() - self.centre;
        let (x, y) = (r * frame.u, r * frame.v);
        let delta = frame.u * (self.a * (x * x + y * y)) + frame.v * (2. * self.a * x * y);
        hologram_outcome(self.id(), incident, hit, delta, self.transmission_coefficient)
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
