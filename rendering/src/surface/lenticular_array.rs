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
use super::ideal_thin_lens::check_focal_length;
use super::optics::lens_law;
use super::pixel_diffraction::PixelDiffraction;
use super::rectangular_lenslet_array::offset_from_centre;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::{check_positive, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// An array of cylindrical lenses whose focussing direction is `u`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenticularArray {
    period: Float,
    offset: Float,
    focal_length: Float,
    transmission_coefficient: Float,
    pixel_diffraction: PixelDiffraction,
}

impl LenticularArray {
    pub fn new(period: Float, focal_length: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            period: check_positive("period", period)?,
            offset: 0.,
            focal_length: check_focal_length(focal_length)?,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            pixel_diffraction: PixelDiffraction::default(),
        })
    }

    coefficient_accessors!();

    pixel_diffraction_accessors!();

    accessors! {
        offset: Float => get_offset, set_offset;
    }

    pub fn get_period(&self) -> Float {
        self.period
    }

    pub fn set_period(&mut self, period: Float) -> Result<(), ConfigError> {
        self.period = check_positive("period", period)?;
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

impl SurfaceTrait for LenticularArray {
    fn id(&self) -> &'static str {
        "LenticularArray"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("period", self.period)?;
        check_focal_length(self.focal_length)?;
        self.pixel_diffraction.validate()
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        rng: &mut RandGen,
    ) -> TransportOutcome {
        let dx = offset_from_centre(hit.u(), self.period, self.offset);
        let x = hit.info.dpdu * dx;
        let direction = match lens_law(incident.direction(), hit.normal(), x, self.focal_length) {
            Some(d) => d,
            None => {
                log::debug!("LenticularArray: grazing ray at {}", hit.point());
                return TransportOutcome::Absorbed;
            }
        };
        let frame = LocalFrame::from_interaction(hit);
        let (p, direction) = self
            .pixel_diffraction
            .apply(incident, &frame, hit.point(), direction, rng);
        TransportOutcome::Continue(incident.continued(p, direction), self.transmission_coefficient)
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
    use geometry::Vector3D;

    #[test]
    fn test_focuses_along_u_only() -> Result<(), String> {
        let model = SurfaceModel::LenticularArray(LenticularArray::new(1., 1.).map_err(|e| e.to_string())?);
        let (ray, hit) = flat_hit(2.25, 7.3, Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        let expected = Vector3D::new(-0.25, 0., -1.).get_normalized();
        assert!(out.direction().compare(expected), "{}", out.direction());
        Ok(())
    }
}
