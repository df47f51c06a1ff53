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
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::{check_positive, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// The position of `x` relative to the centre of the period it falls in
pub(super) fn offset_from_centre(x: Float, period: Float, offset: Float) -> Float {
    let centre = offset + period * ((x - offset) / period).round();
    x - centre
}

/// A rectangular array of ideal thin lenses, laid out on the
/// surface's `(u, v)` coordinates. The lenses' optical axes
/// follow the surface normal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularLensletArray {
    period_u: Float,
    period_v: Float,
    /// The `u` coordinate of the centre of one of the lenslets
    offset_u: Float,
    /// The `v` coordinate of the centre of one of the lenslets
    offset_v: Float,
    focal_length: Float,
    transmission_coefficient: Float,
    pixel_diffraction: PixelDiffraction,
}

impl RectangularLensletArray {
    pub fn new(period_u: Float, period_v: Float, focal_length: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            period_u: check_positive("period_u", period_u)?,
            period_v: check_positive("period_v", period_v)?,
            offset_u: 0.,
            offset_v: 0.,
            focal_length: check_focal_length(focal_length)?,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            pixel_diffraction: PixelDiffraction::default(),
        })
    }

    coefficient_accessors!();

    pixel_diffraction_accessors!();

    accessors! {
        offset_u: Float => get_offset_u, set_offset_u;
        offset_v: Float => get_offset_v, set_offset_v;
    }

    pub fn get_period_u(&self) -> Float {
        self.period_u
    }

    pub fn set_period_u(&mut self, period_u: Float) -> Result<(), ConfigError> {
        self.period_u = check_positive("period_u", period_u)?;
        Ok(())
    }

    pub fn get_period_v(&self) -> Float {
        self.period_v
    }

    pub fn set_period_v(&mut self, period_v: Float) -> Result<(), ConfigError> {
        self.period_v = check_positive("period_v", period_v)?;
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

impl SurfaceTrait for RectangularLensletArray {
    fn id(&self) -> &'static str {
        "RectangularLensletArray"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("period_u", self.period_u)?;
        check_positive("period_v", self.period_v)?;
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
        let dx = offset_from_centre(hit.u(), self.period_u, self.offset_u);
        let dy = offset_from_centre(hit.v(), self.period_v, self.offset_v);
        let x = hit.info.dpdu * dx + hit.info.dpdv * dy;
        let direction = match lens_law(incident.direction(), hit.normal(), x, self.focal_length) {
            Some(d) => d,
            None => {
                log::debug!("RectangularLensletArray: grazing ray at {}", hit.point());
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
    use geometry::{Point3D, Vector3D};

    #[test]
    fn test_offset_from_centre() {
        assert!((offset_from_centre(0.3, 1., 0.) - 0.3).abs() < 1e-12);
        assert!((offset_from_centre(0.7, 1., 0.) + 0.3).abs() < 1e-12);
        assert!((offset_from_centre(2.1, 1., 0.5) + 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_each_lenslet_focuses() -> Result<(), String> {
        let array = RectangularLensletArray::new(1., 2., 0.5).map_err(|e| e.to_string())?;
        let model = SurfaceModel::RectangularLensletArray(array);
        // Lenslet centred at (3, -2)
        for (u, v) in [(3.2, -2.3), (2.9, -1.5)] {
            let (ray, hit) = flat_hit(u, v, Vector3D::new(0., 0., -1.));
            let (out, _) = shade_continue(&model, &ray, &hit)?;
            let t = -0.5 / out.direction().z;
            let p = out.origin() + out.direction() * t;
            assert!(p.compare(Point3D::new(3., -2., -0.5)), "p = {}", p);
        }
        Ok(())
    }
}
