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
use super::pixel_diffraction::PixelDiffraction;
use super::{SurfaceTrait, TransportOutcome};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A window made of small pixels. Rays go straight through, blurred by
/// diffraction at the pixel apertures and offset within the pixel,
/// depending on which approximations are switched on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pixellation {
    pixel_diffraction: PixelDiffraction,
    transmission_coefficient: Float,
}

impl Pixellation {
    /// Creates a window with square pixels of side `pixel_side` and both
    /// approximations on
    pub fn new(lambda: Float, pixel_side: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            pixel_diffraction: PixelDiffraction::new(lambda, pixel_side, pixel_side)?,
            transmission_coefficient: 1.,
        })
    }

    coefficient_accessors!();

    pixel_diffraction_accessors!();
}

impl SurfaceTrait for Pixellation {
    fn id(&self) -> &'static str {
        "Pixellation"
    }

    fn validate(&self) -> Result<(), ConfigError> {
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
        let frame = LocalFrame::from_interaction(hit);
        let (p, direction) =
            self.pixel_diffraction
                .apply(incident, &frame, hit.point(), incident.direction(), rng);
        TransportOutcome::Continue(incident.continued(p, direction), self.transmission_coefficient)
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
