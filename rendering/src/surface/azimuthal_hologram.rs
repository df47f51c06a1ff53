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
use super::optics::{apply_tangential_change, mirror_direction};
use super::pixel_diffraction::PixelDiffraction;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::Point3D;
use serde::{Deserialize, Serialize};

/// A phase hologram whose phase grows linearly with the azimuth
/// around `centre` (e.g., the hologram of a vortex or a wedge).
/// The tangential direction changes by `strength / r` in the
/// azimuthal direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzimuthalPhaseHologram {
    centre: Point3D,
    strength: Float,
    transmission_coefficient: Float,
    pixel_diffraction: PixelDiffraction,
}

impl AzimuthalPhaseHologram {
    pub fn new(centre: Point3D, strength: Float) -> Self {
        Self {
            centre,
            strength,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            pixel_diffraction: PixelDiffraction::default(),
        }
    }

    coefficient_accessors!();

    pixel_diffraction_accessors!();

    accessors! {
        centre: Point3D => get_centre, set_centre;
        strength: Float => get_strength, set_strength;
    }
}

impl SurfaceTrait for AzimuthalPhaseHologram {
    fn id(&self) -> &'static str {
        "AzimuthalPhaseHologram"
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
        let d = incident.direction();
        let n = hit.normal();
        let r = (hit.point() - self.centre).tangential_part(n);
        let r2 = r.length_squared();
        // The singularity at the centre
        if r2 < 1e-24 {
            return TransportOutcome::Continue(incident.advanced_to(hit.point()), self.transmission_coefficient);
        }
        // e_theta / r
        let delta = n.cross(r) * (self.strength / r2);
        let direction = match apply_tangential_change(d, n, delta) {
            Some(direction) => direction,
            None => {
                log::debug!("AzimuthalPhaseHologram: evanescent wave at {}", hit.point());
                mirror_direction(d, n)
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
