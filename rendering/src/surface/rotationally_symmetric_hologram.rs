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

use super::optics::hologram_outcome;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::Point3D;
use serde::{Deserialize, Serialize};

/// A phase hologram whose phase gradient points radially (away from
/// `centre`) and has magnitude `b r^n`. With `n = 1` and `b = -1/f`
/// it is a lens of focal length `f`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationallySymmetricPhaseHologram {
    centre: Point3D,
    b: Float,
    n: Float,
    transmission_coefficient: Float,
}

impl RotationallySymmetricPhaseHologram {
    pub fn new(centre: Point3D, b: Float, n: Float) -> Self {
        Self {
            centre,
            b,
            n,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        }
    }

    coefficient_accessors!();

    accessors! {
        centre: Point3D => get_centre, set_centre;
        b: Float => get_b, set_b;
        n: Float => get_n, set_n;
    }
}

impl SurfaceTrait for RotationallySymmetricPhaseHologram {
    fn id(&self) -> &'static str {
        "RotationallySymmetricPhaseHologram"
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        let r = (hit.point() - self.centre).tangential_part(hit.normal());
        let length = r.length();
        if length < 1e-12 {
            return hologram_outcome(self.id(), incident, hit, r, self.transmission_coefficient);
        }
        let delta = (r / length) * (self.b * length.powf(self.n));
        hologram_outcome(self.id(), incident, hit, delta, self.transmission_coefficient)
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
    fn test_acts_as_lens() -> Result<(), String> {
        let h = RotationallySymmetricPhaseHologram::new(Point3D::new(0., 0., 0.), -0.5, 1.);
        let model = SurfaceModel::RotationallySymmetricPhaseHologram(h);
        let (ray, hit) = flat_hit(0.3, -0.4, Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        let d = out.direction();
        assert!((d.x + 0.15).abs() < 1e-12 && (d.y - 0.2).abs() < 1e-12, "{}", d);

        // Centre: nothing happens
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(0., 0., -1.)));
        Ok(())
    }
}
