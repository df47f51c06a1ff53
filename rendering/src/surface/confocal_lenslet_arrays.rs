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

use super::optics::continue_from;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::intersection::SurfaceSide;
use geometry::Vector3D;
use serde::{Deserialize, Serialize};

/// Scales the tangential part of `d` by `eta`, keeping the normal part.
pub(super) fn scale_direction_ratio(d: Vector3D, normal: Vector3D, eta: Float) -> Option<Vector3D> {
    let dn = d * normal;
    if dn.abs() < 1e-12 {
        return None;
    }
    let out = d.tangential_part(normal) * eta + normal * dn;
    Some(out.get_normalized())
}

/// A pair of confocal lenslet arrays (a "CLAs" window), in the
/// ray-optics limit. The tangential components of the direction
/// get multiplied by `eta` (`-1` makes it a ray-flipping window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfocalLensletArrays {
    eta: Float,
    transmission_coefficient: Float,
}

fn check_eta(eta: Float) -> Result<Float, ConfigError> {
    if eta.is_finite() && eta != 0. {
        Ok(eta)
    } else {
        Err(ConfigError::OutOfRange {
            name: "eta",
            value: eta,
            min: Float::MIN,
            max: Float::MAX,
        })
    }
}

impl ConfocalLensletArrays {
    /// Creates a new window. `eta` cannot be zero, as
    /// rays hitting it from the back would have nowhere to go.
    pub fn new(eta: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            eta: check_eta(eta)?,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        })
    }

    coefficient_accessors!();

    pub fn get_eta(&self) -> Float {
        self.eta
    }

    pub fn set_eta(&mut self, eta: Float) -> Result<(), ConfigError> {
        self.eta = check_eta(eta)?;
        Ok(())
    }
}

impl SurfaceTrait for ConfocalLensletArrays {
    fn id(&self) -> &'static str {
        "ConfocalLensletArrays"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_eta(self.eta)?;
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
        let eta = match hit.side() {
            SurfaceSide::Back => 1. / self.eta,
            _ => self.eta,
        };
        match scale_direction_ratio(incident.direction(), hit.normal(), eta) {
            Some(direction) => continue_from(incident, hit, direction, self.transmission_coefficient),
            None => {
                log::debug!("ConfocalLensletArrays: grazing ray at {}", hit.point());
                TransportOutcome::Absorbed
            }
        }
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
