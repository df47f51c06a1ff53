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
use crate::error::{check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// Lets rays through, undeviated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transparent {
    transmission_coefficient: Float,
    shadow_throwing: bool,
}

impl std::default::Default for Transparent {
    fn default() -> Self {
        Self {
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            shadow_throwing: false,
        }
    }
}

impl Transparent {
    pub fn new(transmission_coefficient: Float, shadow_throwing: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            transmission_coefficient: check_range(
                "transmission_coefficient",
                transmission_coefficient,
                0.,
                1.,
            )?,
            shadow_throwing,
        })
    }

    coefficient_accessors!();

    accessors! {
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }
}

impl SurfaceTrait for Transparent {
    fn id(&self) -> &'static str {
        "Transparent"
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        continue_from(incident, hit, incident.direction(), self.transmission_coefficient)
    }

    fn has_shadow_control(&self) -> bool {
        true
    }

    fn is_shadow_throwing(&self) -> bool {
        self.shadow_throwing
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
    fn test_straight_through() -> Result<(), String> {
        let model = SurfaceModel::Transparent(Transparent::default());
        let d = Vector3D::new(0.2, -0.3, -1.).get_normalized();
        let (ray, hit) = flat_hit(0.5, 0.5, d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(d));
        assert!((w - DEFAULT_TRANSMISSION_COEFFICIENT).abs() < 1e-12);
        assert_eq!(model.transmission_coefficient(), Some(DEFAULT_TRANSMISSION_COEFFICIENT));
        Ok(())
    }

    #[test]
    fn test_set_coefficient() {
        let mut t = Transparent::default();
        assert!(t.set_transmission_coefficient(1.5).is_err());
        assert!(t.set_transmission_coefficient(0.5).is_ok());
        assert!((t.get_transmission_coefficient() - 0.5).abs() < 1e-12);
    }
}
