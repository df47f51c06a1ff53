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

use super::optics::mirror_direction;
use super::{SurfaceTrait, TransportOutcome};
use crate::error::{check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A semi-transparent mirror: part of the light is reflected and
/// part of it goes straight through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSplitter {
    reflection_coefficient: Float,
    transmission_coefficient: Float,
    shadow_throwing: bool,
}

fn check(reflection: Float, transmission: Float) -> Result<(Float, Float), ConfigError> {
    let r = check_range("reflection_coefficient", reflection, 0., 1.)?;
    let t = check_range("transmission_coefficient", transmission, 0., 1. - r)?;
    Ok((r, t))
}

impl BeamSplitter {
    /// Creates a new `BeamSplitter`. The two coefficients cannot add up to more than one.
    pub fn new(reflection_coefficient: Float, transmission_coefficient: Float) -> Result<Self, ConfigError> {
        let (reflection_coefficient, transmission_coefficient) =
            check(reflection_coefficient, transmission_coefficient)?;
        Ok(Self {
            reflection_coefficient,
            transmission_coefficient,
            shadow_throwing: false,
        })
    }

    accessors! {
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_reflection_coefficient(&self) -> Float {
        self.reflection_coefficient
    }

    pub fn set_reflection_coefficient(&mut self, reflection_coefficient: Float) -> Result<(), ConfigError> {
        (self.reflection_coefficient, self.transmission_coefficient) =
            check(reflection_coefficient, self.transmission_coefficient)?;
        Ok(())
    }

    pub fn get_transmission_coefficient(&self) -> Float {
        self.transmission_coefficient
    }

    pub fn set_transmission_coefficient(&mut self, transmission_coefficient: Float) -> Result<(), ConfigError> {
        (self.reflection_coefficient, self.transmission_coefficient) =
            check(self.reflection_coefficient, transmission_coefficient)?;
        Ok(())
    }
}

impl SurfaceTrait for BeamSplitter {
    fn id(&self) -> &'static str {
        "BeamSplitter"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check(self.reflection_coefficient, self.transmission_coefficient)?;
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
        let d = incident.direction();
        let p = hit.point();
        TransportOutcome::Split(vec![
            (
                incident.continued(p, mirror_direction(d, hit.normal())),
                self.reflection_coefficient,
            ),
            (incident.continued(p, d), self.transmission_coefficient),
        ])
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
    fn test_split() -> Result<(), String> {
        let model = SurfaceModel::BeamSplitter(BeamSplitter::new(0.3, 0.6).map_err(|e| e.to_string())?);
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 1., -1.));
        let outcome = shade(&model, &ray, &hit);
        assert!((outcome.total_weight() - 0.9).abs() < 1e-12);
        match outcome {
            TransportOutcome::Split(rays) => {
                assert_eq!(rays.len(), 2);
                assert!(rays[0].0.direction().compare(Vector3D::new(0., 1., 1.).get_normalized()));
                assert!(rays[1].0.direction().compare(Vector3D::new(0., 1., -1.).get_normalized()));
            }
            other => return Err(format!("Expecting Split, found {:?}", other)),
        }
        Ok(())
    }

    #[test]
    fn test_energy_check() {
        assert!(BeamSplitter::new(0.6, 0.6).is_err());
        let mut b = BeamSplitter::new(0.5, 0.5).unwrap();
        assert!(b.set_reflection_coefficient(0.7).is_err());
        assert!(b.set_transmission_coefficient(0.2).is_ok());
        assert!(b.set_reflection_coefficient(0.7).is_ok());
    }
}
