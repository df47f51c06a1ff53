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

use super::optics::{continue_from, mirror_direction};
use super::refractive::{ratio_for_side, refract};
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::complex::Complex;
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// What to do with rays for which a complex index gives
/// no physical transmitted ray
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonPhysicalPolicy {
    #[default]
    Absorb,
    Reflect,
}

/// An interface between two media whose refractive index ratio
/// is a complex number. A purely real ratio behaves exactly
/// like [`super::Refractive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefractiveComplex {
    /// Refractive index inside divided by refractive index outside
    refractive_index_ratio: Complex,
    transmission_coefficient: Float,
    non_physical_policy: NonPhysicalPolicy,
    shadow_throwing: bool,
}

fn check_ratio(ratio: Complex) -> Result<Complex, ConfigError> {
    if ratio.norm_sqr() < 1e-24 || !ratio.norm_sqr().is_finite() {
        Err(ConfigError::NonPositive {
            name: "|refractive_index_ratio|",
            value: ratio.abs(),
        })
    } else {
        Ok(ratio)
    }
}

impl RefractiveComplex {
    pub fn new(refractive_index_ratio: Complex, transmission_coefficient: Float) -> Result<Self, ConfigError> {
        let mut ret = Self {
            refractive_index_ratio: Complex::real(1.),
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            non_physical_policy: NonPhysicalPolicy::default(),
            shadow_throwing: true,
        };
        ret.set_refractive_index_ratio(refractive_index_ratio)?;
        ret.set_transmission_coefficient(transmission_coefficient)?;
        Ok(ret)
    }

    coefficient_accessors!();

    accessors! {
        non_physical_policy: NonPhysicalPolicy => get_non_physical_policy, set_non_physical_policy;
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_refractive_index_ratio(&self) -> Complex {
        self.refractive_index_ratio
    }

    /// Sets the ratio. It cannot be zero.
    pub fn set_refractive_index_ratio(&mut self, refractive_index_ratio: Complex) -> Result<(), ConfigError> {
        self.refractive_index_ratio = check_ratio(refractive_index_ratio)?;
        Ok(())
    }

    fn non_physical(&self, incident: &Ray, hit: &Interaction) -> TransportOutcome {
        log::debug!(
            "No physical transmitted ray through {} at {}",
            self.refractive_index_ratio,
            hit.point()
        );
        match self.non_physical_policy {
            NonPhysicalPolicy::Absorb => TransportOutcome::Absorbed,
            NonPhysicalPolicy::Reflect => continue_from(
                incident,
                hit,
                mirror_direction(incident.direction(), hit.normal()),
                self.transmission_coefficient,
            ),
        }
    }
}

impl SurfaceTrait for RefractiveComplex {
    fn id(&self) -> &'static str {
        "RefractiveComplex"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_ratio(self.refractive_index_ratio)?;
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
        let n = hit.normal();
        let nr = self.refractive_index_ratio;

        if nr.is_real() {
            let ratio = match ratio_for_side(hit.side(), nr.re) {
                Some(r) if nr.re > 0. => r,
                Some(_) => return self.non_physical(incident, hit),
                None => return continue_from(incident, hit, d, self.transmission_coefficient),
            };
            let direction = match refract(d, n, ratio) {
                Some(direction) => direction,
                None => {
                    log::debug!("Total internal reflection at {}", hit.point());
                    mirror_direction(d, n)
                }
            };
            return continue_from(incident, hit, direction, self.transmission_coefficient);
        }

        // Absorbing (or amplifying) medium: the direction follows Re(n),
        // the energy is scaled by Re(n)^2/|n|^2
        if nr.re <= 0. {
            return self.non_physical(incident, hit);
        }
        let ratio = match ratio_for_side(hit.side(), nr.re) {
            Some(r) => r,
            None => return continue_from(incident, hit, d, self.transmission_coefficient),
        };
        let weight = self.transmission_coefficient * nr.re * nr.re / nr.norm_sqr();
        match refract(d, n, ratio) {
            Some(direction) => continue_from(incident, hit, direction, weight),
            None => self.non_physical(incident, hit),
        }
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
    use crate::surface::{Refractive, SurfaceModel};
    use geometry::Vector3D;

    #[test]
    fn test_real_matches_refractive() -> Result<(), String> {
        let complex = SurfaceModel::RefractiveComplex(
            RefractiveComplex::new(Complex::real(1.5), 0.9).map_err(|e| e.to_string())?,
        );
        let real = SurfaceModel::Refractive(Refractive::new(1.5, 0.9).map_err(|e| e.to_string())?);
        for d in [
            Vector3D::new(0.3, 0.1, -1.),
            Vector3D::new(0.9, 0., 0.3),
            Vector3D::new(-0.2, 0.5, 1.),
        ] {
            let (ray, hit) = flat_hit(0., 0., d);
            assert_eq!(shade(&complex, &ray, &hit), shade(&real, &ray, &hit));
        }
        Ok(())
    }

    #[test]
    fn test_absorbing_weight() -> Result<(), String> {
        let model = SurfaceModel::RefractiveComplex(
            RefractiveComplex::new(Complex::new(1., 1.), 1.).map_err(|e| e.to_string())?,
        );
        let d = Vector3D::new(0., 0., -1.);
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(d));
        assert!((w - 0.5).abs() < 1e-12);
        assert!(shade(&model, &ray, &hit).total_weight() <= 1.);
        Ok(())
    }

    #[test]
    fn test_non_physical() -> Result<(), String> {
        let mut m = RefractiveComplex::new(Complex::new(-1., 0.2), 1.).map_err(|e| e.to_string())?;
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        let model = SurfaceModel::RefractiveComplex(m.clone());
        assert_eq!(shade(&model, &ray, &hit), TransportOutcome::Absorbed);

        m.set_non_physical_policy(NonPhysicalPolicy::Reflect);
        let model = SurfaceModel::RefractiveComplex(m);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(0., 0., 1.)));

        assert!(RefractiveComplex::new(Complex::new(0., 0.), 1.).is_err());
        Ok(())
    }
}
