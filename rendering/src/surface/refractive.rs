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

use super::optics::{continue_from, mirror_direction, scale_tangential};
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::{check_positive, check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::intersection::SurfaceSide;
use geometry::Vector3D;
use serde::{Deserialize, Serialize};

/// Refracts `d` through a surface with `normal`, where `ratio` is the
/// refractive index on the far side divided by the one on the near
/// side. Returns `None` on total internal reflection.
pub(super) fn refract(d: Vector3D, normal: Vector3D, ratio: Float) -> Option<Vector3D> {
    scale_tangential(d, normal, 1. / ratio)
}

/// The index ratio seen by a ray hitting `side`, given the
/// ratio `inside / outside`
pub(super) fn ratio_for_side(side: SurfaceSide, inside_over_outside: Float) -> Option<Float> {
    match side {
        SurfaceSide::Front => Some(inside_over_outside),
        SurfaceSide::Back => Some(1. / inside_over_outside),
        SurfaceSide::NonApplicable => None,
    }
}

/// An interface between two media with real refractive indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refractive {
    /// Refractive index inside divided by refractive index outside
    refractive_index_ratio: Float,
    transmission_coefficient: Float,
    shadow_throwing: bool,
}

impl Refractive {
    pub fn new(refractive_index_ratio: Float, transmission_coefficient: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            refractive_index_ratio: check_positive("refractive_index_ratio", refractive_index_ratio)?,
            transmission_coefficient: check_range(
                "transmission_coefficient",
                transmission_coefficient,
                0.,
                1.,
            )?,
            shadow_throwing: true,
        })
    }

    /// A glass-like interface (ratio 1.5) with the default coefficient
    pub fn glass() -> Self {
        Self {
            refractive_index_ratio: 1.5,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            shadow_throwing: true,
        }
    }

    coefficient_accessors!();

    accessors! {
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_refractive_index_ratio(&self) -> Float {
        self.refractive_index_ratio
    }

    pub fn set_refractive_index_ratio(&mut self, refractive_index_ratio: Float) -> Result<(), ConfigError> {
        self.refractive_index_ratio = check_positive("refractive_index_ratio", refractive_index_ratio)?;
        Ok(())
    }
}

impl SurfaceTrait for Refractive {
    fn id(&self) -> &'static str {
        "Refractive"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("refractive_index_ratio", self.refractive_index_ratio)?;
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
        let ratio = match ratio_for_side(hit.side(), self.refractive_index_ratio) {
            Some(r) => r,
            None => return continue_from(incident, hit, d, self.transmission_coefficient),
        };
        let direction = match refract(d, n, ratio) {
            Some(direction) => direction,
            None => {
                log::debug!("Total internal reflection at {}", hit.point());
                mirror_direction(d, n)
            }
        };
        continue_from(incident, hit, direction, self.transmission_coefficient)
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

    #[test]
    fn test_snell() -> Result<(), String> {
        let model = SurfaceModel::Refractive(Refractive::new(1.5, 1.).map_err(|e| e.to_string())?);
        let d = Vector3D::new(0.5, 0., -(0.75 as Float).sqrt());
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        let sin_out = out.direction().x;
        assert!((sin_out - 0.5 / 1.5).abs() < 1e-9, "sin = {}", sin_out);
        assert!(out.direction().z < 0.);
        assert!((w - 1.).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_there_and_back_again() -> Result<(), String> {
        let into = SurfaceModel::Refractive(Refractive::new(1.33, 1.).map_err(|e| e.to_string())?);
        let out_of = SurfaceModel::Refractive(Refractive::new(1. / 1.33, 1.).map_err(|e| e.to_string())?);
        let d = Vector3D::new(0.3, -0.2, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (r1, _) = shade_continue(&into, &ray, &hit)?;
        let (ray2, hit2) = flat_hit(1., 1., r1.direction());
        let (r2, _) = shade_continue(&out_of, &ray2, &hit2)?;
        assert!(r2.direction().compare(d), "{} vs {}", r2.direction(), d);
        Ok(())
    }

    #[test]
    fn test_total_internal_reflection() -> Result<(), String> {
        let model = SurfaceModel::Refractive(Refractive::glass());
        // Leaving the glass at 60 degrees
        let d = Vector3D::new((0.75 as Float).sqrt(), 0., 0.5);
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(d.x, 0., -0.5)));
        assert!((w - DEFAULT_TRANSMISSION_COEFFICIENT).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_bad_ratio() {
        assert!(Refractive::new(0., 1.).is_err());
        assert!(Refractive::new(1.5, 1.2).is_err());
    }
}
