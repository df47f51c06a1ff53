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

use super::basis::{BasisKind, LocalFrame};
use super::optics::{add_velocities, lorentz_aberration};
use super::{SurfaceTrait, TransportOutcome};
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

/// Checks that a velocity (in units of c) is slower than light
pub(super) fn check_beta(beta: Vector3D) -> Result<Vector3D, ConfigError> {
    let b = beta.length();
    if b < 1. {
        Ok(beta)
    } else {
        Err(ConfigError::OutOfRange {
            name: "|beta|",
            value: b,
            min: 0.,
            max: 1.,
        })
    }
}

/// The frame inside this surface moves with velocity `beta`
/// (in units of c) relative to the frame outside. Rays crossing it
/// get their direction Lorentz-transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorentzTransformInterface {
    beta: Vector3D,
    basis: BasisKind,
    transmission_coefficient: Float,
}

impl LorentzTransformInterface {
    pub fn new(beta: Vector3D, basis: BasisKind) -> Result<Self, ConfigError> {
        Ok(Self {
            beta: check_beta(beta)?,
            basis,
            transmission_coefficient: 1.,
        })
    }

    coefficient_accessors!();

    accessors! {
        basis: BasisKind => get_basis, set_basis;
    }

    pub fn get_beta(&self) -> Vector3D {
        self.beta
    }

    pub fn set_beta(&mut self, beta: Vector3D) -> Result<(), ConfigError> {
        self.beta = check_beta(beta)?;
        Ok(())
    }
}

impl SurfaceTrait for LorentzTransformInterface {
    fn id(&self) -> &'static str {
        "LorentzTransformInterface"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_beta(self.beta)?;
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
        let frame = LocalFrame::from_interaction(hit);
        let beta = self.basis.vector_to_world(self.beta, &frame);
        let d = incident.direction();
        // Light travels against the traced ray
        let beta = match hit.side() {
            SurfaceSide::Front => beta,
            SurfaceSide::Back => -beta,
            SurfaceSide::NonApplicable => {
                return TransportOutcome::Continue(incident.advanced_to(hit.point()), self.transmission_coefficient)
            }
        };
        // Boosts compose relativistically
        let frame_beta = match add_velocities(incident.frame_beta, beta) {
            Some(b) => b,
            None => {
                log::debug!("LorentzTransformInterface: incident ray in a superluminal frame at {}", hit.point());
                return TransportOutcome::Absorbed;
            }
        };
        match lorentz_aberration(-d, beta) {
            Some(l) => TransportOutcome::Continue(
                incident.continued(hit.point(), -l).with_frame_beta(frame_beta),
                self.transmission_coefficient,
            ),
            None => {
                log::debug!("LorentzTransformInterface: superluminal frame at {}", hit.point());
                TransportOutcome::Absorbed
            }
        }
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
    fn test_at_rest() -> Result<(), String> {
        let model = SurfaceModel::LorentzTransformInterface(
            LorentzTransformInterface::new(Vector3D::zero(), BasisKind::Global).map_err(|e| e.to_string())?,
        );
        let d = Vector3D::new(0.1, 0.2, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(d));
        assert!((w - 1.).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_in_and_out() -> Result<(), String> {
        // Velocity along the local normal
        let model = SurfaceModel::LorentzTransformInterface(
            LorentzTransformInterface::new(Vector3D::new(0.3, 0., 0.5), BasisKind::Local)
                .map_err(|e| e.to_string())?,
        );
        let d = Vector3D::new(0.4, -0.2, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (inside, _) = shade_continue(&model, &ray, &hit)?;
        assert!(!inside.direction().compare(d));
        assert!(inside.frame_beta.compare(Vector3D::new(0.3, 0., 0.5)));

        // Leaving through a parallel surface undoes the transformation
        let (ray2, mut hit2) = flat_hit(0., 0., inside.direction());
        let ray2 = ray2.with_frame_beta(inside.frame_beta);
        hit2.info.side = SurfaceSide::Back;
        let (out, _) = shade_continue(&model, &ray2, &hit2)?;
        assert!(out.direction().compare(d), "{} vs {}", out.direction(), d);
        assert!(out.frame_beta.is_zero());
        Ok(())
    }

    #[test]
    fn test_crossing_frames_compose() -> Result<(), String> {
        let along_x = SurfaceModel::LorentzTransformInterface(
            LorentzTransformInterface::new(Vector3D::new(0.9, 0., 0.), BasisKind::Global)
                .map_err(|e| e.to_string())?,
        );
        let along_y = SurfaceModel::LorentzTransformInterface(
            LorentzTransformInterface::new(Vector3D::new(0., 0.9, 0.), BasisKind::Global)
                .map_err(|e| e.to_string())?,
        );
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        let (first, _) = shade_continue(&along_x, &ray, &hit)?;
        let (ray2, hit2) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        let (second, _) = shade_continue(&along_y, &ray2.with_frame_beta(first.frame_beta), &hit2)?;
        let b = second.frame_beta;
        assert!(b.length() < 1., "|beta| = {}", b.length());
        assert!((b.x - 0.9).abs() < 1e-12);
        assert!((b.y - 0.9 * (0.19 as Float).sqrt()).abs() < 1e-12, "{}", b);
        Ok(())
    }

    #[test]
    fn test_superluminal() {
        assert!(LorentzTransformInterface::new(Vector3D::new(0.8, 0.8, 0.), BasisKind::Global).is_err());
    }
}
