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
use super::lorentz_transform_interface::check_beta;
use super::optics::galilean_aberration;
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

/// Like [`super::LorentzTransformInterface`], but the velocities of
/// light and frame are simply added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalileoTransformInterface {
    beta: Vector3D,
    basis: BasisKind,
    transmission_coefficient: Float,
}

impl GalileoTransformInterface {
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

impl SurfaceTrait for GalileoTransformInterface {
    fn id(&self) -> &'static str {
        "GalileoTransformInterface"
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
        let (beta, frame_beta) = match hit.side() {
            SurfaceSide::Front => (beta, incident.frame_beta + beta),
            SurfaceSide::Back => (-beta, incident.frame_beta - beta),
            SurfaceSide::NonApplicable => {
                return TransportOutcome::Continue(incident.advanced_to(hit.point()), self.transmission_coefficient)
            }
        };
        match galilean_aberration(-incident.direction(), beta) {
            Some(l) => TransportOutcome::Continue(
                incident.continued(hit.point(), -l).with_frame_beta(frame_beta),
                self.transmission_coefficient,
            ),
            None => {
                log::debug!("GalileoTransformInterface: light at rest at {}", hit.point());
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
    fn test_velocity_addition() -> Result<(), String> {
        let model = SurfaceModel::GalileoTransformInterface(
            GalileoTransformInterface::new(Vector3D::new(0.5, 0., 0.), BasisKind::Global)
                .map_err(|e| e.to_string())?,
        );
        let d = Vector3D::new(0., 0., -1.);
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(0.5, 0., -1.).get_normalized()));
        assert!(out.frame_beta.compare(Vector3D::new(0.5, 0., 0.)));
        Ok(())
    }
}
