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
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::{check_positive, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::intersection::SurfaceSide;
use geometry::Vector3D;
use serde::{Deserialize, Serialize};

/// How the fraction of light that makes it through a GCLAs
/// window is calculated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionCoefficientMethod {
    /// Always the transmission coefficient
    #[default]
    Constant,

    /// The transmission coefficient times the fraction of the
    /// light that hits the right lenslet in the second array,
    /// which drops as rays get more oblique
    Geometric,
}

/// Generalised confocal lenslet arrays.
///
/// In the local `(u, v, n)` frame, an incident direction `(du, dv, dn)`
/// leaves as `(eta_u du + delta_u dn, eta_v dv + delta_v dn, dn)`,
/// normalized. `eta` scales the direction components and `delta`
/// comes from an offset between the lenslet arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralisedConfocalLensletArrays {
    eta_u: Float,
    eta_v: Float,
    delta_u: Float,
    delta_v: Float,
    /// The direction of `u` in world coordinates; only its
    /// in-plane part matters
    u_direction: Vector3D,
    transmission_coefficient: Float,
    transmission_coefficient_method: TransmissionCoefficientMethod,
    /// Focal length of the first lenslets divided by the lenslet pitch,
    /// for [`TransmissionCoefficientMethod::Geometric`]
    f_over_pitch: Float,
    pixel_diffraction: PixelDiffraction,
}

impl GeneralisedConfocalLensletArrays {
    pub fn new(eta_u: Float, eta_v: Float, delta_u: Float, delta_v: Float, u_direction: Vector3D) -> Result<Self, ConfigError> {
        if u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
        Ok(Self {
            eta_u,
            eta_v,
            delta_u,
            delta_v,
            u_direction,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
            transmission_coefficient_method: TransmissionCoefficientMethod::default(),
            f_over_pitch: 1.,
            pixel_diffraction: PixelDiffraction::default(),
        })
    }

    coefficient_accessors!();

    pixel_diffraction_accessors!();

    accessors! {
        eta_u: Float => get_eta_u, set_eta_u;
        eta_v: Float => get_eta_v, set_eta_v;
        delta_u: Float => get_delta_u, set_delta_u;
        delta_v: Float => get_delta_v, set_delta_v;
        transmission_coefficient_method: TransmissionCoefficientMethod => get_transmission_coefficient_method, set_transmission_coefficient_method;
    }

    pub fn get_u_direction(&self) -> Vector3D {
        self.u_direction
    }

    pub fn set_u_direction(&mut self, u_direction: Vector3D) -> Result<(), ConfigError> {
        if u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
        self.u_direction = u_direction;
        Ok(())
    }

    pub fn get_f_over_pitch(&self) -> Float {
        self.f_over_pitch
    }

    pub fn set_f_over_pitch(&mut self, f_over_pitch: Float) -> Result<(), ConfigError> {
        self.f_over_pitch = check_positive("f_over_pitch", f_over_pitch)?;
        Ok(())
    }

    /// Maps local direction components. Rays hitting the back go
    /// through the inverse mapping.
    fn map(&self, local: Vector3D, side: SurfaceSide) -> Option<Vector3D> {
        let dn = local.z;
        if dn.abs() < 1e-12 {
            return None;
        }
        let (du, dv) = match side {
            SurfaceSide::Back => {
                if self.eta_u == 0. || self.eta_v == 0. {
                    return None;
                }
                (
                    (local.x - self.delta_u * dn) / self.eta_u,
                    (local.y - self.delta_v * dn) / self.eta_v,
                )
            }
            _ => (
                self.eta_u * local.x + self.delta_u * dn,
                self.eta_v * local.y + self.delta_v * dn,
            ),
        };
        Some(Vector3D::new(du, dv, dn).get_normalized())
    }

    fn transmission(&self, local: Vector3D) -> Float {
        match self.transmission_coefficient_method {
            TransmissionCoefficientMethod::Constant => self.transmission_coefficient,
            TransmissionCoefficientMethod::Geometric => {
                let dn = local.z.abs();
                let fu = (1. - (local.x / dn).abs() * self.f_over_pitch).clamp(0., 1.);
                let fv = (1. - (local.y / dn).abs() * self.f_over_pitch).clamp(0., 1.);
                self.transmission_coefficient * fu * fv
            }
        }
    }
}

impl SurfaceTrait for GeneralisedConfocalLensletArrays {
    fn id(&self) -> &'static str {
        "GeneralisedConfocalLensletArrays"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.u_direction.is_zero() {
            return Err(ConfigError::ZeroLengthVector("u_direction"));
        }
        check_positive("f_over_pitch", self.f_over_pitch)?;
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
        let frame = LocalFrame::aligned(hit, self.u_direction);
        let local = frame.to_local(incident.direction());
        let out = match self.map(local, hit.side()) {
            Some(out) => out,
            None => {
                log::debug!("GCLAs: no outgoing ray at {}", hit.point());
                return TransportOutcome::Absorbed;
            }
        };
        let weight = self.transmission(local);
        let (p, direction) =
            self.pixel_diffraction
                .apply(incident, &frame, hit.point(), frame.to_world(out), rng);
        TransportOutcome::Continue(incident.continued(p, direction), weight)
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
    fn test_eta_and_delta() -> Result<(), String> {
        let g = GeneralisedConfocalLensletArrays::new(2., -1., 0.5, 0., Vector3D::new(1., 0., 0.))
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::GeneralisedConfocalLensletArrays(g);
        let d = Vector3D::new(0.1, 0.2, -1.);
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, w) = shade_continue(&model, &ray, &hit)?;
        let dn = d.get_normalized();
        let expected = Vector3D::new(2. * dn.x + 0.5 * dn.z, -dn.y, dn.z).get_normalized();
        assert!(out.direction().compare(expected), "{} vs {}", out.direction(), expected);
        assert!((w - DEFAULT_TRANSMISSION_COEFFICIENT).abs() < 1e-12);

        // And back
        let (ray, hit) = flat_hit(0., 0., -out.direction());
        let (back, _) = shade_continue(&model, &ray, &hit)?;
        assert!(back.direction().compare(-dn), "{} vs {}", back.direction(), -dn);
        Ok(())
    }

    #[test]
    fn test_geometric_transmission() -> Result<(), String> {
        let mut g = GeneralisedConfocalLensletArrays::new(1., 1., 0., 0., Vector3D::new(1., 0., 0.))
            .map_err(|e| e.to_string())?;
        g.set_transmission_coefficient_method(TransmissionCoefficientMethod::Geometric);
        g.set_transmission_coefficient(1.).map_err(|e| e.to_string())?;
        g.set_f_over_pitch(2.).map_err(|e| e.to_string())?;
        let model = SurfaceModel::GeneralisedConfocalLensletArrays(g);

        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        assert!((shade(&model, &ray, &hit).total_weight() - 1.).abs() < 1e-12);

        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0.25, 0., -1.));
        assert!((shade(&model, &ray, &hit).total_weight() - 0.5).abs() < 1e-9);

        let (ray, hit) = flat_hit(0., 0., Vector3D::new(1., 0., -1.));
        assert!(shade(&model, &ray, &hit).total_weight().abs() < 1e-12);
        Ok(())
    }
}
