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
use super::optics::continue_from;
use super::{SurfaceTrait, TransportOutcome};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::intersection::SurfaceSide;
use geometry::{Matrix3, Vector3D};
use serde::{Deserialize, Serialize};

/// Whether the tangential part of the wave vector is
/// kept or flipped when crossing a [`MetricInterface`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefractionType {
    #[default]
    Positive,
    Negative,
}

/// An interface between two spaces with different metric tensors.
///
/// The wave vector `k` (a covector, `k = g d / sqrt(d.g.d)`) keeps its
/// tangential components when crossing the interface, and its normal
/// component is chosen so that it satisfies the dispersion relation
/// `k.g⁻¹.k = 1` on the far side. The outgoing ray direction is `g⁻¹ k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInterface {
    metric_tensor_inside: Matrix3,
    metric_tensor_outside: Matrix3,
    basis: BasisKind,
    refraction_type: RefractionType,
    allow_imaginary_optical_path_lengths: bool,
    transmission_coefficient: Float,
}

fn check_metric(name: &'static str, g: Matrix3) -> Result<Matrix3, ConfigError> {
    if !g.is_symmetric(1e-9) {
        return Err(ConfigError::NonSymmetricMetric(name));
    }
    if g.determinant().abs() < 1e-12 {
        return Err(ConfigError::SingularMetric(name));
    }
    Ok(g)
}

impl MetricInterface {
    /// Creates an interface with positive refraction, a transmission
    /// coefficient of one and metrics given in the global basis
    pub fn new(metric_tensor_inside: Matrix3, metric_tensor_outside: Matrix3) -> Result<Self, ConfigError> {
        Ok(Self {
            metric_tensor_inside: check_metric("inside", metric_tensor_inside)?,
            metric_tensor_outside: check_metric("outside", metric_tensor_outside)?,
            basis: BasisKind::Global,
            refraction_type: RefractionType::Positive,
            allow_imaginary_optical_path_lengths: false,
            transmission_coefficient: 1.,
        })
    }

    coefficient_accessors!();

    accessors! {
        basis: BasisKind => get_basis, set_basis;
        refraction_type: RefractionType => get_refraction_type, set_refraction_type;
        allow_imaginary_optical_path_lengths: bool => get_allow_imaginary_optical_path_lengths, set_allow_imaginary_optical_path_lengths;
    }

    pub fn get_metric_tensor_inside(&self) -> Matrix3 {
        self.metric_tensor_inside
    }

    pub fn set_metric_tensor_inside(&mut self, g: Matrix3) -> Result<(), ConfigError> {
        self.metric_tensor_inside = check_metric("inside", g)?;
        Ok(())
    }

    pub fn get_metric_tensor_outside(&self) -> Matrix3 {
        self.metric_tensor_outside
    }

    pub fn set_metric_tensor_outside(&mut self, g: Matrix3) -> Result<(), ConfigError> {
        self.metric_tensor_outside = check_metric("outside", g)?;
        Ok(())
    }

    /// The outgoing direction, or `None` if there is no (allowed) solution.
    fn refract(&self, d: Vector3D, hit: &Interaction) -> Option<Vector3D> {
        let frame = LocalFrame::from_interaction(hit);
        let inside = self.basis.tensor_to_world(&self.metric_tensor_inside, &frame);
        let outside = self.basis.tensor_to_world(&self.metric_tensor_outside, &frame);
        let (g1, g2) = match hit.side() {
            SurfaceSide::Front => (outside, inside),
            SurfaceSide::Back => (inside, outside),
            SurfaceSide::NonApplicable => return Some(d),
        };
        let h = g2.inverse().ok()?;
        let n = hit.normal();

        let dgd = g1.bilinear(d, d);
        if dgd <= 0. {
            log::debug!("MetricInterface: non-positive d.g.d = {} at {}", dgd, hit.point());
            return None;
        }
        let mut k = (g1 * d) / dgd.sqrt();
        if self.refraction_type == RefractionType::Negative {
            let kn = k * n;
            k = n * (2. * kn) - k;
        }

        // (k + a N).H.(k + a N) = 1
        let a = h.bilinear(n, n);
        let b = 2. * h.bilinear(n, k);
        let c = h.bilinear(k, k) - 1.;
        if a.abs() < 1e-12 {
            log::debug!("MetricInterface: degenerate metric along the normal at {}", hit.point());
            return None;
        }
        let disc = b * b - 4. * a * c;
        let crossing = (d * n).signum();
        let alpha = if disc < 0. {
            if !self.allow_imaginary_optical_path_lengths {
                log::debug!("MetricInterface: imaginary optical path length at {}", hit.point());
                return None;
            }
            -b / (2. * a)
        } else {
            let sq = disc.sqrt();
            let mut candidates = [(-b - sq) / (2. * a), (-b + sq) / (2. * a)];
            candidates.sort_by(|x, y| x.abs().total_cmp(&y.abs()));
            *candidates
                .iter()
                .find(|alpha| ((h * (k + n * **alpha)) * n).signum() == crossing)?
        };
        let out = h * (k + n * alpha);
        if out.is_zero() {
            return None;
        }
        Some(out.get_normalized())
    }
}

impl SurfaceTrait for MetricInterface {
    fn id(&self) -> &'static str {
        "MetricInterface"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_metric("inside", self.metric_tensor_inside)?;
        check_metric("outside", self.metric_tensor_outside)?;
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
        match self.refract(incident.direction(), hit) {
            Some(direction) => continue_from(incident, hit, direction, self.transmission_coefficient),
            None => TransportOutcome::Absorbed,
        }
    }

    fn transmission_coefficient(&self) -> Option<Float> {
        Some(self.transmission_coefficient)
    }
}
