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
use super::optics::continue_from;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// Mirrors the tangential part of the direction of rays about an in-plane
/// axis, at an angle `flip_axis_angle` (radians) from the surface's `u` direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayFlipping {
    flip_axis_angle: Float,
    transmission_coefficient: Float,
}

impl RayFlipping {
    pub fn new(flip_axis_angle: Float) -> Self {
        Self {
            flip_axis_angle,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        }
    }

    coefficient_accessors!();

    accessors! {
        flip_axis_angle: Float => get_flip_axis_angle, set_flip_axis_angle;
    }
}

impl SurfaceTrait for RayFlipping {
    fn id(&self) -> &'static str {
        "RayFlipping"
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
        let (s, c) = self.flip_axis_angle.sin_cos();
        let axis = frame.u * c + frame.v * s;
        let d = incident.direction();
        let dn = d * frame.n;
        let dt = d - frame.n * dn;
        let flipped = axis * (2. * (dt * axis)) - dt;
        continue_from(incident, hit, flipped + frame.n * dn, self.transmission_coefficient)
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
    fn test_flip_about_u() -> Result<(), String> {
        let model = SurfaceModel::RayFlipping(RayFlipping::new(0.));
        let d = Vector3D::new(0.3, 0.4, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(d.x, -d.y, d.z)));
        Ok(())
    }

    #[test]
    fn test_flipping_twice() -> Result<(), String> {
        let model = SurfaceModel::RayFlipping(RayFlipping::new(0.7));
        let d = Vector3D::new(-0.1, 0.5, -1.).get_normalized();
        let (ray, hit) = flat_hit(0., 0., d);
        let (once, _) = shade_continue(&model, &ray, &hit)?;
        let (ray, hit) = flat_hit(0., 0., once.direction());
        let (twice, _) = shade_continue(&model, &ray, &hit)?;
        assert!(twice.direction().compare(d));
        Ok(())
    }
}
