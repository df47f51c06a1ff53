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

use super::optics::hologram_outcome;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use geometry::Point3D;
use serde::{Deserialize, Serialize};

/// A hologram that images `point_a` into `point_b` (and vice versa):
/// light from one of the points leaves every hologram position
/// heading towards the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2PointImaging {
    point_a: Point3D,
    point_b: Point3D,
    transmission_coefficient: Float,
}

impl Point2PointImaging {
    pub fn new(point_a: Point3D, point_b: Point3D) -> Self {
        Self {
            point_a,
            point_b,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        }
    }

    coefficient_accessors!();

    accessors! {
        point_a: Point3D => get_point_a, set_point_a;
        point_b: Point3D => get_point_b, set_point_b;
    }
}

impl SurfaceTrait for Point2PointImaging {
    fn id(&self) -> &'static str {
        "Point2PointImaging"
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        let p = hit.point();
        let n = hit.normal();
        let from_a = p - self.point_a;
        let to_b = self.point_b - p;
        if from_a.is_zero() || to_b.is_zero() {
            return TransportOutcome::Continue(incident.advanced_to(p), self.transmission_coefficient);
        }
        let delta = to_b.get_normalized().tangential_part(n) - from_a.get_normalized().tangential_part(n);
        hologram_outcome(self.id(), incident, hit, delta, self.transmission_coefficient)
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
    fn test_a_to_b_and_back() -> Result<(), String> {
        let a = Point3D::new(0.5, 0., 2.);
        let b = Point3D::new(-1., 1., -3.);
        let model = SurfaceModel::Point2PointImaging(Point2PointImaging::new(a, b));
        let p = Point3D::new(0.2, -0.3, 0.);

        let (ray, hit) = flat_hit(p.x, p.y, p - a);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare((b - p).get_normalized()), "{}", out.direction());

        let (ray, hit) = flat_hit(p.x, p.y, p - b);
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare((a - p).get_normalized()), "{}", out.direction());
        Ok(())
    }
}
