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
use super::ideal_thin_lens::check_focal_length;
use super::optics::hologram_outcome;
use super::{SurfaceTrait, TransportOutcome, DEFAULT_TRANSMISSION_COEFFICIENT};
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::{Float, PI};
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

/// The phase hologram of an array of cylindrical lenses arranged
/// like the spokes of a wheel around `centre`. Each of the
/// `number_of_lenses` azimuthal sectors is a cylindrical lens whose
/// axis runs radially through the middle of the sector. Azimuths are
/// measured from the surface's `u` direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseHologramOfRadialLenticularArray {
    centre: Point3D,
    focal_length: Float,
    number_of_lenses: usize,
    transmission_coefficient: Float,
}

fn check_n(n: usize) -> Result<usize, ConfigError> {
    if n == 0 {
        Err(ConfigError::NonPositive {
            name: "number_of_lenses",
            value: 0.,
        })
    } else {
        Ok(n)
    }
}

impl PhaseHologramOfRadialLenticularArray {
    pub fn new(centre: Point3D, focal_length: Float, number_of_lenses: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            centre,
            focal_length: check_focal_length(focal_length)?,
            number_of_lenses: check_n(number_of_lenses)?,
            transmission_coefficient: DEFAULT_TRANSMISSION_COEFFICIENT,
        })
    }

    coefficient_accessors!();

    accessors! {
        centre: Point3D => get_centre, set_centre;
    }

    pub fn get_focal_length(&self) -> Float {
        self.focal_length
    }

    pub fn set_focal_length(&mut self, focal_length: Float) -> Result<(), ConfigError> {
        self.focal_length = check_focal_length(focal_length)?;
        Ok(())
    }

    pub fn get_number_of_lenses(&self) -> usize {
        self.number_of_lenses
    }

    pub fn set_number_of_lenses(&mut self, n: usize) -> Result<(), ConfigError> {
        self.number_of_lenses = check_n(n)?;
        Ok(())
    }

    /// The unit vector perpendicular to the axis of the lens
    /// covering the azimuth `phi`
    fn across_lens(&self, phi: Float, frame: &LocalFrame) -> Vector3D {
        let width = 2. * PI / self.number_of_lenses as Float;
        let phi_c = ((phi / width).floor() + 0.5) * width;
        let (s, c) = phi_c.sin_cos();
        frame.u * -s + frame.v * c
    }
}

impl SurfaceTrait for PhaseHologramOfRadialLenticularArray {
    fn id(&self) -> &'static str {
        "PhaseHologramOfRadialLenticularArray"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_focal_length(self.focal_length)?;
        check_n(self.number_of_lenses)?;
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
        let r = (hit.point() - self.centre).tangential_part(frame.n);
        let phi = (r * frame.v).atan2(r * frame.u).rem_euclid(2. * PI);
        let across = self.across_lens(phi, &frame);
        let x = r * across;
        hologram_outcome(self.id(), incident, hit, across * (-x / self.focal_length), self.transmission_coefficient)
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
    fn test_sectors() -> Result<(), String> {
        // Four lenses, the first one centred at 45 degrees
        let h = PhaseHologramOfRadialLenticularArray::new(Point3D::new(0., 0., 0.), 1., 4)
            .map_err(|e| e.to_string())?;
        let model = SurfaceModel::PhaseHologramOfRadialLenticularArray(h);

        // On the axis of a lens: undeviated
        let (ray, hit) = flat_hit(0.3, 0.3, Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        assert!(out.direction().compare(Vector3D::new(0., 0., -1.)));

        // Off the axis: pulled back towards it
        let (ray, hit) = flat_hit(0.3, 0.1, Vector3D::new(0., 0., -1.));
        let (out, _) = shade_continue(&model, &ray, &hit)?;
        let d = out.direction();
        assert!(d.y > 0. && d.x < 0., "{}", d);
        assert!((d.x + d.y).abs() < 1e-12);
        Ok(())
    }
}
