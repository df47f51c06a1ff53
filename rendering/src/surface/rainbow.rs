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
use crate::colour::Spectrum;
use crate::error::{check_range, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::{Float, PI};
use geometry::Point3D;
use serde::{Deserialize, Serialize};

/// A light-source independent colour whose hue depends on the angle
/// between the mirror-reflected ray and the direction towards
/// `light_source_position`, like the rainbow in a sprinkler's spray
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rainbow {
    saturation: Float,
    lightness: Float,
    light_source_position: Point3D,
    shadow_throwing: bool,
}

impl Rainbow {
    pub fn new(saturation: Float, lightness: Float, light_source_position: Point3D) -> Result<Self, ConfigError> {
        Ok(Self {
            saturation: check_range("saturation", saturation, 0., 1.)?,
            lightness: check_range("lightness", lightness, 0., 1.)?,
            light_source_position,
            shadow_throwing: true,
        })
    }

    accessors! {
        light_source_position: Point3D => get_light_source_position, set_light_source_position;
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_saturation(&self) -> Float {
        self.saturation
    }

    pub fn set_saturation(&mut self, saturation: Float) -> Result<(), ConfigError> {
        self.saturation = check_range("saturation", saturation, 0., 1.)?;
        Ok(())
    }

    pub fn get_lightness(&self) -> Float {
        self.lightness
    }

    pub fn set_lightness(&mut self, lightness: Float) -> Result<(), ConfigError> {
        self.lightness = check_range("lightness", lightness, 0., 1.)?;
        Ok(())
    }
}

impl SurfaceTrait for Rainbow {
    fn id(&self) -> &'static str {
        "Rainbow"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_range("saturation", self.saturation, 0., 1.)?;
        check_range("lightness", self.lightness, 0., 1.)?;
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
        let reflected = mirror_direction(incident.direction(), hit.normal());
        let to_light = self.light_source_position - hit.point();
        let theta = if to_light.is_zero() {
            0.
        } else {
            (reflected * to_light.get_normalized()).clamp(-1., 1.).acos()
        };
        TransportOutcome::Colour(Spectrum::from_hsl(theta / PI, self.saturation, self.lightness))
    }

    fn has_shadow_control(&self) -> bool {
        true
    }

    fn is_shadow_throwing(&self) -> bool {
        self.shadow_throwing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::test_utils::*;
    use crate::surface::SurfaceModel;
    use geometry::Vector3D;

    #[test]
    fn test_hue_follows_angle() -> Result<(), String> {
        let model = SurfaceModel::Rainbow(
            Rainbow::new(1., 0.5, Point3D::new(0., 0., 10.)).map_err(|e| e.to_string())?,
        );
        // Reflected straight towards the light: hue 0 (red)
        let (ray, hit) = flat_hit(0., 0., Vector3D::new(0., 0., -1.));
        assert_eq!(shade(&model, &ray, &hit), TransportOutcome::Colour(Spectrum::from_hsl(0., 1., 0.5)));

        let (ray, hit) = flat_hit(0., 0., Vector3D::new(1., 0., -1.));
        match shade(&model, &ray, &hit) {
            TransportOutcome::Colour(c) => {
                let expected = Spectrum::from_hsl(0.25, 1., 0.5);
                for i in 0..3 {
                    assert!((c.0[i] - expected.0[i]).abs() < 1e-9);
                }
            }
            other => return Err(format!("Expecting Colour, found {:?}", other)),
        }
        Ok(())
    }
}
