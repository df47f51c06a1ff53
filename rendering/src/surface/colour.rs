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

use super::{SurfaceTrait, TransportOutcome};
use crate::colour::Spectrum;
use crate::error::{ConfigError, check_positive};
use crate::interaction::Interaction;
use crate::lights::PhongReflectance;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A coloured surface, lit by the light sources in the scene
/// (diffuse reflection plus a Phong highlight)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    diffuse: Spectrum,
    specular: Spectrum,
    shininess: Float,
    shadow_throwing: bool,
}

impl Colour {
    /// Creates a new shadow-throwing `Colour`
    pub fn new(diffuse: Spectrum, specular: Spectrum, shininess: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            diffuse,
            specular,
            shininess: check_positive("shininess", shininess)?,
            shadow_throwing: true,
        })
    }

    /// A matt colour, with no highlights
    pub fn matt(diffuse: Spectrum) -> Self {
        Self {
            diffuse,
            specular: Spectrum::BLACK,
            shininess: 1.,
            shadow_throwing: true,
        }
    }

    accessors! {
        diffuse: Spectrum => get_diffuse, set_diffuse;
        specular: Spectrum => get_specular, set_specular;
        shadow_throwing: bool => get_shadow_throwing, set_shadow_throwing;
    }

    pub fn get_shininess(&self) -> Float {
        self.shininess
    }

    pub fn set_shininess(&mut self, shininess: Float) -> Result<(), ConfigError> {
        self.shininess = check_positive("shininess", shininess)?;
        Ok(())
    }

    /// The reflectance handed to the ray-tracer
    pub fn reflectance(&self) -> PhongReflectance {
        PhongReflectance {
            diffuse: self.diffuse,
            specular: self.specular,
            shininess: self.shininess,
        }
    }
}

impl SurfaceTrait for Colour {
    fn id(&self) -> &'static str {
        "Colour"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("shininess", self.shininess)?;
        Ok(())
    }

    fn shade(
        &self,
        _incident: &Ray,
        _hit: &Interaction,
        _ctx: &TraceContext,
        _scene: &Scene,
        _rng: &mut RandGen,
    ) -> TransportOutcome {
        TransportOutcome::Lit(self.reflectance())
    }

    fn has_shadow_control(&self) -> bool {
        true
    }

    fn is_shadow_throwing(&self) -> bool {
        self.shadow_throwing
    }
}
