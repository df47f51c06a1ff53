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

use super::{SurfaceModel, SurfaceTrait, TransportOutcome};
use crate::error::{check_positive, ConfigError};
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A chequerboard of two surface models, on the surface's `(u, v)`
/// coordinates. Each tile is half a period wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tiling {
    model_a: Box<SurfaceModel>,
    model_b: Box<SurfaceModel>,
    period_u: Float,
    period_v: Float,
}

impl Tiling {
    pub fn new(model_a: SurfaceModel, model_b: SurfaceModel, period_u: Float, period_v: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            model_a: Box::new(model_a),
            model_b: Box::new(model_b),
            period_u: check_positive("period_u", period_u)?,
            period_v: check_positive("period_v", period_v)?,
        })
    }

    pub fn get_model_a(&self) -> &SurfaceModel {
        &self.model_a
    }

    pub fn set_model_a(&mut self, model: SurfaceModel) {
        self.model_a = Box::new(model);
    }

    pub fn get_model_b(&self) -> &SurfaceModel {
        &self.model_b
    }

    pub fn set_model_b(&mut self, model: SurfaceModel) {
        self.model_b = Box::new(model);
    }

    pub fn get_period_u(&self) -> Float {
        self.period_u
    }

    pub fn set_period_u(&mut self, period_u: Float) -> Result<(), ConfigError> {
        self.period_u = check_positive("period_u", period_u)?;
        Ok(())
    }

    pub fn get_period_v(&self) -> Float {
        self.period_v
    }

    pub fn set_period_v(&mut self, period_v: Float) -> Result<(), ConfigError> {
        self.period_v = check_positive("period_v", period_v)?;
        Ok(())
    }

    /// The model covering the point that was hit
    pub fn select(&self, hit: &Interaction) -> &SurfaceModel {
        let iu = (2. * hit.u() / self.period_u).floor() as i64;
        let iv = (2. * hit.v() / self.period_v).floor() as i64;
        if (iu + iv).rem_euclid(2) == 0 {
            &self.model_a
        } else {
            &self.model_b
        }
    }
}

impl SurfaceTrait for Tiling {
    fn id(&self) -> &'static str {
        "Tiling"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_positive("period_u", self.period_u)?;
        check_positive("period_v", self.period_v)?;
        self.model_a.validate()?;
        self.model_b.validate()
    }

    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        ctx: &TraceContext,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> TransportOutcome {
        self.select(hit).shade(incident, hit, ctx, scene, rng)
    }
}
