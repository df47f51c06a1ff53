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
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use geometry::intersection::SurfaceSide;
use serde::{Deserialize, Serialize};

/// Different surface models on each side of a surface. Rays
/// hitting the back of the surface see `inside`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSided {
    inside: Box<SurfaceModel>,
    outside: Box<SurfaceModel>,
}

impl TwoSided {
    pub fn new(inside: SurfaceModel, outside: SurfaceModel) -> Self {
        Self {
            inside: Box::new(inside),
            outside: Box::new(outside),
        }
    }

    pub fn get_inside(&self) -> &SurfaceModel {
        &self.inside
    }

    pub fn set_inside(&mut self, model: SurfaceModel) {
        self.inside = Box::new(model);
    }

    pub fn get_outside(&self) -> &SurfaceModel {
        &self.outside
    }

    pub fn set_outside(&mut self, model: SurfaceModel) {
        self.outside = Box::new(model);
    }

    /// The model seen by the ray that produced `hit`
    pub fn select(&self, hit: &Interaction) -> &SurfaceModel {
        match hit.side() {
            SurfaceSide::Back => &self.inside,
            _ => &self.outside,
        }
    }
}

impl SurfaceTrait for TwoSided {
    fn id(&self) -> &'static str {
        "TwoSided"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.inside.validate()?;
        self.outside.validate()
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
