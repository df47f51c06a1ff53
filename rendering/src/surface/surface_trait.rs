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

use super::TransportOutcome;
use crate::error::ConfigError;
use crate::interaction::Interaction;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace_context::TraceContext;
use crate::Float;

/// The behaviour shared by all surface models
pub trait SurfaceTrait: std::fmt::Debug {
    /// Identifies the model.
    fn id(&self) -> &'static str;

    /// Decides what happens to `incident` after hitting the surface at `hit`.
    ///
    /// `ctx` tells how deep in the trace we are; `scene` is available for
    /// the models that need to look up other objects; `rng` is used by
    /// the stochastic approximations (e.g., diffraction).
    fn shade(
        &self,
        incident: &Ray,
        hit: &Interaction,
        ctx: &TraceContext,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> TransportOutcome;

    /// Can users decide whether this surface throws shadows?
    fn has_shadow_control(&self) -> bool {
        false
    }

    /// Does this surface block light travelling towards other surfaces?
    /// Models without shadow control always do.
    fn is_shadow_throwing(&self) -> bool {
        true
    }

    /// The fraction of light carried by the outgoing ray(s), for the models
    /// that have such a parameter
    fn transmission_coefficient(&self) -> Option<Float> {
        None
    }

    /// Checks the parameters that the constructor and setters would
    /// have rejected. The transmission coefficient is checked by
    /// [`super::SurfaceModel::validate`].
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
