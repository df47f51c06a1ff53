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

//! The recursive evaluator that turns primary rays into colours.

use crate::camera::{Camera, CameraSample, Stereo};
use crate::colour::Spectrum;
use crate::error::ConfigError;
use crate::image::ImageBuffer;
use crate::lights::{Light, PhongReflectance};
use crate::rand::*;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::surface::TransportOutcome;
use crate::trace_context::TraceContext;
use crate::interaction::Interaction;
use crate::Float;
use geometry::{Point3D, Ray3D};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The largest trace depth a [`RayTracer`] accepts
pub const MAX_TRACE_DEPTH: usize = 1000;

/// The distance by which outgoing rays are pushed away from the
/// surface that spawned them, so they do not hit it again
pub const EPSILON_OFFSET: Float = 1e-6;

/// The number of pixels processed by each task in a render
const CHUNK_LEN: usize = 128;

/// Brightens (positive) or darkens (negative) an image by
/// a number of photographic stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureCompensation(pub i32);

impl ExposureCompensation {
    /// The factor by which pixel values are multiplied
    pub fn factor(&self) -> Float {
        (2. as Float).powi(self.0)
    }
}

/// Counters gathered while tracing a single primary ray
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceStats {
    /// The number of times a surface model was asked to shade
    pub shade_calls: usize,

    /// The deepest level reached by the trace
    pub deepest: usize,
}

/// A deterministic, per-ray recursive ray-tracer.
///
/// ```
/// use rendering::{RayTracer, Spectrum};
/// let tracer = RayTracer {
///     max_depth: 20,
///     background: Spectrum::gray(0.1),
///     ..RayTracer::default()
/// };
/// assert!(tracer.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayTracer {
    /// The number of surface interactions after which a ray is
    /// given `exhausted_colour`
    pub max_depth: usize,

    /// Primary rays per pixel
    pub n_samples: usize,

    /// The colour of rays leaving the scene, unless the
    /// scene has one of its own
    pub background: Spectrum,

    /// Brightens (or darkens) the rendered image by a number of stops
    pub exposure: ExposureCompensation,

    /// The colour given to rays that ran out of trace budget
    pub exhausted_colour: Spectrum,
}

impl Default for RayTracer {
    fn default() -> Self {
        Self {
            max_depth: 100,
            n_samples: 1,
            background: Spectrum::BLACK,
            exposure: ExposureCompensation(0),
            exhausted_colour: Spectrum::BLACK,
        }
    }
}

impl RayTracer {
    /// Checks that the configuration makes sense. Called before
    /// every render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_TRACE_DEPTH {
            return Err(ConfigError::InvalidTraceDepth {
                found: self.max_depth,
                max: MAX_TRACE_DEPTH,
            });
        }
        if self.n_samples == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        if self.exposure.0.abs() > 16 {
            log::warn!(
                "Exposure compensation of {} stops will probably saturate or blacken the image",
                self.exposure.0
            );
        }
        Ok(())
    }

    /// Traces a primary ray through the scene, returning the colour it sees
    pub fn trace(&self, ray: &Ray, scene: &Scene, rng: &mut RandGen) -> Spectrum {
        self.trace_with_stats(ray, scene, rng).0
    }

    /// Like [`RayTracer::trace`], also reporting how much work was done
    pub fn trace_with_stats(
        &self,
        ray: &Ray,
        scene: &Scene,
        rng: &mut RandGen,
    ) -> (Spectrum, TraceStats) {
        let mut stats = TraceStats::default();
        let ctx = TraceContext::new(self.max_depth);
        let colour = self.trace_ray(ray, scene, &ctx, rng, &mut stats);
        (colour, stats)
    }

    fn trace_ray(
        &self,
        ray: &Ray,
        scene: &Scene,
        ctx: &TraceContext,
        rng: &mut RandGen,
        stats: &mut TraceStats,
    ) -> Spectrum {
        stats.deepest = stats.deepest.max(ctx.depth);
        if ctx.is_exhausted() {
            return self.exhausted_colour;
        }

        let hit = match scene.cast_ray(&ray.geometry) {
            Some(hit) => hit,
            None => return scene.background.unwrap_or(self.background),
        };
        let object = match scene.object(hit.object) {
            Some(o) => o,
            None => return scene.background.unwrap_or(self.background),
        };

        stats.shade_calls += 1;
        let child = ctx.descend();
        match object.surface.shade(ray, &hit, ctx, scene, rng) {
            TransportOutcome::Colour(c) => c,
            TransportOutcome::Lit(reflectance) => self.illuminate(&reflectance, ray, &hit, scene),
            TransportOutcome::Absorbed => Spectrum::BLACK,
            TransportOutcome::Continue(next, weight) => {
                if weight <= 0. {
                    return Spectrum::BLACK;
                }
                self.trace_ray(&next.nudged(EPSILON_OFFSET), scene, &child, rng, stats) * weight
            }
            TransportOutcome::Filtered(next, filter) => {
                if filter.is_black() {
                    return Spectrum::BLACK;
                }
                self.trace_ray(&next.nudged(EPSILON_OFFSET), scene, &child, rng, stats) * filter
            }
            TransportOutcome::Split(rays) => {
                let mut ret = Spectrum::BLACK;
                for (next, weight) in rays.iter().filter(|(_, w)| *w > 0.) {
                    ret += self.trace_ray(&next.nudged(EPSILON_OFFSET), scene, &child, rng, stats)
                        * *weight;
                }
                ret
            }
        }
    }

    /// Colours a Phong surface with the scene's light sources
    fn illuminate(
        &self,
        reflectance: &PhongReflectance,
        ray: &Ray,
        hit: &Interaction,
        scene: &Scene,
    ) -> Spectrum {
        let normal = hit.facing_normal();
        let to_viewer = ray.direction() * -1.;
        let point = hit.point();
        scene
            .lights
            .iter()
            .map(|light| match light {
                Light::Ambient(colour) => reflectance.ambient(*colour),
                Light::Point(light) => {
                    let to_light = light.position - point;
                    if to_light.is_zero() || !self.is_visible(scene, point, light.position) {
                        return Spectrum::BLACK;
                    }
                    reflectance.direct(light.colour, normal, to_light.get_normalized(), to_viewer)
                }
            })
            .sum()
    }

    /// Checks whether `to` can be seen from `from`. Surfaces that do
    /// not throw shadows are skipped.
    fn is_visible(&self, scene: &Scene, from: Point3D, to: Point3D) -> bool {
        let mut ctx = TraceContext::new(self.max_depth);
        let mut origin = from;
        loop {
            let to_light = to - origin;
            let distance = to_light.length();
            if distance <= 2. * EPSILON_OFFSET {
                return true;
            }
            let direction = to_light / distance;
            let shadow_ray = Ray3D {
                origin: origin + direction * EPSILON_OFFSET,
                direction,
            };
            let hit = match scene.cast_ray_within(&shadow_ray, distance - 2. * EPSILON_OFFSET) {
                Some(hit) => hit,
                None => return true,
            };
            let throws_shadow = scene
                .object(hit.object)
                .map(|o| o.surface.throws_shadow_at(&hit))
                .unwrap_or(true);
            if throws_shadow {
                return false;
            }
            if ctx.is_exhausted() {
                log::debug!("Shadow ray crossed {} surfaces; treating light as occluded", ctx.depth);
                return false;
            }
            origin = hit.point();
            ctx = ctx.descend();
        }
    }

    /// Renders the scene as seen by `camera`
    #[allow(clippy::needless_collect)]
    pub fn render(&self, scene: &Scene, camera: &dyn Camera) -> Result<ImageBuffer, ConfigError> {
        self.validate()?;
        scene.validate()?;
        let (width, height) = camera.film_resolution();
        log::info!(
            "Rendering {}x{} pixels with {} sample(s) per pixel and a trace depth of {}",
            width,
            height,
            self.n_samples,
            self.max_depth
        );

        let total_pixels = width * height;
        let mut pixels = vec![Spectrum::BLACK; total_pixels];
        let factor = self.exposure.factor() / self.n_samples as Float;

        let i: Vec<&mut [Spectrum]> = pixels.chunks_mut(CHUNK_LEN).collect();

        #[cfg(not(feature = "parallel"))]
        let i = i.into_iter();

        #[cfg(feature = "parallel")]
        let i = i.into_par_iter();

        let progress = utils::ProgressBar::new("Rendering".to_string(), total_pixels);

        i.enumerate().for_each(|(chunk_index, chunk)| {
            // One generator per chunk keeps renders reproducible,
            // whatever the order in which chunks are processed
            let mut rng = get_seeded_rng(chunk_index as u64);
            let mut pindex = chunk_index * CHUNK_LEN;

            for pixel in chunk {
                let p_film = (pindex % width, pindex / width);
                let mut acc = Spectrum::BLACK;
                for _ in 0..self.n_samples {
                    let sample = if self.n_samples == 1 {
                        CameraSample::centre(p_film)
                    } else {
                        CameraSample::jittered(p_film, &mut rng)
                    };
                    let ray = camera.gen_ray(&sample, &mut rng);
                    acc += self.trace(&ray, scene, &mut rng);
                }
                *pixel = acc * factor;

                progress.tic();
                pindex += 1;
            }
        });

        progress.done();

        Ok(ImageBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Renders both eyes of a [`Stereo`] camera and combines them
    pub fn render_stereo(&self, scene: &Scene, stereo: &Stereo) -> Result<ImageBuffer, ConfigError> {
        log::info!("Rendering left eye");
        let left = self.render(scene, &stereo.left)?;
        log::info!("Rendering right eye");
        let right = self.render(scene, &stereo.right)?;
        stereo.mode.combine(&left, &right)
    }
}
