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

//! The light-transport engine: surface models, the recursive
//! ray-tracer, cameras and the scene they all work on.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;
#[cfg(feature = "float")]
pub const PI: Float = std::f32::consts::PI;

#[cfg(not(feature = "float"))]
pub type Float = f64;
#[cfg(not(feature = "float"))]
pub const PI: Float = std::f64::consts::PI;

/// The number of values that represent a colour.
/// RGB is Three.
pub const N_CHANNELS: usize = 3;

// Core
pub mod camera;
mod colour;
pub use colour::Spectrum;
pub mod complex;
pub mod error;
pub use error::ConfigError;
pub mod image;
pub mod interaction;
pub mod lights;
pub mod primitive;
pub mod rand;
mod ray;
pub use ray::Ray;
pub mod samplers;
mod scene;
pub use scene::{Object, ObjectId, Scene};
mod trace_context;
pub use trace_context::TraceContext;

// Surface models
pub mod surface;
pub use surface::{SurfaceModel, TransportOutcome};

// Ray-tracer
mod ray_tracer;
pub use ray_tracer::{
    ExposureCompensation, RayTracer, TraceStats, EPSILON_OFFSET, MAX_TRACE_DEPTH,
};
