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

#![deny(missing_docs)]

//! The main `metaray` crate: a ray tracer for studying non-standard
//! optical components (lenslet arrays, phase holograms, relativistic
//! interfaces, teleporting surfaces...).
//!
//! This crate re-exports the engine that lives in the `rendering`
//! and `geometry` crates, and offers a demonstration scene.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
pub use rendering::Float;

/// A scene showing off some of the surface models
pub mod demo;

// Re-exports
pub use geometry;
pub use geometry::{Point3D, Vector3D};
pub use rendering;
pub use rendering::camera::{
    ApertureCamera, Camera, Film, Pinhole, RelativisticCamera, Stereo, StereoMode, View,
    VelocityTransform,
};
pub use rendering::image::ImageBuffer;
pub use rendering::lights::{Light, PointLight};
pub use rendering::{
    ConfigError, ExposureCompensation, ObjectId, Ray, RayTracer, Scene, Spectrum, SurfaceModel,
    TransportOutcome,
};
