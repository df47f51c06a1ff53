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

//! Points, vectors, rays and the parametrised primitives that
//! the ray-tracer intersects.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Well, PI
#[cfg(feature = "float")]
pub const PI: Float = std::f32::consts::PI;

/// Well, PI
#[cfg(not(feature = "float"))]
pub const PI: Float = std::f64::consts::PI;

mod point3d;
pub use point3d::Point3D;

mod vector3d;
pub use vector3d::Vector3D;

mod ray3d;
pub use ray3d::Ray3D;

mod matrix3;
pub use matrix3::Matrix3;

/// Information about ray/primitive intersections
pub mod intersection;

mod sphere3d;
pub use sphere3d::Sphere3D;

mod plane3d;
pub use plane3d::Plane3D;

mod parallelogram3d;
pub use parallelogram3d::Parallelogram3D;

mod disc3d;
pub use disc3d::Disc3D;
