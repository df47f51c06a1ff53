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
use super::optics::apply_tangential_change;
use crate::error::{check_positive, ConfigError};
use crate::rand::*;
use crate::ray::Ray;
use crate::{Float, PI};
use geometry::{Point3D, Vector3D};
use serde::{Deserialize, Serialize};

/// The distribution of the angular spread caused by diffraction
/// at a finite aperture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffractionKernel {
    /// Normally distributed, with a standard deviation equal to the scale
    #[default]
    Gaussian,

    /// Uniformly distributed between `-scale` and `scale`
    TopHat,
}

impl DiffractionKernel {
    /// Samples an angle (well, a tangential direction change)
    pub fn sample(&self, scale: Float, rng: &mut RandGen) -> Float {
        match self {
            Self::Gaussian => {
                // Box-Muller
                let (u1, u2): (Float, Float) = rng.gen();
                let u1 = (1. - u1).max(Float::MIN_POSITIVE);
                scale * (-2. * u1.ln()).sqrt() * (2. * PI * u2).cos()
            }
            Self::TopHat => {
                let u: Float = rng.gen();
                scale * (2. * u - 1.)
            }
        }
    }
}

/// Approximations of the effects of finite pixel (or lenslet) sizes.
///
/// Diffractive blur perturbs the outgoing direction with an angular
/// spread of about `lambda / side`; ray offset moves the outgoing ray
/// to a random position within the pixel. Both can be toggled
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelDiffraction {
    /// Wavelength used for achromatic rays, in metres
    lambda: Float,

    /// Side of a pixel along `u`
    pixel_side_u: Float,

    /// Side of a pixel along `v`
    pixel_side_v: Float,

    simulate_diffractive_blur: bool,

    simulate_ray_offset: bool,

    kernel: DiffractionKernel,
}

impl std::default::Default for PixelDiffraction {
    fn default() -> Self {
        Self {
            lambda: 550e-9,
            pixel_side_u: 1e-3,
            pixel_side_v: 1e-3,
            simulate_diffractive_blur: false,
            simulate_ray_offset: false,
            kernel: DiffractionKernel::Gaussian,
        }
    }
}

impl PixelDiffraction {
    /// Creates a new `PixelDiffraction`, with both approximations on
    pub fn new(lambda: Float, pixel_side_u: Float, pixel_side_v: Float) -> Result<Self, ConfigError> {
        Ok(Self {
            lambda: check_positive("lambda", lambda)?,
            pixel_side_u: check_positive("pixel_side_u", pixel_side_u)?,
            pixel_side_v: check_positive("pixel_side_v", pixel_side_v)?,
            simulate_diffractive_blur: true,
            simulate_ray_offset: true,
            kernel: DiffractionKernel::default(),
        })
    }

    accessors! {
        simulate_diffractive_blur: bool => get_simulate_diffractive_blur, set_simulate_diffractive_blur;
        simulate_ray_offset: bool => get_simulate_ray_offset, set_simulate_ray_offset;
        kernel: DiffractionKernel => get_kernel, set_kernel;
    }

    pub fn get_lambda(&self) -> Float {
        self.lambda
    }

    pub fn set_lambda(&mut self, lambda: Float) -> Result<(), ConfigError> {
        self.lambda = check_positive("lambda", lambda)?;
        Ok(())
    }

    pub fn get_pixel_side_u(&self) -> Float {
        self.pixel_side_u
    }

    pub fn set_pixel_side_u(&mut self, pixel_side_u: Float) -> Result<(), ConfigError> {
        self.pixel_side_u = check_positive("pixel_side_u", pixel_side_u)?;
        Ok(())
    }

    pub fn get_pixel_side_v(&self) -> Float {
        self.pixel_side_v
    }

    pub fn set_pixel_side_v(&mut self, pixel_side_v: Float) -> Result<(), ConfigError> {
        self.pixel_side_v = check_positive("pixel_side_v", pixel_side_v)?;
        Ok(())
    }

    /// Checks the parameters of a `PixelDiffraction` that did not go
    /// through the setters (e.g., one read from a file)
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("lambda", self.lambda)?;
        check_positive("pixel_side_u", self.pixel_side_u)?;
        check_positive("pixel_side_v", self.pixel_side_v)?;
        Ok(())
    }

    /// Is any of the approximations on?
    pub fn is_active(&self) -> bool {
        self.simulate_diffractive_blur || self.simulate_ray_offset
    }

    /// The scale of the angular spread along `u` and `v`
    pub fn blur_scale(&self, wavelength: Option<Float>) -> (Float, Float) {
        let lambda = wavelength.unwrap_or(self.lambda);
        (lambda / self.pixel_side_u, lambda / self.pixel_side_v)
    }

    /// Perturbs the outgoing `point` and `direction`
    pub fn apply(
        &self,
        ray: &Ray,
        frame: &LocalFrame,
        point: Point3D,
        direction: Vector3D,
        rng: &mut RandGen,
    ) -> (Point3D, Vector3D) {
        let mut point = point;
        let mut direction = direction;
        if self.simulate_ray_offset {
            let (a, b): (Float, Float) = rng.gen();
            point += frame.u * ((a - 0.5) * self.pixel_side_u) + frame.v * ((b - 0.5) * self.pixel_side_v);
        }
        if self.simulate_diffractive_blur {
            let (su, sv) = self.blur_scale(ray.wavelength);
            let delta = frame.u * self.kernel.sample(su, rng) + frame.v * self.kernel.sample(sv, rng);
            // Evanescent spreads are not transmitted; keep the undiffracted direction
            if let Some(d) = apply_tangential_change(direction, frame.n, delta) {
                direction = d;
            }
        }
        (point, direction)
    }
}
