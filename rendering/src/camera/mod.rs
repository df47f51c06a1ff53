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

//! Cameras produce the primary rays of a render.

use crate::rand::RandGen;
use crate::samplers::uniform_sample_square;
use crate::Float;
use serde::{Deserialize, Serialize};

mod camera_trait;
pub use camera_trait::Camera;

mod view;
pub use view::View;

mod pinhole;
pub use pinhole::Pinhole;

mod aperture;
pub use aperture::ApertureCamera;

mod relativistic;
pub use relativistic::{RelativisticCamera, VelocityTransform};

mod stereo;
pub use stereo::{Stereo, StereoMode};

/// The sensor of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Width and height, in pixels
    pub resolution: (usize, usize),
}

/// A point on the film through which a primary ray is shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    /// The pixel, as `(column, row)`; the row grows downwards
    pub p_film: (usize, usize),

    /// The position within the pixel, in `[0, 1) x [0, 1)`
    pub p_pixel: (Float, Float),
}

impl CameraSample {
    /// A sample at the centre of a pixel
    pub fn centre(p_film: (usize, usize)) -> Self {
        Self {
            p_film,
            p_pixel: (0.5, 0.5),
        }
    }

    /// A sample at a random point within a pixel
    pub fn jittered(p_film: (usize, usize), rng: &mut RandGen) -> Self {
        Self {
            p_film,
            p_pixel: uniform_sample_square(rng),
        }
    }
}
