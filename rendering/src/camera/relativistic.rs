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

use crate::camera::{Camera, CameraSample, View};
use crate::error::ConfigError;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::surface::optics::{galilean_aberration, lorentz_aberration};
use geometry::Vector3D;
use serde::{Deserialize, Serialize};

/// How directions change between the camera's frame and the scene's
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityTransform {
    /// Special relativity
    #[default]
    Lorentz,

    /// Classical velocity addition
    Galileo,
}

/// A camera moving through the scene with velocity `beta` (in
/// units of c). Wraps another camera, whose rays are expressed in
/// the moving frame, and takes them to the scene's frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativisticCamera<C: Camera> {
    camera: C,
    beta: Vector3D,
    transform: VelocityTransform,
}

impl<C: Camera> RelativisticCamera<C> {
    pub fn new(camera: C, beta: Vector3D, transform: VelocityTransform) -> Result<Self, ConfigError> {
        let speed = beta.length();
        if speed >= 1. || !speed.is_finite() {
            return Err(ConfigError::OutOfRange {
                name: "|beta|",
                value: speed,
                min: 0.,
                max: 1.,
            });
        }
        Ok(Self {
            camera,
            beta,
            transform,
        })
    }

    pub fn beta(&self) -> Vector3D {
        self.beta
    }

    pub fn transform(&self) -> VelocityTransform {
        self.transform
    }

    /// Takes the direction of a primary ray from the camera's frame
    /// into the scene's
    fn to_scene_frame(&self, direction: Vector3D) -> Vector3D {
        // Light travels against the primary ray. The scene moves
        // with -beta, as seen from the camera.
        let light = direction * -1.;
        let seen = match self.transform {
            VelocityTransform::Lorentz => lorentz_aberration(light, self.beta * -1.),
            VelocityTransform::Galileo => galilean_aberration(light, self.beta * -1.),
        };
        match seen {
            Some(l) => l * -1.,
            None => {
                log::debug!("Could not transform direction {} to the scene frame", direction);
                direction
            }
        }
    }
}

impl<C: Camera> Camera for RelativisticCamera<C> {
    fn gen_ray(&self, sample: &CameraSample, rng: &mut RandGen) -> Ray {
        let ray = self.camera.gen_ray(sample, rng);
        if self.beta.is_zero() {
            return ray;
        }
        Ray::new(ray.origin(), self.to_scene_frame(ray.direction()))
    }

    fn film_resolution(&self) -> (usize, usize) {
        self.camera.film_resolution()
    }

    fn view(&self) -> &View {
        self.camera.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Film, Pinhole};
    use crate::rand::get_seeded_rng;

    fn pinhole() -> Result<Pinhole, String> {
        Pinhole::new(
            View::default(),
            Film {
                resolution: (16, 16),
            },
        )
        .map_err(|e| e.to_string())
    }

    #[test]
    fn test_at_rest() -> Result<(), String> {
        let still = RelativisticCamera::new(pinhole()?, Vector3D::new(0., 0., 0.), VelocityTransform::Lorentz)
            .map_err(|e| e.to_string())?;
        let reference = pinhole()?;
        let mut rng = get_seeded_rng(0);
        let sample = CameraSample::centre((2, 11));
        assert!(still
            .gen_ray(&sample, &mut rng)
            .direction()
            .compare(reference.gen_ray(&sample, &mut rng).direction()));
        Ok(())
    }

    #[test]
    fn test_forward_motion_widens_view() -> Result<(), String> {
        let reference = pinhole()?;
        let mut rng = get_seeded_rng(0);
        let forward = Vector3D::new(0., 1., 0.);
        let sample = CameraSample::centre((0, 8));
        let still = reference.gen_ray(&sample, &mut rng).direction() * forward;

        for transform in [VelocityTransform::Lorentz, VelocityTransform::Galileo] {
            let moving = RelativisticCamera::new(pinhole()?, Vector3D::new(0., 0.9, 0.), transform)
                .map_err(|e| e.to_string())?;
            let d = moving.gen_ray(&sample, &mut rng).direction();
            assert!((d.length() - 1.).abs() < 1e-9);
            // Moving forward, the camera sees a wider field
            assert!(d * forward < still, "{:?}: {} vs {}", transform, d * forward, still);
        }

        // On-axis rays are not deviated
        let moving = RelativisticCamera::new(pinhole()?, Vector3D::new(0., 0.9, 0.), VelocityTransform::Lorentz)
            .map_err(|e| e.to_string())?;
        let d = moving
            .gen_ray(
                &CameraSample {
                    p_film: (8, 8),
                    p_pixel: (0., 0.),
                },
                &mut rng,
            )
            .direction();
        assert!(d.compare(forward), "d = {}", d);
        Ok(())
    }

    #[test]
    fn test_superluminal() -> Result<(), String> {
        assert!(RelativisticCamera::new(pinhole()?, Vector3D::new(1., 0., 0.), VelocityTransform::Galileo).is_err());
        Ok(())
    }
}
