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

use crate::camera::{Camera, CameraSample, Film, Pinhole, View};
use crate::error::{check_positive, ConfigError};
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::samplers::uniform_sample_horizontal_disc;
use crate::Float;
use serde::{Deserialize, Serialize};

/// A camera with a circular aperture of finite size.
///
/// Points at `focus_distance` (measured along the view direction)
/// are sharp; everything else is blurred. Rendering with several
/// samples per pixel is needed to see the blur.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApertureCamera {
    pinhole: Pinhole,
    aperture_radius: Float,
    focus_distance: Float,
}

impl ApertureCamera {
    pub fn new(
        view: View,
        film: Film,
        aperture_radius: Float,
        focus_distance: Float,
    ) -> Result<Self, ConfigError> {
        if aperture_radius < 0. || !aperture_radius.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "aperture_radius",
                value: aperture_radius,
            });
        }
        Ok(Self {
            pinhole: Pinhole::new(view, film)?,
            aperture_radius,
            focus_distance: check_positive("focus_distance", focus_distance)?,
        })
    }

    pub fn aperture_radius(&self) -> Float {
        self.aperture_radius
    }

    pub fn focus_distance(&self) -> Float {
        self.focus_distance
    }
}

impl Camera for ApertureCamera {
    fn gen_ray(&self, sample: &CameraSample, rng: &mut RandGen) -> Ray {
        let view = self.pinhole.view();
        let direction = self.pinhole.direction_through(sample);
        if self.aperture_radius == 0. {
            return Ray::new(view.view_point, direction);
        }

        // The point that this sample sees in focus
        let cos = direction * view.view_direction;
        let focus = view.view_point + direction * (self.focus_distance / cos);

        let (x, y) = uniform_sample_horizontal_disc(rng, self.aperture_radius);
        let origin = view.view_point + view.view_right() * x + view.view_up * y;
        Ray::new(origin, focus - origin)
    }

    fn film_resolution(&self) -> (usize, usize) {
        self.pinhole.film_resolution()
    }

    fn view(&self) -> &View {
        self.pinhole.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::get_seeded_rng;
    use geometry::Point3D;

    #[test]
    fn test_rays_meet_at_focus() -> Result<(), String> {
        let film = Film {
            resolution: (32, 32),
        };
        let camera = ApertureCamera::new(View::default(), film, 0.1, 5.).map_err(|e| e.to_string())?;
        let mut rng = get_seeded_rng(7);
        let sample = CameraSample::centre((16, 16));
        let expected_focus = Point3D::new(0., 0., 0.)
            + camera.pinhole.direction_through(&sample) * (5. / camera.pinhole.direction_through(&sample).y);

        for _ in 0..50 {
            let ray = camera.gen_ray(&sample, &mut rng);
            // The origin is within the aperture, in the lens plane
            let offset = ray.origin() - Point3D::new(0., 0., 0.);
            assert!(offset.length() <= 0.1 + 1e-12);
            assert!(offset.y.abs() < 1e-12);

            // and the ray goes through the focus point
            let t = (expected_focus.y - ray.origin().y) / ray.direction().y;
            let p = ray.geometry.project(t);
            assert!(p.compare(expected_focus), "p = {} | focus = {}", p, expected_focus);
        }
        Ok(())
    }

    #[test]
    fn test_zero_aperture_is_pinhole() -> Result<(), String> {
        let film = Film {
            resolution: (8, 8),
        };
        let camera = ApertureCamera::new(View::default(), film, 0., 1.).map_err(|e| e.to_string())?;
        let pinhole = Pinhole::new(View::default(), film).map_err(|e| e.to_string())?;
        let mut rng = get_seeded_rng(0);
        let sample = CameraSample::centre((3, 5));
        let a = camera.gen_ray(&sample, &mut rng);
        let b = pinhole.gen_ray(&sample, &mut rng);
        assert!(a.direction().compare(b.direction()));
        assert!(a.origin().compare(b.origin()));
        Ok(())
    }

    #[test]
    fn test_bad_parameters() {
        let film = Film {
            resolution: (8, 8),
        };
        assert!(ApertureCamera::new(View::default(), film, -1., 1.).is_err());
        assert!(ApertureCamera::new(View::default(), film, 0.1, 0.).is_err());
    }
}
