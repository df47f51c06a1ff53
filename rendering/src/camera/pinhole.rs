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

use crate::camera::{Camera, CameraSample, Film, View};
use crate::error::ConfigError;
use crate::rand::RandGen;
use crate::ray::Ray;
use crate::Float;
use geometry::{Ray3D, Vector3D};
use serde::{Deserialize, Serialize};

/// Checks that a film has at least one pixel
pub(super) fn check_film(film: Film) -> Result<Film, ConfigError> {
    let (width, height) = film.resolution;
    if width == 0 || height == 0 {
        return Err(ConfigError::NonPositive {
            name: "film resolution",
            value: width.min(height) as Float,
        });
    }
    Ok(film)
}

/// A perfect pinhole camera: every ray leaves the view point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pinhole {
    view: View,
    film: Film,
    film_distance: Float,

    /// A [`Vector3D`] which is the result of view_direction.cross(view_up)
    u: Vector3D,
}

impl Pinhole {
    pub fn new(view: View, film: Film) -> Result<Self, ConfigError> {
        let view = view.orthonormalized()?;
        let film = check_film(film)?;
        let film_distance = 1. / (view.field_of_view.to_radians() / 2.0).tan();
        let u = view.view_right();
        Ok(Pinhole {
            view,
            film,
            film_distance,
            u,
        })
    }

    /// The normalized direction, leaving the view point, that goes
    /// through a certain [`CameraSample`]
    pub fn direction_through(&self, sample: &CameraSample) -> Vector3D {
        let (width, height) = self.film.resolution;
        let aspect_ratio = height as Float / width as Float;
        let xlim = 2.;
        let ylim = aspect_ratio * xlim;

        let (x_pixel, y_pixel) = sample.p_film;
        let (x_offset, y_offset) = sample.p_pixel;
        let dx = xlim / width as Float;
        let dy = ylim / height as Float;

        let x = (x_pixel as Float + x_offset) * dx - xlim / 2.;
        let y = (y_pixel as Float + y_offset) * dy - ylim / 2.;

        (self.view.view_direction * self.film_distance + self.u * x - self.view.view_up * y)
            .get_normalized()
    }

    /// The pixel a ray leaving the view point goes through. Returns
    /// `None` if the ray does not start at the view point or if it
    /// leaves the field of view.
    pub fn pixel_from_ray(&self, ray: &Ray3D) -> Option<(usize, usize)> {
        if (ray.origin - self.view.view_point).length_squared() > 1e-18 {
            return None;
        }

        // Intersect the plane of the film
        let direction = ray.direction;
        let normal = self.view.view_direction;
        let cos = normal * direction;
        if cos < 1e-12 {
            return None;
        }
        let intersection_pt = direction * (self.film_distance / cos);
        let x = intersection_pt * self.u;
        let z = intersection_pt * self.view.view_up;

        let (width, height) = self.film.resolution;
        let xlim = 2.;
        let aspect_ratio = height as Float / width as Float;
        let ylim = aspect_ratio * xlim;
        if x.abs() > xlim / 2. || z.abs() > ylim / 2. {
            return None;
        }

        let dx = xlim / width as Float;
        let dy = ylim / height as Float;
        let x = ((x + xlim / 2.) / dx).floor() as usize;
        let y = ((ylim / 2. - z) / dy).floor() as usize;

        Some((x.min(width - 1), y.min(height - 1)))
    }
}

impl Camera for Pinhole {
    fn gen_ray(&self, sample: &CameraSample, _rng: &mut RandGen) -> Ray {
        Ray::new(self.view.view_point, self.direction_through(sample))
    }

    fn film_resolution(&self) -> (usize, usize) {
        self.film.resolution
    }

    fn view(&self) -> &View {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::get_seeded_rng;
    use geometry::Point3D;

    #[test]
    fn test_ray_pixel() -> Result<(), String> {
        let film = Film {
            resolution: (512, 300),
        };
        let view = View {
            view_direction: Vector3D::new(0., 1., 0.).get_normalized(),
            view_point: Point3D::new(2., 1., 1.),
            ..View::default()
        };
        let camera = Pinhole::new(view, film).map_err(|e| e.to_string())?;
        let mut rng = get_seeded_rng(0);

        for p_film in [(10, 20), (0, 0), (511, 299), (256, 150)] {
            let sample = CameraSample::centre(p_film);
            let ray = camera.gen_ray(&sample, &mut rng);
            let found = camera
                .pixel_from_ray(&ray.geometry)
                .ok_or(format!("no pixel for {:?}", p_film))?;
            assert_eq!(p_film, found);
        }
        Ok(())
    }

    #[test]
    fn test_centre_looks_forward() -> Result<(), String> {
        let film = Film {
            resolution: (2, 2),
        };
        let camera = Pinhole::new(View::default(), film).map_err(|e| e.to_string())?;
        let sample = CameraSample {
            p_film: (1, 1),
            p_pixel: (0., 0.),
        };
        let d = camera.direction_through(&sample);
        assert!(d.compare(Vector3D::new(0., 1., 0.)), "d = {}", d);

        // Left-most column points to the left (-x); top row points up (+z)
        let d = camera.direction_through(&CameraSample::centre((0, 0)));
        assert!(d.x < 0. && d.z > 0.);
        Ok(())
    }

    #[test]
    fn test_outside() -> Result<(), String> {
        let film = Film {
            resolution: (10, 10),
        };
        let camera = Pinhole::new(View::default(), film).map_err(|e| e.to_string())?;
        let behind = Ray3D {
            origin: Point3D::new(0., 0., 0.),
            direction: Vector3D::new(0., -1., 0.),
        };
        assert!(camera.pixel_from_ray(&behind).is_none());
        let elsewhere = Ray3D {
            origin: Point3D::new(1., 0., 0.),
            direction: Vector3D::new(0., 1., 0.),
        };
        assert!(camera.pixel_from_ray(&elsewhere).is_none());
        assert!(Pinhole::new(View::default(), Film { resolution: (0, 10) }).is_err());
        Ok(())
    }
}
