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

use crate::rand::*;
use crate::Float;
use crate::PI;
use geometry::intersection::tangent_frame;
use geometry::{Point3D, Vector3D};

/// Samples a point uniformly over a disc of radius `radius`,
/// centred at the origin of the XY plane
pub fn uniform_sample_horizontal_disc(rng: &mut RandGen, radius: Float) -> (Float, Float) {
    // Accurate, non-rejection
    let (r, theta): (Float, Float) = rng.gen();

    let r = radius * r.sqrt();
    let theta = 2. * PI * theta;
    let (theta_sin, theta_cos) = theta.sin_cos();

    (r * theta_sin, r * theta_cos)
}

/// Samples a point uniformly over a disc with a certain `centre`
/// and `normal`
pub fn uniform_sample_disc(
    rng: &mut RandGen,
    radius: Float,
    centre: Point3D,
    normal: Vector3D,
) -> Point3D {
    let (x_local, y_local) = uniform_sample_horizontal_disc(rng, radius);
    let (e1, e2) = tangent_frame(normal.get_normalized(), Vector3D::new(1., 0., 0.));
    centre + e1 * x_local + e2 * y_local
}

/// A point within a pixel, uniformly distributed in `[0, 1) x [0, 1)`
pub fn uniform_sample_square(rng: &mut RandGen) -> (Float, Float) {
    rng.gen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sample_disc() -> Result<(), String> {
        fn check(rng: &mut RandGen, radius: Float, centre: Point3D, normal: Vector3D) -> Result<(), String> {
            let normal = normal.get_normalized();
            let p = uniform_sample_disc(rng, radius, centre, normal);
            if ((p - centre) * normal).abs() > 1e-9 {
                return Err(format!(
                    "Point is not coplanar with circle. ((p-centre)*normal).abs() == {}",
                    ((p - centre) * normal).abs()
                ));
            }
            if (p - centre).length() > radius {
                return Err(format!(
                    "Sample out of circle. Point sampled was {} | p-centre = {} | radius = {}",
                    p,
                    (p - centre).length(),
                    radius
                ));
            }

            Ok(())
        }

        let mut rng = get_seeded_rng(1);
        for _ in 0..1000 {
            check(&mut rng, 1.2, Point3D::new(0., 0., 0.), Vector3D::new(0., 0., 1.))?;
            check(&mut rng, 4.2, Point3D::new(3., 0., 0.), Vector3D::new(0., 1., 1.))?;
            check(&mut rng, 0.12, Point3D::new(0., 1., 0.), Vector3D::new(0., 1., 0.))?;
            check(&mut rng, 23., Point3D::new(0., -10., -20.), Vector3D::new(1., 1., 0.))?;
            check(&mut rng, 23., Point3D::new(0., -10., -20.), Vector3D::new(1., 0., 0.))?;
        }

        Ok(())
    }

    #[test]
    fn test_disc_is_uniform() {
        // Half of the samples should fall within r = R/sqrt(2)
        let mut rng = get_seeded_rng(3);
        let n = 20000;
        let inner = (0..n)
            .filter(|_| {
                let (x, y) = uniform_sample_horizontal_disc(&mut rng, 2.);
                (x * x + y * y).sqrt() < 2. / (2. as Float).sqrt()
            })
            .count();
        let fraction = inner as Float / n as Float;
        assert!((fraction - 0.5).abs() < 0.02, "fraction = {}", fraction);
    }

    #[test]
    fn test_square() {
        let mut rng = get_seeded_rng(0);
        for _ in 0..1000 {
            let (x, y) = uniform_sample_square(&mut rng);
            assert!((0. ..1.).contains(&x));
            assert!((0. ..1.).contains(&y));
        }
    }
}
