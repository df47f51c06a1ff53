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

use geometry::{Disc3D, Parallelogram3D, Plane3D, Point3D, Sphere3D, Vector3D};
use rendering::lights::{Light, PointLight};
use rendering::surface::*;
use rendering::{ConfigError, Scene, Spectrum};

/// The view that frames [`demo_scene`] best
pub fn demo_view() -> rendering::camera::View {
    rendering::camera::View {
        view_point: Point3D::new(0., -4., 2.),
        view_direction: Vector3D::new(0., 1., -0.15),
        view_up: Vector3D::new(0., 0., 1.),
        field_of_view: 70.,
    }
}

/// A checkerboard floor with, from left to right, a window of
/// confocal lenslet arrays, a glass ball, a ray-rotating window and
/// a mirror. A portal on the back wall shows what is behind the
/// camera, and a thin lens hangs above everything.
pub fn demo_scene() -> Result<Scene, ConfigError> {
    let mut scene = Scene::new();
    scene.background = Some(Spectrum::new(0.05, 0.05, 0.12));
    scene.push_light(Light::Ambient(Spectrum::gray(0.15)));
    scene.push_light(Light::Point(PointLight {
        position: Point3D::new(-3., -2., 8.),
        colour: Spectrum::gray(0.9),
    }));

    // Floor
    let white = Colour::new(Spectrum::gray(0.9), Spectrum::gray(0.1), 20.)?;
    let dark = Colour::new(Spectrum::new(0.1, 0.1, 0.3), Spectrum::BLACK, 1.)?;
    scene.push_object(
        "floor",
        Plane3D::new(
            Point3D::new(0., 0., 0.),
            Vector3D::new(0., 0., 1.),
            Vector3D::new(1., 0., 0.),
        )?,
        Tiling::new(white.into(), dark.into(), 2., 2.)?.into(),
    );

    // Back wall, with a rainbow
    scene.push_object(
        "back wall",
        Plane3D::new(
            Point3D::new(0., 12., 0.),
            Vector3D::new(0., -1., 0.),
            Vector3D::new(1., 0., 0.),
        )?,
        Rainbow::new(0.7, 0.5, Point3D::new(0., -4., 6.))?.into(),
    );

    // Behind the camera: a red wall
    scene.push_object(
        "red wall",
        Plane3D::new(
            Point3D::new(0., -8., 0.),
            Vector3D::new(0., 1., 0.),
            Vector3D::new(1., 0., 0.),
        )?,
        Colour::new(Spectrum::new(0.8, 0.1, 0.1), Spectrum::BLACK, 1.)?.into(),
    );

    // Objects
    scene.push_object(
        "CLAs window",
        Parallelogram3D::centred(
            Point3D::new(-3., 4., 1.2),
            Vector3D::new(1., 0., 0.),
            Vector3D::new(0., 0., 1.),
            1.6,
            2.,
        )?,
        ConfocalLensletArrays::new(-1.)?.into(),
    );
    scene.push_object(
        "glass ball",
        Sphere3D::new(1., Point3D::new(-1., 5., 1.))?,
        Refractive::glass().into(),
    );
    scene.push_object(
        "rotating window",
        Parallelogram3D::centred(
            Point3D::new(1.3, 4., 1.2),
            Vector3D::new(1., 0., 0.),
            Vector3D::new(0., 0., 1.),
            1.4,
            2.,
        )?,
        RayRotating::new(0.5).into(),
    );
    scene.push_object(
        "mirror",
        Parallelogram3D::centred(
            Point3D::new(3.5, 6., 1.5),
            Vector3D::new(-1., 1., 0.),
            Vector3D::new(0., 0., 1.),
            2.5,
            3.,
        )?,
        Reflective::default().into(),
    );
    let lens = IdealThinLensSurface::new(
        Point3D::new(0., 3., 3.5),
        Vector3D::new(0., 1., 0.),
        2.,
    )?;
    scene.push_object(
        "lens",
        Disc3D::new(
            Point3D::new(0., 3., 3.5),
            Vector3D::new(0., -1., 0.),
            0.7,
            Vector3D::new(1., 0., 0.),
        )?,
        lens.into(),
    );

    // A portal to behind the camera
    let exit = scene.push_object(
        "portal exit",
        Parallelogram3D::new(
            Point3D::new(-1., -5., 0.5),
            Vector3D::new(2., 0., 0.),
            Vector3D::new(0., 0., 1.5),
        )?,
        GlowingColour::new(Spectrum::BLACK).into(),
    );
    scene.push_object(
        "portal entrance",
        Parallelogram3D::new(
            Point3D::new(-1., 11.9, 3.),
            Vector3D::new(2., 0., 0.),
            Vector3D::new(0., 0., 1.5),
        )?,
        Teleporting::new(exit, TeleportationType::Perfect).into(),
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendering::camera::{Film, Pinhole};
    use rendering::RayTracer;

    #[test]
    fn test_demo_renders() -> Result<(), String> {
        let scene = demo_scene().map_err(|e| e.to_string())?;
        assert!(scene.find_object("portal exit").is_some());
        let camera = Pinhole::new(
            demo_view(),
            Film {
                resolution: (20, 12),
            },
        )
        .map_err(|e| e.to_string())?;
        let img = RayTracer::default()
            .render(&scene, &camera)
            .map_err(|e| e.to_string())?;
        assert!(!img.mean().is_black());
        assert_eq!(img.to_ascii(20).lines().count(), 6);
        Ok(())
    }
}
