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

use geometry::{Parallelogram3D, Plane3D, Point3D, Sphere3D, Vector3D};
use rendering::camera::*;
use rendering::lights::{Light, PointLight};
use rendering::surface::*;
use rendering::{ConfigError, ExposureCompensation, RayTracer, Scene, Spectrum};

fn cfg<T>(r: Result<T, ConfigError>) -> Result<T, String> {
    r.map_err(|e| e.to_string())
}

/// A white floor, a glass ball, a mirror and a lenslet-array window,
/// lit by a point light
fn demo_scene() -> Result<Scene, String> {
    let mut scene = Scene::new();
    scene.background = Some(Spectrum::new(0.1, 0.1, 0.2));
    scene.push_light(Light::Ambient(Spectrum::gray(0.1)));
    scene.push_light(Light::Point(PointLight {
        position: Point3D::new(0., 2., 10.),
        colour: Spectrum::WHITE,
    }));

    let floor = cfg(Tiling::new(
        cfg(Colour::new(Spectrum::gray(0.8), Spectrum::BLACK, 1.))?.into(),
        cfg(Colour::new(Spectrum::gray(0.2), Spectrum::BLACK, 1.))?.into(),
        2.,
        2.,
    ))?;
    scene.push_object(
        "floor",
        Plane3D::new(
            Point3D::new(0., 0., 0.),
            Vector3D::new(0., 0., 1.),
            Vector3D::new(1., 0., 0.),
        )?,
        floor.into(),
    );
    scene.push_object(
        "ball",
        Sphere3D::new(1., Point3D::new(0., 6., 1.))?,
        Refractive::glass().into(),
    );
    scene.push_object(
        "mirror",
        Parallelogram3D::centred(
            Point3D::new(3., 8., 1.5),
            Vector3D::new(-1., 1., 0.),
            Vector3D::new(0., 0., 1.),
            3.,
            3.,
        )?,
        Reflective::default().into(),
    );
    scene.push_object(
        "window",
        Parallelogram3D::centred(
            Point3D::new(-2.5, 5., 1.),
            Vector3D::new(0., 1., 0.),
            Vector3D::new(0., 0., 1.),
            2.,
            2.,
        )?,
        cfg(ConfocalLensletArrays::new(-1.))?.into(),
    );
    Ok(scene)
}

fn view() -> View {
    View {
        view_point: Point3D::new(0., -2., 1.5),
        view_direction: Vector3D::new(0., 1., -0.1),
        view_up: Vector3D::new(0., 0., 1.),
        field_of_view: 60.,
    }
}

fn film() -> Film {
    Film {
        resolution: (24, 16),
    }
}

#[test]
fn renders_are_reproducible() -> Result<(), String> {
    let scene = demo_scene()?;
    let camera = cfg(Pinhole::new(view(), film()))?;
    let tracer = RayTracer {
        n_samples: 2,
        ..RayTracer::default()
    };
    let a = cfg(tracer.render(&scene, &camera))?;
    let b = cfg(tracer.render(&scene, &camera))?;
    assert_eq!((a.width, a.height), (24, 16));
    assert_eq!(a, b);
    assert!(!a.mean().is_black());
    Ok(())
}

#[test]
fn exposure_scales_the_image() -> Result<(), String> {
    let scene = demo_scene()?;
    let camera = cfg(Pinhole::new(view(), film()))?;
    let tracer = RayTracer::default();
    let dark = cfg(tracer.render(&scene, &camera))?;
    let bright = cfg(RayTracer {
        exposure: ExposureCompensation(1),
        ..tracer
    }
    .render(&scene, &camera))?;
    for (d, b) in dark.pixels.iter().zip(bright.pixels.iter()) {
        assert!((d.red() * 2. - b.red()).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn invalid_tracer_does_not_render() -> Result<(), String> {
    let scene = demo_scene()?;
    let camera = cfg(Pinhole::new(view(), film()))?;
    let tracer = RayTracer {
        max_depth: 0,
        ..RayTracer::default()
    };
    assert!(tracer.render(&scene, &camera).is_err());
    Ok(())
}

#[test]
fn out_of_range_scene_file_does_not_render() -> Result<(), String> {
    let mut scene = Scene::new();
    let mirror = cfg(Reflective::new(0.5, true))?;
    scene.push_object(
        "mirror",
        Plane3D::new(
            Point3D::new(0., 0., 0.),
            Vector3D::new(0., 0., 1.),
            Vector3D::new(1., 0., 0.),
        )?,
        mirror.into(),
    );
    let json = serde_json::to_string(&scene).map_err(|e| e.to_string())?;
    let edited: Scene = serde_json::from_str(&json.replace("0.5", "2.5")).map_err(|e| e.to_string())?;

    let camera = cfg(Pinhole::new(view(), film()))?;
    let tracer = RayTracer::default();
    assert!(tracer.render(&scene, &camera).is_ok());
    assert!(matches!(
        tracer.render(&edited, &camera),
        Err(ConfigError::OutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn other_cameras() -> Result<(), String> {
    let scene = demo_scene()?;
    let tracer = RayTracer {
        n_samples: 3,
        ..RayTracer::default()
    };

    let aperture = cfg(ApertureCamera::new(view(), film(), 0.05, 8.))?;
    let img = cfg(tracer.render(&scene, &aperture))?;
    assert_eq!(img.pixels.len(), 24 * 16);

    let moving = cfg(RelativisticCamera::new(
        cfg(Pinhole::new(view(), film()))?,
        Vector3D::new(0., 0.5, 0.),
        VelocityTransform::Lorentz,
    ))?;
    let still = cfg(Pinhole::new(view(), film()))?;
    let a = cfg(tracer.render(&scene, &moving))?;
    let b = cfg(tracer.render(&scene, &still))?;
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn stereo_pairs() -> Result<(), String> {
    let scene = demo_scene()?;
    let tracer = RayTracer::default();
    for (mode, width) in [
        (StereoMode::Anaglyph, 24),
        (StereoMode::ColourAnaglyph, 24),
        (StereoMode::SideBySide, 48),
    ] {
        let stereo = cfg(Stereo::new(view(), film(), 0.065, mode))?;
        let img = cfg(tracer.render_stereo(&scene, &stereo))?;
        assert_eq!((img.width, img.height), (width, 16));
    }
    Ok(())
}

#[test]
fn scene_round_trips_through_json() -> Result<(), String> {
    let scene = demo_scene()?;
    let json = serde_json::to_string(&scene).map_err(|e| e.to_string())?;
    let back: Scene = serde_json::from_str(&json).map_err(|e| e.to_string())?;
    assert_eq!(back.n_objects(), scene.n_objects());

    let camera = cfg(Pinhole::new(view(), film()))?;
    let tracer = RayTracer::default();
    let a = cfg(tracer.render(&scene, &camera))?;
    let b = cfg(tracer.render(&back, &camera))?;
    assert!(a.diff(&b)?.mean().max() < 1e-6);
    Ok(())
}

#[test]
#[ignore]
fn large_preview() -> Result<(), String> {
    // cargo test --features parallel --release --package rendering --test test_scenes -- large_preview --exact --nocapture --ignored
    let scene = demo_scene()?;
    let camera = cfg(Pinhole::new(
        view(),
        Film {
            resolution: (160, 100),
        },
    ))?;
    let tracer = RayTracer {
        n_samples: 16,
        ..RayTracer::default()
    };
    let img = cfg(tracer.render(&scene, &camera))?;
    println!("{}", img.to_ascii(80));
    Ok(())
}
