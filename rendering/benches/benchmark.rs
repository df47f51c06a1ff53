use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geometry::{Plane3D, Point3D, Sphere3D, Vector3D};
use rendering::camera::{Film, Pinhole, View};
use rendering::rand::get_seeded_rng;
use rendering::surface::{GlowingColour, Reflective, Refractive, SurfaceModel};
use rendering::{Ray, RayTracer, Scene, Spectrum};

/// Two facing mirrors with a glass ball between them: rays bounce
/// until the trace budget runs out
fn hall_of_mirrors() -> Scene {
    let mut scene = Scene::new();
    let mirror: SurfaceModel = Reflective::default().into();
    if let Ok(p) = Plane3D::new(
        Point3D::new(0., 0., 0.),
        Vector3D::new(0., 1., 0.),
        Vector3D::new(1., 0., 0.),
    ) {
        scene.push_object("south", p, mirror.clone());
    }
    if let Ok(p) = Plane3D::new(
        Point3D::new(0., 10., 0.),
        Vector3D::new(0., -1., 0.),
        Vector3D::new(1., 0., 0.),
    ) {
        scene.push_object("north", p, mirror);
    }
    if let Ok(s) = Sphere3D::new(1., Point3D::new(0., 5., 0.)) {
        scene.push_object("ball", s, Refractive::glass().into());
    }
    if let Ok(p) = Plane3D::new(
        Point3D::new(0., 0., -2.),
        Vector3D::new(0., 0., 1.),
        Vector3D::new(1., 0., 0.),
    ) {
        scene.push_object("floor", p, GlowingColour::new(Spectrum::gray(0.5)).into());
    }
    scene
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let scene = black_box(hall_of_mirrors());
    let ray = black_box(Ray::new(
        Point3D::new(0.1, 1., 0.),
        Vector3D::new(0.01, 1., -0.001),
    ));

    c.bench_function("cast_ray", |b| {
        b.iter(|| black_box(scene.cast_ray(&ray.geometry)))
    });

    let tracer = RayTracer {
        max_depth: 50,
        ..RayTracer::default()
    };
    let mut rng = get_seeded_rng(0);
    c.bench_function("trace_hall_of_mirrors", |b| {
        b.iter(|| black_box(tracer.trace(&ray, &scene, &mut rng)))
    });

    let film = Film {
        resolution: (32, 32),
    };
    let view = View {
        view_point: Point3D::new(0., 1., 0.),
        ..View::default()
    };
    if let Ok(camera) = Pinhole::new(view, film) {
        c.bench_function("render_32x32", |b| {
            b.iter(|| black_box(tracer.render(&scene, &camera)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
