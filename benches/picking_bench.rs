use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::{Vec2, Vec3};
use terrella::camera::{Camera, Viewport};
use terrella::picking::{find_closest, pick, Sphere, DEFAULT_SIMILARITY_THRESHOLD};
use terrella::scene::{GeoCoord, GLOBE_RADIUS};
use terrella::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicOut;
    c.bench_function("cubic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn pick_benchmark(c: &mut Criterion) {
    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, 1000.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy: 30.0,
        znear: 1.0,
        zfar: 20000.0,
    };
    let viewport = Viewport::new(1280, 720).unwrap();
    let globe = Sphere::new(Vec3::ZERO, GLOBE_RADIUS).unwrap();

    c.bench_function("ray_sphere_pick", |b| {
        b.iter(|| {
            black_box(pick(
                black_box(Vec2::new(700.0, 300.0)),
                &viewport,
                &camera,
                &globe,
            ))
        })
    });
}

fn nearest_point_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_closest");

    for count in [100, 1_000, 10_000].iter() {
        // Points on a lat/lng grid covering the globe.
        let positions: Vec<Vec3> = (0..*count)
            .map(|i| {
                let lat = (i % 180) as f32 - 90.0;
                let lng = ((i * 7) % 360) as f32 - 180.0;
                GeoCoord::new(lat, lng).unwrap().to_surface(GLOBE_RADIUS)
            })
            .collect();
        let hit = GeoCoord::new(12.3, 45.6).unwrap().to_surface(GLOBE_RADIUS);

        group.bench_function(format!("{}_points", count), |b| {
            b.iter(|| {
                black_box(find_closest(
                    black_box(hit),
                    Vec3::ZERO,
                    positions.iter().copied(),
                    DEFAULT_SIMILARITY_THRESHOLD,
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, pick_benchmark, nearest_point_benchmark);
criterion_main!(benches);
