use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use orrery::animation::EasingFunction;
use orrery::camera::OrbitControls;
use orrery::options::Options;
use orrery::Orrery;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.3))));
    });
}

fn controls_update_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let mut camera = options.camera.build(16.0 / 9.0);
    let mut controls =
        OrbitControls::new(&mut camera, &options.controls, options.limits);

    c.bench_function("controls_update_damped", |b| {
        b.iter(|| {
            controls.rotate_left(black_box(0.01));
            black_box(controls.update(&mut camera, Some(1.0 / 60.0)))
        });
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orrery_frame");

    let Ok(mut overview) = Orrery::solar(Options::default(), 16.0 / 9.0)
    else {
        return;
    };
    group.bench_function("overview", |b| {
        b.iter(|| black_box(overview.frame(1.0 / 60.0)));
    });

    let Ok(mut focused) = Orrery::solar(Options::default(), 16.0 / 9.0)
    else {
        return;
    };
    if focused.focus_named("Saturn").is_ok() {
        group.bench_function("focus_flight", |b| {
            b.iter(|| black_box(focused.frame(1.0 / 600.0)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    controls_update_benchmark,
    frame_benchmark
);
criterion_main!(benches);
