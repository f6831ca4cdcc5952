use criterion::{criterion_group, criterion_main, Criterion};
use physics::{Bounds, Simulation};

/// The collision sweep is O(n²); this pins the per-frame cost at the default
/// population so regressions show up.
fn bench_step(c: &mut Criterion) {
    let mut sim = Simulation::new(Bounds::default(), Some(42)).unwrap();
    sim.populate(100).unwrap();
    c.bench_function("step_100_balls", |b| b.iter(|| sim.step(1.0 / 60.0)));
}

fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_100_balls", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(Bounds::default(), Some(42)).unwrap();
            sim.populate(100).unwrap();
            sim
        });
    });
}

criterion_group!(benches, bench_step, bench_populate);
criterion_main!(benches);
