use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sortvis::prelude::*;

fn run_headless(entry: DriverEntry, settings: &Settings) -> RunStats {
    let mut now = Instant::now();
    let mut controller = RunController::new(entry, settings, now);
    while controller.tick(now) == RunStatus::Running {
        now += Duration::from_secs(3600);
    }
    controller.stats()
}

fn bench_drivers(c: &mut Criterion) {
    let registry = default_registry().expect("default registry");
    let mut group = c.benchmark_group("headless_run");

    for count in [20, 100] {
        let settings = Settings {
            count,
            seed: Some(1),
            ..Default::default()
        };

        for category in registry.categories() {
            for entry in category.drivers.iter().filter_map(|n| registry.get(n))
            {
                group.bench_with_input(
                    BenchmarkId::new(entry.name(), count),
                    &settings,
                    |b, settings| b.iter(|| run_headless(entry, settings)),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_drivers);
criterion_main!(benches);
