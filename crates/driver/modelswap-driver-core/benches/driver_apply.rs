use criterion::{black_box, criterion_group, criterion_main, Criterion};

use modelswap_driver_core::{Outputs, ParamRule, ParameterDriver};
use modelswap_test_fixtures::MapAnimator;

fn bench_driver_apply(c: &mut Criterion) {
    let mut animator = MapAnimator::new()
        .with_float("Speed", 0.0)
        .with_float("Energy", 10.0)
        .with_int("Mood", 0)
        .with_bool("Happy", false)
        .with_trigger("Jump");

    let mut driver = ParameterDriver::new(vec![
        ParamRule::set("Speed", 2.5),
        ParamRule::add("Mood", 1.0),
        ParamRule::random("Happy", 0.0, 0.0).with_chance(0.5),
        ParamRule::copy("Speed", "Energy").with_range(0.0, 100.0, 0.0, 5.0),
        ParamRule::set("Jump", 0.0),
    ]);
    driver.bind(&animator);

    let mut outputs = Outputs::default();
    c.bench_function("driver_apply_5_rules", |b| {
        b.iter(|| {
            outputs.clear();
            driver.apply(black_box(&mut animator), &mut outputs);
        })
    });
}

criterion_group!(benches, bench_driver_apply);
criterion_main!(benches);
