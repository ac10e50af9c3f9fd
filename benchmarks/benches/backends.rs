use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ode_solvers::dopri5::Dopri5;

use benchmarks::BenchConfig;
use spring_pendulum::{PendulumState, SpringPendulum};
use vector_math::{Compiled, Fallback, VectorMath};

fn derivative_once<B: VectorMath>(
    model: &SpringPendulum<B>,
    state: &PendulumState,
) -> PendulumState {
    let mut out = PendulumState::zeros();
    model.derivative(0.0, state, &mut out);
    out
}

fn integrate_once<B: VectorMath>(config: &BenchConfig, math: B) {
    let model = SpringPendulum::new(config.constants, math);
    let mut stepper = Dopri5::new(
        model,
        config.grid.start(),
        config.grid.end(),
        config.grid.step(),
        config.initial_state,
        config.rel_tol,
        config.abs_tol,
    );
    stepper.integrate().unwrap();
}

fn bench_derivative(c: &mut Criterion) {
    let config = BenchConfig::new(10_001, 10.0);
    let compiled = SpringPendulum::new(config.constants, Compiled);
    let fallback = SpringPendulum::new(config.constants, Fallback);

    c.bench_function("derivative_compiled", |b| {
        b.iter(|| derivative_once(&compiled, black_box(&config.initial_state)))
    });
    c.bench_function("derivative_fallback", |b| {
        b.iter(|| derivative_once(&fallback, black_box(&config.initial_state)))
    });
}

fn bench_integration(c: &mut Criterion) {
    let config = BenchConfig::new(1_001, 1.0);

    c.bench_function("integration_compiled", |b| {
        b.iter(|| integrate_once(&config, Compiled))
    });
    c.bench_function("integration_fallback", |b| {
        b.iter(|| integrate_once(&config, Fallback))
    });
}

criterion_group!(benches, bench_derivative, bench_integration);
criterion_main!(benches);
