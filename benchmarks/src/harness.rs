use std::hint::black_box;
use std::time::Instant;

use ode_solvers::dopri5::Dopri5;
use spring_pendulum::{PendulumState, SpringPendulum};
use vector_math::{Compiled, Fallback, VectorMath};

use crate::config::BenchConfig;
use crate::errors::BenchmarkErrors;
use crate::report::{BenchReport, ModePass, SolverStats};
use crate::saving;

/// Runs the full benchmark: one measurement pass per backend mode, compiled
/// first, fallback second. Each pass completes (and its results are captured)
/// before the next begins, so no measurement ever observes more than one
/// mode.
pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchmarkErrors> {
    let compiled = run_pass(config, Compiled)?;
    let fallback = run_pass(config, Fallback)?;
    Ok(BenchReport {
        passes: vec![compiled, fallback],
    })
}

/// One complete pass: two isolated single-call timings of the derivative at
/// the grid's first time point, then one timing of the full integration.
pub fn run_pass<B>(config: &BenchConfig, math: B) -> Result<ModePass, BenchmarkErrors>
where
    B: VectorMath,
{
    let model = SpringPendulum::new(config.constants, math);
    let t0 = config.grid.start();

    let derivative_timings = [
        time_derivative(&model, t0, &config.initial_state),
        time_derivative(&model, t0, &config.initial_state),
    ];

    let mut stepper = Dopri5::new(
        model,
        config.grid.start(),
        config.grid.end(),
        config.grid.step(),
        config.initial_state,
        config.rel_tol,
        config.abs_tol,
    );
    let started = Instant::now();
    let stats = stepper.integrate()?;
    let integration_timing = started.elapsed().as_secs_f64();

    // Export happens outside the timed region.
    if let Some(folder) = &config.save_folder {
        saving::write_trajectory::<B>(folder, stepper.x_out(), stepper.y_out())?;
    }

    Ok(ModePass {
        mode: B::MODE,
        derivative_timings,
        integration_timing,
        stats: SolverStats::from(stats),
    })
}

fn time_derivative<B: VectorMath>(
    model: &SpringPendulum<B>,
    t: f64,
    state: &PendulumState,
) -> f64 {
    let mut out = PendulumState::zeros();
    let started = Instant::now();
    model.derivative(t, black_box(state), &mut out);
    let elapsed = started.elapsed().as_secs_f64();
    black_box(out);
    elapsed
}
