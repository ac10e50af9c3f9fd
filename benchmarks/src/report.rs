use std::fmt;

use ode_solvers::dop_shared::Stats;
use vector_math::BackendMode;

/// Step statistics reported by the integrator for one pass.
#[derive(Clone, Copy, Debug)]
pub struct SolverStats {
    pub function_evaluations: u32,
    pub accepted_steps: u32,
    pub rejected_steps: u32,
}

impl From<Stats> for SolverStats {
    fn from(stats: Stats) -> Self {
        Self {
            function_evaluations: stats.num_eval,
            accepted_steps: stats.accepted_steps,
            rejected_steps: stats.rejected_steps,
        }
    }
}

/// Timings gathered for one backend mode.
#[derive(Clone, Copy, Debug)]
pub struct ModePass {
    pub mode: BackendMode,
    /// Two isolated single-call timings in seconds, in measurement order.
    pub derivative_timings: [f64; 2],
    /// Wall-clock seconds for the full integration across the grid.
    pub integration_timing: f64,
    pub stats: SolverStats,
}

impl fmt::Display for ModePass {
    /// Renders one labeled report section: the two single-call timings, the
    /// integration timing, and the solver statistics, in seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "backend = {}", self.mode)?;
        writeln!(
            f,
            "derivatives: {:.6}, {:.6}",
            self.derivative_timings[0], self.derivative_timings[1]
        )?;
        writeln!(f, "integration: {:.6}", self.integration_timing)?;
        writeln!(
            f,
            "function evaluations: {}, accepted steps: {}, rejected steps: {}",
            self.stats.function_evaluations,
            self.stats.accepted_steps,
            self.stats.rejected_steps
        )
    }
}

/// The complete benchmark result, one pass per mode.
#[derive(Clone, Debug)]
pub struct BenchReport {
    pub passes: Vec<ModePass>,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pass) in self.passes.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---")?;
            }
            write!(f, "{pass}")?;
        }
        Ok(())
    }
}
