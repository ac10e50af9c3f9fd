use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// Errors that abort a benchmark run. None of them is retried; a failed
/// measurement reports no partial result.
#[derive(Debug, Error)]
pub enum BenchmarkErrors {
    /// The external integrator failed to produce a trajectory.
    #[error("integration failed: {0}")]
    Integration(#[from] IntegrationError),
    /// Writing the trajectory export failed.
    #[error("trajectory export failed: {0}")]
    Export(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
