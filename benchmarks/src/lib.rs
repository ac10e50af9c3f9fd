//! Timing harness for the spring pendulum backend comparison.
//!
//! For each backend mode the harness measures the wall-clock cost of two
//! isolated derivative calls (warm-up effects stay visible) and of one full
//! integration across the dense output grid, then renders one labeled report
//! section per mode.

pub mod config;
pub mod errors;
pub mod harness;
pub mod report;
pub mod saving;

pub use config::BenchConfig;
pub use errors::BenchmarkErrors;
pub use harness::{run, run_pass};
pub use report::{BenchReport, ModePass, SolverStats};
