use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use spring_pendulum::{PendulumState, PhysicalConstants, TimeGrid};

/// Dense output samples across the grid unless overridden on the command
/// line. Stress runs can push this to ten million via `--samples`; the
/// dense output buffer costs about 40 bytes per sample.
pub const DEFAULT_SAMPLES: usize = 1_000_000;

/// End of the integration interval in seconds unless overridden.
pub const DEFAULT_T_FINAL: f64 = 10.0;

/// Everything one benchmark run needs. The physical constants and initial
/// state are baked in; the grid is tunable.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub constants: PhysicalConstants,
    pub initial_state: PendulumState,
    pub grid: TimeGrid,
    pub rel_tol: f64,
    pub abs_tol: f64,
    pub save_folder: Option<PathBuf>,
}

impl BenchConfig {
    /// Configuration with the default constants and the horizontal rest
    /// initial state `(pi/2, 0, M*g/k, 0)`.
    pub fn new(samples: usize, t_final: f64) -> Self {
        let constants = PhysicalConstants::default();
        Self {
            constants,
            initial_state: PendulumState::new(
                FRAC_PI_2,
                0.0,
                constants.static_extension(),
                0.0,
            ),
            grid: TimeGrid::new(0.0, t_final, samples),
            rel_tol: 1.0e-6,
            abs_tol: 1.0e-8,
            save_folder: None,
        }
    }

    /// Enables per-mode trajectory export into `folder`.
    pub fn with_save_folder(mut self, folder: PathBuf) -> Self {
        self.save_folder = Some(folder);
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES, DEFAULT_T_FINAL)
    }
}
