use serde::{Deserialize, Serialize};

/// Dense output grid for the integrator: `samples` evaluation times evenly
/// spaced over `[start, end]`.
///
/// Fixed at configuration time. A grid with fewer than two samples has a
/// non-finite step; the grid performs no validation and lets the numeric
/// result speak for itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    samples: usize,
}

impl TimeGrid {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Spacing between consecutive grid points.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / self.samples.saturating_sub(1) as f64
    }

    /// The grid times in increasing order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        (0..self.samples).map(move |i| self.start + i as f64 * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn times_are_monotonically_increasing() {
        let grid = TimeGrid::new(0.0, 10.0, 1001);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times.len(), 1001);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn endpoints_match_configuration() {
        let grid = TimeGrid::new(0.0, 10.0, 101);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times[0], 0.0);
        assert_abs_diff_eq!(times[100], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grid.step(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_grid_has_non_finite_step() {
        assert!(!TimeGrid::new(0.0, 1.0, 1).step().is_finite());
        assert!(!TimeGrid::new(0.0, 1.0, 0).step().is_finite());
    }
}
