use std::fs;
use std::path::Path;

use serde::Serialize;
use spring_pendulum::PendulumState;
use vector_math::VectorMath;

use crate::errors::BenchmarkErrors;

/// One exported sample of the integrated trajectory.
#[derive(Serialize)]
struct TrajectoryRow {
    time: f64,
    theta: f64,
    theta_dot: f64,
    extension: f64,
    extension_rate: f64,
}

/// Writes the trajectory of one pass to `<folder>/trajectory_<mode>.csv`,
/// creating the folder if needed.
pub fn write_trajectory<B: VectorMath>(
    folder: &Path,
    times: &[f64],
    states: &[PendulumState],
) -> Result<(), BenchmarkErrors> {
    fs::create_dir_all(folder)?;
    let path = folder.join(format!("trajectory_{}.csv", B::MODE));
    let mut writer = csv::Writer::from_path(path)?;
    for (t, y) in times.iter().zip(states) {
        writer.serialize(TrajectoryRow {
            time: *t,
            theta: y[0],
            theta_dot: y[1],
            extension: y[2],
            extension_rate: y[3],
        })?;
    }
    writer.flush()?;
    Ok(())
}
