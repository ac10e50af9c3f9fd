//! Dynamics of a massive spring pendulum: a point mass attached to a rigid
//! pivot by an elastic arm whose own mass is not negligible.
//!
//! The crate provides the physical constants, the 4-component state, the
//! derivative model used as the integrator's callback, and the dense output
//! time grid.

pub mod grid;
pub mod model;

pub use grid::TimeGrid;
pub use model::{PendulumState, PhysicalConstants, SpringPendulum};
