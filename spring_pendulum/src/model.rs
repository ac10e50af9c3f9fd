use ode_solvers::{System, Vector4};
use serde::{Deserialize, Serialize};
use vector_math::VectorMath;

/// State of the pendulum, ordered `(theta, theta_dot, x, x_dot)`: angular
/// position, angular velocity, radial extension, radial velocity.
pub type PendulumState = Vector4<f64>;

/// Physical constants of the pendulum. Fixed at process start and shared
/// read-only by the model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Mass of the spring in kg.
    pub spring_mass: f64,
    /// Spring constant in N/m.
    pub stiffness: f64,
    /// Rest length of the spring in m.
    pub rest_length: f64,
    /// Mass of the attachment in kg.
    pub attached_mass: f64,
    /// Gravitational acceleration in m/s^2.
    pub gravity: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            spring_mass: 1.0,
            stiffness: 1.0e3,
            rest_length: 3.0e-2,
            attached_mass: 1.0,
            gravity: 9.8,
        }
    }
}

impl PhysicalConstants {
    /// Static stretch of the spring under the attached mass's weight,
    /// `M*g/k`. The radial component of the default initial state.
    pub fn static_extension(&self) -> f64 {
        self.attached_mass * self.gravity / self.stiffness
    }
}

/// Equations of motion of a massive spring pendulum.
///
/// The model is a pure derivative function of `(state, time)`. The system is
/// autonomous, so time never influences the result, but the signature accepts
/// it for the integrator calling convention. All per-call arithmetic routes
/// through the [`VectorMath`] backend chosen at construction, which fixes the
/// evaluation strategy for the lifetime of the value.
#[derive(Clone, Copy, Debug)]
pub struct SpringPendulum<B> {
    constants: PhysicalConstants,
    math: B,
    /// `g*(m/2 + M)/(m/3 + M)`, the gravity term of both accelerations.
    grav_ratio: f64,
    /// `k/(m/3 + M)`, the restoring acceleration per unit extension.
    spring_accel: f64,
}

impl<B: VectorMath> SpringPendulum<B> {
    pub fn new(constants: PhysicalConstants, math: B) -> Self {
        let effective_mass = constants.spring_mass / 3.0 + constants.attached_mass;
        let grav_ratio = constants.gravity
            * (constants.spring_mass / 2.0 + constants.attached_mass)
            / effective_mass;
        let spring_accel = constants.stiffness / effective_mass;
        Self {
            constants,
            math,
            grav_ratio,
            spring_accel,
        }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Writes the time derivative of `state` into `out`.
    ///
    /// When the effective arm length `l + x` vanishes the angular
    /// acceleration divides by zero; the non-finite result is surfaced
    /// unmodified.
    pub fn derivative(&self, _t: f64, state: &PendulumState, out: &mut PendulumState) {
        let m = &self.math;
        let (theta, theta_dot, x, x_dot) = (state[0], state[1], state[2], state[3]);

        let eff_len = m.add(self.constants.rest_length, x);

        out[0] = theta_dot;
        out[1] = m.neg(m.div(
            m.add(
                m.mul(2.0, m.mul(theta_dot, x_dot)),
                m.mul(self.grav_ratio, m.sin(theta)),
            ),
            eff_len,
        ));
        out[2] = x_dot;
        out[3] = m.sub(
            m.add(
                m.mul(eff_len, m.powi(theta_dot, 2)),
                m.mul(self.grav_ratio, m.cos(theta)),
            ),
            m.mul(self.spring_accel, x),
        );
    }
}

impl<B: VectorMath> System<f64, PendulumState> for SpringPendulum<B> {
    fn system(&self, t: f64, y: &PendulumState, dy: &mut PendulumState) {
        self.derivative(t, y, dy);
    }
}
