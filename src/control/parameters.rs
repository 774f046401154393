use crate::constants::{DEFAULT_CENTRAL_BODY_RADIUS, DEFAULT_TIME_STEP, MAX_STEPS, NORMALIZED_G};
use crate::errors::SimulationError;
use crate::trajectory_system::forces::{DragLaw, SeparationPolicy};
use crate::trajectory_system::integrator::IntegrationMethod;
use crate::trajectory_system::state::State;

/// Everything the driver needs to produce one trajectory, in normalized units.
///
/// `initial_state.x` doubles as the reference length used by the unit scaling,
/// so it must be non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub gravitational_constant: f64,
    pub central_mass: f64,
    pub drag_coefficient: f64,
    pub thrust_coefficient: f64,
    pub dt: f64,
    pub steps: usize,
    pub initial_state: State,
    pub central_body_radius: f64,
    pub method: IntegrationMethod,
    pub drag_law: DragLaw,
    pub separation_policy: SeparationPolicy,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            gravitational_constant: NORMALIZED_G,
            central_mass: 1.0,
            drag_coefficient: 0.0,
            thrust_coefficient: 0.0,
            dt: DEFAULT_TIME_STEP,
            steps: 100,
            initial_state: State::new(1.5, 0.0, 0.0, 1.0),
            central_body_radius: DEFAULT_CENTRAL_BODY_RADIUS,
            method: IntegrationMethod::default(),
            drag_law: DragLaw::default(),
            separation_policy: SeparationPolicy::default(),
        }
    }
}

impl SimulationParameters {
    /// `G·M`, the only combination of the two the force law depends on.
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_constant * self.central_mass
    }

    /// Normalized time of sample `index`.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// Rejects any combination the engine cannot integrate meaningfully.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::invalid_input(
                "dt",
                format!("time step must be positive and finite, got {}", self.dt),
            ));
        }
        if self.steps > MAX_STEPS {
            return Err(SimulationError::invalid_input(
                "steps",
                format!("at most {MAX_STEPS} steps are supported, got {}", self.steps),
            ));
        }
        if !self.initial_state.is_finite() {
            return Err(SimulationError::invalid_input(
                "initial_state",
                format!("initial state must be finite, got {:?}", self.initial_state),
            ));
        }
        if self.initial_state.x == 0.0 {
            return Err(SimulationError::invalid_input(
                "initial_state.x",
                "reference position must be non-zero",
            ));
        }
        if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
            return Err(SimulationError::invalid_input(
                "gravitational_constant",
                format!("must be finite and non-negative, got {}", self.gravitational_constant),
            ));
        }
        if !self.central_mass.is_finite() || self.central_mass < 0.0 {
            return Err(SimulationError::invalid_input(
                "central_mass",
                format!("must be finite and non-negative, got {}", self.central_mass),
            ));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(SimulationError::invalid_input(
                "drag_coefficient",
                format!("must be finite and non-negative, got {}", self.drag_coefficient),
            ));
        }
        if !self.thrust_coefficient.is_finite() {
            return Err(SimulationError::invalid_input(
                "thrust_coefficient",
                format!("must be finite, got {}", self.thrust_coefficient),
            ));
        }
        if !self.central_body_radius.is_finite() || self.central_body_radius < 0.0 {
            return Err(SimulationError::invalid_input(
                "central_body_radius",
                format!("must be finite and non-negative, got {}", self.central_body_radius),
            ));
        }
        let min_radius = self.separation_policy.min_radius();
        if !min_radius.is_finite() || min_radius <= 0.0 {
            return Err(SimulationError::invalid_input(
                "min_separation",
                format!("must be positive and finite, got {}", min_radius),
            ));
        }
        Ok(())
    }
}
