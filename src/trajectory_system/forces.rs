use serde::Deserialize;

use crate::constants::{DEFAULT_MIN_SEPARATION, MIN_DIRECTION_SPEED};
use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

use super::state::State;

/// Velocity dependence of the drag acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragLaw {
    /// `a = -k·v`
    #[default]
    Linear,
    /// `a = -k·|v|·v`
    Quadratic,
}

/// What to do when the body gets closer to the origin than `min_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeparationPolicy {
    /// Fail the evaluation; the driver reports the step.
    Abort { min_radius: f64 },
    /// Evaluate gravity as if the separation were `min_radius`.
    Clamp { min_radius: f64 },
}

impl Default for SeparationPolicy {
    fn default() -> Self {
        SeparationPolicy::Abort {
            min_radius: DEFAULT_MIN_SEPARATION,
        }
    }
}

impl SeparationPolicy {
    pub fn min_radius(&self) -> f64 {
        match *self {
            SeparationPolicy::Abort { min_radius } | SeparationPolicy::Clamp { min_radius } => {
                min_radius
            }
        }
    }
}

/// Gravity toward the origin plus drag and prograde thrust, all per unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub gravitational_parameter: f64,
    pub drag_coefficient: f64,
    pub thrust_coefficient: f64,
    pub drag_law: DragLaw,
    pub separation_policy: SeparationPolicy,
}

impl ForceModel {
    pub fn new(
        gravitational_parameter: f64,
        drag_coefficient: f64,
        thrust_coefficient: f64,
    ) -> Self {
        ForceModel {
            gravitational_parameter,
            drag_coefficient,
            thrust_coefficient,
            drag_law: DragLaw::default(),
            separation_policy: SeparationPolicy::default(),
        }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Self {
        ForceModel {
            gravitational_parameter: params.gravitational_parameter(),
            drag_coefficient: params.drag_coefficient,
            thrust_coefficient: params.thrust_coefficient,
            drag_law: params.drag_law,
            separation_policy: params.separation_policy,
        }
    }

    pub fn calculate_acceleration(&self, state: &State) -> Result<Vector2D, SimulationError> {
        let velocity = state.velocity();
        let gravity = self.calculate_gravity(state.position())?;
        let drag = self.calculate_drag(velocity);
        let thrust = self.calculate_thrust(velocity);

        Ok(gravity + drag + thrust)
    }

    pub fn calculate_gravity(&self, position: Vector2D) -> Result<Vector2D, SimulationError> {
        let radius = position.magnitude();
        let effective_radius = match self.separation_policy {
            SeparationPolicy::Abort { min_radius } => {
                if radius.is_nan() || radius < min_radius {
                    return Err(SimulationError::DegenerateSeparation { radius, min_radius });
                }
                radius
            }
            SeparationPolicy::Clamp { min_radius } => radius.max(min_radius),
        };

        // At exactly r = 0 a clamped magnitude still has no direction.
        let radial = match position.direction(0.0) {
            Some(unit) => unit,
            None => return Ok(Vector2D::ZERO),
        };

        Ok(-radial * (self.gravitational_parameter / effective_radius.powi(2)))
    }

    pub fn calculate_drag(&self, velocity: Vector2D) -> Vector2D {
        match self.drag_law {
            DragLaw::Linear => -velocity * self.drag_coefficient,
            DragLaw::Quadratic => -velocity * (self.drag_coefficient * velocity.magnitude()),
        }
    }

    pub fn calculate_thrust(&self, velocity: Vector2D) -> Vector2D {
        match velocity.direction(MIN_DIRECTION_SPEED) {
            Some(prograde) => prograde * self.thrust_coefficient,
            None => Vector2D::ZERO,
        }
    }
}
