use serde::Deserialize;

use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

use super::forces::ForceModel;
use super::state::State;

/// Fixed-step scheme used to advance a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Classical fourth-order Runge-Kutta.
    #[default]
    #[serde(alias = "rk4")]
    RungeKutta4,
    /// Velocity first, then position with the updated velocity.
    #[serde(alias = "euler")]
    SemiImplicitEuler,
}

impl IntegrationMethod {
    /// Advances `state` by `dt`. Depends only on its arguments.
    pub fn step(
        &self,
        state: &State,
        forces: &ForceModel,
        dt: f64,
    ) -> Result<State, SimulationError> {
        match self {
            IntegrationMethod::RungeKutta4 => rk4_step(state, forces, dt),
            IntegrationMethod::SemiImplicitEuler => semi_implicit_euler_step(state, forces, dt),
        }
    }
}

fn calculate_derivatives(
    state: (Vector2D, Vector2D),
    forces: &ForceModel,
) -> Result<(Vector2D, Vector2D), SimulationError> {
    let (position, velocity) = state;
    let acceleration = forces.calculate_acceleration(&State::from_vectors(position, velocity))?;
    Ok((velocity, acceleration))
}

fn rk4_step(state: &State, forces: &ForceModel, dt: f64) -> Result<State, SimulationError> {
    let initial_state = (state.position(), state.velocity());

    let k1 = calculate_derivatives(initial_state, forces)?;
    let k2 = calculate_derivatives(
        (
            initial_state.0 + k1.0 * (dt / 2.0),
            initial_state.1 + k1.1 * (dt / 2.0),
        ),
        forces,
    )?;
    let k3 = calculate_derivatives(
        (
            initial_state.0 + k2.0 * (dt / 2.0),
            initial_state.1 + k2.1 * (dt / 2.0),
        ),
        forces,
    )?;
    let k4 = calculate_derivatives(
        (initial_state.0 + k3.0 * dt, initial_state.1 + k3.1 * dt),
        forces,
    )?;

    let position = initial_state.0 + (dt / 6.0) * (k1.0 + 2.0 * k2.0 + 2.0 * k3.0 + k4.0);
    let velocity = initial_state.1 + (dt / 6.0) * (k1.1 + 2.0 * k2.1 + 2.0 * k3.1 + k4.1);

    Ok(State::from_vectors(position, velocity))
}

fn semi_implicit_euler_step(
    state: &State,
    forces: &ForceModel,
    dt: f64,
) -> Result<State, SimulationError> {
    let acceleration = forces.calculate_acceleration(state)?;
    let velocity = state.velocity() + acceleration * dt;
    let position = state.position() + velocity * dt;

    Ok(State::from_vectors(position, velocity))
}
