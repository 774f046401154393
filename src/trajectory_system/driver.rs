use tracing::{debug, warn};

use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;

use super::forces::ForceModel;
use super::state::State;

/// Integrates `params.steps` fixed steps from `params.initial_state`.
///
/// Returns `steps + 1` states, the initial one included. Parameters are
/// validated first; a degenerate separation or a non-finite state aborts the
/// run with the index of the step that hit it.
pub fn run_simulation(params: &SimulationParameters) -> Result<Vec<State>, SimulationError> {
    params.validate()?;

    let forces = ForceModel::from_parameters(params);
    debug!(
        steps = params.steps,
        dt = params.dt,
        method = ?params.method,
        mu = forces.gravitational_parameter,
        k = forces.drag_coefficient,
        f = forces.thrust_coefficient,
        "starting simulation"
    );

    let mut trajectory = Vec::with_capacity(params.steps + 1);
    let mut state = params.initial_state;
    trajectory.push(state);

    for step in 1..=params.steps {
        state = params
            .method
            .step(&state, &forces, params.dt)
            .and_then(|next| {
                if next.is_finite() {
                    Ok(next)
                } else {
                    Err(SimulationError::NonFiniteState(format!("{next:?}")))
                }
            })
            .map_err(|source| {
                warn!(step, error = %source, "simulation aborted");
                SimulationError::Aborted {
                    step,
                    source: Box::new(source),
                }
            })?;
        trajectory.push(state);
    }

    debug!(samples = trajectory.len(), final_state = ?state, "simulation finished");
    Ok(trajectory)
}
