//! Conversion between physical units (kg, m, s) and the normalized system
//! the integrator runs in.
//!
//! The normalized system fixes `G = 1` and picks three characteristic scales
//! from the problem itself:
//!
//! * mass: total system mass,
//! * length: one astronomical unit divided by the reference position, so that
//!   the dimensionless radius `reference_position` is exactly 1 AU,
//! * time: `sqrt(L³ / (G·M))`, the Keplerian time scale for those two.

use tracing::debug;

use crate::constants::{
    ASTRONOMICAL_UNIT, GRAVITATIONAL_CONSTANT, MAX_STEPS, MIN_CHARACTERISTIC_VELOCITY,
    MIN_MASS_UNIT, NORMALIZED_G, SECONDS_PER_DAY,
};
use crate::control::config::IntegrationSettings;
use crate::control::inputs::PhysicalInputs;
use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;

use super::state::State;

/// Characteristic scales: the physical quantities that map to `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    /// kg
    pub mass_unit: f64,
    /// m
    pub length_unit: f64,
    /// s
    pub time_unit: f64,
}

/// One trajectory sample in physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalSample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub vx_m_s: f64,
    pub vy_m_s: f64,
}

impl UnitSystem {
    pub fn derive(
        central_mass_kg: f64,
        orbiting_mass_kg: f64,
        reference_position: f64,
    ) -> Result<Self, SimulationError> {
        if !central_mass_kg.is_finite() || central_mass_kg <= 0.0 {
            return Err(SimulationError::invalid_input(
                "M",
                format!("central mass must be positive, got {central_mass_kg}"),
            ));
        }
        if !orbiting_mass_kg.is_finite() || orbiting_mass_kg < 0.0 {
            return Err(SimulationError::invalid_input(
                "m",
                format!("orbiting mass must be non-negative, got {orbiting_mass_kg}"),
            ));
        }
        if !reference_position.is_finite() || reference_position == 0.0 {
            return Err(SimulationError::invalid_input(
                "reference_position",
                format!("reference position must be finite and non-zero, got {reference_position}"),
            ));
        }

        let mass_unit = central_mass_kg + orbiting_mass_kg;
        if !mass_unit.is_finite() || mass_unit < MIN_MASS_UNIT {
            return Err(SimulationError::ScalingError(format!(
                "total mass {mass_unit:e} kg is too small to define a mass unit"
            )));
        }

        let length_unit = ASTRONOMICAL_UNIT / reference_position.abs();
        let time_unit = (length_unit.powi(3) / (GRAVITATIONAL_CONSTANT * mass_unit)).sqrt();
        let units = UnitSystem {
            mass_unit,
            length_unit,
            time_unit,
        };

        let velocity_unit = units.velocity_unit();
        if !velocity_unit.is_finite() || velocity_unit < MIN_CHARACTERISTIC_VELOCITY {
            return Err(SimulationError::ScalingError(format!(
                "characteristic velocity {velocity_unit:e} m/s is numerically zero"
            )));
        }

        debug!(
            mass_unit,
            length_unit,
            time_unit,
            velocity_unit,
            "derived unit system"
        );
        Ok(units)
    }

    /// m/s
    pub fn velocity_unit(&self) -> f64 {
        self.length_unit / self.time_unit
    }

    pub fn normalize_mass(&self, kg: f64) -> f64 {
        kg / self.mass_unit
    }

    pub fn denormalize_mass(&self, mass: f64) -> f64 {
        mass * self.mass_unit
    }

    pub fn normalize_length(&self, meters: f64) -> f64 {
        meters / self.length_unit
    }

    pub fn denormalize_length(&self, length: f64) -> f64 {
        length * self.length_unit
    }

    pub fn normalize_velocity(&self, m_s: f64) -> f64 {
        m_s / self.velocity_unit()
    }

    pub fn denormalize_velocity(&self, velocity: f64) -> f64 {
        velocity * self.velocity_unit()
    }

    pub fn normalize_duration_days(&self, days: f64) -> f64 {
        days * SECONDS_PER_DAY / self.time_unit
    }

    pub fn denormalize_duration_days(&self, duration: f64) -> f64 {
        duration * self.time_unit / SECONDS_PER_DAY
    }

    pub fn denormalize_time(&self, time: f64) -> f64 {
        time * self.time_unit
    }

    /// Builds the normalized parameters for `inputs`.
    ///
    /// The body starts at `(reference_position, 0)` moving along `+y` with the
    /// scaled `V0`. The step count is `floor(duration / dt)`, at least one.
    pub fn to_normalized(
        inputs: &PhysicalInputs,
        settings: &IntegrationSettings,
    ) -> Result<(UnitSystem, SimulationParameters), SimulationError> {
        if !settings.dt.is_finite() || settings.dt <= 0.0 {
            return Err(SimulationError::invalid_input(
                "dt",
                format!("time step must be positive and finite, got {}", settings.dt),
            ));
        }
        if !inputs.initial_speed_m_s.is_finite() {
            return Err(SimulationError::invalid_input(
                "V0",
                format!("initial speed must be finite, got {}", inputs.initial_speed_m_s),
            ));
        }
        if !inputs.duration_days.is_finite() || inputs.duration_days < 0.0 {
            return Err(SimulationError::invalid_input(
                "T",
                format!("duration must be non-negative, got {}", inputs.duration_days),
            ));
        }

        let units = UnitSystem::derive(
            inputs.central_mass_kg,
            inputs.orbiting_mass_kg,
            settings.reference_position,
        )?;

        let central_mass =
            units.normalize_mass(inputs.central_mass_kg + inputs.orbiting_mass_kg);
        let initial_speed = units.normalize_velocity(inputs.initial_speed_m_s);
        let duration = units.normalize_duration_days(inputs.duration_days);
        let steps = step_count(duration, settings.dt)?;

        let params = SimulationParameters {
            gravitational_constant: NORMALIZED_G,
            central_mass,
            drag_coefficient: inputs.drag_coefficient,
            thrust_coefficient: inputs.thrust_coefficient,
            dt: settings.dt,
            steps,
            initial_state: State::new(settings.reference_position, 0.0, 0.0, initial_speed),
            central_body_radius: settings.central_body_radius,
            method: settings.method,
            drag_law: settings.drag_law,
            separation_policy: settings.separation_policy(),
        };
        params.validate()?;

        debug!(
            m = central_mass,
            v0 = initial_speed,
            duration,
            steps,
            "normalized simulation parameters"
        );
        Ok((units, params))
    }

    /// Physical sample for `state`, the `index`-th sample of a run with step `dt`.
    pub fn from_normalized(&self, state: &State, index: usize, dt: f64) -> PhysicalSample {
        PhysicalSample {
            time_s: self.denormalize_time(index as f64 * dt),
            x_m: self.denormalize_length(state.x),
            y_m: self.denormalize_length(state.y),
            vx_m_s: self.denormalize_velocity(state.vx),
            vy_m_s: self.denormalize_velocity(state.vy),
        }
    }
}

fn step_count(duration: f64, dt: f64) -> Result<usize, SimulationError> {
    let raw = (duration / dt).floor();
    if !raw.is_finite() || raw > MAX_STEPS as f64 {
        return Err(SimulationError::ConfigurationError(format!(
            "duration {duration:e} at dt = {dt} needs more than {MAX_STEPS} steps"
        )));
    }
    Ok((raw as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_REFERENCE_POSITION, EARTH_ORBITAL_SPEED, SUN_MASS};
    use approx::assert_relative_eq;

    fn sun_units() -> UnitSystem {
        UnitSystem::derive(SUN_MASS, 0.0, DEFAULT_REFERENCE_POSITION).unwrap()
    }

    #[test]
    fn test_reference_position_is_one_au() {
        let units = sun_units();
        assert_relative_eq!(
            units.denormalize_length(DEFAULT_REFERENCE_POSITION),
            ASTRONOMICAL_UNIT,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_normalized_g_is_one() {
        // G_SI · mass_unit · T² / L³ must equal 1
        let units = sun_units();
        let g = GRAVITATIONAL_CONSTANT * units.mass_unit * units.time_unit.powi(2)
            / units.length_unit.powi(3);
        assert_relative_eq!(g, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_earth_speed_is_circular_in_normalized_units() {
        // Circular speed at r is sqrt(1/r) when G = M = 1.
        let units = sun_units();
        let v = units.normalize_velocity(EARTH_ORBITAL_SPEED);
        assert_relative_eq!(v, (1.0 / DEFAULT_REFERENCE_POSITION).sqrt(), max_relative = 2e-3);
    }

    #[test]
    fn test_to_normalized_builds_valid_parameters() {
        let inputs = PhysicalInputs::default();
        let settings = IntegrationSettings::default();
        let (units, params) = UnitSystem::to_normalized(&inputs, &settings).unwrap();

        assert_relative_eq!(params.central_mass, 1.0, epsilon = 1e-12);
        assert_eq!(params.gravitational_constant, 1.0);
        assert_eq!(params.initial_state.x, DEFAULT_REFERENCE_POSITION);
        assert_eq!(params.initial_state.y, 0.0);
        assert_eq!(params.initial_state.vx, 0.0);
        assert_relative_eq!(
            params.initial_state.vy,
            units.normalize_velocity(inputs.initial_speed_m_s),
            epsilon = 1e-15
        );

        let expected_steps =
            (units.normalize_duration_days(inputs.duration_days) / settings.dt).floor() as usize;
        assert_eq!(params.steps, expected_steps);
        assert!(params.steps > 1000);
    }

    #[test]
    fn test_zero_duration_clamps_to_one_step() {
        let inputs = PhysicalInputs {
            duration_days: 0.0,
            ..Default::default()
        };
        let (_, params) =
            UnitSystem::to_normalized(&inputs, &IntegrationSettings::default()).unwrap();
        assert_eq!(params.steps, 1);
    }

    #[test]
    fn test_non_positive_central_mass_rejected() {
        for mass in [0.0, -1.0e30, f64::NAN] {
            let inputs = PhysicalInputs {
                central_mass_kg: mass,
                ..Default::default()
            };
            match UnitSystem::to_normalized(&inputs, &IntegrationSettings::default()) {
                Err(SimulationError::InvalidInput { field, .. }) => assert_eq!(field, "M"),
                other => panic!("expected M to be rejected for {mass}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tiny_total_mass_is_a_scaling_error() {
        let result = UnitSystem::derive(1e-3, 0.0, DEFAULT_REFERENCE_POSITION);
        assert!(matches!(result, Err(SimulationError::ScalingError(_))));
    }

    #[test]
    fn test_zero_reference_position_rejected() {
        let settings = IntegrationSettings {
            reference_position: 0.0,
            ..Default::default()
        };
        let result = UnitSystem::to_normalized(&PhysicalInputs::default(), &settings);
        assert!(matches!(result, Err(SimulationError::InvalidInput { .. })));
    }

    #[test]
    fn test_bad_dt_rejected() {
        for dt in [0.0, -0.5] {
            let settings = IntegrationSettings {
                dt,
                ..Default::default()
            };
            let result = UnitSystem::to_normalized(&PhysicalInputs::default(), &settings);
            assert!(matches!(result, Err(SimulationError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_excessive_step_count_rejected() {
        let settings = IntegrationSettings {
            dt: 1e-12,
            ..Default::default()
        };
        let result = UnitSystem::to_normalized(&PhysicalInputs::default(), &settings);
        assert!(matches!(result, Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_normalized_sample_time() {
        let units = sun_units();
        let state = State::new(1.5, 0.0, 0.0, 0.8);
        let sample = units.from_normalized(&state, 10, 0.01);
        assert_relative_eq!(sample.time_s, 0.1 * units.time_unit, max_relative = 1e-12);
        assert_relative_eq!(sample.x_m, ASTRONOMICAL_UNIT, max_relative = 1e-12);
        assert_relative_eq!(sample.vy_m_s, 0.8 * units.velocity_unit(), max_relative = 1e-12);
    }
}
