use serde::Deserialize;

use crate::constants::{DAYS_PER_YEAR, EARTH_MASS, EARTH_ORBITAL_SPEED, SUN_MASS};
use crate::errors::SimulationError;

/// Physical quantities as a user enters them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicalInputs {
    /// Orbiting body mass `m`, kg.
    pub orbiting_mass_kg: f64,
    /// Central body mass `M`, kg.
    pub central_mass_kg: f64,
    /// Initial tangential speed `V0`, m/s.
    pub initial_speed_m_s: f64,
    /// Simulated span `T`, days.
    pub duration_days: f64,
    /// Dimensionless drag coefficient `k`.
    pub drag_coefficient: f64,
    /// Dimensionless thrust coefficient `F`.
    pub thrust_coefficient: f64,
}

impl Default for PhysicalInputs {
    /// Earth around the Sun for one year, unperturbed.
    fn default() -> Self {
        PhysicalInputs {
            orbiting_mass_kg: EARTH_MASS,
            central_mass_kg: SUN_MASS,
            initial_speed_m_s: EARTH_ORBITAL_SPEED,
            duration_days: DAYS_PER_YEAR,
            drag_coefficient: 0.0,
            thrust_coefficient: 0.0,
        }
    }
}

/// Raw text of the six input fields.
#[derive(Debug, Clone, Default)]
pub struct InputFields<'a> {
    pub orbiting_mass: &'a str,
    pub central_mass: &'a str,
    pub initial_speed: &'a str,
    pub duration_days: &'a str,
    pub drag_coefficient: &'a str,
    pub thrust_coefficient: &'a str,
}

impl PhysicalInputs {
    pub fn from_fields(fields: &InputFields<'_>) -> Result<Self, SimulationError> {
        Ok(PhysicalInputs {
            orbiting_mass_kg: parse_field("m", fields.orbiting_mass)?,
            central_mass_kg: parse_field("M", fields.central_mass)?,
            initial_speed_m_s: parse_field("V0", fields.initial_speed)?,
            duration_days: parse_field("T", fields.duration_days)?,
            drag_coefficient: parse_field("k", fields.drag_coefficient)?,
            thrust_coefficient: parse_field("F", fields.thrust_coefficient)?,
        })
    }
}

/// Parses one numeric field. Surrounding whitespace is ignored and a decimal
/// comma is accepted.
pub fn parse_field(field: &str, text: &str) -> Result<f64, SimulationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SimulationError::invalid_input(field, "value is empty"));
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| SimulationError::invalid_input(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(SimulationError::invalid_input(
            field,
            format!("'{trimmed}' is not a finite number"),
        ));
    }
    Ok(value)
}
