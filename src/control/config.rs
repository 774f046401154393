//! File-based run configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    DEFAULT_CENTRAL_BODY_RADIUS, DEFAULT_MIN_SEPARATION, DEFAULT_REFERENCE_POSITION,
    DEFAULT_TABLE_ROWS, DEFAULT_TIME_STEP,
};
use crate::errors::SimulationError;
use crate::trajectory_system::forces::{DragLaw, SeparationPolicy};
use crate::trajectory_system::integrator::IntegrationMethod;

use super::inputs::PhysicalInputs;

/// Top-level TOML document. Every table and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub inputs: PhysicalInputs,
    pub integration: IntegrationSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationMode {
    #[default]
    Abort,
    Clamp,
}

/// Normalized-unit knobs that are not physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    pub dt: f64,
    /// Dimensionless radius that corresponds to one astronomical unit.
    pub reference_position: f64,
    pub method: IntegrationMethod,
    pub drag_law: DragLaw,
    pub separation_policy: SeparationMode,
    pub min_separation: f64,
    pub central_body_radius: f64,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        IntegrationSettings {
            dt: DEFAULT_TIME_STEP,
            reference_position: DEFAULT_REFERENCE_POSITION,
            method: IntegrationMethod::default(),
            drag_law: DragLaw::default(),
            separation_policy: SeparationMode::default(),
            min_separation: DEFAULT_MIN_SEPARATION,
            central_body_radius: DEFAULT_CENTRAL_BODY_RADIUS,
        }
    }
}

impl IntegrationSettings {
    pub fn separation_policy(&self) -> SeparationPolicy {
        let min_radius = self.min_separation;
        match self.separation_policy {
            SeparationMode::Abort => SeparationPolicy::Abort { min_radius },
            SeparationMode::Clamp => SeparationPolicy::Clamp { min_radius },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub trajectory_file: Option<PathBuf>,
    pub table_rows: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            trajectory_file: None,
            table_rows: DEFAULT_TABLE_ROWS,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, SimulationError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<SimulationConfig, SimulationError> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.inputs, PhysicalInputs::default());
        assert_eq!(config.integration, IntegrationSettings::default());
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [inputs]
            central_mass_kg = 5.972e24
            drag_coefficient = 0.01

            [integration]
            dt = 0.005
            method = "euler"
            drag_law = "quadratic"
            separation_policy = "clamp"
            min_separation = 0.001

            [output]
            trajectory_file = "orbit.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.inputs.central_mass_kg, 5.972e24);
        assert_eq!(config.inputs.drag_coefficient, 0.01);
        assert_eq!(
            config.inputs.initial_speed_m_s,
            PhysicalInputs::default().initial_speed_m_s
        );
        assert_eq!(config.integration.dt, 0.005);
        assert_eq!(config.integration.method, IntegrationMethod::SemiImplicitEuler);
        assert_eq!(config.integration.drag_law, DragLaw::Quadratic);
        assert_eq!(
            config.integration.separation_policy(),
            SeparationPolicy::Clamp { min_radius: 0.001 }
        );
        assert_eq!(
            config.output.trajectory_file,
            Some(PathBuf::from("orbit.txt"))
        );
        assert_eq!(config.output.table_rows, DEFAULT_TABLE_ROWS);
    }

    #[test]
    fn test_bad_config_is_a_parse_error() {
        let result = parse_config("[integration]\ndt = \"fast\"\n");
        assert!(matches!(result, Err(SimulationError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/definitely/not/here.toml");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }
}
