use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Scaling error: {0}")]
    ScalingError(String),

    #[error("Degenerate separation r = {radius:e} (minimum {min_radius:e})")]
    DegenerateSeparation { radius: f64, min_radius: f64 },

    #[error("Integration produced a non-finite state {0}")]
    NonFiniteState(String),

    #[error("Simulation aborted at step {step}: {source}")]
    Aborted {
        step: usize,
        #[source]
        source: Box<SimulationError>,
    },

    #[error("Trajectory file error: {0}")]
    TrajectoryFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SimulationError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
