pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::config::{load_config, IntegrationSettings, OutputSettings, SimulationConfig};
pub use control::inputs::{parse_field, InputFields, PhysicalInputs};
pub use control::parameters::SimulationParameters;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::driver::run_simulation;
pub use trajectory_system::forces::{DragLaw, ForceModel, SeparationPolicy};
pub use trajectory_system::integrator::IntegrationMethod;
pub use trajectory_system::scaling::{PhysicalSample, UnitSystem};
pub use trajectory_system::state::State;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{TableRow, Telemetry, TrajectorySummary};
pub use telemetry_system::trajectory_file::{load_trajectory, save_trajectory};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
