pub mod telemetry;
pub mod trajectory_file;
