// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const ASTRONOMICAL_UNIT: f64 = 1.495_978_707e11; // meters
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// Central body presets
pub const SUN_MASS: f64 = 1.989e30; // kg
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_ORBITAL_SPEED: f64 = 29_780.0; // m/s
pub const DAYS_PER_YEAR: f64 = 365.25;

// Normalized Units
pub const NORMALIZED_G: f64 = 1.0;
pub const DEFAULT_REFERENCE_POSITION: f64 = 1.5; // dimensionless radius mapped to 1 AU
pub const DEFAULT_CENTRAL_BODY_RADIUS: f64 = 0.05; // dimensionless, display only

// Simulation Parameters
pub const DEFAULT_TIME_STEP: f64 = 0.01; // dimensionless
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-9; // dimensionless
pub const MIN_DIRECTION_SPEED: f64 = 1e-12; // below this velocity has no direction

// Scaling Guards
pub const MIN_MASS_UNIT: f64 = 1.0; // kg
pub const MIN_CHARACTERISTIC_VELOCITY: f64 = 1e-12; // m/s
pub const MAX_STEPS: usize = 50_000_000; // caps the trajectory buffer

// Output
pub const TRAJECTORY_FILE_PRECISION: usize = 10;
pub const DEFAULT_TABLE_ROWS: usize = 25;
