pub mod driver;
pub mod forces;
pub mod integrator;
pub mod scaling;
pub mod state;
