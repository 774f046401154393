use tracing::info;

use crate::constants::SECONDS_PER_DAY;
use crate::trajectory_system::scaling::{PhysicalSample, UnitSystem};
use crate::trajectory_system::state::State;

/// Aggregate figures of one trajectory, in normalized units.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySummary {
    pub samples: usize,
    pub elapsed_time: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
}

impl TrajectorySummary {
    /// `None` for an empty trajectory.
    pub fn from_trajectory(trajectory: &[State], mu: f64, dt: f64) -> Option<Self> {
        let first = trajectory.first()?;
        let last = trajectory.last()?;

        let mut max_speed: f64 = 0.0;
        let mut min_radius = f64::INFINITY;
        let mut max_radius: f64 = 0.0;
        for state in trajectory {
            max_speed = max_speed.max(state.speed());
            min_radius = min_radius.min(state.radius());
            max_radius = max_radius.max(state.radius());
        }

        Some(TrajectorySummary {
            samples: trajectory.len(),
            elapsed_time: (trajectory.len() - 1) as f64 * dt,
            max_speed,
            min_radius,
            max_radius,
            initial_energy: first.specific_energy(mu),
            final_energy: last.specific_energy(mu),
        })
    }

    /// `|E_final − E_initial| / |E_initial|`, or the absolute change when `E_initial` is zero.
    pub fn relative_energy_drift(&self) -> f64 {
        let change = (self.final_energy - self.initial_energy).abs();
        if self.initial_energy == 0.0 {
            change
        } else {
            change / self.initial_energy.abs()
        }
    }
}

/// One row of the coordinates/velocities table: `h (s), x, y, Vx, Vy`.
pub type TableRow = PhysicalSample;

/// Turns normalized trajectories into what a person reads: physical table
/// rows and a logged summary.
pub struct Telemetry {
    units: UnitSystem,
    dt: f64,
}

impl Telemetry {
    pub fn new(units: UnitSystem, dt: f64) -> Self {
        Telemetry { units, dt }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= SECONDS_PER_DAY {
            format!("{:.2} days", elapsed_time / SECONDS_PER_DAY)
        } else if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            format!("{:.0}h {:.0}m", hours, minutes)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    /// Up to `max_rows` evenly spaced samples, first and last included.
    pub fn table_rows(&self, trajectory: &[State], max_rows: usize) -> Vec<TableRow> {
        sample_indices(trajectory.len(), max_rows)
            .into_iter()
            .map(|index| {
                self.units
                    .from_normalized(&trajectory[index], index, self.dt)
            })
            .collect()
    }

    pub fn render_table(rows: &[TableRow]) -> String {
        if rows.is_empty() {
            return "No data to display\n".to_string();
        }

        let mut table = format!(
            "{:>16} {:>20} {:>20} {:>14} {:>14}\n",
            "h, s", "x, m", "y, m", "Vx, m/s", "Vy, m/s"
        );
        for row in rows {
            table.push_str(&format!(
                "{:>16.2} {:>20.2} {:>20.2} {:>14.2} {:>14.2}\n",
                row.time_s, row.x_m, row.y_m, row.vx_m_s, row.vy_m_s
            ));
        }
        table
    }

    pub fn display_summary(&self, summary: &TrajectorySummary) {
        info!(
            samples = summary.samples,
            elapsed = %Self::format_time(self.units.denormalize_time(summary.elapsed_time)),
            "trajectory computed"
        );
        info!(
            min_radius_m = self.units.denormalize_length(summary.min_radius),
            max_radius_m = self.units.denormalize_length(summary.max_radius),
            max_speed_m_s = self.units.denormalize_velocity(summary.max_speed),
            "extremes"
        );
        info!(
            initial_energy = summary.initial_energy,
            final_energy = summary.final_energy,
            relative_drift = summary.relative_energy_drift(),
            "specific energy (normalized)"
        );
    }
}

fn sample_indices(len: usize, max_rows: usize) -> Vec<usize> {
    if len == 0 || max_rows == 0 {
        return Vec::new();
    }
    if len <= max_rows {
        return (0..len).collect();
    }
    if max_rows == 1 {
        return vec![0];
    }

    let last = len - 1;
    let intervals = max_rows - 1;
    let mut indices: Vec<usize> = (0..max_rows)
        .map(|i| (i * last + intervals / 2) / intervals)
        .collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ASTRONOMICAL_UNIT, SUN_MASS};
    use approx::assert_relative_eq;

    fn line(n: usize) -> Vec<State> {
        (0..n)
            .map(|i| State::new(1.5 + i as f64, 0.0, 0.0, 1.0))
            .collect()
    }

    #[test]
    fn test_sample_indices_include_endpoints() {
        let indices = sample_indices(1001, 11);
        assert_eq!(indices.len(), 11);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&1000));
        assert_eq!(indices[5], 500);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_indices_small_inputs() {
        assert!(sample_indices(0, 10).is_empty());
        assert!(sample_indices(10, 0).is_empty());
        assert_eq!(sample_indices(3, 10), vec![0, 1, 2]);
        assert_eq!(sample_indices(10, 1), vec![0]);
        assert_eq!(sample_indices(10, 2), vec![0, 9]);
    }

    #[test]
    fn test_table_rows_are_physical() {
        let units = UnitSystem::derive(SUN_MASS, 0.0, 1.5).unwrap();
        let telemetry = Telemetry::new(units, 0.01);
        let rows = telemetry.table_rows(&line(100), 4);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].time_s, 0.0);
        assert_relative_eq!(rows[0].x_m, ASTRONOMICAL_UNIT, max_relative = 1e-12);
        assert_relative_eq!(rows[3].time_s, 99.0 * 0.01 * units.time_unit, max_relative = 1e-12);
    }

    #[test]
    fn test_render_table() {
        assert_eq!(Telemetry::render_table(&[]), "No data to display\n");

        let rendered = Telemetry::render_table(&[PhysicalSample {
            time_s: 1.0,
            x_m: 2.0,
            y_m: 3.0,
            vx_m_s: 4.0,
            vy_m_s: 5.0,
        }]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Vx, m/s"));
        assert!(lines[1].trim_start().starts_with("1.00"));
        assert!(lines[1].trim_end().ends_with("5.00"));
    }

    #[test]
    fn test_summary() {
        let trajectory = line(5);
        let summary = TrajectorySummary::from_trajectory(&trajectory, 1.0, 0.5).unwrap();
        assert_eq!(summary.samples, 5);
        assert_eq!(summary.elapsed_time, 2.0);
        assert_eq!(summary.min_radius, 1.5);
        assert_eq!(summary.max_radius, 5.5);
        assert_eq!(summary.max_speed, 1.0);
        assert_relative_eq!(summary.initial_energy, 0.5 - 1.0 / 1.5, epsilon = 1e-12);

        assert!(TrajectorySummary::from_trajectory(&[], 1.0, 0.5).is_none());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(Telemetry::format_time(12.5), "12.50s");
        assert_eq!(Telemetry::format_time(3_720.0), "1h 2m");
        assert_eq!(Telemetry::format_time(2.0 * SECONDS_PER_DAY), "2.00 days");
    }
}
