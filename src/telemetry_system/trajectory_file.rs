//! Plain-text trajectory dump: one `x y` pair per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::constants::TRAJECTORY_FILE_PRECISION;
use crate::errors::SimulationError;
use crate::trajectory_system::state::State;

pub fn save_trajectory<P: AsRef<Path>>(
    trajectory: &[State],
    path: P,
) -> Result<(), SimulationError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_trajectory(trajectory, &mut writer)?;
    writer.flush()?;

    info!(points = trajectory.len(), path = %path.display(), "trajectory written");
    Ok(())
}

pub fn write_trajectory<W: Write>(trajectory: &[State], writer: &mut W) -> std::io::Result<()> {
    for state in trajectory {
        writeln!(
            writer,
            "{:.prec$} {:.prec$}",
            state.x,
            state.y,
            prec = TRAJECTORY_FILE_PRECISION
        )?;
    }
    Ok(())
}

/// Reads the points back. Malformed lines are skipped with a warning; a file
/// with no usable line is an error.
pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>, SimulationError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SimulationError::TrajectoryFile(format!("cannot open {}: {e}", path.display()))
    })?;
    let points = read_trajectory(BufReader::new(file))?;
    if points.is_empty() {
        return Err(SimulationError::TrajectoryFile(format!(
            "{} is empty or contains no valid points",
            path.display()
        )));
    }
    Ok(points)
}

/// Bytes that are not UTF-8 make their line malformed, not the whole read.
pub fn read_trajectory<R: BufRead>(mut reader: R) -> Result<Vec<(f64, f64)>, SimulationError> {
    let mut points = Vec::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buffer);
        match parse_point(&line) {
            Some(point) => points.push(point),
            None => warn!(
                line_number,
                content = %line.trim_end(),
                "skipping malformed trajectory line"
            ),
        }
    }
    Ok(points)
}

// Like a stream extraction of two doubles: anything after the pair is ignored.
fn parse_point(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    Some((x, y))
}
