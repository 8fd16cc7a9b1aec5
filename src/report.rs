//! Tabular output for charting collaborators.
//!
//! Tables are written as CSV to any [`std::io::Write`]. Nothing here touches the file system;
//! the caller decides where the rows go.
use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::error::SirError;
use crate::parameters::SimulationParameters;
use crate::reshape::LongRecord;
use crate::simulator::Trajectory;

/// A row of the long table: `t,variable,value,Population`.
#[derive(Serialize)]
struct LongRow {
    t: usize,
    variable: &'static str,
    value: f64,
    #[serde(rename = "Population")]
    population: &'static str,
}

impl From<&LongRecord> for LongRow {
    fn from(record: &LongRecord) -> Self {
        LongRow {
            t: record.t,
            variable: record.compartment.short_name(),
            value: record.value,
            population: record.compartment.label(),
        }
    }
}

fn write_rows<W, R, I>(writer: W, rows: I) -> Result<(), SirError>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut writer = Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the trajectory with header `t,s,i,r`, one row per step.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_trajectory_csv<W: Write>(
    writer: W,
    trajectory: &Trajectory,
) -> Result<(), SirError> {
    write_rows(writer, trajectory.iter())
}

/// Writes long records with header `t,variable,value,Population`, where `variable` is the
/// compartment's column name and `Population` its label.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_long_csv<W: Write>(writer: W, records: &[LongRecord]) -> Result<(), SirError> {
    write_rows(writer, records.iter().map(LongRow::from))
}

/// Chart title embedding the current rates, e.g. `SIR Simulation (β = 0.50, γ = 0.20)`.
#[must_use]
pub fn chart_title(parameters: &SimulationParameters) -> String {
    format!(
        "SIR Simulation (β = {:.2}, γ = {:.2})",
        parameters.infection_rate, parameters.recovery_rate
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reshape::to_long;
    use crate::simulator::{simulate, TrajectoryPoint};

    fn small_parameters() -> SimulationParameters {
        SimulationParameters {
            initial_susceptible: 3.0,
            initial_infected: 1.0,
            initial_recovered: 0.0,
            timesteps: 3,
            ..SimulationParameters::default()
        }
    }

    #[test]
    fn trajectory_csv_round_trips() {
        let trajectory = simulate(&small_parameters()).unwrap();
        let mut buffer = Vec::new();
        write_trajectory_csv(&mut buffer, &trajectory).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("t,s,i,r\n1,0.75,0.25,0.0\n"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<TrajectoryPoint> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, trajectory.points());
    }

    #[test]
    fn long_csv_layout() {
        let trajectory = simulate(&small_parameters()).unwrap();
        let mut buffer = Vec::new();
        write_long_csv(&mut buffer, &to_long(&trajectory)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 3 * 3);
        assert_eq!(lines[0], "t,variable,value,Population");
        assert_eq!(lines[1], "1,s,0.75,Susceptible");
        assert_eq!(lines[2], "1,i,0.25,Infected");
        assert_eq!(lines[3], "1,r,0.0,Recovered");
        assert!(lines[4].starts_with("2,s,"));
    }

    #[test]
    fn title_uses_two_decimals() {
        assert_eq!(
            chart_title(&SimulationParameters::default()),
            "SIR Simulation (β = 0.50, γ = 0.20)"
        );
        let parameters = SimulationParameters {
            infection_rate: 0.124,
            recovery_rate: 0.05,
            ..SimulationParameters::default()
        };
        assert_eq!(chart_title(&parameters), "SIR Simulation (β = 0.12, γ = 0.05)");
    }
}
