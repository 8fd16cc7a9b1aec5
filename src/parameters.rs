//! Simulation parameters.
//!
//! A [`SimulationParameters`] value is everything [`simulate`](crate::simulator::simulate)
//! needs. Values can be built in code with [`SimulationParametersBuilder`], read from a JSON
//! file with [`SimulationParameters::load`], or taken from [`Default`], which reproduces the
//! reference scenario: a population of 7,900,010 with 10 initial infections, β = 0.5 and
//! γ = 0.2 over 137 steps.
//!
//! Fields missing from a JSON file take their default value:
//!
//! ```json
//! { "infection_rate": 0.3, "timesteps": 60 }
//! ```
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::SirError;
use crate::threshold::basic_reproduction_number;

pub const DEFAULT_INFECTION_RATE: f64 = 0.5;
pub const DEFAULT_RECOVERY_RATE: f64 = 0.2;
pub const DEFAULT_INITIAL_SUSCEPTIBLE: f64 = 7_900_000.0;
pub const DEFAULT_INITIAL_INFECTED: f64 = 10.0;
pub const DEFAULT_INITIAL_RECOVERED: f64 = 0.0;
pub const DEFAULT_TIMESTEPS: usize = 137;

/// The range and granularity an interactive control offers for a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const INFECTION_RATE_RANGE: ParameterRange = ParameterRange {
    min: 0.1,
    max: 1.0,
    step: 0.05,
};

pub const RECOVERY_RATE_RANGE: ParameterRange = ParameterRange {
    min: 0.05,
    max: 0.5,
    step: 0.05,
};

pub const TIMESTEPS_RANGE: ParameterRange = ParameterRange {
    min: 50.0,
    max: 300.0,
    step: 10.0,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    /// β: the per-step rate at which susceptible individuals become infected.
    #[builder(default = "DEFAULT_INFECTION_RATE")]
    pub infection_rate: f64,

    /// γ: the per-step rate at which infected individuals recover.
    #[builder(default = "DEFAULT_RECOVERY_RATE")]
    pub recovery_rate: f64,

    #[builder(default = "DEFAULT_INITIAL_SUSCEPTIBLE")]
    pub initial_susceptible: f64,

    #[builder(default = "DEFAULT_INITIAL_INFECTED")]
    pub initial_infected: f64,

    #[builder(default = "DEFAULT_INITIAL_RECOVERED")]
    pub initial_recovered: f64,

    /// Number of points in the trajectory, counting the initial condition.
    #[builder(default = "DEFAULT_TIMESTEPS")]
    pub timesteps: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            infection_rate: DEFAULT_INFECTION_RATE,
            recovery_rate: DEFAULT_RECOVERY_RATE,
            initial_susceptible: DEFAULT_INITIAL_SUSCEPTIBLE,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            initial_recovered: DEFAULT_INITIAL_RECOVERED,
            timesteps: DEFAULT_TIMESTEPS,
        }
    }
}

impl SimulationParameters {
    /// Reads parameters from a JSON file. Absent fields take their default value; unknown
    /// fields are an error.
    ///
    /// # Errors
    ///
    /// Returns `SirError::IoError` if the file cannot be opened and `SirError::JsonError` if
    /// it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, SirError> {
        let file = File::open(path)?;
        let parameters = serde_json::from_reader(BufReader::new(file))?;
        Ok(parameters)
    }

    /// `N = S0 + I0 + R0`
    #[must_use]
    pub fn total_population(&self) -> f64 {
        self.initial_susceptible + self.initial_infected + self.initial_recovered
    }

    /// R₀ = β/γ for these parameters. See [`basic_reproduction_number`].
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        basic_reproduction_number(self.infection_rate, self.recovery_rate)
    }

    /// Checks the two conditions under which no trajectory can be produced.
    ///
    /// The rates are deliberately not checked: negative or very large rates run to completion
    /// and may produce proportions outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `SirError::InvalidParameters` if `timesteps` is zero or the total population is
    /// not a positive finite number.
    pub fn validate(&self) -> Result<(), SirError> {
        if self.timesteps < 1 {
            return Err(SirError::InvalidParameters(
                "timesteps must be at least 1".to_string(),
            ));
        }
        let population = self.total_population();
        if !population.is_finite() || population <= 0.0 {
            return Err(SirError::InvalidParameters(format!(
                "total population must be a positive number, got {population}"
            )));
        }
        Ok(())
    }

    /// Describes each rate that lies outside the range an interactive control would offer.
    /// Such rates are still simulated.
    #[must_use]
    pub fn unconventional_rates(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if !INFECTION_RATE_RANGE.contains(self.infection_rate) {
            messages.push(format!(
                "infection rate β = {} is outside the conventional range [{}, {}]",
                self.infection_rate, INFECTION_RATE_RANGE.min, INFECTION_RATE_RANGE.max
            ));
        }
        if !RECOVERY_RATE_RANGE.contains(self.recovery_rate) {
            messages.push(format!(
                "recovery rate γ = {} is outside the conventional range [{}, {}]",
                self.recovery_rate, RECOVERY_RATE_RANGE.min, RECOVERY_RATE_RANGE.max
            ));
        }
        messages
    }
}
