//! The SIR recurrence.
//!
//! A population of fixed size `N = S0 + I0 + R0` is split into susceptible, infected and
//! recovered proportions `s`, `i` and `r`. Starting from `(S0/N, I0/N, R0/N)`, each step
//! applies the forward-Euler discretization of the SIR equations with unit step size:
//!
//! ```text
//! s' = s − β·s·i
//! i' = i + β·s·i − γ·i
//! r' = r + γ·i
//! ```
//!
//! Every right-hand side reads the previous step's values. Mass only moves S→I→R, so
//! `s + i + r` stays at 1 up to rounding. Nothing is clamped: rates far outside `(0, 1]` can
//! push proportions below 0 or above 1, and those values are reported as computed.
use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::SirError;
use crate::log::{debug, trace};
use crate::parameters::SimulationParameters;
use crate::reshape::Compartment;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// 1-based step index.
    pub t: usize,
    pub s: f64,
    pub i: f64,
    pub r: f64,
}

impl TrajectoryPoint {
    #[must_use]
    pub fn value(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.s,
            Compartment::Infected => self.i,
            Compartment::Recovered => self.r,
        }
    }

    /// `s + i + r`, which the recurrence keeps at 1.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.s + self.i + self.r
    }

    /// Computes the following step. The operation order is fixed so that results are
    /// reproducible bit for bit.
    fn next(&self, infection_rate: f64, recovery_rate: f64) -> TrajectoryPoint {
        let TrajectoryPoint { t, s, i, r } = *self;
        TrajectoryPoint {
            t: t + 1,
            s: s - infection_rate * s * i,
            i: i + infection_rate * s * i - recovery_rate * i,
            r: r + recovery_rate * i,
        }
    }
}

/// The points of one simulation run in ascending `t`. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a trajectory holds at least the initial condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }

    /// The initial condition.
    #[must_use]
    pub fn first(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    /// Looks up a point by its 1-based step index.
    #[must_use]
    pub fn get(&self, t: usize) -> Option<&TrajectoryPoint> {
        t.checked_sub(1).and_then(|index| self.points.get(index))
    }

    /// The point with the largest infected proportion, the earliest one on ties.
    #[must_use]
    pub fn peak_infected(&self) -> &TrajectoryPoint {
        let mut peak = self.first();
        for point in &self.points[1..] {
            if point.i > peak.i {
                peak = point;
            }
        }
        peak
    }

    /// The largest deviation of `s + i + r` from 1 over all points.
    #[must_use]
    pub fn max_conservation_error(&self) -> f64 {
        self.points
            .iter()
            .map(|point| (point.total() - 1.0).abs())
            .fold(0.0, f64::max)
    }
}

impl Index<usize> for Trajectory {
    type Output = TrajectoryPoint;

    /// Indexes by 0-based position, like a slice.
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Runs the SIR recurrence for `parameters.timesteps` points, the first of which is the
/// initial condition.
///
/// # Errors
///
/// Returns `SirError::InvalidParameters` without computing anything if `timesteps` is zero or
/// the total population is not positive. Rates are never rejected.
pub fn simulate(parameters: &SimulationParameters) -> Result<Trajectory, SirError> {
    parameters.validate()?;

    let &SimulationParameters {
        infection_rate,
        recovery_rate,
        initial_susceptible,
        initial_infected,
        initial_recovered,
        timesteps,
    } = parameters;
    let population = parameters.total_population();
    debug!(
        "simulating {} steps with β = {}, γ = {}, N = {}",
        timesteps, infection_rate, recovery_rate, population
    );

    let mut points = Vec::with_capacity(timesteps);
    let mut point = TrajectoryPoint {
        t: 1,
        s: initial_susceptible / population,
        i: initial_infected / population,
        r: initial_recovered / population,
    };
    points.push(point);
    for _ in 1..timesteps {
        point = point.next(infection_rate, recovery_rate);
        trace!(
            "t = {}: s = {}, i = {}, r = {}",
            point.t,
            point.s,
            point.i,
            point.r
        );
        points.push(point);
    }

    Ok(Trajectory { points })
}
