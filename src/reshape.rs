//! Pivots a trajectory into "long" form: one record per `(t, compartment, value)`, which is
//! the shape charting libraries expect for one line per compartment.
use std::fmt::{self, Display};

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

use crate::simulator::Trajectory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
}

impl Compartment {
    /// The column name of the compartment in a wide table.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Compartment::Susceptible => "s",
            Compartment::Infected => "i",
            Compartment::Recovered => "r",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Compartment::Susceptible => "Susceptible",
            Compartment::Infected => "Infected",
            Compartment::Recovered => "Recovered",
        }
    }

    /// Line colour used when charting this compartment.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Compartment::Susceptible => "#00BFC4",
            Compartment::Infected => "#F8766D",
            Compartment::Recovered => "#7CAE00",
        }
    }
}

impl Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LongRecord {
    pub t: usize,
    pub compartment: Compartment,
    pub value: f64,
}

/// Returns `3 * trajectory.len()` records ordered by `t` and, within a step, by
/// `Susceptible`, `Infected`, `Recovered`.
#[must_use]
pub fn to_long(trajectory: &Trajectory) -> Vec<LongRecord> {
    let mut records = Vec::with_capacity(trajectory.len() * 3);
    for point in trajectory {
        for compartment in Compartment::iter() {
            records.push(LongRecord {
                t: point.t,
                compartment,
                value: point.value(compartment),
            });
        }
    }
    records
}
