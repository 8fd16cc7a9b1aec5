//! Epidemic threshold queries.
//!
//! The number of infected grows while `di/dt = β·s·i − γ·i > 0`, that is while
//! `β·s/γ > 1`. At the onset of an outbreak nearly everyone is susceptible (`s ≈ 1`), which
//! gives the classical condition `R₀ = β/γ > 1`. None of these functions needs a trajectory.
use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::Serialize;

/// The basic reproduction number `R₀ = β/γ`.
///
/// Plain IEEE division: a zero recovery rate yields an infinity (or NaN when both rates are
/// zero) rather than an error.
#[must_use]
pub fn basic_reproduction_number(infection_rate: f64, recovery_rate: f64) -> f64 {
    infection_rate / recovery_rate
}

/// The effective reproduction number `β·s/γ` for a susceptible proportion `s`.
#[must_use]
pub fn effective_reproduction_number(
    infection_rate: f64,
    recovery_rate: f64,
    susceptible: f64,
) -> f64 {
    infection_rate * susceptible / recovery_rate
}

/// Proportion of the population that must be immune before `R₀` infections per case stop
/// sustaining growth: `1 − 1/R₀`. Zero when `R₀ ≤ 1`.
#[must_use]
pub fn herd_immunity_threshold(r0: f64) -> f64 {
    if r0 > 1.0 {
        1.0 - 1.0 / r0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EpidemicOutlook {
    /// Reproduction number above 1: infections increase.
    Growing,
    /// Reproduction number exactly 1.
    Steady,
    /// Reproduction number below 1: the outbreak dies out.
    Declining,
}

impl EpidemicOutlook {
    /// Classifies a reproduction number. Returns `None` for NaN.
    #[must_use]
    pub fn from_reproduction_number(reproduction_number: f64) -> Option<Self> {
        reproduction_number
            .partial_cmp(&1.0)
            .map(|ordering| match ordering {
                Ordering::Greater => EpidemicOutlook::Growing,
                Ordering::Equal => EpidemicOutlook::Steady,
                Ordering::Less => EpidemicOutlook::Declining,
            })
    }

    #[must_use]
    pub fn is_epidemic(self) -> bool {
        self == EpidemicOutlook::Growing
    }
}

impl Display for EpidemicOutlook {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            EpidemicOutlook::Growing => "growing epidemic",
            EpidemicOutlook::Steady => "at the epidemic threshold",
            EpidemicOutlook::Declining => "dying out",
        };
        write!(f, "{description}")
    }
}
