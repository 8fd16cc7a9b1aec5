//! A deterministic, discrete-time SIR epidemic simulator
//!
//! A fixed population is split into three pools: susceptible, infected and recovered (or
//! removed). Given an infection rate β, a recovery rate γ, the initial size of each pool and a
//! number of steps, [`simulate`](simulator::simulate) produces the proportion of the
//! population in each pool at every step using the forward-Euler form of the Kermack-McKendrick
//! equations:
//!
//! ```rust
//! use ixa_sir::prelude::*;
//!
//! let parameters = SimulationParametersBuilder::default()
//!     .infection_rate(0.5)
//!     .recovery_rate(0.2)
//!     .timesteps(3)
//!     .build()
//!     .unwrap();
//! let trajectory = simulate(&parameters).unwrap();
//! assert_eq!(trajectory.len(), 3);
//! assert!(parameters.basic_reproduction_number() > 1.0);
//! ```
//!
//! The crate is organized as:
//! * [`parameters`]: the parameter value, its defaults and JSON loading
//! * [`simulator`]: the recurrence and the resulting [`Trajectory`](simulator::Trajectory)
//! * [`threshold`]: reproduction numbers and the epidemic threshold, no simulation needed
//! * [`reshape`]: the long, one-row-per-compartment form used for charting
//! * [`report`]: CSV tables and chart titles
//! * [`runner`]: the command line entry point
pub mod error;
pub mod log;
pub mod numeric;
pub mod parameters;
pub mod prelude;
pub mod report;
pub mod reshape;
pub mod runner;
pub mod simulator;
pub mod threshold;

mod macros;

pub use error::SirError;
pub use crate::log::{debug, error, info, trace, warn};
