pub use crate::error::SirError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::parameters::{SimulationParameters, SimulationParametersBuilder};
pub use crate::reshape::{to_long, Compartment, LongRecord};
pub use crate::simulator::{simulate, Trajectory, TrajectoryPoint};
pub use crate::threshold::{basic_reproduction_number, EpidemicOutlook};
