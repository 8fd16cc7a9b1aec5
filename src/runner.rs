use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::error::SirError;
use crate::log::{debug, info, warn, LevelFilter, LogLevelSpec};
use crate::parameters::SimulationParameters;
use crate::report::{chart_title, write_long_csv, write_trajectory_csv};
use crate::reshape::to_long;
use crate::simulator::{simulate, Trajectory};
use crate::threshold::{herd_immunity_threshold, EpidemicOutlook};

/// Shape of the table written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// One row per step: `t,s,i,r`
    #[default]
    Wide,
    /// One row per step and compartment: `t,variable,value,Population`
    Long,
}

/// Command line arguments of the `ixa-sir` runner
#[derive(Parser, Debug, Default)]
#[command(name = "ixa-sir")]
#[command(about = "Simulates a deterministic SIR epidemic and prints the trajectory as CSV")]
#[command(allow_negative_numbers = true)]
pub struct BaseArgs {
    /// Optional path for a JSON parameters file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Infection rate β
    #[arg(long)]
    pub beta: Option<f64>,

    /// Recovery rate γ
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Initial number of susceptible individuals
    #[arg(long)]
    pub susceptible: Option<f64>,

    /// Initial number of infected individuals
    #[arg(long)]
    pub infected: Option<f64>,

    /// Initial number of recovered individuals
    #[arg(long)]
    pub recovered: Option<f64>,

    /// Number of steps, counting the initial condition
    #[arg(short, long)]
    pub timesteps: Option<usize>,

    /// Table layout
    #[arg(short, long, value_enum, default_value_t = TableFormat::Wide)]
    pub format: TableFormat,

    /// Log levels, e.g. `info` or `info,ixa_sir::simulator=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl BaseArgs {
    /// Builds the parameters: defaults, then the config file, then individual flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn parameters(&self) -> Result<SimulationParameters, SirError> {
        let mut parameters = match &self.config {
            Some(path) => {
                info!("Loading parameters from: {}", path.display());
                SimulationParameters::load(path)?
            }
            None => SimulationParameters::default(),
        };

        if let Some(beta) = self.beta {
            parameters.infection_rate = beta;
        }
        if let Some(gamma) = self.gamma {
            parameters.recovery_rate = gamma;
        }
        if let Some(susceptible) = self.susceptible {
            parameters.initial_susceptible = susceptible;
        }
        if let Some(infected) = self.infected {
            parameters.initial_infected = infected;
        }
        if let Some(recovered) = self.recovered {
            parameters.initial_recovered = recovered;
        }
        if let Some(timesteps) = self.timesteps {
            parameters.timesteps = timesteps;
        }
        Ok(parameters)
    }

    /// The global level implied by `-v`: warnings by default, then info, debug and trace.
    fn verbosity_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Applies `-v` and then `--log-level`, so that an explicit level wins.
fn configure_logging(args: &BaseArgs) -> Result<(), SirError> {
    LogLevelSpec {
        global: Some(args.verbosity_level()),
        modules: Vec::new(),
    }
    .apply();

    if let Some(spec) = &args.log_level {
        let spec: LogLevelSpec = spec.parse()?;
        spec.apply();
        for (module, level) in &spec.modules {
            info!("Logging enabled for {} at level {}", module, level);
        }
    }
    Ok(())
}

fn log_threshold(parameters: &SimulationParameters) {
    for message in parameters.unconventional_rates() {
        warn!("{}", message);
    }

    let r0 = parameters.basic_reproduction_number();
    match EpidemicOutlook::from_reproduction_number(r0) {
        Some(outlook) => info!("R0 = {:.2} ({})", r0, outlook),
        None => warn!("R0 is undefined for β = 0 and γ = 0"),
    }
    if r0 > 1.0 {
        info!(
            "herd immunity threshold: {:.1}% of the population",
            100.0 * herd_immunity_threshold(r0)
        );
    }
}

/// Runs a simulation described by `args` and writes the resulting table to `output`.
///
/// Returns the trajectory so that callers can inspect it further.
///
/// # Errors
///
/// Returns an error if the log level spec or the parameters file is invalid, the parameters
/// cannot be simulated, or writing the table fails.
pub fn run_with_args<W: Write>(args: &BaseArgs, output: W) -> Result<Trajectory, SirError> {
    configure_logging(args)?;

    let parameters = args.parameters()?;
    debug!("{}", chart_title(&parameters));
    log_threshold(&parameters);

    let trajectory = simulate(&parameters)?;
    let peak = trajectory.peak_infected();
    info!(
        "infections peak at t = {} with {:.2}% infected",
        peak.t,
        100.0 * peak.i
    );

    match args.format {
        TableFormat::Wide => write_trajectory_csv(output, &trajectory)?,
        TableFormat::Long => write_long_csv(output, &to_long(&trajectory))?,
    }
    Ok(trajectory)
}
